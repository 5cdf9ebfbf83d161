use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;

use crate::engine::Document;
use crate::errors::Error;
use crate::pause;
use crate::tweens::{Props, Tween, TweenOptions};
use crate::utils::{task, EventHandler, EventManager, TaskHandler};

/// Lists all events a [`Timeline`] can emit/listen.
pub enum TimelineEvent {
    /// Triggered when the release loop starts.
    OnStart,
    /// Triggered when a scheduled tween is released.
    OnRelease,
    /// Triggered when every scheduled tween has been released.
    OnComplete,
}

/// Convert events to string to facilitate usage with [`EventManager`].
impl From<TimelineEvent> for String {
    fn from(event: TimelineEvent) -> Self {
        let event = match event {
            TimelineEvent::OnStart => "start",
            TimelineEvent::OnRelease => "release",
            TimelineEvent::OnComplete => "complete",
        };
        event.into()
    }
}

// ########################################

/// Inner bookkeeping for one tween registered on a timeline.
#[derive(Clone, Debug)]
struct ScheduledTween {
    /// The registered tween, kept paused until released.
    tween: Tween,
    /// Duration used for chaining the successor, in seconds.
    duration: f64,
    /// Extra offset on the release threshold, in seconds.
    offset: f64,
    /// Time at which the tween chain-starts, in milliseconds from the timeline origin.
    start_timestamp: f64,
    /// Whether the tween has been released; never reverts.
    released: bool,
}

/// Represents an ordered sequence of tweens released over a shared clock.
///
/// Tweens registered through [`Timeline::from`], [`Timeline::to`] and
/// [`Timeline::from_to`] are scheduled paused and chained: each entry becomes eligible
/// when its immediate predecessor's start time plus duration has elapsed, shifted by
/// the entry's own `offset`. A release loop polls the clock at the timeline `fps`
/// cadence and plays every tween whose threshold is reached, then stops on its own
/// once all of them run. Registering more tweens afterward starts a fresh clock.
///
/// # Example
/// ```
/// use tweenline::engine::Document;
/// use tweenline::errors::Error;
/// use tweenline::props;
/// use tweenline::tweens::{Timeline, TweenOptions};
///
/// fn intro(document: &dyn Document) -> Result<Timeline, Error> {
///     let timeline = Timeline::new(document);
///     timeline.from(".title", props! { y: -20, opacity: 0 }, TweenOptions::with_duration(0.5))?;
///     timeline.from(".card", props! { scale: 0.8 }, TweenOptions::with_duration(0.5).set_offset(0.25))?;
///     Ok(timeline)
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Timeline {
    /// The document target elements are resolved from.
    document: Box<dyn Document>,
    /// Polling cadence of the release loop, in frames per second (default: 60).
    fps: u8,

    // ########################################
    // # Volatile utility data.
    /// Registered tweens, in insertion order.
    sequence: Arc<RwLock<Vec<ScheduledTween>>>,
    /// Instant the running clock started from.
    clock_origin: Arc<RwLock<Option<Instant>>>,
    /// Inner handler to the task running the release loop.
    poll_handle: Arc<RwLock<Option<TaskHandler>>>,
    /// The event manager for the timeline.
    events: EventManager,
}

// ########################################

impl Timeline {
    /// Creates a new empty timeline over the given document.
    pub fn new(document: &dyn Document) -> Self {
        Self {
            document: dyn_clone::clone_box(document),
            fps: 60,
            sequence: Arc::new(RwLock::new(vec![])),
            clock_origin: Arc::new(RwLock::new(None)),
            poll_handle: Arc::new(RwLock::new(None)),
            events: Default::default(),
        }
    }

    /// Registers a tween running from `start_props` to the element's current state.
    ///
    /// The tween is scheduled paused and released by the timeline once due. Returns
    /// the registered tween so the caller can keep controlling it.
    pub fn from<S: Into<String>>(
        &self,
        selector: S,
        start_props: Props,
        options: TweenOptions,
    ) -> Result<Tween, Error> {
        let mut tween = Tween::new(self.document.as_ref(), selector)
            .set_start_props(start_props)
            .set_options(&options);
        tween.set_from()?;
        self.register(tween.clone(), &options)?;
        Ok(tween)
    }

    /// Registers a tween running from the element's current state to `end_props`.
    ///
    /// The tween is scheduled paused and released by the timeline once due.
    pub fn to<S: Into<String>>(
        &self,
        selector: S,
        end_props: Props,
        options: TweenOptions,
    ) -> Result<Tween, Error> {
        let mut tween = Tween::new(self.document.as_ref(), selector)
            .set_end_props(end_props)
            .set_options(&options);
        tween.set_to()?;
        self.register(tween.clone(), &options)?;
        Ok(tween)
    }

    /// Registers a tween running from `start_props` to `end_props`.
    ///
    /// The tween is scheduled paused and released by the timeline once due.
    pub fn from_to<S: Into<String>>(
        &self,
        selector: S,
        start_props: Props,
        end_props: Props,
        options: TweenOptions,
    ) -> Result<Tween, Error> {
        let mut tween = Tween::new(self.document.as_ref(), selector)
            .set_start_props(start_props)
            .set_end_props(end_props)
            .set_options(&options);
        tween.set_from_to()?;
        self.register(tween.clone(), &options)?;
        Ok(tween)
    }

    /// Indicates whether the release loop is currently running.
    pub fn is_playing(&self) -> bool {
        self.poll_handle.read().is_some()
    }

    pub fn get_fps(&self) -> u8 {
        self.fps
    }

    /// Sets the polling cadence of the release loop, in frames per second.
    pub fn set_fps(mut self, fps: u8) -> Self {
        self.fps = fps;
        self
    }

    /// Inner helper: appends the tween to the sequence and ensures the loop runs.
    fn register(&self, tween: Tween, options: &TweenOptions) -> Result<(), Error> {
        self.sequence.write().push(ScheduledTween {
            tween,
            duration: options.get_duration(),
            offset: options.get_offset(),
            start_timestamp: 0.0,
            released: false,
        });
        self.start_loop()
    }

    /// Inner helper: starts the release loop unless one is already running.
    ///
    /// The handle lock is held across the idle check, the spawn and the store so a
    /// concurrent registration cannot observe a stale idle state and start twice.
    fn start_loop(&self) -> Result<(), Error> {
        let mut poll_handle = self.poll_handle.write();
        if poll_handle.is_some() {
            return Ok(());
        }

        *self.clock_origin.write() = Some(Instant::now());
        log::debug!("Timeline loop started [fps={}]", self.fps);
        self.events.emit(TimelineEvent::OnStart, self.clone());

        let events_clone = self.events.clone();
        let self_clone = self.clone();
        let frame = 1000 / self.fps.max(1) as u64;

        let result = task::run(async move {
            loop {
                // Stop for good once every registered tween has been released. The
                // handle lock is taken before the check so a registration racing this
                // branch either sees the loop still running or restarts it cleanly.
                {
                    let mut poll_handle = self_clone.poll_handle.write();
                    if self_clone
                        .sequence
                        .read()
                        .iter()
                        .all(|scheduled| scheduled.released)
                    {
                        *poll_handle = None;
                        *self_clone.clock_origin.write() = None;
                        drop(poll_handle);
                        log::debug!("Timeline loop stopped: all tweens released");
                        events_clone.emit(TimelineEvent::OnComplete, self_clone.clone());
                        return Ok(());
                    }
                }

                pause!(frame);

                let elapsed = match *self_clone.clock_origin.read() {
                    None => 0.0,
                    Some(origin) => origin.elapsed().as_millis() as f64,
                };

                let due = {
                    let mut sequence = self_clone.sequence.write();
                    release_due(&mut sequence, elapsed)
                };
                match due {
                    Ok(released) => {
                        for tween in released {
                            events_clone.emit(TimelineEvent::OnRelease, tween);
                        }
                    }
                    Err(error) => {
                        *self_clone.poll_handle.write() = None;
                        *self_clone.clock_origin.write() = None;
                        log::debug!("Timeline loop stopped: release failed");
                        return Err(error);
                    }
                }
            }
        });

        match result {
            Ok(handler) => {
                *poll_handle = Some(handler);
                Ok(())
            }
            Err(error) => {
                *self.clock_origin.write() = None;
                Err(error)
            }
        }
    }

    // ########################################
    // Event related functions

    /// Registers a callback to be executed on a given event.
    ///
    /// Available events for a timeline are defined by the enum [`TimelineEvent`]:
    /// - **`OnStart` | `start`**: Triggered when the release loop starts.
    ///    _The callback must receive the following parameter: `|_: Timeline| { ... }`_
    /// - **`OnRelease` | `release`**: Triggered when a scheduled tween is released.
    ///    _The callback must receive the following parameter: `|_: Tween| { ... }`_
    /// - **`OnComplete` | `complete`**: Triggered when every scheduled tween has been released.
    ///    _The callback must receive the following parameter: `|_: Timeline| { ... }`_
    ///
    /// # Example
    /// ```
    /// use tweenline::engine::Document;
    /// use tweenline::errors::Error;
    /// use tweenline::props;
    /// use tweenline::tweens::{Timeline, TimelineEvent, Tween, TweenOptions};
    ///
    /// fn register(document: &dyn Document) -> Result<(), Error> {
    ///     let timeline = Timeline::new(document);
    ///     timeline.on(TimelineEvent::OnRelease, |tween: Tween| async move {
    ///         println!("released: {}", tween);
    ///         Ok(())
    ///     });
    ///     timeline.from(".card", props! { opacity: 0 }, TweenOptions::with_duration(0.5))?;
    ///     Ok(())
    /// }
    /// ```
    pub fn on<S, F, T, Fut>(&self, event: S, callback: F) -> EventHandler
    where
        S: Into<String>,
        T: 'static + Send + Sync + Clone,
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Result<(), Error>> + Send + 'static,
    {
        self.events.on(event, callback)
    }
}

/// Scans the sequence in order and plays every tween whose threshold has been reached,
/// returning the tweens released by this scan.
///
/// Thresholds chain on the immediate predecessor: entry `i > 0` starts at entry
/// `i - 1`'s start time plus its duration, recomputed fresh on every scan. Released
/// entries are skipped and keep their last computed start time.
fn release_due(sequence: &mut [ScheduledTween], elapsed: f64) -> Result<Vec<Tween>, Error> {
    let mut released = vec![];
    for index in 0..sequence.len() {
        if sequence[index].released {
            continue;
        }
        if index != 0 {
            sequence[index].start_timestamp =
                sequence[index - 1].start_timestamp + sequence[index - 1].duration * 1000.0;
        }
        if elapsed >= sequence[index].start_timestamp + sequence[index].offset * 1000.0 {
            sequence[index].tween.play()?;
            sequence[index].released = true;
            released.push(sequence[index].tween.clone());
        }
    }
    Ok(released)
}

impl Display for Timeline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sequence = self.sequence.read();
        writeln!(
            f,
            "Timeline [tweens={}, fps={}, playing={}]",
            sequence.len(),
            self.fps,
            self.is_playing()
        )?;
        for scheduled in sequence.iter() {
            writeln!(
                f,
                "  {} [duration={}s, offset={}s, released={}]",
                scheduled.tween, scheduled.duration, scheduled.offset, scheduled.released
            )?;
        }
        write!(f, "")
    }
}
