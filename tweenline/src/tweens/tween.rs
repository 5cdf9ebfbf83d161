use std::fmt::{Display, Formatter};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::engine::{Document, Element, FillMode, Job, JobOptions, Keyframe};
use crate::errors::{Error, Unknown};
use crate::tweens::props::{compose_transform, opacity_value};
use crate::tweens::{snapshot, Easing, Props};

/// Lists all options a tween can be scheduled with.
///
/// The two most common single-option cases have shorthand constructors:
/// [`TweenOptions::with_duration`] and [`TweenOptions::with_delay`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TweenOptions {
    /// Duration of the interpolation, in seconds (default: 1).
    duration: f64,
    /// Delay before the interpolation starts, in seconds (default: 0).
    delay: f64,
    /// Extra offset on the release threshold when scheduled on a [`Timeline`](crate::tweens::Timeline), in seconds (default: 0).
    offset: f64,
    /// Easing curve of the interpolation (default: [`Easing::EaseOut`]).
    easing: Easing,
}

impl Default for TweenOptions {
    fn default() -> Self {
        Self {
            duration: 1.0,
            delay: 0.0,
            offset: 0.0,
            easing: Easing::default(),
        }
    }
}

impl TweenOptions {
    /// Creates options with the given duration (seconds) and all other defaults.
    pub fn with_duration(duration: f64) -> Self {
        TweenOptions::default().set_duration(duration)
    }

    /// Creates options with the given delay (seconds) and all other defaults.
    pub fn with_delay(delay: f64) -> Self {
        TweenOptions::default().set_delay(delay)
    }

    pub fn get_duration(&self) -> f64 {
        self.duration
    }
    pub fn get_delay(&self) -> f64 {
        self.delay
    }
    pub fn get_offset(&self) -> f64 {
        self.offset
    }
    pub fn get_easing(&self) -> &Easing {
        &self.easing
    }

    pub fn set_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }
    pub fn set_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }
    pub fn set_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }
    pub fn set_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

// ########################################

/// Represents a single transition of one element between two visual states.
///
/// A tween is declared with a target selector and the properties of its start and/or
/// end state, then scheduled with one of [`Tween::set_from`], [`Tween::set_to`] or
/// [`Tween::set_from_to`]. Scheduling resolves the element, fills the missing side
/// from the element's computed style when needed, and creates the underlying engine
/// job in a paused state. The tween can then be played, paused and polled for
/// completion through the job handle it keeps.
#[derive(Clone, Debug)]
pub struct Tween {
    /// The document the target element is resolved from.
    document: Box<dyn Document>,
    /// Selector of the animated element.
    selector: String,
    /// Declared (or snapshotted) start state.
    start_props: Props,
    /// Declared (or snapshotted) end state.
    end_props: Props,
    /// Duration of the interpolation, in seconds.
    duration: f64,
    /// Delay before the interpolation starts, in seconds.
    delay: f64,
    /// Easing curve of the interpolation.
    easing: Easing,

    // ########################################
    // # Volatile utility data.
    /// Inner handle to the engine job driving the element (shared across clones).
    job: Arc<RwLock<Option<Box<dyn Job>>>>,
}

// ########################################

impl Tween {
    /// Creates a new tween for the element matching `selector` in the given document.
    pub fn new<S: Into<String>>(document: &dyn Document, selector: S) -> Self {
        Self {
            document: dyn_clone::clone_box(document),
            selector: selector.into(),
            start_props: Props::new(),
            end_props: Props::new(),
            duration: 1.0,
            delay: 0.0,
            easing: Easing::default(),
            job: Arc::new(RwLock::new(None)),
        }
    }

    /// Schedules the tween to run from `start_props` to the element's current state.
    ///
    /// The end state is captured from the element's computed style for every property
    /// named in `start_props`, then the element is immediately primed with the start
    /// transform (inline `transform-origin` and `transform`). The engine job is
    /// created paused.
    pub fn set_from(&mut self) -> Result<&mut Self, Error> {
        let mut element = self.document.query(&self.selector)?;
        self.end_props = snapshot::capture(element.as_ref(), &self.start_props);

        element.set_inline_style("transform-origin", "center");
        element.set_inline_style("transform", &compose_transform(&self.start_props));

        let keyframes = vec![
            Self::keyframe_for(&self.start_props),
            Self::keyframe_for(&self.end_props),
        ];
        self.schedule(element.as_mut(), keyframes)
    }

    /// Schedules the tween to run from the element's current state to `end_props`.
    ///
    /// The start state is captured from the element's computed style for every
    /// property named in `end_props`, and the element is immediately primed with the
    /// end transform. The opacity of both frames is pinned to the captured start
    /// opacity. The engine job is created paused.
    pub fn set_to(&mut self) -> Result<&mut Self, Error> {
        let mut element = self.document.query(&self.selector)?;
        self.start_props = snapshot::capture(element.as_ref(), &self.end_props);

        element.set_inline_style("transform-origin", "center");
        element.set_inline_style("transform", &compose_transform(&self.end_props));

        let pinned_opacity = opacity_value(self.start_props.get("opacity"));
        let keyframes = vec![
            Self::keyframe_for(&self.start_props),
            Self::keyframe_for(&self.end_props).set("opacity", pinned_opacity),
        ];
        self.schedule(element.as_mut(), keyframes)
    }

    /// Schedules the tween to run from `start_props` to `end_props`.
    ///
    /// No state is captured: both sides are taken as declared. The element is primed
    /// with the start transform and opacity, and the first frame is left empty so the
    /// engine interpolates from that primed state. The engine job is created paused.
    pub fn set_from_to(&mut self) -> Result<&mut Self, Error> {
        let mut element = self.document.query(&self.selector)?;

        element.set_inline_style("transform-origin", "center");
        element.set_inline_style("transform", &compose_transform(&self.start_props));
        element.set_inline_style("opacity", &opacity_value(self.start_props.get("opacity")));

        let keyframes = vec![Keyframe::new(), Self::keyframe_for(&self.end_props)];
        self.schedule(element.as_mut(), keyframes)
    }

    /// Starts or resumes the underlying engine job.
    pub fn play(&self) -> Result<&Self, Error> {
        match self.job.write().as_mut() {
            Some(job) => job.play()?,
            None => {
                return Err(Unknown {
                    info: String::from("the tween has not been scheduled"),
                })
            }
        }
        Ok(self)
    }

    /// Pauses the underlying engine job.
    pub fn pause(&self) -> Result<&Self, Error> {
        match self.job.write().as_mut() {
            Some(job) => job.pause()?,
            None => {
                return Err(Unknown {
                    info: String::from("the tween has not been scheduled"),
                })
            }
        }
        Ok(self)
    }

    /// Indicates whether the engine job has run to completion.
    ///
    /// An unscheduled tween is never finished.
    pub fn is_finished(&self) -> bool {
        match self.job.read().as_ref() {
            None => false,
            Some(job) => job.is_finished(),
        }
    }

    /// Inner helper: serializes a property bag into a full engine keyframe.
    fn keyframe_for(props: &Props) -> Keyframe {
        Keyframe::new()
            .set("transform-origin", "center")
            .set("transform", compose_transform(props))
            .set("opacity", opacity_value(props.get("opacity")))
    }

    /// Inner helper: creates the engine job for the given keyframes, paused.
    fn schedule(
        &mut self,
        element: &mut dyn Element,
        keyframes: Vec<Keyframe>,
    ) -> Result<&mut Self, Error> {
        let mut job = element.animate(keyframes, self.job_options())?;
        job.pause()?;
        *self.job.write() = Some(job);
        Ok(self)
    }

    /// Inner helper: converts the tween settings into engine job options.
    fn job_options(&self) -> JobOptions {
        JobOptions {
            duration: self.duration * 1000.0,
            delay: self.delay * 1000.0,
            fill: FillMode::Forwards,
            easing: self.easing.as_css().into(),
        }
    }

    // ########################################

    pub fn get_selector(&self) -> &str {
        &self.selector
    }
    pub fn get_start_props(&self) -> &Props {
        &self.start_props
    }
    pub fn get_end_props(&self) -> &Props {
        &self.end_props
    }
    pub fn get_duration(&self) -> f64 {
        self.duration
    }
    pub fn get_delay(&self) -> f64 {
        self.delay
    }
    pub fn get_easing(&self) -> &Easing {
        &self.easing
    }

    /// Sets the declared start state.
    pub fn set_start_props(mut self, props: Props) -> Self {
        self.start_props = props;
        self
    }
    /// Sets the declared end state.
    pub fn set_end_props(mut self, props: Props) -> Self {
        self.end_props = props;
        self
    }
    /// Sets the duration of the interpolation, in seconds.
    pub fn set_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }
    /// Sets the delay before the interpolation starts, in seconds.
    pub fn set_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }
    /// Sets the easing curve of the interpolation.
    pub fn set_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
    /// Sets duration, delay and easing at once from the given options.
    pub fn set_options(mut self, options: &TweenOptions) -> Self {
        self.duration = options.get_duration();
        self.delay = options.get_delay();
        self.easing = options.get_easing().clone();
        self
    }
}

impl Display for Tween {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tween [selector={}, duration={}s, delay={}s, easing={}, from={}, to={}]",
            self.selector,
            self.duration,
            self.delay,
            self.easing,
            self.start_props,
            self.end_props
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::document::{MockDocument, MockElement};
    use crate::props;

    fn create_document() -> MockDocument {
        MockDocument::new().with_element(
            ".card",
            MockElement::new()
                .with_computed_style("opacity", "0.35")
                .with_computed_style("x", "12px"),
        )
    }

    #[test]
    fn test_tween_options() {
        let options = TweenOptions::default();
        assert_eq!(options.get_duration(), 1.0);
        assert_eq!(options.get_delay(), 0.0);
        assert_eq!(options.get_offset(), 0.0);
        assert_eq!(options.get_easing(), &Easing::EaseOut);

        assert_eq!(TweenOptions::with_duration(0.5).get_duration(), 0.5);
        assert_eq!(TweenOptions::with_delay(0.25).get_delay(), 0.25);

        let options = TweenOptions::default()
            .set_duration(2.0)
            .set_delay(0.1)
            .set_offset(0.75)
            .set_easing(Easing::Power4Out);
        assert_eq!(options.get_duration(), 2.0);
        assert_eq!(options.get_delay(), 0.1);
        assert_eq!(options.get_offset(), 0.75);
        assert_eq!(options.get_easing(), &Easing::Power4Out);
    }

    #[test]
    fn test_tween_builders() {
        let document = create_document();
        let tween = Tween::new(&document, ".card");
        assert_eq!(tween.get_selector(), ".card");
        assert!(tween.get_start_props().is_empty());
        assert!(tween.get_end_props().is_empty());
        assert_eq!(tween.get_duration(), 1.0);
        assert_eq!(tween.get_delay(), 0.0);
        assert_eq!(tween.get_easing(), &Easing::EaseOut);

        let tween = tween
            .set_start_props(props! { x: -40 })
            .set_end_props(props! { x: 0 })
            .set_duration(0.5)
            .set_delay(0.2)
            .set_easing(Easing::Linear);
        assert_eq!(tween.get_start_props(), &props! { x: -40 });
        assert_eq!(tween.get_end_props(), &props! { x: 0 });
        assert_eq!(tween.get_duration(), 0.5);
        assert_eq!(tween.get_delay(), 0.2);
        assert_eq!(tween.get_easing(), &Easing::Linear);

        let options = TweenOptions::with_duration(2.0).set_easing(Easing::Ease);
        let tween = tween.set_options(&options);
        assert_eq!(tween.get_duration(), 2.0);
        assert_eq!(tween.get_delay(), 0.0);
        assert_eq!(tween.get_easing(), &Easing::Ease);
    }

    #[test]
    fn test_set_from() {
        let document = create_document();
        let mut tween = Tween::new(&document, ".card").set_start_props(props! { x: -40, opacity: 0 });
        tween.set_from().unwrap();

        // The end state is captured from the computed style of the declared names.
        assert_eq!(tween.get_end_props(), &props! { opacity: "0.35", x: "12px" });

        let element = document.get_element(".card").unwrap();
        assert_eq!(
            element.get_inline_style("transform-origin"),
            Some(String::from("center"))
        );
        assert_eq!(
            element.get_inline_style("transform"),
            Some(String::from("translate(-40px, 0) scale(1) rotate(0deg)"))
        );
        assert_eq!(element.get_inline_style("opacity"), None);

        let jobs = element.get_jobs();
        assert_eq!(jobs.len(), 1);
        assert!(!jobs[0].is_playing());
        assert_eq!(jobs[0].get_play_count(), 0);
        assert_eq!(jobs[0].get_pause_count(), 1);

        let keyframes = jobs[0].get_keyframes();
        assert_eq!(keyframes.len(), 2);
        assert_eq!(keyframes[0].get("transform-origin"), Some("center"));
        assert_eq!(
            keyframes[0].get("transform"),
            Some("translate(-40px, 0) scale(1) rotate(0deg)")
        );
        assert_eq!(keyframes[0].get("opacity"), Some("0"));
        assert_eq!(
            keyframes[1].get("transform"),
            Some("translate(12px, 0) scale(1) rotate(0deg)")
        );
        assert_eq!(keyframes[1].get("opacity"), Some("0.35"));

        let options = jobs[0].get_options();
        assert_eq!(options.duration, 1000.0);
        assert_eq!(options.delay, 0.0);
        assert_eq!(options.fill, FillMode::Forwards);
        assert_eq!(options.easing, "ease-out");
    }

    #[test]
    fn test_set_to() {
        let document = create_document();
        let mut tween = Tween::new(&document, ".card")
            .set_end_props(props! { x: 100, opacity: 1 })
            .set_duration(0.5)
            .set_delay(0.25)
            .set_easing(Easing::Power4Out);
        tween.set_to().unwrap();

        // The start state is captured from the computed style of the declared names.
        assert_eq!(tween.get_start_props(), &props! { opacity: "0.35", x: "12px" });

        // The element is primed with the end transform.
        let element = document.get_element(".card").unwrap();
        assert_eq!(
            element.get_inline_style("transform"),
            Some(String::from("translate(100px, 0) scale(1) rotate(0deg)"))
        );

        let jobs = element.get_jobs();
        assert_eq!(jobs.len(), 1);
        let keyframes = jobs[0].get_keyframes();
        assert_eq!(
            keyframes[0].get("transform"),
            Some("translate(12px, 0) scale(1) rotate(0deg)")
        );
        assert_eq!(keyframes[0].get("opacity"), Some("0.35"));
        assert_eq!(
            keyframes[1].get("transform"),
            Some("translate(100px, 0) scale(1) rotate(0deg)")
        );
        // The end frame opacity is pinned to the captured start opacity.
        assert_eq!(keyframes[1].get("opacity"), Some("0.35"));

        let options = jobs[0].get_options();
        assert_eq!(options.duration, 500.0);
        assert_eq!(options.delay, 250.0);
        assert_eq!(options.easing, "cubic-bezier(0.09, 0.43, 0.25, 1)");
    }

    #[test]
    fn test_set_from_to() {
        let document = create_document();
        let mut tween = Tween::new(&document, ".card")
            .set_start_props(props! { x: -40, opacity: 0 })
            .set_end_props(props! { x: 0, opacity: 1, rotate: 45 });
        tween.set_from_to().unwrap();

        // No capture happens: both sides stay as declared.
        assert_eq!(tween.get_start_props(), &props! { x: -40, opacity: 0 });
        assert_eq!(tween.get_end_props(), &props! { x: 0, opacity: 1, rotate: 45 });

        // The element is primed with the start transform and opacity.
        let element = document.get_element(".card").unwrap();
        assert_eq!(
            element.get_inline_style("transform"),
            Some(String::from("translate(-40px, 0) scale(1) rotate(0deg)"))
        );
        assert_eq!(element.get_inline_style("opacity"), Some(String::from("0")));

        let jobs = element.get_jobs();
        let keyframes = jobs[0].get_keyframes();
        assert_eq!(keyframes.len(), 2);
        assert!(keyframes[0].is_empty());
        assert_eq!(
            keyframes[1].get("transform"),
            Some("translate(0, 0) scale(1) rotate(45deg)")
        );
        assert_eq!(keyframes[1].get("opacity"), Some("1"));
    }

    #[test]
    fn test_unknown_element() {
        let document = create_document();
        let mut tween = Tween::new(&document, ".unknown");
        assert!(matches!(
            tween.set_from(),
            Err(Error::ElementNotFound { .. })
        ));
        assert!(matches!(tween.set_to(), Err(Error::ElementNotFound { .. })));
        assert!(matches!(
            tween.set_from_to(),
            Err(Error::ElementNotFound { .. })
        ));
    }

    #[test]
    fn test_tween_controls() {
        let document = create_document();
        let mut tween = Tween::new(&document, ".card").set_start_props(props! { opacity: 0 });

        // Controls require a scheduled job.
        assert!(tween.play().is_err());
        assert!(tween.pause().is_err());
        assert!(!tween.is_finished());

        tween.set_from().unwrap();
        tween.play().unwrap();

        let element = document.get_element(".card").unwrap();
        let jobs = element.get_jobs();
        assert!(jobs[0].is_playing());
        assert_eq!(jobs[0].get_play_count(), 1);

        tween.pause().unwrap();
        assert!(!jobs[0].is_playing());
        assert_eq!(jobs[0].get_pause_count(), 2);

        assert!(!tween.is_finished());
        jobs[0].finish();
        assert!(tween.is_finished());
    }

    #[test]
    fn test_tween_clones_share_job() {
        let document = create_document();
        let mut tween = Tween::new(&document, ".card").set_start_props(props! { opacity: 0 });
        let clone = tween.clone();

        tween.set_from().unwrap();
        clone.play().unwrap();
        tween.pause().unwrap();

        let element = document.get_element(".card").unwrap();
        let jobs = element.get_jobs();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].get_play_count(), 1);
        assert_eq!(jobs[0].get_pause_count(), 2);
    }

    #[test]
    fn test_tween_display() {
        let document = create_document();
        let tween = Tween::new(&document, ".card")
            .set_start_props(props! { x: -40 })
            .set_duration(0.5);
        assert_eq!(
            tween.to_string(),
            "Tween [selector=.card, duration=0.5s, delay=0s, easing=ease-out, from={x: -40}, to={}]"
        );
    }
}
