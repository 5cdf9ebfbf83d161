use std::sync::Arc;

use parking_lot::RwLock;

use crate::engine::{Job, JobOptions, Keyframe};
use crate::errors::{EngineError, Error};

/// Inner recorded state of a [`MockJob`], shared across clones.
#[derive(Debug, Default)]
struct MockJobState {
    keyframes: Vec<Keyframe>,
    options: JobOptions,
    playing: bool,
    finished: bool,
    fail_on_play: bool,
    play_count: usize,
    pause_count: usize,
}

/// Mock implement for [`Job`]. Records every playback order for inspection.
///
/// A fresh job starts in the playing state, the way a native engine starts
/// interpolating as soon as the job is created.
#[derive(Clone, Debug)]
pub struct MockJob {
    state: Arc<RwLock<MockJobState>>,
}

impl MockJob {
    pub fn new(keyframes: Vec<Keyframe>, options: JobOptions) -> Self {
        Self {
            state: Arc::new(RwLock::new(MockJobState {
                keyframes,
                options,
                playing: true,
                finished: false,
                fail_on_play: false,
                play_count: 0,
                pause_count: 0,
            })),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state.read().playing
    }

    /// Returns the number of times [`Job::play`] was called.
    pub fn get_play_count(&self) -> usize {
        self.state.read().play_count
    }

    /// Returns the number of times [`Job::pause`] was called.
    pub fn get_pause_count(&self) -> usize {
        self.state.read().pause_count
    }

    pub fn get_keyframes(&self) -> Vec<Keyframe> {
        self.state.read().keyframes.clone()
    }

    pub fn get_options(&self) -> JobOptions {
        self.state.read().options.clone()
    }

    /// Marks the job as having run to completion.
    pub fn finish(&self) {
        let mut state = self.state.write();
        state.playing = false;
        state.finished = true;
    }

    /// Makes any further play order fail, the way an engine rejects an invalidated job.
    pub fn set_fail_on_play(&self) {
        self.state.write().fail_on_play = true;
    }
}

impl Job for MockJob {
    fn play(&mut self) -> Result<(), Error> {
        let mut state = self.state.write();
        if state.fail_on_play {
            return Err(EngineError {
                info: String::from("play order rejected"),
            });
        }
        state.playing = true;
        state.play_count += 1;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), Error> {
        let mut state = self.state.write();
        state.playing = false;
        state.pause_count += 1;
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.state.read().finished
    }
}
