//! Defines the interpolation jobs the animation engine runs on behalf of tweens.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::errors::Error;

/// Represents a single keyframe of an interpolation job: a set of CSS property / value
/// pairs describing the visual state the engine should reach.
///
/// An empty keyframe is meaningful: the engine interpolates from the element live state.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Keyframe {
    values: BTreeMap<String, String>,
}

impl Keyframe {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the value of the given CSS property on this keyframe.
    pub fn set<S: Into<String>, V: Into<String>>(mut self, property: S, value: V) -> Self {
        self.values.insert(property.into(), value.into());
        self
    }

    /// Returns the value of the given CSS property, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.values.get(property).map(|value| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// Fill behavior of a job once it reaches its end state.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FillMode {
    /// The element snaps back to its base state when the job ends.
    #[default]
    None,
    /// The element holds the final keyframe state when the job ends.
    Forwards,
}

/// Options attached to an interpolation job on creation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct JobOptions {
    /// Job duration, in milliseconds.
    pub duration: f64,
    /// Delay before the job starts, in milliseconds.
    pub delay: f64,
    /// Fill behavior once the job is done.
    pub fill: FillMode,
    /// Native easing expression driving the interpolation curve.
    pub easing: String,
}

impl Default for JobOptions {
    fn default() -> Self {
        Self {
            duration: 0.0,
            delay: 0.0,
            fill: FillMode::None,
            easing: String::from("linear"),
        }
    }
}

/// Defines the handle the animation engine returns for a registered interpolation job.
///
/// The engine owns the actual interpolation: this handle only controls playback and
/// reports completion. A job belongs to exactly one tween and is therefore not clonable.
pub trait Job: Send + Sync + Debug {
    /// Starts or resumes the job.
    fn play(&mut self) -> Result<(), Error>;
    /// Pauses the job, keeping its current progress.
    fn pause(&mut self) -> Result<(), Error>;
    /// Indicates whether the job has run to completion.
    fn is_finished(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframe() {
        let keyframe = Keyframe::new();
        assert!(keyframe.is_empty());
        assert_eq!(keyframe.len(), 0);
        assert_eq!(keyframe.get("transform"), None);

        let keyframe = keyframe
            .set("transform-origin", "center")
            .set("transform", "translate(0, 0) scale(1) rotate(0deg)")
            .set("opacity", "1");
        assert!(!keyframe.is_empty());
        assert_eq!(keyframe.len(), 3);
        assert_eq!(keyframe.get("opacity"), Some("1"));
        assert_eq!(
            keyframe.get("transform"),
            Some("translate(0, 0) scale(1) rotate(0deg)")
        );

        // Setting a property twice keeps the last value.
        let keyframe = keyframe.set("opacity", "0.5");
        assert_eq!(keyframe.len(), 3);
        assert_eq!(keyframe.get("opacity"), Some("0.5"));
    }

    #[test]
    fn test_job_options() {
        let options = JobOptions::default();
        assert_eq!(options.duration, 0.0);
        assert_eq!(options.delay, 0.0);
        assert_eq!(options.fill, FillMode::None);
        assert_eq!(options.easing, "linear");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_keyframe_serialize() {
        let keyframe = Keyframe::new().set("opacity", "0").set("transform", "scale(1)");
        let json = serde_json::to_string(&keyframe).unwrap();
        let back: Keyframe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, keyframe);
    }
}
