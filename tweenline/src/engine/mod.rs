//! Defines the animation engine boundary: the document model tweens target and the
//! interpolation jobs the engine runs.

mod document;
mod job;

pub use document::{Document, Element};
pub use job::{FillMode, Job, JobOptions, Keyframe};
