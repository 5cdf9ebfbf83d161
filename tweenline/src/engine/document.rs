//! Defines the document model the animation engine renders: a tree of elements
//! addressed by selectors.

use std::fmt::Debug;

use dyn_clone::DynClone;

use crate::engine::{Job, JobOptions, Keyframe};
use crate::errors::Error;

// Makes a Box<dyn Document> / Box<dyn Element> clone (used for Tween and Timeline cloning).
dyn_clone::clone_trait_object!(Document);
dyn_clone::clone_trait_object!(Element);

/// Defines the document collaborator all tweens resolve their target through.
///
/// The `'static` bound makes `&dyn Document` handles cloneable into the owned
/// boxes tweens and timelines carry.
pub trait Document: DynClone + Send + Sync + Debug + 'static {
    /// Returns the first element matching the given selector.
    ///
    /// # Errors
    /// * `ElementNotFound`: no element matches the selector.
    fn query(&self, selector: &str) -> Result<Box<dyn Element>, Error>;
}

/// Defines a single renderable element of a [`Document`].
pub trait Element: DynClone + Send + Sync + Debug {
    /// Returns the computed value of the given CSS property, if the engine resolves one.
    fn computed_style(&self, property: &str) -> Option<String>;

    /// Writes an inline style property on the element, effective immediately.
    fn set_inline_style(&mut self, property: &str, value: &str);

    /// Registers an interpolation job on the animation engine and returns its handle.
    ///
    /// The returned job is in the engine's initial playback state: callers that need a
    /// paused job must pause it themselves.
    ///
    /// # Errors
    /// * `EngineError`: the engine rejected the keyframes or options.
    fn animate(
        &mut self,
        keyframes: Vec<Keyframe>,
        options: JobOptions,
    ) -> Result<Box<dyn Job>, Error>;
}
