//! One-shot animators: build a tween, schedule it on the engine and play it at once.
//!
//! For sequenced animations over a shared clock, use the [`Timeline`] returned by
//! [`timeline`] instead: its entry points share these signatures but keep the tweens
//! paused until they are due.
//!
//! # Example
//! ```
//! use tweenline::animate;
//! use tweenline::engine::Document;
//! use tweenline::errors::Error;
//! use tweenline::props;
//! use tweenline::tweens::TweenOptions;
//!
//! fn reveal(document: &dyn Document) -> Result<(), Error> {
//!     animate::from(
//!         document,
//!         ".card",
//!         props! { y: 40, opacity: 0 },
//!         TweenOptions::with_duration(0.5),
//!     )?;
//!     Ok(())
//! }
//! ```

use crate::engine::Document;
use crate::errors::Error;
use crate::tweens::{Props, Timeline, Tween, TweenOptions};

/// Animates the element matching `selector` from `start_props` to its current state.
///
/// The end state is captured from the element's computed style and the tween plays
/// immediately. Returns the tween so the caller can pause, resume or observe it.
pub fn from<S: Into<String>>(
    document: &dyn Document,
    selector: S,
    start_props: Props,
    options: TweenOptions,
) -> Result<Tween, Error> {
    let mut tween = Tween::new(document, selector)
        .set_start_props(start_props)
        .set_options(&options);
    tween.set_from()?;
    tween.play()?;
    Ok(tween)
}

/// Animates the element matching `selector` from its current state to `end_props`.
///
/// The start state is captured from the element's computed style and the tween plays
/// immediately. Returns the tween so the caller can pause, resume or observe it.
pub fn to<S: Into<String>>(
    document: &dyn Document,
    selector: S,
    end_props: Props,
    options: TweenOptions,
) -> Result<Tween, Error> {
    let mut tween = Tween::new(document, selector)
        .set_end_props(end_props)
        .set_options(&options);
    tween.set_to()?;
    tween.play()?;
    Ok(tween)
}

/// Animates the element matching `selector` from `start_props` to `end_props`.
///
/// No state is captured; the tween plays immediately. Returns the tween so the caller
/// can pause, resume or observe it.
pub fn from_to<S: Into<String>>(
    document: &dyn Document,
    selector: S,
    start_props: Props,
    end_props: Props,
    options: TweenOptions,
) -> Result<Tween, Error> {
    let mut tween = Tween::new(document, selector)
        .set_start_props(start_props)
        .set_end_props(end_props)
        .set_options(&options);
    tween.set_from_to()?;
    tween.play()?;
    Ok(tween)
}

/// Creates a new empty [`Timeline`] over the given document.
pub fn timeline(document: &dyn Document) -> Timeline {
    Timeline::new(document)
}
