#![doc(html_root_url = "https://docs.rs/tweenline/0.1.0")]

//! <h1 align="center">TWEENLINE - Declarative tweens for Rust</h1>
//! <div style="text-align:center;font-style:italic;">Tweenline is an open-source declarative animation helper - written in Rust.</div>
//! <br/>
//!
//! # Documentation
//!
//! This is the API documentation.<br/>
//! To see the code in action, visit the [examples](https://github.com/tweenline/tweenline/tree/develop/tweenline/examples) directory.
//!
//! # Features
//!
//! **Tweenline** is a Rust library to describe element animations declaratively: callers
//! state the visual properties of a start and/or end state and the library turns them
//! into interpolation jobs on a pluggable animation engine.<br/>
//! It can be compared to _[GSAP](https://gsap.com/)_ in the javascript ecosystem.
//!
//! - Declare one-shot [`Tween`](tweens::Tween)s through [`animate::from`], [`animate::to`] and [`animate::from_to`]
//! - Chain tweens on a [`Timeline`](tweens::Timeline) that releases them over a shared clock
//! - Bring your own engine by implementing the [`Document`](engine::Document), [`Element`](engine::Element) and [`Job`](engine::Job) traits
//! - React to scheduling with [`TimelineEvent`](tweens::TimelineEvent) callbacks
//!
//! # Getting Started
//!
//! - Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! tweenline = "0.1.0"
//! ```
//!
//! - Wrap your entrypoint in the [`runtime`] macro so release loops spawned by
//!   timelines are awaited before the program exits, then start declaring tweens:
//!
//! ```
//! use tweenline::animate;
//! use tweenline::engine::Document;
//! use tweenline::errors::Error;
//! use tweenline::props;
//! use tweenline::tweens::TweenOptions;
//!
//! async fn intro(document: &dyn Document) -> Result<(), Error> {
//!     // Slide the title in from above while it fades in.
//!     animate::from(
//!         document,
//!         ".title",
//!         props! { y: -40, opacity: 0 },
//!         TweenOptions::with_duration(0.5),
//!     )?;
//!
//!     // Reveal the cards one after the other on a shared clock.
//!     let timeline = animate::timeline(document);
//!     timeline.from(
//!         ".card-1",
//!         props! { scale: 0.8, opacity: 0 },
//!         TweenOptions::with_duration(0.4),
//!     )?;
//!     timeline.from(
//!         ".card-2",
//!         props! { scale: 0.8, opacity: 0 },
//!         TweenOptions::with_duration(0.4).set_offset(0.1),
//!     )?;
//!     Ok(())
//! }
//! ```
//!
//! # Feature flags
//!
//! - **serde** -- Enables serialize/deserialize capabilities for the plain data types (props, easings, options, keyframes).
//! - **mocks** -- Provides mocked engine collaborators (useful for tests mostly).

#[cfg(test)]
extern crate self as tweenline;

pub mod animate;
pub mod engine;
pub mod errors;
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
pub mod tweens;
pub mod utils;

pub use tweenline_macros::runtime;
