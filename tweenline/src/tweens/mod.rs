//! Defines declarative tweens and the timeline scheduling that releases them in order.

mod easing;
mod props;
mod snapshot;
mod timeline;
mod tween;

pub use easing::Easing;
pub use props::{PropValue, Props};
pub use timeline::{Timeline, TimelineEvent};
pub use tween::{Tween, TweenOptions};
