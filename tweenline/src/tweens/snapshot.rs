//! Captures live element styles to fill in the implicit side of a tween.

use crate::engine::Element;
use crate::tweens::Props;

/// Reads the current computed style of `element` for every property declared in
/// `reference` and returns them as a new bag.
///
/// The engine reports an element without scaling as `"none"` (or nothing at all), which
/// is not an animatable value: it is normalized to `"1"`. Other properties the engine
/// cannot resolve are simply left out of the snapshot.
pub(crate) fn capture(element: &dyn Element, reference: &Props) -> Props {
    let mut snapshot = Props::new();
    for name in reference.names() {
        let computed = element.computed_style(&name);
        if name == "scale" {
            let scale = match computed {
                Some(value) if !value.is_empty() && value != "none" => value,
                _ => String::from("1"),
            };
            snapshot = snapshot.set(name, scale);
        } else if let Some(value) = computed {
            snapshot = snapshot.set(name, value);
        }
    }
    snapshot
}
