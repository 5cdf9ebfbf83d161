//! Defines the easing curves a tween can run with.

use std::fmt::{Display, Formatter};

/// The pacing curve of a tween, resolved to a native engine timing function.
///
/// Keyword curves map to the engine keyword of the same name. [`Easing::Power4Out`] is a
/// tuned bezier for pronounced deceleration. Any other engine expression (custom beziers,
/// `steps(...)`) goes through [`Easing::Custom`] untouched.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    Power4Out,
    Custom(String),
}

impl Easing {
    /// Returns the native timing function expression for this curve.
    pub fn as_css(&self) -> &str {
        match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Power4Out => "cubic-bezier(0.09, 0.43, 0.25, 1)",
            Easing::Custom(expression) => expression,
        }
    }
}

impl From<&str> for Easing {
    fn from(name: &str) -> Easing {
        match name {
            "linear" => Easing::Linear,
            "ease" => Easing::Ease,
            "ease-in" => Easing::EaseIn,
            "ease-out" => Easing::EaseOut,
            "ease-in-out" => Easing::EaseInOut,
            "power4.out" => Easing::Power4Out,
            expression => Easing::Custom(expression.into()),
        }
    }
}

impl Display for Easing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_default() {
        assert_eq!(Easing::default(), Easing::EaseOut);
    }

    #[test]
    fn test_easing_as_css() {
        assert_eq!(Easing::Linear.as_css(), "linear");
        assert_eq!(Easing::Ease.as_css(), "ease");
        assert_eq!(Easing::EaseIn.as_css(), "ease-in");
        assert_eq!(Easing::EaseOut.as_css(), "ease-out");
        assert_eq!(Easing::EaseInOut.as_css(), "ease-in-out");
        assert_eq!(
            Easing::Power4Out.as_css(),
            "cubic-bezier(0.09, 0.43, 0.25, 1)"
        );
        assert_eq!(
            Easing::Custom(String::from("steps(4, end)")).as_css(),
            "steps(4, end)"
        );
    }

    #[test]
    fn test_easing_from_name() {
        assert_eq!(Easing::from("linear"), Easing::Linear);
        assert_eq!(Easing::from("ease"), Easing::Ease);
        assert_eq!(Easing::from("ease-in"), Easing::EaseIn);
        assert_eq!(Easing::from("ease-out"), Easing::EaseOut);
        assert_eq!(Easing::from("ease-in-out"), Easing::EaseInOut);
        assert_eq!(Easing::from("power4.out"), Easing::Power4Out);
        // Unknown names are forwarded to the engine as-is.
        assert_eq!(
            Easing::from("cubic-bezier(0.5, 0, 0.5, 1)"),
            Easing::Custom(String::from("cubic-bezier(0.5, 0, 0.5, 1)"))
        );
    }

    #[test]
    fn test_easing_display() {
        assert_eq!(Easing::EaseOut.to_string(), "ease-out");
        assert_eq!(
            Easing::Power4Out.to_string(),
            "cubic-bezier(0.09, 0.43, 0.25, 1)"
        );
    }
}
