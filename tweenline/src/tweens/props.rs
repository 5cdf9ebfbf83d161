//! Defines the property bags tweens are declared with and their engine serialization.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// A single declared property value: a bare number or a native engine expression.
///
/// Numbers are unit-less at declaration time: the serialization helpers add the unit the
/// engine expects for the property (`px` for lengths, `deg` for rotations, nothing for
/// ratios). Text values are passed through to the engine unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    Number(f64),
    Text(String),
}

impl Display for PropValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PropValue::Number(n) => write!(f, "{}", n),
            PropValue::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

// **********************************************
// Serde
// **********************************************

#[cfg(feature = "serde")]
impl serde::Serialize for PropValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            PropValue::Number(n) => serializer.serialize_f64(*n),
            PropValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PropValue {
    fn deserialize<D>(de: D) -> Result<PropValue, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        match serde_json::Value::deserialize(de)? {
            serde_json::Value::Number(n) => {
                Ok(PropValue::Number(n.as_f64().unwrap_or_default()))
            }
            serde_json::Value::String(s) => Ok(PropValue::Text(s)),
            other => Err(serde::de::Error::custom(format!(
                "invalid property value: {}",
                other
            ))),
        }
    }
}

// **********************************************
// Converters: build a PropValue from primitives.
// **********************************************

macro_rules! impl_from_converter {
    ($variant:ident : $T:ty) => {
        impl From<$T> for PropValue {
            #[inline]
            fn from(val: $T) -> PropValue {
                PropValue::$variant(val.into())
            }
        }
    };
}

impl_from_converter!(Text: String);
impl_from_converter!(Number: u8);
impl_from_converter!(Number: u16);
impl_from_converter!(Number: u32);
impl_from_converter!(Number: i8);
impl_from_converter!(Number: i16);
impl_from_converter!(Number: i32);
impl_from_converter!(Number: f32);
impl_from_converter!(Number: f64);

impl From<&str> for PropValue {
    fn from(val: &str) -> PropValue {
        PropValue::Text(val.into())
    }
}

/// An ordered bag of declared properties, keyed by CSS property name.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    values: BTreeMap<String, PropValue>,
}

impl Props {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the value of the given property.
    pub fn set<S: Into<String>, V: Into<PropValue>>(mut self, property: S, value: V) -> Self {
        self.values.insert(property.into(), value.into());
        self
    }

    /// Returns the declared value of the given property, if any.
    pub fn get(&self, property: &str) -> Option<&PropValue> {
        self.values.get(property)
    }

    /// Returns the declared property names, in lexical order.
    pub fn names(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl Display for Props {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let entries = self
            .values
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{{{}}}", entries)
    }
}

/// Builds a [`Props`] bag from a literal property list.
///
/// # Example
/// ```
/// use tweenline::props;
///
/// let start = props! { x: -40, y: "10vh", opacity: 0 };
/// assert_eq!(start.len(), 3);
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::tweens::Props::new()
    };
    ($($key:tt : $value:expr),+ $(,)?) => {{
        let mut props = $crate::tweens::Props::new();
        $(
            props = props.set($crate::props_key!($key), $value);
        )+
        props
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! props_key {
    ($key:ident) => {
        stringify!($key)
    };
    ($key:literal) => {
        $key
    };
}

// **********************************************
// Engine serialization: values with units.
// **********************************************

/// Formats a length property (`x`, `y`) for the engine: numbers gain a `px` suffix,
/// absent or falsy values collapse to "0".
pub(crate) fn length_value(value: Option<&PropValue>) -> String {
    match value {
        Some(PropValue::Number(n)) if *n != 0.0 => format!("{}px", n),
        Some(PropValue::Text(s)) if !s.is_empty() => s.clone(),
        _ => String::from("0"),
    }
}

/// Formats a scale factor for the engine: absent or falsy values collapse to "1".
pub(crate) fn scale_value(value: Option<&PropValue>) -> String {
    match value {
        Some(PropValue::Number(n)) if *n != 0.0 => format!("{}", n),
        Some(PropValue::Text(s)) if !s.is_empty() => s.clone(),
        _ => String::from("1"),
    }
}

/// Formats a rotation for the engine: numbers gain a `deg` suffix, absent or falsy
/// values collapse to "0deg".
pub(crate) fn rotate_value(value: Option<&PropValue>) -> String {
    match value {
        Some(PropValue::Number(n)) if *n != 0.0 => format!("{}deg", n),
        Some(PropValue::Text(s)) if !s.is_empty() => s.clone(),
        _ => String::from("0deg"),
    }
}

/// Formats an opacity for the engine. Unlike the falsy rules above an explicit 0 is
/// kept: only an absent value defaults to "1".
pub(crate) fn opacity_value(value: Option<&PropValue>) -> String {
    match value {
        Some(PropValue::Number(n)) => format!("{}", n),
        Some(PropValue::Text(s)) => s.clone(),
        None => String::from("1"),
    }
}

/// Composes the single `transform` expression the engine consumes from the transform
/// related properties of a bag.
pub(crate) fn compose_transform(props: &Props) -> String {
    format!(
        "translate({}, {}) scale({}) rotate({})",
        length_value(props.get("x")),
        length_value(props.get("y")),
        scale_value(props.get("scale")),
        rotate_value(props.get("rotate")),
    )
}
