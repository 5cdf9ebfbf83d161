use snafu::Snafu;

pub use crate::errors::Error::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Runtime error: Are you sure your code runs inside #[tweenline::runtime]?
    RuntimeError,
    /// Element not found: nothing matches selector '{selector}'
    ElementNotFound { selector: String },
    /// Animation engine error: {info}
    EngineError { info: String },
    /// Unknown error: {info}.
    Unknown { info: String },
}
