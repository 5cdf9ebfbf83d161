//! Defines mock collaborators for tests and examples.

pub mod document;
pub mod job;
