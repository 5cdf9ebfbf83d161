pub use log;
#[cfg(test)]
pub use serial_test;
pub use tokio;
pub use tokio::time::sleep;

pub use crate::utils::events::{EventHandler, EventManager};
pub use crate::utils::task::{TaskHandler, TaskResult};

pub mod events;
pub mod task;
