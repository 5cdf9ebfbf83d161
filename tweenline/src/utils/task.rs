//! Defines the Tweenline runtime task runner.
use std::future::Future;

use parking_lot::Mutex;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::sync::OnceCell;
use tokio::task;
use tokio::task::JoinHandle;

use crate::errors::{Error, RuntimeError, Unknown};

/// Represents the result of a task.
/// A task may return either () or Result<(), Error> for flexibility which
/// will be converted to TaskResult sent to the runtime.
pub enum TaskResult {
    Ok,
    Err(Error),
}

/// Represents a handler to a task running on the runtime.
pub type TaskHandler = JoinHandle<Result<(), Error>>;

/// Globally accessible runtime transmitter(TX)/receiver(RX) (not initialised yet).
pub static RUNTIME_TX: OnceCell<Mutex<Option<UnboundedSender<UnboundedReceiver<TaskResult>>>>> =
    OnceCell::const_new();
pub static RUNTIME_RX: OnceCell<Mutex<Option<UnboundedReceiver<UnboundedReceiver<TaskResult>>>>> =
    OnceCell::const_new();

impl From<Result<(), Error>> for TaskResult {
    fn from(result: Result<(), Error>) -> Self {
        match result {
            Ok(_) => TaskResult::Ok,
            Err(e) => TaskResult::Err(e),
        }
    }
}

impl From<()> for TaskResult {
    fn from(_: ()) -> Self {
        TaskResult::Ok
    }
}

/// Initializes the global task channel `#[tweenline::runtime]` drains on exit.
///
/// Idempotent: the channel is created once per process and shared by every
/// runtime entered afterward.
pub async fn init_task_channel() {
    // If no receiver is configured, create a new one (with associated sender).
    RUNTIME_RX
        .get_or_init(|| async {
            let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<UnboundedReceiver<TaskResult>>();

            // Set the runtime sender.
            RUNTIME_TX
                .get_or_init(|| async { Mutex::new(Some(tx)) })
                .await;

            // Set the runtime receiver.
            Mutex::new(Some(rx))
        })
        .await;
}

/// Runs a given future as a Tokio task while ensuring the main function (marked by `#[tweenline::runtime]`)
/// will not finish before all tasks running as done.
/// This is done by using a globally accessible channel to communicate the handlers to be waited by the
/// runtime.
///
/// # Parameters
/// * `future`: A future that implements `Future<Output = ()>`, `Send`, and has a `'static` lifetime.
///
/// # Errors
/// Returns `RuntimeError` when called outside a `#[tweenline::runtime]` block, or an
/// error if sending the task handle fails.
///
/// # Example
/// ```
/// use tweenline::errors::Error;
/// use tweenline::utils::task;
/// use tweenline::utils::task::TaskHandler;
///
/// fn spawn_worker() -> Result<TaskHandler, Error> {
///     task::run(async move {
///         // whatever
///     })
/// }
/// ```
pub fn run<F, T>(future: F) -> Result<TaskHandler, Error>
where
    F: Future<Output = T> + Send + 'static,
    T: Into<TaskResult> + Send + 'static,
{
    // A reactor and the runtime channel must both exist before anything is
    // spawned: outside `#[tweenline::runtime]` the spawn itself would abort.
    tokio::runtime::Handle::try_current().map_err(|_| RuntimeError)?;
    let cell = RUNTIME_TX.get().ok_or(RuntimeError)?;

    // Create a transmitter(tx)/receiver(rx) unique to this task.
    let (task_tx, task_rx) = tokio::sync::mpsc::unbounded_channel();

    // --
    // Create a task to run our future: note how we capture the tx...
    let handler = task::spawn(async move {
        // ...to send the result of the future through that channel.
        let result = future.await.into();
        task_tx.send(result).map_err(|err| Unknown {
            info: err.to_string(),
        })?;
        Ok(())
    });

    // --
    // Send the receiver(rx) side of the task-channel to the runtime.

    let mut lock = cell.lock();
    let runtime_tx = lock.as_mut().ok_or(RuntimeError)?;

    runtime_tx.send(task_rx).map_err(|err| Unknown {
        info: err.to_string(),
    })?;

    Ok(handler)
}

#[macro_export]
macro_rules! pause {
    ($ms:expr) => {
        tokio::time::sleep(tokio::time::Duration::from_millis($ms as u64)).await
    };
}

#[macro_export]
macro_rules! pause_sync {
    ($ms:expr) => {
        std::thread::sleep(std::time::Duration::from_millis($ms as u64))
    };
}
