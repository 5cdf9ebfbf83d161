//! Defines the Tweenline event manager system.

use std::any::Any;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::FutureExt;
use futures::future::BoxFuture;
use parking_lot::Mutex;

use crate::errors::Error;
use crate::utils::task;

type SyncedCallbackMap = Mutex<HashMap<String, Vec<CallbackWrapper>>>;
pub type EventHandler = usize;

#[derive(Clone, Default)]
pub struct EventManager {
    callbacks: Arc<SyncedCallbackMap>,
    next_id: Arc<AtomicUsize>,
}

struct CallbackWrapper {
    id: EventHandler,
    callback: Box<dyn FnMut(Arc<dyn Any + Send + Sync>) -> BoxFuture<'static, Result<(), Error>> + Send>,
}

impl EventManager {
    /// Register event handler for a specific event name.
    ///
    /// # Parameters
    /// * `event` - The event name (any type that matches an Into<String>)
    /// * `callback` - An async moved callback that accepts a single parameter as an argument.
    ///                The argument can be anything that might be both `Send + Sync`.
    ///                You can trick multiple parameters by turning them in a single tuple.
    ///
    /// # Return
    /// Returns an EventHandler that can be used by the `unregister()` method.
    ///
    /// # Errors
    /// If the event handler does not match the expected emitted event exactly it will fail silently.
    /// That means if the tuple gave in the callback parameter does not exactly match the emit one
    /// no handler will be called.
    pub fn on<S, F, T, Fut>(&self, event: S, mut callback: F) -> EventHandler
    where
        S: Into<String>,
        T: 'static + Send + Sync + Clone,
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Result<(), Error>> + Send + 'static,
    {
        let event_name = event.into();
        let callback_event = event_name.clone();
        // Generate a unique ID.
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        // Boxes the callback and downcast its parameter.
        let boxed_callback = Box::new(move |arg: Arc<dyn Any + Send + Sync>| {
            match arg.downcast::<T>() {
                Ok(arg) => (callback)((*arg).clone()).boxed(),
                Err(_) => {
                    // Handle error case where the argument is not of type T
                    log::warn!("The callback for event '{}' could not be called because parameter does not match", callback_event);
                    // Current strategy is to ignore the callback
                    Box::pin(async { Ok(()) })
                }
            }
        });

        let wrapper = CallbackWrapper {
            id,
            callback: boxed_callback,
        };

        self.callbacks
            .lock()
            .entry(event_name)
            .or_default()
            .push(wrapper);

        id
    }

    /// Invoke all event handlers registered for a specific event name.
    /// Only the callback registered by the `on()` method and whose payload matches the declared
    /// callback type will be called. All others will be silently skipped.
    ///
    /// Callbacks run as runtime tasks: emitting outside of `#[tweenline::runtime]` drops them.
    ///
    /// # Parameters
    /// * `event`:  The event name (any type that matches an `Into<String>`)
    /// * `payload`: The event payload (must be `'static + Send + Sync`)
    ///              The payload can be anything that might be both `Send + Sync`.
    ///              You can trick multiple parameters by turning them in a single tuple.
    pub fn emit<S, T>(&self, event: S, payload: T)
    where
        S: Into<String>,
        T: 'static + Send + Sync,
    {
        let event_name = event.into();
        let payload_any: Arc<dyn Any + Send + Sync> = Arc::new(payload);
        if let Some(callbacks) = self.callbacks.lock().get_mut(&event_name) {
            for wrapper in callbacks.iter_mut() {
                let payload_clone = payload_any.clone();
                let future = (wrapper.callback)(payload_clone);
                if task::run(future).is_err() {
                    log::warn!("The callback for event '{}' was dropped: no runtime", event_name);
                }
            }
        }
    }

    /// Unregister a given handler if found.
    pub fn unregister(&self, handler: EventHandler) {
        self.callbacks
            .lock()
            .values_mut()
            .for_each(|v| v.retain(|cb| cb.id != handler));
    }
}

impl Debug for EventManager {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventManager").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicU8};

    use serial_test::serial;

    use super::*;

    #[serial]
    #[tweenline_macros::test]
    async fn test_register_and_emit_event() {
        let events: EventManager = Default::default();
        let payload = Arc::new(AtomicBool::new(false));

        events.on("register", |flag: Arc<AtomicBool>| async move {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        });

        events.emit("register", payload.clone());

        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        assert!(
            payload.load(Ordering::SeqCst),
            "The flag have been set by the triggered event."
        );
    }

    #[serial]
    #[tweenline_macros::test]
    async fn test_unregister_event_handler() {
        let events: EventManager = Default::default();
        let flag = Arc::new(AtomicBool::new(false));

        let handler = events.on("unregister", |flag: Arc<AtomicBool>| async move {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        });

        events.unregister(handler);
        events.emit("unregister", flag.clone());

        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        assert!(
            !flag.load(Ordering::SeqCst),
            "The event was unregistered: the flag have not been set."
        );
    }

    #[serial]
    #[tweenline_macros::test]
    async fn test_multiple_handlers() {
        let events: EventManager = Default::default();
        let flag = Arc::new(AtomicUsize::new(0));

        events.on("multiple", |flag: Arc<AtomicUsize>| async move {
            let value = flag.load(Ordering::SeqCst);
            flag.store(value + 1, Ordering::SeqCst);
            Ok(())
        });

        events.on("multiple", |flag: Arc<AtomicUsize>| async move {
            let value = flag.load(Ordering::SeqCst);
            flag.store(value + 1, Ordering::SeqCst);
            Ok(())
        });

        events.on(
            "multiple",
            |(_not_matching, flag): (u8, Arc<AtomicUsize>)| async move {
                let value = flag.load(Ordering::SeqCst);
                flag.store(value + 1, Ordering::SeqCst);
                Ok(())
            },
        );

        events.emit("multiple", flag.clone());

        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        assert_eq!(
            flag.load(Ordering::SeqCst),
            2,
            "The flag have been increased by 2."
        );
    }

    #[serial]
    #[tweenline_macros::test]
    async fn test_event_with_complex_payload() {
        let events: EventManager = Default::default();
        let flag = Arc::new(AtomicU8::new(0));

        events.on(
            "payload",
            |(number1, number2, container): (u8, u8, Arc<AtomicU8>)| async move {
                container.store(number1 + number2, Ordering::SeqCst);
                Ok(())
            },
        );
        events.emit("payload", (42u8, 69u8, flag.clone()));

        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        assert_eq!(
            flag.load(Ordering::SeqCst),
            111,
            "The complex flag has been properly received."
        );
    }

    #[serial]
    #[tweenline_macros::test]
    async fn test_no_handlers_for_event() {
        let events: EventManager = Default::default();
        let result = events.emit("no_event", ());
        assert_eq!(result, (), "Nothing to do.");
    }
}
