//! Asynchronously updated joystick state.
//!
//! [`AsyncState`] pairs an [`EventHandler`] with a [`DeviceState`] behind a mutex. The
//! handler thread folds every incoming event into the state while holding the lock;
//! any number of threads can take a coherent copy with [`AsyncState::query`].
//!
//! # Lifecycle
//! 1. [`AsyncState::create`] drains the driver's backlog of synthetic `INIT` events
//!    synchronously, so the first snapshot reflects the real device state.
//! 2. The handler thread is started and keeps the state current.
//! 3. [`AsyncState::destroy`] stops the thread and returns the source.
//!
//! If folding or reading fails in the background, [`AsyncState::is_running`] turns
//! false, `query` keeps returning the last good state and `destroy` reports the failure.
//!
//! # Example
//! ```
//! use joysync::backends::virtual_input::VirtualDevice;
//! use joysync::{AsyncState, RawEvent};
//!
//! let (device, feed) = VirtualDevice::new("pad");
//! feed.push(RawEvent::axis(0, 1, -400).initial());
//!
//! let sync = AsyncState::create(device).unwrap();
//! assert_eq!(sync.query().unwrap().axis(1), Some(-400));
//!
//! assert!(sync.destroy().is_clean());
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::device::EventSource;
use crate::handler::{EventHandler, Flow, Stopped, POLL_INTERVAL};
use crate::state::DeviceState;
use crate::{Error, Result};

/// A [`DeviceState`] kept up to date by a background thread.
pub struct AsyncState<S: EventSource + 'static> {
    state: Arc<Mutex<DeviceState>>,
    handler: EventHandler<S>,
}

impl<S: EventSource + 'static> AsyncState<S> {
    /// Seed the state from `source`'s backlog and start synchronizing.
    pub fn create(source: S) -> Result<Self> {
        Self::create_with_interval(source, POLL_INTERVAL)
    }

    /// Like [`create`](Self::create) with a custom idle poll interval.
    pub fn create_with_interval(mut source: S, interval: Duration) -> Result<Self> {
        let initial = drain_backlog(&mut source)?;
        log::debug!(
            "Seeded state for {}: buttons={:#010x} axes={:?}",
            source.name(),
            initial.buttons,
            initial.axes
        );

        let state = Arc::new(Mutex::new(initial));
        let shared = state.clone();
        let handler = EventHandler::create_with_interval(source, interval, move |event| {
            shared
                .lock()
                .map_err(|_| Error::LockPoisoned)?
                .apply(event)?;
            log::trace!("Folded {event}");
            Ok(Flow::Continue)
        })?;

        Ok(Self { state, handler })
    }

    /// Copy out the current state.
    ///
    /// Fails only if the lock is poisoned.
    pub fn query(&self) -> Result<DeviceState> {
        let state = self.state.lock().map_err(|_| Error::LockPoisoned)?;
        Ok(*state)
    }

    /// Whether the background thread is still folding events.
    pub fn is_running(&self) -> bool {
        self.handler.is_running()
    }

    /// Stop the background thread and hand back the source.
    pub fn destroy(self) -> Stopped<S> {
        self.handler.destroy()
    }
}

/// Fold events while the driver keeps reporting synthetic `INIT` events.
///
/// The first non-`INIT` event is still folded; draining stops right after it.
fn drain_backlog<S: EventSource>(source: &mut S) -> Result<DeviceState> {
    let mut state = DeviceState::default();
    while let Some(event) = source.poll_event()? {
        state.apply(&event)?;
        if !event.is_init() {
            break;
        }
    }
    Ok(state)
}
