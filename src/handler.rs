//! Background event handler.
//!
//! [`EventHandler`] owns one thread that drains an [`EventSource`] and passes every event
//! to a user callback. The thread polls: when the source has nothing queued it sleeps for
//! the poll interval ([`POLL_INTERVAL`] by default) and tries again, so a stop request is
//! noticed within roughly one interval.
//!
//! The loop ends when
//! - [`EventHandler::destroy`] (or `Drop`) clears the running flag: clean exit,
//! - the callback returns [`Flow::Stop`]: clean exit,
//! - the callback or the source returns an error: the running flag is cleared and the
//!   exit is reported as failed.
//!
//! # Example
//! ```
//! use joysync::backends::virtual_input::VirtualDevice;
//! use joysync::{EventHandler, Flow, RawEvent};
//!
//! let (device, feed) = VirtualDevice::new("demo");
//! feed.push(RawEvent::button(1, 0, true));
//!
//! let handler = EventHandler::create(device, |event: &RawEvent| {
//!     println!("{event}");
//!     Ok(Flow::Stop)
//! })
//! .unwrap();
//!
//! let stopped = handler.destroy();
//! assert!(stopped.is_clean());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::device::EventSource;
use crate::event::RawEvent;
use crate::{Error, Result};

/// How long to sleep when the source has no event queued.
pub const POLL_INTERVAL: Duration = Duration::from_micros(100);

/// What the handler loop should do after a callback returns successfully.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Outcome of a stopped handler.
///
/// `source` is `None` only if the handler thread panicked and took the source with it.
#[derive(Debug)]
pub struct Stopped<S> {
    pub source: Option<S>,
    pub result: Result<()>,
}

impl<S> Stopped<S> {
    /// Whether the handler thread's last exit was clean.
    pub fn is_clean(&self) -> bool {
        self.result.is_ok()
    }

    /// Take the source back, e.g. to disconnect it.
    pub fn into_source(self) -> Option<S> {
        self.source
    }
}

/// A running background event loop over one source.
pub struct EventHandler<S: EventSource + 'static> {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<(S, Result<()>)>>,
}

impl<S: EventSource + 'static> EventHandler<S> {
    /// Start handling events from `source` with the default [`POLL_INTERVAL`].
    pub fn create<F>(source: S, callback: F) -> Result<Self>
    where
        F: FnMut(&RawEvent) -> Result<Flow> + Send + 'static,
    {
        Self::create_with_interval(source, POLL_INTERVAL, callback)
    }

    /// Start handling events, sleeping `interval` whenever the source is idle.
    ///
    /// If the thread cannot be spawned nothing is left running and the source is dropped.
    pub fn create_with_interval<F>(source: S, interval: Duration, callback: F) -> Result<Self>
    where
        F: FnMut(&RawEvent) -> Result<Flow> + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let name = format!("joysync:{}", source.name());

        let flag = running.clone();
        let spawned = thread::Builder::new()
            .name(name)
            .spawn(move || run_loop(source, callback, &flag, interval));

        match spawned {
            Ok(thread) => Ok(Self {
                running,
                thread: Some(thread),
            }),
            Err(e) => {
                log::error!("Unable to spawn event handler thread: {e}");
                Err(Error::Spawn(e))
            }
        }
    }

    /// Advisory liveness check; may change right after it returns.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request the loop to stop, wait for the thread to exit and hand back the source.
    pub fn destroy(mut self) -> Stopped<S> {
        self.stop()
    }

    fn stop(&mut self) -> Stopped<S> {
        self.running.store(false, Ordering::SeqCst);

        let Some(thread) = self.thread.take() else {
            return Stopped {
                source: None,
                result: Ok(()),
            };
        };

        match thread.join() {
            Ok((source, result)) => Stopped {
                source: Some(source),
                result,
            },
            Err(_) => {
                log::error!("Event handler thread panicked");
                Stopped {
                    source: None,
                    result: Err(Error::HandlerPanicked),
                }
            }
        }
    }
}

impl<S: EventSource + 'static> Drop for EventHandler<S> {
    fn drop(&mut self) {
        if self.thread.is_some() {
            let stopped = self.stop();
            if let Err(e) = stopped.result {
                log::warn!("Event handler dropped after failure: {e}");
            }
        }
    }
}

fn run_loop<S, F>(
    mut source: S,
    mut callback: F,
    running: &AtomicBool,
    interval: Duration,
) -> (S, Result<()>)
where
    S: EventSource,
    F: FnMut(&RawEvent) -> Result<Flow>,
{
    log::debug!("Starting event handler for {}", source.name());

    let result = loop {
        if !running.load(Ordering::SeqCst) {
            break Ok(());
        }

        let event = match source.poll_event() {
            Ok(Some(event)) => event,
            Ok(None) => {
                thread::sleep(interval);
                continue;
            }
            Err(e) => break Err(e),
        };

        match callback(&event) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Stop) => break Ok(()),
            Err(e) => break Err(e),
        }
    };

    match &result {
        Ok(()) => log::debug!("Event handler for {} stopped", source.name()),
        Err(e) => {
            running.store(false, Ordering::SeqCst);
            log::error!("Event handler for {} failed: {e}", source.name());
        }
    }

    (source, result)
}
