use crate::event::RawEvent;
use crate::Result;

/// A non-blocking producer of [`RawEvent`]s.
///
/// `poll_event` returns `Ok(Some(_))` when an event was read, `Ok(None)` when nothing
/// is queued right now, and `Err(_)` on an unrecoverable failure. It must never block
/// indefinitely; the event handler relies on this to notice stop requests.
///
/// A source is dedicated to one consumer at a time: once handed to an
/// [`EventHandler`](crate::handler::EventHandler) it lives on the handler thread until
/// the handler is destroyed.
pub trait EventSource: Send {
    fn poll_event(&mut self) -> Result<Option<RawEvent>>;
    fn name(&self) -> &str;
}

impl EventSource for Box<dyn EventSource> {
    fn poll_event(&mut self) -> Result<Option<RawEvent>> {
        (**self).poll_event()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
