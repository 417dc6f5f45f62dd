//! Scripted in-process event source.
//!
//! [`VirtualDevice`] implements [`EventSource`] over a queue that is filled through a
//! cloneable [`VirtualFeed`] handle. The device can be moved onto a handler thread while
//! the feed stays with the caller to inject events (or failures) at any time.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::device::EventSource;
use crate::event::RawEvent;
use crate::{Error, Result};

enum Step {
    Event(RawEvent),
    Fail(String),
}

type Queue = Arc<Mutex<VecDeque<Step>>>;

pub struct VirtualDevice {
    name: String,
    queue: Queue,
}

/// Producer side of a [`VirtualDevice`].
#[derive(Clone)]
pub struct VirtualFeed {
    queue: Queue,
}

impl VirtualDevice {
    pub fn new(name: &str) -> (Self, VirtualFeed) {
        let queue: Queue = Arc::default();
        let device = Self {
            name: name.to_string(),
            queue: queue.clone(),
        };
        (device, VirtualFeed { queue })
    }
}

impl VirtualFeed {
    /// Queue one event.
    pub fn push(&self, event: RawEvent) {
        self.enqueue(Step::Event(event));
    }

    /// Queue several events in order.
    pub fn extend(&self, events: impl IntoIterator<Item = RawEvent>) {
        let mut queue = self.lock();
        queue.extend(events.into_iter().map(Step::Event));
    }

    /// Convenience method to set an axis value.
    pub fn set_axis(&self, time: u32, axis: u8, value: i16) {
        self.push(RawEvent::axis(time, axis, value));
    }

    pub fn press_button(&self, time: u32, button: u8) {
        self.push(RawEvent::button(time, button, true));
    }

    pub fn release_button(&self, time: u32, button: u8) {
        self.push(RawEvent::button(time, button, false));
    }

    /// Make the device report an unrecoverable failure once the queue reaches this point.
    pub fn fail(&self, reason: &str) {
        self.enqueue(Step::Fail(reason.to_string()));
    }

    /// Number of queued steps not yet consumed.
    pub fn pending(&self) -> usize {
        self.lock().len()
    }

    fn enqueue(&self, step: Step) {
        self.lock().push_back(step);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Step>> {
        // The queue holds plain data, so a poisoned guard is still consistent.
        self.queue.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl EventSource for VirtualDevice {
    fn poll_event(&mut self) -> Result<Option<RawEvent>> {
        let step = self
            .queue
            .lock()
            .map_err(|_| Error::LockPoisoned)?
            .pop_front();

        match step {
            Some(Step::Event(event)) => Ok(Some(event)),
            Some(Step::Fail(reason)) => Err(Error::Io(std::io::Error::other(reason))),
            None => Ok(None),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
