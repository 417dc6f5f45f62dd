use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use joysync::backends::virtual_input::VirtualDevice;
use joysync::backends::virtual_input::VirtualFeed;
use joysync::{Error, EventHandler, EventSource, Flow, RawEvent};

fn wait_until(timeout: Duration, mut cond: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(1));
    }
    cond()
}

fn feed_buttons(n: u32) -> (VirtualDevice, VirtualFeed) {
    let (device, feed) = VirtualDevice::new("test");
    for t in 0..n {
        feed.press_button(t, (t % 4) as u8);
    }
    (device, feed)
}

#[test]
fn stop_on_fifth_event_is_clean() {
    let (device, feed) = feed_buttons(10);
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = calls.clone();
    let handler = EventHandler::create(device, move |_: &RawEvent| {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(if n == 5 { Flow::Stop } else { Flow::Continue })
    })
    .unwrap();

    assert!(wait_until(Duration::from_secs(2), || calls.load(Ordering::SeqCst) == 5));
    // No further events are consumed after the stop.
    std::thread::sleep(Duration::from_millis(10));
    assert_eq!(calls.load(Ordering::SeqCst), 5);
    assert_eq!(feed.pending(), 5);

    let stopped = handler.destroy();
    assert!(stopped.is_clean());
    assert!(stopped.source.is_some());
}

#[test]
fn failure_on_fifth_event_clears_running_flag() {
    let (device, _feed) = feed_buttons(10);
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = calls.clone();
    let handler = EventHandler::create(device, move |_: &RawEvent| {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        if n == 5 {
            Err(Error::callback("fifth event"))
        } else {
            Ok(Flow::Continue)
        }
    })
    .unwrap();

    assert!(wait_until(Duration::from_secs(2), || !handler.is_running()));
    assert_eq!(calls.load(Ordering::SeqCst), 5);

    let stopped = handler.destroy();
    assert!(!stopped.is_clean());
    assert!(matches!(stopped.result, Err(Error::Callback(_))));
}

#[test]
fn source_failure_stops_handler() {
    let (device, feed) = VirtualDevice::new("test");
    feed.press_button(1, 0);
    feed.fail("unplugged");

    let handler = EventHandler::create(device, |_: &RawEvent| Ok(Flow::Continue)).unwrap();

    assert!(wait_until(Duration::from_secs(2), || !handler.is_running()));
    assert!(matches!(handler.destroy().result, Err(Error::Io(_))));
}

#[test]
fn idle_handler_stops_on_destroy() {
    let (device, feed) = VirtualDevice::new("test");
    let handler = EventHandler::create_with_interval(
        device,
        Duration::from_millis(1),
        |_: &RawEvent| Ok(Flow::Continue),
    )
    .unwrap();

    std::thread::sleep(Duration::from_millis(5));
    assert!(handler.is_running());

    let stopped = handler.destroy();
    assert!(stopped.is_clean());

    // The source comes back usable.
    let mut device = stopped.into_source().unwrap();
    feed.press_button(9, 1);
    assert_eq!(
        device.poll_event().unwrap(),
        Some(RawEvent::button(9, 1, true))
    );
}

#[test]
fn events_are_delivered_in_order() {
    let (device, feed) = VirtualDevice::new("test");
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));

    let sink = seen.clone();
    let handler = EventHandler::create(device, move |event: &RawEvent| {
        sink.lock().unwrap().push(event.time);
        Ok(Flow::Continue)
    })
    .unwrap();

    for t in 0..100 {
        feed.set_axis(t, 0, t as i16);
    }

    assert!(wait_until(Duration::from_secs(2), || seen.lock().unwrap().len() == 100));
    assert!(handler.destroy().is_clean());
    assert_eq!(*seen.lock().unwrap(), (0..100).collect::<Vec<u32>>());
}

#[test]
fn dropping_handler_stops_thread() {
    let (device, feed) = VirtualDevice::new("test");
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = calls.clone();
    let handler = EventHandler::create(device, move |_: &RawEvent| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Flow::Continue)
    })
    .unwrap();
    drop(handler);

    feed.press_button(1, 0);
    std::thread::sleep(Duration::from_millis(10));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(feed.pending(), 1);
}
