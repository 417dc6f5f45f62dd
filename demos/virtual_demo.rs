use std::time::Duration;

use joysync::backends::virtual_input::VirtualDevice;
use joysync::layouts::f710::{F710Axis, F710Button};
use joysync::{AsyncState, RawEvent};

fn main() -> joysync::Result<()> {
    env_logger::init();

    // Create a virtual device and seed it like a driver would on open
    let (device, feed) = VirtualDevice::new("virtual:demo");
    feed.push(RawEvent::axis(0, F710Axis::LT as u8, -32767).initial());
    feed.push(RawEvent::axis(0, F710Axis::RT as u8, -32767).initial());

    let sync = AsyncState::create(device)?;
    println!("(Virtual) initial: {:?}", sync.query()?);

    // Inject some live input
    feed.press_button(100, 0);
    feed.set_axis(120, F710Axis::LeftX as u8, 16000);
    feed.press_button(140, 7);

    while feed.pending() > 0 {
        std::thread::sleep(Duration::from_millis(1));
    }
    // The last event may still be folding after the queue empties.
    std::thread::sleep(Duration::from_millis(5));

    let state = sync.query()?;
    for button in F710Button::ALL {
        if state.is_pressed(button) {
            println!("(Virtual) {button:?} pressed");
        }
    }
    println!("(Virtual) LeftX = {}", state.axis_of(F710Axis::LeftX));

    sync.destroy().result
}
