//! Live joystick monitor.
//!
//! Usage: `cargo run --example monitor [device]`
//!
//! Settings come from the TOML file named by `JOYSYNC_CONFIG` (if set); a device path on
//! the command line overrides the configured one. Runs until Ctrl+C or until the handler
//! stops, then destroys the synchronizer and disconnects the joystick.

#[cfg(target_os = "linux")]
fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_os = "linux")]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    use std::io::Write;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use joysync::backends::linux::Joystick;
    use joysync::{AsyncState, Config, OutputFormat, MAX_AXES, MAX_BUTTONS};

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() > 1 {
        eprintln!("Usage: monitor [device]");
        std::process::exit(2);
    }

    let mut config = match std::env::var_os("JOYSYNC_CONFIG") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(device) = args.first() {
        config.device = device.into();
    }

    let js = Joystick::connect(&config.device)?;
    println!("{}", js.properties()?);

    let running = Arc::new(AtomicBool::new(true));
    let flag = running.clone();
    ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst))?;

    let sync = AsyncState::create_with_interval(js, config.poll_interval())?;

    // Save the cursor so every frame redraws in place.
    print!("\n\x1b[s");

    let mut stdout = std::io::stdout();
    while running.load(Ordering::SeqCst) && sync.is_running() {
        let state = sync.query()?;
        print!("\x1b[u\x1b[0J");

        match config.output {
            OutputFormat::Text => {
                print!("Buttons: ");
                for i in 0..MAX_BUTTONS {
                    print!("{} ", state.button(i) as u8);
                    if i % 4 == 3 {
                        print!(" ");
                    }
                }
                print!("\nAxes   : ");
                for i in 0..MAX_AXES {
                    print!("{:<7}  ", state.axes[i]);
                }
                println!();
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(&state)?);
            }
        }
        stdout.flush()?;

        std::thread::sleep(config.refresh());
    }

    let stopped = sync.destroy();
    if let Some(js) = stopped.source {
        js.disconnect();
    }
    stopped.result?;
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn main() {
    eprintln!("The joystick monitor is only available on Linux.");
}
