//! Linux joystick device (`/dev/input/js*`).
//!
//! [`Joystick`] wraps a file handle opened in non-blocking mode and implements
//! [`EventSource`] by reading one 8-byte `js_event` record at a time. Properties are
//! queried through the `JSIOCG*` ioctls.
//!
//! This module does **not**:
//! - discover devices or react to hot-plug
//! - interpret events beyond decoding them (that is [`DeviceState`](crate::state::DeviceState)'s job)

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::os::fd::AsRawFd;
use std::path::Path;

use nix::fcntl::{FcntlArg, OFlag};

use crate::device::EventSource;
use crate::event::RawEvent;
use crate::metadata::Properties;
use crate::{Error, Result};

/// Size of the buffer handed to `JSIOCGNAME`.
const NAME_LEN: usize = 128;

mod ioctl {
    nix::ioctl_read!(version, b'j', 0x01, u32);
    nix::ioctl_read!(axes, b'j', 0x11, u8);
    nix::ioctl_read!(buttons, b'j', 0x12, u8);
    nix::ioctl_read_buf!(name, b'j', 0x13, u8);
}

/// A connected joystick.
#[derive(Debug)]
pub struct Joystick {
    file: File,
    path: String,
}

impl Joystick {
    /// Open the joystick at `path` for non-blocking reads.
    pub fn connect(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        nix::fcntl::fcntl(file.as_raw_fd(), FcntlArg::F_SETFL(OFlag::O_NONBLOCK))?;

        log::debug!("Connected to joystick at {}", path.display());
        Ok(Self {
            file,
            path: path.to_string_lossy().to_string(),
        })
    }

    /// Close the device. Dropping the joystick has the same effect.
    pub fn disconnect(self) {
        log::debug!("Disconnecting joystick at {}", self.path);
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query name, driver version and channel counts.
    pub fn properties(&self) -> Result<Properties> {
        let fd = self.file.as_raw_fd();

        let mut name = [0u8; NAME_LEN];
        let mut driver_version = 0u32;
        let mut buttons = 0u8;
        let mut axes = 0u8;

        // SAFETY: fd is an open joystick device and every pointer refers to a live local
        // of the size the request encodes.
        unsafe {
            ioctl::name(fd, &mut name)?;
            ioctl::version(fd, &mut driver_version)?;
            ioctl::buttons(fd, &mut buttons)?;
            ioctl::axes(fd, &mut axes)?;
        }

        let len = name.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        Ok(Properties {
            name: String::from_utf8_lossy(&name[..len]).into_owned(),
            driver_version,
            buttons,
            axes,
        })
    }
}

impl EventSource for Joystick {
    fn poll_event(&mut self) -> Result<Option<RawEvent>> {
        let mut buf = [0u8; RawEvent::SIZE];
        match self.file.read(&mut buf) {
            Ok(n) if n == RawEvent::SIZE => Ok(Some(RawEvent::from_bytes(&buf))),
            Ok(0) => Ok(None),
            Ok(n) => Err(Error::ShortRead {
                expected: RawEvent::SIZE,
                got: n,
            }),
            Err(e) if e.kind() == ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn name(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::OpenOptions;
    use std::io::Write;
    use std::path::PathBuf;

    use nix::sys::stat::Mode;

    /// A FIFO standing in for a device node, removed on drop.
    struct Fifo(PathBuf);

    impl Fifo {
        fn new(tag: &str) -> Self {
            let path = std::env::temp_dir().join(format!("joysync-{tag}-{}", std::process::id()));
            let _ = std::fs::remove_file(&path);
            nix::unistd::mkfifo(&path, Mode::S_IRUSR | Mode::S_IWUSR).unwrap();
            Fifo(path)
        }

        /// Open a writer end. O_RDWR does not block on Linux, so the reader's open
        /// succeeds right away.
        fn writer(&self) -> File {
            OpenOptions::new().read(true).write(true).open(&self.0).unwrap()
        }
    }

    impl Drop for Fifo {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    fn record(ev: &RawEvent) -> [u8; RawEvent::SIZE] {
        let mut buf = [0u8; RawEvent::SIZE];
        buf[..4].copy_from_slice(&ev.time.to_ne_bytes());
        buf[4..6].copy_from_slice(&ev.value.to_ne_bytes());
        buf[6] = ev.kind;
        buf[7] = ev.number;
        buf
    }

    #[test]
    fn empty_device_has_no_event() {
        let fifo = Fifo::new("empty");
        let _writer = fifo.writer();
        let mut js = Joystick::connect(&fifo.0).unwrap();

        assert!(js.poll_event().unwrap().is_none());
    }

    #[test]
    fn full_record_is_decoded() {
        let fifo = Fifo::new("full");
        let mut writer = fifo.writer();
        let mut js = Joystick::connect(&fifo.0).unwrap();

        let ev = RawEvent::axis(4321, 2, -16000).initial();
        writer.write_all(&record(&ev)).unwrap();

        assert_eq!(js.poll_event().unwrap(), Some(ev));
        assert!(js.poll_event().unwrap().is_none());
    }

    #[test]
    fn partial_record_is_a_hard_failure() {
        let fifo = Fifo::new("short");
        let mut writer = fifo.writer();
        let mut js = Joystick::connect(&fifo.0).unwrap();

        writer.write_all(&[1, 2, 3]).unwrap();

        assert!(matches!(
            js.poll_event(),
            Err(Error::ShortRead {
                expected: RawEvent::SIZE,
                got: 3
            })
        ));
    }

    #[test]
    fn properties_fail_on_non_joystick() {
        let fifo = Fifo::new("props");
        let _writer = fifo.writer();
        let js = Joystick::connect(&fifo.0).unwrap();

        assert!(matches!(js.properties(), Err(Error::Sys(_))));
        assert_eq!(js.name(), fifo.0.to_string_lossy());
    }
}
