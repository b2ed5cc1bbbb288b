//! Console rendition of the ring: each element is an ANSI-colored block.
//!
//! Run with `cargo run --example ring_demo`. Set `RUST_LOG=debug` to watch
//! the worker pick up each request.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use ring_animator::{RING_LEDS, RingAnimator, RingDriver, Srgb};

struct ConsoleRing {
    staged: [Srgb<u8>; RING_LEDS],
}

impl ConsoleRing {
    fn new() -> Self {
        Self {
            staged: [Srgb::new(0, 0, 0); RING_LEDS],
        }
    }
}

impl RingDriver for ConsoleRing {
    type Error = io::Error;

    fn set_pixel(&mut self, index: usize, color: Srgb<u8>) -> Result<(), Self::Error> {
        self.staged[index] = color;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        // Ramps peak at channel value 24; boost for terminal visibility.
        let boost = |v: u8| ((v as u16) * 10).min(255) as u8;

        let mut out = io::stdout().lock();
        write!(out, "\r")?;
        for color in &self.staged {
            write!(
                out,
                "\x1b[48;2;{};{};{}m  \x1b[0m ",
                boost(color.red),
                boost(color.green),
                boost(color.blue)
            )?;
        }
        out.flush()
    }
}

fn main() {
    env_logger::init();

    let ring = RingAnimator::spawn(ConsoleRing::new());

    ring.wakeup(90.0);
    ring.listen();

    ring.think();
    thread::sleep(Duration::from_secs(3));

    ring.speak();
    thread::sleep(Duration::from_secs(3));

    ring.off();
    drop(ring);
    println!();
}
