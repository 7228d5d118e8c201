//! Frame-by-frame trace replay.
//!
//! A trace is computed in full before playback starts; the [`Player`] then
//! walks it one snapshot at a time, writing each frame as a JSON line and
//! sleeping between frames. The loop checks a liveness flag every iteration
//! so an embedder can stop playback between frames -- there is nothing to
//! interrupt inside a frame.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use stepviz_core::Step;

/// Maps a speed percentage to the inter-frame delay: `101 - speed`
/// milliseconds, with speed clamped to `1..=100` (so 100% plays a frame
/// every millisecond and 1% every 100ms).
pub fn delay_for_speed(speed: u8) -> Duration {
    Duration::from_millis(101 - u64::from(speed.clamp(1, 100)))
}

/// Cooperative playback loop over a finished trace.
pub struct Player {
    delay: Duration,
    live: Arc<AtomicBool>,
}

impl Player {
    pub fn new(speed: u8) -> Self {
        Player {
            delay: delay_for_speed(speed),
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Flag an embedder can clear to stop playback after the current frame.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.live)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Writes one JSON line per frame, pausing `delay` between frames.
    /// Returns the number of frames written.
    pub fn play(&self, steps: &[Step], out: &mut impl Write) -> io::Result<usize> {
        let mut shown = 0;
        for (index, step) in steps.iter().enumerate() {
            if !self.live.load(Ordering::Relaxed) {
                break;
            }
            let line = serde_json::to_string(step)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(out, "{line}")?;
            shown += 1;
            if index + 1 < steps.len() {
                std::thread::sleep(self.delay);
            }
        }
        Ok(shown)
    }
}
