//! Turn callback that reports destroyed cities.
//!
//! Each destruction becomes one line on the wrapped writer (stdout in the
//! binary):
//!
//! ```text
//! Foo has been destroyed by alien 3 and alien 7!
//! ```

use std::io::Write;

use invasion_core::{InvasionState, TurnCallback, TurnSummary};
use tracing::warn;

/// Callback that writes one line per destroyed city.
#[derive(Debug)]
pub struct DestructionReporter<W: Write> {
    out: W,
    reported: usize,
}

impl<W: Write> DestructionReporter<W> {
    /// Create a reporter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out, reported: 0 }
    }

    /// Number of destruction lines written so far.
    pub const fn reported(&self) -> usize {
        self.reported
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> W {
        if let Err(e) = self.out.flush() {
            warn!(error = %e, "failed to flush destruction report");
        }
        self.out
    }
}

impl<W: Write> TurnCallback for DestructionReporter<W> {
    fn on_turn(&mut self, summary: &TurnSummary, _state: &InvasionState) {
        for destruction in &summary.destructions {
            match writeln!(self.out, "{destruction}") {
                Ok(()) => self.reported = self.reported.saturating_add(1),
                Err(e) => warn!(
                    error = %e,
                    city = %destruction.city,
                    "failed to report destroyed city"
                ),
            }
        }
    }
}
