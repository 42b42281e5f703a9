//! Open/close animation for overlay forms.
//!
//! A modal moves through `Hidden → Opening → Open → Closing → Hidden`. The
//! timed phases carry their own deadline, so re-opening a closing modal simply
//! replaces the pending deadline and the old close can never fire.

use std::time::{Duration, Instant};

/// Durations of the timed phases. A zero duration skips the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalTimings {
	pub open: Duration,
	pub close: Duration,
}

impl Default for ModalTimings {
	fn default() -> Self {
		Self {
			open: Duration::from_millis(120),
			close: Duration::from_millis(400),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
	#[default]
	Hidden,
	Opening {
		until: Instant,
	},
	Open,
	Closing {
		until: Instant,
	},
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalAnimation {
	phase: ModalPhase,
}

impl ModalAnimation {
	#[must_use]
	pub fn phase(&self) -> ModalPhase {
		self.phase
	}

	/// Drawn on screen (every phase except `Hidden`).
	#[must_use]
	pub fn is_visible(&self) -> bool {
		!matches!(self.phase, ModalPhase::Hidden)
	}

	#[must_use]
	pub fn is_closing(&self) -> bool {
		matches!(self.phase, ModalPhase::Closing { .. })
	}

	/// Accepts keyboard input (opening or fully open).
	#[must_use]
	pub fn is_interactive(&self) -> bool {
		matches!(self.phase, ModalPhase::Opening { .. } | ModalPhase::Open)
	}

	/// Start opening. Returns `false` when already opening or open.
	pub fn open(&mut self, now: Instant, timings: ModalTimings) -> bool {
		match self.phase {
			ModalPhase::Hidden | ModalPhase::Closing { .. } => {
				self.phase = if timings.open.is_zero() {
					ModalPhase::Open
				} else {
					ModalPhase::Opening {
						until: now + timings.open,
					}
				};
				true
			}
			ModalPhase::Opening { .. } | ModalPhase::Open => false,
		}
	}

	/// Start closing. Returns `false` when already hidden or closing.
	pub fn close(&mut self, now: Instant, timings: ModalTimings) -> bool {
		match self.phase {
			ModalPhase::Opening { .. } | ModalPhase::Open => {
				self.phase = if timings.close.is_zero() {
					ModalPhase::Hidden
				} else {
					ModalPhase::Closing {
						until: now + timings.close,
					}
				};
				true
			}
			ModalPhase::Hidden | ModalPhase::Closing { .. } => false,
		}
	}

	/// Complete a timed phase whose deadline has passed.
	pub fn tick(&mut self, now: Instant) -> bool {
		match self.phase {
			ModalPhase::Opening { until } if now >= until => {
				self.phase = ModalPhase::Open;
				true
			}
			ModalPhase::Closing { until } if now >= until => {
				self.phase = ModalPhase::Hidden;
				true
			}
			_ => false,
		}
	}
}
