//! Submission gate state machine
//!
//! Serializes submission attempts: at most one validation-plus-send cycle
//! runs at a time, and re-entrant submits while one is underway are
//! ignored rather than queued.

/// Phase of the current submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
	/// No attempt in progress; submits are accepted.
	Idle,
	/// Inputs are being validated.
	Validating,
	/// Payload handed to the transport, response outstanding.
	Pending,
	/// Transport answered; outcome is being applied to the page.
	Settled,
}

/// Gate in front of the submission pipeline.
#[derive(Debug)]
pub struct SubmissionGate {
	phase: GatePhase,
}

impl SubmissionGate {
	pub fn new() -> Self {
		Self {
			phase: GatePhase::Idle,
		}
	}

	pub fn phase(&self) -> GatePhase {
		self.phase
	}

	pub fn is_idle(&self) -> bool {
		self.phase == GatePhase::Idle
	}

	/// Try to start an attempt. Returns false, leaving the phase
	/// untouched, if one is already underway.
	pub fn begin(&mut self) -> bool {
		if self.phase != GatePhase::Idle {
			tracing::debug!(phase = ?self.phase, "submit ignored, attempt in progress");
			return false;
		}
		self.phase = GatePhase::Validating;
		true
	}

	/// Validation failed; the attempt ends without a send.
	pub fn reject(&mut self) {
		debug_assert_eq!(self.phase, GatePhase::Validating);
		self.phase = GatePhase::Idle;
	}

	/// Validation passed and the payload is on its way.
	pub fn dispatch(&mut self) {
		debug_assert_eq!(self.phase, GatePhase::Validating);
		self.phase = GatePhase::Pending;
	}

	/// The transport answered.
	pub fn settle(&mut self) {
		debug_assert_eq!(self.phase, GatePhase::Pending);
		self.phase = GatePhase::Settled;
	}

	/// Outcome applied; ready for the next attempt.
	pub fn finish(&mut self) {
		self.phase = GatePhase::Idle;
	}
}

impl Default for SubmissionGate {
	fn default() -> Self {
		Self::new()
	}
}
