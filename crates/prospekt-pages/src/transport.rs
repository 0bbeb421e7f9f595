//! Submission transport seam

use async_trait::async_trait;
use prospekt_forms::ContactPayload;
use std::time::Duration;
use thiserror::Error;

/// Failure of a submission attempt.
///
/// The user-facing banner always shows the same generic text; the
/// variants exist for logging.
#[derive(Debug, Clone, Error)]
pub enum SubmissionError {
	#[error("submission endpoint unreachable: {0}")]
	Unreachable(String),
	#[error("submission rejected by server: {0}")]
	Rejected(String),
}

/// Delivers a validated payload to wherever submissions go.
///
/// The contact controller is generic over this trait; production wires a
/// real backend client, tests record the payloads they receive.
#[async_trait]
pub trait SubmissionTransport {
	async fn send(&self, payload: &ContactPayload) -> Result<(), SubmissionError>;
}

/// Transport that accepts every payload after a fixed delay.
///
/// Stands in while no backend endpoint exists, so the pending state of
/// the form is still exercised end to end.
#[derive(Debug, Clone)]
pub struct FixedDelayTransport {
	delay: Duration,
}

impl FixedDelayTransport {
	pub fn new() -> Self {
		Self {
			delay: Duration::from_millis(1500),
		}
	}

	pub fn with_delay(delay: Duration) -> Self {
		Self { delay }
	}
}

impl Default for FixedDelayTransport {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl SubmissionTransport for FixedDelayTransport {
	async fn send(&self, _payload: &ContactPayload) -> Result<(), SubmissionError> {
		tokio::time::sleep(self.delay).await;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tokio::time::Instant;

	fn payload() -> ContactPayload {
		ContactPayload {
			name: "Jo".into(),
			email: "jo@example.com".into(),
			phone: "".into(),
			message: "Hello there!!".into(),
			privacy_accepted: true,
		}
	}

	#[tokio::test(start_paused = true)]
	async fn test_fixed_delay_transport_waits_then_accepts() {
		let transport = FixedDelayTransport::new();
		let start = Instant::now();

		transport.send(&payload()).await.unwrap();
		assert_eq!(start.elapsed(), Duration::from_millis(1500));
	}
}
