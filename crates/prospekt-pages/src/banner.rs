//! Notification banner with timed auto-dismiss

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Default time a notice stays visible before dismissing itself.
pub const AUTO_DISMISS: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
	Success,
	Error,
}

/// A notice currently shown in the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
	pub kind: NoticeKind,
	pub text: String,
}

/// The single banner at the top of the page.
///
/// Showing a notice replaces whatever is visible and restarts the
/// auto-dismiss timer; only one notice and one timer exist at a time.
/// Must be used inside a tokio runtime.
#[derive(Debug)]
pub struct NotificationBanner {
	current: Arc<Mutex<Option<Notice>>>,
	dismiss_after: Duration,
	timer: Option<JoinHandle<()>>,
}

impl NotificationBanner {
	pub fn new() -> Self {
		Self::with_dismiss_after(AUTO_DISMISS)
	}

	/// Banner with a custom auto-dismiss delay. Used by tests to keep
	/// paused-clock arithmetic readable.
	pub fn with_dismiss_after(dismiss_after: Duration) -> Self {
		Self {
			current: Arc::new(Mutex::new(None)),
			dismiss_after,
			timer: None,
		}
	}

	pub fn show_success(&mut self, text: impl Into<String>) {
		self.show(Notice {
			kind: NoticeKind::Success,
			text: text.into(),
		});
	}

	pub fn show_error(&mut self, text: impl Into<String>) {
		self.show(Notice {
			kind: NoticeKind::Error,
			text: text.into(),
		});
	}

	/// Display `notice`, replacing the current one and restarting the
	/// dismiss timer.
	pub fn show(&mut self, notice: Notice) {
		self.cancel_timer();
		if let Ok(mut current) = self.current.lock() {
			*current = Some(notice);
		}

		let slot = Arc::clone(&self.current);
		// Anchor the interval here, not at the task's first poll.
		let deadline = tokio::time::Instant::now() + self.dismiss_after;
		self.timer = Some(tokio::spawn(async move {
			tokio::time::sleep_until(deadline).await;
			if let Ok(mut current) = slot.lock() {
				*current = None;
			}
		}));
	}

	/// Dismiss the banner immediately.
	pub fn hide(&mut self) {
		self.cancel_timer();
		if let Ok(mut current) = self.current.lock() {
			*current = None;
		}
	}

	pub fn current(&self) -> Option<Notice> {
		self.current.lock().ok().and_then(|n| n.clone())
	}

	pub fn is_visible(&self) -> bool {
		self.current
			.lock()
			.map(|n| n.is_some())
			.unwrap_or(false)
	}

	fn cancel_timer(&mut self) {
		if let Some(timer) = self.timer.take() {
			timer.abort();
		}
	}
}

impl Default for NotificationBanner {
	fn default() -> Self {
		Self::new()
	}
}

impl Drop for NotificationBanner {
	fn drop(&mut self) {
		self.cancel_timer();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tokio::task::yield_now;
	use tokio::time::{Duration, advance};

	// Let the woken dismiss task run before asserting.
	async fn advance_and_poll(duration: Duration) {
		advance(duration).await;
		yield_now().await;
	}

	#[tokio::test(start_paused = true)]
	async fn test_notice_auto_dismisses_after_delay() {
		let mut banner = NotificationBanner::new();
		banner.show_success("done");
		assert!(banner.is_visible());

		advance_and_poll(Duration::from_secs(9)).await;
		assert!(banner.is_visible());

		advance_and_poll(Duration::from_secs(2)).await;
		assert!(!banner.is_visible());
	}

	#[tokio::test(start_paused = true)]
	async fn test_replacing_notice_restarts_timer() {
		let mut banner = NotificationBanner::new();
		banner.show_error("first");

		advance_and_poll(Duration::from_secs(8)).await;
		banner.show_success("second");

		// The old timer would have fired here; the new notice survives.
		advance_and_poll(Duration::from_secs(5)).await;
		assert_eq!(
			banner.current().map(|n| n.text),
			Some("second".to_string())
		);

		advance_and_poll(Duration::from_secs(6)).await;
		assert!(!banner.is_visible());
	}

	#[tokio::test(start_paused = true)]
	async fn test_hide_cancels_pending_timer() {
		let mut banner = NotificationBanner::new();
		banner.show_success("done");
		banner.hide();
		assert!(!banner.is_visible());

		banner.show_error("again");
		advance_and_poll(Duration::from_secs(11)).await;
		assert!(!banner.is_visible());
	}

	#[tokio::test(start_paused = true)]
	async fn test_interval_anchored_at_show_time() {
		let mut banner = NotificationBanner::new();
		banner.show_success("done");

		// Time that passes before the dismiss task first runs still
		// counts toward the interval.
		advance(Duration::from_secs(11)).await;
		yield_now().await;
		assert!(!banner.is_visible());
	}

	#[tokio::test(start_paused = true)]
	async fn test_notice_carries_kind_and_text() {
		let mut banner = NotificationBanner::new();
		banner.show_error("kaputt");

		let notice = banner.current().unwrap();
		assert_eq!(notice.kind, NoticeKind::Error);
		assert_eq!(notice.text, "kaputt");
	}
}
