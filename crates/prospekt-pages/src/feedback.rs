//! Inline feedback seam between validation and the rendering layer

use std::collections::HashMap;

/// Receives per-field validation feedback.
///
/// Implemented by the rendering layer (toggling an error class and a
/// message element next to the input) and by [`RecordingFeedback`] in
/// tests. Both operations are idempotent: showing the same error twice or
/// clearing an already-clear field must leave the surface unchanged.
pub trait FeedbackController {
	/// Mark `field` invalid and display `message` next to it.
	///
	/// Replaces any message already shown for the field.
	fn show_error(&mut self, field: &str, message: &str);

	/// Remove the error mark and message for `field`, if any.
	fn clear_error(&mut self, field: &str);
}

/// Test double capturing the feedback surface as a map of field name to
/// currently-displayed message.
#[derive(Debug, Default)]
pub struct RecordingFeedback {
	shown: HashMap<String, String>,
}

impl RecordingFeedback {
	pub fn new() -> Self {
		Self::default()
	}

	/// Message currently shown for `field`, if any.
	pub fn message(&self, field: &str) -> Option<&str> {
		self.shown.get(field).map(|s| s.as_str())
	}

	pub fn error_count(&self) -> usize {
		self.shown.len()
	}

	pub fn is_clear(&self) -> bool {
		self.shown.is_empty()
	}
}

impl FeedbackController for RecordingFeedback {
	fn show_error(&mut self, field: &str, message: &str) {
		self.shown.insert(field.to_string(), message.to_string());
	}

	fn clear_error(&mut self, field: &str) {
		self.shown.remove(field);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_show_error_replaces_previous_message() {
		let mut feedback = RecordingFeedback::new();
		feedback.show_error("email", "first");
		feedback.show_error("email", "second");

		assert_eq!(feedback.message("email"), Some("second"));
		assert_eq!(feedback.error_count(), 1);
	}

	#[test]
	fn test_clear_error_is_idempotent() {
		let mut feedback = RecordingFeedback::new();
		feedback.show_error("name", "oops");
		feedback.clear_error("name");
		feedback.clear_error("name");

		assert!(feedback.is_clear());
	}
}
