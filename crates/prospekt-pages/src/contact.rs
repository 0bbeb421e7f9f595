//! Contact page controller
//!
//! Owns the form definition, its render model, the notification banner,
//! and the submission gate, and exposes the handlers a rendering layer
//! wires to its events: input, blur, checkbox toggle, and submit.

use crate::banner::NotificationBanner;
use crate::feedback::FeedbackController;
use crate::gate::SubmissionGate;
use crate::transport::SubmissionTransport;
use crate::view::FormView;
use prospekt_forms::validators::MESSAGE_MAX_LEN;
use prospekt_forms::{ContactPayload, Form, HoneypotField, contact::messages, contact_form};

/// Drives the contact form end to end.
///
/// Validation on blur and on submit goes through the same field
/// definitions, so inline feedback and the submission gate can never
/// disagree about what is valid.
pub struct ContactFormController<T: SubmissionTransport> {
	form: Form,
	view: FormView,
	banner: NotificationBanner,
	gate: SubmissionGate,
	honeypot: HoneypotField,
	transport: T,
}

impl<T: SubmissionTransport> ContactFormController<T> {
	pub fn new(transport: T) -> Self {
		let form = contact_form();
		let view = FormView::from_form(&form);
		Self {
			form,
			view,
			banner: NotificationBanner::new(),
			gate: SubmissionGate::new(),
			honeypot: HoneypotField::new(),
			transport,
		}
	}

	pub fn view(&self) -> &FormView {
		&self.view
	}

	pub fn banner(&self) -> &NotificationBanner {
		&self.banner
	}

	pub fn gate(&self) -> &SubmissionGate {
		&self.gate
	}

	/// A text input changed.
	///
	/// The message box is truncated to its limit and drives the character
	/// counter. A field that currently shows an error is re-checked on
	/// every keystroke so the message disappears the moment the input
	/// becomes valid.
	pub fn on_input(&mut self, field: &str, value: &str) {
		let value = if field == "message" {
			let truncated: String = value.chars().take(MESSAGE_MAX_LEN).collect();
			self.view.counter.update(truncated.chars().count());
			truncated
		} else {
			value.to_string()
		};
		self.view.set_value(field, value);

		if self.has_visible_error(field) {
			self.validate_field(field);
		}
	}

	/// A checkbox toggled.
	pub fn on_checkbox(&mut self, field: &str, checked: bool) {
		self.view.set_checked(field, checked);
		if self.has_visible_error(field) {
			self.validate_field(field);
		}
	}

	/// A field lost focus: validate it and show or clear its inline
	/// message.
	pub fn on_blur(&mut self, field: &str) {
		self.validate_field(field);
	}

	/// The hidden honeypot input changed. Only bots ever get here.
	pub fn on_honeypot_input(&mut self, value: &str) {
		self.view.set_honeypot_value(value);
	}

	/// Handle a submit event.
	///
	/// Re-entrant submits while an attempt is underway are ignored. A
	/// filled honeypot drops the attempt without any visible reaction.
	/// Validation failures show inline messages and focus the first
	/// offending field; only a fully valid form reaches the transport.
	pub async fn submit(&mut self) {
		if !self.gate.begin() {
			return;
		}

		// A notice from an earlier attempt must not outlive this one.
		self.banner.hide();

		self.form.bind(self.view.bound_data());
		if !self.form.is_valid() {
			let errors: Vec<(String, String)> = self
				.form
				.errors()
				.iter()
				.filter_map(|(field, msgs)| {
					msgs.first().map(|m| (field.clone(), m.clone()))
				})
				.collect();
			for (field, message) in &errors {
				self.view.show_error(field, message);
			}
			for name in self.field_names() {
				if !errors.iter().any(|(f, _)| f == &name) {
					self.view.clear_error(&name);
				}
			}
			if let Some(first) = self.form.first_error_field() {
				let first = first.to_string();
				self.view.focus(&first);
			}
			self.gate.reject();
			return;
		}

		// Only a form that passed every field check gets the spam gate.
		if let Err(e) = self
			.honeypot
			.validate(Some(self.view.honeypot_value()))
		{
			tracing::warn!(error = %e, "dropping submission");
			self.gate.reject();
			return;
		}

		for name in self.field_names() {
			self.view.clear_error(&name);
		}
		self.view.submit.lock(messages::SENDING_LABEL);
		self.gate.dispatch();

		let payload = ContactPayload::from_cleaned(self.form.cleaned_data());
		let outcome = self.transport.send(&payload).await;
		self.gate.settle();

		match outcome {
			Ok(()) => {
				self.banner.show_success(messages::SUCCESS_NOTICE);
				self.form.reset();
				self.view.reset();
			}
			Err(e) => {
				tracing::error!(error = %e, "contact submission failed");
				self.banner.show_error(messages::FAILURE_NOTICE);
			}
		}

		self.view.submit.unlock();
		self.gate.finish();
	}

	fn field_names(&self) -> Vec<String> {
		self.form
			.fields()
			.iter()
			.map(|f| f.name().to_string())
			.collect()
	}

	fn has_visible_error(&self, field: &str) -> bool {
		self.view
			.group(field)
			.is_some_and(|g| g.error.is_some())
	}

	/// Validate one field against its definition and update its inline
	/// feedback.
	fn validate_field(&mut self, field: &str) {
		let Some(def) = self.form.get_field(field) else {
			return;
		};

		let value = if self.view.group(field).map(|g| &g.widget)
			== Some(&prospekt_forms::Widget::CheckboxInput)
		{
			serde_json::Value::Bool(self.view.checked(field))
		} else {
			serde_json::Value::String(self.view.value(field).to_string())
		};

		match def.clean(Some(&value)) {
			Ok(_) => self.view.clear_error(field),
			Err(e) => {
				let message = e.to_string();
				self.view.show_error(field, &message);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::transport::FixedDelayTransport;
	use prospekt_forms::contact::messages;

	fn controller() -> ContactFormController<FixedDelayTransport> {
		ContactFormController::new(FixedDelayTransport::new())
	}

	#[tokio::test]
	async fn test_blur_on_empty_name_shows_required_message() {
		let mut c = controller();
		c.on_blur("name");

		assert_eq!(
			c.view().group("name").unwrap().error.as_deref(),
			Some(messages::NAME_REQUIRED)
		);
	}

	#[tokio::test]
	async fn test_typing_clears_error_once_valid() {
		let mut c = controller();
		c.on_blur("name");
		assert!(c.view().group("name").unwrap().error.is_some());

		c.on_input("name", "J");
		assert_eq!(
			c.view().group("name").unwrap().error.as_deref(),
			Some(messages::NAME_TOO_SHORT)
		);

		c.on_input("name", "Jo");
		assert_eq!(c.view().group("name").unwrap().error, None);
	}

	#[tokio::test]
	async fn test_typing_without_prior_error_stays_silent() {
		let mut c = controller();
		c.on_input("email", "not-an-email");

		assert_eq!(c.view().group("email").unwrap().error, None);
	}

	#[tokio::test]
	async fn test_message_input_truncated_at_limit() {
		let mut c = controller();
		let long = "x".repeat(MESSAGE_MAX_LEN + 50);
		c.on_input("message", &long);

		assert_eq!(c.view().value("message").chars().count(), MESSAGE_MAX_LEN);
		assert_eq!(c.view().counter.len, MESSAGE_MAX_LEN);
		assert!(c.view().counter.warning());
	}

	#[tokio::test]
	async fn test_checkbox_blur_validation() {
		let mut c = controller();
		c.on_blur("privacy");
		assert_eq!(
			c.view().group("privacy").unwrap().error.as_deref(),
			Some(messages::PRIVACY_REQUIRED)
		);

		c.on_checkbox("privacy", true);
		assert_eq!(c.view().group("privacy").unwrap().error, None);
	}
}
