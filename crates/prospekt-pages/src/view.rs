//! Renderable model of the contact form surface
//!
//! [`FormView`] is what a rendering layer draws: one [`FieldGroup`] per
//! field, the submit button, the character counter under the message box,
//! and the hidden honeypot input. It carries no validation logic of its
//! own; the controller mutates it through [`FeedbackController`] and the
//! setters below.

use crate::feedback::FeedbackController;
use prospekt_forms::{Form, Widget, contact::messages};
use std::collections::HashMap;

/// Render state of a single labelled input and its error slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
	pub name: String,
	/// DOM id of the input, `id_{name}`.
	pub id: String,
	pub label: Option<String>,
	pub widget: Widget,
	pub required: bool,
	/// Currently displayed inline error, if any.
	pub error: Option<String>,
	/// Mirrors `aria-invalid` on the input.
	pub aria_invalid: bool,
}

/// Render state of the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
	pub enabled: bool,
	/// Text currently shown on the button.
	pub label: String,
	/// Text to restore when the button is re-enabled.
	rest_label: String,
}

impl SubmitButton {
	fn new(label: impl Into<String>) -> Self {
		let label = label.into();
		Self {
			enabled: true,
			rest_label: label.clone(),
			label,
		}
	}

	/// Disable the button and show the busy text.
	pub fn lock(&mut self, busy_label: &str) {
		self.enabled = false;
		self.label = busy_label.to_string();
	}

	/// Re-enable the button and restore its resting text.
	pub fn unlock(&mut self) {
		self.enabled = true;
		self.label = self.rest_label.clone();
	}
}

/// Live character counter under the message box.
///
/// Shows `"{len} / {max} Zeichen"` and flags a warning state once the
/// count passes 90% of the limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharCounter {
	pub len: usize,
	pub max: usize,
}

impl CharCounter {
	pub fn new(max: usize) -> Self {
		Self { len: 0, max }
	}

	pub fn update(&mut self, len: usize) {
		self.len = len;
	}

	pub fn text(&self) -> String {
		format!("{} / {} Zeichen", self.len, self.max)
	}

	pub fn warning(&self) -> bool {
		self.len * 10 > self.max * 9
	}
}

/// Headless render model of the whole form.
#[derive(Debug)]
pub struct FormView {
	groups: Vec<FieldGroup>,
	pub submit: SubmitButton,
	pub counter: CharCounter,
	values: HashMap<String, String>,
	checks: HashMap<String, bool>,
	honeypot: String,
	focused: Option<String>,
}

impl FormView {
	/// Build the view from a form definition: one group per field, in
	/// definition order, with no errors shown.
	pub fn from_form(form: &Form) -> Self {
		let groups = form
			.fields()
			.iter()
			.map(|field| FieldGroup {
				name: field.name().to_string(),
				id: format!("id_{}", field.name()),
				label: field.label().map(|l| l.to_string()),
				widget: field.widget().clone(),
				required: field.required(),
				error: None,
				aria_invalid: false,
			})
			.collect();

		Self {
			groups,
			submit: SubmitButton::new(messages::SUBMIT_LABEL),
			counter: CharCounter::new(prospekt_forms::validators::MESSAGE_MAX_LEN),
			values: HashMap::new(),
			checks: HashMap::new(),
			honeypot: String::new(),
			focused: None,
		}
	}

	pub fn groups(&self) -> &[FieldGroup] {
		&self.groups
	}

	pub fn group(&self, name: &str) -> Option<&FieldGroup> {
		self.groups.iter().find(|g| g.name == name)
	}

	fn group_mut(&mut self, name: &str) -> Option<&mut FieldGroup> {
		self.groups.iter_mut().find(|g| g.name == name)
	}

	/// Current text of a field's input.
	pub fn value(&self, name: &str) -> &str {
		self.values.get(name).map(|v| v.as_str()).unwrap_or("")
	}

	pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
		self.values.insert(name.to_string(), value.into());
	}

	/// Current state of a checkbox.
	pub fn checked(&self, name: &str) -> bool {
		self.checks.get(name).copied().unwrap_or(false)
	}

	pub fn set_checked(&mut self, name: &str, checked: bool) {
		self.checks.insert(name.to_string(), checked);
	}

	pub fn honeypot_value(&self) -> &str {
		&self.honeypot
	}

	pub fn set_honeypot_value(&mut self, value: impl Into<String>) {
		self.honeypot = value.into();
	}

	/// Field group that currently holds focus, if any.
	pub fn focused(&self) -> Option<&str> {
		self.focused.as_deref()
	}

	pub fn focus(&mut self, name: &str) {
		self.focused = Some(name.to_string());
	}

	/// Bound data in the shape [`Form::bind`] expects: text inputs as
	/// strings, checkboxes as booleans.
	pub fn bound_data(&self) -> HashMap<String, serde_json::Value> {
		let mut data: HashMap<String, serde_json::Value> = self
			.values
			.iter()
			.map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
			.collect();
		for (name, checked) in &self.checks {
			data.insert(name.clone(), serde_json::Value::Bool(*checked));
		}
		data
	}

	/// Clear all inputs, checks, and errors after a successful submission.
	///
	/// The honeypot keeps whatever a bot typed into it; a legitimate reset
	/// never had a value there.
	pub fn reset(&mut self) {
		self.values.clear();
		self.checks.clear();
		self.counter.update(0);
		self.focused = None;
		for group in &mut self.groups {
			group.error = None;
			group.aria_invalid = false;
		}
	}
}

impl FeedbackController for FormView {
	fn show_error(&mut self, field: &str, message: &str) {
		if let Some(group) = self.group_mut(field) {
			group.error = Some(message.to_string());
			group.aria_invalid = true;
		}
	}

	fn clear_error(&mut self, field: &str) {
		if let Some(group) = self.group_mut(field) {
			group.error = None;
			group.aria_invalid = false;
		}
	}
}
