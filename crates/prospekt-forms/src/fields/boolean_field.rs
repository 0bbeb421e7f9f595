//! Checkbox field

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Checkbox field, optionally requiring the box to be checked.
///
/// `must_be_true` models consent controls: an unchecked box is a failing
/// field with its own message, not a missing value.
#[derive(Debug, Clone)]
pub struct BooleanField {
	pub name: String,
	pub label: Option<String>,
	pub must_be_true: bool,
	pub required_message: Option<String>,
	widget: Widget,
}

impl BooleanField {
	/// # Examples
	///
	/// ```
	/// use prospekt_forms::FormField;
	/// use prospekt_forms::fields::BooleanField;
	/// use serde_json::json;
	///
	/// let field = BooleanField::new("privacy").must_be_true();
	/// assert!(field.clean(Some(&json!(true))).is_ok());
	/// assert!(field.clean(Some(&json!(false))).is_err());
	/// assert!(field.clean(None).is_err());
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			must_be_true: false,
			required_message: None,
			widget: Widget::CheckboxInput,
		}
	}

	pub fn must_be_true(mut self) -> Self {
		self.must_be_true = true;
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = Some(message.into());
		self
	}
}

impl FormField for BooleanField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.must_be_true
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		// An absent checkbox is unchecked.
		let checked = value.and_then(|v| v.as_bool()).unwrap_or(false);

		if self.must_be_true && !checked {
			return Err(FieldError::Required(
				self.required_message
					.clone()
					.unwrap_or_else(|| "This box must be checked.".to_string()),
			));
		}

		Ok(serde_json::Value::Bool(checked))
	}
}
