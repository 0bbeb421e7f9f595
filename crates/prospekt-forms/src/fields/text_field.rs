//! Text field with length validation

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Free-text field with optional length bounds.
///
/// The empty-versus-too-short precedence is fixed: an empty value on a
/// required field yields the required message, and only a non-empty value
/// is checked against `min_length`.
#[derive(Debug, Clone)]
pub struct TextField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub min_length: Option<usize>,
	pub max_length: Option<usize>,
	pub strip: bool,
	pub required_message: Option<String>,
	pub invalid_message: Option<String>,
}

impl TextField {
	/// Create a new TextField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use prospekt_forms::fields::TextField;
	///
	/// let field = TextField::new("name");
	/// assert_eq!(field.name, "name");
	/// assert!(!field.required);
	/// assert_eq!(field.min_length, None);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: false,
			widget: Widget::TextInput,
			min_length: None,
			max_length: None,
			strip: true,
			required_message: None,
			invalid_message: None,
		}
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
		self
	}

	/// Message shown when the field is required and empty.
	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = Some(message.into());
		self
	}

	/// Message shown when the value is present but fails a length rule.
	pub fn with_invalid_message(mut self, message: impl Into<String>) -> Self {
		self.invalid_message = Some(message.into());
		self
	}

	fn required_error(&self) -> FieldError {
		FieldError::Required(
			self.required_message
				.clone()
				.unwrap_or_else(|| "This field is required.".to_string()),
		)
	}
}

impl FormField for TextField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.required
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let str_value = match value {
			Some(v) if v.is_null() => None,
			Some(v) => Some(v.as_str().ok_or_else(|| {
				FieldError::Invalid("Value must be a string".to_string())
			})?),
			None => None,
		};

		let processed = match str_value {
			Some(v) => {
				let v = if self.strip { v.trim() } else { v };
				if v.is_empty() {
					if self.required {
						return Err(self.required_error());
					}
					return Ok(serde_json::Value::String(String::new()));
				}
				v.to_string()
			}
			None => {
				if self.required {
					return Err(self.required_error());
				}
				return Ok(serde_json::Value::String(String::new()));
			}
		};

		// Character count, not byte count, so multi-byte input is measured
		// the way the user perceives it.
		let char_count = processed.chars().count();
		if let Some(min_length) = self.min_length
			&& char_count < min_length
		{
			return Err(FieldError::Invalid(self.invalid_message.clone().unwrap_or_else(
				|| format!("Ensure this value has at least {min_length} characters"),
			)));
		}

		if let Some(max_length) = self.max_length
			&& char_count > max_length
		{
			return Err(FieldError::Invalid(self.invalid_message.clone().unwrap_or_else(
				|| format!("Ensure this value has at most {max_length} characters"),
			)));
		}

		Ok(serde_json::Value::String(processed))
	}
}
