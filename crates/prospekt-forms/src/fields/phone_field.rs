//! Optional phone field

use crate::field::{FieldResult, FormField, Widget};
use crate::validators::PhoneValidator;

/// Phone number field. Always optional: an empty value is valid, a
/// non-empty value must pass [`PhoneValidator`].
#[derive(Debug, Clone)]
pub struct PhoneField {
	pub name: String,
	pub label: Option<String>,
	pub invalid_message: Option<String>,
	widget: Widget,
}

impl PhoneField {
	/// # Examples
	///
	/// ```
	/// use prospekt_forms::FormField;
	/// use prospekt_forms::fields::PhoneField;
	/// use serde_json::json;
	///
	/// let field = PhoneField::new("phone");
	/// assert!(field.clean(None).is_ok());
	/// assert!(field.clean(Some(&json!("+49 170 1234567"))).is_ok());
	/// assert!(field.clean(Some(&json!("123"))).is_err());
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			invalid_message: None,
			widget: Widget::TelInput,
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_invalid_message(mut self, message: impl Into<String>) -> Self {
		self.invalid_message = Some(message.into());
		self
	}
}

impl FormField for PhoneField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		false
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let raw = value
			.and_then(|v| v.as_str())
			.unwrap_or("")
			.trim()
			.to_string();

		let validator = match &self.invalid_message {
			Some(msg) => PhoneValidator::new().with_message(msg.clone()),
			None => PhoneValidator::new(),
		};
		validator.validate(&raw)?;

		Ok(serde_json::Value::String(raw))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::FieldError;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_phone_field_missing_degrades_gracefully() {
		// A form without a phone input binds no value at all.
		let field = PhoneField::new("phone");
		assert_eq!(field.clean(None).unwrap(), json!(""));
	}

	#[rstest]
	fn test_phone_field_custom_message() {
		let field = PhoneField::new("phone").with_invalid_message("keine Nummer");
		assert_eq!(
			field.clean(Some(&json!("abc"))).unwrap_err(),
			FieldError::Invalid("keine Nummer".to_string())
		);
	}
}
