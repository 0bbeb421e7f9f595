//! Email field

use crate::field::{FieldError, FieldResult, FormField, Widget};
use crate::validators::EmailValidator;

/// Email address field.
///
/// An empty value on a required field reports the required message; a
/// non-empty value that fails the pattern reports the invalid message.
#[derive(Debug, Clone)]
pub struct EmailField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub required_message: Option<String>,
	pub invalid_message: Option<String>,
	widget: Widget,
}

impl EmailField {
	/// # Examples
	///
	/// ```
	/// use prospekt_forms::FormField;
	/// use prospekt_forms::fields::EmailField;
	/// use serde_json::json;
	///
	/// let field = EmailField::new("email").required();
	/// assert!(field.clean(Some(&json!("jo@example.com"))).is_ok());
	/// assert!(field.clean(Some(&json!("jo@example"))).is_err());
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: false,
			required_message: None,
			invalid_message: None,
			widget: Widget::EmailInput,
		}
	}

	pub fn required(mut self) -> Self {
		self.required = true;
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

	pub fn with_invalid_message(mut self, message: impl Into<String>) -> Self {
		self.invalid_message = Some(message.into());
		self
	}

	fn validator(&self) -> EmailValidator {
		match &self.invalid_message {
			Some(msg) => EmailValidator::new().with_message(msg.clone()),
			None => EmailValidator::new(),
		}
	}
}

impl FormField for EmailField {
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
		let raw = value
			.and_then(|v| v.as_str())
			.unwrap_or("")
			.trim()
			.to_string();

		if raw.is_empty() {
			if self.required {
				return Err(FieldError::Required(
					self.required_message
						.clone()
						.unwrap_or_else(|| "This field is required.".to_string()),
				));
			}
			return Ok(serde_json::Value::String(String::new()));
		}

		self.validator().validate(&raw)?;
		Ok(serde_json::Value::String(raw))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_email_field_precedence_empty_before_malformed() {
		let field = EmailField::new("email")
			.required()
			.with_required_message("fehlt")
			.with_invalid_message("ungültig");

		assert_eq!(
			field.clean(Some(&json!(""))).unwrap_err(),
			FieldError::Required("fehlt".to_string())
		);
		assert_eq!(
			field.clean(Some(&json!("nope"))).unwrap_err(),
			FieldError::Invalid("ungültig".to_string())
		);
	}

	#[rstest]
	#[case("jo@example.com")]
	#[case("  jo@example.com  ")]
	#[case("A@B.COM")]
	fn test_email_field_accepts(#[case] value: &str) {
		let field = EmailField::new("email").required();
		assert!(field.clean(Some(&json!(value))).is_ok());
	}

	#[rstest]
	fn test_email_field_optional_empty() {
		let field = EmailField::new("email");
		assert_eq!(field.clean(None).unwrap(), json!(""));
	}

	#[rstest]
	fn test_email_field_trims_cleaned_value() {
		let field = EmailField::new("email");
		assert_eq!(
			field.clean(Some(&json!("  jo@example.com "))).unwrap(),
			json!("jo@example.com")
		);
	}
}
