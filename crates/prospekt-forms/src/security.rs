//! Spam protection for the contact form
//!
//! A honeypot field is the only gate: a hidden input that humans never see
//! and bots tend to auto-fill. A filled honeypot marks the submission as
//! spam, which is dropped silently; the sender is never told.

use std::collections::HashMap;

/// Field name the honeypot is rendered under. Chosen to look like a real
/// input to automated form fillers.
pub const HONEYPOT_FIELD: &str = "website";

#[derive(Debug, thiserror::Error)]
pub enum SecurityError {
	#[error("spam detected: honeypot field '{0}' was filled")]
	SpamDetected(String),
}

/// Hidden field used to detect automated submissions.
///
/// Rendered off-screen with `tabindex="-1"` and `autocomplete="off"`;
/// legitimate submissions always carry it empty.
pub struct HoneypotField {
	name: String,
}

impl HoneypotField {
	/// Honeypot under the default [`HONEYPOT_FIELD`] name.
	pub fn new() -> Self {
		Self::named(HONEYPOT_FIELD)
	}

	pub fn named(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Validate the honeypot value.
	///
	/// # Examples
	///
	/// ```
	/// use prospekt_forms::security::HoneypotField;
	///
	/// let honeypot = HoneypotField::new();
	/// assert!(honeypot.validate(None).is_ok());
	/// assert!(honeypot.validate(Some("")).is_ok());
	/// assert!(honeypot.validate(Some("http://spam.example")).is_err());
	/// ```
	pub fn validate(&self, value: Option<&str>) -> Result<(), SecurityError> {
		match value {
			None | Some("") => Ok(()),
			Some(_) => Err(SecurityError::SpamDetected(self.name.clone())),
		}
	}

	/// Validate against a whole bound-data map.
	pub fn validate_data(
		&self,
		data: &HashMap<String, serde_json::Value>,
	) -> Result<(), SecurityError> {
		self.validate(data.get(&self.name).and_then(|v| v.as_str()))
	}
}

impl Default for HoneypotField {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_honeypot_default_name() {
		assert_eq!(HoneypotField::new().name(), "website");
	}

	#[test]
	fn test_honeypot_any_content_is_spam() {
		let honeypot = HoneypotField::new();

		assert!(honeypot.validate(Some("x")).is_err());
		assert!(honeypot.validate(Some("   ")).is_err());
	}

	#[test]
	fn test_honeypot_against_data_map() {
		let honeypot = HoneypotField::new();

		let mut data = HashMap::new();
		data.insert("website".to_string(), json!(""));
		assert!(honeypot.validate_data(&data).is_ok());

		data.insert("website".to_string(), json!("bot-value"));
		assert!(honeypot.validate_data(&data).is_err());
	}

	#[test]
	fn test_honeypot_absent_field_is_legitimate() {
		let honeypot = HoneypotField::new();
		assert!(honeypot.validate_data(&HashMap::new()).is_ok());
	}
}
