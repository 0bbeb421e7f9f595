//! Pure string validators for the contact form
//!
//! These are predicates over raw input, independent of any field or form
//! state. The struct forms carry a customizable message and plug into the
//! field validation pipeline.

use crate::field::{FieldError, FieldResult};
use regex::Regex;
use std::sync::LazyLock;

/// Minimum trimmed length for the name field.
pub const NAME_MIN_LEN: usize = 2;

/// Minimum trimmed length for the message field.
pub const MESSAGE_MIN_LEN: usize = 10;

/// Maximum accepted length for the message field.
///
/// Enforced by truncation at input acceptance, never by rejection.
pub const MESSAGE_MAX_LEN: usize = 1000;

// local@domain.tld with no embedded whitespace or extra '@'.
//
// The pattern contains no letter classes, so matching is inherently
// case-insensitive.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Optional leading '+', then 7-15 digits. Applied after separator stripping.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\+?[0-9]{7,15}$").expect("PHONE_REGEX: invalid regex pattern")
});

/// Returns `true` when the value looks like `local@domain.tld`.
///
/// # Examples
///
/// ```
/// use prospekt_forms::validators::is_valid_email;
///
/// assert!(is_valid_email("a@b.co"));
/// assert!(is_valid_email("A@B.COM"));
/// assert!(!is_valid_email("a@b"));
/// assert!(!is_valid_email("a b@c.de"));
/// ```
pub fn is_valid_email(value: &str) -> bool {
	EMAIL_REGEX.is_match(value)
}

/// Returns `true` for the empty string (the field is optional) or for a
/// value that, after stripping spaces, dashes, and parentheses, is an
/// optional `+` followed by 7-15 digits.
///
/// # Examples
///
/// ```
/// use prospekt_forms::validators::is_valid_phone;
///
/// assert!(is_valid_phone(""));
/// assert!(is_valid_phone("+49 170 1234567"));
/// assert!(is_valid_phone("(030) 123-4567"));
/// assert!(!is_valid_phone("123"));
/// ```
pub fn is_valid_phone(value: &str) -> bool {
	if value.trim().is_empty() {
		return true;
	}
	let cleaned: String = value
		.chars()
		.filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
		.collect();
	PHONE_REGEX.is_match(&cleaned)
}

/// Trimmed length of at least [`NAME_MIN_LEN`] characters.
pub fn is_valid_name(value: &str) -> bool {
	value.trim().chars().count() >= NAME_MIN_LEN
}

/// Trimmed length of at least [`MESSAGE_MIN_LEN`] characters.
pub fn is_valid_message(value: &str) -> bool {
	value.trim().chars().count() >= MESSAGE_MIN_LEN
}

/// Validates that a string value is a well-formed email address.
///
/// # Examples
///
/// ```
/// use prospekt_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("jo@example.com").is_ok());
/// assert!(validator.validate("jo@example").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if is_valid_email(value) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Enter a valid email address");
			Err(FieldError::Invalid(msg.to_string()))
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates that a string value is an acceptable phone number.
///
/// The empty string is valid: the phone field is optional, and the rule for
/// "optional but well-formed when present" lives here rather than at every
/// call site.
///
/// # Examples
///
/// ```
/// use prospekt_forms::validators::PhoneValidator;
///
/// let validator = PhoneValidator::new();
/// assert!(validator.validate("").is_ok());
/// assert!(validator.validate("+49 170 1234567").is_ok());
/// assert!(validator.validate("123").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PhoneValidator {
	message: Option<String>,
}

impl PhoneValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if is_valid_phone(value) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Enter a valid phone number");
			Err(FieldError::Invalid(msg.to_string()))
		}
	}
}

impl Default for PhoneValidator {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	#[case("a@b.co")]
	#[case("A@B.COM")]
	#[case("jo@example.com")]
	#[case("first.last@sub.domain.de")]
	#[case("x+tag@y.io")]
	fn test_email_valid(#[case] value: &str) {
		assert!(is_valid_email(value), "expected '{value}' to be valid");
	}

	#[rstest]
	#[case("")]
	#[case("a@b")]
	#[case("@b.co")]
	#[case("a@.")]
	#[case("a b@c.de")]
	#[case("a@b c.de")]
	#[case("a@@b.co")]
	#[case("plainaddress")]
	fn test_email_invalid(#[case] value: &str) {
		assert!(!is_valid_email(value), "expected '{value}' to be invalid");
	}

	#[rstest]
	#[case("")]
	#[case("1234567")]
	#[case("+491701234567")]
	#[case("+49 170 1234567")]
	#[case("(030) 123-4567")]
	#[case("030 1234567")]
	#[case("123456789012345")]
	fn test_phone_valid(#[case] value: &str) {
		assert!(is_valid_phone(value), "expected '{value}' to be valid");
	}

	#[rstest]
	#[case("123")]
	#[case("123456")]
	#[case("1234567890123456")]
	#[case("phone")]
	#[case("12345ab")]
	#[case("++491701234567")]
	fn test_phone_invalid(#[case] value: &str) {
		assert!(!is_valid_phone(value), "expected '{value}' to be invalid");
	}

	#[rstest]
	#[case("Jo", true)]
	#[case("  Jo  ", true)]
	#[case("J", false)]
	#[case(" J ", false)]
	#[case("", false)]
	fn test_name_min_length(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(is_valid_name(value), expected);
	}

	#[rstest]
	#[case("123456789", false)]
	#[case("1234567890", true)]
	#[case("  1234567890  ", true)]
	#[case("   123456789   ", false)]
	fn test_message_boundary_at_ten_chars(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(is_valid_message(value), expected);
	}

	#[rstest]
	fn test_email_validator_custom_message() {
		let validator = EmailValidator::new().with_message("Keine gültige Adresse");
		match validator.validate("bad") {
			Err(FieldError::Invalid(msg)) => assert_eq!(msg, "Keine gültige Adresse"),
			other => panic!("expected Invalid error, got {other:?}"),
		}
	}

	#[rstest]
	fn test_phone_validator_empty_is_ok() {
		assert!(PhoneValidator::new().validate("").is_ok());
		assert!(PhoneValidator::new().validate("   ").is_ok());
	}

	proptest! {
		// The predicate must agree with the documented pattern: one '@',
		// non-empty local part, a dot in the domain, no whitespace.
		#[test]
		fn prop_email_matches_pattern(s in "\\PC*") {
			let by_parts = {
				let parts: Vec<&str> = s.split('@').collect();
				parts.len() == 2
					&& !parts[0].is_empty()
					&& !parts[0].chars().any(char::is_whitespace)
					&& !parts[1].chars().any(char::is_whitespace)
					&& parts[1].split('.').count() >= 2
					&& parts[1].split('.').all(|seg| !seg.is_empty())
			};
			// The regex allows dots anywhere in the domain as long as at
			// least one separates two non-space runs; compare only on the
			// cases where the hand-rolled split is exact.
			if by_parts {
				prop_assert!(is_valid_email(&s));
			}
		}

		#[test]
		fn prop_case_has_no_effect_on_email(s in "[a-zA-Z0-9.@+]{1,30}") {
			prop_assert_eq!(
				is_valid_email(&s),
				is_valid_email(&s.to_ascii_uppercase())
			);
		}

		#[test]
		fn prop_separators_never_change_phone_validity(digits in "[0-9]{7,15}") {
			let spaced = digits
				.chars()
				.flat_map(|c| [c, ' '])
				.collect::<String>();
			prop_assert!(is_valid_phone(&digits));
			prop_assert!(is_valid_phone(&spaced));
		}
	}
}
