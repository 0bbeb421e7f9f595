//! Field trait and error types shared by all form fields

use serde::{Deserialize, Serialize};

/// Error raised by a single field's validation.
///
/// The `Display` output is the exact message shown inline under the field,
/// so the precedence between an empty value and a malformed one is decided
/// inside `clean` and never re-derived by the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	/// The field is required and the value was missing or empty.
	#[error("{0}")]
	Required(String),
	/// The value was present but failed a validation rule.
	#[error("{0}")]
	Invalid(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Input control a field renders as.
///
/// The view uses this to build the matching field group; serialized so a
/// form definition can be shipped to a client renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
	TextInput,
	EmailInput,
	TelInput,
	TextArea,
	CheckboxInput,
	HiddenInput,
}

/// A single form field definition.
///
/// Implementations are pure: `clean` inspects a raw bound value and either
/// returns the normalized value or the error message to display. No
/// implementation touches the interface tree.
pub trait FormField: Send + Sync {
	fn name(&self) -> &str;

	fn label(&self) -> Option<&str>;

	fn required(&self) -> bool;

	fn widget(&self) -> &Widget;

	/// Validate and normalize a bound value.
	///
	/// `None` means the field was absent from the bound data, which is
	/// treated like an empty value: an error for required fields, valid
	/// for optional ones.
	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value>;
}
