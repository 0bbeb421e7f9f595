//! The contact form of the site: field definitions, user-facing messages,
//! and the validated payload handed to the submission transport.

use crate::field::Widget;
use crate::fields::{BooleanField, EmailField, PhoneField, TextField};
use crate::form::Form;
use crate::validators::{MESSAGE_MIN_LEN, NAME_MIN_LEN};
use serde::Serialize;
use std::collections::HashMap;

/// All user-facing texts of the contact form. Hardcoded German, matching
/// the site.
pub mod messages {
	pub const NAME_REQUIRED: &str = "Bitte geben Sie Ihren Namen ein.";
	pub const NAME_TOO_SHORT: &str = "Der Name muss mindestens 2 Zeichen lang sein.";
	pub const EMAIL_REQUIRED: &str = "Bitte geben Sie Ihre E-Mail-Adresse ein.";
	pub const EMAIL_INVALID: &str = "Bitte geben Sie eine gültige E-Mail-Adresse ein.";
	pub const PHONE_INVALID: &str = "Bitte geben Sie eine gültige Telefonnummer ein.";
	pub const MESSAGE_REQUIRED: &str = "Bitte geben Sie eine Nachricht ein.";
	pub const MESSAGE_TOO_SHORT: &str = "Die Nachricht muss mindestens 10 Zeichen lang sein.";
	pub const PRIVACY_REQUIRED: &str = "Bitte akzeptieren Sie die Datenschutzbestimmungen.";

	pub const SUBMIT_LABEL: &str = "Nachricht senden";
	pub const SENDING_LABEL: &str = "Wird gesendet...";
	pub const SUCCESS_NOTICE: &str =
		"Vielen Dank für Ihre Nachricht! Ich werde mich so bald wie möglich bei Ihnen melden.";
	pub const FAILURE_NOTICE: &str = "Es ist ein Fehler aufgetreten. Bitte versuchen Sie es \
		 später erneut oder kontaktieren Sie mich direkt per E-Mail.";
}

/// Build the contact form: name, email, optional phone, message, and the
/// privacy consent box, each with its inline messages.
///
/// # Examples
///
/// ```
/// use prospekt_forms::contact::contact_form;
///
/// let form = contact_form();
/// assert_eq!(form.field_count(), 5);
/// assert!(form.get_field("phone").is_some());
/// ```
pub fn contact_form() -> Form {
	let mut form = Form::new();

	form.add_field(Box::new(
		TextField::new("name")
			.required()
			.with_min_length(NAME_MIN_LEN)
			.with_label("Name")
			.with_required_message(messages::NAME_REQUIRED)
			.with_invalid_message(messages::NAME_TOO_SHORT),
	));
	form.add_field(Box::new(
		EmailField::new("email")
			.required()
			.with_label("E-Mail")
			.with_required_message(messages::EMAIL_REQUIRED)
			.with_invalid_message(messages::EMAIL_INVALID),
	));
	form.add_field(Box::new(
		PhoneField::new("phone")
			.with_label("Telefon")
			.with_invalid_message(messages::PHONE_INVALID),
	));
	form.add_field(Box::new(
		TextField::new("message")
			.required()
			.with_min_length(MESSAGE_MIN_LEN)
			.with_widget(Widget::TextArea)
			.with_label("Nachricht")
			.with_required_message(messages::MESSAGE_REQUIRED)
			.with_invalid_message(messages::MESSAGE_TOO_SHORT),
	));
	form.add_field(Box::new(
		BooleanField::new("privacy")
			.must_be_true()
			.with_label("Datenschutz")
			.with_required_message(messages::PRIVACY_REQUIRED),
	));

	form
}

/// The validated submission payload. Built only from cleaned data, so
/// values are trimmed and the consent flag is genuine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub message: String,
	pub privacy_accepted: bool,
}

impl ContactPayload {
	/// Extract the payload from a form's cleaned data.
	///
	/// Missing optional entries become empty strings; callers only reach
	/// this after `is_valid()` returned true.
	pub fn from_cleaned(data: &HashMap<String, serde_json::Value>) -> Self {
		let text = |key: &str| {
			data.get(key)
				.and_then(|v| v.as_str())
				.unwrap_or("")
				.to_string()
		};

		Self {
			name: text("name"),
			email: text("email"),
			phone: text("phone"),
			message: text("message"),
			privacy_accepted: data
				.get("privacy")
				.and_then(|v| v.as_bool())
				.unwrap_or(false),
		}
	}
}
