//! Form processing and validation for prospekt
//!
//! This crate provides the DOM-independent half of the contact form:
//! - Field definitions with per-field required/invalid messages
//! - Pure string validators (email, phone, name, message)
//! - Form binding and authoritative validation
//! - Honeypot field for silent spam detection
//! - The concrete contact-form definition and its validated payload

pub mod bound_field;
pub mod contact;
pub mod field;
pub mod fields;
pub mod form;
pub mod security;
pub mod validators;

pub use bound_field::BoundField;
pub use contact::{ContactPayload, contact_form, messages};
pub use field::{FieldError, FieldResult, FormField, Widget};
pub use fields::{BooleanField, EmailField, PhoneField, TextField};
pub use form::Form;
pub use security::{HONEYPOT_FIELD, HoneypotField, SecurityError};
pub use validators::{
	EmailValidator, PhoneValidator, is_valid_email, is_valid_message, is_valid_name,
	is_valid_phone,
};
