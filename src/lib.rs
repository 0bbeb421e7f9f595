//! prospekt: client-side behavior for a small marketing website.
//!
//! The facade re-exports the two member crates:
//!
//! - [`forms`]: DOM-independent form model (fields, validators, binding,
//!   honeypot, and the contact-form definition)
//! - [`pages`]: headless client behavior (form view with inline feedback,
//!   submission gate, notification banner, and the page chrome controller)

#[cfg(feature = "forms")]
pub use prospekt_forms as forms;

#[cfg(feature = "pages")]
pub use prospekt_pages as pages;
