//! Headless client-side behavior for prospekt
//!
//! Everything a browser frontend needs to run the contact page, minus the
//! DOM: an inline-feedback seam, a renderable form view, the submission
//! gate, the notification banner, and the page chrome controller (theme,
//! menu, scroll state). Rendering layers implement the small traits at the
//! edges ([`FeedbackController`], [`PreferenceStore`], [`SubmissionTransport`])
//! and drive the controllers from their event handlers.

pub mod banner;
pub mod chrome;
pub mod contact;
pub mod feedback;
pub mod gate;
pub mod transport;
pub mod view;

pub use banner::{Notice, NoticeKind, NotificationBanner};
pub use chrome::{MemoryPreferenceStore, PreferenceStore, Theme, UiController, scroll_target};
pub use contact::ContactFormController;
pub use feedback::{FeedbackController, RecordingFeedback};
pub use gate::{GatePhase, SubmissionGate};
pub use transport::{FixedDelayTransport, SubmissionError, SubmissionTransport};
pub use view::{CharCounter, FieldGroup, FormView, SubmitButton};
