pub mod boolean_field;
pub mod email_field;
pub mod phone_field;
pub mod text_field;

pub use boolean_field::BooleanField;
pub use email_field::EmailField;
pub use phone_field::PhoneField;
pub use text_field::TextField;
