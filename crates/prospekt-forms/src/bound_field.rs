use crate::field::{FormField, Widget};

/// A field definition paired with its bound value and errors: the logical
/// "field group" of input, label, and error slot.
pub struct BoundField<'a> {
	field: &'a dyn FormField,
	data: Option<&'a serde_json::Value>,
	errors: &'a [String],
}

impl<'a> BoundField<'a> {
	/// # Examples
	///
	/// ```
	/// use prospekt_forms::{BoundField, FormField, TextField};
	///
	/// let field: Box<dyn FormField> = Box::new(TextField::new("name"));
	/// let data = serde_json::json!("Jo");
	///
	/// let bound = BoundField::new(field.as_ref(), Some(&data), &[]);
	/// assert_eq!(bound.name(), "name");
	/// assert_eq!(bound.id_for_label(), "id_name");
	/// assert!(!bound.has_errors());
	/// ```
	pub fn new(
		field: &'a dyn FormField,
		data: Option<&'a serde_json::Value>,
		errors: &'a [String],
	) -> Self {
		Self {
			field,
			data,
			errors,
		}
	}

	pub fn name(&self) -> &str {
		self.field.name()
	}

	/// The `id` attribute the field's label points at.
	pub fn id_for_label(&self) -> String {
		format!("id_{}", self.field.name())
	}

	pub fn label(&self) -> Option<&str> {
		self.field.label()
	}

	pub fn value(&self) -> Option<&serde_json::Value> {
		self.data
	}

	pub fn errors(&self) -> &[String] {
		self.errors
	}

	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}

	pub fn widget(&self) -> &Widget {
		self.field.widget()
	}

	pub fn is_required(&self) -> bool {
		self.field.required()
	}
}
