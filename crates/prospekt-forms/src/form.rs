use crate::bound_field::BoundField;
use crate::field::FormField;
use std::collections::HashMap;
use std::ops::Index;

/// A form: an ordered set of field definitions plus, once bound, the raw
/// data and the validation outcome.
///
/// Binding and validating are separate steps so the submit handler can
/// re-validate everything synchronously and authoritatively, regardless of
/// what per-field live validation showed earlier.
pub struct Form {
	fields: Vec<Box<dyn FormField>>,
	data: HashMap<String, serde_json::Value>,
	errors: HashMap<String, Vec<String>>,
	is_bound: bool,
}

impl Form {
	/// Create a new empty form
	///
	/// # Examples
	///
	/// ```
	/// use prospekt_forms::Form;
	///
	/// let form = Form::new();
	/// assert!(!form.is_bound());
	/// assert!(form.fields().is_empty());
	/// ```
	pub fn new() -> Self {
		Self {
			fields: vec![],
			data: HashMap::new(),
			errors: HashMap::new(),
			is_bound: false,
		}
	}

	/// Add a field to the form
	///
	/// # Examples
	///
	/// ```
	/// use prospekt_forms::{Form, TextField};
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(TextField::new("name")));
	/// assert_eq!(form.field_count(), 1);
	/// ```
	pub fn add_field(&mut self, field: Box<dyn FormField>) {
		self.fields.push(field);
	}

	/// Bind form data for validation
	pub fn bind(&mut self, data: HashMap<String, serde_json::Value>) {
		self.data = data;
		self.is_bound = true;
	}

	/// Validate the form and return true if all fields are valid.
	///
	/// Populates [`errors`](Self::errors) and replaces bound values with
	/// their cleaned forms.
	///
	/// # Examples
	///
	/// ```
	/// use prospekt_forms::{Form, TextField};
	/// use std::collections::HashMap;
	/// use serde_json::json;
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(TextField::new("name").required()));
	///
	/// let mut data = HashMap::new();
	/// data.insert("name".to_string(), json!("Jo"));
	/// form.bind(data);
	///
	/// assert!(form.is_valid());
	/// assert!(form.errors().is_empty());
	/// assert_eq!(form.cleaned_data().get("name"), Some(&json!("Jo")));
	/// ```
	pub fn is_valid(&mut self) -> bool {
		if !self.is_bound {
			return false;
		}

		self.errors.clear();

		for field in &self.fields {
			let value = self.data.get(field.name());

			match field.clean(value) {
				Ok(cleaned) => {
					self.data.insert(field.name().to_string(), cleaned);
				}
				Err(e) => {
					self.errors
						.entry(field.name().to_string())
						.or_default()
						.push(e.to_string());
				}
			}
		}

		self.errors.is_empty()
	}

	pub fn cleaned_data(&self) -> &HashMap<String, serde_json::Value> {
		&self.data
	}

	pub fn errors(&self) -> &HashMap<String, Vec<String>> {
		&self.errors
	}

	pub fn is_bound(&self) -> bool {
		self.is_bound
	}

	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}

	pub fn get_field(&self, name: &str) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|f| f.name() == name)
			.map(|f| f.as_ref())
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	/// Name of the first field, in definition order, that failed the last
	/// validation. This is the field that receives focus after a rejected
	/// submit.
	pub fn first_error_field(&self) -> Option<&str> {
		self.fields
			.iter()
			.map(|f| f.name())
			.find(|name| self.errors.contains_key(*name))
	}

	/// Discard bound data and errors, returning the form to its unbound
	/// state. Called after a successful submission.
	pub fn reset(&mut self) {
		self.data.clear();
		self.errors.clear();
		self.is_bound = false;
	}

	pub fn get_bound_field<'a>(&'a self, name: &str) -> Option<BoundField<'a>> {
		let field = self.get_field(name)?;
		let data = self.data.get(name);
		let errors = self.errors.get(name).map(|e| e.as_slice()).unwrap_or(&[]);

		Some(BoundField::new(field, data, errors))
	}
}

impl Default for Form {
	fn default() -> Self {
		Self::new()
	}
}

impl Form {
	/// Safe field access by name; `None` if the field is not found.
	// Allow borrowed_box because Index trait impl requires &Box<dyn FormField>
	#[allow(clippy::borrowed_box)]
	pub fn get(&self, name: &str) -> Option<&Box<dyn FormField>> {
		self.fields.iter().find(|f| f.name() == name)
	}
}

impl Index<&str> for Form {
	type Output = Box<dyn FormField>;

	fn index(&self, name: &str) -> &Self::Output {
		self.get(name)
			.unwrap_or_else(|| panic!("Field '{}' not found", name))
	}
}
