use super::types::ProgramModule;

/// The three ordered list fields the property panel can edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListField {
	Inputs,
	Classes,
	Parameters,
}

impl ListField {
	pub fn label(self) -> &'static str {
		match self {
			ListField::Inputs => "Inputs",
			ListField::Classes => "Classes",
			ListField::Parameters => "Parameters",
		}
	}
}

/// Editable snapshot of one module, bound to the property panel.
///
/// The snapshot is taken when a module is selected and lives until the
/// panel closes; nothing here touches the working copy until the edits
/// are submitted. `name` stays private because it is the join key used to
/// find the module again at submit time and must never be edited.
/// Absent optional lists are materialized as empty ones so the list
/// controls are uniform; whether the field was absent is re-derived at
/// merge time from the module's current value.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleForm {
	name: String,
	pub module_type: u32,
	pub x: f64,
	pub y: f64,
	pub inputs: Vec<String>,
	pub classes: Vec<String>,
	pub parameters: Vec<String>,
}

impl ModuleForm {
	pub fn from_module(module: &ProgramModule) -> Self {
		Self {
			name: module.name.clone(),
			module_type: module.module_type,
			x: module.x,
			y: module.y,
			inputs: module.inputs.clone(),
			classes: module.classes.clone().unwrap_or_default(),
			parameters: module.parameters.clone().unwrap_or_default(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Fold the edited fields over the module's current value.
	///
	/// `current` is the registry's value at submit time, not the one the
	/// snapshot was taken from. It contributes the authoritative name and
	/// the absence of the optional lists: a list that is empty here and
	/// absent there stays absent instead of becoming an empty list. Every
	/// other field is overwritten with the form's value.
	pub fn merged_into(&self, current: &ProgramModule) -> ProgramModule {
		ProgramModule {
			module_type: self.module_type,
			x: self.x,
			y: self.y,
			name: current.name.clone(),
			inputs: self.inputs.clone(),
			classes: merge_list(&self.classes, &current.classes),
			parameters: merge_list(&self.parameters, &current.parameters),
		}
	}

	pub fn list(&self, field: ListField) -> &[String] {
		match field {
			ListField::Inputs => &self.inputs,
			ListField::Classes => &self.classes,
			ListField::Parameters => &self.parameters,
		}
	}

	pub fn append(&mut self, field: ListField, value: impl Into<String>) {
		self.list_mut(field).push(value.into());
	}

	/// Remove the entry at `index`; out-of-range indexes are ignored.
	pub fn remove_at(&mut self, field: ListField, index: usize) {
		let list = self.list_mut(field);
		if index < list.len() {
			list.remove(index);
		}
	}

	/// Overwrite the entry at `index` in place, preserving order.
	/// Out-of-range indexes are ignored.
	pub fn replace_at(&mut self, field: ListField, index: usize, value: impl Into<String>) {
		if let Some(slot) = self.list_mut(field).get_mut(index) {
			*slot = value.into();
		}
	}

	fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
		match field {
			ListField::Inputs => &mut self.inputs,
			ListField::Classes => &mut self.classes,
			ListField::Parameters => &mut self.parameters,
		}
	}
}

fn merge_list(edited: &[String], current: &Option<Vec<String>>) -> Option<Vec<String>> {
	if edited.is_empty() && current.is_none() {
		None
	} else {
		Some(edited.to_vec())
	}
}
