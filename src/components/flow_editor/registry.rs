use std::collections::HashMap;

use super::types::ProgramModule;

/// Working copy of an alarm pattern's module list.
///
/// The registry owns an isolated clone of whatever the host supplied, so
/// in-editor mutations never leak back into the source. Lookups go through
/// a name index; when the source carries duplicate names the later entry
/// wins the index slot, matching the behavior of every other name join in
/// the editor.
#[derive(Clone, Debug, Default)]
pub struct ModuleRegistry {
	modules: Vec<ProgramModule>,
	index: HashMap<String, usize>,
}

impl ModuleRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the working set with a copy of `modules`, discarding any
	/// local edits. Called again whenever the host swaps the source list.
	pub fn load(&mut self, modules: &[ProgramModule]) {
		self.modules = modules.to_vec();
		self.reindex();
	}

	pub fn get(&self, name: &str) -> Option<&ProgramModule> {
		self.index.get(name).map(|&i| &self.modules[i])
	}

	/// Insert a new module or replace the existing one with the same name.
	pub fn upsert(&mut self, module: ProgramModule) {
		match self.index.get(&module.name) {
			Some(&i) => self.modules[i] = module,
			None => {
				self.index.insert(module.name.clone(), self.modules.len());
				self.modules.push(module);
			}
		}
	}

	/// Remove a module by name, reporting whether anything was removed.
	/// Input lists on other modules are left alone; references to the
	/// removed name simply stop resolving to a connection.
	pub fn remove(&mut self, name: &str) -> bool {
		match self.index.remove(name) {
			Some(i) => {
				self.modules.remove(i);
				self.reindex();
				true
			}
			None => false,
		}
	}

	/// Move one module, leaving every other field and module untouched.
	/// Unknown names report `false`.
	pub fn set_position(&mut self, name: &str, x: f64, y: f64) -> bool {
		match self.index.get(name) {
			Some(&i) => {
				self.modules[i].x = x;
				self.modules[i].y = y;
				true
			}
			None => false,
		}
	}

	/// All modules in insertion order.
	pub fn all(&self) -> &[ProgramModule] {
		&self.modules
	}

	pub fn len(&self) -> usize {
		self.modules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.modules.is_empty()
	}

	fn reindex(&mut self) {
		self.index.clear();
		for (i, module) in self.modules.iter().enumerate() {
			self.index.insert(module.name.clone(), i);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn module(name: &str, x: f64, y: f64, inputs: &[&str]) -> ProgramModule {
		ProgramModule {
			module_type: 0,
			x,
			y,
			name: name.to_string(),
			inputs: inputs.iter().map(|s| s.to_string()).collect(),
			classes: None,
			parameters: None,
		}
	}

	#[test]
	fn load_copies_the_source() {
		let source = vec![module("a", 1.0, 2.0, &[]), module("b", 3.0, 4.0, &["a"])];
		let mut first = ModuleRegistry::new();
		let mut second = ModuleRegistry::new();
		first.load(&source);
		second.load(&source);

		assert_eq!(first.all(), source.as_slice());
		assert_eq!(first.all(), second.all());

		// Edits stay local to one working copy.
		first.set_position("a", 9.0, 9.0);
		assert_eq!(source[0].x, 1.0);
		assert_eq!(second.get("a").unwrap().x, 1.0);
		assert_eq!(first.get("a").unwrap().x, 9.0);
	}

	#[test]
	fn load_discards_local_edits() {
		let source = vec![module("a", 1.0, 2.0, &[])];
		let mut registry = ModuleRegistry::new();
		registry.load(&source);
		registry.upsert(module("draft", 0.0, 0.0, &[]));
		registry.set_position("a", 50.0, 50.0);

		registry.load(&source);
		assert_eq!(registry.len(), 1);
		assert!(registry.get("draft").is_none());
		assert_eq!(registry.get("a").unwrap().x, 1.0);
	}

	#[test]
	fn upsert_inserts_then_replaces() {
		let mut registry = ModuleRegistry::new();
		registry.upsert(module("a", 1.0, 1.0, &[]));
		registry.upsert(module("b", 2.0, 2.0, &[]));
		assert_eq!(registry.len(), 2);

		let mut replacement = module("a", 7.0, 8.0, &["b"]);
		replacement.module_type = 18;
		registry.upsert(replacement.clone());

		assert_eq!(registry.len(), 2);
		assert_eq!(registry.get("a"), Some(&replacement));
		// Replacement keeps the original slot.
		assert_eq!(registry.all()[0].name, "a");
	}

	#[test]
	fn remove_reports_and_keeps_references() {
		let mut registry = ModuleRegistry::new();
		registry.load(&[module("a", 0.0, 0.0, &[]), module("b", 0.0, 0.0, &["a"])]);

		assert!(registry.remove("a"));
		assert!(!registry.remove("a"));
		assert_eq!(registry.len(), 1);

		// The dangling reference survives; it just no longer resolves.
		assert_eq!(registry.get("b").unwrap().inputs, vec!["a"]);
	}

	#[test]
	fn remove_keeps_later_lookups_valid() {
		let mut registry = ModuleRegistry::new();
		registry.load(&[
			module("a", 0.0, 0.0, &[]),
			module("b", 1.0, 0.0, &[]),
			module("c", 2.0, 0.0, &[]),
		]);

		registry.remove("a");
		assert_eq!(registry.get("c").unwrap().x, 2.0);
		assert!(registry.set_position("c", 5.0, 5.0));
		assert_eq!(registry.all()[1].x, 5.0);
	}

	#[test]
	fn set_position_targets_exactly_one_module() {
		let untouched = module("b", 7.0, 9.0, &["a"]);
		let mut registry = ModuleRegistry::new();
		registry.load(&[module("a", 100.0, 100.0, &[]), untouched.clone()]);

		assert!(registry.set_position("a", 150.0, 80.0));
		assert!(!registry.set_position("missing", 0.0, 0.0));

		let moved = registry.get("a").unwrap();
		assert_eq!((moved.x, moved.y), (150.0, 80.0));
		assert_eq!(registry.get("b"), Some(&untouched));
	}

	#[test]
	fn duplicate_names_resolve_to_the_last_entry() {
		let mut registry = ModuleRegistry::new();
		registry.load(&[module("a", 1.0, 1.0, &[]), module("a", 2.0, 2.0, &[])]);

		assert_eq!(registry.len(), 2);
		assert_eq!(registry.get("a").unwrap().x, 2.0);
	}
}
