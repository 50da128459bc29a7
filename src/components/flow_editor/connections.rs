use std::collections::{HashMap, HashSet};

use log::warn;

use super::types::{Connection, ProgramModule};

/// Fixed module box size, shared by the node layout and the curve anchors.
pub const MODULE_WIDTH: f64 = 200.0;
pub const MODULE_HEIGHT: f64 = 110.0;

/// Derive every connection implied by the current module list.
///
/// Full recompute on every call: one pass to index names, one pass over
/// each module's inputs. Input names that resolve to a module produce a
/// curve from that module into this one; names that don't resolve
/// (external tags, references left dangling by a deletion) are skipped
/// without complaint. A name listed twice on the same module produces a
/// single connection, keeping connection ids unique.
pub fn derive_connections(modules: &[ProgramModule]) -> Vec<Connection> {
	let by_name: HashMap<&str, &ProgramModule> =
		modules.iter().map(|m| (m.name.as_str(), m)).collect();

	let mut connections = Vec::new();
	for target in modules {
		if target.inputs.is_empty() {
			continue;
		}
		let mut seen = HashSet::new();
		for input in &target.inputs {
			if !seen.insert(input.as_str()) {
				continue;
			}
			let Some(source) = by_name.get(input.as_str()) else {
				continue;
			};
			if let Some(path) = curve_between(source, target) {
				connections.push(Connection {
					id: format!("{}-{}", source.name, target.name),
					path,
				});
			}
		}
	}
	connections
}

/// Cubic Bezier from the source's right-edge center to the target's
/// left-edge center. Control points sit at 60% of the horizontal gap,
/// which keeps the curve flat for aligned modules and S-shaped for
/// backward wires. Non-finite anchors produce no curve; a single NaN in
/// the path data would blank the whole SVG layer.
fn curve_between(source: &ProgramModule, target: &ProgramModule) -> Option<String> {
	let start_x = source.x + MODULE_WIDTH;
	let start_y = source.y + MODULE_HEIGHT / 2.0;
	let end_x = target.x;
	let end_y = target.y + MODULE_HEIGHT / 2.0;

	if ![start_x, start_y, end_x, end_y].iter().all(|v| v.is_finite()) {
		warn!(
			"dropping connection {} -> {}: non-finite position",
			source.name, target.name
		);
		return None;
	}

	let h_offset = (end_x - start_x).abs() * 0.6;
	Some(format!(
		"M {} {} C {} {}, {} {}, {} {}",
		start_x,
		start_y,
		start_x + h_offset,
		start_y,
		end_x - h_offset,
		end_y,
		end_x,
		end_y,
	))
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
	fn anchors_and_control_points() {
		let modules = vec![module("a", 0.0, 0.0, &[]), module("b", 400.0, 0.0, &["a"])];
		let connections = derive_connections(&modules);

		assert_eq!(connections.len(), 1);
		assert_eq!(connections[0].id, "a-b");
		// Start (200, 55), end (400, 55), horizontal offset 0.6 * 200.
		assert_eq!(connections[0].path, "M 200 55 C 320 55, 280 55, 400 55");
	}

	#[test]
	fn backward_wires_use_the_absolute_gap() {
		let modules = vec![
			module("a", 400.0, 0.0, &[]),
			module("b", 0.0, 200.0, &["a"]),
		];
		let connections = derive_connections(&modules);

		// Start (600, 55), end (0, 255), offset 0.6 * 600 = 360.
		assert_eq!(connections[0].path, "M 600 55 C 960 55, -360 255, 0 255");
	}

	#[test]
	fn unresolved_inputs_are_skipped() {
		let modules = vec![module("b", 0.0, 0.0, &["air_off_temperature", "%clock"])];
		assert!(derive_connections(&modules).is_empty());
	}

	#[test]
	fn one_connection_per_resolved_input() {
		let modules = vec![
			module("a", 0.0, 0.0, &[]),
			module("b", 0.0, 200.0, &[]),
			module("merge", 400.0, 100.0, &["a", "b", "external"]),
			module("tail", 800.0, 100.0, &["merge"]),
		];
		let ids: Vec<String> = derive_connections(&modules)
			.into_iter()
			.map(|c| c.id)
			.collect();

		assert_eq!(ids, vec!["a-merge", "b-merge", "merge-tail"]);
	}

	#[test]
	fn repeated_input_names_collapse_to_one_connection() {
		let modules = vec![
			module("a", 0.0, 0.0, &[]),
			module("b", 400.0, 0.0, &["a", "a"]),
		];
		assert_eq!(derive_connections(&modules).len(), 1);
	}

	#[test]
	fn removal_silently_drops_the_wire() {
		let mut modules = vec![
			module("a", 0.0, 0.0, &[]),
			module("b", 400.0, 0.0, &["a"]),
			module("c", 800.0, 0.0, &["b"]),
		];
		assert_eq!(derive_connections(&modules).len(), 2);

		modules.remove(0);
		let ids: Vec<String> = derive_connections(&modules)
			.into_iter()
			.map(|c| c.id)
			.collect();
		assert_eq!(ids, vec!["b-c"]);
	}

	#[test]
	fn non_finite_positions_drop_only_their_curves() {
		let modules = vec![
			module("a", f64::NAN, 0.0, &[]),
			module("b", 400.0, 0.0, &["a"]),
			module("c", 800.0, 0.0, &["b"]),
		];
		let ids: Vec<String> = derive_connections(&modules)
			.into_iter()
			.map(|c| c.id)
			.collect();
		assert_eq!(ids, vec!["b-c"]);
	}
}
