use serde::{Deserialize, Serialize};

/// One program module of an alarm pattern, as stored by the backend.
///
/// `name` is the identity used everywhere else: input references, drag
/// sessions and form submissions all join on it. References starting with
/// `$` are internal wires, `%` names are host-provided taps, and anything
/// else is an external tag that never resolves to a module here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgramModule {
	/// Numeric operator tag; the known values live in the kind table.
	#[serde(rename = "type")]
	pub module_type: u32,
	/// Canvas position of the top-left corner, in pixels.
	pub x: f64,
	pub y: f64,
	pub name: String,
	/// Ordered references to upstream modules or external tags.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub inputs: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub classes: Option<Vec<String>>,
	/// Positional operator arguments; meaning depends on `module_type`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parameters: Option<Vec<String>>,
}

/// A rendered wire between two modules.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
	/// `"<source>-<target>"`, stable across recomputes.
	pub id: String,
	/// SVG path data for a cubic Bezier curve.
	pub path: String,
}

/// Payload reported to the host after a completed drag.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleMoved {
	pub name: String,
	pub x: f64,
	pub y: f64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_backend_record() {
		let json = r#"{
			"type": 18,
			"x": 558.09375,
			"y": 401.371094,
			"name": "$01942670",
			"inputs": ["$049fd132"],
			"parameters": ["", "12:00:00", "", "", "", "01:00:00", ""]
		}"#;
		let module: ProgramModule = serde_json::from_str(json).unwrap();
		assert_eq!(module.module_type, 18);
		assert_eq!(module.name, "$01942670");
		assert_eq!(module.inputs, vec!["$049fd132"]);
		assert_eq!(module.classes, None);
		assert_eq!(module.parameters.as_ref().map(Vec::len), Some(7));
	}

	#[test]
	fn missing_lists_default_to_empty_or_absent() {
		let module: ProgramModule =
			serde_json::from_str(r#"{ "type": 0, "x": 1.0, "y": 2.0, "name": "a" }"#).unwrap();
		assert!(module.inputs.is_empty());
		assert_eq!(module.classes, None);
		assert_eq!(module.parameters, None);
	}

	#[test]
	fn serialization_keeps_the_type_key_and_drops_absent_lists() {
		let module = ProgramModule {
			module_type: 0,
			x: 1.0,
			y: 2.0,
			name: "a".to_string(),
			inputs: Vec::new(),
			classes: None,
			parameters: None,
		};
		let json = serde_json::to_value(&module).unwrap();
		assert_eq!(json["type"], 0);
		assert!(json.get("inputs").is_none());
		assert!(json.get("classes").is_none());
		assert!(json.get("parameters").is_none());
	}
}
