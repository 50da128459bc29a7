use super::registry::ModuleRegistry;
use super::types::ProgramModule;

/// One in-flight drag, captured at pointer-down.
///
/// The session stores the module's name rather than a handle to it, so it
/// stays valid even if the working copy is reloaded mid-drag. Position
/// updates are always origin plus total pointer delta; there is no
/// accumulation that could drift across missed move events.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
	pub name: String,
	pub origin_x: f64,
	pub origin_y: f64,
	start_pointer_x: f64,
	start_pointer_y: f64,
}

/// Two-state drag controller: idle, or dragging exactly one module.
#[derive(Clone, Debug, Default)]
pub struct DragController {
	session: Option<DragSession>,
}

impl DragController {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_dragging(&self) -> bool {
		self.session.is_some()
	}

	/// Name of the module currently being dragged.
	pub fn dragged(&self) -> Option<&str> {
		self.session.as_ref().map(|s| s.name.as_str())
	}

	/// Open a session for `module`. A session that is already active is
	/// replaced; the matching pointer-up may never have been observed.
	pub fn begin(&mut self, module: &ProgramModule, pointer_x: f64, pointer_y: f64) {
		self.session = Some(DragSession {
			name: module.name.clone(),
			origin_x: module.x,
			origin_y: module.y,
			start_pointer_x: pointer_x,
			start_pointer_y: pointer_y,
		});
	}

	/// Apply the current pointer position to the dragged module. Exactly
	/// one module moves; when idle, or when the name no longer resolves,
	/// nothing happens.
	pub fn drag(&self, registry: &mut ModuleRegistry, pointer_x: f64, pointer_y: f64) {
		let Some(session) = &self.session else {
			return;
		};
		let dx = pointer_x - session.start_pointer_x;
		let dy = pointer_y - session.start_pointer_y;
		registry.set_position(&session.name, session.origin_x + dx, session.origin_y + dy);
	}

	/// Close the session and hand it back, leaving the controller idle.
	/// Pointer-up without a session is a no-op.
	pub fn finish(&mut self) -> Option<DragSession> {
		self.session.take()
	}
}
