use leptos::prelude::*;
use web_sys::MouseEvent;

use super::connections::{MODULE_HEIGHT, MODULE_WIDTH};
use super::kind::ModuleKind;
use super::types::ProgramModule;

/// One module box, absolutely positioned on the canvas.
///
/// The box is a plain snapshot of the module; the canvas re-renders it
/// whenever the working copy changes. Pointer-down is forwarded with the
/// client coordinates so the editor can select and start a drag.
#[component]
pub fn ModuleNode(
	module: ProgramModule,
	#[prop(into)] selected: Signal<bool>,
	#[prop(into)] dragged: Signal<bool>,
	on_press: Callback<(ProgramModule, f64, f64)>,
) -> impl IntoView {
	let kind = ModuleKind::of(module.module_type);
	let border = kind.map_or("module-node--reserved", |k| k.border_class());
	let kind_name = match kind {
		Some(k) => k.name().to_string(),
		None => format!("TYPE {}", module.module_type),
	};
	// Label modules show the tag they alias; everything else shows its
	// operator glyph. Reserved tags have neither.
	let headline = match kind {
		Some(ModuleKind::Label) => module
			.inputs
			.first()
			.cloned()
			.unwrap_or_else(|| module.name.clone()),
		Some(k) => k.glyph().to_string(),
		None => String::new(),
	};
	let inputs_preview = (!module.inputs.is_empty()).then(|| module.inputs.join(", "));

	let class = move || {
		let mut class = format!("module-node {}", border);
		if selected.get() {
			class.push_str(" module-node--selected");
		}
		if dragged.get() {
			class.push_str(" module-node--dragged");
		}
		class
	};

	let pressed = module.clone();
	let on_mousedown = move |ev: MouseEvent| {
		ev.prevent_default();
		ev.stop_propagation();
		on_press.run((pressed.clone(), ev.client_x() as f64, ev.client_y() as f64));
	};

	view! {
		<div
			class=class
			style=format!(
				"left: {}px; top: {}px; width: {}px; height: {}px;",
				module.x, module.y, MODULE_WIDTH, MODULE_HEIGHT
			)
			on:mousedown=on_mousedown
		>
			<div class="module-node__headline">{headline}</div>
			<div class="module-node__kind">{kind_name}</div>
			<div class="module-node__name">{module.name.clone()}</div>
			{inputs_preview.map(|preview| view! { <div class="module-node__inputs">{preview}</div> })}
		</div>
	}
}
