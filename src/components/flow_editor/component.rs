use leptos::ev;
use leptos::prelude::*;
use web_sys::MouseEvent;

use super::connections::derive_connections;
use super::drag::DragController;
use super::form::ModuleForm;
use super::ids;
use super::node::ModuleNode;
use super::panel::PropertyPanel;
use super::registry::ModuleRegistry;
use super::types::{ModuleMoved, ProgramModule};

/// Flow-graph editor for one alarm pattern.
///
/// The editor keeps a working copy of the host's module list and derives
/// the connection layer from it on every change. Moves, submitted edits
/// and deletions are reported through the optional callbacks; persistence
/// stays with the host. Reloading the `modules` signal resets the working
/// copy and drops any uncommitted panel edits.
#[component]
pub fn FlowEditor(
	#[prop(into)] modules: Signal<Vec<ProgramModule>>,
	#[prop(default = None)] on_module_moved: Option<Callback<ModuleMoved>>,
	#[prop(default = None)] on_module_updated: Option<Callback<ProgramModule>>,
	#[prop(default = None)] on_module_deleted: Option<Callback<String>>,
) -> impl IntoView {
	let registry = RwSignal::new(ModuleRegistry::new());
	let drag = RwSignal::new(DragController::new());
	let selected = RwSignal::new(None::<String>);
	let form = RwSignal::new(None::<ModuleForm>);

	Effect::new(move |_| {
		let source = modules.get();
		registry.update(|reg| reg.load(&source));
		// Uncommitted edits die with the old working copy. A drag that is
		// still in flight keeps going; its session is keyed by name.
		selected.set(None);
		form.set(None);
	});

	let select = move |name: &str| {
		let snapshot = registry.with(|reg| reg.get(name).map(ModuleForm::from_module));
		selected.set(snapshot.as_ref().map(|f| f.name().to_string()));
		form.set(snapshot);
	};

	let close_panel = move || {
		selected.set(None);
		form.set(None);
	};

	let press = move |(module, pointer_x, pointer_y): (ProgramModule, f64, f64)| {
		drag.update(|d| d.begin(&module, pointer_x, pointer_y));
		if selected.with(|s| s.as_deref() != Some(module.name.as_str())) {
			select(&module.name);
		}
	};
	let on_press = Callback::new(press);

	let on_mousemove = move |ev: MouseEvent| {
		if drag.with(|d| d.is_dragging()) {
			ev.prevent_default();
			let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
			registry.update(|reg| drag.with(|d| d.drag(reg, x, y)));
		}
	};

	let finish_drag = move || {
		let Some(session) = drag.try_update(|d| d.finish()).flatten() else {
			return;
		};
		let Some(module) = registry.with(|reg| reg.get(&session.name).cloned()) else {
			return;
		};
		// A press with no movement is just a selection.
		if module.x == session.origin_x && module.y == session.origin_y {
			return;
		}
		// Keep an open form in step with where the module ended up.
		if selected.with(|s| s.as_deref() == Some(session.name.as_str())) {
			form.update(|f| {
				if let Some(f) = f {
					f.x = module.x;
					f.y = module.y;
				}
			});
		}
		if let Some(callback) = on_module_moved {
			callback.run(ModuleMoved {
				name: module.name,
				x: module.x,
				y: module.y,
			});
		}
	};

	// Releases outside the component window still end the drag.
	let mouseup = window_event_listener(ev::mouseup, move |_| finish_drag());
	on_cleanup(move || mouseup.remove());

	let submit = move |edited: ModuleForm| {
		let merged =
			registry.with(|reg| reg.get(edited.name()).map(|current| edited.merged_into(current)));
		let Some(module) = merged else {
			return;
		};
		registry.update(|reg| reg.upsert(module.clone()));
		if let Some(callback) = on_module_updated {
			callback.run(module);
		}
	};

	let delete = move |name: String| {
		let removed = registry
			.try_update(|reg| reg.remove(&name))
			.unwrap_or(false);
		if !removed {
			return;
		}
		close_panel();
		if let Some(callback) = on_module_deleted {
			callback.run(name);
		}
	};

	let add_module = move |_: MouseEvent| {
		// Stagger fresh modules so consecutive adds stay visible.
		let offset = registry.with(|reg| reg.len() as f64) * 24.0;
		let module = ProgramModule {
			module_type: 0,
			x: 40.0 + offset,
			y: 40.0 + offset,
			name: ids::module_ref(),
			inputs: Vec::new(),
			classes: None,
			parameters: Some(vec![String::new()]),
		};
		let name = module.name.clone();
		registry.update(|reg| reg.upsert(module));
		select(&name);
	};

	view! {
		<div class="flow-editor" on:mousemove=on_mousemove>
			<svg class="flow-editor__connections">
				{move || {
					registry
						.with(|reg| derive_connections(reg.all()))
						.into_iter()
						.map(|connection| {
							view! {
								<path
									id=connection.id
									class="flow-editor__connection"
									d=connection.path
								/>
							}
						})
						.collect_view()
				}}
			</svg>

			{move || {
				registry
					.with(|reg| reg.all().to_vec())
					.into_iter()
					.map(|module| {
						let name = module.name.clone();
						let selected_flag = Signal::derive({
							let name = name.clone();
							move || selected.with(|s| s.as_deref() == Some(name.as_str()))
						});
						let dragged_flag = Signal::derive(move || {
							drag.with(|d| d.dragged() == Some(name.as_str()))
						});
						view! {
							<ModuleNode
								module=module
								selected=selected_flag
								dragged=dragged_flag
								on_press=on_press
							/>
						}
					})
					.collect_view()
			}}

			<div class="flow-editor__toolbar">
				<button class="flow-editor__add" on:click=add_module>
					"+ Module"
				</button>
			</div>

			{move || {
				selected
					.get()
					.map(|_| {
						view! {
							<PropertyPanel
								form=form
								on_submit=Callback::new(submit)
								on_delete=Callback::new(delete)
								on_close=Callback::new(move |_| close_panel())
							/>
						}
					})
			}}
		</div>
	}
}
