use leptos::error::Error;
use leptos::prelude::*;
use log::info;

use crate::components::flow_editor::{FlowEditor, ModuleMoved, ProgramModule};

/// Program modules of the refrigeration "no data" alarm pattern, as
/// exported by the alarm backend.
const REFRIGERATION_PATTERN: &str = include_str!("refrigeration.json");

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	// Parse the demo pattern once; a malformed record renders in the
	// boundary instead of the editor.
	let pattern: Result<Vec<ProgramModule>, Error> =
		serde_json::from_str(REFRIGERATION_PATTERN).map_err(Error::from);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			{move || {
				pattern
					.clone()
					.map(|modules| {
						let modules = RwSignal::new(modules);
						view! {
							<div class="editor-page">
								<FlowEditor
									modules=modules
									on_module_moved=Some(
										Callback::new(|moved: ModuleMoved| {
											info!(
												"module {} moved to ({}, {})", moved.name, moved.x, moved.y
											);
										}),
									)
									on_module_updated=Some(
										Callback::new(|module: ProgramModule| {
											info!("module {} updated", module.name);
										}),
									)
									on_module_deleted=Some(
										Callback::new(|name: String| {
											info!("module {} deleted", name);
										}),
									)
								/>
								<div class="editor-overlay">
									<h1>"Alarm Flow Canvas"</h1>
									<p class="subtitle">
										"Drag modules to reposition. Click a module to edit its fields."
									</p>
								</div>
							</div>
						}
					})
			}}
		</ErrorBoundary>
	}
}
