use leptos::prelude::*;
use web_sys::Event;

use super::form::{ListField, ModuleForm};

/// Property panel for the selected module.
///
/// All controls edit the form signal; the working copy is only touched
/// when Apply fires the submit callback. Field commits happen on change
/// rather than on every keystroke, so re-renders never steal focus from
/// a half-typed value.
#[component]
pub fn PropertyPanel(
	form: RwSignal<Option<ModuleForm>>,
	on_submit: Callback<ModuleForm>,
	on_delete: Callback<String>,
	on_close: Callback<()>,
) -> impl IntoView {
	let name = move || form.with(|f| f.as_ref().map(|f| f.name().to_string()).unwrap_or_default());

	let type_value =
		move || form.with(|f| f.as_ref().map(|f| f.module_type.to_string()).unwrap_or_default());
	let set_type = move |ev: Event| {
		if let Ok(value) = event_target_value(&ev).parse::<u32>() {
			form.update(|f| {
				if let Some(f) = f {
					f.module_type = value;
				}
			});
		}
	};

	let x_value = move || form.with(|f| f.as_ref().map(|f| f.x.to_string()).unwrap_or_default());
	let set_x = move |ev: Event| {
		if let Some(value) = parse_coordinate(&event_target_value(&ev)) {
			form.update(|f| {
				if let Some(f) = f {
					f.x = value;
				}
			});
		}
	};

	let y_value = move || form.with(|f| f.as_ref().map(|f| f.y.to_string()).unwrap_or_default());
	let set_y = move |ev: Event| {
		if let Some(value) = parse_coordinate(&event_target_value(&ev)) {
			form.update(|f| {
				if let Some(f) = f {
					f.y = value;
				}
			});
		}
	};

	let apply = move |_| {
		if let Some(f) = form.get() {
			on_submit.run(f);
		}
	};
	let delete = move |_| {
		let name = form.with(|f| f.as_ref().map(|f| f.name().to_string()));
		if let Some(name) = name {
			on_delete.run(name);
		}
	};

	view! {
		<aside class="property-panel">
			<header class="property-panel__header">
				<h2 class="property-panel__title">{name}</h2>
				<button class="property-panel__close" on:click=move |_| on_close.run(())>
					"×"
				</button>
			</header>

			<div class="property-panel__body">
				<label class="property-panel__field">
					<span>"Type"</span>
					<input type="number" min="0" prop:value=type_value on:change=set_type />
				</label>
				<label class="property-panel__field">
					<span>"X"</span>
					<input type="number" step="any" prop:value=x_value on:change=set_x />
				</label>
				<label class="property-panel__field">
					<span>"Y"</span>
					<input type="number" step="any" prop:value=y_value on:change=set_y />
				</label>

				<ListEditor form=form field=ListField::Inputs />
				<ListEditor form=form field=ListField::Classes />
				<ListEditor form=form field=ListField::Parameters />
			</div>

			<footer class="property-panel__actions">
				<button class="property-panel__apply" on:click=apply>
					"Apply"
				</button>
				<button class="property-panel__delete" on:click=delete>
					"Delete"
				</button>
			</footer>
		</aside>
	}
}

/// One ordered list of strings with append, in-place edit and removal.
#[component]
fn ListEditor(form: RwSignal<Option<ModuleForm>>, field: ListField) -> impl IntoView {
	let rows = move || {
		form.with(|f| {
			f.as_ref()
				.map(|f| f.list(field).to_vec())
				.unwrap_or_default()
		})
	};
	let append = move |_| {
		form.update(|f| {
			if let Some(f) = f {
				f.append(field, "");
			}
		});
	};

	view! {
		<div class="property-panel__list">
			<div class="property-panel__list-header">
				<span>{field.label()}</span>
				<button class="property-panel__list-add" on:click=append>
					"+"
				</button>
			</div>
			{move || {
				rows()
					.into_iter()
					.enumerate()
					.map(|(index, value)| {
						view! {
							<div class="property-panel__row">
								<input
									type="text"
									prop:value=value
									on:change=move |ev| {
										form.update(|f| {
											if let Some(f) = f {
												f.replace_at(field, index, event_target_value(&ev));
											}
										});
									}
								/>
								<button
									class="property-panel__row-remove"
									on:click=move |_| {
										form.update(|f| {
											if let Some(f) = f {
												f.remove_at(field, index);
											}
										});
									}
								>
									"×"
								</button>
							</div>
						}
					})
					.collect_view()
			}}
		</div>
	}
}

/// Coordinates typed into the panel must stay finite; the curve layer
/// refuses to draw from non-finite anchors.
fn parse_coordinate(raw: &str) -> Option<f64> {
	raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn coordinates_must_be_finite_numbers() {
		assert_eq!(parse_coordinate("558.09375"), Some(558.09375));
		assert_eq!(parse_coordinate("-12"), Some(-12.0));
		assert_eq!(parse_coordinate(""), None);
		assert_eq!(parse_coordinate("abc"), None);
		assert_eq!(parse_coordinate("NaN"), None);
		assert_eq!(parse_coordinate("inf"), None);
	}
}
