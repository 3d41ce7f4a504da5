//! Tabbed viewer for static configuration text.

use leptos::prelude::*;

/// A named chunk of static configuration text.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigEntry {
	/// Heading above the text.
	pub name: &'static str,
	/// Tab label.
	pub filename: &'static str,
	/// One-line summary under the heading.
	pub description: &'static str,
	/// The file contents.
	pub code: &'static str,
}

/// File list on one side, the selected file's text on the other.
#[component]
pub fn ConfigTabs(
	/// Files in tab order; the first starts selected.
	entries: Vec<ConfigEntry>,
) -> impl IntoView {
	let active = RwSignal::new(0usize);
	let entries = StoredValue::new(entries);

	let tabs = entries.with_value(|entries| {
		entries
			.iter()
			.enumerate()
			.map(|(index, entry)| {
				view! {
					<button
						class="config-tab"
						class:active=move || active.get() == index
						on:click=move |_| active.set(index)
					>
						<span class="config-tab-file">{entry.filename}</span>
					</button>
				}
			})
			.collect_view()
	});

	let selected = move || entries.with_value(|entries| entries.get(active.get()).cloned());

	view! {
		<div class="config-tabs">
			<nav class="config-tab-list">{tabs}</nav>
			<div class="config-tab-body">
				{move || {
					selected()
						.map(|entry| {
							view! {
								<div class="config-tab-header">
									<h4>{entry.name}</h4>
									<p>{entry.description}</p>
								</div>
								<pre class="config-tab-code">
									<code>{entry.code}</code>
								</pre>
							}
						})
				}}
			</div>
		</div>
	}
}
