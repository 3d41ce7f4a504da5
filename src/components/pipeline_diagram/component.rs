use kurbo::Point;
use leptos::html::Div;
use leptos::prelude::*;
use log::info;
use web_sys::Element;

use super::dom::{DomLayout, FrameLoop, VisibilityWatch, WindowViewport};
use super::layout::{measure_all, snake_slot};
use super::paths::PathDescriptor;
use super::registry::NodeRegistry;
use super::state::DiagramState;
use super::types::{DiagramConfig, DiagramData};
use super::viewport::ViewportWatcher;

/// Host resources held while the diagram is mounted. Dropping releases them.
struct DiagramResources {
	_viewport: ViewportWatcher<WindowViewport>,
	_visibility: Option<VisibilityWatch>,
	_frames: FrameLoop,
}

/// Stage nodes on a snake grid with animated connectors drawn over them.
///
/// Connector geometry is measured from the rendered nodes after mount and
/// again on every window resize.
#[component]
pub fn PipelineDiagram(
	/// Fixed topology; read once at mount.
	data: DiagramData,
	/// Geometry and timing, [`DiagramConfig::default`] if omitted.
	#[prop(optional)]
	config: Option<DiagramConfig>,
	/// Called after each measure-and-recompute with the number of cycles so
	/// far.
	#[prop(optional, into)]
	on_relayout: Option<Callback<usize>>,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let (stage_count, connector_count) = (data.nodes.len(), data.edges.len());
	let state = RwSignal::new(DiagramState::new(data.clone(), config));
	let paths = Memo::new(move |_| state.with(|s| s.paths().to_vec()));
	let container_ref = NodeRef::<Div>::new();
	let resources = StoredValue::new_local(None::<DiagramResources>);

	let mut registry = NodeRegistry::<NodeRef<Div>>::default();
	let stages = data
		.nodes
		.iter()
		.enumerate()
		.map(|(index, node)| {
			let node_ref = registry.register(index);
			let (row, col) = snake_slot(index, config.grid_columns);
			let frame = move || state.with(|s| s.node_frame(index));
			view! {
				<div
					class="pipeline-stage"
					style:grid-row=(row + 1).to_string()
					style:grid-column=(col + 1).to_string()
				>
					<div
						node_ref=node_ref
						class="pipeline-stage-icon"
						style:border-color=node.accent.clone()
						style:color=node.accent.clone()
						style:transform=move || format!("scale({:.4})", frame().scale)
						style:opacity=move || format!("{:.4}", frame().opacity)
					>
						{node.icon.clone()}
					</div>
					<div class="pipeline-stage-label">{node.label.clone()}</div>
					<div class="pipeline-stage-caption">{node.caption.clone()}</div>
				</div>
			}
		})
		.collect_view();
	let registry = StoredValue::new(registry);

	let connectors = data
		.edges
		.iter()
		.enumerate()
		.map(|(index, edge)| {
			let gradient_id = format!("pipeline-connector-{index}");
			let stroke = format!("url(#{gradient_id})");
			let endpoint = move |pick: fn(&PathDescriptor) -> Point| {
				paths.with(|p| p.get(index).map(pick).unwrap_or(Point::ZERO))
			};
			let frame = move || state.with(|s| s.connector_frame(index));
			view! {
				<g class="pipeline-connector">
					<linearGradient
						id=gradient_id
						gradientUnits="userSpaceOnUse"
						x1=move || endpoint(PathDescriptor::start).x.to_string()
						y1=move || endpoint(PathDescriptor::start).y.to_string()
						x2=move || endpoint(PathDescriptor::end).x.to_string()
						y2=move || endpoint(PathDescriptor::end).y.to_string()
					>
						<stop offset="0%" stop-color=edge.colors.from.clone() />
						<stop offset="100%" stop-color=edge.colors.to.clone() />
					</linearGradient>
					<path
						d=move || paths.with(|p| p.get(index).map(PathDescriptor::to_svg).unwrap_or_default())
						fill="none"
						stroke=stroke
						stroke-width="2"
						stroke-linecap="round"
						pathLength="1"
						stroke-dasharray="1"
						stroke-dashoffset=move || format!("{:.4}", frame().dash_offset())
						opacity=move || format!("{:.4}", frame().opacity)
					/>
				</g>
			}
		})
		.collect_view();

	let relayout = move || {
		let container = container_ref.get_untracked().map(Element::from);
		let handles: Vec<Option<Element>> = registry.with_value(|r| {
			r.all_handles()
				.iter()
				.map(|h| h.get_untracked().map(Element::from))
				.collect()
		});
		let centers = measure_all(&DomLayout, container.as_ref(), &handles);
		let recomputes = state.try_update(|s| {
			s.relayout(&centers);
			s.recomputes()
		});
		if let (Some(recomputes), Some(on_relayout)) = (recomputes, on_relayout) {
			on_relayout.run(recomputes);
		}
	};

	Effect::new(move |_| {
		if container_ref.get().is_none() || resources.with_value(Option::is_some) {
			return;
		}
		relayout();
		let viewport = ViewportWatcher::watch(WindowViewport, relayout);

		// Observe the stage wrappers, since the icons start at scale 0.
		let (stage_of, targets): (Vec<usize>, Vec<Element>) = registry.with_value(|r| {
			r.all_handles()
				.iter()
				.enumerate()
				.filter_map(|(index, h)| Some((index, h.get_untracked()?.parent_element()?)))
				.unzip()
		});
		let visibility = VisibilityWatch::observe(&targets, move |position| {
			if let Some(&index) = stage_of.get(position) {
				state.update(|s| {
					s.reveal(index);
				});
			}
		});
		if visibility.is_none() {
			state.update(DiagramState::reveal_all);
		}

		let frames = FrameLoop::start(move |elapsed| state.update(|s| s.tick(elapsed)));
		info!(
			"pipeline diagram mounted: {} stages, {} connectors",
			stage_count, connector_count
		);
		resources.set_value(Some(DiagramResources {
			_viewport: viewport,
			_visibility: visibility,
			_frames: frames,
		}));
	});

	on_cleanup(move || {
		let _ = resources.try_update_value(|r| r.take());
		let _ = state.try_update(DiagramState::teardown);
	});

	view! {
		<div node_ref=container_ref class="pipeline-diagram">
			<svg class="pipeline-connectors" aria-hidden="true">
				{connectors}
			</svg>
			<div
				class="pipeline-stages"
				style:grid-template-columns=format!("repeat({}, minmax(0, 1fr))", config.grid_columns.max(1))
			>
				{stages}
			</div>
		</div>
	}
}
