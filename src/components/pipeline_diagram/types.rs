/// One pipeline stage drawn as a node.
#[derive(Clone, Debug, PartialEq)]
pub struct StageNode {
	/// Stage name shown under the icon.
	pub label: String,
	/// One-line role of the stage.
	pub caption: String,
	/// Short monogram rendered inside the icon tile.
	pub icon: String,
	/// CSS color of the icon border and monogram.
	pub accent: String,
}

/// Gradient endpoints of a connector, from its source to its target.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorStops {
	/// Color at the source end.
	pub from: String,
	/// Color at the target end.
	pub to: String,
}

/// A directed connector between two nodes, by position in
/// [`DiagramData::nodes`].
#[derive(Clone, Debug, PartialEq)]
pub struct StageEdge {
	/// Node the connector starts from.
	pub source: usize,
	/// Node the connector ends at.
	pub target: usize,
	/// Stroke gradient.
	pub colors: ColorStops,
}

/// Fixed topology of the diagram. Node ids are their positions in `nodes`,
/// edge ordinals their positions in `edges`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiagramData {
	/// Stages, in pipeline order.
	pub nodes: Vec<StageNode>,
	/// Connectors, drawn in this order.
	pub edges: Vec<StageEdge>,
}

impl DiagramData {
	/// A linear chain over `nodes`: edge `i` joins node `i` to node `i + 1`.
	pub fn chain(nodes: Vec<StageNode>, colors: Vec<ColorStops>) -> Self {
		let edges = colors
			.into_iter()
			.take(nodes.len().saturating_sub(1))
			.enumerate()
			.map(|(i, colors)| StageEdge {
				source: i,
				target: i + 1,
				colors,
			})
			.collect();
		Self { nodes, edges }
	}
}

/// Geometry and timing knobs. Times are in seconds, distances in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagramConfig {
	/// Vertical distance of a row-transition curve's control points from
	/// their endpoints.
	pub curve_offset: f64,
	/// Largest difference in center height still treated as the same row.
	pub row_tolerance: f64,
	/// Length of one node's entrance.
	pub node_enter_duration: f64,
	/// Extra entrance delay per node index.
	pub node_enter_stagger: f64,
	/// Length of one connector draw-in.
	pub connector_draw_duration: f64,
	/// Hold on the fully drawn connector before the next draw-in.
	pub connector_pause: f64,
	/// Extra start delay per connector index.
	pub connector_stagger: f64,
	/// Columns of the snake grid on wide viewports.
	pub grid_columns: usize,
}

impl Default for DiagramConfig {
	fn default() -> Self {
		Self {
			curve_offset: 50.0,
			row_tolerance: 8.0,
			node_enter_duration: 0.5,
			node_enter_stagger: 0.2,
			connector_draw_duration: 1.5,
			connector_pause: 0.5,
			connector_stagger: 0.3,
			grid_columns: 3,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(label: &str) -> StageNode {
		StageNode {
			label: label.into(),
			caption: String::new(),
			icon: label[..1].into(),
			accent: "#fff".into(),
		}
	}

	fn stops() -> ColorStops {
		ColorStops {
			from: "#fff".into(),
			to: "#000".into(),
		}
	}

	#[test]
	fn chain_links_neighbours_in_order() {
		let data = DiagramData::chain(
			vec![node("a"), node("b"), node("c")],
			vec![stops(), stops(), stops()],
		);
		let pairs: Vec<_> = data.edges.iter().map(|e| (e.source, e.target)).collect();
		assert_eq!(pairs, vec![(0, 1), (1, 2)]);
	}
}
