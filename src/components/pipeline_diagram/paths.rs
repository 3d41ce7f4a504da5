use kurbo::{BezPath, CubicBez, Line, Point};

use super::types::{DiagramConfig, StageEdge};

/// Renderer-agnostic geometry of one connector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathDescriptor {
	/// Neighbours on the same row.
	Straight(Line),
	/// Row transition, bowing vertically out of both endpoints.
	Curved(CubicBez),
}

impl PathDescriptor {
	/// Anchor on the source node's center.
	pub fn start(&self) -> Point {
		match self {
			Self::Straight(line) => line.p0,
			Self::Curved(curve) => curve.p0,
		}
	}

	pub fn end(&self) -> Point {
		match self {
			Self::Straight(line) => line.p1,
			Self::Curved(curve) => curve.p3,
		}
	}

	fn to_bez_path(&self) -> BezPath {
		let mut path = BezPath::new();
		path.move_to(self.start());
		match self {
			Self::Straight(line) => path.line_to(line.p1),
			Self::Curved(curve) => path.curve_to(curve.p1, curve.p2, curve.p3),
		}
		path
	}

	/// SVG path data (`d` attribute).
	pub fn to_svg(&self) -> String {
		self.to_bez_path().to_svg()
	}
}

fn is_row_transition(source: Point, target: Point, tolerance: f64) -> bool {
	(target.y - source.y).abs() > tolerance
}

pub fn connector_path(source: Point, target: Point, config: &DiagramConfig) -> PathDescriptor {
	if !is_row_transition(source, target, config.row_tolerance) {
		return PathDescriptor::Straight(Line::new(source, target));
	}
	let offset = config.curve_offset.copysign(target.y - source.y);
	PathDescriptor::Curved(CubicBez::new(
		source,
		Point::new(source.x, source.y + offset),
		Point::new(target.x, target.y - offset),
		target,
	))
}

/// One descriptor per edge, in edge order. Endpoints that reference a node
/// without a measured center use the origin.
pub fn compute_paths(
	centers: &[Point],
	edges: &[StageEdge],
	config: &DiagramConfig,
) -> Vec<PathDescriptor> {
	let center = |id: usize| centers.get(id).copied().unwrap_or(Point::ZERO);
	edges
		.iter()
		.map(|edge| connector_path(center(edge.source), center(edge.target), config))
		.collect()
}

#[cfg(test)]
mod tests {
	use kurbo::ParamCurve;

	use super::*;
	use crate::components::pipeline_diagram::types::ColorStops;

	fn edges() -> Vec<StageEdge> {
		(0..5)
			.map(|i| StageEdge {
				source: i,
				target: i + 1,
				colors: ColorStops {
					from: "#fff".into(),
					to: "#3b82f6".into(),
				},
			})
			.collect()
	}

	fn control_points(path: &PathDescriptor) -> Option<(Point, Point)> {
		match path {
			PathDescriptor::Straight(_) => None,
			PathDescriptor::Curved(curve) => Some((curve.p1, curve.p2)),
		}
	}

	/// Row one runs right to left so the transition drops at x = 100.
	fn two_rows() -> Vec<Point> {
		vec![
			Point::new(500.0, 40.0),
			Point::new(300.0, 40.0),
			Point::new(100.0, 40.0),
			Point::new(100.0, 240.0),
			Point::new(300.0, 240.0),
			Point::new(500.0, 240.0),
		]
	}

	#[test]
	fn one_descriptor_per_edge_anchored_on_centers() {
		let config = DiagramConfig::default();
		let base = two_rows();
		// Shuffle placements while keeping the topology, then check anchoring.
		for shift in 0..base.len() {
			let mut centers = base.clone();
			centers.rotate_left(shift);
			let paths = compute_paths(&centers, &edges(), &config);
			assert_eq!(paths.len(), 5);
			for (edge, path) in edges().iter().zip(&paths) {
				assert_eq!(path.start(), centers[edge.source]);
				assert_eq!(path.end(), centers[edge.target]);
			}
		}
	}

	#[test]
	fn same_row_neighbours_are_straight() {
		let paths = compute_paths(&two_rows(), &edges(), &DiagramConfig::default());
		for i in [0, 1, 3, 4] {
			assert!(matches!(paths[i], PathDescriptor::Straight(_)), "edge {i}");
		}
	}

	#[test]
	fn transition_bows_between_rows() {
		let centers = two_rows();
		let paths = compute_paths(&centers, &edges(), &DiagramConfig::default());
		let (c1, c2) = control_points(&paths[2]).expect("transition edge is curved");
		assert!((c1.y - 90.0).abs() < 1e-9);
		assert!((c2.y - 190.0).abs() < 1e-9);
		assert_eq!((c1.x, c2.x), (100.0, 100.0));

		let PathDescriptor::Curved(curve) = paths[2] else {
			unreachable!()
		};
		for step in 1..100 {
			let p = curve.eval(step as f64 / 100.0);
			for sibling in [centers[1], centers[4]] {
				assert!(p.distance(sibling) > 100.0, "curve passes {sibling:?}");
			}
		}
	}

	#[test]
	fn upward_transition_mirrors_offsets() {
		let config = DiagramConfig::default();
		let path = connector_path(Point::new(10.0, 300.0), Point::new(10.0, 100.0), &config);
		let (c1, c2) = control_points(&path).unwrap();
		assert_eq!(c1.y, 250.0);
		assert_eq!(c2.y, 150.0);
	}

	#[test]
	fn control_points_sit_straight_off_each_endpoint() {
		let config = DiagramConfig::default();
		let path = connector_path(Point::new(120.0, 40.0), Point::new(480.0, 240.0), &config);
		let PathDescriptor::Curved(curve) = path else {
			panic!("row transition should curve: {path:?}");
		};
		assert_eq!(curve.p1, Point::new(120.0, 90.0));
		assert_eq!(curve.p2, Point::new(480.0, 190.0));
		assert_eq!(curve.eval(0.5), Point::new(300.0, 140.0));
	}

	#[test]
	fn small_vertical_jitter_stays_on_row() {
		let config = DiagramConfig::default();
		let path = connector_path(Point::new(0.0, 40.0), Point::new(200.0, 44.0), &config);
		assert!(control_points(&path).is_none());
	}

	#[test]
	fn missing_centers_degrade_to_origin() {
		let rows = two_rows();
		let paths = compute_paths(&rows[..3], &edges(), &DiagramConfig::default());
		assert_eq!(paths.len(), 5);
		assert_eq!(paths[2].end(), Point::ZERO);
		assert_eq!(paths[4].start(), Point::ZERO);
	}

	#[test]
	fn svg_serialisation_matches_shape() {
		let config = DiagramConfig::default();
		let line = connector_path(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &config);
		let svg = line.to_svg();
		assert!(svg.starts_with('M') && svg.contains('L'), "{svg}");
		let curve = connector_path(Point::new(0.0, 0.0), Point::new(0.0, 200.0), &config);
		assert!(curve.to_svg().contains('C'));
	}
}
