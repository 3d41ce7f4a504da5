use kurbo::Point;
use log::debug;

use super::animation::{AnimationScheduler, Phase, TaskKey, ease_in_out_cubic, ease_out_cubic};
use super::paths::{PathDescriptor, compute_paths};
use super::types::{DiagramConfig, DiagramData};

/// Entrance pose of one node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeFrame {
	pub scale: f64,
	pub opacity: f64,
}

impl NodeFrame {
	pub const HIDDEN: Self = Self {
		scale: 0.0,
		opacity: 0.0,
	};
	pub const SHOWN: Self = Self {
		scale: 1.0,
		opacity: 1.0,
	};
}

/// Draw-in pose of one connector. `drawn` is the revealed fraction of the
/// stroke length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectorFrame {
	pub drawn: f64,
	pub opacity: f64,
}

impl ConnectorFrame {
	pub const HIDDEN: Self = Self {
		drawn: 0.0,
		opacity: 0.0,
	};
	pub const DRAWN: Self = Self {
		drawn: 1.0,
		opacity: 1.0,
	};

	pub fn dash_offset(&self) -> f64 {
		1.0 - self.drawn
	}
}

/// Everything the diagram owns: the connector path set derived from the last
/// measurement and the animations playing over it.
pub struct DiagramState {
	data: DiagramData,
	config: DiagramConfig,
	paths: Vec<PathDescriptor>,
	scheduler: AnimationScheduler,
	loops: Vec<TaskKey>,
	recomputes: usize,
	torn_down: bool,
}

impl DiagramState {
	pub fn new(data: DiagramData, config: DiagramConfig) -> Self {
		let mut scheduler = AnimationScheduler::default();
		let loops = (0..data.edges.len())
			.map(|index| {
				scheduler.schedule_repeating(
					index,
					config.connector_draw_duration,
					config.connector_pause,
					0.0,
					config.connector_stagger,
				)
			})
			.collect();
		Self {
			data,
			config,
			paths: Vec::new(),
			scheduler,
			loops,
			recomputes: 0,
			torn_down: false,
		}
	}

	pub fn paths(&self) -> &[PathDescriptor] {
		&self.paths
	}

	/// Number of measure-and-recompute cycles applied so far.
	pub fn recomputes(&self) -> usize {
		self.recomputes
	}

	/// Replaces the path set with one derived from fresh `centers`.
	///
	/// Connectors whose geometry moved restart their draw-in loop; the rest
	/// keep playing. Returns how many moved.
	pub fn relayout(&mut self, centers: &[Point]) -> usize {
		if self.torn_down {
			return 0;
		}
		let paths = compute_paths(centers, &self.data.edges, &self.config);
		let mut moved = 0;
		for (index, path) in paths.iter().enumerate() {
			if self.paths.get(index) != Some(path) {
				if let Some(&key) = self.loops.get(index) {
					self.scheduler.restart(key);
				}
				moved += 1;
			}
		}
		self.paths = paths;
		self.recomputes += 1;
		debug!(
			"pipeline relayout #{}: {moved}/{} connectors moved",
			self.recomputes,
			self.paths.len()
		);
		moved
	}

	/// Starts the entrance of node `index` the first time it is seen. Later
	/// calls are no-ops and return `false`.
	pub fn reveal(&mut self, index: usize) -> bool {
		if self.torn_down || index >= self.data.nodes.len() {
			return false;
		}
		self.scheduler.schedule_once(
			TaskKey::Entrance(index),
			self.config.node_enter_duration,
			index as f64 * self.config.node_enter_stagger,
		)
	}

	pub fn reveal_all(&mut self) {
		for index in 0..self.data.nodes.len() {
			self.reveal(index);
		}
	}

	pub fn tick(&mut self, now: f64) {
		self.scheduler.set_now(now);
	}

	pub fn node_frame(&self, index: usize) -> NodeFrame {
		match self.scheduler.sample(TaskKey::Entrance(index)) {
			None | Some(Phase::Delayed) => NodeFrame::HIDDEN,
			Some(Phase::Running(t)) => {
				let eased = ease_out_cubic(t);
				NodeFrame {
					scale: eased,
					opacity: eased,
				}
			}
			Some(Phase::Holding | Phase::Finished) => NodeFrame::SHOWN,
		}
	}

	pub fn connector_phase(&self, index: usize) -> Option<Phase> {
		self.scheduler.sample(TaskKey::Connector(index))
	}

	pub fn connector_frame(&self, index: usize) -> ConnectorFrame {
		match self.connector_phase(index) {
			None | Some(Phase::Delayed) => ConnectorFrame::HIDDEN,
			Some(Phase::Running(t)) => {
				let eased = ease_in_out_cubic(t);
				ConnectorFrame {
					drawn: eased,
					opacity: eased,
				}
			}
			Some(Phase::Holding | Phase::Finished) => ConnectorFrame::DRAWN,
		}
	}

	/// Cancels every animation. Nothing plays or recomputes afterwards.
	pub fn teardown(&mut self) {
		let entrances = (0..self.data.nodes.len()).map(TaskKey::Entrance);
		let cancelled = self
			.loops
			.drain(..)
			.chain(entrances)
			.map(|key| self.scheduler.cancel(key))
			.filter(|&hit| hit)
			.count();
		self.torn_down = true;
		debug!("pipeline teardown: {cancelled} animations cancelled");
	}
}
