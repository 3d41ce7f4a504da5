//! Fakes for the host capabilities, shared by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::Rect;

use super::layout::{LayoutProvider, snake_slot};
use super::types::{ColorStops, DiagramData, StageNode};
use super::viewport::ViewportSource;

type Callbacks = Rc<RefCell<Vec<(u32, Box<dyn FnMut()>)>>>;

/// Viewport whose resizes are fired by hand.
#[derive(Clone, Default)]
pub struct MockViewport {
	callbacks: Callbacks,
	next_id: Rc<Cell<u32>>,
}

impl MockViewport {
	pub fn resize(&self) {
		for (_, callback) in self.callbacks.borrow_mut().iter_mut() {
			callback();
		}
	}

	pub fn listeners(&self) -> usize {
		self.callbacks.borrow().len()
	}
}

impl ViewportSource for MockViewport {
	type Listener = u32;

	fn subscribe(&self, on_resize: Box<dyn FnMut()>) -> Option<u32> {
		let id = self.next_id.get();
		self.next_id.set(id + 1);
		self.callbacks.borrow_mut().push((id, on_resize));
		Some(id)
	}

	fn unsubscribe(&self, listener: u32) {
		self.callbacks.borrow_mut().retain(|(id, _)| *id != listener);
	}
}

pub const CONTAINER: usize = usize::MAX;
pub const TILE: f64 = 80.0;
pub const ROW_HEIGHT: f64 = 200.0;

/// Lays nodes out like the stylesheet does: a snake grid of three columns
/// when wide, a single column below 640px. Handles are node indices, with
/// [`CONTAINER`] standing for the container.
#[derive(Clone)]
pub struct FakeGrid {
	pub width: Rc<Cell<f64>>,
	pub mounted: usize,
}

impl FakeGrid {
	pub fn new(width: f64) -> Self {
		Self {
			width: Rc::new(Cell::new(width)),
			mounted: usize::MAX,
		}
	}

	pub fn handles(&self, count: usize) -> Vec<Option<usize>> {
		(0..count).map(Some).collect()
	}
}

impl LayoutProvider for FakeGrid {
	type Handle = usize;

	fn bounds(&self, handle: &usize) -> Option<Rect> {
		let width = self.width.get();
		if *handle == CONTAINER {
			return Some(Rect::new(0.0, 0.0, width, 2.0 * ROW_HEIGHT));
		}
		if *handle >= self.mounted {
			return None;
		}
		let columns = if width >= 640.0 { 3 } else { 1 };
		let (row, col) = snake_slot(*handle, columns);
		let cell = width / columns as f64;
		let (cx, cy) = (
			cell * (col as f64 + 0.5),
			ROW_HEIGHT * (row as f64 + 0.5),
		);
		Some(Rect::from_center_size((cx, cy), (TILE, TILE)))
	}
}

pub fn pipeline() -> DiagramData {
	let nodes = ["Source", "Build", "Registry", "Manifests", "Sync", "Cluster"]
		.iter()
		.map(|label| StageNode {
			label: (*label).into(),
			caption: String::new(),
			icon: label[..2].into(),
			accent: "#3b82f6".into(),
		})
		.collect();
	let colors = (0..5)
		.map(|_| ColorStops {
			from: "#ffffff".into(),
			to: "#3b82f6".into(),
		})
		.collect();
	DiagramData::chain(nodes, colors)
}
