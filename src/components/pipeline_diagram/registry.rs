/// Ordered handles to the rendered stage nodes.
///
/// Index `i` always maps to the same handle for the lifetime of the registry,
/// so re-renders never reorder measurements. A handle may still point at an
/// element that has not mounted yet; measuring tolerates that.
#[derive(Clone, Debug)]
pub struct NodeRegistry<H> {
	handles: Vec<H>,
}

impl<H> Default for NodeRegistry<H> {
	fn default() -> Self {
		Self {
			handles: Vec::new(),
		}
	}
}

impl<H: Clone + Default> NodeRegistry<H> {
	/// Returns the handle for `index`, allocating it (and any gap before it)
	/// on first use.
	pub fn register(&mut self, index: usize) -> H {
		if index >= self.handles.len() {
			self.handles.resize_with(index + 1, H::default);
		}
		self.handles[index].clone()
	}

	/// Every handle, in index order.
	pub fn all_handles(&self) -> &[H] {
		&self.handles
	}
}
