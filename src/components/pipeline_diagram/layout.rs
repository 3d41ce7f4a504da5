use kurbo::{Point, Rect, Vec2};

/// Reads live geometry of rendered elements.
pub trait LayoutProvider {
	/// Reference to one rendered element.
	type Handle;

	/// Bounding box in viewport coordinates, or `None` if the element is not
	/// laid out.
	fn bounds(&self, handle: &Self::Handle) -> Option<Rect>;

	/// How far the container's content has been scrolled.
	fn scroll_offset(&self, _container: &Self::Handle) -> Vec2 {
		Vec2::ZERO
	}

	/// Distance from the container's border edge to its padding edge, where
	/// absolutely positioned overlays start.
	fn border_inset(&self, _container: &Self::Handle) -> Vec2 {
		Vec2::ZERO
	}
}

/// Center of each node's box relative to the container's padding box, which
/// is where the connector overlay is anchored. Includes the container's own
/// scroll offset.
///
/// Anything that cannot be measured (unmounted node, unmounted container)
/// lands on the origin instead of failing. The next pass corrects it.
pub fn measure_all<P: LayoutProvider>(
	provider: &P,
	container: Option<&P::Handle>,
	nodes: &[Option<P::Handle>],
) -> Vec<Point> {
	let Some((origin, scroll)) = container.and_then(|c| {
		provider.bounds(c).map(|rect| {
			let origin = rect.origin() + provider.border_inset(c);
			(origin, provider.scroll_offset(c))
		})
	}) else {
		return vec![Point::ZERO; nodes.len()];
	};

	nodes
		.iter()
		.map(|handle| {
			handle
				.as_ref()
				.and_then(|h| provider.bounds(h))
				.map(|rect| (rect.center() - origin + scroll).to_point())
				.unwrap_or(Point::ZERO)
		})
		.collect()
}

/// Grid cell (row, column) of node `index`, zero based, in snake order: even
/// rows run left to right, odd rows right to left.
pub fn snake_slot(index: usize, columns: usize) -> (usize, usize) {
	let columns = columns.max(1);
	let (row, offset) = (index / columns, index % columns);
	let col = if row % 2 == 0 {
		offset
	} else {
		columns - 1 - offset
	};
	(row, col)
}
