use log::warn;

/// A source of viewport resize notifications.
pub trait ViewportSource {
	/// Whatever must be kept alive for the subscription and handed back to
	/// unsubscribe.
	type Listener;

	/// Starts delivering resizes to `on_resize`, or `None` if the host
	/// refused the subscription.
	fn subscribe(&self, on_resize: Box<dyn FnMut()>) -> Option<Self::Listener>;

	/// Stops the subscription `listener` belongs to.
	fn unsubscribe(&self, listener: Self::Listener);
}

/// Scoped resize subscription: listening starts in [`ViewportWatcher::watch`]
/// and stops when the watcher is released or dropped.
pub struct ViewportWatcher<S: ViewportSource> {
	source: S,
	listener: Option<S::Listener>,
}

impl<S: ViewportSource> ViewportWatcher<S> {
	/// Runs `on_resize` once per notification. Each call is expected to do a
	/// full measure-and-recompute; the last notification wins.
	pub fn watch(source: S, on_resize: impl FnMut() + 'static) -> Self {
		let listener = source.subscribe(Box::new(on_resize));
		if listener.is_none() {
			warn!("viewport resize subscription failed; layout will not follow resizes");
		}
		Self { source, listener }
	}

	/// Whether resizes are still being delivered.
	pub fn is_active(&self) -> bool {
		self.listener.is_some()
	}

	/// Stops listening. Safe to call more than once.
	pub fn release(&mut self) {
		if let Some(listener) = self.listener.take() {
			self.source.unsubscribe(listener);
		}
	}
}

impl<S: ViewportSource> Drop for ViewportWatcher<S> {
	fn drop(&mut self) {
		self.release();
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use super::*;
	use crate::components::pipeline_diagram::testing::MockViewport;

	#[test]
	fn each_resize_runs_exactly_one_cycle() {
		let viewport = MockViewport::default();
		let cycles = Rc::new(Cell::new(0));
		let counter = cycles.clone();
		let _watcher = ViewportWatcher::watch(viewport.clone(), move || {
			counter.set(counter.get() + 1)
		});
		viewport.resize();
		assert_eq!(cycles.get(), 1);
		viewport.resize();
		viewport.resize();
		assert_eq!(cycles.get(), 3);
	}

	#[test]
	fn drop_unsubscribes() {
		let viewport = MockViewport::default();
		let cycles = Rc::new(Cell::new(0));
		let counter = cycles.clone();
		let watcher = ViewportWatcher::watch(viewport.clone(), move || {
			counter.set(counter.get() + 1)
		});
		assert_eq!(viewport.listeners(), 1);
		drop(watcher);
		assert_eq!(viewport.listeners(), 0);
		viewport.resize();
		assert_eq!(cycles.get(), 0);
	}

	#[test]
	fn release_is_idempotent() {
		let viewport = MockViewport::default();
		let mut watcher = ViewportWatcher::watch(viewport.clone(), || {});
		watcher.release();
		watcher.release();
		assert!(!watcher.is_active());
		assert_eq!(viewport.listeners(), 0);
	}

	struct RefusingViewport;

	impl ViewportSource for RefusingViewport {
		type Listener = ();

		fn subscribe(&self, _on_resize: Box<dyn FnMut()>) -> Option<()> {
			None
		}

		fn unsubscribe(&self, _listener: ()) {
			unreachable!("nothing was subscribed");
		}
	}

	#[test]
	fn failed_subscription_is_inert() {
		let watcher = ViewportWatcher::watch(RefusingViewport, || {});
		assert!(!watcher.is_active());
	}
}
