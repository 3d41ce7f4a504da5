use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use kurbo::{Rect, Vec2};
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use super::layout::LayoutProvider;
use super::viewport::ViewportSource;

/// Attribute [`VisibilityWatch`] tags each observed element with, holding its
/// index among the targets.
pub const STAGE_ATTR: &str = "data-stage";

/// Measures elements through `getBoundingClientRect`.
pub struct DomLayout;

impl LayoutProvider for DomLayout {
	type Handle = Element;

	fn bounds(&self, handle: &Element) -> Option<Rect> {
		if !handle.is_connected() {
			return None;
		}
		let rect = handle.get_bounding_client_rect();
		Some(Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom()))
	}

	fn scroll_offset(&self, container: &Element) -> Vec2 {
		Vec2::new(container.scroll_left() as f64, container.scroll_top() as f64)
	}

	fn border_inset(&self, container: &Element) -> Vec2 {
		Vec2::new(container.client_left() as f64, container.client_top() as f64)
	}
}

/// The window's `resize` event.
pub struct WindowViewport;

impl ViewportSource for WindowViewport {
	type Listener = Closure<dyn FnMut()>;

	fn subscribe(&self, on_resize: Box<dyn FnMut()>) -> Option<Self::Listener> {
		let window = web_sys::window()?;
		let listener = Closure::wrap(on_resize);
		if let Err(err) =
			window.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
		{
			warn!("failed to add resize listener: {err:?}");
			return None;
		}
		Some(listener)
	}

	fn unsubscribe(&self, listener: Self::Listener) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Err(err) =
			window.remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
		{
			warn!("failed to remove resize listener: {err:?}");
		}
	}
}

/// Reports each observed element the first time it scrolls into view.
/// Disconnects on drop.
pub struct VisibilityWatch {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl VisibilityWatch {
	/// `on_visible` receives the position in `targets` of each element that
	/// intersects the viewport. Returns `None` if the host has no
	/// IntersectionObserver.
	pub fn observe(targets: &[Element], mut on_visible: impl FnMut(usize) + 'static) -> Option<Self> {
		let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if !entry.is_intersecting() {
					continue;
				}
				let index = entry
					.target()
					.get_attribute(STAGE_ATTR)
					.and_then(|value| value.parse().ok());
				if let Some(index) = index {
					on_visible(index);
				}
			}
		});
		let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
			Ok(observer) => observer,
			Err(err) => {
				warn!("IntersectionObserver unavailable: {err:?}");
				return None;
			}
		};
		for (index, target) in targets.iter().enumerate() {
			if let Err(err) = target.set_attribute(STAGE_ATTR, &index.to_string()) {
				warn!("failed to tag stage {index}: {err:?}");
				continue;
			}
			observer.observe(target);
		}
		Some(Self {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for VisibilityWatch {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

struct FrameLoopInner {
	callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
	pending: Cell<Option<i32>>,
}

impl FrameLoopInner {
	fn request_next(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(ref cb) = *self.callback.borrow() {
			match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				Ok(id) => self.pending.set(Some(id)),
				Err(err) => warn!("requestAnimationFrame failed: {err:?}"),
			}
		}
	}
}

/// Calls `on_frame` once per display frame with seconds elapsed since the
/// first frame. Stops on drop.
pub struct FrameLoop {
	inner: Rc<FrameLoopInner>,
}

impl FrameLoop {
	/// Requests the first frame immediately.
	pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Self {
		let inner = Rc::new(FrameLoopInner {
			callback: RefCell::new(None),
			pending: Cell::new(None),
		});
		let weak: Weak<FrameLoopInner> = Rc::downgrade(&inner);
		let mut origin = None;
		*inner.callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
			let Some(inner) = weak.upgrade() else {
				return;
			};
			inner.pending.set(None);
			let start = *origin.get_or_insert(timestamp);
			on_frame((timestamp - start) / 1000.0);
			inner.request_next();
		}));
		inner.request_next();
		Self { inner }
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		if let (Some(id), Some(window)) = (self.inner.pending.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		self.inner.callback.borrow_mut().take();
	}
}
