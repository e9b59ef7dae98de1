//! Browser implementations of the particle-field ports.
//!
//! - [`CanvasSurface`]: an `HtmlCanvasElement` plus its 2D context
//! - [`AnimationFrames`]: `requestAnimationFrame` / `cancelAnimationFrame`
//! - [`WindowResize`]: a `resize` listener on `window`

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::field::{FrameHandle, FrameScheduler, ResizeEvents};
use super::surface::Surface;
use super::theme::Color;

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// A canvas element with its 2D rendering context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Returns `None` if the canvas has no 2D context.
	pub fn from_canvas(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
		Some(Self { canvas, ctx })
	}
}

impl Surface for CanvasSurface {
	fn size(&self) -> (f64, f64) {
		(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn fit_to_viewport(&mut self) {
		let Some((w, h)) = web_sys::window().as_ref().and_then(viewport_size) else {
			return;
		};
		self.canvas.set_width(w as u32);
		self.canvas.set_height(h as u32);
	}

	fn clear(&mut self) {
		let (w, h) = self.size();
		self.ctx.clear_rect(0.0, 0.0, w, h);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}

	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color) {
		self.ctx.begin_path();
		self.ctx.move_to(x1, y1);
		self.ctx.line_to(x2, y2);
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.stroke();
	}
}

/// Frame scheduler backed by `requestAnimationFrame`.
///
/// Clones share the frame callback, so the host can install the callback
/// after the scheduler has been handed to the field.
#[derive(Clone, Default)]
pub struct AnimationFrames {
	callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl AnimationFrames {
	pub fn new() -> Self {
		Self::default()
	}

	/// Install the function invoked on each animation frame.
	pub fn set_callback(&self, f: impl FnMut() + 'static) {
		*self.callback.borrow_mut() = Some(Closure::new(f));
	}

	/// Drop the frame callback. Must not be called from inside it.
	pub fn release(&self) {
		self.callback.borrow_mut().take();
	}
}

impl FrameScheduler for AnimationFrames {
	fn request_frame(&mut self) -> Option<FrameHandle> {
		let window = web_sys::window()?;
		let callback = self.callback.borrow();
		window
			.request_animation_frame(callback.as_ref()?.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(handle);
		}
	}
}

/// Resize notifications from the browser window.
#[derive(Default)]
pub struct WindowResize {
	listener: Option<Closure<dyn FnMut()>>,
}

impl ResizeEvents for WindowResize {
	fn subscribe(&mut self, mut listener: Box<dyn FnMut()>) {
		self.unsubscribe();
		let Some(window) = web_sys::window() else {
			return;
		};
		let closure = Closure::<dyn FnMut()>::new(move || listener());
		if window
			.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
			.is_ok()
		{
			self.listener = Some(closure);
		}
	}

	fn unsubscribe(&mut self) {
		let Some(closure) = self.listener.take() else {
			return;
		};
		if let Some(window) = web_sys::window() {
			let _ = window
				.remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
		}
	}
}

/// A seed for the particle RNG, different on every page load.
pub fn entropy_seed() -> u64 {
	let noise = (js_sys::Math::random() * u64::MAX as f64) as u64;
	noise ^ js_sys::Date::now().to_bits()
}
