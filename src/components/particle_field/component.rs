//! Leptos component hosting the particle field.
//!
//! The component renders a canvas, and once it is mounted builds the browser
//! ports, attaches a [`ParticleField`] to the canvas and starts the
//! `requestAnimationFrame` loop. Unmounting detaches the field and releases
//! the frame callback.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use web_sys::HtmlCanvasElement;

use super::browser::{AnimationFrames, CanvasSurface, WindowResize, entropy_seed};
use super::field::{ParticleField, Phase};
use super::theme::Theme;

type BrowserField = ParticleField<CanvasSurface, AnimationFrames, WindowResize>;

/// Renders the animated particle background as a full-viewport canvas.
///
/// Drawing is purely decorative: if the browser cannot provide a 2D context
/// the canvas simply stays blank.
#[component]
pub fn ParticleCanvas(#[prop(optional)] theme: Option<Theme>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frames = AnimationFrames::new();
	let field: Rc<RefCell<BrowserField>> = Rc::new(RefCell::new(ParticleField::new(
		theme.unwrap_or_default(),
		frames.clone(),
		WindowResize::default(),
		entropy_seed(),
	)));
	let (field_init, frames_init) = (field.clone(), frames.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if field_init.borrow().phase() != Phase::Unattached {
			return;
		}

		let field_tick = field_init.clone();
		frames_init.set_callback(move || field_tick.borrow_mut().tick());

		let mut field = field_init.borrow_mut();
		if field.attach(CanvasSurface::from_canvas(canvas)) {
			field.start();
		}
	});

	let teardown = SendWrapper::new(move || {
		field.borrow_mut().detach();
		frames.release();
	});
	on_cleanup(move || teardown.take()());

	view! { <canvas node_ref=canvas_ref class="particle-canvas" /> }
}
