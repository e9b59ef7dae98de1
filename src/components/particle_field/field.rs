//! The particle-field animation driver.
//!
//! [`ParticleField`] owns a drawing surface and the particle set for one
//! attached session. Frame scheduling and viewport resize notifications are
//! reached through the [`FrameScheduler`] and [`ResizeEvents`] ports, so the
//! driver can be ticked synchronously against fakes as well as by
//! `requestAnimationFrame` in the browser.
//!
//! Lifecycle: `Unattached -> Attached -> Running -> Detached`. A detached
//! field may be attached again, which starts from a fresh random seed.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::particles::{Particle, ParticleSystem};
use super::render;
use super::surface::Surface;
use super::theme::Theme;

/// Identifier of a pending frame request.
pub type FrameHandle = i32;

/// Requests and cancels "call me on the next display refresh".
pub trait FrameScheduler {
	/// Schedule the next tick. `None` means no frame could be scheduled.
	fn request_frame(&mut self) -> Option<FrameHandle>;

	fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Subscription to viewport resize notifications.
pub trait ResizeEvents {
	/// Register `listener`, replacing any previous one.
	fn subscribe(&mut self, listener: Box<dyn FnMut()>);

	/// Remove the current listener. A no-op when nothing is subscribed.
	fn unsubscribe(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Unattached,
	/// Surface bound, particles not yet seeded.
	Attached,
	Running,
	Detached,
}

/// Animation driver for the decorative particle background.
pub struct ParticleField<S, F, E> {
	theme: Theme,
	rng: StdRng,
	scheduler: F,
	resize: E,
	/// Shared only with this field's own resize listener.
	surface: Rc<RefCell<Option<S>>>,
	particles: Option<ParticleSystem>,
	pending: Option<FrameHandle>,
	phase: Phase,
}

impl<S, F, E> ParticleField<S, F, E>
where
	S: Surface + 'static,
	F: FrameScheduler,
	E: ResizeEvents,
{
	pub fn new(theme: Theme, scheduler: F, resize: E, seed: u64) -> Self {
		Self {
			theme,
			rng: StdRng::seed_from_u64(seed),
			scheduler,
			resize,
			surface: Rc::new(RefCell::new(None)),
			particles: None,
			pending: None,
			phase: Phase::Unattached,
		}
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// Particles of the current session; empty unless running.
	pub fn particles(&self) -> &[Particle] {
		self.particles
			.as_ref()
			.map(|ps| ps.particles.as_slice())
			.unwrap_or(&[])
	}

	/// Handle of the frame request that will drive the next tick, if any.
	pub fn pending_frame(&self) -> Option<FrameHandle> {
		self.pending
	}

	/// Bind to `surface`, fit it to the viewport and start listening for resizes.
	///
	/// Returns `false` without changing state when no surface is available or
	/// the field is already attached.
	pub fn attach(&mut self, surface: Option<S>) -> bool {
		if matches!(self.phase, Phase::Attached | Phase::Running) {
			debug!("portfolio: particle field already attached");
			return false;
		}
		let Some(mut surface) = surface else {
			debug!("portfolio: no drawable surface, particle field disabled");
			return false;
		};

		surface.fit_to_viewport();
		let (w, h) = surface.size();
		*self.surface.borrow_mut() = Some(surface);

		let surface_resize = self.surface.clone();
		self.resize.subscribe(Box::new(move || {
			// Positions are left alone; particles outside the new bounds
			// get reflected by subsequent motion.
			if let Some(ref mut s) = *surface_resize.borrow_mut() {
				s.fit_to_viewport();
			}
		}));

		self.phase = Phase::Attached;
		info!("portfolio: particle field attached ({}x{})", w, h);
		true
	}

	/// Seed the particle set and request the first frame.
	pub fn start(&mut self) {
		if self.phase != Phase::Attached {
			return;
		}
		let Some((w, h)) = self.surface.borrow().as_ref().map(|s| s.size()) else {
			return;
		};

		let system = ParticleSystem::seed(&self.theme.particles, w, h, &mut self.rng);
		info!("portfolio: particle field started with {} particles", system.len());
		self.particles = Some(system);
		self.phase = Phase::Running;
		self.pending = self.scheduler.request_frame();
	}

	/// Run one frame: clear, move, draw, then schedule the next frame.
	pub fn tick(&mut self) {
		self.pending = None;
		if self.phase != Phase::Running {
			return;
		}

		{
			let mut surface = self.surface.borrow_mut();
			let (Some(surface), Some(system)) = (surface.as_mut(), self.particles.as_mut()) else {
				return;
			};
			let (w, h) = surface.size();
			surface.clear();
			system.update(w, h);
			render::render(surface, system, &self.theme);
		}

		self.pending = self.scheduler.request_frame();
	}

	/// Cancel the pending frame, stop listening for resizes and drop all
	/// session state. Safe to call repeatedly.
	pub fn detach(&mut self) {
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel_frame(handle);
		}
		if matches!(self.phase, Phase::Attached | Phase::Running) {
			self.resize.unsubscribe();
			info!("portfolio: particle field detached");
		}
		self.surface.borrow_mut().take();
		self.particles = None;
		self.phase = Phase::Detached;
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::super::theme::Color;
	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	enum Draw {
		Clear,
		Circle { x: f64, y: f64, radius: f64, color: Color },
		Line { from: (f64, f64), to: (f64, f64), color: Color },
	}

	/// Surface whose size follows a shared "viewport" on every fit.
	struct RecordingSurface {
		viewport: Rc<Cell<(f64, f64)>>,
		size: (f64, f64),
		log: Rc<RefCell<Vec<Draw>>>,
	}

	impl Surface for RecordingSurface {
		fn size(&self) -> (f64, f64) {
			self.size
		}

		fn fit_to_viewport(&mut self) {
			self.size = self.viewport.get();
		}

		fn clear(&mut self) {
			self.log.borrow_mut().push(Draw::Clear);
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
			self.log.borrow_mut().push(Draw::Circle { x, y, radius, color });
		}

		fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color) {
			self.log.borrow_mut().push(Draw::Line {
				from: (x1, y1),
				to: (x2, y2),
				color,
			});
		}
	}

	#[derive(Default)]
	struct FrameLog {
		next: FrameHandle,
		requested: Vec<FrameHandle>,
		cancelled: Vec<FrameHandle>,
	}

	#[derive(Clone, Default)]
	struct ManualFrames(Rc<RefCell<FrameLog>>);

	impl FrameScheduler for ManualFrames {
		fn request_frame(&mut self) -> Option<FrameHandle> {
			let mut log = self.0.borrow_mut();
			log.next += 1;
			let handle = log.next;
			log.requested.push(handle);
			Some(handle)
		}

		fn cancel_frame(&mut self, handle: FrameHandle) {
			self.0.borrow_mut().cancelled.push(handle);
		}
	}

	#[derive(Clone, Default)]
	struct ManualResize {
		listener: Rc<RefCell<Option<Box<dyn FnMut()>>>>,
		unsubscribed: Rc<Cell<usize>>,
	}

	impl ManualResize {
		fn fire(&self) {
			if let Some(ref mut listener) = *self.listener.borrow_mut() {
				listener();
			}
		}

		fn is_subscribed(&self) -> bool {
			self.listener.borrow().is_some()
		}
	}

	impl ResizeEvents for ManualResize {
		fn subscribe(&mut self, listener: Box<dyn FnMut()>) {
			*self.listener.borrow_mut() = Some(listener);
		}

		fn unsubscribe(&mut self) {
			if self.listener.borrow_mut().take().is_some() {
				self.unsubscribed.set(self.unsubscribed.get() + 1);
			}
		}
	}

	struct Harness {
		field: ParticleField<RecordingSurface, ManualFrames, ManualResize>,
		viewport: Rc<Cell<(f64, f64)>>,
		log: Rc<RefCell<Vec<Draw>>>,
		frames: ManualFrames,
		resize: ManualResize,
	}

	impl Harness {
		fn new(width: f64, height: f64) -> Self {
			let frames = ManualFrames::default();
			let resize = ManualResize::default();
			Self {
				field: ParticleField::new(Theme::default(), frames.clone(), resize.clone(), 3),
				viewport: Rc::new(Cell::new((width, height))),
				log: Rc::new(RefCell::new(Vec::new())),
				frames,
				resize,
			}
		}

		fn surface(&self) -> RecordingSurface {
			RecordingSurface {
				viewport: self.viewport.clone(),
				size: (0.0, 0.0),
				log: self.log.clone(),
			}
		}

		fn attach_and_start(&mut self) {
			let surface = self.surface();
			assert!(self.field.attach(Some(surface)));
			self.field.start();
		}

		fn set_particles(&mut self, particles: Vec<Particle>) {
			self.field.particles = Some(ParticleSystem::from_particles(particles));
		}

		fn surface_size(&self) -> Option<(f64, f64)> {
			self.field.surface.borrow().as_ref().map(|s| s.size())
		}
	}

	fn still(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			size: 2.0,
			opacity: 0.4,
		}
	}

	#[test]
	fn missing_surface_is_a_silent_noop() {
		let mut h = Harness::new(800.0, 600.0);
		assert!(!h.field.attach(None));
		h.field.start();
		h.field.tick();

		assert_eq!(h.field.phase(), Phase::Unattached);
		assert!(h.field.particles().is_empty());
		assert!(h.frames.0.borrow().requested.is_empty());
		assert!(!h.resize.is_subscribed());
	}

	#[test]
	fn start_seeds_fixed_count_in_bounds() {
		let mut h = Harness::new(800.0, 600.0);
		h.attach_and_start();

		assert_eq!(h.field.phase(), Phase::Running);
		assert_eq!(h.field.particles().len(), 50);
		for p in h.field.particles() {
			assert!(p.x >= 0.0 && p.x < 800.0);
			assert!(p.y >= 0.0 && p.y < 600.0);
		}
		assert_eq!(h.field.pending_frame(), Some(1));
	}

	#[test]
	fn start_before_attach_does_nothing() {
		let mut h = Harness::new(800.0, 600.0);
		h.field.start();
		assert_eq!(h.field.phase(), Phase::Unattached);
		assert_eq!(h.field.pending_frame(), None);
	}

	#[test]
	fn tick_clears_moves_draws_and_reschedules() {
		let mut h = Harness::new(800.0, 600.0);
		h.attach_and_start();
		h.set_particles(vec![
			Particle {
				vx: 1.0,
				..still(0.0, 0.0)
			},
			still(100.0, 0.0),
		]);
		h.log.borrow_mut().clear();

		h.field.tick();

		let log = h.log.borrow();
		assert_eq!(log[0], Draw::Clear);
		assert_eq!(
			log[1],
			Draw::Circle {
				x: 1.0,
				y: 0.0,
				radius: 2.0,
				color: Color::rgba(0, 212, 255, 0.4),
			}
		);
		assert!(matches!(log[2], Draw::Circle { x, .. } if x == 100.0));
		let Draw::Line { from, to, color } = &log[3] else {
			panic!("expected a link, got {:?}", log[3]);
		};
		assert_eq!((*from, *to), ((1.0, 0.0), (100.0, 0.0)));
		assert!((color.a - 0.1 * (1.0 - 99.0 / 150.0)).abs() < 1e-12);
		assert_eq!(log.len(), 4);

		assert_eq!(h.field.pending_frame(), Some(2));
	}

	#[test]
	fn scenario_pairs_link_only_when_close() {
		let mut h = Harness::new(800.0, 600.0);
		h.attach_and_start();
		h.set_particles(vec![still(0.0, 0.0), still(100.0, 0.0), still(400.0, 300.0)]);
		h.field.tick();

		let lines: Vec<_> = h
			.log
			.borrow()
			.iter()
			.filter_map(|d| match d {
				Draw::Line { color, .. } => Some(color.a),
				_ => None,
			})
			.collect();
		assert_eq!(lines.len(), 1);
		assert!((lines[0] - 0.0333).abs() < 1e-4);
	}

	#[test]
	fn scenario_reflection_at_right_edge() {
		let mut h = Harness::new(800.0, 600.0);
		h.attach_and_start();
		h.set_particles(vec![
			Particle {
				vx: 0.5,
				..still(799.0, 300.0)
			},
			Particle {
				vx: 0.5,
				..still(799.8, 300.0)
			},
		]);

		h.field.tick();

		let ps = h.field.particles();
		assert_eq!(ps[0].x, 799.5);
		assert_eq!(ps[0].vx, 0.5);
		assert!((ps[1].x - 800.3).abs() < 1e-9);
		assert_eq!(ps[1].vx, -0.5);
	}

	#[test]
	fn resize_refits_surface_but_keeps_positions() {
		let mut h = Harness::new(800.0, 600.0);
		h.attach_and_start();
		assert_eq!(h.surface_size(), Some((800.0, 600.0)));
		let before: Vec<_> = h.field.particles().to_vec();

		h.viewport.set((400.0, 300.0));
		h.resize.fire();

		assert_eq!(h.surface_size(), Some((400.0, 300.0)));
		assert_eq!(h.field.particles(), before.as_slice());
	}

	#[test]
	fn detach_cancels_pending_frame_and_unsubscribes() {
		let mut h = Harness::new(800.0, 600.0);
		h.attach_and_start();
		h.field.tick();
		let pending = h.field.pending_frame();

		h.field.detach();

		assert_eq!(h.field.phase(), Phase::Detached);
		assert_eq!(h.frames.0.borrow().cancelled, pending.into_iter().collect::<Vec<_>>());
		assert!(!h.resize.is_subscribed());
		assert!(h.field.particles().is_empty());
		assert_eq!(h.surface_size(), None);
	}

	#[test]
	fn detach_twice_is_harmless() {
		let mut h = Harness::new(800.0, 600.0);
		h.attach_and_start();
		h.field.detach();
		h.field.detach();

		assert_eq!(h.field.pending_frame(), None);
		assert_eq!(h.frames.0.borrow().cancelled.len(), 1);
		assert_eq!(h.resize.unsubscribed.get(), 1);
	}

	#[test]
	fn late_tick_after_detach_schedules_nothing() {
		let mut h = Harness::new(800.0, 600.0);
		h.attach_and_start();
		h.field.detach();
		let requested = h.frames.0.borrow().requested.len();
		h.log.borrow_mut().clear();

		h.field.tick();

		assert_eq!(h.frames.0.borrow().requested.len(), requested);
		assert_eq!(h.field.pending_frame(), None);
		assert!(h.log.borrow().is_empty());
	}

	#[test]
	fn restart_after_detach_reseeds() {
		let mut h = Harness::new(800.0, 600.0);
		h.attach_and_start();
		let first: Vec<_> = h.field.particles().to_vec();
		h.field.detach();

		h.attach_and_start();

		assert_eq!(h.field.phase(), Phase::Running);
		assert_eq!(h.field.particles().len(), 50);
		assert_ne!(h.field.particles(), first.as_slice());
		for p in h.field.particles() {
			assert!(p.x >= 0.0 && p.x < 800.0);
			assert!(p.y >= 0.0 && p.y < 600.0);
		}
	}

	#[test]
	fn second_attach_while_running_is_ignored() {
		let mut h = Harness::new(800.0, 600.0);
		h.attach_and_start();
		let surface = h.surface();
		assert!(!h.field.attach(Some(surface)));
		assert_eq!(h.field.phase(), Phase::Running);
	}
}
