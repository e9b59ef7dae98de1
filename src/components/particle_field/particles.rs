//! Particle store and per-frame motion.
//!
//! Particles drift at a constant per-axis speed and bounce off the surface
//! edges by flipping the offending velocity component. Positions are never
//! clamped, so a particle may sit just past an edge for one frame.

use rand::Rng;

use super::theme::ParticleStyle;

/// A single drifting point.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub opacity: f64,
}

/// A pair of particles close enough to be joined by a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub from: usize,
	pub to: usize,
	pub distance: f64,
	/// Line opacity, falling linearly from the style's base to zero.
	pub alpha: f64,
}

/// Owns the fixed-size particle set for one attached session.
#[derive(Clone, Debug, Default)]
pub struct ParticleSystem {
	pub particles: Vec<Particle>,
}

/// Uniform sample in `[min, max)`, or `min` when the range is empty.
fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
	if max > min {
		rng.gen_range(min..max)
	} else {
		min
	}
}

impl ParticleSystem {
	/// Seed `style.count` particles uniformly inside `width` x `height`.
	pub fn seed<R: Rng + ?Sized>(style: &ParticleStyle, width: f64, height: f64, rng: &mut R) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle {
				x: uniform(rng, 0.0, width),
				y: uniform(rng, 0.0, height),
				vx: uniform(rng, -style.speed, style.speed),
				vy: uniform(rng, -style.speed, style.speed),
				size: uniform(rng, style.size_min, style.size_max),
				opacity: uniform(rng, style.opacity_min, style.opacity_max),
			})
			.collect();

		Self { particles }
	}

	pub fn from_particles(particles: Vec<Particle>) -> Self {
		Self { particles }
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Advance every particle by one frame and reflect off the bounds.
	pub fn update(&mut self, width: f64, height: f64) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 || p.x > width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > height {
				p.vy = -p.vy;
			}
		}
	}

	/// Every unordered pair closer than `style.link_distance`, each visited once.
	pub fn links<'a>(&'a self, style: &'a ParticleStyle) -> impl Iterator<Item = Link> + 'a {
		let ps = &self.particles;
		(0..ps.len()).flat_map(move |i| {
			(i + 1..ps.len()).filter_map(move |j| {
				let (dx, dy) = (ps[i].x - ps[j].x, ps[i].y - ps[j].y);
				let distance = (dx * dx + dy * dy).sqrt();
				(distance < style.link_distance).then(|| Link {
					from: i,
					to: j,
					distance,
					alpha: link_alpha(distance, style),
				})
			})
		})
	}
}

/// Line opacity for two particles `distance` apart.
///
/// Equals `style.link_opacity` at zero, reaches zero at the link distance and
/// stays there beyond it.
pub fn link_alpha(distance: f64, style: &ParticleStyle) -> f64 {
	(style.link_opacity * (1.0 - distance / style.link_distance)).max(0.0)
}
