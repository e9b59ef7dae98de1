//! Visual theming for the particle field.
//!
//! A [`Theme`] pairs an accent color with the [`ParticleStyle`] that controls
//! how many particles are seeded, how fast they drift and when two of them
//! are close enough to be linked.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Particle seeding and linking parameters.
///
/// Every field has a default, so a partial JSON object such as
/// `{ "count": 80 }` is a valid override.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleStyle {
	/// Number of particles seeded on start.
	pub count: usize,
	/// Maximum absolute velocity per axis, in surface units per frame.
	pub speed: f64,
	/// Minimum particle radius
	pub size_min: f64,
	/// Maximum particle radius
	pub size_max: f64,
	/// Minimum particle opacity
	pub opacity_min: f64,
	/// Maximum particle opacity
	pub opacity_max: f64,
	/// Particles closer than this are joined by a line.
	pub link_distance: f64,
	/// Line opacity for two particles at distance zero.
	pub link_opacity: f64,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			count: 50,
			speed: 0.25,
			size_min: 1.0,
			size_max: 3.0,
			opacity_min: 0.2,
			opacity_max: 0.7,
			link_distance: 150.0,
			link_opacity: 0.1,
		}
	}
}

/// Upper bound on seeded particles; links cost O(count²) per frame.
pub const MAX_COUNT: usize = 300;
/// Upper bound on per-axis speed, in surface units per frame.
pub const MAX_SPEED: f64 = 5.0;
/// Upper bound on particle radius.
pub const MAX_SIZE: f64 = 50.0;

/// `value` if finite, else `fallback`.
fn finite_or(value: f64, fallback: f64) -> f64 {
	if value.is_finite() { value } else { fallback }
}

impl ParticleStyle {
	/// Repair values that would make seeding or linking meaningless.
	///
	/// Non-finite numbers fall back to the defaults, ranges are reordered,
	/// count, speed and size are capped, opacities clamped to `[0, 1]`, and a
	/// non-positive link distance falls back to the default.
	pub fn normalized(mut self) -> Self {
		let defaults = Self::default();

		self.count = self.count.min(MAX_COUNT);
		self.speed = finite_or(self.speed, defaults.speed).abs().min(MAX_SPEED);

		self.size_min = finite_or(self.size_min, defaults.size_min).clamp(0.0, MAX_SIZE);
		self.size_max = finite_or(self.size_max, defaults.size_max).clamp(0.0, MAX_SIZE);
		if self.size_min > self.size_max {
			std::mem::swap(&mut self.size_min, &mut self.size_max);
		}

		self.opacity_min = finite_or(self.opacity_min, defaults.opacity_min).clamp(0.0, 1.0);
		self.opacity_max = finite_or(self.opacity_max, defaults.opacity_max).clamp(0.0, 1.0);
		if self.opacity_min > self.opacity_max {
			std::mem::swap(&mut self.opacity_min, &mut self.opacity_max);
		}

		self.link_opacity = finite_or(self.link_opacity, defaults.link_opacity).clamp(0.0, 1.0);
		if !(self.link_distance.is_finite() && self.link_distance > 0.0) {
			self.link_distance = defaults.link_distance;
		}
		self
	}
}

/// Complete visual theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
	pub name: &'static str,
	/// Color used for both particles and links; alpha is set per draw call.
	pub accent: Color,
	pub particles: ParticleStyle,
}

impl Theme {
	/// Cyan accent on the dark hero (default)
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			accent: Color::rgb(0, 212, 255),
			particles: ParticleStyle::default(),
		}
	}

	/// Warm amber accent with a slightly denser field
	pub fn ember() -> Self {
		Self {
			name: "ember",
			accent: Color::rgb(255, 166, 77),
			particles: ParticleStyle {
				count: 60,
				link_distance: 130.0,
				..ParticleStyle::default()
			},
		}
	}

	/// Look up a preset by name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"default" => Some(Self::default_theme()),
			"ember" => Some(Self::ember()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}
