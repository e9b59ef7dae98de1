//! Rendering of one particle-field frame.
//!
//! Drawing happens in two passes so that links are layered over the dots:
//! 1. Particles as filled circles
//! 2. Links between nearby pairs

use super::particles::ParticleSystem;
use super::surface::Surface;
use super::theme::Theme;

/// Draws particles and their links. The caller clears the surface first.
pub fn render<S: Surface + ?Sized>(surface: &mut S, system: &ParticleSystem, theme: &Theme) {
	draw_particles(surface, system, theme);
	draw_links(surface, system, theme);
}

fn draw_particles<S: Surface + ?Sized>(surface: &mut S, system: &ParticleSystem, theme: &Theme) {
	for p in &system.particles {
		surface.fill_circle(p.x, p.y, p.size, theme.accent.with_alpha(p.opacity));
	}
}

fn draw_links<S: Surface + ?Sized>(surface: &mut S, system: &ParticleSystem, theme: &Theme) {
	let ps = &system.particles;
	for link in system.links(&theme.particles) {
		let (a, b) = (&ps[link.from], &ps[link.to]);
		surface.stroke_line(a.x, a.y, b.x, b.y, theme.accent.with_alpha(link.alpha));
	}
}
