//! portfolio: single-page personal portfolio rendered client-side.
//!
//! This crate provides the page's Leptos components: a scroll-aware
//! navigation bar, static content sections, scroll-triggered counters and an
//! animated particle-field background behind the hero.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;
pub mod sections;

pub use components::particle_field::{ParticleCanvas, ParticleField, ParticleStyle, Theme};

use components::navigation::Navigation;
use sections::{
	About, Achievements, CallToAction, Certifications, Contact, Experience, Footer, Hero, Projects,
	Services, Team, TrustBadges,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Parse a particle style override. Malformed JSON yields `None`.
pub fn parse_particle_style(json: &str) -> Option<ParticleStyle> {
	match serde_json::from_str::<ParticleStyle>(json) {
		Ok(style) => Some(style.normalized()),
		Err(e) => {
			warn!("portfolio: failed to parse particle config: {}", e);
			None
		}
	}
}

/// Load a particle style override from a script element with id="particle-config".
/// Expected format: JSON object with any subset of the `ParticleStyle` fields.
fn load_particle_style() -> Option<ParticleStyle> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	let style = parse_particle_style(&json_text)?;
	info!("portfolio: particle config override loaded ({} particles)", style.count);
	Some(style)
}

/// Theme selected by the page: a `data-particle-theme` attribute on the
/// config script picks a preset, and the script body overrides its style.
fn load_theme() -> Theme {
	let preset = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id("particle-config"))
		.and_then(|e| e.get_attribute("data-particle-theme"))
		.and_then(|name| Theme::by_name(&name));
	let theme = preset.unwrap_or_default();

	match load_particle_style() {
		Some(particles) => Theme { particles, ..theme },
		None => theme,
	}
}

/// Main application component.
/// Composes the navigation bar, every content section and the footer.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let theme = load_theme();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Sunil Kumar | Full Stack Developer" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Navigation />
		<main>
			<Hero theme=theme />
			<TrustBadges />
			<About />
			<Services />
			<Experience />
			<Projects />
			<Certifications />
			<Achievements />
			<Team />
			<CallToAction />
			<Contact />
		</main>
		<Footer />
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::particle_field::particles::ParticleSystem;
	use crate::components::particle_field::theme::{MAX_COUNT, MAX_SPEED};

	#[test]
	fn particle_override_is_normalized() {
		let style = parse_particle_style(r#"{ "count": 20, "size_min": 5, "size_max": 1 }"#).unwrap();
		assert_eq!(style.count, 20);
		assert_eq!((style.size_min, style.size_max), (1.0, 5.0));
	}

	#[test]
	fn malformed_override_is_ignored() {
		assert!(parse_particle_style("{ count: ").is_none());
		assert!(parse_particle_style(r#"{ "count": "many" }"#).is_none());
	}

	#[test]
	fn extreme_override_still_seeds() {
		let style = parse_particle_style(r#"{ "speed": 1e308, "count": 100000 }"#).unwrap();
		assert_eq!(style.count, MAX_COUNT);

		let system = ParticleSystem::seed(&style, 800.0, 600.0, &mut StdRng::seed_from_u64(1));
		assert_eq!(system.len(), MAX_COUNT);
		for p in &system.particles {
			assert!(p.vx.abs() <= MAX_SPEED && p.vy.abs() <= MAX_SPEED);
			assert!((0.0..800.0).contains(&p.x) && (0.0..600.0).contains(&p.y));
		}
	}
}
