//! Hero section: greeting, pitch, calls to action and animated statistics
//! over the particle background.

use leptos::prelude::*;

use crate::components::counter::StatCounter;
use crate::components::particle_field::{ParticleCanvas, Theme};
use crate::content::{DISPLAY_NAME, HERO_STATS, greeting_for_hour};

fn current_greeting() -> &'static str {
	greeting_for_hour(js_sys::Date::new_0().get_hours())
}

#[component]
pub fn Hero(#[prop(optional)] theme: Option<Theme>) -> impl IntoView {
	let stats = HERO_STATS
		.iter()
		.map(|stat| view! { <StatCounter value=stat.value suffix=stat.suffix label=stat.label /> })
		.collect_view();

	view! {
		<section class="hero">
			<ParticleCanvas theme=theme.unwrap_or_default() />
			<div class="hero-bg"></div>
			<div class="hero-content">
				<div class="hero-badge animate-fadeInUp">
					<span class="badge-dot"></span>
					"Available for Freelance Projects"
				</div>
				<div class="hero-greeting animate-fadeInUp">
					<span>"👋"</span>
					" "
					{current_greeting()}
					"!"
				</div>
				<h1 class="hero-name animate-fadeInUp">
					"I'm " <span class="gradient-text">{DISPLAY_NAME}</span>
				</h1>
				<p class="hero-title animate-fadeInUp">
					<span class="typed-text">"Full Stack Developer"</span>
					" specializing in"
					<span class="highlight">" Microservices"</span>
					" &"
					<span class="highlight">" Cloud-Native"</span>
					" Solutions"
				</p>
				<p class="hero-description animate-fadeInUp">
					"I help businesses build "
					<strong>"scalable, production-grade applications"</strong>
					" that handle high-volume traffic with 99%+ availability. Let's transform your vision into robust digital solutions."
				</p>
				<div class="hero-cta animate-fadeInUp">
					<a href="#projects" class="btn btn-primary btn-lg">
						<span>"View My Projects"</span>
						<svg
							width="20"
							height="20"
							viewBox="0 0 24 24"
							fill="none"
							stroke="currentColor"
							stroke-width="2"
						>
							<path d="M5 12h14M12 5l7 7-7 7" />
						</svg>
					</a>
					<a href="#contact" class="btn btn-secondary btn-lg">
						<span>"Let's Discuss Your Project"</span>
					</a>
				</div>
				<div class="hero-stats animate-fadeInUp">{stats}</div>
			</div>
			<div class="hero-scroll">
				<span>"Scroll to explore"</span>
				<div class="scroll-indicator"></div>
			</div>
		</section>
	}
}
