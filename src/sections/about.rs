//! Trust badges, about-me and services sections.

use leptos::prelude::*;

use super::SectionHeader;
use crate::content::{ABOUT_HIGHLIGHTS, SERVICES, TRUST_BADGES};

#[component]
pub fn TrustBadges() -> impl IntoView {
	let badges = TRUST_BADGES
		.iter()
		.map(|badge| {
			view! {
				<div class="trust-badge">
					<span class="trust-icon">{badge.icon}</span>
					<span class="trust-text">{badge.text}</span>
				</div>
			}
		})
		.collect_view();

	view! {
		<section class="trust-section">
			<div class="container">
				<div class="trust-badges">{badges}</div>
			</div>
		</section>
	}
}

#[component]
pub fn About() -> impl IntoView {
	let highlights = ABOUT_HIGHLIGHTS
		.iter()
		.map(|h| {
			view! {
				<div class="about-highlight glass-card">
					<div class="about-highlight-icon">{h.icon}</div>
					<div class="about-highlight-content">
						<h4>{h.title}</h4>
						<p>{h.text}</p>
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="about" class="section about">
			<div class="container">
				<SectionHeader
					tag="About Me"
					before="Turning Complex Problems into "
					accent="Elegant Solutions"
				/>
				<div class="about-content">
					<div class="about-image">
						<div class="about-image-wrapper">
							<div class="about-image-inner">
								<div class="profile-initials">"SK"</div>
							</div>
							<div class="about-image-ring"></div>
						</div>
					</div>
					<div class="about-text">
						<p class="about-intro">
							"As a "
							<strong>"Software Engineer at Zensar Technologies"</strong>
							", I specialize in building enterprise-grade microservices that power high-volume production systems. My expertise spans the full stack, from Spring Boot backends to React frontends."
						</p>
						<div class="about-highlights">{highlights}</div>
					</div>
				</div>
			</div>
		</section>
	}
}

#[component]
pub fn Services() -> impl IntoView {
	let cards = SERVICES
		.iter()
		.map(|service| {
			let features = service
				.features
				.iter()
				.map(|feature| view! { <span class="service-feature">{*feature}</span> })
				.collect_view();
			view! {
				<div class="service-card glass-card">
					<div class="service-icon">{service.icon}</div>
					<h3 class="service-title">{service.title}</h3>
					<p class="service-description">{service.description}</p>
					<div class="service-features">{features}</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="skills" class="section services">
			<div class="container">
				<SectionHeader
					tag="Services"
					before="What I Can "
					accent="Deliver"
					after=" For You"
					subtitle="End-to-end development solutions tailored to your business needs"
				/>
				<div class="services-grid">{cards}</div>
			</div>
		</section>
	}
}
