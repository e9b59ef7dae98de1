//! Team, call-to-action, contact and footer.

use leptos::prelude::*;

use super::SectionHeader;
use crate::content::{
	CONTACT_CHANNELS, FOOTER_LINKS, LINKEDIN_URL, LOGO, OWNER_NAME, SOCIAL_LINKS, TEAM, mailto,
};

#[component]
pub fn Team() -> impl IntoView {
	let members = TEAM
		.iter()
		.map(|member| {
			view! {
				<a
					href=member.portfolio
					target="_blank"
					rel="noopener noreferrer"
					class="team-card glass-card"
				>
					<div class="team-avatar">
						<span>{member.initials}</span>
					</div>
					<div class="team-info">
						<h3 class="team-name">{member.name}</h3>
						<div class="team-role">{member.role}</div>
						<p class="team-description">{member.description}</p>
					</div>
					<div class="team-link">"View Portfolio →"</div>
				</a>
			}
		})
		.collect_view();

	view! {
		<section id="team" class="section team">
			<div class="container">
				<SectionHeader
					tag="Collaborators"
					before="Meet The "
					accent="Team"
					subtitle="Talented professionals I collaborate with on large-scale projects"
				/>
				<div class="team-grid">{members}</div>
			</div>
		</section>
	}
}

#[component]
pub fn CallToAction() -> impl IntoView {
	view! {
		<section class="cta-section">
			<div class="container">
				<div class="cta-content glass-card">
					<h2 class="cta-title">
						"Ready to " <span class="gradient-text">"Elevate"</span> " Your Project?"
					</h2>
					<p class="cta-description">
						"Let's discuss how I can help you build scalable, production-grade solutions that drive business growth."
					</p>
					<div class="cta-buttons">
						<a href=mailto() class="btn btn-primary btn-lg">
							"Start a Conversation"
						</a>
						<a
							href=LINKEDIN_URL
							target="_blank"
							rel="noopener noreferrer"
							class="btn btn-secondary btn-lg"
						>
							"Connect on LinkedIn"
						</a>
					</div>
				</div>
			</div>
		</section>
	}
}

#[component]
pub fn Contact() -> impl IntoView {
	let channels = CONTACT_CHANNELS
		.iter()
		.map(|channel| {
			let value = match channel.href {
				Some(href) => view! { <a href=href>{channel.value}</a> }.into_any(),
				None => view! { <span>{channel.value}</span> }.into_any(),
			};
			view! {
				<div class="contact-card glass-card">
					<div class="contact-icon">{channel.icon}</div>
					<h3>{channel.title}</h3>
					{value}
				</div>
			}
		})
		.collect_view();

	let socials = SOCIAL_LINKS
		.iter()
		.map(|social| {
			view! {
				<a
					href=social.href
					target="_blank"
					rel="noopener noreferrer"
					class="contact-social-link"
				>
					<svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor">
						<path d=social.icon_path />
					</svg>
					{social.label}
				</a>
			}
		})
		.collect_view();

	view! {
		<section id="contact" class="section contact">
			<div class="container">
				<SectionHeader
					tag="Get in Touch"
					before="Let's Build Something "
					accent="Amazing"
					subtitle="Available for freelance projects and exciting opportunities"
				/>
				<div class="contact-content">{channels}</div>
				<div class="contact-social">{socials}</div>
			</div>
		</section>
	}
}

#[component]
pub fn Footer() -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year();
	let links = FOOTER_LINKS
		.iter()
		.map(|link| view! { <a href=link.href>{link.label}</a> })
		.collect_view();

	view! {
		<footer class="footer">
			<div class="container">
				<div class="footer-content">
					<div class="footer-brand">
						<span class="footer-logo">{LOGO} <span>"."</span></span>
						<p>"Building exceptional digital experiences"</p>
					</div>
					<div class="footer-links">{links}</div>
					<p class="footer-copyright">
						{format!("© {year} {OWNER_NAME}. All rights reserved.")}
					</p>
				</div>
			</div>
		</footer>
	}
}
