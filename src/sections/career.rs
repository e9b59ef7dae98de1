//! Experience, projects, certifications and achievements sections.

use leptos::prelude::*;

use super::SectionHeader;
use crate::content::{ACHIEVEMENTS, CERTIFICATIONS, EXPERIENCE, GITHUB_ICON, PROJECTS};

#[component]
pub fn Experience() -> impl IntoView {
	let jobs = EXPERIENCE
		.iter()
		.map(|job| {
			let achievements = job
				.achievements
				.iter()
				.map(|a| view! { <li>{*a}</li> })
				.collect_view();
			view! {
				<div class="experience-card glass-card">
					<div class="experience-header">
						<div class="experience-company-info">
							<div class="company-logo">{job.initial}</div>
							<div>
								<div class="experience-company">{job.company}</div>
								<div class="experience-role">{job.role}</div>
							</div>
						</div>
						<div class="experience-meta">
							<div class="experience-date">
								<span class="date-badge">{job.period}</span>
							</div>
							<div class="experience-location">"📍 " {job.location}</div>
						</div>
					</div>
					<ul class="experience-achievements">{achievements}</ul>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="experience" class="section experience">
			<div class="container">
				<SectionHeader tag="Experience" before="Where I've Made " accent="Impact" />
				<div class="experience-timeline">{jobs}</div>
			</div>
		</section>
	}
}

#[component]
pub fn Projects() -> impl IntoView {
	let cards = PROJECTS
		.iter()
		.map(|project| {
			let features = project
				.features
				.iter()
				.map(|f| view! { <li>{*f}</li> })
				.collect_view();
			let tech = project
				.tech
				.iter()
				.map(|t| view! { <span class="project-tech-tag">{*t}</span> })
				.collect_view();
			let live = project.live.map(|href| {
				view! {
					<a
						href=href
						target="_blank"
						rel="noopener noreferrer"
						class="project-link project-link-primary"
					>
						<svg
							width="16"
							height="16"
							viewBox="0 0 24 24"
							fill="none"
							stroke="currentColor"
							stroke-width="2"
						>
							<path d="M18 13v6a2 2 0 01-2 2H5a2 2 0 01-2-2V8a2 2 0 012-2h6M15 3h6v6M10 14L21 3" />
						</svg>
						"Live Demo"
					</a>
				}
			});

			view! {
				<div class="project-card glass-card">
					<div class="project-image">
						<img src=project.image alt=project.title loading="lazy" />
						<div class="project-overlay">
							<span class="project-category">{project.category}</span>
						</div>
					</div>
					<div class="project-content">
						<h3 class="project-title">{project.title}</h3>
						<p class="project-description">{project.description}</p>
						<ul class="project-features">{features}</ul>
						<div class="project-tech">{tech}</div>
						<div class="project-links">
							<a
								href=project.github
								target="_blank"
								rel="noopener noreferrer"
								class="project-link"
							>
								<svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor">
									<path d=GITHUB_ICON />
								</svg>
								"View Code"
							</a>
							{live}
						</div>
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="projects" class="section projects">
			<div class="container">
				<SectionHeader
					tag="Portfolio"
					before="Featured "
					accent="Projects"
					subtitle="Real-world applications demonstrating technical excellence and problem-solving"
				/>
				<div class="projects-grid">{cards}</div>
			</div>
		</section>
	}
}

#[component]
pub fn Certifications() -> impl IntoView {
	let cards = CERTIFICATIONS
		.iter()
		.map(|cert| {
			view! {
				<div class="cert-card glass-card">
					<div class="cert-icon" style=cert.icon_style()>
						{cert.icon}
					</div>
					<div class="cert-info">
						<div class="cert-name">{cert.name}</div>
						<div class="cert-issuer">{cert.issuer}</div>
					</div>
					<div class="cert-badge">"✓ Verified"</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="certifications" class="section certifications">
			<div class="container">
				<SectionHeader tag="Credentials" accent="Certifications" after=" & Recognition" />
				<div class="certifications-grid">{cards}</div>
			</div>
		</section>
	}
}

#[component]
pub fn Achievements() -> impl IntoView {
	let cards = ACHIEVEMENTS
		.iter()
		.map(|a| {
			view! {
				<div class="achievement-card glass-card">
					<div class="achievement-type">{a.kind}</div>
					<div class="achievement-icon">{a.icon}</div>
					<h4 class="achievement-title">{a.title}</h4>
					<p class="achievement-description">{a.description}</p>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="achievements" class="section achievements">
			<div class="container">
				<SectionHeader tag="Recognition" before="Achievements & " accent="Leadership" />
				<div class="achievements-grid">{cards}</div>
			</div>
		</section>
	}
}
