//! Static page sections, in page order.

use leptos::prelude::*;

mod about;
mod career;
mod contact;
mod hero;

pub use about::{About, Services, TrustBadges};
pub use career::{Achievements, Certifications, Experience, Projects};
pub use contact::{CallToAction, Contact, Footer, Team};
pub use hero::Hero;

/// Section heading shared by most sections: tag line plus a title whose
/// `accent` part is rendered with the gradient style.
#[component]
fn SectionHeader(
	tag: &'static str,
	#[prop(default = "")] before: &'static str,
	accent: &'static str,
	#[prop(default = "")] after: &'static str,
	#[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
	view! {
		<div class="section-header">
			<span class="section-tag">{tag}</span>
			<h2 class="section-title">
				{before} <span class="gradient-text">{accent}</span> {after}
			</h2>
			{subtitle.map(|s| view! { <p class="section-subtitle">{s}</p> })}
		</div>
	}
}
