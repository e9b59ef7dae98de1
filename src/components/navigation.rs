//! Fixed navigation bar that restyles itself once the page is scrolled.

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;

use crate::content::{LOGO, NAV_LINKS, SOCIAL_LINKS, mailto};

/// Vertical scroll offset, in CSS pixels, past which the bar is "scrolled".
const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLL_THRESHOLD
}

/// Top navigation with section links, contact button and mobile menu toggle.
#[component]
pub fn Navigation() -> impl IntoView {
	let (scrolled, set_scrolled) = signal(false);
	let (menu_open, set_menu_open) = signal(false);

	let on_scroll = Closure::<dyn FnMut()>::new(move || {
		if let Some(window) = web_sys::window() {
			set_scrolled.set(is_scrolled(window.scroll_y().unwrap_or(0.0)));
		}
	});
	if let Some(window) = web_sys::window() {
		let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
	}
	let teardown = SendWrapper::new(move || {
		if let Some(window) = web_sys::window() {
			let _ = window
				.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
		}
	});
	on_cleanup(move || teardown.take()());

	let links = NAV_LINKS
		.iter()
		.map(|link| {
			view! {
				<li>
					<a href=link.href class="nav-link" on:click=move |_| set_menu_open.set(false)>
						{link.label}
					</a>
				</li>
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
					class="nav-social-link"
					aria-label=social.label
				>
					<svg width="18" height="18" viewBox="0 0 24 24" fill="currentColor">
						<path d=social.icon_path />
					</svg>
				</a>
			}
		})
		.collect_view();

	view! {
		<nav class=move || if scrolled.get() { "nav nav-scrolled" } else { "nav" }>
			<div class="nav-container">
				<a href="#" class="nav-logo">
					<span class="logo-text">{LOGO}</span>
					<span class="logo-dot">"."</span>
				</a>
				<ul class=move || {
					if menu_open.get() { "nav-links nav-links-open" } else { "nav-links" }
				}>{links}</ul>
				<div class="nav-actions">
					<a href=mailto() class="btn btn-primary btn-nav">
						"Hire Me"
					</a>
					<div class="nav-social">{socials}</div>
				</div>
				<div
					class=move || {
						if menu_open.get() { "nav-mobile-toggle active" } else { "nav-mobile-toggle" }
					}
					on:click=move |_| set_menu_open.update(|open| *open = !*open)
					aria-label="Toggle menu"
				>
					<span></span>
					<span></span>
					<span></span>
				</div>
			</div>
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scrolled_only_past_threshold() {
		assert!(!is_scrolled(0.0));
		assert!(!is_scrolled(50.0));
		assert!(is_scrolled(50.5));
		assert!(is_scrolled(1200.0));
	}
}
