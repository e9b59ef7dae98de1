//! Scroll-triggered count-up statistic.
//!
//! [`CountUp`] holds the arithmetic of the animation; [`StatCounter`] starts
//! it the first time its element is at least half visible and steps it on a
//! 16 ms interval.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Interval between animation steps, in milliseconds.
pub const STEP_MS: i32 = 16;

/// Default length of a count-up animation, in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// Fraction of the element that must be visible to start counting.
const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Count from zero to `end` in equal increments.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
	end: u32,
	increment: f64,
	running: f64,
	value: u32,
	finished: bool,
}

impl CountUp {
	pub fn new(end: u32, duration_ms: f64) -> Self {
		let steps = duration_ms / STEP_MS as f64;
		let increment = if steps > 0.0 {
			end as f64 / steps
		} else {
			end as f64
		};
		Self {
			end,
			increment,
			running: 0.0,
			value: 0,
			finished: false,
		}
	}

	/// Advance one step and return the value to display.
	pub fn step(&mut self) -> u32 {
		if self.finished {
			return self.value;
		}
		self.running += self.increment;
		if self.running >= self.end as f64 {
			self.value = self.end;
			self.finished = true;
		} else {
			self.value = self.running.floor() as u32;
		}
		self.value
	}

	pub fn value(&self) -> u32 {
		self.value
	}

	pub fn is_finished(&self) -> bool {
		self.finished
	}
}

/// Browser resources held while a counter is observed or animating.
#[derive(Default)]
struct CounterTimers {
	observer: Option<IntersectionObserver>,
	on_visible: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
	interval: Option<i32>,
	on_step: Option<Closure<dyn FnMut()>>,
}

impl CounterTimers {
	fn clear_interval(&mut self) {
		if let (Some(id), Some(window)) = (self.interval.take(), web_sys::window()) {
			window.clear_interval_with_handle(id);
		}
	}

	fn stop(&mut self) {
		if let Some(observer) = self.observer.take() {
			observer.disconnect();
		}
		self.clear_interval();
		self.on_visible = None;
		self.on_step = None;
	}
}

fn start_counting(
	timers: &Rc<RefCell<CounterTimers>>,
	end: u32,
	duration_ms: f64,
	set_count: WriteSignal<u32>,
) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let mut count_up = CountUp::new(end, duration_ms);
	let timers_step = timers.clone();
	let on_step = Closure::<dyn FnMut()>::new(move || {
		set_count.set(count_up.step());
		if count_up.is_finished() {
			timers_step.borrow_mut().clear_interval();
		}
	});

	let mut timers = timers.borrow_mut();
	timers.interval = window
		.set_interval_with_callback_and_timeout_and_arguments_0(
			on_step.as_ref().unchecked_ref(),
			STEP_MS,
		)
		.ok();
	timers.on_step = Some(on_step);
}

/// A hero statistic that counts up to `value` when scrolled into view.
#[component]
pub fn StatCounter(
	value: u32,
	#[prop(default = "")] suffix: &'static str,
	label: &'static str,
	#[prop(default = DEFAULT_DURATION_MS)] duration_ms: f64,
) -> impl IntoView {
	let node_ref = NodeRef::<leptos::html::Div>::new();
	let (count, set_count) = signal(0u32);
	let timers: Rc<RefCell<CounterTimers>> = Rc::new(RefCell::new(CounterTimers::default()));
	let timers_init = timers.clone();

	Effect::new(move |_| {
		let Some(element) = node_ref.get() else {
			return;
		};
		if timers_init.borrow().observer.is_some() {
			return;
		}

		let timers_visible = timers_init.clone();
		let on_visible = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
			move |entries: js_sys::Array, observer: IntersectionObserver| {
				let visible = entries
					.get(0)
					.dyn_into::<IntersectionObserverEntry>()
					.map(|entry| entry.is_intersecting())
					.unwrap_or(false);
				if visible {
					observer.disconnect();
					start_counting(&timers_visible, value, duration_ms, set_count);
				}
			},
		);

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
		let Ok(observer) =
			IntersectionObserver::new_with_options(on_visible.as_ref().unchecked_ref(), &options)
		else {
			debug!("portfolio: IntersectionObserver unavailable, counter stays at 0");
			return;
		};
		observer.observe(&element);

		let mut timers = timers_init.borrow_mut();
		timers.observer = Some(observer);
		timers.on_visible = Some(on_visible);
	});

	let teardown = SendWrapper::new(move || timers.borrow_mut().stop());
	on_cleanup(move || teardown.take()());

	view! {
		<div class="hero-stat" node_ref=node_ref>
			<div class="hero-stat-value">{move || count.get()}{suffix}</div>
			<div class="hero-stat-label">{label}</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_duration_takes_125_steps() {
		let mut counter = CountUp::new(85, DEFAULT_DURATION_MS);
		let mut steps = 0;
		while !counter.is_finished() {
			counter.step();
			steps += 1;
			assert!(steps <= 200, "counter never finished");
		}
		assert!((124..=126).contains(&steps));
		assert_eq!(counter.value(), 85);
	}

	#[test]
	fn values_are_floored_and_non_decreasing() {
		let mut counter = CountUp::new(5, DEFAULT_DURATION_MS);
		let mut last = 0;
		for _ in 0..10 {
			let v = counter.step();
			assert!(v >= last);
			last = v;
		}
		// 10 * 0.04 = 0.4
		assert_eq!(last, 0);
	}

	#[test]
	fn overshoot_lands_exactly_on_end() {
		let mut counter = CountUp::new(99, 48.0);
		assert_eq!(counter.step(), 33);
		assert_eq!(counter.step(), 66);
		assert_eq!(counter.step(), 99);
		assert!(counter.is_finished());
		assert_eq!(counter.step(), 99);
	}

	#[test]
	fn zero_duration_finishes_immediately() {
		let mut counter = CountUp::new(7, 0.0);
		assert_eq!(counter.step(), 7);
		assert!(counter.is_finished());
	}
}
