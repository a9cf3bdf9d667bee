use crate::{
	behaviors::{self, PageBehaviors},
	config::BehaviorConfig,
};
use tracing::instrument;
use wasm_bindgen::{closure::Closure, JsCast, UnwrapThrowExt};
use web_sys::{Element, HtmlElement};

/// How long a notice banner stays fully visible before fading.
const NOTICE_VISIBLE_MS: i32 = 5_000;
/// Duration of the opacity transition; removal happens once it has run out.
const NOTICE_FADE_MS: i32 = 500;

/// Schedules the fade-and-remove timers for every notice banner below `root`.
#[instrument(skip(config, behaviors))]
pub(crate) fn attach_alert_fades(root: &Element, config: &BehaviorConfig, behaviors: &mut PageBehaviors) {
	let banners = root.query_selector_all(&config.alert_selector).unwrap_throw();
	for i in 0..banners.length() {
		let banner: HtmlElement = match banners.get(i).unwrap_throw().dyn_into() {
			Ok(banner) => banner,
			Err(_) => continue,
		};
		schedule_fade(&banner, behaviors);
	}
}

fn schedule_fade(banner: &HtmlElement, behaviors: &mut PageBehaviors) {
	let window = web_sys::window().expect_throw("enliven: No window.");
	let fade = {
		let banner = banner.clone();
		Closure::wrap(Box::new(move || {
			let style = banner.style();
			style.set_property("transition", "opacity 0.5s ease").unwrap_throw();
			style.set_property("opacity", "0").unwrap_throw();
		}) as Box<dyn FnMut()>)
	};
	let remove = {
		let banner = banner.clone();
		Closure::wrap(Box::new(move || banner.remove()) as Box<dyn FnMut()>)
	};
	// Both stages are scheduled up front; the second fires once the transition is over.
	window
		.set_timeout_with_callback_and_timeout_and_arguments_0(fade.as_ref().unchecked_ref(), NOTICE_VISIBLE_MS)
		.unwrap_throw();
	window
		.set_timeout_with_callback_and_timeout_and_arguments_0(remove.as_ref().unchecked_ref(), NOTICE_VISIBLE_MS + NOTICE_FADE_MS)
		.unwrap_throw();
	behaviors.hold_timer(fade);
	behaviors.hold_timer(remove);
}

/// Focus/blur listeners on inputs and selectors that toggle an accent border and
/// shadow. Purely visual; no validation or data effect.
#[instrument(skip(behaviors))]
pub(crate) fn attach_focus_styling(root: &Element, behaviors: &mut PageBehaviors) {
	let fields = root.query_selector_all("input, select").unwrap_throw();
	for i in 0..fields.length() {
		let field: HtmlElement = match fields.get(i).unwrap_throw().dyn_into() {
			Ok(field) => field,
			Err(_) => continue,
		};
		let focused = field.clone();
		behaviors::add_listener(field.as_ref(), "focus", behaviors, move |_| {
			let style = focused.style();
			style.set_property("border-color", "#007bff").unwrap_throw();
			style.set_property("box-shadow", "0 0 0 2px rgba(0, 123, 255, 0.25)").unwrap_throw();
		});
		let blurred = field.clone();
		behaviors::add_listener(field.as_ref(), "blur", behaviors, move |_| {
			let style = blurred.style();
			style.set_property("border-color", "#ddd").unwrap_throw();
			style.set_property("box-shadow", "none").unwrap_throw();
		});
	}
}
