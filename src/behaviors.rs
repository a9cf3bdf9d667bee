use crate::{config::BehaviorConfig, effects, scroll, search, validate};
use tracing::{info, instrument};
use wasm_bindgen::{closure::Closure, JsCast, UnwrapThrowExt};
use web_sys::{Element, EventTarget};

/// Attached to a page (or a detached fragment) by [`attach`], this `struct` owns every
/// event listener closure and one-shot timer closure wired into the markup.
///
/// # Correct Use
///
/// Keep this alive for as long as the page is meant to stay interactive. The underlying
/// [***JavaScript***](https://developer.mozilla.org/en-US/docs/Web/JavaScript) functions
/// are invalidated when this instance is dropped, so listeners still attached to the
/// page will start throwing errors into [***JavaScript***](https://developer.mozilla.org/en-US/docs/Web/JavaScript)
/// afterwards. For whole-page use, [`core::mem::forget`] is appropriate.
#[derive(Debug)]
pub struct PageBehaviors {
	listeners: Vec<Closure<dyn FnMut(web_sys::Event)>>,
	timers: Vec<Closure<dyn FnMut()>>,
}

impl PageBehaviors {
	/// Number of event listeners held alive by this instance.
	#[must_use]
	pub fn listener_count(&self) -> usize {
		self.listeners.len()
	}

	pub(crate) fn hold_listener(&mut self, listener: Closure<dyn FnMut(web_sys::Event)>) {
		self.listeners.push(listener);
	}

	pub(crate) fn hold_timer(&mut self, timer: Closure<dyn FnMut()>) {
		self.timers.push(timer);
	}
}

/// Wires all page behaviors to the descendants of `root`:
///
/// - smooth scrolling for `#`-fragment navigation links,
/// - required/email validation on every form,
/// - asynchronous search submission and result rendering on the designated search form,
/// - transient notice fade-out and focus/blur styling.
///
/// Each behavior silently skips collaborator elements that are absent from the markup.
/// `root` is a parameter rather than the ambient document so that tests can run against
/// a constructed fragment.
#[must_use = "listeners are detached (and start throwing) once the returned `PageBehaviors` is dropped"]
#[instrument(skip(config))]
pub fn attach(root: &Element, config: &BehaviorConfig) -> PageBehaviors {
	let mut behaviors = PageBehaviors {
		listeners: Vec::new(),
		timers: Vec::new(),
	};
	scroll::attach_nav_links(root, config, &mut behaviors);
	validate::attach_form_validation(root, config, &mut behaviors);
	search::attach_search_form(root, config, &mut behaviors);
	effects::attach_alert_fades(root, config, &mut behaviors);
	effects::attach_focus_styling(root, &mut behaviors);
	info!("Attached {} event listener(s).", behaviors.listener_count());
	behaviors
}

pub(crate) fn add_listener(target: &EventTarget, name: &str, behaviors: &mut PageBehaviors, handler: impl FnMut(web_sys::Event) + 'static) {
	let listener = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
	target
		.add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
		.expect_throw("enliven: Failed to add event listener.");
	behaviors.hold_listener(listener);
}

/// Resolves an identifier to an element below `root`, like
/// [***getElementById***](https://developer.mozilla.org/en-US/docs/Web/API/Document/getElementById)
/// but scoped to the injected root rather than the owner document.
pub(crate) fn find_by_id(root: &Element, id: &str) -> Option<Element> {
	let candidates = root.query_selector_all("[id]").unwrap_throw();
	(0..candidates.length()).find_map(|i| {
		let element: Element = candidates.get(i)?.dyn_into().ok()?;
		if element.id() == id {
			Some(element)
		} else {
			None
		}
	})
}

/// Shows a blocking notice to the user.
pub(crate) fn notify_blocking(message: &str) {
	web_sys::window()
		.expect_throw("enliven: No window.")
		.alert_with_message(message)
		.unwrap_throw();
}
