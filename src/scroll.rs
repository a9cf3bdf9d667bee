use crate::{
	behaviors::{self, PageBehaviors},
	config::BehaviorConfig,
};
use tracing::instrument;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

/// Intercepts clicks on navigation links whose `href` is a `#`-fragment and scrolls the
/// matching element into view smoothly. Links with any other `href` keep their default
/// navigation; fragments that resolve to nothing are suppressed without a scroll.
#[instrument(skip(config, behaviors))]
pub(crate) fn attach_nav_links(root: &Element, config: &BehaviorConfig, behaviors: &mut PageBehaviors) {
	let links = root.query_selector_all(&config.nav_link_selector).unwrap_throw();
	for i in 0..links.length() {
		let link: Element = match links.get(i).unwrap_throw().dyn_into() {
			Ok(link) => link,
			Err(_) => continue,
		};
		let root = root.clone();
		behaviors::add_listener(link.clone().as_ref(), "click", behaviors, move |event| {
			// The attribute is read per click so that rewritten links behave correctly.
			let href = match link.get_attribute("href") {
				Some(href) => href,
				None => return,
			};
			let fragment = match href.strip_prefix('#') {
				Some(fragment) => fragment,
				None => return,
			};
			event.prevent_default();
			// An unresolvable fragment is tolerated without a scroll, feedback, or log.
			if let Some(target) = behaviors::find_by_id(&root, fragment) {
				let mut options = ScrollIntoViewOptions::new();
				options.behavior(ScrollBehavior::Smooth);
				target.scroll_into_view_with_scroll_into_view_options(&options);
			}
		});
	}
}
