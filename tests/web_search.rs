use enliven::{
	attach,
	search::{finish_search, render_results, search_url},
	BehaviorConfig,
};
use js_sys::{Array, Object, Reflect};
use std::cell::Cell;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, Element, Event, EventInit, HtmlFormElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> Element {
	let document = window().unwrap().document().unwrap();
	let root = document.create_element("div").unwrap();
	root.set_inner_html(html);
	document.body().unwrap().append_child(&root).unwrap();
	root
}

/// Returns whether the submission was *not* suppressed.
fn submit(form: &HtmlFormElement) -> bool {
	let mut init = EventInit::new();
	init.bubbles(true).cancelable(true);
	let event = Event::new_with_event_init_dict("submit", &init).unwrap();
	form.dispatch_event(&event).unwrap()
}

async fn sleep(ms: i32) {
	let promise = js_sys::Promise::new(&mut |resolve, _reject| {
		window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
			.unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

fn named_record(name: &str) -> JsValue {
	let record = Object::new();
	Reflect::set(record.as_ref(), &JsValue::from_str("name"), &JsValue::from_str(name)).unwrap();
	record.into()
}

#[wasm_bindgen_test]
fn results_render_in_response_order() {
	let container = mount("");
	let results = Array::of2(&JsValue::from_str("alice"), &named_record("bob"));

	render_results(&container, &results);

	let list = container.query_selector("ul.results-list").unwrap().unwrap();
	let items = list.query_selector_all("li.result-item").unwrap();
	assert_eq!(items.length(), 2);
	let first: Element = items.get(0).unwrap().dyn_into().unwrap();
	let second: Element = items.get(1).unwrap().dyn_into().unwrap();
	assert_eq!(first.text_content().unwrap(), "alice");
	assert_eq!(second.text_content().unwrap(), "bob");
}

#[wasm_bindgen_test]
fn unrecognised_record_shape_falls_back_to_a_dump() {
	let container = mount("");
	let record = Object::new();
	Reflect::set(record.as_ref(), &JsValue::from_str("id"), &JsValue::from_f64(3.0)).unwrap();

	render_results(&container, &Array::of1(&record.into()));

	let item = container.query_selector("li").unwrap().unwrap();
	assert_eq!(item.text_content().unwrap(), r#"{"id":3}"#);
}

#[wasm_bindgen_test]
fn empty_response_renders_a_notice_and_no_list() {
	let container = mount("");

	render_results(&container, &Array::new());

	let notice = container.query_selector("p").unwrap().unwrap();
	assert_eq!(notice.text_content().unwrap(), "No results found.");
	assert!(container.query_selector("ul").unwrap().is_none());
}

#[wasm_bindgen_test]
fn rendering_replaces_prior_content() {
	let container = mount("");

	render_results(&container, &Array::of1(&JsValue::from_str("alice")));
	assert_eq!(container.query_selector_all("li").unwrap().length(), 1);

	render_results(&container, &Array::new());
	assert!(container.query_selector("li").unwrap().is_none());
	assert!(container.query_selector("p").unwrap().is_some());
}

#[wasm_bindgen_test]
fn query_text_is_percent_encoded() {
	assert_eq!(search_url("/search", "users", "a b&c"), "/search?type=users&query=a%20b%26c");
	assert_eq!(search_url("/search", "", "plain"), "/search?type=&query=plain");
}

#[wasm_bindgen_test]
fn stale_response_cannot_overwrite_a_newer_rendering() {
	let container = mount("");
	let latest = Cell::new(2_u64);

	finish_search(&latest, 2, "/search?type=&query=new", Some(&container), Ok(Array::of1(&JsValue::from_str("new"))));
	let item = container.query_selector("li").unwrap().unwrap();
	assert_eq!(item.text_content().unwrap(), "new");

	// The first submission lost the race; its late response is discarded.
	finish_search(&latest, 1, "/search?type=&query=old", Some(&container), Ok(Array::of1(&JsValue::from_str("old"))));
	let items = container.query_selector_all("li").unwrap();
	assert_eq!(items.length(), 1);
	let item: Element = items.get(0).unwrap().dyn_into().unwrap();
	assert_eq!(item.text_content().unwrap(), "new");
}

#[wasm_bindgen_test]
fn failure_leaves_prior_results_untouched() {
	let container = mount("");
	let latest = Cell::new(1_u64);
	finish_search(&latest, 1, "/search?type=&query=kept", Some(&container), Ok(Array::of1(&JsValue::from_str("kept"))));

	latest.set(2);
	finish_search(
		&latest,
		2,
		"/search?type=&query=broken",
		Some(&container),
		Err(JsValue::from_str("search endpoint returned status 500")),
	);

	let item = container.query_selector("li").unwrap().unwrap();
	assert_eq!(item.text_content().unwrap(), "kept");
}

#[wasm_bindgen_test]
async fn failed_request_surfaces_no_uncaught_error() {
	let root = mount(
		r#"<form id="searchForm">
			<input id="searchInput" type="text" value="alpha">
			<button type="submit">Search</button>
		</form>
		<div id="search-results"><p>previous</p></div>"#,
	);
	let config = BehaviorConfig {
		search_endpoint: "/no-such-endpoint".to_string(),
		..BehaviorConfig::default()
	};
	let _behaviors = attach(&root, &config);

	let form: HtmlFormElement = root.query_selector("form").unwrap().unwrap().dyn_into().unwrap();
	assert!(!submit(&form));

	// Give the request time to come back as a 404 and run the failure path.
	sleep(1_000).await;

	let container = root.query_selector("#search-results").unwrap().unwrap();
	let notice = container.query_selector("p").unwrap().unwrap();
	assert_eq!(notice.text_content().unwrap(), "previous");
}

#[wasm_bindgen_test]
fn empty_query_is_blocked_before_any_request() {
	let root = mount(
		r#"<form id="searchForm">
			<select id="search-type"><option value="users" selected>Users</option></select>
			<input id="searchInput" type="text" value="   ">
			<button type="submit">Search</button>
		</form>
		<div id="search-results"></div>"#,
	);
	let _behaviors = attach(&root, &BehaviorConfig::default());

	let form: HtmlFormElement = root.query_selector("form").unwrap().unwrap().dyn_into().unwrap();

	// The search listener always suppresses native submission.
	assert!(!submit(&form));

	let container = root.query_selector("#search-results").unwrap().unwrap();
	assert_eq!(container.child_element_count(), 0);
}
