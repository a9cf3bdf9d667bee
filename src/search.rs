use crate::{
	behaviors::{self, PageBehaviors},
	config::BehaviorConfig,
};
use js_sys::{Array, JsString, Reflect, JSON};
use std::{cell::Cell, rc::Rc};
use tracing::{error, info, instrument, trace};
use wasm_bindgen::{JsCast, JsValue, UnwrapThrowExt};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, Response};

const EMPTY_QUERY_NOTICE: &str = "Please enter a search term.";
const FAILURE_NOTICE: &str = "An error occurred while searching. Please try again.";

/// Wires the designated search form: the query is validated, sent to the search
/// endpoint asynchronously, and the response is rendered into the results container.
///
/// Native form submission is always suppressed on this form. Overlapping requests are
/// not cancelled, but each submission takes a ticket and a response is only rendered
/// while its ticket is still the latest, so a slow earlier response can never overwrite
/// a newer one.
#[instrument(skip(config, behaviors))]
pub(crate) fn attach_search_form(root: &Element, config: &BehaviorConfig, behaviors: &mut PageBehaviors) {
	let form = match behaviors::find_by_id(root, &config.search_form_id) {
		Some(form) => form,
		None => return,
	};
	let root = root.clone();
	let search_type_id = config.search_type_id.clone();
	let search_input_id = config.search_input_id.clone();
	let results_container_id = config.results_container_id.clone();
	let endpoint = config.search_endpoint.clone();
	let latest_ticket = Rc::new(Cell::new(0_u64));
	behaviors::add_listener(form.as_ref(), "submit", behaviors, move |event| {
		event.prevent_default();
		let input: HtmlInputElement = match behaviors::find_by_id(&root, &search_input_id).and_then(|element| element.dyn_into().ok()) {
			Some(input) => input,
			None => return,
		};
		let query = input.value();
		if query.trim().is_empty() {
			behaviors::notify_blocking(EMPTY_QUERY_NOTICE);
			return;
		}
		let search_type = behaviors::find_by_id(&root, &search_type_id)
			.and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
			.map_or_else(String::new, |selector| selector.value());
		let url = search_url(&endpoint, &search_type, &query);
		let container = behaviors::find_by_id(&root, &results_container_id);

		let ticket = latest_ticket.get() + 1;
		latest_ticket.set(ticket);
		let latest_ticket = Rc::clone(&latest_ticket);
		spawn_local(async move {
			let outcome = run_search(&url).await;
			finish_search(&latest_ticket, ticket, &url, container.as_ref(), outcome);
		});
	});
}

/// Completes one search submission.
///
/// A response belonging to a superseded submission (its `ticket` is no longer the value
/// in `latest_ticket`) is discarded outright, so a slow earlier response can never
/// overwrite a newer rendering. A failure is logged and, while still current, surfaced
/// as one generic notice; prior content of the results container is left untouched.
/// Rendering is skipped when the container is absent.
pub fn finish_search(latest_ticket: &Cell<u64>, ticket: u64, url: &str, container: Option<&Element>, outcome: Result<Array, JsValue>) {
	let results = match outcome {
		Ok(results) => results,
		Err(error) => {
			error!("Search request to {:?} failed: {:?}", url, error);
			if latest_ticket.get() == ticket {
				behaviors::notify_blocking(FAILURE_NOTICE);
			}
			return;
		}
	};
	if latest_ticket.get() != ticket {
		info!("Discarding stale response for superseded search {:?}.", url);
		return;
	}
	trace!("Rendering {} search result(s).", results.length());
	if let Some(container) = container {
		render_results(container, &results);
	}
}

/// Builds the search request URL. Only the query text is percent-encoded; the search
/// type is a markup-controlled token.
#[must_use]
pub fn search_url(endpoint: &str, search_type: &str, query: &str) -> String {
	format!(
		"{}?type={}&query={}",
		endpoint,
		search_type,
		js_sys::encode_uri_component(query)
	)
}

async fn run_search(url: &str) -> Result<Array, JsValue> {
	let window = web_sys::window().expect_throw("enliven: No window.");
	let response: Response = JsFuture::from(window.fetch_with_str(url)).await?.dyn_into()?;
	if !response.ok() {
		return Err(JsValue::from_str(&format!("search endpoint returned status {}", response.status())));
	}
	let body = JsFuture::from(response.json()?).await?;
	body.dyn_into()
		.map_err(|_| JsValue::from_str("search endpoint returned a non-array body"))
}

/// Rebuilds the content of `container` from a search response.
///
/// Prior content is always discarded; there is no diffing. An empty response renders a
/// "no results" notice instead of a list.
pub fn render_results(container: &Element, results: &Array) {
	container.set_inner_html("");
	let document = container.owner_document().expect_throw("enliven: No owner document for results container.");
	if results.length() == 0 {
		let notice = document.create_element("p").unwrap_throw();
		notice.set_text_content(Some("No results found."));
		container.append_child(notice.as_ref()).unwrap_throw();
		return;
	}
	let list = document.create_element("ul").unwrap_throw();
	list.set_class_name("results-list");
	for result in results.iter() {
		let item = document.create_element("li").unwrap_throw();
		item.set_class_name("result-item");
		item.set_text_content(Some(&result_label(&result)));
		list.append_child(item.as_ref()).unwrap_throw();
	}
	container.append_child(list.as_ref()).unwrap_throw();
}

/// A result is either a plain string, a record with a `name`, or (as a fallback) dumped
/// in its entirety.
fn result_label(result: &JsValue) -> String {
	if let Some(text) = result.as_string() {
		return text;
	}
	if let Some(name) = Reflect::get(result, &JsValue::from_str("name"))
		.ok()
		.and_then(|name| name.as_string())
	{
		return name;
	}
	JSON::stringify(result).map_or_else(|_| String::from("[object]"), |json: JsString| String::from(json))
}
