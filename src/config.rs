/// The selector contract between [`attach`](`crate::attach`) and the host page markup.
///
/// The host page collaborates with this crate purely through well-known element
/// identifiers and classes. Collecting them here makes that dependency explicit and
/// testable: a test can mount a constructed fragment and point the configuration at it
/// instead of relying on ambient page structure.
///
/// [`Default`] matches the conventional markup:
///
/// | field | default |
/// |-|-|
/// | `nav_link_selector` | `".navbar a, .nav-links a"` |
/// | `search_form_id` | `"searchForm"` |
/// | `search_type_id` | `"search-type"` |
/// | `search_input_id` | `"searchInput"` |
/// | `results_container_id` | `"search-results"` |
/// | `search_endpoint` | `"/search"` |
/// | `alert_selector` | `".alert"` |
/// | `inline_errors` | `true` |
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
	/// Selector for navigation links whose `#`-fragment targets are scrolled into view smoothly.
	pub nav_link_selector: String,
	/// Identifier of the search [***form***](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/form), which gets its own submit listener.
	pub search_form_id: String,
	/// Identifier of the search-type [***select***](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/select)or scoping the query.
	pub search_type_id: String,
	/// Identifier of the search-text input.
	pub search_input_id: String,
	/// Identifier of the container rebuilt with each search response.
	/// Its absence is tolerated; rendering is skipped.
	pub results_container_id: String,
	/// Base path of the search endpoint. `type` and `query` parameters are appended.
	pub search_endpoint: String,
	/// Selector for transient notice banners that fade out and remove themselves.
	pub alert_selector: String,
	/// Render a per-field inline error message below each invalid input.
	///
	/// With this off, invalid inputs only receive the error border styling and a failed
	/// submit shows a single aggregate notice instead.
	pub inline_errors: bool,
}

impl Default for BehaviorConfig {
	fn default() -> Self {
		Self {
			nav_link_selector: ".navbar a, .nav-links a".to_string(),
			search_form_id: "searchForm".to_string(),
			search_type_id: "search-type".to_string(),
			search_input_id: "searchInput".to_string(),
			results_container_id: "search-results".to_string(),
			search_endpoint: "/search".to_string(),
			alert_selector: ".alert".to_string(),
			inline_errors: true,
		}
	}
}
