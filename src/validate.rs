use crate::{
	behaviors::{self, PageBehaviors},
	config::BehaviorConfig,
};
use tracing::{instrument, trace};
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{Element, HtmlElement, HtmlFormElement, HtmlInputElement};

const INVALID_BORDER: &str = "2px solid #dc3545";
const NEUTRAL_BORDER: &str = "1px solid #ddd";
const ERROR_MESSAGE_CLASS: &str = "error-message";

enum Failure {
	Required,
	EmailFormat,
}

impl Failure {
	fn message(&self) -> &'static str {
		match self {
			Failure::Required => "This field is required",
			Failure::EmailFormat => "Please enter a valid email address",
		}
	}
}

/// Adds a validating submit listener to every form below `root`. A failed validation
/// vetoes the submission; with `config.inline_errors` off, the per-field messages are
/// replaced by a single aggregate notice.
#[instrument(skip(config, behaviors))]
pub(crate) fn attach_form_validation(root: &Element, config: &BehaviorConfig, behaviors: &mut PageBehaviors) {
	let forms = root.query_selector_all("form").unwrap_throw();
	for i in 0..forms.length() {
		let form: HtmlFormElement = match forms.get(i).unwrap_throw().dyn_into() {
			Ok(form) => form,
			Err(_) => continue,
		};
		let inline_errors = config.inline_errors;
		let handled_form = form.clone();
		behaviors::add_listener(form.as_ref(), "submit", behaviors, move |event| {
			if !validate_form(&handled_form, inline_errors) {
				event.prevent_default();
				if !inline_errors {
					behaviors::notify_blocking("Please fill in all fields.");
				}
			}
		});
	}
}

/// Re-validates every `input[required]` descendant of `form`, updating each input's
/// styling and inline error message, and returns whether the form may submit.
///
/// All inputs are evaluated independently; there is no short-circuit on the first
/// failure. Validation is stateless: it is recomputed in full on every call, and a call
/// on an already-valid form leaves no residual error markup.
#[must_use]
pub fn validate_form(form: &HtmlFormElement, inline_errors: bool) -> bool {
	let inputs = form.query_selector_all("input[required]").unwrap_throw();
	let mut is_valid = true;
	for i in 0..inputs.length() {
		let input: HtmlInputElement = match inputs.get(i).unwrap_throw().dyn_into() {
			Ok(input) => input,
			Err(_) => continue,
		};
		match check_input(&input) {
			Ok(()) => mark_valid(&input),
			Err(failure) => {
				is_valid = false;
				trace!("Input {:?} failed validation: {}", input.name(), failure.message());
				mark_invalid(&input, &failure, inline_errors);
			}
		}
	}
	is_valid
}

fn check_input(input: &HtmlInputElement) -> Result<(), Failure> {
	let value = input.value();
	if value.trim().is_empty() {
		return Err(Failure::Required);
	}
	if input.type_() == "email" && !is_valid_email(&value) {
		return Err(Failure::EmailFormat);
	}
	Ok(())
}

/// Checks that `value` is shaped like `localpart@domain.tld`: no whitespace anywhere,
/// exactly one `@`, and a `.` with at least one character on each side after the `@`.
///
/// This is deliberately the same loose shape check browsers' `email` inputs start from,
/// not an RFC 5322 parser.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
	if value.contains(char::is_whitespace) {
		return false;
	}
	let mut parts = value.splitn(2, '@');
	let local = parts.next().unwrap_or("");
	let domain = match parts.next() {
		Some(domain) => domain,
		None => return false,
	};
	if local.is_empty() || domain.contains('@') {
		return false;
	}
	match domain.rsplit_once('.') {
		Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
		None => false,
	}
}

fn mark_invalid(input: &HtmlInputElement, failure: &Failure, inline_errors: bool) {
	let element: &HtmlElement = input.as_ref();
	element.style().set_property("border", INVALID_BORDER).unwrap_throw();
	if inline_errors {
		upsert_error_message(input, failure.message());
	}
}

fn mark_valid(input: &HtmlInputElement) {
	let element: &HtmlElement = input.as_ref();
	element.style().set_property("border", NEUTRAL_BORDER).unwrap_throw();
	if let Some(message) = existing_error_message(input) {
		message.remove();
	}
}

/// Creates the inline error message directly after `input`, or updates its text in
/// place. At most one message element exists per input.
fn upsert_error_message(input: &HtmlInputElement, text: &str) {
	if let Some(message) = existing_error_message(input) {
		message.set_text_content(Some(text));
		return;
	}
	let document = input.owner_document().expect_throw("enliven: No owner document for input.");
	let message: HtmlElement = document
		.create_element("div")
		.unwrap_throw()
		.dyn_into()
		.expect_throw("enliven: Created element is not an HtmlElement.");
	message.set_class_name(ERROR_MESSAGE_CLASS);
	let style = message.style();
	style.set_property("color", "#dc3545").unwrap_throw();
	style.set_property("font-size", "12px").unwrap_throw();
	style.set_property("margin-top", "5px").unwrap_throw();
	message.set_text_content(Some(text));
	let parent = input.parent_node().expect_throw("enliven: Validated input has no parent.");
	parent
		.insert_before(message.as_ref(), input.next_sibling().as_ref())
		.unwrap_throw();
}

fn existing_error_message(input: &HtmlInputElement) -> Option<Element> {
	input
		.next_element_sibling()
		.filter(|sibling| sibling.class_list().contains(ERROR_MESSAGE_CLASS))
}
