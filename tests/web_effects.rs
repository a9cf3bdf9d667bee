use enliven::{attach, BehaviorConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, Element, Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> Element {
	let document = window().unwrap().document().unwrap();
	let root = document.create_element("div").unwrap();
	root.set_inner_html(html);
	document.body().unwrap().append_child(&root).unwrap();
	root
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

#[wasm_bindgen_test]
fn focus_and_blur_toggle_the_accent_styling() {
	let root = mount(r#"<form><input type="text"></form>"#);
	let _behaviors = attach(&root, &BehaviorConfig::default());

	let input: HtmlElement = root.query_selector("input").unwrap().unwrap().dyn_into().unwrap();

	input.dispatch_event(&Event::new("focus").unwrap()).unwrap();
	let shadow = input.style().get_property_value("box-shadow").unwrap();
	assert!(!shadow.is_empty());
	assert_ne!(shadow, "none");

	input.dispatch_event(&Event::new("blur").unwrap()).unwrap();
	assert_eq!(input.style().get_property_value("box-shadow").unwrap(), "none");
}

#[wasm_bindgen_test]
async fn notice_banner_fades_and_removes_itself() {
	let root = mount(r#"<div class="alert">Saved.</div>"#);
	let _behaviors = attach(&root, &BehaviorConfig::default());

	// Still fully visible shortly after attach.
	sleep(100).await;
	assert!(root.query_selector(".alert").unwrap().is_some());

	// Past the visibility window the banner is transparent but still present.
	sleep(5_200).await;
	let banner: HtmlElement = root.query_selector(".alert").unwrap().unwrap().dyn_into().unwrap();
	assert_eq!(banner.style().get_property_value("opacity").unwrap(), "0");

	// Once the transition has run out it is gone.
	sleep(600).await;
	assert!(root.query_selector(".alert").unwrap().is_none());
}
