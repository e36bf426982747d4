use walkthrough_core::{Result, WalkthroughError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Element by id, or a configuration error naming the missing id.
pub fn require_element(document: &web::Document, id: &str) -> Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WalkthroughError::Configuration(format!("missing #{id}")))
}

pub fn require_html_element(document: &web::Document, id: &str) -> Result<web::HtmlElement> {
    require_element(document, id)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| WalkthroughError::Configuration(format!("#{id} is not an HTML element")))
}

pub fn create_html_element(document: &web::Document, tag: &str) -> Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| WalkthroughError::Configuration(format!("create <{tag}>: {e:?}")))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| WalkthroughError::Configuration(format!("<{tag}> is not an HTML element")))
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    _ = el.class_list().remove_1(class);
}

/// Replace `from` with `to` in the element's class list.
#[inline]
pub fn swap_class(el: &web::Element, from: &str, to: &str) {
    remove_class(el, from);
    add_class(el, to);
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Every element in `collection`, in document order.
pub fn collection_elements(collection: &web::HtmlCollection) -> Vec<web::Element> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let read = |v: std::result::Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Run `f` once after `delay_ms`. Returns the timer handle.
pub fn set_timeout(
    window: &web::Window,
    delay_ms: i32,
    f: impl FnOnce() + 'static,
) -> Option<i32> {
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
        .ok()
}

#[inline]
pub fn clear_timeout(window: &web::Window, handle: i32) {
    window.clear_timeout_with_handle(handle);
}

/// Attach a listener for the lifetime of the page.
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn px(value: f64) -> String {
    format!("{value}px")
}
