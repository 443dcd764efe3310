use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::{SiteError, SiteResult};

pub fn window() -> SiteResult<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> SiteResult<Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn body(document: &Document) -> SiteResult<HtmlElement> {
    document
        .body()
        .ok_or_else(|| SiteError::MissingElement("body".to_string()))
}

/// Looks up `#id` and casts it to the expected element type.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> SiteResult<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(format!("#{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::WrongElementType(format!("#{}", id)))
}

/// Like [`by_id`] but treats absence as a normal outcome.
pub fn find_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

pub fn query<T: JsCast>(document: &Document, selector: &str) -> SiteResult<Option<T>> {
    Ok(document
        .query_selector(selector)?
        .and_then(|element| element.dyn_into::<T>().ok()))
}

/// All matches of `selector` in document order; nodes that are not a `T` are skipped.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> SiteResult<Vec<T>> {
    Ok(collect(document.query_selector_all(selector)?))
}

pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> SiteResult<Vec<T>> {
    Ok(collect(root.query_selector_all(selector)?))
}

fn collect<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Registers a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> SiteResult<()>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> SiteResult<()> {
    element.style().set_property(property, value)?;
    Ok(())
}

pub fn style_value(element: &HtmlElement, property: &str) -> String {
    element
        .style()
        .get_property_value(property)
        .unwrap_or_default()
}

/// Suppresses (or restores) page scrolling while an overlay is shown.
pub fn lock_page_scroll(document: &Document, locked: bool) -> SiteResult<()> {
    let value = if locked { "hidden" } else { "auto" };
    set_style(&body(document)?, "overflow", value)
}

/// Creates `<tag class="...">`.
pub fn create<T: JsCast>(document: &Document, tag: &str, class: &str) -> SiteResult<T> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element
        .dyn_into::<T>()
        .map_err(|_| SiteError::WrongElementType(tag.to_string()))
}

/// Logs instead of propagating; used at the edge of every event handler.
pub fn report(context: &str, result: SiteResult<()>) {
    if let Err(e) = result {
        log::error!("{}: {}", context, e);
    }
}

/// Whether an event target is exactly `element` (not one of its descendants).
pub fn is_same(target: &EventTarget, element: &Element) -> bool {
    let target: &JsValue = target;
    let element: &JsValue = element;
    target == element
}
