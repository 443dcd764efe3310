use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::FadeInConfig;
use crate::error::SiteResult;
use crate::utils::dom;

/// Inline styles an element starts with before it scrolls into view.
pub fn hidden_styles(config: &FadeInConfig) -> [(&'static str, String); 3] {
    [
        ("opacity", "0".to_string()),
        ("transform", format!("translateY({}px)", config.offset_px)),
        (
            "transition",
            format!(
                "opacity {secs}s ease, transform {secs}s ease",
                secs = config.duration_secs
            ),
        ),
    ]
}

pub const VISIBLE_STYLES: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

/// Hides the configured elements and fades each one in the first time it
/// enters the viewport. Re-entering re-applies the same end state.
pub fn init(document: &Document, config: &FadeInConfig) -> SiteResult<()> {
    let targets = dom::query_all::<HtmlElement>(document, &config.selector)?;
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(element) = entry.target().dyn_into::<HtmlElement>() {
                    for (property, value) in VISIBLE_STYLES {
                        let _ = dom::set_style(&element, property, value);
                    }
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let hidden = hidden_styles(config);
    for element in &targets {
        for (property, value) in &hidden {
            dom::set_style(element, property, value)?;
        }
        observer.observe(element);
    }
    log::debug!("Fade-in observing {} elements", targets.len());
    Ok(())
}
