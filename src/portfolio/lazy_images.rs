use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Document, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry, Window};

use crate::error::SiteResult;
use crate::utils::dom;

pub const DEFERRED_SOURCE: &str = "data-src";

/// Swaps `data-src` into `src` the first time an image is seen.
pub fn reveal(image: &HtmlImageElement) -> SiteResult<()> {
    if let Some(src) = image.get_attribute(DEFERRED_SOURCE) {
        image.set_src(&src);
        image.remove_attribute(DEFERRED_SOURCE)?;
        image.class_list().remove_1("lazy")?;
    }
    Ok(())
}

/// Observes every `img[data-src]`; each image is handled once, then dropped
/// from the observer.
pub fn init(window: &Window, document: &Document) -> SiteResult<usize> {
    if !Reflect::has(window, &"IntersectionObserver".into()).unwrap_or(false) {
        log::warn!("IntersectionObserver unavailable, lazy images left as-is");
        return Ok(0);
    }
    let images = dom::query_all::<HtmlImageElement>(document, "img[data-src]")?;
    if images.is_empty() {
        return Ok(0);
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(image) = target.dyn_ref::<HtmlImageElement>() {
                    dom::report("Lazy image", reveal(image));
                }
                observer.unobserve(&target);
            }
        },
    );
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    for image in &images {
        observer.observe(image);
    }
    log::debug!("Lazy loading {} images", images.len());
    Ok(images.len())
}
