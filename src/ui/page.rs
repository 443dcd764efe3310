use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlImageElement, HtmlLinkElement};

use crate::error::SiteResult;
use crate::utils::dom;

pub fn init(document: &Document, critical_images: &[String]) -> SiteResult<()> {
    if let Some(root) = document
        .document_element()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    {
        dom::set_style(&root, "scroll-behavior", "smooth")?;
    }
    preload_images(document, critical_images)?;
    track_visibility(document)?;
    hide_broken_images(document)
}

fn preload_images(document: &Document, sources: &[String]) -> SiteResult<()> {
    let Some(head) = document.head() else {
        return Ok(());
    };
    for src in sources {
        let link: HtmlLinkElement = dom::create(document, "link", "")?;
        link.set_rel("preload");
        link.set_as("image");
        link.set_href(src);
        head.append_child(&link)?;
    }
    Ok(())
}

fn track_visibility(document: &Document) -> SiteResult<()> {
    let doc = document.clone();
    dom::listen(document, "visibilitychange", move |_| {
        if let Some(body) = doc.body() {
            let _ = body.class_list().toggle_with_force("page-hidden", doc.hidden());
        }
    })
}

fn hide_broken_images(document: &Document) -> SiteResult<()> {
    for image in dom::query_all::<HtmlImageElement>(document, "img")? {
        dom::listen(&image.clone(), "error", move |_: Event| {
            let _ = dom::set_style(&image, "display", "none");
            log::warn!("Failed to load image: {}", image.src());
        })?;
    }
    Ok(())
}
