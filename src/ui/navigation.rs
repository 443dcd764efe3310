use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::NavigationConfig;
use crate::error::SiteResult;
use crate::utils::dom;

/// Whether the navbar should carry the `scrolled` style at this offset.
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Scroll position that puts an anchor target just below the fixed header.
pub fn anchor_scroll_top(target_offset_top: f64, header_offset: f64) -> f64 {
    target_offset_top - header_offset
}

/// Selector for an in-page anchor `href`, or `None` for a bare `#`.
pub fn anchor_selector(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

pub fn init(window: &Window, document: &Document, config: &NavigationConfig) -> SiteResult<()> {
    init_menu(document)?;
    init_scroll_style(window, document, config.scroll_threshold)?;
    init_smooth_scroll(window, document, config.header_offset)
}

fn init_menu(document: &Document) -> SiteResult<()> {
    let hamburger = dom::query::<Element>(document, ".hamburger")?;
    let menu = dom::query::<Element>(document, ".nav-menu")?;
    let (Some(hamburger), Some(menu)) = (hamburger, menu) else {
        log::debug!("No mobile menu on this page");
        return Ok(());
    };

    {
        let hamburger_ref = hamburger.clone();
        let menu = menu.clone();
        dom::listen(&hamburger, "click", move |_| {
            let _ = menu.class_list().toggle("active");
            let _ = hamburger_ref.class_list().toggle("active");
        })?;
    }

    for link in dom::query_all::<Element>(document, ".nav-menu a")? {
        let menu = menu.clone();
        let hamburger = hamburger.clone();
        dom::listen(&link, "click", move |_| {
            let _ = menu.class_list().remove_1("active");
            let _ = hamburger.class_list().remove_1("active");
        })?;
    }
    Ok(())
}

fn init_scroll_style(window: &Window, document: &Document, threshold: f64) -> SiteResult<()> {
    let Some(navbar) = dom::query::<Element>(document, ".navbar")? else {
        log::debug!("No navbar on this page");
        return Ok(());
    };
    let win = window.clone();
    dom::listen(window, "scroll", move |_| {
        if let Ok(scroll_y) = win.scroll_y() {
            let scrolled = navbar_scrolled(scroll_y, threshold);
            let _ = navbar.class_list().toggle_with_force("scrolled", scrolled);
        }
    })
}

fn init_smooth_scroll(window: &Window, document: &Document, header_offset: f64) -> SiteResult<()> {
    for anchor in dom::query_all::<Element>(document, "a[href^=\"#\"]")? {
        let window = window.clone();
        let document = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::listen(&anchor, "click", move |event: Event| {
            event.prevent_default();
            let Some(selector) = anchor_selector(&href) else {
                return;
            };
            // Invalid selectors resolve to no target.
            let target = document
                .query_selector(selector)
                .ok()
                .flatten()
                .and_then(|element| element.dyn_into::<HtmlElement>().ok());
            if let Some(target) = target {
                let options = ScrollToOptions::new();
                options.set_top(anchor_scroll_top(target.offset_top() as f64, header_offset));
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        })?;
    }
    Ok(())
}
