use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use super::lightbox::ITEM_SELECTOR;
use crate::error::SiteResult;
use crate::utils::dom;

pub const ALL_CATEGORIES: &str = "all";

/// Whether an item tagged `item_category` stays visible under `selected`.
pub fn is_shown(selected: &str, item_category: Option<&str>) -> bool {
    selected == ALL_CATEGORIES || item_category == Some(selected)
}

/// Shows portfolio items of one category and fades the rest out.
pub struct PortfolioFilter {
    document: Document,
    transition_ms: u32,
}

impl PortfolioFilter {
    pub fn new(document: Document, transition_ms: u32) -> Self {
        Self {
            document,
            transition_ms,
        }
    }

    pub fn filter(&self, category: &str) {
        dom::report("Portfolio filter", self.apply(category));
    }

    fn apply(&self, category: &str) -> SiteResult<()> {
        let items = dom::query_all::<HtmlElement>(&self.document, ITEM_SELECTOR)?;
        let mut shown = 0;
        for item in items {
            let item_category = item.get_attribute("data-category");
            if is_shown(category, item_category.as_deref()) {
                dom::set_style(&item, "display", "block")?;
                dom::set_style(&item, "opacity", "1")?;
                dom::set_style(&item, "transform", "scale(1)")?;
                shown += 1;
            } else {
                dom::set_style(&item, "opacity", "0")?;
                dom::set_style(&item, "transform", "scale(0.8)")?;
                // Only hide if nothing re-showed the item in the meantime.
                Timeout::new(self.transition_ms, move || {
                    if dom::style_value(&item, "opacity") == "0" {
                        let _ = dom::set_style(&item, "display", "none");
                    }
                })
                .forget();
            }
        }
        log::debug!("Filter {:?}: {} items shown", category, shown);
        Ok(())
    }
}
