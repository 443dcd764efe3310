use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::error::SiteResult;
use crate::site::Site;
use crate::utils::dom;

/// What a `data-action` element asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenService(String),
    CloseServiceModal,
    OpenVideoModal(String),
    CloseVideoModal,
    OpenVideo(String),
    FilterPortfolio(String),
    OpenLightbox(usize),
    CloseLightbox,
    NextImage,
    PreviousImage,
    SwitchLanguage(String),
}

impl Action {
    /// `attribute` resolves the element's other `data-*` attributes.
    pub fn parse(name: &str, attribute: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let action = match name {
            "open-service" => Action::OpenService(attribute("data-service")?),
            "close-service-modal" => Action::CloseServiceModal,
            "open-video-modal" => Action::OpenVideoModal(attribute("data-src")?),
            "close-video-modal" => Action::CloseVideoModal,
            "open-video" => Action::OpenVideo(attribute("data-src")?),
            "filter-portfolio" => Action::FilterPortfolio(attribute("data-category")?),
            "open-lightbox" => Action::OpenLightbox(attribute("data-index")?.trim().parse().ok()?),
            "close-lightbox" => Action::CloseLightbox,
            "next-image" => Action::NextImage,
            "previous-image" => Action::PreviousImage,
            "switch-language" => Action::SwitchLanguage(attribute("data-lang")?),
            _ => return None,
        };
        Some(action)
    }

    pub fn from_element(element: &Element) -> Option<Self> {
        let name = element.get_attribute("data-action")?;
        Self::parse(&name, |attribute| element.get_attribute(attribute))
    }
}

/// Routes clicks on `[data-action]` elements (or their descendants) to the site.
pub fn bind(document: &Document, site: Rc<Site>) -> SiteResult<()> {
    dom::listen(document, "click", move |event: Event| {
        let Some(element) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest("[data-action]").ok().flatten())
        else {
            return;
        };
        match Action::from_element(&element) {
            Some(action) => {
                event.prevent_default();
                site.dispatch(action);
            }
            None => log::debug!(
                "Ignoring action {:?}",
                element.get_attribute("data-action")
            ),
        }
    })
}
