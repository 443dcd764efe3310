use std::rc::Rc;

use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::error::SiteResult;
use crate::i18n::locale::Locale;
use crate::i18n::switcher::LanguageSwitcher;
use crate::services::catalog::ServiceId;
use crate::utils::dom;

const MODAL_ID: &str = "serviceModal";
const CONTENT_ID: &str = "modalContent";
const TITLE_ID: &str = "modalTitle";

/// Details dialog for the service packages, rendered in the active language.
pub struct ServiceModal {
    document: Document,
    language: Rc<LanguageSwitcher>,
}

impl ServiceModal {
    pub fn new(document: Document, language: Rc<LanguageSwitcher>) -> Rc<Self> {
        Rc::new(Self { document, language })
    }

    /// Closes the dialog on clicks that land on the backdrop itself.
    pub fn init(self: &Rc<Self>, window: &Window) -> SiteResult<()> {
        let modal = Rc::clone(self);
        dom::listen(window, "click", move |event: Event| {
            let Some(target) = event.target() else {
                return;
            };
            if let Some(backdrop) = modal.document.get_element_by_id(MODAL_ID) {
                if dom::is_same(&target, &backdrop) {
                    modal.close();
                }
            }
        })
    }

    /// Unknown ids, and languages without translations, leave the dialog closed.
    pub fn open(&self, service_id: &str) {
        let Some(service) = ServiceId::from_id(service_id) else {
            log::debug!("Unknown service {:?}", service_id);
            return;
        };
        let Some(locale) = self.language.current_locale() else {
            log::debug!(
                "No {:?} details for language {:?}",
                service_id,
                self.language.current_code()
            );
            return;
        };
        dom::report("Open service modal", self.show(service, locale));
    }

    fn show(&self, service: ServiceId, locale: Locale) -> SiteResult<()> {
        let modal: HtmlElement = dom::by_id(&self.document, MODAL_ID)?;
        let content: Element = dom::by_id(&self.document, CONTENT_ID)?;
        content.set_inner_html(service.details_html(locale));
        if let Some(title) = self.document.get_element_by_id(TITLE_ID) {
            title.set_text_content(Some(service.title(locale)));
        }
        dom::set_style(&modal, "display", "block")?;
        dom::lock_page_scroll(&self.document, true)
    }

    pub fn close(&self) {
        let result = dom::by_id::<HtmlElement>(&self.document, MODAL_ID)
            .and_then(|modal| dom::set_style(&modal, "display", "none"))
            .and_then(|_| dom::lock_page_scroll(&self.document, false));
        dom::report("Close service modal", result);
    }

    pub fn is_open(&self) -> bool {
        dom::find_by_id::<HtmlElement>(&self.document, MODAL_ID)
            .map(|modal| dom::style_value(&modal, "display") == "block")
            .unwrap_or(false)
    }
}
