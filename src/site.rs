use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::actions::{self, Action};
use crate::config::SiteConfig;
use crate::contact::form::ContactForm;
use crate::contact::transport::{InquiryTransport, SimulatedTransport};
use crate::error::SiteResult;
use crate::i18n::preference::{BrowserStorage, LanguagePreference, MemoryStore, PreferenceStore};
use crate::i18n::switcher::LanguageSwitcher;
use crate::modals::service::ServiceModal;
use crate::modals::video::{self, VideoModal};
use crate::portfolio::filter::PortfolioFilter;
use crate::portfolio::lazy_images;
use crate::portfolio::lightbox::Lightbox;
use crate::ui::notification::{NotificationCenter, Severity};
use crate::ui::{animate, navigation, page};
use crate::utils::dom;

/// Every component of the page, created once at boot.
pub struct Site {
    window: Window,
    document: Document,
    config: SiteConfig,
    pub language: Rc<LanguageSwitcher>,
    pub notifications: Rc<NotificationCenter>,
    pub service_modal: Rc<ServiceModal>,
    pub video_modal: Rc<VideoModal>,
    pub filter: PortfolioFilter,
    transport: Rc<dyn InquiryTransport>,
    contact: RefCell<Option<Rc<ContactForm>>>,
    lightbox: RefCell<Option<Rc<Lightbox>>>,
}

impl Site {
    pub fn new(window: Window, document: Document, config: SiteConfig) -> Rc<Self> {
        let store: Box<dyn PreferenceStore> = match BrowserStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{}, language choice will not persist", e);
                Box::new(MemoryStore::default())
            }
        };
        let preference = LanguagePreference::load(store, &config.storage_key, config.default_locale);
        let language = LanguageSwitcher::new(document.clone(), preference);
        let transport: Rc<dyn InquiryTransport> =
            Rc::new(SimulatedTransport::new(config.contact.submit_delay_ms));

        Rc::new(Self {
            notifications: NotificationCenter::new(document.clone(), config.notification.clone()),
            service_modal: ServiceModal::new(document.clone(), Rc::clone(&language)),
            video_modal: VideoModal::new(document.clone()),
            filter: PortfolioFilter::new(document.clone(), config.portfolio.filter_transition_ms),
            language,
            transport,
            contact: RefCell::new(None),
            lightbox: RefCell::new(None),
            window,
            document,
            config,
        })
    }

    /// Wires every component. A component that fails to initialize is logged
    /// and skipped; the rest of the page keeps working.
    pub fn start(self: &Rc<Self>) {
        dom::report("Language", self.language.init());
        dom::report(
            "Navigation",
            navigation::init(&self.window, &self.document, &self.config.navigation),
        );
        dom::report("Fade-in", animate::init(&self.document, &self.config.fade_in));
        dom::report("Contact form", self.init_contact());
        dom::report(
            "Page hooks",
            page::init(&self.document, &self.config.critical_images),
        );
        dom::report("Service modal", self.service_modal.init(&self.window));
        dom::report("Video modal", self.video_modal.init(&self.window));
        dom::report("Actions", actions::bind(&self.document, Rc::clone(self)));

        // Deferred so late markup (and the images it carries) is in place.
        let site = Rc::clone(self);
        Timeout::new(self.config.portfolio.lazy_load_delay_ms, move || {
            if let Err(e) = lazy_images::init(&site.window, &site.document) {
                log::error!("Lazy images: {}", e);
            }
        })
        .forget();
        let site = Rc::clone(self);
        Timeout::new(self.config.portfolio.lightbox_delay_ms, move || {
            site.init_lightbox();
        })
        .forget();

        log::info!("Site behaviour ready");
    }

    fn init_contact(&self) -> SiteResult<()> {
        let form = ContactForm::init(
            &self.document,
            Rc::clone(&self.language),
            Rc::clone(&self.notifications),
            Rc::clone(&self.transport),
        )?;
        *self.contact.borrow_mut() = form;
        Ok(())
    }

    pub fn init_lightbox(&self) {
        match Lightbox::init(&self.document) {
            Ok(lightbox) => *self.lightbox.borrow_mut() = lightbox,
            Err(e) => log::error!("Lightbox: {}", e),
        }
    }

    pub fn lightbox(&self) -> Option<Rc<Lightbox>> {
        self.lightbox.borrow().clone()
    }

    pub fn contact_form(&self) -> Option<Rc<ContactForm>> {
        self.contact.borrow().clone()
    }

    pub fn show_notification(&self, message: &str, severity: Severity) {
        self.notifications.show(message, severity);
    }

    pub fn open_video(&self, src: &str) {
        let fallback = self.language.messages().video_unsupported;
        dom::report(
            "Open video",
            video::open_in_new_tab(&self.window, src, fallback),
        );
    }

    pub fn dispatch(&self, action: Action) {
        log::debug!("Action {:?}", action);
        match action {
            Action::OpenService(id) => self.service_modal.open(&id),
            Action::CloseServiceModal => self.service_modal.close(),
            Action::OpenVideoModal(src) => self.video_modal.open(&src),
            Action::CloseVideoModal => self.video_modal.close(),
            Action::OpenVideo(src) => self.open_video(&src),
            Action::FilterPortfolio(category) => self.filter.filter(&category),
            Action::OpenLightbox(index) => self.with_lightbox(|lightbox| lightbox.open(index)),
            Action::CloseLightbox => self.with_lightbox(|lightbox| lightbox.close()),
            Action::NextImage => self.with_lightbox(|lightbox| lightbox.next()),
            Action::PreviousImage => self.with_lightbox(|lightbox| lightbox.previous()),
            Action::SwitchLanguage(code) => self.language.switch_language(&code),
        }
    }

    fn with_lightbox(&self, f: impl FnOnce(&Lightbox)) {
        match self.lightbox() {
            Some(lightbox) => f(&lightbox),
            None => log::debug!("Lightbox not initialized"),
        }
    }
}

thread_local! {
    static SITE: RefCell<Option<Rc<Site>>> = const { RefCell::new(None) };
}

/// Markers of a YasArts page. Documents without either (test harnesses,
/// embeds) are left alone.
pub const PAGE_MARKERS: &str = "#site-config, .navbar";

pub fn is_site_page(document: &Document) -> bool {
    matches!(document.query_selector(PAGE_MARKERS), Ok(Some(_)))
}

fn boot(window: Window, document: Document, config: SiteConfig) {
    if !is_site_page(&document) {
        log::debug!("No {} found, site behaviour not started", PAGE_MARKERS);
        return;
    }
    let site = Site::new(window, document, config);
    site.start();
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = dom::window().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let document = dom::document().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let config = SiteConfig::load(&document);
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let pending = RefCell::new(Some((window, config)));
        dom::listen(&document, "DOMContentLoaded", move |_| {
            if let Some((window, config)) = pending.borrow_mut().take() {
                boot(window, doc.clone(), config);
            }
        })
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    } else {
        boot(window, document, config);
    }
    Ok(())
}

/// Runs `f` against the booted site; calls before boot are dropped.
fn with_site(f: impl FnOnce(&Site)) {
    let site = SITE.with(|slot| slot.borrow().clone());
    match site {
        Some(site) => f(&site),
        None => log::warn!("Site not started yet"),
    }
}

// Entry points for inline handlers in existing markup.

#[wasm_bindgen(js_name = switchLanguage)]
pub fn switch_language(code: &str) {
    with_site(|site| site.language.switch_language(code));
}

#[wasm_bindgen(js_name = openServiceModal)]
pub fn open_service_modal(service_id: &str) {
    with_site(|site| site.service_modal.open(service_id));
}

#[wasm_bindgen(js_name = closeServiceModal)]
pub fn close_service_modal() {
    with_site(|site| site.service_modal.close());
}

#[wasm_bindgen(js_name = openVideoModal)]
pub fn open_video_modal(src: &str) {
    with_site(|site| site.video_modal.open(src));
}

#[wasm_bindgen(js_name = closeVideoModal)]
pub fn close_video_modal() {
    with_site(|site| site.video_modal.close());
}

#[wasm_bindgen(js_name = openVideo)]
pub fn open_video(src: &str) {
    with_site(|site| site.open_video(src));
}

#[wasm_bindgen(js_name = openLightbox)]
pub fn open_lightbox(index: usize) {
    with_site(|site| site.dispatch(Action::OpenLightbox(index)));
}

#[wasm_bindgen(js_name = closeLightbox)]
pub fn close_lightbox() {
    with_site(|site| site.dispatch(Action::CloseLightbox));
}

#[wasm_bindgen(js_name = nextImage)]
pub fn next_image() {
    with_site(|site| site.dispatch(Action::NextImage));
}

#[wasm_bindgen(js_name = previousImage)]
pub fn previous_image() {
    with_site(|site| site.dispatch(Action::PreviousImage));
}

#[wasm_bindgen(js_name = filterPortfolio)]
pub fn filter_portfolio(category: &str) {
    with_site(|site| site.filter.filter(category));
}

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, severity: Option<String>) {
    let severity = match severity.as_deref() {
        Some("success") => Severity::Success,
        Some("error") => Severity::Error,
        _ => Severity::Info,
    };
    with_site(|site| site.show_notification(message, severity));
}
