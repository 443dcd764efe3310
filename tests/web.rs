//! Browser tests: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, HtmlInputElement, HtmlVideoElement,
    KeyboardEvent, KeyboardEventInit,
};

use yasarts_site::config::{FadeInConfig, NavigationConfig, NotificationConfig};
use yasarts_site::contact::form::ContactForm;
use yasarts_site::contact::transport::{InquiryTransport, SubmitError};
use yasarts_site::contact::validation::{ContactSubmission, Inquiry};
use yasarts_site::i18n::messages::Messages;
use yasarts_site::i18n::preference::{LanguagePreference, MemoryStore};
use yasarts_site::i18n::switcher::LanguageSwitcher;
use yasarts_site::modals::service::ServiceModal;
use yasarts_site::modals::video::VideoModal;
use yasarts_site::portfolio::filter::PortfolioFilter;
use yasarts_site::portfolio::lazy_images;
use yasarts_site::portfolio::lightbox::Lightbox;
use yasarts_site::site;
use yasarts_site::ui::notification::{NotificationCenter, Severity};
use yasarts_site::ui::{animate, navigation};
use yasarts_site::utils::dom;
use yasarts_site::Locale;

wasm_bindgen_test_configure!(run_in_browser);

/// Markup mounted for one test and removed when dropped.
struct Fixture {
    root: Element,
}

impl Fixture {
    fn new(html: &str) -> Self {
        let document = document();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(html);
        document.body().unwrap().append_child(&root).unwrap();
        Self { root }
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn document() -> Document {
    dom::document().unwrap()
}

fn switcher() -> Rc<LanguageSwitcher> {
    let preference =
        LanguagePreference::load(Box::new(MemoryStore::default()), "test_language", Locale::En);
    LanguageSwitcher::new(document(), preference)
}

fn notifications() -> Rc<NotificationCenter> {
    NotificationCenter::new(document(), NotificationConfig::default())
}

fn text_of(id: &str) -> String {
    document()
        .get_element_by_id(id)
        .and_then(|e| e.text_content())
        .unwrap_or_default()
}

fn style_of(element: &Element, property: &str) -> String {
    dom::style_value(element.dyn_ref::<HtmlElement>().unwrap(), property)
}

fn press(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn language_round_trip_restores_text() {
    let _fixture = Fixture::new(
        r#"
        <h2 id="t-title" data-en="Our Services" data-it="I Nostri Servizi" data-fr="Nos Services">Our Services</h2>
        <select id="t-select">
            <option id="t-option" value="wedding" data-en="Wedding" data-it="Matrimonio" data-fr="Mariage">Wedding</option>
        </select>
        <input id="t-input" data-en-placeholder="Your name" data-it-placeholder="Il tuo nome" data-fr-placeholder="Votre nom">
        <p id="t-partial" data-en="Only English">Only English</p>
        "#,
    );
    let language = switcher();
    language.init().unwrap();

    let placeholder = || {
        document()
            .get_element_by_id("t-input")
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap()
            .placeholder()
    };
    let before = (text_of("t-title"), text_of("t-option"), placeholder());

    language.switch_language("it");
    assert_eq!(text_of("t-title"), "I Nostri Servizi");
    assert_eq!(text_of("t-option"), "Matrimonio");
    assert_eq!(placeholder(), "Il tuo nome");
    assert_eq!(text_of("t-partial"), "Only English");

    language.switch_language("fr");
    assert_eq!(text_of("t-title"), "Nos Services");

    language.switch_language("en");
    assert_eq!((text_of("t-title"), text_of("t-option"), placeholder()), before);
}

#[wasm_bindgen_test]
fn unknown_language_code_keeps_text() {
    let _fixture = Fixture::new(
        r#"<span id="t-hello" data-en="Hello" data-it="Ciao" data-fr="Bonjour">Hello</span>
           <button class="lang-btn" id="t-btn-en" data-lang="en">EN</button>"#,
    );
    let language = switcher();
    language.init().unwrap();
    language.switch_language("de");
    assert_eq!(language.current_code(), "de");
    assert_eq!(text_of("t-hello"), "Hello");
    let button = document().get_element_by_id("t-btn-en").unwrap();
    assert!(!button.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn language_buttons_follow_selection() {
    let _fixture = Fixture::new(
        r#"<button class="lang-btn" id="t-en" data-lang="en">EN</button>
           <button class="lang-btn" id="t-it" data-lang="it">IT</button>"#,
    );
    let language = switcher();
    language.init().unwrap();
    let is_active = |id: &str| {
        document()
            .get_element_by_id(id)
            .unwrap()
            .class_list()
            .contains("active")
    };
    assert!(is_active("t-en"));
    document()
        .get_element_by_id("t-it")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    assert!(is_active("t-it"));
    assert!(!is_active("t-en"));
    assert_eq!(language.current_locale(), Some(Locale::It));
}

#[wasm_bindgen_test]
fn second_notification_evicts_the_first() {
    let center = notifications();
    center.show("First", Severity::Info);
    center.show("Second", Severity::Success);

    let shown = dom::query_all::<Element>(&document(), ".notification").unwrap();
    assert_eq!(shown.len(), 1);
    assert!(shown[0].class_list().contains("notification-success"));
    assert_eq!(center.active_message().as_deref(), Some("Second"));

    center.clear();
    assert!(dom::query_all::<Element>(&document(), ".notification")
        .unwrap()
        .is_empty());
}

#[wasm_bindgen_test]
fn close_button_dismisses_immediately() {
    let center = notifications();
    center.show("Closable", Severity::Error);
    let close = dom::query::<HtmlElement>(&document(), ".notification-close")
        .unwrap()
        .unwrap();
    close.click();
    assert!(center.active_message().is_none());
    assert!(dom::query::<Element>(&document(), ".notification")
        .unwrap()
        .is_none());
}

#[wasm_bindgen_test]
async fn notification_removes_itself_after_display_window() {
    let center = NotificationCenter::new(
        document(),
        NotificationConfig {
            enter_delay_ms: 5,
            display_ms: 30,
            exit_ms: 10,
        },
    );
    center.show("Short lived", Severity::Info);
    TimeoutFuture::new(100).await;
    assert!(center.active_message().is_none());
    assert!(dom::query::<Element>(&document(), ".notification")
        .unwrap()
        .is_none());
}

#[wasm_bindgen_test]
async fn filter_hides_other_categories_and_all_restores() {
    let _fixture = Fixture::new(
        r#"
        <div class="portfolio-item" id="t-w1" data-category="wedding"></div>
        <div class="portfolio-item" id="t-f1" data-category="fashion"></div>
        <div class="portfolio-item" id="t-w2" data-category="wedding"></div>
        "#,
    );
    let filter = PortfolioFilter::new(document(), 20);
    let item = |id: &str| document().get_element_by_id(id).unwrap();

    filter.filter("wedding");
    TimeoutFuture::new(60).await;
    assert_eq!(style_of(&item("t-f1"), "display"), "none");
    assert_eq!(style_of(&item("t-w1"), "opacity"), "1");
    assert_eq!(style_of(&item("t-w2"), "display"), "block");

    filter.filter("all");
    TimeoutFuture::new(60).await;
    for id in ["t-w1", "t-f1", "t-w2"] {
        assert_eq!(style_of(&item(id), "display"), "block");
        assert_eq!(style_of(&item(id), "opacity"), "1");
    }
}

#[wasm_bindgen_test]
async fn refiltering_mid_transition_keeps_item_visible() {
    let _fixture = Fixture::new(
        r#"<div class="portfolio-item" id="t-c1" data-category="corporate"></div>"#,
    );
    let filter = PortfolioFilter::new(document(), 30);
    filter.filter("fashion");
    filter.filter("corporate");
    TimeoutFuture::new(80).await;
    let item = document().get_element_by_id("t-c1").unwrap();
    assert_eq!(style_of(&item, "display"), "block");
}

const SERVICE_MODAL: &str = r#"
<div id="serviceModal" style="display: none;">
    <div class="modal-body"><h2 id="modalTitle"></h2><div id="modalContent"></div></div>
</div>
"#;

#[wasm_bindgen_test]
fn unknown_service_leaves_modal_hidden() {
    let _fixture = Fixture::new(SERVICE_MODAL);
    let language = switcher();
    let modal = ServiceModal::new(document(), language);
    modal.open("underwater");
    assert!(!modal.is_open());
    assert_eq!(text_of("modalContent"), "");
}

#[wasm_bindgen_test]
fn service_modal_follows_current_language() {
    let _fixture = Fixture::new(SERVICE_MODAL);
    let language = switcher();
    let modal = ServiceModal::new(document(), Rc::clone(&language));

    language.switch_language("it");
    modal.open("wedding");
    assert!(modal.is_open());
    assert_eq!(text_of("modalTitle"), "Pacchetto Fotografia Matrimoniale");
    assert!(text_of("modalContent").contains("Cosa è Incluso"));
    let body = document().body().unwrap();
    assert_eq!(dom::style_value(&body, "overflow"), "hidden");

    modal.close();
    assert!(!modal.is_open());
    assert_eq!(dom::style_value(&body, "overflow"), "auto");
    language.switch_language("en");
}

#[wasm_bindgen_test]
fn closing_video_modal_clears_source() {
    let _fixture = Fixture::new(
        r#"<div id="videoModal" style="display: none;"><video id="modalVideo"></video></div>"#,
    );
    let modal = VideoModal::new(document());
    modal.open("videos/showreel.mp4");
    assert!(modal.is_open());
    let video = document()
        .get_element_by_id("modalVideo")
        .unwrap()
        .dyn_into::<HtmlVideoElement>()
        .unwrap();
    assert!(video.src().ends_with("videos/showreel.mp4"));

    modal.close();
    assert!(!modal.is_open());
    assert_eq!(video.get_attribute("src"), None);
    assert_eq!(video.src(), "");
}

const PORTFOLIO: &str = r#"
<div class="portfolio-item"><img src="images/a.jpg" alt="A">
    <div class="portfolio-info"><h3>Alba</h3><p>Sunrise wedding</p></div></div>
<div class="portfolio-item"><img data-src="images/b.jpg" alt="B">
    <div class="portfolio-info"><h3>Brera</h3><p>Street fashion</p></div></div>
<div class="portfolio-item"><img src="images/c.jpg" alt="C">
    <div class="portfolio-info"><h3>Como</h3><p>Lakeside gala</p></div></div>
"#;

#[wasm_bindgen_test]
fn lightbox_keyboard_navigation_wraps() {
    let _fixture = Fixture::new(PORTFOLIO);
    let lightbox = Lightbox::init(&document()).unwrap().unwrap();
    assert_eq!(lightbox.len(), 3);

    press("ArrowRight");
    assert!(!lightbox.is_open(), "keys are ignored while closed");

    lightbox.open(0);
    assert_eq!(text_of("lightboxTitle"), "Alba");
    press("ArrowLeft");
    assert_eq!(text_of("lightboxTitle"), "Como");
    press("ArrowRight");
    press("ArrowRight");
    assert_eq!(text_of("lightboxTitle"), "Brera");
    assert_eq!(
        lightbox.current().map(|image| image.src),
        Some("images/b.jpg".to_string())
    );

    press("Escape");
    assert!(!lightbox.is_open());
    let root = document().get_element_by_id("portfolioLightbox").unwrap();
    assert_eq!(style_of(&root, "display"), "none");
    root.remove();
}

#[wasm_bindgen_test]
fn thumbnail_click_opens_lightbox_at_its_index() {
    let _fixture = Fixture::new(PORTFOLIO);
    let lightbox = Lightbox::init(&document()).unwrap().unwrap();
    let items = dom::query_all::<HtmlElement>(&document(), ".portfolio-item").unwrap();
    items[2].click();
    assert!(lightbox.is_open());
    assert_eq!(text_of("lightboxDescription"), "Lakeside gala");
    lightbox.close();
    if let Some(root) = document().get_element_by_id("portfolioLightbox") {
        root.remove();
    }
}

#[wasm_bindgen_test]
fn lightbox_is_disabled_without_portfolio() {
    assert!(Lightbox::init(&document()).unwrap().is_none());
}

/// Records inquiries and answers with a fixed outcome.
struct RecordingTransport {
    sent: RefCell<Vec<Inquiry>>,
    outcome: Result<(), SubmitError>,
}

impl InquiryTransport for RecordingTransport {
    fn send(&self, inquiry: Inquiry) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        self.sent.borrow_mut().push(inquiry);
        future::ready(self.outcome.clone()).boxed_local()
    }
}

const CONTACT_FORM: &str = r#"
<form id="contactForm">
    <input name="name"><input name="email"><input name="phone">
    <select name="service"><option value="">-</option><option value="wedding">Wedding</option></select>
    <textarea name="message"></textarea>
    <button type="submit" id="t-submit">Send Inquiry</button>
</form>
"#;

fn valid_submission() -> ContactSubmission {
    ContactSubmission {
        name: "Luca".to_string(),
        email: "a@b.co".to_string(),
        phone: String::new(),
        service: "wedding".to_string(),
        message: "Portrait session in May?".to_string(),
    }
}

#[wasm_bindgen_test]
async fn incomplete_or_malformed_inquiries_never_succeed() {
    let _fixture = Fixture::new(CONTACT_FORM);
    let center = notifications();
    let transport = Rc::new(RecordingTransport {
        sent: RefCell::new(Vec::new()),
        outcome: Ok(()),
    });
    let form = ContactForm::init(&document(), switcher(), Rc::clone(&center), transport.clone())
        .unwrap()
        .unwrap();
    let messages = Messages::for_locale(Some(Locale::En));

    let mut missing = valid_submission();
    missing.message.clear();
    assert!(!form.submit(missing));
    assert_eq!(center.active_message().as_deref(), Some(messages.missing_fields));

    for email in ["lucaexample.com", "luca@example"] {
        let mut malformed = valid_submission();
        malformed.email = email.to_string();
        assert!(!form.submit(malformed));
        assert_eq!(center.active_message().as_deref(), Some(messages.invalid_email));
    }

    TimeoutFuture::new(10).await;
    assert!(transport.sent.borrow().is_empty());
    center.clear();
}

#[wasm_bindgen_test]
async fn valid_inquiry_reports_success_and_restores_button() {
    let _fixture = Fixture::new(CONTACT_FORM);
    let center = notifications();
    let transport = Rc::new(RecordingTransport {
        sent: RefCell::new(Vec::new()),
        outcome: Ok(()),
    });
    let form = ContactForm::init(&document(), switcher(), Rc::clone(&center), transport.clone())
        .unwrap()
        .unwrap();
    let button = document()
        .get_element_by_id("t-submit")
        .unwrap()
        .dyn_into::<web_sys::HtmlButtonElement>()
        .unwrap();

    assert!(form.submit(valid_submission()));
    assert!(button.disabled());
    assert!(button.inner_html().contains("fa-spinner"));

    TimeoutFuture::new(10).await;
    assert_eq!(transport.sent.borrow().len(), 1);
    assert_eq!(transport.sent.borrow()[0].email, "a@b.co");
    assert_eq!(
        center.active_message().as_deref(),
        Some(Messages::for_locale(Some(Locale::En)).sent)
    );
    assert!(!button.disabled());
    assert_eq!(button.inner_html(), "Send Inquiry");
    center.clear();
}

#[wasm_bindgen_test]
async fn failed_delivery_is_reported_as_error() {
    let failures = [
        SubmitError::Unreachable("offline".to_string()),
        SubmitError::Rejected("mailbox full".to_string()),
    ];
    for failure in failures {
        let _fixture = Fixture::new(CONTACT_FORM);
        let center = notifications();
        let transport = Rc::new(RecordingTransport {
            sent: RefCell::new(Vec::new()),
            outcome: Err(failure),
        });
        let form = ContactForm::init(&document(), switcher(), Rc::clone(&center), transport)
            .unwrap()
            .unwrap();

        assert!(form.submit(valid_submission()));
        TimeoutFuture::new(10).await;
        let shown = dom::query::<Element>(&document(), ".notification")
            .unwrap()
            .unwrap();
        assert!(shown.class_list().contains("notification-error"));
        assert_eq!(
            center.active_message().as_deref(),
            Some(Messages::for_locale(Some(Locale::En)).send_failed)
        );
        center.clear();
    }
}

#[wasm_bindgen_test]
fn reveal_swaps_deferred_source_once() {
    let _fixture = Fixture::new(
        r#"<img id="t-lazy" class="lazy thumb" data-src="images/x.jpg" alt="">"#,
    );
    let image = document()
        .get_element_by_id("t-lazy")
        .unwrap()
        .dyn_into::<HtmlImageElement>()
        .unwrap();

    lazy_images::reveal(&image).unwrap();
    assert!(image.src().ends_with("images/x.jpg"));
    assert!(!image.has_attribute(lazy_images::DEFERRED_SOURCE));
    assert!(!image.class_list().contains("lazy"));
    assert!(image.class_list().contains("thumb"));

    image.set_src("images/y.jpg");
    lazy_images::reveal(&image).unwrap();
    assert!(image.src().ends_with("images/y.jpg"));
    assert!(!image.has_attribute(lazy_images::DEFERRED_SOURCE));
}

#[wasm_bindgen_test]
async fn images_in_view_are_loaded_by_the_observer() {
    let _fixture = Fixture::new(
        r#"<img id="t-in-view" class="lazy" data-src="images/z.jpg" alt="" style="display:block; width:10px; height:10px;">"#,
    );
    let loaded = lazy_images::init(&dom::window().unwrap(), &document()).unwrap();
    assert!(loaded >= 1);

    TimeoutFuture::new(200).await;
    let image = document()
        .get_element_by_id("t-in-view")
        .unwrap()
        .dyn_into::<HtmlImageElement>()
        .unwrap();
    assert!(image.src().ends_with("images/z.jpg"));
    assert!(!image.has_attribute(lazy_images::DEFERRED_SOURCE));
    assert!(!image.class_list().contains("lazy"));
}

#[wasm_bindgen_test]
fn hamburger_toggles_menu_and_links_close_it() {
    let _fixture = Fixture::new(
        r##"
        <nav class="navbar">
            <div class="hamburger" id="t-hamburger"></div>
            <ul class="nav-menu" id="t-menu"><li><a id="t-link" href="#t-about">About</a></li></ul>
        </nav>
        <section id="t-about"></section>
        "##,
    );
    navigation::init(
        &dom::window().unwrap(),
        &document(),
        &NavigationConfig::default(),
    )
    .unwrap();

    let element = |id: &str| {
        document()
            .get_element_by_id(id)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
    };
    let is_active = |id: &str| element(id).class_list().contains("active");

    element("t-hamburger").click();
    assert!(is_active("t-hamburger"));
    assert!(is_active("t-menu"));

    element("t-hamburger").click();
    assert!(!is_active("t-hamburger"));
    assert!(!is_active("t-menu"));

    element("t-hamburger").click();
    element("t-link").click();
    assert!(!is_active("t-hamburger"));
    assert!(!is_active("t-menu"));
}

#[wasm_bindgen_test]
fn fade_in_targets_start_hidden() {
    let _fixture = Fixture::new(
        r#"
        <div class="service-card" id="t-card"></div>
        <div class="portfolio-item" id="t-item"></div>
        <div class="about-text" id="t-about-text"></div>
        <div class="plain" id="t-plain"></div>
        "#,
    );
    animate::init(&document(), &FadeInConfig::default()).unwrap();

    for id in ["t-card", "t-item", "t-about-text"] {
        let element = document().get_element_by_id(id).unwrap();
        assert_eq!(style_of(&element, "opacity"), "0", "{}", id);
        assert_eq!(style_of(&element, "transform"), "translateY(30px)", "{}", id);
        let transition = style_of(&element, "transition");
        assert!(transition.contains("opacity 0.6s"), "{}: {}", id, transition);
        assert!(transition.contains("transform 0.6s"), "{}: {}", id, transition);
    }
    let plain = document().get_element_by_id("t-plain").unwrap();
    assert_eq!(style_of(&plain, "opacity"), "");
}

#[wasm_bindgen_test]
fn only_site_pages_boot() {
    assert!(!site::is_site_page(&document()));
    let _fixture = Fixture::new(r#"<nav class="navbar"></nav>"#);
    assert!(site::is_site_page(&document()));
}
