use std::rc::Rc;

use web_sys::{Document, Element};

use super::locale::Locale;
use super::messages::Messages;
use super::preference::LanguagePreference;
use crate::error::SiteResult;
use crate::utils::dom;

const LANGUAGE_BUTTONS: &str = ".lang-btn";

/// Owns the language preference and rewrites translated markup on change.
pub struct LanguageSwitcher {
    document: Document,
    preference: LanguagePreference,
}

impl LanguageSwitcher {
    pub fn new(document: Document, preference: LanguagePreference) -> Rc<Self> {
        Rc::new(Self {
            document,
            preference,
        })
    }

    /// Binds the toggle buttons and renders the persisted language once.
    pub fn init(self: &Rc<Self>) -> SiteResult<()> {
        for button in dom::query_all::<Element>(&self.document, LANGUAGE_BUTTONS)? {
            let Some(code) = button.get_attribute("data-lang") else {
                continue;
            };
            let switcher = Rc::clone(self);
            dom::listen(&button, "click", move |_| switcher.switch_language(&code))?;
        }
        let code = self.preference.code();
        log::info!("Initial language: {}", code);
        self.apply(&code)
    }

    pub fn current_code(&self) -> String {
        self.preference.code()
    }

    pub fn current_locale(&self) -> Option<Locale> {
        self.preference.locale()
    }

    pub fn messages(&self) -> Messages {
        Messages::for_locale(self.current_locale())
    }

    /// Selects `code`, persists it and rewrites the page.
    pub fn switch_language(&self, code: &str) {
        if let Err(e) = self.preference.select(code) {
            log::warn!("Language preference not persisted: {}", e);
        }
        dom::report("Language switch", self.apply(code));
    }

    fn apply(&self, code: &str) -> SiteResult<()> {
        for button in dom::query_all::<Element>(&self.document, LANGUAGE_BUTTONS)? {
            let active = button.get_attribute("data-lang").as_deref() == Some(code);
            button.class_list().toggle_with_force("active", active)?;
        }

        let Some(locale) = Locale::from_code(code) else {
            log::debug!("No translations for language code {:?}", code);
            return Ok(());
        };
        self.rewrite_text(locale)?;
        self.rewrite_placeholders(locale)
    }

    // Covers <option> elements too, since they carry the same attributes.
    fn rewrite_text(&self, locale: Locale) -> SiteResult<()> {
        let attribute = locale.text_attribute();
        let selector = format!("[{}]", attribute);
        for element in dom::query_all::<Element>(&self.document, &selector)? {
            if let Some(text) = element.get_attribute(attribute).filter(|t| !t.is_empty()) {
                element.set_text_content(Some(&text));
            }
        }
        Ok(())
    }

    fn rewrite_placeholders(&self, locale: Locale) -> SiteResult<()> {
        let attribute = locale.placeholder_attribute();
        let selector = format!("[{}]", attribute);
        for element in dom::query_all::<Element>(&self.document, &selector)? {
            if let Some(text) = element.get_attribute(attribute).filter(|t| !t.is_empty()) {
                element.set_attribute("placeholder", &text)?;
            }
        }
        Ok(())
    }
}
