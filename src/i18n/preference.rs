use std::cell::RefCell;
use std::collections::HashMap;

use web_sys::Storage;

use super::locale::Locale;
use crate::error::{SiteError, SiteResult};

/// Key/value persistence for the language preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> SiteResult<()>;
}

/// `window.localStorage`.
pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    pub fn open() -> SiteResult<Self> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(SiteError::StorageUnavailable),
        }
    }
}

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> SiteResult<()> {
        self.storage.set_item(key, value)?;
        Ok(())
    }
}

/// Non-persistent fallback, used when storage is blocked and in tests.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> SiteResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The currently selected language code and its persisted copy.
///
/// Codes are not restricted to [`Locale`]: an unknown code is stored as-is and
/// simply has no translations to show.
pub struct LanguagePreference {
    key: String,
    store: Box<dyn PreferenceStore>,
    current: RefCell<String>,
}

impl LanguagePreference {
    /// Reads the persisted code once, falling back to `default`.
    pub fn load(store: Box<dyn PreferenceStore>, key: &str, default: Locale) -> Self {
        let current = store
            .load(key)
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| default.code().to_string());
        Self {
            key: key.to_string(),
            store,
            current: RefCell::new(current),
        }
    }

    pub fn code(&self) -> String {
        self.current.borrow().clone()
    }

    pub fn locale(&self) -> Option<Locale> {
        Locale::from_code(&self.current.borrow())
    }

    /// Makes `code` current and persists it. The in-memory selection changes
    /// even if persisting fails.
    pub fn select(&self, code: &str) -> SiteResult<()> {
        *self.current.borrow_mut() = code.to_string();
        self.store.save(&self.key, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preference_with(stored: Option<&str>) -> LanguagePreference {
        let store = MemoryStore::default();
        if let Some(code) = stored {
            store.save("yasarts_language", code).unwrap();
        }
        LanguagePreference::load(Box::new(store), "yasarts_language", Locale::En)
    }

    #[test]
    fn defaults_when_nothing_is_stored() {
        let preference = preference_with(None);
        assert_eq!(preference.code(), "en");
        assert_eq!(preference.locale(), Some(Locale::En));
    }

    #[test]
    fn restores_stored_code() {
        let preference = preference_with(Some("it"));
        assert_eq!(preference.locale(), Some(Locale::It));
    }

    #[test]
    fn select_persists_the_code() {
        let preference = preference_with(None);
        preference.select("fr").unwrap();
        assert_eq!(preference.locale(), Some(Locale::Fr));
        assert_eq!(
            preference.store.load("yasarts_language").as_deref(),
            Some("fr")
        );
    }

    #[test]
    fn unknown_codes_are_kept_verbatim() {
        let preference = preference_with(None);
        preference.select("de").unwrap();
        assert_eq!(preference.code(), "de");
        assert_eq!(preference.locale(), None);
        assert_eq!(
            preference.store.load("yasarts_language").as_deref(),
            Some("de")
        );
    }
}
