use serde::Deserialize;
use web_sys::Document;

use crate::error::SiteError;
use crate::i18n::locale::Locale;

/// Id of the optional inline JSON block that overrides the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Every tunable constant of the behaviour layer.
///
/// Pages can override any subset of these through
/// `<script type="application/json" id="site-config">{ ... }</script>`;
/// missing keys keep their default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub storage_key: String,
    pub default_locale: Locale,
    pub log_level: String,
    pub navigation: NavigationConfig,
    pub fade_in: FadeInConfig,
    pub contact: ContactConfig,
    pub notification: NotificationConfig,
    pub portfolio: PortfolioConfig,
    pub critical_images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Scroll offset (px) past which the navbar gets the `scrolled` class.
    pub scroll_threshold: f64,
    /// Fixed header height subtracted from anchor targets.
    pub header_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FadeInConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
    pub offset_px: u32,
    pub duration_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Duration of the simulated submission round-trip.
    pub submit_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub enter_delay_ms: u32,
    pub display_ms: u32,
    pub exit_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub filter_transition_ms: u32,
    pub lazy_load_delay_ms: u32,
    pub lightbox_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "yasarts_language".to_string(),
            default_locale: Locale::En,
            log_level: "info".to_string(),
            navigation: NavigationConfig::default(),
            fade_in: FadeInConfig::default(),
            contact: ContactConfig::default(),
            notification: NotificationConfig::default(),
            portfolio: PortfolioConfig::default(),
            critical_images: vec![
                "images/fashion/1.jpg".to_string(),
                "images/fashion/2.jpg".to_string(),
            ],
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 100.0,
            header_offset: 80.0,
        }
    }
}

impl Default for FadeInConfig {
    fn default() -> Self {
        Self {
            selector: ".service-card, .portfolio-item, .about-text".to_string(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            offset_px: 30,
            duration_secs: 0.6,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { submit_delay_ms: 2_000 }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            display_ms: 5_000,
            exit_ms: 300,
        }
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            filter_transition_ms: 300,
            lazy_load_delay_ms: 100,
            lightbox_delay_ms: 500,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the inline config block, falling back to defaults when the block
    /// is absent or malformed.
    pub fn load(document: &Document) -> Self {
        let raw = match document.get_element_by_id(CONFIG_ELEMENT_ID) {
            Some(element) => element.text_content().unwrap_or_default(),
            None => return Self::default(),
        };
        if raw.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                gloo_console::warn!(format!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e));
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
