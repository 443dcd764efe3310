use serde::{Deserialize, Serialize};
use std::fmt;

/// Display languages the site ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    It,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::It, Locale::Fr];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::It => "it",
            Locale::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Markup attribute holding an element's translated text.
    pub fn text_attribute(self) -> &'static str {
        match self {
            Locale::En => "data-en",
            Locale::It => "data-it",
            Locale::Fr => "data-fr",
        }
    }

    /// Markup attribute holding an input's translated placeholder.
    pub fn placeholder_attribute(self) -> &'static str {
        match self {
            Locale::En => "data-en-placeholder",
            Locale::It => "data-it-placeholder",
            Locale::Fr => "data-fr-placeholder",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
