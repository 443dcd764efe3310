use super::content;
use crate::i18n::locale::Locale;

/// Photography packages with a details dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceId {
    Wedding,
    Fashion,
    Corporate,
}

impl ServiceId {
    pub const ALL: [ServiceId; 3] = [ServiceId::Wedding, ServiceId::Fashion, ServiceId::Corporate];

    pub fn id(self) -> &'static str {
        match self {
            ServiceId::Wedding => "wedding",
            ServiceId::Fashion => "fashion",
            ServiceId::Corporate => "corporate",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.id() == id)
    }

    pub fn title(self, locale: Locale) -> &'static str {
        content::title(self, locale)
    }

    /// HTML fragment shown in the service dialog.
    pub fn details_html(self, locale: Locale) -> &'static str {
        content::details(self, locale)
    }
}
