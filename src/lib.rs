//! Client-side behaviour for the YasArts photography site, loaded as a
//! WebAssembly module by the static pages.
//!
//! The markup stays plain HTML; this crate attaches to it at boot
//! ([`site::start`]) and drives language switching, navigation effects, the
//! contact form, dialogs, the portfolio lightbox and lazy images.

pub mod actions;
pub mod config;
pub mod error;
pub mod site;

pub mod utils {
    pub mod dom;
}

pub mod i18n {
    pub mod locale;
    pub mod messages;
    pub mod preference;
    pub mod switcher;
}

pub mod ui {
    pub mod animate;
    pub mod navigation;
    pub mod notification;
    pub mod page;
}

pub mod contact {
    pub mod form;
    pub mod transport;
    pub mod validation;
}

pub mod services {
    pub mod catalog;
    mod content;
}

pub mod modals {
    pub mod service;
    pub mod video;
}

pub mod portfolio {
    pub mod filter;
    pub mod gallery;
    pub mod lazy_images;
    pub mod lightbox;
}

pub use config::SiteConfig;
pub use error::{SiteError, SiteResult};
pub use i18n::locale::Locale;
pub use site::Site;
