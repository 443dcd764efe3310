use std::rc::Rc;

use web_sys::{Document, Event, HtmlElement, HtmlVideoElement, Window};

use crate::error::{SiteError, SiteResult};
use crate::utils::dom;

const MODAL_ID: &str = "videoModal";
const VIDEO_ID: &str = "modalVideo";

/// In-page overlay player.
pub struct VideoModal {
    document: Document,
}

impl VideoModal {
    pub fn new(document: Document) -> Rc<Self> {
        Rc::new(Self { document })
    }

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

    pub fn open(&self, src: &str) {
        let result = (|| -> SiteResult<()> {
            let modal: HtmlElement = dom::by_id(&self.document, MODAL_ID)?;
            let video: HtmlVideoElement = dom::by_id(&self.document, VIDEO_ID)?;
            video.set_src(src);
            dom::set_style(&modal, "display", "flex")
        })();
        dom::report("Open video modal", result);
    }

    /// Stops playback and drops the source so the browser stops buffering.
    pub fn close(&self) {
        let result = (|| -> SiteResult<()> {
            let video: HtmlVideoElement = dom::by_id(&self.document, VIDEO_ID)?;
            video.pause()?;
            video.remove_attribute("src")?;
            video.load();
            let modal: HtmlElement = dom::by_id(&self.document, MODAL_ID)?;
            dom::set_style(&modal, "display", "none")
        })();
        dom::report("Close video modal", result);
    }

    pub fn is_open(&self) -> bool {
        dom::find_by_id::<HtmlElement>(&self.document, MODAL_ID)
            .map(|modal| dom::style_value(&modal, "display") == "flex")
            .unwrap_or(false)
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Markup of the stand-alone player written into a new tab.
pub fn player_markup(src: &str, fallback: &str) -> String {
    format!(
        "<video controls autoplay style=\"width:100%; height:100%\">\
         <source src=\"{}\" type=\"video/mp4\">{}</video>",
        escape_attribute(src),
        fallback
    )
}

/// Opens `src` in a new tab with a bare player, independent of the modal.
pub fn open_in_new_tab(window: &Window, src: &str, fallback: &str) -> SiteResult<()> {
    let tab = window
        .open_with_url_and_target("", "_blank")?
        .ok_or_else(|| SiteError::Js("Popup was blocked".to_string()))?;
    let document = tab.document().ok_or(SiteError::NoDocument)?;
    let body = dom::body(&document)?;
    body.set_inner_html(&player_markup(src, fallback));
    Ok(())
}
