use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlElement};

use crate::config::NotificationConfig;
use crate::error::SiteResult;
use crate::utils::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Severity::Success => "#4CAF50",
            Severity::Error => "#f44336",
            Severity::Info => "#2196F3",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "fa-check-circle",
            Severity::Error => "fa-exclamation-circle",
            Severity::Info => "fa-info-circle",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    fn container_css(self) -> String {
        format!(
            "position: fixed; top: 100px; right: 20px; z-index: 3000; max-width: 400px; \
             background: {}; color: white; padding: 15px 20px; border-radius: 8px; \
             box-shadow: 0 10px 30px rgba(0,0,0,0.2); transform: translateX(100%); \
             transition: transform 0.3s ease;",
            self.background()
        )
    }
}

const CONTENT_CSS: &str = "display: flex; align-items: center; gap: 10px;";
const CLOSE_CSS: &str =
    "background: none; border: none; color: white; cursor: pointer; padding: 5px; margin-left: auto;";

/// The toast on screen together with everything that may still touch it.
/// Dropping it cancels the pending timers and releases the close handler.
struct Toast {
    id: u64,
    message: String,
    element: HtmlElement,
    _enter: Option<Timeout>,
    dismiss: Option<Timeout>,
    removal: Option<Timeout>,
    _on_close: Option<Closure<dyn FnMut(Event)>>,
}

/// Shows at most one toast at a time.
pub struct NotificationCenter {
    this: Weak<NotificationCenter>,
    document: Document,
    timing: NotificationConfig,
    active: RefCell<Option<Toast>>,
    next_id: Cell<u64>,
}

impl NotificationCenter {
    pub fn new(document: Document, timing: NotificationConfig) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            this: this.clone(),
            document,
            timing,
            active: RefCell::new(None),
            next_id: Cell::new(0),
        })
    }

    /// Replaces whatever toast is showing with a new one.
    pub fn show(&self, message: &str, severity: Severity) {
        self.clear();
        match self.build(message, severity) {
            Ok(toast) => *self.active.borrow_mut() = Some(toast),
            Err(e) => log::error!("Failed to show notification {:?}: {}", message, e),
        }
    }

    pub fn active_message(&self) -> Option<String> {
        self.active.borrow().as_ref().map(|toast| toast.message.clone())
    }

    /// Removes the current toast immediately, cancelling its timers.
    pub fn clear(&self) {
        let previous = self.active.borrow_mut().take();
        if let Some(toast) = previous {
            toast.element.remove();
        }
    }

    fn dismiss(&self, id: u64) {
        let is_current = matches!(self.active.borrow().as_ref(), Some(toast) if toast.id == id);
        if is_current {
            self.clear();
        }
    }

    fn slide_in(&self, id: u64) {
        if let Some(toast) = self.active.borrow().as_ref().filter(|t| t.id == id) {
            dom::report(
                "Notification enter",
                dom::set_style(&toast.element, "transform", "translateX(0)"),
            );
        }
    }

    fn begin_exit(&self, id: u64) {
        let mut active = self.active.borrow_mut();
        let Some(toast) = active.as_mut().filter(|t| t.id == id) else {
            return;
        };
        toast.dismiss = None;
        dom::report(
            "Notification exit",
            dom::set_style(&toast.element, "transform", "translateX(100%)"),
        );
        let this = self.this.clone();
        toast.removal = Some(Timeout::new(self.timing.exit_ms, move || {
            if let Some(center) = this.upgrade() {
                center.dismiss(id);
            }
        }));
    }

    fn build(&self, message: &str, severity: Severity) -> SiteResult<Toast> {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let element: HtmlElement = dom::create(&self.document, "div", &severity.class_name())?;
        element.style().set_css_text(&severity.container_css());

        let content: HtmlElement = dom::create(&self.document, "div", "notification-content")?;
        content.style().set_css_text(CONTENT_CSS);

        let icon: Element = dom::create(&self.document, "i", &format!("fas {}", severity.icon()))?;
        let text: Element = dom::create(&self.document, "span", "")?;
        text.set_text_content(Some(message));

        let close: HtmlButtonElement = dom::create(&self.document, "button", "notification-close")?;
        close.style().set_css_text(CLOSE_CSS);
        close.set_type("button");
        let close_icon: Element = dom::create(&self.document, "i", "fas fa-times")?;
        close.append_child(&close_icon)?;

        content.append_child(&icon)?;
        content.append_child(&text)?;
        content.append_child(&close)?;
        element.append_child(&content)?;
        dom::body(&self.document)?.append_child(&element)?;

        let on_close = {
            let this = self.this.clone();
            Closure::<dyn FnMut(Event)>::new(move |_| {
                if let Some(center) = this.upgrade() {
                    center.dismiss(id);
                }
            })
        };
        close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;

        let enter = {
            let this = self.this.clone();
            Timeout::new(self.timing.enter_delay_ms, move || {
                if let Some(center) = this.upgrade() {
                    center.slide_in(id);
                }
            })
        };
        let dismiss = {
            let this = self.this.clone();
            Timeout::new(self.timing.display_ms, move || {
                if let Some(center) = this.upgrade() {
                    center.begin_exit(id);
                }
            })
        };

        Ok(Toast {
            id,
            message: message.to_string(),
            element,
            _enter: Some(enter),
            dismiss: Some(dismiss),
            removal: None,
            _on_close: Some(on_close),
        })
    }
}
