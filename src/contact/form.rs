use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, FormData, HtmlButtonElement, HtmlFormElement};

use super::transport::InquiryTransport;
use super::validation::{ContactSubmission, ValidationError};
use crate::error::SiteResult;
use crate::i18n::switcher::LanguageSwitcher;
use crate::ui::notification::{NotificationCenter, Severity};
use crate::utils::dom;

pub const FORM_ID: &str = "contactForm";

pub struct ContactForm {
    form: HtmlFormElement,
    language: Rc<LanguageSwitcher>,
    notifications: Rc<NotificationCenter>,
    transport: Rc<dyn InquiryTransport>,
}

impl ContactForm {
    /// Binds `#contactForm` if the page has one.
    pub fn init(
        document: &Document,
        language: Rc<LanguageSwitcher>,
        notifications: Rc<NotificationCenter>,
        transport: Rc<dyn InquiryTransport>,
    ) -> SiteResult<Option<Rc<Self>>> {
        let Some(form) = dom::find_by_id::<HtmlFormElement>(document, FORM_ID) else {
            log::debug!("No contact form on this page");
            return Ok(None);
        };
        let handler = Rc::new(Self {
            form: form.clone(),
            language,
            notifications,
            transport,
        });
        let on_submit = Rc::clone(&handler);
        dom::listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            match on_submit.read_fields() {
                Ok(submission) => {
                    on_submit.submit(submission);
                }
                Err(e) => log::error!("Failed to read contact form: {}", e),
            }
        })?;
        Ok(Some(handler))
    }

    fn read_fields(&self) -> SiteResult<ContactSubmission> {
        let data = FormData::new_with_form(&self.form)?;
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        Ok(ContactSubmission {
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            service: field("service"),
            message: field("message"),
        })
    }

    /// Validates and, when valid, starts the asynchronous send. Returns whether
    /// the send was started.
    pub fn submit(self: &Rc<Self>, submission: ContactSubmission) -> bool {
        let messages = self.language.messages();
        let inquiry = match submission.validate() {
            Ok(inquiry) => inquiry,
            Err(e) => {
                log::debug!("Contact form rejected: {}", e);
                let text = match e {
                    ValidationError::MissingField(_) => messages.missing_fields,
                    ValidationError::InvalidEmail => messages.invalid_email,
                };
                self.notifications.show(text, Severity::Error);
                return false;
            }
        };

        let button = self.submit_button();
        let original_label = button.as_ref().map(|b| b.inner_html());
        if let Some(button) = &button {
            button.set_inner_html(&format!(
                "<i class=\"fas fa-spinner fa-spin\"></i> {}",
                messages.sending
            ));
            button.set_disabled(true);
        }

        let this = Rc::clone(self);
        let exchange = self.transport.send(inquiry);
        spawn_local(async move {
            let outcome = exchange.await;
            // Texts follow the language active when the reply arrives.
            let messages = this.language.messages();
            match outcome {
                Ok(()) => {
                    log::info!("Inquiry sent");
                    this.notifications.show(messages.sent, Severity::Success);
                    this.form.reset();
                }
                Err(e) => {
                    log::error!("Inquiry failed: {}", e);
                    this.notifications.show(messages.send_failed, Severity::Error);
                }
            }
            if let (Some(button), Some(label)) = (button, original_label) {
                button.set_inner_html(&label);
                button.set_disabled(false);
            }
        });
        true
    }

    fn submit_button(&self) -> Option<HtmlButtonElement> {
        dom::query_all_in::<HtmlButtonElement>(&self.form, "button[type=\"submit\"]")
            .ok()
            .and_then(|buttons| buttons.into_iter().next())
    }
}
