use crate::core::links::whatsapp_link;
use crate::domain::model::{Collection, ContactForm, Notification};
use crate::domain::ports::{ContentSource, Notifier};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::is_email_shaped;
use std::sync::atomic::{AtomicBool, Ordering};

pub const DEFAULT_SUCCESS_MESSAGE: &str = "تم إرسال رسالتك بنجاح! سنتواصل معك في أقرب وقت";
pub const DEFAULT_FAILURE_MESSAGE: &str =
    "حدث خطأ أثناء إرسال الرسالة. يرجى المحاولة مرة أخرى أو التواصل معنا عبر واتساب";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionMessages {
    pub success: String,
    pub failure: String,
}

impl SubmissionMessages {
    /// Default toasts, with the failure one pointing at the WhatsApp chat.
    pub fn with_whatsapp(phone: &str) -> Self {
        Self {
            success: DEFAULT_SUCCESS_MESSAGE.to_string(),
            failure: format!("{}: {}", DEFAULT_FAILURE_MESSAGE, whatsapp_link(phone)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Sent,
    Failed,
    /// A previous submit is still in flight; the control was disabled.
    Busy,
}

/// Presence and email-shape checks, the same the browser enforces on the form.
pub fn validate_form(form: &ContactForm) -> Result<()> {
    for (field, value) in [
        ("name", &form.name),
        ("email", &form.email),
        ("message", &form.message),
    ] {
        if value.trim().is_empty() {
            return Err(SiteError::validation(field, "This field is required"));
        }
    }

    if !is_email_shaped(&form.email) {
        return Err(SiteError::validation(
            "email",
            "Expected an address like name@example.com",
        ));
    }

    Ok(())
}

pub struct SubmissionHandler<C: ContentSource, N: Notifier> {
    source: C,
    notifier: N,
    messages: SubmissionMessages,
    in_flight: AtomicBool,
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<C: ContentSource, N: Notifier> SubmissionHandler<C, N> {
    pub fn new(source: C, notifier: N, messages: SubmissionMessages) -> Self {
        Self {
            source,
            notifier,
            messages,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether the submit control is clickable.
    pub fn is_enabled(&self) -> bool {
        !self.in_flight.load(Ordering::Acquire)
    }

    /// One best-effort insert per call. Invalid input is returned as an error
    /// before anything is written; backend failures become a failure toast and
    /// leave the form untouched.
    pub async fn submit(&self, form: &mut ContactForm) -> Result<Submission> {
        validate_form(form)?;

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Submit ignored, a message is already being sent");
            return Ok(Submission::Busy);
        }
        let _guard = InFlight(&self.in_flight);

        let row = serde_json::to_value(form.to_row())?;
        match self.source.insert(Collection::ContactMessages, row).await {
            Ok(()) => {
                tracing::info!("Contact message stored");
                form.clear();
                self.notifier
                    .notify(Notification::success(self.messages.success.clone()));
                Ok(Submission::Sent)
            }
            Err(e) => {
                tracing::error!("Error sending contact message: {}", e);
                self.notifier
                    .notify(Notification::failure(self.messages.failure.clone()));
                Ok(Submission::Failed)
            }
        }
    }
}
