use crate::domain::model::{ContactField, ContactForm, Toast};
use crate::domain::ports::EmailRelay;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_email, validate_required};

/// Which of the two relay calls a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStep {
    OwnerNotification,
    AutoReply,
}

impl DeliveryStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStep::OwnerNotification => "owner notification",
            DeliveryStep::AutoReply => "auto-reply",
        }
    }
}

/// Relay templates used for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactTemplates {
    pub owner_template_id: String,
    pub auto_reply_template_id: String,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Both emails accepted; the form was cleared.
    Sent,
    /// A relay call failed; the form is untouched.
    Failed { step: DeliveryStep, error: SiteError },
    /// Required-field check failed before anything was sent.
    Blocked { error: SiteError },
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }

    /// Blocked submissions surface through field validation, not a toast.
    pub fn toast(&self) -> Option<Toast> {
        match self {
            SubmitOutcome::Sent => Some(Toast::MESSAGE_SENT),
            SubmitOutcome::Failed { .. } => Some(Toast::MESSAGE_FAILED),
            SubmitOutcome::Blocked { .. } => None,
        }
    }
}

/// Same constraints the form's `required` and `type="email"` attributes enforce.
///
/// Text fields only need to be non-empty. The email value is trimmed first, as
/// a browser does for `type="email"` inputs, then shape-checked.
pub fn validate_form(form: &ContactForm) -> Result<()> {
    for field in [ContactField::Name, ContactField::Subject, ContactField::Message] {
        validate_required(field.as_str(), form.field(field))?;
    }
    let email = form.email.trim();
    validate_required(ContactField::Email.as_str(), email)?;
    validate_email(ContactField::Email.as_str(), email)
}

/// Template parameters as the relay receives them.
fn relay_params(form: &ContactForm) -> ContactForm {
    ContactForm {
        email: form.email.trim().to_string(),
        ..form.clone()
    }
}

pub struct ContactFlow<R: EmailRelay> {
    relay: R,
    templates: ContactTemplates,
}

impl<R: EmailRelay> ContactFlow<R> {
    pub fn new(relay: R, templates: ContactTemplates) -> Self {
        Self { relay, templates }
    }

    /// Notifies the owner, then auto-replies to the sender, one after the other.
    ///
    /// The form is cleared only when both calls succeed. There is no retry, and
    /// an owner notification that went out before a failed auto-reply is not
    /// compensated.
    pub async fn submit(&self, form: &mut ContactForm) -> SubmitOutcome {
        if let Err(error) = validate_form(form) {
            tracing::debug!("Contact submission blocked: {}", error);
            return SubmitOutcome::Blocked { error };
        }

        let params = relay_params(form);
        match self.deliver(&params).await {
            Ok(()) => {
                tracing::info!("📨 Contact message from {} delivered", form.email);
                form.clear();
                SubmitOutcome::Sent
            }
            Err((step, error)) => {
                tracing::error!("❌ Contact {} failed: {}", step.as_str(), error);
                if step == DeliveryStep::AutoReply {
                    tracing::warn!("Owner notification was already sent for {}", form.email);
                }
                SubmitOutcome::Failed { step, error }
            }
        }
    }

    async fn deliver(&self, form: &ContactForm) -> std::result::Result<(), (DeliveryStep, SiteError)> {
        tracing::debug!("Sending owner notification ({})", self.templates.owner_template_id);
        self.relay
            .send(&self.templates.owner_template_id, form)
            .await
            .map_err(|e| (DeliveryStep::OwnerNotification, e))?;

        tracing::debug!("Sending auto-reply ({})", self.templates.auto_reply_template_id);
        self.relay
            .send(&self.templates.auto_reply_template_id, form)
            .await
            .map_err(|e| (DeliveryStep::AutoReply, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockRelay {
        calls: Arc<Mutex<Vec<(String, ContactForm)>>>,
        fail_on: Option<String>,
    }

    impl MockRelay {
        fn failing_on(template_id: &str) -> Self {
            Self {
                fail_on: Some(template_id.to_string()),
                ..Self::default()
            }
        }

        async fn templates_called(&self) -> Vec<String> {
            self.calls.lock().await.iter().map(|(t, _)| t.clone()).collect()
        }
    }

    #[async_trait::async_trait]
    impl EmailRelay for MockRelay {
        async fn send(&self, template_id: &str, params: &ContactForm) -> Result<()> {
            self.calls
                .lock()
                .await
                .push((template_id.to_string(), params.clone()));
            if self.fail_on.as_deref() == Some(template_id) {
                return Err(SiteError::RelayRejected {
                    template_id: template_id.to_string(),
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            Ok(())
        }
    }

    fn templates() -> ContactTemplates {
        ContactTemplates {
            owner_template_id: "owner".to_string(),
            auto_reply_template_id: "reply".to_string(),
        }
    }

    fn filled_form() -> ContactForm {
        ContactForm::new("Ada", "ada@example.com", "Collab", "Let's make a game")
    }

    #[tokio::test]
    async fn test_success_sends_both_in_order_and_clears() {
        let relay = MockRelay::default();
        let flow = ContactFlow::new(relay.clone(), templates());
        let mut form = filled_form();

        let outcome = flow.submit(&mut form).await;

        assert!(outcome.is_sent());
        assert_eq!(outcome.toast(), Some(Toast::MESSAGE_SENT));
        assert!(form.is_empty());
        assert_eq!(relay.templates_called().await, vec!["owner", "reply"]);

        let calls = relay.calls.lock().await;
        assert!(calls.iter().all(|(_, params)| *params == filled_form()));
    }

    #[tokio::test]
    async fn test_owner_failure_skips_auto_reply_and_keeps_fields() {
        let relay = MockRelay::failing_on("owner");
        let flow = ContactFlow::new(relay.clone(), templates());
        let mut form = filled_form();

        let outcome = flow.submit(&mut form).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed { step: DeliveryStep::OwnerNotification, .. }
        ));
        assert_eq!(outcome.toast(), Some(Toast::MESSAGE_FAILED));
        assert_eq!(form, filled_form());
        assert_eq!(relay.templates_called().await, vec!["owner"]);
    }

    #[tokio::test]
    async fn test_auto_reply_failure_is_generic_failure() {
        let relay = MockRelay::failing_on("reply");
        let flow = ContactFlow::new(relay.clone(), templates());
        let mut form = filled_form();

        let outcome = flow.submit(&mut form).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed { step: DeliveryStep::AutoReply, .. }
        ));
        assert_eq!(outcome.toast(), Some(Toast::MESSAGE_FAILED));
        assert_eq!(form, filled_form());
        assert_eq!(relay.templates_called().await, vec!["owner", "reply"]);
    }

    #[tokio::test]
    async fn test_blank_field_never_reaches_relay() {
        for field in ContactField::ALL {
            let relay = MockRelay::default();
            let flow = ContactFlow::new(relay.clone(), templates());
            let mut form = filled_form();
            form.set_field(field, "");
            let before = form.clone();

            let outcome = flow.submit(&mut form).await;

            assert!(matches!(outcome, SubmitOutcome::Blocked { .. }));
            assert_eq!(outcome.toast(), None);
            assert_eq!(form, before);
            assert!(relay.templates_called().await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_whitespace_subject_is_sent_with_trimmed_email() {
        let relay = MockRelay::default();
        let flow = ContactFlow::new(relay.clone(), templates());
        let mut form = ContactForm::new("Ada", "  ada@example.com ", "   ", "hi");

        let outcome = flow.submit(&mut form).await;

        assert!(outcome.is_sent());
        assert!(form.is_empty());
        let calls = relay.calls.lock().await;
        assert_eq!(calls.len(), 2);
        assert!(calls
            .iter()
            .all(|(_, params)| params.email == "ada@example.com" && params.subject == "   "));
    }

    #[tokio::test]
    async fn test_whitespace_only_email_is_missing() {
        let relay = MockRelay::default();
        let flow = ContactFlow::new(relay.clone(), templates());
        let mut form = filled_form();
        form.email = "   ".to_string();

        let outcome = flow.submit(&mut form).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Blocked { error: SiteError::MissingField { ref field } } if field == "email"
        ));
        assert!(relay.templates_called().await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_email_is_blocked() {
        let relay = MockRelay::default();
        let flow = ContactFlow::new(relay.clone(), templates());
        let mut form = filled_form();
        form.email = "not-an-email".to_string();

        let outcome = flow.submit(&mut form).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Blocked { error: SiteError::ValidationError { .. } }
        ));
        assert!(relay.templates_called().await.is_empty());
    }
}
