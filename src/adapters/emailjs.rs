use crate::config::RelayConfig;
use crate::domain::model::ContactForm;
use crate::domain::ports::EmailRelay;
use crate::utils::error::{Result, SiteError};
use reqwest::Client;
use serde::Serialize;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com";
const SEND_PATH: &str = "/api/v1.0/email/send";

/// Full send URL for a relay endpoint, with or without a trailing slash.
pub fn send_url(endpoint: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), SEND_PATH)
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactForm,
}

/// EmailJS REST client. No timeout or retry: a hung call blocks the caller.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: Client,
    endpoint: String,
    service_id: String,
    public_key: String,
}

impl EmailJsRelay {
    pub fn new(endpoint: &str, service_id: &str, public_key: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            service_id: service_id.to_string(),
            public_key: public_key.to_string(),
        }
    }

    pub fn from_config(relay: &RelayConfig) -> Self {
        Self::new(&relay.endpoint, &relay.service_id, &relay.public_key)
    }

    pub fn send_url(&self) -> String {
        send_url(&self.endpoint)
    }
}

#[async_trait::async_trait]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, template_id: &str, params: &ContactForm) -> Result<()> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
        };

        tracing::debug!("POST {} (template {})", self.send_url(), template_id);
        let response = self.client.post(self.send_url()).json(&body).send().await?;
        let status = response.status();
        tracing::debug!("Relay response status: {}", status);

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SiteError::RelayRejected {
            template_id: template_id.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}
