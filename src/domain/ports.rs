use crate::domain::model::ContactForm;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Third-party transactional email service.
#[async_trait]
pub trait EmailRelay: Send + Sync {
    /// Sends one email rendered from `template_id` with the form as parameters.
    async fn send(&self, template_id: &str, params: &ContactForm) -> Result<()>;
}
