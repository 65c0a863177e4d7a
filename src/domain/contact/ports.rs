use async_trait::async_trait;

use super::models::{
    account::Account,
    email::OutgoingEmail,
    submission::{SubmissionError, SubmissionPayload},
};

/// Read-only mapping from API key to client account.
///
/// Lookup is an exact string match; an unknown key yields `None`, never an
/// error.
pub trait AccountDirectory: Send + Sync + 'static {
    fn lookup(&self, api_key: &str) -> Option<&Account>;
}

/// One best-effort delivery attempt for a rendered message.
#[async_trait]
pub trait MessageSender: Send + Sync + 'static {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), anyhow::Error>;
}

#[async_trait]
pub trait ContactService: Send + Sync + 'static {
    async fn relay(&self, payload: SubmissionPayload) -> Result<(), RelayError>;
}

#[derive(thiserror::Error, Debug)]
pub enum RelayError {
    #[error("API key is required.")]
    MissingApiKey,

    #[error("Invalid API key.")]
    InvalidApiKey,

    #[error("{0}")]
    Validation(#[from] SubmissionError),

    #[error("Email service is not configured.")]
    NotConfigured,

    #[error("Failed to send email.")]
    SendFailed(#[source] anyhow::Error),
}
