use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::configuration::EmailClientSettings;
use crate::domain::contact::models::email::OutgoingEmail;
use crate::domain::contact::ports::MessageSender;

/// HTTP mail API client.
///
/// `username` doubles as the authenticated outbound mailbox: the `From`
/// value of every delivery is the message's display name composed with it.
#[derive(Debug, Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    username: String,
    password: Secret<String>,
}

impl EmailClient {
    /// Returns `None` when the transport is not fully configured, i.e. any
    /// of base URL, username or password is absent.
    pub fn from_settings(configuration: &EmailClientSettings) -> Option<Self> {
        let base_url = configuration.base_url.clone()?;
        let username = configuration.username.clone()?;
        let password = configuration.password.clone()?;

        let http_client = Client::builder()
            .timeout(configuration.timeout())
            .build()
            .expect("Failed to build the email http client");

        Some(Self {
            http_client,
            base_url,
            username,
            password,
        })
    }
}

#[async_trait]
impl MessageSender for EmailClient {
    #[tracing::instrument(name = "Deliver an email through the mail API", skip(self, email))]
    async fn send(&self, email: &OutgoingEmail) -> Result<(), anyhow::Error> {
        let url = format!("{}/email", self.base_url);
        let from = format!("\"{}\" <{}>", email.from_name, self.username);
        let request_body = SendEmailRequest {
            from: &from,
            to: email.to.as_ref(),
            subject: &email.subject,
            html_body: &email.html_body,
            text_body: &email.text_body,
        };

        self.http_client
            .post(&url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .json(&request_body)
            .send()
            .await
            .map_err(anyhow::Error::from)?
            .error_for_status()
            .map_err(anyhow::Error::from)?;

        Ok(())
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}
