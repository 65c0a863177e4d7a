use async_trait::async_trait;

use super::{
    models::{account::Account, email::OutgoingEmail, submission::Submission},
    ports::{AccountDirectory, ContactService, MessageSender, RelayError},
};
use crate::domain::contact::models::submission::SubmissionPayload;

/// Relays a validated submission to the owning account's mailbox.
///
/// The directory and the sender are injected at construction; a relay with
/// no sender answers every otherwise-valid submission with
/// `RelayError::NotConfigured`.
#[derive(Debug)]
pub struct ContactRelay<D, M>
where
    D: AccountDirectory,
    M: MessageSender,
{
    directory: D,
    sender: Option<M>,
}

impl<D, M> ContactRelay<D, M>
where
    D: AccountDirectory,
    M: MessageSender,
{
    pub fn new(directory: D, sender: Option<M>) -> Self {
        Self { directory, sender }
    }
}

#[async_trait]
impl<D, M> ContactService for ContactRelay<D, M>
where
    D: AccountDirectory,
    M: MessageSender,
{
    #[tracing::instrument(name = "Relay a contact form submission", skip(self, payload))]
    async fn relay(&self, payload: SubmissionPayload) -> Result<(), RelayError> {
        if payload.api_key.is_empty() {
            return Err(RelayError::MissingApiKey);
        }

        let account = self
            .directory
            .lookup(&payload.api_key)
            .ok_or(RelayError::InvalidApiKey)?
            .clone();

        let submission = Submission::parse(payload)?;

        let sender = self.sender.as_ref().ok_or(RelayError::NotConfigured)?;

        let email = build_email(&account, &submission);
        sender.send(&email).await.map_err(|e| {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                delivery_email = %account.delivery_email,
                "Failed to deliver contact form submission"
            );
            RelayError::SendFailed(e)
        })?;

        Ok(())
    }
}

fn build_email(account: &Account, submission: &Submission) -> OutgoingEmail {
    let subject = format!("New contact message from {}", submission.sender_name);
    let text_body = format!(
        "New contact form submission\n\
        \n\
        Client: {}\n\
        Name: {}\n\
        Phone: {}\n\
        Email: {}\n\
        \n\
        Message:\n\
        {}\n",
        account.display_name,
        submission.sender_name,
        submission.phone.as_ref(),
        submission.sender_email_or_placeholder(),
        submission.message.as_ref(),
    );
    let html_body = format!(
        "<h3>New Contact Form Submission</h3>\
        <p><strong>Client:</strong> {}</p>\
        <p><strong>Name:</strong> {}</p>\
        <p><strong>Phone:</strong> {}</p>\
        <p><strong>Email:</strong> {}</p>\
        <p><strong>Message:</strong></p>\
        <p>{}</p>",
        account.display_name,
        submission.sender_name,
        submission.phone.as_ref(),
        submission.sender_email_or_placeholder(),
        submission.message.as_ref().replace('\n', "<br>"),
    );

    OutgoingEmail {
        from_name: format!("{} Contact Form", account.display_name),
        to: account.delivery_email.clone(),
        subject,
        text_body,
        html_body,
    }
}
