pub const EMAIL_NOT_PROVIDED: &str = "Not provided";

/// Raw request body of `POST /submit`.
///
/// Every field defaults so that an absent JSON field deserializes to an
/// empty value instead of failing in the extractor; presence rules are
/// enforced by `Submission::parse`, which lets the handler answer with the
/// right status code for each missing piece.
#[derive(serde::Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionPayload {
    pub api_key: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub message: String,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Name, phone number, and message are required.")]
    MissingRequiredFields,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderName(String);

impl TryFrom<String> for SenderName {
    type Error = SubmissionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            Err(SubmissionError::MissingRequiredFields)
        } else {
            Ok(Self(value))
        }
    }
}

impl AsRef<str> for SenderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SenderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl TryFrom<String> for PhoneNumber {
    type Error = SubmissionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            Err(SubmissionError::MissingRequiredFields)
        } else {
            Ok(Self(value))
        }
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody(String);

impl TryFrom<String> for MessageBody {
    type Error = SubmissionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            Err(SubmissionError::MissingRequiredFields)
        } else {
            Ok(Self(value))
        }
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A submission whose required fields are known to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub sender_name: SenderName,
    pub phone: PhoneNumber,
    pub sender_email: Option<String>,
    pub message: MessageBody,
}

impl Submission {
    /// Validates the required fields of a payload.
    ///
    /// `name`, `phone` and `message` must be non-empty; an empty string
    /// counts as missing. `email` stays optional and unvalidated — an
    /// empty string is folded into "absent".
    pub fn parse(payload: SubmissionPayload) -> Result<Submission, SubmissionError> {
        let sender_name = SenderName::try_from(payload.name)?;
        let phone = PhoneNumber::try_from(payload.phone)?;
        let message = MessageBody::try_from(payload.message)?;
        let sender_email = payload.email.filter(|email| !email.is_empty());

        Ok(Submission {
            sender_name,
            phone,
            sender_email,
            message,
        })
    }

    pub fn sender_email_or_placeholder(&self) -> &str {
        self.sender_email.as_deref().unwrap_or(EMAIL_NOT_PROVIDED)
    }
}
