use super::email::EmailAddress;

/// A client account resolved from an API key.
///
/// Accounts are built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub display_name: String,
    pub delivery_email: EmailAddress,
}
