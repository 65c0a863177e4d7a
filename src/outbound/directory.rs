use std::collections::HashMap;

use crate::configuration::AccountSettings;
use crate::domain::contact::models::{
    account::Account,
    email::{EmailAddress, EmailError},
};
use crate::domain::contact::ports::AccountDirectory;

/// In-memory key→account table, populated once at startup.
///
/// Lookups are exact matches against the configured keys; there is no
/// normalization and no expiry.
#[derive(Debug, Clone)]
pub struct StaticDirectory {
    accounts: HashMap<String, Account>,
}

impl StaticDirectory {
    /// Builds the directory from static configuration.
    ///
    /// Delivery addresses are validated here so that a bad entry fails at
    /// startup instead of on the first matching request.
    pub fn from_settings(accounts: &[AccountSettings]) -> Result<Self, EmailError> {
        let accounts = accounts
            .iter()
            .map(|entry| {
                let delivery_email = EmailAddress::parse(entry.email.clone())?;
                Ok((
                    entry.api_key.clone(),
                    Account {
                        display_name: entry.name.clone(),
                        delivery_email,
                    },
                ))
            })
            .collect::<Result<HashMap<_, _>, EmailError>>()?;

        Ok(Self { accounts })
    }
}

impl AccountDirectory for StaticDirectory {
    fn lookup(&self, api_key: &str) -> Option<&Account> {
        self.accounts.get(api_key)
    }
}
