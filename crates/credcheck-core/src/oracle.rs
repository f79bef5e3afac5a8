//! Credential oracles: the predicate under test.
//!
//! The harness only relies on [`CredentialOracle::login`]. How an oracle decides
//! is its own business; [`StaticOracle`] is a reference table used by the
//! built-in suite and by suite files that declare `accounts`.

use crate::errors::OracleError;
use crate::model::Credential;
use std::collections::BTreeMap;

/// Decides whether a username/password pair is accepted.
///
/// Implementations must be deterministic: the same pair always yields the same
/// answer. A rejected pair is `Ok(false)`; `Err` is reserved for an oracle that
/// failed to produce an answer at all.
pub trait CredentialOracle {
    fn login(&self, username: &str, password: &str) -> Result<bool, OracleError>;
}

impl<F> CredentialOracle for F
where
    F: Fn(&str, &str) -> bool,
{
    fn login(&self, username: &str, password: &str) -> Result<bool, OracleError> {
        Ok(self(username, password))
    }
}

pub const DEFAULT_USERNAME: &str = "username";
pub const DEFAULT_PASSWORD: &str = "password";

/// Fixed account table. Exact, case-sensitive match on both fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticOracle {
    accounts: BTreeMap<String, String>,
}

impl StaticOracle {
    pub fn new<I>(accounts: I) -> Self
    where
        I: IntoIterator<Item = Credential>,
    {
        Self {
            accounts: accounts
                .into_iter()
                .map(|c| (c.username, c.password))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for StaticOracle {
    fn default() -> Self {
        Self::new([Credential::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)])
    }
}

impl CredentialOracle for StaticOracle {
    fn login(&self, username: &str, password: &str) -> Result<bool, OracleError> {
        Ok(self
            .accounts
            .get(username)
            .is_some_and(|expected| expected == password))
    }
}
