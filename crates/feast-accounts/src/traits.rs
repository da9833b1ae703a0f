//! Trait definitions for the account service.

use crate::{errors::Result, types::*};
use async_trait::async_trait;
use feast_sessions::SessionToken;

/// Account registry and credential validator
#[async_trait]
pub trait Accounts: Send + Sync {
    /// Register a new account
    ///
    /// # Errors
    /// * `Validation` - id, full name or password fails the input rules
    /// * `AlreadyExists` - the id is taken
    async fn signup(&self, acct: &str, fullname: &str, pwd: &str) -> Result<AccountSummary>;

    /// List accounts, sorted then paginated
    async fn list(&self, query: ListQuery) -> Result<Vec<AccountSummary>>;

    /// All accounts whose full name matches exactly
    ///
    /// # Errors
    /// * `Validation` - the full name does not follow the pattern
    async fn search_by_fullname(&self, fullname: &str) -> Result<Vec<AccountSummary>>;

    /// Detail view of one account
    ///
    /// # Errors
    /// * `AccountNotFound` - no such account
    async fn detail(&self, acct: &str) -> Result<AccountDetail>;

    /// Change full name and/or password
    ///
    /// # Errors
    /// * `Validation` - nothing to change, or a field fails the input rules
    /// * `AccountNotFound` - no such account
    async fn update(&self, acct: &str, update: AccountUpdate) -> Result<AccountDetail>;

    /// Delete `acct` on behalf of `requester`
    ///
    /// # Errors
    /// * `SelfDeletion` - `requester` and `acct` are the same
    /// * `AccountNotFound` - no such account
    async fn delete(&self, requester: &str, acct: &str) -> Result<()>;

    /// Check a password and issue a session token
    ///
    /// Every failure is reported as a login-failure event in the background.
    ///
    /// # Errors
    /// * `AccountNotFound` - no such account
    /// * `InvalidCredentials` - wrong password or unusable stored hash
    async fn authenticate(&self, acct: &str, pwd: &str) -> Result<SessionToken>;
}
