//! Account service implementation.

mod credentials;
mod registry;

use crate::{errors::*, traits::*, types::*};
use async_trait::async_trait;
use feast_events::EventPublisher;
use feast_sessions::{SessionManager, SessionToken};
use feast_storage::Storage;
use std::sync::Arc;

/// Account service over a storage backend, a token issuer and a
/// login-failure publisher
pub struct AccountService<S, M, E>
where
    S: Storage,
    M: SessionManager,
    E: EventPublisher,
{
    pub(crate) storage: Arc<S>,
    pub(crate) sessions: Arc<M>,
    pub(crate) event_publisher: Arc<E>,
}

impl<S, M, E> AccountService<S, M, E>
where
    S: Storage,
    M: SessionManager,
    E: EventPublisher,
{
    /// Create a new account service
    pub fn new(storage: Arc<S>, sessions: Arc<M>, event_publisher: Arc<E>) -> Self {
        Self {
            storage,
            sessions,
            event_publisher,
        }
    }
}

#[async_trait]
impl<S, M, E> Accounts for AccountService<S, M, E>
where
    S: Storage + 'static,
    M: SessionManager + 'static,
    E: EventPublisher + 'static,
{
    async fn signup(&self, acct: &str, fullname: &str, pwd: &str) -> Result<AccountSummary> {
        self.signup_internal(acct, fullname, pwd).await
    }

    async fn list(&self, query: ListQuery) -> Result<Vec<AccountSummary>> {
        self.list_internal(query).await
    }

    async fn search_by_fullname(&self, fullname: &str) -> Result<Vec<AccountSummary>> {
        self.search_by_fullname_internal(fullname).await
    }

    async fn detail(&self, acct: &str) -> Result<AccountDetail> {
        self.detail_internal(acct).await
    }

    async fn update(&self, acct: &str, update: AccountUpdate) -> Result<AccountDetail> {
        self.update_internal(acct, update).await
    }

    async fn delete(&self, requester: &str, acct: &str) -> Result<()> {
        self.delete_internal(requester, acct).await
    }

    async fn authenticate(&self, acct: &str, pwd: &str) -> Result<SessionToken> {
        self.authenticate_internal(acct, pwd).await
    }
}
