//! Login: password verification, token issuance, failure reporting.

use crate::{errors::*, types::*};
use feast_crypto::verify_password;
use feast_events::{EventPublisher, LoginFailureEvent};
use feast_sessions::{SessionManager, SessionToken};
use feast_storage::{Storage, CF_ACCOUNTS};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::AccountService;

/// Checked when the account does not exist, so a miss costs the same as a
/// wrong password
const DUMMY_HASH: &str =
    "{SSHA}rp7ZrfBzntaYqOTuaf2wxotTlexiQ79dJffE6b885MxAWKXCx/dRkqYRLbN7gEH1lnYZFA==";

impl<S, M, E> AccountService<S, M, E>
where
    S: Storage + 'static,
    M: SessionManager + 'static,
    E: EventPublisher + 'static,
{
    pub(crate) async fn authenticate_internal(
        &self,
        acct: &str,
        pwd: &str,
    ) -> Result<SessionToken> {
        let record: Option<AccountRecord> = self.storage.get(CF_ACCOUNTS, &acct).await?;

        let Some(record) = record else {
            let _ = verify_password(pwd.as_bytes(), DUMMY_HASH);
            self.report_failure(acct, FailureReason::AccountNotFound);
            return Err(AccountError::AccountNotFound(acct.to_string()));
        };

        match verify_password(pwd.as_bytes(), &record.password_hash) {
            Ok(true) => {
                let token = self.sessions.issue_token(&record.acct, &record.fullname)?;
                info!(acct = %acct, "Login succeeded");
                Ok(token)
            }
            Ok(false) => {
                self.report_failure(acct, FailureReason::PasswordIncorrect);
                Err(AccountError::InvalidCredentials)
            }
            Err(e) => {
                warn!(acct = %acct, error = %e, "Stored password hash could not be checked");
                self.report_failure(acct, FailureReason::MalformedHash);
                Err(AccountError::InvalidCredentials)
            }
        }
    }

    /// Publish a failure event from a background task; the caller never
    /// waits and never sees a delivery error
    fn report_failure(&self, acct: &str, reason: FailureReason) {
        info!(acct = %acct, reason = reason.as_str(), "Login failed");

        let publisher = Arc::clone(&self.event_publisher);
        let event = LoginFailureEvent::new(acct, reason.as_str());

        tokio::spawn(async move {
            if let Err(e) = publisher.publish(event).await {
                debug!(error = %e, "Login failure event not delivered");
            }
        });
    }
}
