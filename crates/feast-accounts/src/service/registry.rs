//! Account CRUD operations.

use crate::{errors::*, types::*, validation::*};
use feast_crypto::{hash_password, DEFAULT_SALT_SIZE};
use feast_events::EventPublisher;
use feast_sessions::SessionManager;
use feast_storage::{Storage, StorageError, CF_ACCOUNTS};
use tracing::info;

use super::AccountService;

impl<S, M, E> AccountService<S, M, E>
where
    S: Storage + 'static,
    M: SessionManager + 'static,
    E: EventPublisher + 'static,
{
    /// Validate and store a new account with a freshly salted hash
    pub(crate) async fn signup_internal(
        &self,
        acct: &str,
        fullname: &str,
        pwd: &str,
    ) -> Result<AccountSummary> {
        validate_acct(acct)?;
        validate_fullname(fullname)?;
        validate_password(pwd)?;

        let now = current_timestamp();
        let record = AccountRecord {
            acct: acct.to_string(),
            fullname: fullname.to_string(),
            password_hash: hash_password(pwd.as_bytes(), DEFAULT_SALT_SIZE)?,
            created_at: now,
            updated_at: now,
        };

        match self.storage.insert(CF_ACCOUNTS, &record.acct, &record).await {
            Ok(()) => {}
            Err(StorageError::AlreadyExists) => {
                return Err(AccountError::AlreadyExists(acct.to_string()))
            }
            Err(e) => return Err(e.into()),
        }

        info!(acct = %acct, "Account created");
        Ok(AccountSummary::from(&record))
    }

    pub(crate) async fn list_internal(&self, query: ListQuery) -> Result<Vec<AccountSummary>> {
        let mut records = self.all_records().await?;
        records.sort_by(|a, b| query.sort.compare(a, b));

        let summaries = records
            .iter()
            .skip(query.offset.unwrap_or(0))
            .take(query.limit.unwrap_or(usize::MAX))
            .map(AccountSummary::from)
            .collect();

        Ok(summaries)
    }

    pub(crate) async fn search_by_fullname_internal(
        &self,
        fullname: &str,
    ) -> Result<Vec<AccountSummary>> {
        validate_fullname(fullname)?;

        let mut matches: Vec<AccountRecord> = self
            .all_records()
            .await?
            .into_iter()
            .filter(|record| record.fullname == fullname)
            .collect();
        matches.sort_by(|a, b| a.acct.cmp(&b.acct));

        Ok(matches.iter().map(AccountSummary::from).collect())
    }

    pub(crate) async fn detail_internal(&self, acct: &str) -> Result<AccountDetail> {
        validate_acct(acct)?;
        let record = self.get_record(acct).await?;
        Ok(AccountDetail::from(&record))
    }

    /// Apply a partial update; a new password gets a new salt
    pub(crate) async fn update_internal(
        &self,
        acct: &str,
        update: AccountUpdate,
    ) -> Result<AccountDetail> {
        validate_acct(acct)?;
        if update.is_empty() {
            return Err(AccountError::Validation("Nothing to change".to_string()));
        }
        if let Some(fullname) = &update.fullname {
            validate_fullname(fullname)?;
        }
        if let Some(pwd) = &update.pwd {
            validate_password(pwd)?;
        }

        let password_changed = update.pwd.is_some();
        let password_hash = match &update.pwd {
            Some(pwd) => Some(hash_password(pwd.as_bytes(), DEFAULT_SALT_SIZE)?),
            None => None,
        };
        let fullname = update.fullname;
        let now = current_timestamp();

        let result = self
            .storage
            .update(CF_ACCOUNTS, &acct, move |record: &mut AccountRecord| {
                if let Some(fullname) = fullname {
                    record.fullname = fullname;
                }
                if let Some(password_hash) = password_hash {
                    record.password_hash = password_hash;
                }
                record.updated_at = now;
            })
            .await;

        let record = match result {
            Ok(record) => record,
            Err(StorageError::NotFound) => {
                return Err(AccountError::AccountNotFound(acct.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        info!(acct = %acct, password_changed, "Account updated");
        Ok(AccountDetail::from(&record))
    }

    pub(crate) async fn delete_internal(&self, requester: &str, acct: &str) -> Result<()> {
        if requester == acct {
            return Err(AccountError::SelfDeletion);
        }
        validate_acct(acct)?;

        if !self.storage.delete(CF_ACCOUNTS, &acct).await? {
            return Err(AccountError::AccountNotFound(acct.to_string()));
        }

        info!(acct = %acct, deleted_by = %requester, "Account deleted");
        Ok(())
    }

    pub(crate) async fn get_record(&self, acct: &str) -> Result<AccountRecord> {
        self.storage
            .get(CF_ACCOUNTS, &acct)
            .await?
            .ok_or_else(|| AccountError::AccountNotFound(acct.to_string()))
    }

    async fn all_records(&self) -> Result<Vec<AccountRecord>> {
        let rows: Vec<(Vec<u8>, AccountRecord)> = self.storage.scan_all(CF_ACCOUNTS).await?;
        Ok(rows.into_iter().map(|(_, record)| record).collect())
    }
}
