//! Account records, outward views, and list queries.

use crate::errors::{AccountError, Result};
use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

pub use feast_crypto::current_timestamp;

/// Stored account, keyed by `acct`
///
/// Never leaves the service: handlers only see [`AccountSummary`] and
/// [`AccountDetail`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub acct: String,
    pub fullname: String,
    /// `{SSHA}` stored hash
    pub password_hash: String,
    pub created_at: u64,
    pub updated_at: u64,
}

/// Public listing view of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub acct: String,
    pub fullname: String,
}

impl From<&AccountRecord> for AccountSummary {
    fn from(record: &AccountRecord) -> Self {
        Self {
            acct: record.acct.clone(),
            fullname: record.fullname.clone(),
        }
    }
}

/// Detail view of an account, timestamps in RFC 3339
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDetail {
    pub acct: String,
    pub fullname: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&AccountRecord> for AccountDetail {
    fn from(record: &AccountRecord) -> Self {
        Self {
            acct: record.acct.clone(),
            fullname: record.fullname.clone(),
            created_at: rfc3339(record.created_at),
            updated_at: rfc3339(record.updated_at),
        }
    }
}

fn rfc3339(unix_seconds: u64) -> String {
    i64::try_from(unix_seconds)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}

/// Fields to change on an account; `None` leaves the field alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountUpdate {
    pub fullname: Option<String>,
    pub pwd: Option<String>,
}

impl AccountUpdate {
    pub fn is_empty(&self) -> bool {
        self.fullname.is_none() && self.pwd.is_none()
    }
}

/// Field a listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Acct,
    Fullname,
    CreatedAt,
    UpdatedAt,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Parsed `sortBy` parameter, `field.asc` or `field.desc`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    /// Compare two records under this sort order, ties broken by account id
    pub fn compare(&self, a: &AccountRecord, b: &AccountRecord) -> Ordering {
        let primary = match self.field {
            SortField::Acct => a.acct.cmp(&b.acct),
            SortField::Fullname => a.fullname.cmp(&b.fullname),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
        .then_with(|| a.acct.cmp(&b.acct));

        match self.order {
            SortOrder::Asc => primary,
            SortOrder::Desc => primary.reverse(),
        }
    }
}

impl FromStr for SortSpec {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| {
            AccountError::Validation(format!("SortBy parameter is invalid: {}", reason))
        };

        let (field, order) = s
            .split_once('.')
            .filter(|(_, order)| !order.contains('.'))
            .ok_or_else(|| invalid("unknown sortBy parameter, should be field.orderdirection"))?;

        let order = match order {
            "asc" => SortOrder::Asc,
            "desc" => SortOrder::Desc,
            _ => {
                return Err(invalid(
                    "unknown ordering in sortBy parameter, should be asc or desc",
                ))
            }
        };

        let field = match field {
            "acct" => SortField::Acct,
            "fullname" => SortField::Fullname,
            "created_at" => SortField::CreatedAt,
            "updated_at" => SortField::UpdatedAt,
            _ => return Err(invalid("unknown field in sortBy parameter")),
        };

        Ok(Self { field, order })
    }
}

/// Listing query: sort, then skip `offset`, then take `limit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub sort: SortSpec,
    /// `None` means unlimited
    pub limit: Option<usize>,
    /// `None` means start from the first record
    pub offset: Option<usize>,
}

impl ListQuery {
    /// Build a query from raw request parameters
    ///
    /// Absent or empty parameters take their defaults. `-1` for `limit` or
    /// `offset` means unlimited / no offset; anything below `-1` or not an
    /// integer is rejected.
    pub fn from_params(
        sort_by: Option<&str>,
        limit: Option<&str>,
        offset: Option<&str>,
    ) -> Result<Self> {
        let sort = match sort_by.filter(|s| !s.is_empty()) {
            Some(s) => s.parse()?,
            None => SortSpec::default(),
        };

        Ok(Self {
            sort,
            limit: parse_bound("limit", limit)?,
            offset: parse_bound("offset", offset)?,
        })
    }
}

fn parse_bound(name: &str, raw: Option<&str>) -> Result<Option<usize>> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match raw.parse::<i64>() {
        Ok(-1) => Ok(None),
        Ok(n) if n >= 0 => usize::try_from(n)
            .map(Some)
            .map_err(|_| AccountError::Validation(format!("{} parameter is invalid number", name))),
        _ => Err(AccountError::Validation(format!(
            "{} parameter is invalid number",
            name
        ))),
    }
}

/// Internal reason attached to a login-failure event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    AccountNotFound,
    PasswordIncorrect,
    MalformedHash,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::AccountNotFound => "account not found",
            FailureReason::PasswordIncorrect => "password incorrect",
            FailureReason::MalformedHash => "stored password hash is malformed",
        }
    }
}
