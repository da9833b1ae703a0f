//! Input validation for account fields.

use crate::errors::{AccountError, Result};
use feast_crypto::MIN_PASSWORD_LENGTH;
use regex::Regex;
use std::sync::LazyLock;

static ACCT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z_][a-z0-9_]{3,30})$").expect("account id pattern is valid")
});

static FULLNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][a-z]{0,40}\s{1,10}[A-Z][a-z]{0,49})$").expect("full name pattern is valid")
});

/// Account id: lowercase letters, digits and `_`, 4 to 31 chars, not
/// starting with a digit
pub fn validate_acct(acct: &str) -> Result<()> {
    if ACCT_PATTERN.is_match(acct) {
        Ok(())
    } else {
        Err(AccountError::Validation(
            "Acct is not valid username".to_string(),
        ))
    }
}

/// Full name: two capitalised words, e.g. "Jacky Yang"
pub fn validate_fullname(fullname: &str) -> Result<()> {
    if FULLNAME_PATTERN.is_match(fullname) {
        Ok(())
    } else {
        Err(AccountError::Validation(
            "Fullname does not follow pattern: \"Jacky Yang\"".to_string(),
        ))
    }
}

/// Password: at least eight characters
pub fn validate_password(pwd: &str) -> Result<()> {
    if pwd.chars().count() >= MIN_PASSWORD_LENGTH {
        Ok(())
    } else {
        Err(AccountError::Validation(format!(
            "Password length is less than {} characters",
            MIN_PASSWORD_LENGTH
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acct_rules() {
        for ok in ["alice", "_bob", "carol_99", "abcd", &"a".repeat(31)] {
            assert!(validate_acct(ok).is_ok(), "{ok} should be accepted");
        }
        for bad in ["abc", "Alice", "9lives", "with-dash", "", &"a".repeat(32)] {
            assert!(validate_acct(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_fullname_rules() {
        for ok in ["Jacky Yang", "A B", "Mary    Jane"] {
            assert!(validate_fullname(ok).is_ok(), "{ok} should be accepted");
        }
        for bad in ["jacky yang", "Jacky", "Jacky Yang Jr", "Jacky  yang", "JAcky Yang"] {
            assert!(validate_fullname(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("1234567").is_err());
        assert!(validate_password("").is_err());
    }
}
