//! RocksDB column family definitions.

/// Account records: acct → AccountRecord
pub const CF_ACCOUNTS: &str = "accounts";

/// Get all column family names
pub fn all_column_families() -> Vec<&'static str> {
    vec![CF_ACCOUNTS]
}
