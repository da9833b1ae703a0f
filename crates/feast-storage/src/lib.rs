//! # feast-storage
//!
//! Storage abstraction layer for gorilla-feast using RocksDB.
//!
//! Keys and values are `bincode`-encoded. Each kind of record lives in its own
//! column family (see [`column_families`]).

#![warn(clippy::all)]

pub mod column_families;
pub mod errors;
pub mod rocksdb_impl;
pub mod traits;

pub use column_families::*;
pub use errors::{Result, StorageError};
pub use rocksdb_impl::RocksDbStorage;
pub use traits::Storage;
