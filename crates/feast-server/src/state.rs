use anyhow::Result;
use feast_accounts::AccountService;
use feast_events::LoginFailureBus;
use feast_sessions::{SessionService, SigningKeyPair};
use feast_storage::RocksDbStorage;
use std::sync::Arc;

use crate::config::Config;

pub type AccountServiceImpl = AccountService<RocksDbStorage, SessionService, LoginFailureBus>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountServiceImpl>,
    pub session_service: Arc<SessionService>,
    pub login_failures: LoginFailureBus,
}

impl AppState {
    /// Open storage and load signing keys; any failure here is fatal
    pub fn new(config: &Config) -> Result<Self> {
        let storage = Arc::new(RocksDbStorage::open(&config.database_path)?);
        let keys = SigningKeyPair::from_pem_files(
            &config.jwt_private_key_path,
            &config.jwt_public_key_path,
        )?;

        Ok(Self::from_parts(storage, keys, config.event_bus_capacity))
    }

    pub fn from_parts(
        storage: Arc<RocksDbStorage>,
        keys: SigningKeyPair,
        event_bus_capacity: usize,
    ) -> Self {
        let session_service = Arc::new(SessionService::new(keys));
        let login_failures = LoginFailureBus::new(event_bus_capacity);

        let account_service = Arc::new(AccountService::new(
            storage,
            Arc::clone(&session_service),
            Arc::new(login_failures.clone()),
        ));

        AppState {
            account_service,
            session_service,
            login_failures,
        }
    }
}
