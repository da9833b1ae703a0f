//! Test helpers and mocks for account service tests.

use crate::*;
use async_trait::async_trait;
use feast_events::{EventPublisher, LoginFailureEvent};
use feast_sessions::{SessionService, SigningKeyPair};
use feast_storage::{RocksDbStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

const SIGNING_PRIVATE: &[u8] =
    include_bytes!("../../../feast-sessions/tests/fixtures/signing_private.pem");
const SIGNING_PUBLIC: &[u8] =
    include_bytes!("../../../feast-sessions/tests/fixtures/signing_public.pem");

/// Publisher that remembers every event it is handed
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<LoginFailureEvent>>,
}

impl RecordingPublisher {
    pub fn events(&self) -> Vec<LoginFailureEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: LoginFailureEvent) -> feast_events::Result<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

pub type TestAccountService<E> = AccountService<RocksDbStorage, SessionService, E>;

/// Helper to create test session service
pub fn create_test_sessions() -> Arc<SessionService> {
    let keys = SigningKeyPair::from_pem(SIGNING_PRIVATE, SIGNING_PUBLIC).unwrap();
    Arc::new(SessionService::new(keys))
}

/// Helper to create an account service over a throwaway database
pub fn create_test_service<E: feast_events::EventPublisher + 'static>(
    publisher: Arc<E>,
) -> (TestAccountService<E>, Arc<RocksDbStorage>) {
    let storage = Arc::new(RocksDbStorage::open_test().unwrap());
    let service = AccountService::new(Arc::clone(&storage), create_test_sessions(), publisher);
    (service, storage)
}

/// Helper to create an account service with a recording publisher
pub fn create_recording_service() -> (
    TestAccountService<RecordingPublisher>,
    Arc<RecordingPublisher>,
    Arc<RocksDbStorage>,
) {
    let publisher = Arc::new(RecordingPublisher::default());
    let (service, storage) = create_test_service(Arc::clone(&publisher));
    (service, publisher, storage)
}

/// Storage that, once armed, has a concurrent delete of the touched key
/// land in the middle of the next read or update
pub struct InterleavedDeleteStorage {
    inner: RocksDbStorage,
    armed: AtomicBool,
}

impl InterleavedDeleteStorage {
    pub fn new() -> Self {
        Self {
            inner: RocksDbStorage::open_test().unwrap(),
            armed: AtomicBool::new(false),
        }
    }

    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    fn fire(&self) -> bool {
        self.armed.swap(false, Ordering::SeqCst)
    }
}

#[async_trait]
impl Storage for InterleavedDeleteStorage {
    async fn get<K, V>(&self, cf: &str, key: &K) -> feast_storage::Result<Option<V>>
    where
        K: Serialize + Send + Sync,
        V: DeserializeOwned,
    {
        let value = self.inner.get(cf, key).await?;
        if self.fire() {
            self.inner.delete(cf, key).await?;
        }
        Ok(value)
    }

    async fn put<K, V>(&self, cf: &str, key: &K, value: &V) -> feast_storage::Result<()>
    where
        K: Serialize + Send + Sync,
        V: Serialize + Send + Sync,
    {
        self.inner.put(cf, key, value).await
    }

    async fn insert<K, V>(&self, cf: &str, key: &K, value: &V) -> feast_storage::Result<()>
    where
        K: Serialize + Send + Sync,
        V: Serialize + Send + Sync,
    {
        self.inner.insert(cf, key, value).await
    }

    async fn update<K, V, F>(&self, cf: &str, key: &K, apply: F) -> feast_storage::Result<V>
    where
        K: Serialize + Send + Sync,
        V: Serialize + DeserializeOwned + Send,
        F: FnOnce(&mut V) + Send,
    {
        if self.fire() {
            self.inner.delete(cf, key).await?;
        }
        self.inner.update(cf, key, apply).await
    }

    async fn delete<K>(&self, cf: &str, key: &K) -> feast_storage::Result<bool>
    where
        K: Serialize + Send + Sync,
    {
        self.inner.delete(cf, key).await
    }

    async fn exists<K>(&self, cf: &str, key: &K) -> feast_storage::Result<bool>
    where
        K: Serialize + Send + Sync,
    {
        self.inner.exists(cf, key).await
    }

    async fn scan_all<V>(&self, cf: &str) -> feast_storage::Result<Vec<(Vec<u8>, V)>>
    where
        V: DeserializeOwned,
    {
        self.inner.scan_all(cf).await
    }
}

/// Let spawned publish tasks run
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
}
