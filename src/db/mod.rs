pub mod bootstrap;
pub mod mysql;
pub mod schema;

use async_trait::async_trait;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::error::{AppError, Result};
use crate::models::User;

pub use bootstrap::bootstrap;
pub use mysql::{MySqlConnector, MySqlUserStore};

/// Data access used by the user handlers
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every row in storage order
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Insert a row and return the id the storage layer assigned
    async fn create_user(&self, name: Option<String>, email: Option<String>) -> Result<i32>;
}

/// One bootstrap attempt: open the connection and ensure the schema exists
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn UserStore>>;
}

/// Position of the bootstrap state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    Disconnected,
    Connecting,
    Ready,
}

impl BootstrapState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BootstrapState::Disconnected => "disconnected",
            BootstrapState::Connecting => "connecting",
            BootstrapState::Ready => "ready",
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => BootstrapState::Connecting,
            2 => BootstrapState::Ready,
            _ => BootstrapState::Disconnected,
        }
    }
}

/// Shared storage handle (cheap to clone, one per process)
///
/// The store slot is filled exactly once by the bootstrap task. Handlers read
/// it through [`Database::store`], which fails with [`AppError::NotReady`]
/// until then.
#[derive(Clone)]
pub struct Database {
    store: Arc<OnceCell<Arc<dyn UserStore>>>,
    state: Arc<AtomicU8>,
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl Database {
    /// Handle in the `Disconnected` state with no store
    pub fn new() -> Self {
        Self {
            store: Arc::new(OnceCell::new()),
            state: Arc::new(AtomicU8::new(BootstrapState::Disconnected as u8)),
        }
    }

    /// Handle that is already `Ready` (tests, embedded use)
    pub fn ready(store: Arc<dyn UserStore>) -> Self {
        let db = Self::new();
        db.install(store);
        db
    }

    pub fn state(&self) -> BootstrapState {
        BootstrapState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn is_ready(&self) -> bool {
        self.state() == BootstrapState::Ready
    }

    /// The connected store, or `NotReady` before bootstrap completes
    pub fn store(&self) -> Result<&Arc<dyn UserStore>> {
        self.store.get().ok_or(AppError::NotReady)
    }

    pub(crate) fn set_state(&self, state: BootstrapState) {
        // Ready is terminal
        if self.is_ready() {
            return;
        }
        self.state.store(state as u8, Ordering::Release);
    }

    /// Publish the store; returns false if one was already installed
    pub(crate) fn install(&self, store: Arc<dyn UserStore>) -> bool {
        if self.store.set(store).is_err() {
            return false;
        }
        self.state.store(BootstrapState::Ready as u8, Ordering::Release);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyStore;

    #[async_trait]
    impl UserStore for EmptyStore {
        async fn list_users(&self) -> Result<Vec<User>> {
            Ok(Vec::new())
        }

        async fn create_user(&self, _name: Option<String>, _email: Option<String>) -> Result<i32> {
            Ok(1)
        }
    }

    struct FixedIdStore(i32);

    #[async_trait]
    impl UserStore for FixedIdStore {
        async fn list_users(&self) -> Result<Vec<User>> {
            Ok(Vec::new())
        }

        async fn create_user(&self, _name: Option<String>, _email: Option<String>) -> Result<i32> {
            Ok(self.0)
        }
    }

    #[tokio::test]
    async fn test_second_install_keeps_first_store() {
        let db = Database::new();
        assert!(db.install(Arc::new(FixedIdStore(1))));
        assert!(!db.install(Arc::new(FixedIdStore(2))));

        let id = db.store().unwrap().create_user(None, None).await.unwrap();
        assert_eq!(id, 1);
        assert_eq!(db.state(), BootstrapState::Ready);
    }

    #[test]
    fn test_new_database_is_not_ready() {
        let db = Database::new();
        assert_eq!(db.state(), BootstrapState::Disconnected);
        assert!(matches!(db.store(), Err(AppError::NotReady)));
    }

    #[test]
    fn test_install_happens_once() {
        let db = Database::new();
        assert!(db.install(Arc::new(EmptyStore)));
        assert!(!db.install(Arc::new(EmptyStore)));
        assert!(db.is_ready());
        assert!(db.store().is_ok());

        // Clones share the slot
        let clone = db.clone();
        assert!(clone.is_ready());

        // Ready never regresses
        db.set_state(BootstrapState::Connecting);
        assert_eq!(db.state(), BootstrapState::Ready);
    }
}
