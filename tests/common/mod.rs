//! Shared helpers for the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use users_api::constants::USER_FIELD_MAX_LEN;
use users_api::db::{Connector, UserStore};
use users_api::models::User;
use users_api::{routes, AppState, Config, Database, Result};

/// In-memory `users` table with the same column constraints as MySQL
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<User>>,
}

fn storage_error(message: String) -> users_api::AppError {
    sqlx::Error::Protocol(message).into()
}

fn column(name: &str, value: Option<String>) -> Result<String> {
    let value = value.ok_or_else(|| storage_error(format!("Column '{}' cannot be null", name)))?;
    if value.chars().count() > USER_FIELD_MAX_LEN {
        return Err(storage_error(format!(
            "Data too long for column '{}' at row 1",
            name
        )));
    }
    Ok(value)
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create_user(&self, name: Option<String>, email: Option<String>) -> Result<i32> {
        let name = column("name", name)?;
        let email = column("email", email)?;

        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        rows.push(User { id, name, email });
        Ok(id)
    }
}

/// Connector whose storage stays unreachable until `bring_up` is called
#[derive(Default)]
pub struct GatedConnector {
    reachable: AtomicBool,
    pub store: Arc<MemoryStore>,
}

impl GatedConnector {
    pub fn bring_up(&self) {
        self.reachable.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl Connector for GatedConnector {
    async fn connect(&self) -> Result<Arc<dyn UserStore>> {
        if !self.reachable.load(Ordering::SeqCst) {
            return Err(storage_error("Connection refused (os error 111)".to_string()));
        }
        Ok(self.store.clone())
    }
}

/// Create a test configuration
pub fn test_config() -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0, // Random port
        db_host: "localhost".to_string(),
        db_port: 3306,
        db_user: "test".to_string(),
        db_password: "test".to_string(),
        db_name: Some("test".to_string()),
        db_max_connections: 1,
        retry_backoff_secs: 5,
    }
}

/// Backend router over a fresh in-memory table
pub fn ready_app() -> (axum::Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let db = Database::ready(store.clone());
    (routes::router(AppState::new(db, test_config())), store)
}

/// Serve the backend on an ephemeral port and return its base URL
pub async fn spawn_backend(db: Database) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = routes::router(AppState::new(db, test_config()));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on
pub async fn dead_backend_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
