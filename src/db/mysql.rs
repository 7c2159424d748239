use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::sync::Arc;

use super::schema::{CREATE_USERS_TABLE, INSERT_USER, SELECT_USERS};
use super::{Connector, UserStore};
use crate::error::Result;
use crate::models::User;
use crate::Config;

/// Opens MySQL pools from the backend configuration
#[derive(Debug, Clone)]
pub struct MySqlConnector {
    options: MySqlConnectOptions,
    max_connections: u32,
}

impl MySqlConnector {
    pub fn new(options: MySqlConnectOptions, max_connections: u32) -> Self {
        Self {
            options,
            max_connections,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut options = MySqlConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .username(&config.db_user)
            .password(&config.db_password);
        if let Some(name) = &config.db_name {
            options = options.database(name);
        }
        Self::new(options, config.db_max_connections)
    }
}

#[async_trait]
impl Connector for MySqlConnector {
    async fn connect(&self) -> Result<Arc<dyn UserStore>> {
        tracing::info!("Connecting to database...");

        // Establishes the first connection before returning
        let pool = MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(self.options.clone())
            .await?;

        if let Err(e) = sqlx::query(CREATE_USERS_TABLE).execute(&pool).await {
            pool.close().await;
            return Err(e.into());
        }

        Ok(Arc::new(MySqlUserStore::new(pool)))
    }
}

/// `users` table access over a MySQL pool
#[derive(Debug, Clone)]
pub struct MySqlUserStore {
    pool: MySqlPool,
}

impl MySqlUserStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for MySqlUserStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(SELECT_USERS)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn create_user(&self, name: Option<String>, email: Option<String>) -> Result<i32> {
        let result = sqlx::query(INSERT_USER)
            .bind(name)
            .bind(email)
            .execute(&self.pool)
            .await?;

        let id = i32::try_from(result.last_insert_id())
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(id)
    }
}
