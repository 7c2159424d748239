//! End-to-end smoke test against a running backend.

use anyhow::{bail, Context};
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::HarnessConfig;
use crate::models::User;

pub struct Harness {
    client: reqwest::Client,
    backend_url: String,
    max_retries: u32,
    interval: Duration,
}

impl Harness {
    pub fn new(backend_url: impl Into<String>, max_retries: u32, interval: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
            max_retries,
            interval,
        }
    }

    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(
            config.backend_url.clone(),
            config.max_retries,
            Duration::from_secs(config.interval_secs),
        )
    }

    fn users_url(&self) -> String {
        format!("{}/api/users", self.backend_url)
    }

    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        let users = self
            .client
            .get(self.users_url())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(users)
    }

    /// Poll the list endpoint until it answers 2xx, sleeping between failures
    pub async fn wait_for_backend(&self) -> anyhow::Result<()> {
        for attempt in 1..=self.max_retries {
            match self.list_users().await {
                Ok(_) => {
                    tracing::info!("Backend is ready");
                    return Ok(());
                }
                Err(e) => {
                    tracing::info!(
                        "Waiting for backend... ({}/{}): {}",
                        attempt,
                        self.max_retries,
                        e
                    );
                    tokio::time::sleep(self.interval).await;
                }
            }
        }

        bail!("Backend not ready after {} attempts", self.max_retries)
    }

    /// Wait for the backend, then list, create and list again
    pub async fn run(&self) -> anyhow::Result<()> {
        tracing::info!("Starting API tests...");
        self.wait_for_backend().await?;

        tracing::info!("Test 1: GET /api/users");
        self.list_users().await.context("GET users failed")?;

        tracing::info!("Test 2: POST /api/users");
        let created: Value = self
            .client
            .post(self.users_url())
            .json(&json!({ "name": "Test User", "email": "test@example.com" }))
            .send()
            .await?
            .error_for_status()
            .context("POST user failed")?
            .json()
            .await?;
        tracing::info!("Created user {}", created);

        tracing::info!("Test 3: Verify user creation");
        let users = self.list_users().await.context("GET users failed")?;
        if users.is_empty() {
            bail!("User not found after creation");
        }

        tracing::info!("All tests passed!");
        Ok(())
    }
}
