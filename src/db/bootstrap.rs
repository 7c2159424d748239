use std::time::Duration;

use super::{BootstrapState, Connector, Database};

/// Drive the bootstrap state machine until the database is ready
///
/// `Disconnected -> Connecting -> Ready`, falling back to `Disconnected` and
/// sleeping `backoff` after every failed attempt. Never gives up. Returns the
/// number of attempts it took.
pub async fn bootstrap<C>(connector: &C, db: &Database, backoff: Duration) -> u32
where
    C: Connector + ?Sized,
{
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        db.set_state(BootstrapState::Connecting);

        match connector.connect().await {
            Ok(store) => {
                if !db.install(store) {
                    tracing::warn!("Database handle was already installed");
                }
                tracing::info!(attempts, "Database connected and table created");
                return attempts;
            }
            Err(e) => {
                db.set_state(BootstrapState::Disconnected);
                tracing::error!(
                    attempt = attempts,
                    "Database connection failed: {}; retrying in {:?}",
                    e,
                    backoff
                );
                tokio::time::sleep(backoff).await;
            }
        }
    }
}
