/// Default backend listen port
pub const DEFAULT_BACKEND_PORT: u16 = 3001;

/// Default frontend listen port
pub const DEFAULT_FRONTEND_PORT: u16 = 3000;

/// Upstream used by the frontend and the smoke test when BACKEND_URL is unset
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";

/// Default MySQL port
pub const DEFAULT_DB_PORT: u16 = 3306;

/// One logical connection shared by every request
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 1;

/// Pause between failed bootstrap attempts (seconds)
pub const DEFAULT_RETRY_BACKOFF_SECS: u64 = 5;

/// Smoke test polls the backend this many times before giving up
pub const DEFAULT_HARNESS_MAX_RETRIES: u32 = 30;

/// Pause between smoke test polls (seconds)
pub const DEFAULT_HARNESS_INTERVAL_SECS: u64 = 2;

/// Column width of `users.name` and `users.email`
pub const USER_FIELD_MAX_LEN: usize = 100;

// =============================================================================
// Error Messages
// =============================================================================

/// Returned by data-access handlers before bootstrap has finished
pub const ERR_NOT_READY: &str = "Database connection not initialized";

/// Frontend relay failure for GET /users
pub const ERR_FETCH_USERS: &str = "Failed to fetch users";

/// Frontend relay failure for POST /users
pub const ERR_CREATE_USER: &str = "Failed to create user";
