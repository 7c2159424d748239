/// Users table: auto-increment id, name and email both required, 100 chars max.
/// Idempotent, safe to run on every bootstrap attempt.
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    email VARCHAR(100) NOT NULL
)
"#;

/// Full scan, no ORDER BY: rows come back in storage order
pub const SELECT_USERS: &str = "SELECT * FROM users";

pub const INSERT_USER: &str = "INSERT INTO users (name, email) VALUES (?, ?)";
