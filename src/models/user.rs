use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Assigned by the storage layer
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Body of POST /api/users
///
/// Fields are kept as raw JSON so whatever the caller sent reaches the storage
/// layer, which is the only place the NOT NULL and width constraints apply.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
}

/// Response of POST /api/users: the new id plus the input echoed verbatim
#[derive(Debug, Clone, Serialize)]
pub struct CreatedUser {
    pub id: i32,
    pub name: Option<Value>,
    pub email: Option<Value>,
}

impl NewUser {
    pub fn name_param(&self) -> Option<String> {
        bind_text(self.name.as_ref())
    }

    pub fn email_param(&self) -> Option<String> {
        bind_text(self.email.as_ref())
    }

    pub fn into_created(self, id: i32) -> CreatedUser {
        CreatedUser {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Text bound for a JSON field; `None` binds SQL NULL
pub fn bind_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bind_text() {
        assert_eq!(bind_text(Some(&json!("Ada"))), Some("Ada".to_string()));
        assert_eq!(bind_text(Some(&json!(42))), Some("42".to_string()));
        assert_eq!(bind_text(Some(&json!(true))), Some("true".to_string()));
        assert_eq!(bind_text(Some(&json!(["a"]))), Some("[\"a\"]".to_string()));
        assert_eq!(bind_text(Some(&Value::Null)), None);
        assert_eq!(bind_text(None), None);
    }

    #[test]
    fn test_missing_fields_deserialize() {
        let payload: NewUser = serde_json::from_value(json!({ "name": "Ada" })).unwrap();
        assert_eq!(payload.name_param(), Some("Ada".to_string()));
        assert_eq!(payload.email_param(), None);
    }

    #[test]
    fn test_created_user_echoes_input() {
        let payload: NewUser = serde_json::from_value(json!({
            "name": "Test User",
            "email": "test@example.com"
        }))
        .unwrap();

        let created = serde_json::to_value(payload.into_created(1)).unwrap();
        assert_eq!(
            created,
            json!({ "id": 1, "name": "Test User", "email": "test@example.com" })
        );
    }
}
