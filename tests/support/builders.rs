// tests/support/builders.rs
use serde_json::{Value, json};

/// Builds candidate records as untyped JSON, starting from a valid one.
pub struct RecordBuilder {
    record: Value,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            record: json!({
                "email": "a@b.com",
                "username": "alice",
                "created_at": 1000,
                "updated_at": 1000,
                "confirmed": false,
                "type": "standard",
                "role": "user",
                "banned": false,
                "twoFactorAuth": { "status": "disabled" }
            }),
        }
    }

    pub fn set(mut self, field: &str, value: Value) -> Self {
        self.record[field] = value;
        self
    }

    pub fn without(mut self, field: &str) -> Self {
        if let Some(fields) = self.record.as_object_mut() {
            fields.remove(field);
        }
        self
    }

    pub fn email(self, email: &str) -> Self {
        self.set("email", json!(email))
    }

    pub fn role(self, role: &str) -> Self {
        self.set("role", json!(role))
    }

    pub fn timestamps(self, created_at: i64, updated_at: i64) -> Self {
        self.set("created_at", json!(created_at))
            .set("updated_at", json!(updated_at))
    }

    pub fn build(self) -> Value {
        self.record
    }
}
