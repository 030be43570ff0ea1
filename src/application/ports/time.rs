// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for stamping `updated_at`; tests pin it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
