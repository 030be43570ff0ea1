// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_user;
pub mod schema;

pub use error::map_sqlx;
pub use postgres_user::PostgresUserRepository;
