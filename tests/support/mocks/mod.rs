// tests/support/mocks/mod.rs
pub mod time;
pub mod user_repo;

pub use time::{FixedClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
