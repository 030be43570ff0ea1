// src/domain/user/mod.rs
pub mod entity;
pub mod metadata;
pub mod repository;
pub mod validation;
pub mod value_objects;

pub use entity::SafeUser;
pub use metadata::{ApiProperty, StorageField, api_properties, storage_fields};
pub use repository::UserRepository;
pub use validation::validate;
pub use value_objects::{EmailAddress, Role, Username};
