// src/domain/user/metadata.rs
//! Field metadata for the safe-user shape, split per consumer.
//!
//! The storage table is read only by the persistence layer and the API table
//! only by the OpenAPI document, so neither technology leaks into
//! [`SafeUser`](super::SafeUser) itself. Both are keyed by wire field name and
//! listed in declaration order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Text,
    Integer,
    Boolean,
    TextArray,
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageField {
    pub name: &'static str,
    pub kind: StorageKind,
    pub required: bool,
    pub unique: bool,
}

impl StorageField {
    const fn new(name: &'static str, kind: StorageKind, required: bool) -> Self {
        Self {
            name,
            kind,
            required,
            unique: false,
        }
    }

    const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

const STORAGE_FIELDS: [StorageField; 10] = [
    StorageField::new("email", StorageKind::Text, true).unique(),
    StorageField::new("username", StorageKind::Text, true),
    StorageField::new("created_at", StorageKind::Integer, true),
    StorageField::new("updated_at", StorageKind::Integer, true),
    StorageField::new("confirmed", StorageKind::Boolean, true),
    StorageField::new("type", StorageKind::Text, true),
    StorageField::new("role", StorageKind::Text, true),
    StorageField::new("tags", StorageKind::TextArray, false),
    StorageField::new("banned", StorageKind::Boolean, false),
    StorageField::new("twoFactorAuth", StorageKind::Document, true),
];

pub fn storage_fields() -> &'static [StorageField] {
    &STORAGE_FIELDS
}

pub fn storage_field(name: &str) -> Option<&'static StorageField> {
    STORAGE_FIELDS.iter().find(|field| field.name == name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKind {
    String,
    Integer,
    Boolean,
    /// String restricted to the listed values.
    Enum(&'static [&'static str]),
    /// Schema owned by another package, referenced by component name.
    Reference(&'static str),
}

/// Example value shown in generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiExample {
    Str(&'static str),
    Int(i64),
    Bool(bool),
    StrList(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiProperty {
    pub name: &'static str,
    pub kind: ApiKind,
    pub description: &'static str,
    pub required: bool,
    pub is_array: bool,
    pub example: Option<ApiExample>,
}

const API_PROPERTIES: [ApiProperty; 10] = [
    ApiProperty {
        name: "email",
        kind: ApiKind::String,
        description: "Email address used for user identification",
        required: true,
        is_array: false,
        example: Some(ApiExample::Str("user@example.com")),
    },
    ApiProperty {
        name: "username",
        kind: ApiKind::String,
        description: "Unique username for the user account",
        required: true,
        is_array: false,
        example: Some(ApiExample::Str("johndoe")),
    },
    ApiProperty {
        name: "created_at",
        kind: ApiKind::Integer,
        description: "Unix timestamp of user account creation",
        required: true,
        is_array: false,
        example: Some(ApiExample::Int(1_634_567_890)),
    },
    ApiProperty {
        name: "updated_at",
        kind: ApiKind::Integer,
        description: "Unix timestamp of last user account update",
        required: true,
        is_array: false,
        example: Some(ApiExample::Int(1_634_567_890)),
    },
    ApiProperty {
        name: "confirmed",
        kind: ApiKind::Boolean,
        description: "Boolean flag indicating if user has confirmed their account",
        required: true,
        is_array: false,
        example: Some(ApiExample::Bool(true)),
    },
    ApiProperty {
        name: "type",
        kind: ApiKind::Enum(&["standard", "web2", "web3"]),
        description: "Type of user account",
        required: true,
        is_array: false,
        example: Some(ApiExample::Str("standard")),
    },
    ApiProperty {
        name: "role",
        kind: ApiKind::Enum(&["user", "admin", "owner"]),
        description: "User's role in the system",
        required: true,
        is_array: false,
        example: Some(ApiExample::Str("user")),
    },
    ApiProperty {
        name: "tags",
        kind: ApiKind::String,
        description: "Tags for categorizing users",
        required: false,
        is_array: true,
        example: Some(ApiExample::StrList(&["premium", "beta"])),
    },
    // Optional everywhere; readers treat an absent flag as false.
    ApiProperty {
        name: "banned",
        kind: ApiKind::Boolean,
        description: "Boolean flag indicating if user is banned",
        required: false,
        is_array: false,
        example: Some(ApiExample::Bool(false)),
    },
    ApiProperty {
        name: "twoFactorAuth",
        kind: ApiKind::Reference("TwoFactorAuth"),
        description: "Two-factor authentication configuration",
        required: true,
        is_array: false,
        example: None,
    },
];

pub fn api_properties() -> &'static [ApiProperty] {
    &API_PROPERTIES
}
