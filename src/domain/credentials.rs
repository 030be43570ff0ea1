// src/domain/credentials.rs
//! Shapes owned by the credentials/auth packages.
//!
//! The user entity composes these types but does not interpret them: tag
//! semantics and two-factor flows belong to their owners. Only the structure is
//! mirrored here so that records can be checked and round-tripped.
use crate::domain::errors::{ValidationError, ValidationErrorKind};
use crate::domain::user::value_objects::{EmailAddress, Role, Username};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

/// Kind of credentials a user account was registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialsUserType {
    Standard,
    Web2,
    Web3,
}

impl CredentialsUserType {
    pub const ALL: [Self; 3] = [Self::Standard, Self::Web2, Self::Web3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Web2 => "web2",
            Self::Web3 => "web3",
        }
    }
}

impl fmt::Display for CredentialsUserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CredentialsUserType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| ValidationErrorKind::InvalidEnum("type").into())
    }
}

/// Opaque label attached to a user by the tagging package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserTag(String);

impl UserTag {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<UserTag> for String {
    fn from(value: UserTag) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TwoFactorStatus {
    #[default]
    Disabled,
    Pending,
    Enabled,
}

impl TwoFactorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Pending => "pending",
            Self::Enabled => "enabled",
        }
    }
}

/// Two-factor configuration as stored by the auth package.
///
/// The document is kept verbatim: the auth package owns its keys and their
/// validation, so the only requirement here is that it is a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TwoFactorAuth(Map<String, Value>);

impl TwoFactorAuth {
    pub fn new(document: Map<String, Value>) -> Self {
        Self(document)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Status as understood by the auth package, if present and recognised.
    pub fn status(&self) -> Option<TwoFactorStatus> {
        self.get("status")
            .and_then(|raw| TwoFactorStatus::deserialize(raw).ok())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl Default for TwoFactorAuth {
    fn default() -> Self {
        let mut document = Map::new();
        document.insert(
            "status".into(),
            Value::from(TwoFactorStatus::Disabled.as_str()),
        );
        Self(document)
    }
}

impl From<TwoFactorAuth> for Map<String, Value> {
    fn from(value: TwoFactorAuth) -> Self {
        value.0
    }
}

/// Fields a record must expose to satisfy the credentials user contract.
pub trait CredentialsUser {
    fn email(&self) -> &EmailAddress;
    fn username(&self) -> &Username;
    fn user_type(&self) -> CredentialsUserType;
    fn role(&self) -> Role;
    fn confirmed(&self) -> bool;
    fn banned(&self) -> bool;
    fn tags(&self) -> &[UserTag];
    fn two_factor_auth(&self) -> &TwoFactorAuth;
}
