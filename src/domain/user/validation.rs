// src/domain/user/validation.rs
use crate::application::ports::validation::EmailValidator;
use crate::domain::credentials::{CredentialsUserType, TwoFactorAuth, UserTag};
use crate::domain::errors::ValidationError;
use crate::domain::user::entity::SafeUser;
use crate::domain::user::value_objects::{EmailAddress, Role, Username};
use serde::Deserialize;
use serde_json::{Map, Value};

type Fields = Map<String, Value>;

/// Checks an untyped record against the safe-user contract and returns the
/// validated snapshot.
///
/// Checks run in a fixed order and the first failure is reported: email,
/// username, role, type, timestamps, boolean flags, then tags and the
/// two-factor configuration. Nothing is partially applied.
pub fn validate(
    candidate: &Value,
    emails: &dyn EmailValidator,
) -> Result<SafeUser, ValidationError> {
    validate_fields(candidate, emails).inspect_err(|err| {
        tracing::debug!(kind = %err.kind, "user record rejected");
    })
}

fn validate_fields(
    candidate: &Value,
    emails: &dyn EmailValidator,
) -> Result<SafeUser, ValidationError> {
    let fields = candidate
        .as_object()
        .ok_or_else(|| ValidationError::invalid_type("$"))?;

    let email = str_field(fields, "email")
        .ok_or_else(ValidationError::invalid_email)
        .and_then(|raw| EmailAddress::parse(raw, emails))?;

    let username = str_field(fields, "username")
        .ok_or_else(|| ValidationError::missing("username"))
        .and_then(|raw| Username::new(raw))?;

    let role = str_field(fields, "role")
        .ok_or_else(|| ValidationError::invalid_enum("role"))?
        .parse::<Role>()?;

    let user_type = str_field(fields, "type")
        .ok_or_else(|| ValidationError::invalid_enum("type"))?
        .parse::<CredentialsUserType>()?;

    let (created_at, updated_at) = timestamps(fields)?;

    let confirmed = optional_bool(fields, "confirmed")?;
    let banned = optional_bool(fields, "banned")?;
    let tags = optional_tags(fields)?;
    let two_factor_auth = two_factor(fields)?;

    Ok(SafeUser {
        email,
        username,
        created_at,
        updated_at,
        confirmed,
        user_type,
        role,
        tags,
        banned,
        two_factor_auth,
    })
}

fn str_field<'a>(fields: &'a Fields, name: &str) -> Option<&'a str> {
    fields.get(name).and_then(Value::as_str)
}

fn timestamps(fields: &Fields) -> Result<(i64, i64), ValidationError> {
    let created_at = fields.get("created_at").and_then(Value::as_i64);
    let updated_at = fields.get("updated_at").and_then(Value::as_i64);
    match (created_at, updated_at) {
        (Some(created), Some(updated)) if updated >= created => Ok((created, updated)),
        _ => Err(ValidationError::invalid_timestamp()),
    }
}

// Absence is preserved; readers treat it as false.
fn optional_bool(fields: &Fields, name: &'static str) -> Result<Option<bool>, ValidationError> {
    match fields.get(name) {
        None => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(*flag)),
        Some(_) => Err(ValidationError::invalid_type(name)),
    }
}

fn optional_tags(fields: &Fields) -> Result<Option<Vec<UserTag>>, ValidationError> {
    let Some(raw) = fields.get("tags") else {
        return Ok(None);
    };
    raw.as_array()
        .ok_or_else(|| ValidationError::invalid_type("tags"))?
        .iter()
        .map(|tag| {
            tag.as_str()
                .map(UserTag::new)
                .ok_or_else(|| ValidationError::invalid_type("tags"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn two_factor(fields: &Fields) -> Result<TwoFactorAuth, ValidationError> {
    let raw = fields
        .get("twoFactorAuth")
        .ok_or_else(|| ValidationError::missing("twoFactorAuth"))?;
    TwoFactorAuth::deserialize(raw).map_err(|_| ValidationError::invalid_type("twoFactorAuth"))
}
