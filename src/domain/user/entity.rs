// src/domain/user/entity.rs
use crate::domain::credentials::{CredentialsUser, CredentialsUserType, TwoFactorAuth, UserTag};
use crate::domain::user::value_objects::{EmailAddress, Role, Username};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// User projection that is safe to expose: no secrets, only the fields the
/// credentials contract and the public API need.
///
/// Instances are produced by [`crate::domain::user::validate`] or rebuilt from
/// storage; both paths go through the value-object constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafeUser {
    pub email: EmailAddress,
    pub username: Username,
    pub created_at: i64,
    pub updated_at: i64,
    /// Absent in the source record means `false`; see [`SafeUser::is_confirmed`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,
    #[serde(rename = "type")]
    pub user_type: CredentialsUserType,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<UserTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banned: Option<bool>,
    #[serde(rename = "twoFactorAuth")]
    pub two_factor_auth: TwoFactorAuth,
}

impl SafeUser {
    /// Copy of this record stamped as modified at `now`.
    ///
    /// `updated_at` always moves strictly forward: if `now` does not lie after
    /// the current stamp, the stamp advances by one second instead.
    pub fn touch(&self, now: DateTime<Utc>) -> Self {
        let now = now.timestamp();
        let updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at.saturating_add(1)
        };
        Self {
            updated_at,
            ..self.clone()
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed.unwrap_or(false)
    }

    pub fn is_banned(&self) -> bool {
        self.banned.unwrap_or(false)
    }
}

impl CredentialsUser for SafeUser {
    fn email(&self) -> &EmailAddress {
        &self.email
    }

    fn username(&self) -> &Username {
        &self.username
    }

    fn user_type(&self) -> CredentialsUserType {
        self.user_type
    }

    fn role(&self) -> Role {
        self.role
    }

    fn confirmed(&self) -> bool {
        self.is_confirmed()
    }

    fn banned(&self) -> bool {
        self.is_banned()
    }

    fn tags(&self) -> &[UserTag] {
        self.tags.as_deref().unwrap_or_default()
    }

    fn two_factor_auth(&self) -> &TwoFactorAuth {
        &self.two_factor_auth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::validation::EmailValidator;
    use chrono::TimeZone;

    struct AnyEmail;

    impl EmailValidator for AnyEmail {
        fn is_email(&self, _: &str) -> bool {
            true
        }
    }

    fn sample_user() -> SafeUser {
        SafeUser {
            email: EmailAddress::parse("a@b.com", &AnyEmail).unwrap(),
            username: Username::new("alice").unwrap(),
            created_at: 1000,
            updated_at: 1000,
            confirmed: Some(false),
            user_type: CredentialsUserType::Standard,
            role: Role::User,
            tags: None,
            banned: None,
            two_factor_auth: TwoFactorAuth::default(),
        }
    }

    #[test]
    fn touch_sets_updated_at_and_keeps_the_rest() {
        let user = sample_user();
        let now = Utc.timestamp_opt(2000, 0).unwrap();
        let touched = user.touch(now);
        assert_eq!(touched.updated_at, 2000);
        assert_eq!(touched.created_at, user.created_at);
        assert_eq!(
            SafeUser {
                updated_at: user.updated_at,
                ..touched
            },
            user
        );
        assert_eq!(user.updated_at, 1000);
    }

    #[test]
    fn touch_with_stale_clock_still_moves_forward() {
        let user = sample_user();
        let stale = Utc.timestamp_opt(500, 0).unwrap();
        assert_eq!(user.touch(stale).updated_at, 1001);
        let same = Utc.timestamp_opt(1000, 0).unwrap();
        assert_eq!(user.touch(same).updated_at, 1001);
    }

    #[test]
    fn serializes_with_wire_names() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert_eq!(json["type"], "standard");
        assert_eq!(json["twoFactorAuth"]["status"], "disabled");
        assert!(json.get("tags").is_none());
        assert!(json.get("banned").is_none());
        assert_eq!(json["confirmed"], false);
    }

    #[test]
    fn exposes_credentials_contract() {
        let user = sample_user();
        let contract: &dyn CredentialsUser = &user;
        assert_eq!(contract.email().as_str(), "a@b.com");
        assert_eq!(contract.role(), Role::User);
        assert!(contract.tags().is_empty());
        assert!(!contract.banned());
    }

    #[test]
    fn absent_flags_read_as_false() {
        let user = SafeUser {
            confirmed: None,
            banned: None,
            ..sample_user()
        };
        assert!(!user.is_confirmed());
        assert!(!user.is_banned());
        let banned = SafeUser {
            banned: Some(true),
            ..user
        };
        assert!(banned.is_banned());
    }
}
