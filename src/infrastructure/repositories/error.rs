use super::schema::{EMAIL_KEY_SUFFIX, ROLE_CHECK_SUFFIX, TIMESTAMP_CHECK_SUFFIX};
use crate::domain::errors::{DomainError, ValidationError};

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return map_constraint(constraint);
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Persistence("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> DomainError {
    if constraint.ends_with(EMAIL_KEY_SUFFIX) {
        DomainError::Conflict("email already exists".into())
    } else if constraint.ends_with(TIMESTAMP_CHECK_SUFFIX) {
        ValidationError::invalid_timestamp().into()
    } else if constraint.ends_with(ROLE_CHECK_SUFFIX) {
        ValidationError::invalid_enum("role").into()
    } else {
        DomainError::Persistence(format!("database constraint violation: {constraint}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationErrorKind;

    #[test]
    fn email_key_maps_to_conflict() {
        assert!(matches!(
            map_constraint("users_email_key"),
            DomainError::Conflict(msg) if msg == "email already exists"
        ));
    }

    #[test]
    fn check_constraints_map_to_validation_kinds() {
        match map_constraint("users_updated_after_created_chk") {
            DomainError::Validation(err) => {
                assert_eq!(err.kind, ValidationErrorKind::InvalidTimestamp)
            }
            other => panic!("unexpected {other:?}"),
        }
        match map_constraint("users_role_chk") {
            DomainError::Validation(err) => {
                assert_eq!(err.kind, ValidationErrorKind::InvalidEnum("role"))
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_constraint_is_persistence_error() {
        assert!(matches!(
            map_constraint("users_other_fkey"),
            DomainError::Persistence(_)
        ));
    }

    #[test]
    fn non_database_errors_are_persistence_errors() {
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::Persistence(_)
        ));
    }
}
