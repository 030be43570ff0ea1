// src/infrastructure/repositories/postgres_user.rs
use super::{error::map_sqlx, schema::column_list};
use crate::application::ports::validation::EmailValidator;
use crate::domain::credentials::{CredentialsUserType, TwoFactorAuth, UserTag};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{EmailAddress, Role, SafeUser, UserRepository, Username};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, types::Json};
use std::sync::Arc;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
    table: String,
    emails: Arc<dyn EmailValidator>,
}

impl PostgresUserRepository {
    /// `table` must be a plain identifier; it is interpolated into SQL.
    pub fn new(pool: PgPool, table: impl Into<String>, emails: Arc<dyn EmailValidator>) -> Self {
        Self {
            pool,
            table: table.into(),
            emails,
        }
    }

    fn row_to_user(&self, row: UserRow) -> DomainResult<SafeUser> {
        Ok(SafeUser {
            email: EmailAddress::parse(row.email, self.emails.as_ref())?,
            username: Username::new(row.username)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
            confirmed: Some(row.confirmed),
            user_type: row.user_type.parse::<CredentialsUserType>()?,
            role: row.role.parse::<Role>()?,
            tags: row
                .tags
                .map(|tags| tags.into_iter().map(UserTag::new).collect()),
            banned: Some(row.banned),
            two_factor_auth: row.two_factor_auth.0,
        })
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    email: String,
    username: String,
    created_at: i64,
    updated_at: i64,
    confirmed: bool,
    user_type: String,
    role: String,
    tags: Option<Vec<String>>,
    banned: bool,
    two_factor_auth: Json<TwoFactorAuth>,
}

fn tag_strings(user: &SafeUser) -> Option<Vec<String>> {
    user.tags
        .as_ref()
        .map(|tags| tags.iter().map(|tag| tag.as_str().to_owned()).collect())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: &SafeUser) -> DomainResult<SafeUser> {
        let sql = format!(
            "INSERT INTO {table} ({columns})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {columns}",
            table = self.table,
            columns = column_list(),
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(user.email.as_str())
            .bind(user.username.as_str())
            .bind(user.created_at)
            .bind(user.updated_at)
            .bind(user.is_confirmed())
            .bind(user.user_type.as_str())
            .bind(user.role.as_str())
            .bind(tag_strings(user))
            .bind(user.is_banned())
            .bind(Json(&user.two_factor_auth))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.row_to_user(row)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<SafeUser>> {
        let sql = format!(
            "SELECT {columns} FROM {table} WHERE email = $1",
            table = self.table,
            columns = column_list(),
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(|row| self.row_to_user(row)).transpose()
    }

    async fn update(&self, user: &SafeUser) -> DomainResult<SafeUser> {
        // created_at is immutable and deliberately absent from the SET list.
        let sql = format!(
            "UPDATE {table} SET username = $2, updated_at = $3, confirmed = $4, user_type = $5,
                 role = $6, tags = $7, banned = $8, two_factor_auth = $9
             WHERE email = $1
             RETURNING {columns}",
            table = self.table,
            columns = column_list(),
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(user.email.as_str())
            .bind(user.username.as_str())
            .bind(user.updated_at)
            .bind(user.is_confirmed())
            .bind(user.user_type.as_str())
            .bind(user.role.as_str())
            .bind(tag_strings(user))
            .bind(user.is_banned())
            .bind(Json(&user.two_factor_auth))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        self.row_to_user(row)
    }

    async fn delete(&self, email: &EmailAddress) -> DomainResult<()> {
        let sql = format!("DELETE FROM {} WHERE email = $1", self.table);
        let result = sqlx::query(&sql)
            .bind(email.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }
}
