// src/infrastructure/repositories/schema.rs
//! Postgres layout for safe users, derived from the storage metadata table.
use crate::domain::user::{
    Role,
    metadata::{StorageField, StorageKind, storage_fields},
};

pub const EMAIL_KEY_SUFFIX: &str = "_email_key";
pub const TIMESTAMP_CHECK_SUFFIX: &str = "_updated_after_created_chk";
pub const ROLE_CHECK_SUFFIX: &str = "_role_chk";

/// Column backing a wire field. Wire names that are reserved words or
/// camel-cased get a snake_case column.
pub fn column_name(field: &StorageField) -> &'static str {
    match field.name {
        "type" => "user_type",
        "twoFactorAuth" => "two_factor_auth",
        other => other,
    }
}

/// Comma-separated column list in declaration order.
pub fn column_list() -> String {
    storage_fields()
        .iter()
        .map(column_name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn column_definition(field: &StorageField) -> String {
    let sql_type = match field.kind {
        StorageKind::Text => "TEXT",
        StorageKind::Integer => "BIGINT",
        StorageKind::Boolean => "BOOLEAN",
        StorageKind::TextArray => "TEXT[]",
        StorageKind::Document => "JSONB",
    };
    let column = column_name(field);
    match field.kind {
        // Flags are never NULL in storage; an absent flag is stored as false.
        StorageKind::Boolean => format!("{column} {sql_type} NOT NULL DEFAULT FALSE"),
        _ if field.required => format!("{column} {sql_type} NOT NULL"),
        _ => format!("{column} {sql_type}"),
    }
}

pub fn render_create_table(table: &str) -> String {
    let mut lines: Vec<String> = storage_fields().iter().map(column_definition).collect();

    for field in storage_fields().iter().filter(|f| f.unique) {
        let column = column_name(field);
        let constraint = if column == "email" {
            format!("{table}{EMAIL_KEY_SUFFIX}")
        } else {
            format!("{table}_{column}_key")
        };
        lines.push(format!("CONSTRAINT {constraint} UNIQUE ({column})"));
    }

    lines.push(format!(
        "CONSTRAINT {table}{TIMESTAMP_CHECK_SUFFIX} CHECK (updated_at >= created_at)"
    ));

    let roles = Role::ALL
        .iter()
        .map(|role| format!("'{role}'"))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!(
        "CONSTRAINT {table}{ROLE_CHECK_SUFFIX} CHECK (role IN ({roles}))"
    ));

    format!(
        "CREATE TABLE IF NOT EXISTS {table} (\n    {}\n)",
        lines.join(",\n    ")
    )
}
