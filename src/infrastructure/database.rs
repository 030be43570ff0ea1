use crate::infrastructure::repositories::schema::render_create_table;
use sqlx::{PgPool, postgres::PgPoolOptions};

pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(16)
        .connect(database_url)
        .await
}

/// Creates the users table (and its constraints) when it does not exist yet.
pub async fn apply_schema(pool: &PgPool, table: &str) -> Result<(), sqlx::Error> {
    let ddl = render_create_table(table);
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(table, "users schema applied");
    Ok(())
}
