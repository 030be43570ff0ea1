use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use users_types::{
    config::AppConfig,
    domain::user::validate,
    infrastructure::{
        database,
        email::RegexEmailValidator,
        repositories::schema::render_create_table,
    },
    presentation::openapi::write_openapi_snapshot,
};

const USAGE: &str = "usage: users_types <openapi-snapshot | schema | migrate | validate <file.json>>";

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Loads .env first so RUST_LOG from it reaches the subscriber.
    let config = AppConfig::from_env()?;
    init_tracing();

    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("openapi-snapshot") => {
            let path = config.openapi_snapshot_path();
            write_openapi_snapshot(path)?;
            println!("OpenAPI snapshot written to {}", path.display());
        }
        Some("schema") => {
            println!("{};", render_create_table(config.users_table()));
        }
        Some("migrate") => {
            let pool = database::init_pool(config.database_url()).await?;
            database::apply_schema(&pool, config.users_table()).await?;
        }
        Some("validate") => {
            let path = args.next().context(USAGE)?;
            let raw = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            let candidate: Value =
                serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;
            let emails = RegexEmailValidator::new(config.email_max_length())?;
            let user = validate(&candidate, &emails)?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
        Some(other) => bail!("unknown command '{other}'\n{USAGE}"),
        None => println!("{USAGE}"),
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
