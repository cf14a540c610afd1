use anyhow::Context;
use sqlx::{mysql::MySqlPoolOptions, MySqlPool};

use crate::config::DbConfig;

const CREATE_STUDENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id INT UNSIGNED AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        age INT NOT NULL,
        department VARCHAR(100) NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Open the pool. Fails fast if the server is unreachable.
pub async fn connect(cfg: &DbConfig) -> anyhow::Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(cfg.connect_options())
        .await
        .with_context(|| {
            format!(
                "connect to mysql://{}@{}:{}/{}",
                cfg.user, cfg.host, cfg.port, cfg.name
            )
        })?;
    tracing::info!(host = %cfg.host, port = cfg.port, database = %cfg.name, "database connected");
    Ok(pool)
}

/// Create the `students` table if it is missing. Idempotent.
pub async fn ensure_schema(db: &MySqlPool) -> anyhow::Result<()> {
    sqlx::query(CREATE_STUDENTS_TABLE)
        .execute(db)
        .await
        .context("create students table")?;
    tracing::debug!("students table ready");
    Ok(())
}
