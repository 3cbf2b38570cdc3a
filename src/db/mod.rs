pub mod repository;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Connects to the database and applies pending migrations.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
