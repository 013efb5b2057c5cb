use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::env;

pub async fn connect() -> MySqlPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must set");

    let max_connections = env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|n| n.parse::<u32>().ok())
        .unwrap_or(10);

    match MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
    {
        Ok(pool) => {
            println!("Connected to database");
            pool
        }
        Err(e) => {
            println!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    }
}
