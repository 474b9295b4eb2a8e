//! Binary entry point: wait for the database, reload the three movie
//! tables, run the demonstration queries.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tmdb_ingest::{config, database, demo, loader};

/// Fixed datasets: CSV path, destination table, primary-key column.
const DATASETS: &[(&str, &str, &str)] = &[
    ("./data/tmdb_5000_movies1.csv", "movie_metadata", "id"),
    ("./data/tmdb_5000_movies2.csv", "movie_details", "id"),
    ("./data/tmdb_5000_movies3.csv", "movie_castcrew", "movie_id"),
];

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let url = config::database_url();
    tracing::info!("connecting to {}", config::mask_url(&url));
    let pool = database::connect(&url).context("failed to build connection pool")?;

    database::wait_for_db(&pool, database::RetryPolicy::default())
        .await
        .context("database never became ready")?;

    for (path, table, pk_column) in DATASETS {
        loader::load_csv_to_db(&pool, Path::new(path), table, pk_column)
            .await
            .with_context(|| format!("failed to load {path} into {table}"))?;
    }

    demo::run_demo_queries(&pool)
        .await
        .context("demonstration queries failed")?;

    Ok(())
}
