//! Fixed demonstration queries run once after the three tables are loaded.
//!
//! These smoke-test the freshly loaded schema: two ranking queries, one
//! conflict-ignoring insert, one three-table join. Results go to stdout.
//! The casts pin the decoded Rust types regardless of what the loader
//! inferred for each column.

use sqlx::{PgPool, Row};

use crate::error::Result;

/// Sentinel id for the idempotent demonstration insert.
pub const TEST_MOVIE_ID: i64 = 9_999_999;

fn fmt_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "NULL".to_string(), |v| v.to_string())
}

/// Insert the sentinel test movie, ignoring the conflict when it already
/// exists. Returns the number of rows actually inserted (0 or 1).
pub async fn insert_test_movie(pool: &PgPool) -> Result<u64> {
    let result = sqlx::query(
        r#"
        INSERT INTO movie_metadata (id, budget, homepage, original_language, original_title)
        VALUES ($1, 100000, 'http://test.com', 'en', 'Test Movie')
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(TEST_MOVIE_ID)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Run the full demonstration sequence once.
pub async fn run_demo_queries(pool: &PgPool) -> Result<()> {
    println!("\nTop 5 movies by revenue:");
    let rows = sqlx::query(
        r#"
        SELECT m.original_title::TEXT AS original_title, d.revenue::BIGINT AS revenue
        FROM movie_details d
        JOIN movie_metadata m ON d.id = m.id
        ORDER BY d.revenue DESC
        LIMIT 5
        "#,
    )
    .fetch_all(pool)
    .await?;
    for row in &rows {
        let title: Option<String> = row.get("original_title");
        let revenue: Option<i64> = row.get("revenue");
        println!("  {}  {}", fmt_opt(title), fmt_opt(revenue));
    }

    println!("\nTop 5 movies by average rating (with at least 1000 votes):");
    let rows = sqlx::query(
        r#"
        SELECT m.original_title::TEXT AS original_title,
               d.vote_average::DOUBLE PRECISION AS vote_average,
               d.vote_count::BIGINT AS vote_count
        FROM movie_details d
        JOIN movie_metadata m ON d.id = m.id
        WHERE d.vote_count > 1000
        ORDER BY d.vote_average DESC
        LIMIT 5
        "#,
    )
    .fetch_all(pool)
    .await?;
    for row in &rows {
        let title: Option<String> = row.get("original_title");
        let average: Option<f64> = row.get("vote_average");
        let votes: Option<i64> = row.get("vote_count");
        println!(
            "  {}  {} ({} votes)",
            fmt_opt(title),
            fmt_opt(average),
            fmt_opt(votes)
        );
    }

    println!("\nInserting a test movie...");
    let inserted = insert_test_movie(pool).await?;
    if inserted > 0 {
        println!("Insert complete");
    } else {
        println!("Already present, insert skipped");
    }

    println!("\nExample 3-table join (metadata + details + castcrew):");
    let rows = sqlx::query(
        r#"
        SELECT m.original_title::TEXT AS original_title,
               d.release_date::TEXT AS release_date,
               d.vote_average::DOUBLE PRECISION AS vote_average,
               c.tagline::TEXT AS tagline
        FROM movie_metadata m
        JOIN movie_details d ON m.id = d.id
        JOIN movie_castcrew c ON m.id = c.movie_id
        LIMIT 5
        "#,
    )
    .fetch_all(pool)
    .await?;
    for row in &rows {
        let title: Option<String> = row.get("original_title");
        let released: Option<String> = row.get("release_date");
        let average: Option<f64> = row.get("vote_average");
        let tagline: Option<String> = row.get("tagline");
        println!(
            "  {}  {}  {}  {}",
            fmt_opt(title),
            fmt_opt(released),
            fmt_opt(average),
            fmt_opt(tagline)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_opt() {
        assert_eq!(fmt_opt(Some(42)), "42");
        assert_eq!(fmt_opt::<i64>(None), "NULL");
    }
}
