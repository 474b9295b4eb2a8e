//! Load the TMDB movie CSV datasets into PostgreSQL.
//!
//! The pipeline is strictly sequential: wait for the database to become
//! reachable, drop and reload each of the three movie tables from its CSV
//! file, then run a fixed set of demonstration queries against the result.

pub mod config;
pub mod database;
pub mod demo;
pub mod error;
pub mod loader;
pub mod table;

pub use error::{Error, Result};
