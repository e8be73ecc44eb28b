//! Database connection and table repositories

pub mod films;
pub mod people;
pub mod planets;
pub mod relations;
pub mod repository;
pub mod schema;
pub mod species;
pub mod sqlite_helpers;
pub mod starships;
pub mod vehicles;

use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use films::FilmRecord;
pub use people::PersonRecord;
pub use planets::PlanetRecord;
pub use repository::{
    Entity, FindMany, PrimaryKey, RelationFilter, Repository, SortDirection, TableRepository,
};
pub use species::SpeciesRecord;
pub use starships::StarshipRecord;
pub use vehicles::VehicleRecord;

/// Pool size used by [`Database::connect`]
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Database wrapper providing connection pool access.
///
/// Built once at startup and handed to the GraphQL schema; there is no
/// process-global handle.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database wrapper from an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a pool of [`DEFAULT_MAX_CONNECTIONS`] connections.
    ///
    /// Used by tests and tooling; the server sizes its pool from `Config`
    /// through [`Database::connect_with_max`].
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_max(url, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Create a new database connection pool with an explicit size
    pub async fn connect_with_max(url: &str, max_connections: u32) -> Result<Self> {
        // Every connection to an in-memory database is a separate database
        let in_memory = url.contains(":memory:");
        let max_connections = if in_memory { 1 } else { max_connections };

        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid database URL: {}", url))?
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new().max_connections(max_connections);
        if in_memory {
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to {}", url))?;

        tracing::debug!(url, max_connections, "Database pool created");
        Ok(Self { pool })
    }

    /// Create any missing tables
    pub async fn migrate(&self) -> Result<()> {
        schema::migrate(&self.pool)
            .await
            .context("Schema migration failed")?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get a repository for any entity table
    pub fn table<E: Entity>(&self) -> TableRepository<E> {
        TableRepository::new(self.pool.clone())
    }

    /// Get a films repository
    pub fn films(&self) -> TableRepository<FilmRecord> {
        self.table()
    }

    /// Get a people repository
    pub fn people(&self) -> TableRepository<PersonRecord> {
        self.table()
    }

    /// Get a planets repository
    pub fn planets(&self) -> TableRepository<PlanetRecord> {
        self.table()
    }

    /// Get a species repository
    pub fn species(&self) -> TableRepository<SpeciesRecord> {
        self.table()
    }

    /// Get a starships repository
    pub fn starships(&self) -> TableRepository<StarshipRecord> {
        self.table()
    }

    /// Get a vehicles repository
    pub fn vehicles(&self) -> TableRepository<VehicleRecord> {
        self.table()
    }
}
