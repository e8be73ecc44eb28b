//! Table definitions and startup migration
//!
//! Creates every entity table and join table if missing. Rows are only ever
//! written by the import process; this module never touches data.

use sqlx::SqlitePool;
use tracing::{debug, info};

/// CREATE TABLE statements in dependency order
const TABLES: &[(&str, &str)] = &[
    (
        "films",
        r#"
        CREATE TABLE IF NOT EXISTS films (
            id INTEGER PRIMARY KEY,
            title TEXT,
            episode_id INTEGER,
            opening_crawl TEXT,
            director TEXT,
            producers TEXT NOT NULL DEFAULT '[]',
            release_date TEXT,
            created TEXT,
            edited TEXT
        )
        "#,
    ),
    (
        "planets",
        r#"
        CREATE TABLE IF NOT EXISTS planets (
            id INTEGER PRIMARY KEY,
            name TEXT,
            diameter INTEGER,
            rotation_period INTEGER,
            orbital_period INTEGER,
            gravity TEXT,
            population REAL,
            climates TEXT NOT NULL DEFAULT '[]',
            terrains TEXT NOT NULL DEFAULT '[]',
            surface_water REAL,
            created TEXT,
            edited TEXT
        )
        "#,
    ),
    (
        "species",
        r#"
        CREATE TABLE IF NOT EXISTS species (
            id INTEGER PRIMARY KEY,
            name TEXT,
            classification TEXT,
            designation TEXT,
            average_height INTEGER,
            average_lifespan INTEGER,
            eye_colors TEXT NOT NULL DEFAULT '[]',
            hair_colors TEXT NOT NULL DEFAULT '[]',
            skin_colors TEXT NOT NULL DEFAULT '[]',
            language TEXT,
            homeworld_id INTEGER REFERENCES planets(id),
            created TEXT,
            edited TEXT
        )
        "#,
    ),
    (
        "people",
        r#"
        CREATE TABLE IF NOT EXISTS people (
            id INTEGER PRIMARY KEY,
            name TEXT,
            birth_year TEXT,
            eye_color TEXT,
            gender TEXT,
            hair_color TEXT,
            height INTEGER,
            mass REAL,
            skin_color TEXT,
            homeworld_id INTEGER REFERENCES planets(id),
            species_id INTEGER REFERENCES species(id),
            created TEXT,
            edited TEXT
        )
        "#,
    ),
    (
        "starships",
        r#"
        CREATE TABLE IF NOT EXISTS starships (
            id INTEGER PRIMARY KEY,
            name TEXT,
            model TEXT,
            starship_class TEXT,
            manufacturers TEXT NOT NULL DEFAULT '[]',
            cost_in_credits REAL,
            length REAL,
            crew TEXT,
            passengers TEXT,
            max_atmosphering_speed INTEGER,
            hyperdrive_rating REAL,
            mglt INTEGER,
            cargo_capacity REAL,
            consumables TEXT,
            created TEXT,
            edited TEXT
        )
        "#,
    ),
    (
        "vehicles",
        r#"
        CREATE TABLE IF NOT EXISTS vehicles (
            id INTEGER PRIMARY KEY,
            name TEXT,
            model TEXT,
            vehicle_class TEXT,
            manufacturers TEXT NOT NULL DEFAULT '[]',
            cost_in_credits REAL,
            length REAL,
            crew TEXT,
            passengers TEXT,
            max_atmosphering_speed INTEGER,
            cargo_capacity REAL,
            consumables TEXT,
            created TEXT,
            edited TEXT
        )
        "#,
    ),
];

/// Join tables: (table, left column, right column)
const JOIN_TABLES: &[(&str, &str, &str)] = &[
    ("film_characters", "film_id", "person_id"),
    ("film_planets", "film_id", "planet_id"),
    ("film_species", "film_id", "species_id"),
    ("film_starships", "film_id", "starship_id"),
    ("film_vehicles", "film_id", "vehicle_id"),
    ("starship_pilots", "starship_id", "person_id"),
    ("vehicle_pilots", "vehicle_id", "person_id"),
];

fn join_table_sql(table: &str, left: &str, right: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (\n  {left} INTEGER NOT NULL,\n  {right} INTEGER NOT NULL,\n  PRIMARY KEY ({left}, {right})\n)"
    )
}

/// Check if a table exists in the database
async fn table_exists(pool: &SqlitePool, table_name: &str) -> Result<bool, sqlx::Error> {
    let result: Option<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name = ?")
            .bind(table_name)
            .fetch_optional(pool)
            .await?;

    Ok(result.is_some())
}

/// Create all missing tables. Returns the names of the tables created.
pub async fn migrate(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    let mut created = Vec::new();

    for (name, sql) in TABLES {
        if !table_exists(pool, name).await? {
            debug!("Creating table {}", name);
            sqlx::query(sql).execute(pool).await?;
            created.push(name.to_string());
        }
    }

    for (name, left, right) in JOIN_TABLES {
        if !table_exists(pool, name).await? {
            let sql = join_table_sql(name, left, right);
            debug!("Creating join table {}: {}", name, sql);
            sqlx::query(&sql).execute(pool).await?;
            sqlx::query(&format!(
                "CREATE INDEX IF NOT EXISTS idx_{name}_{right} ON {name} ({right})"
            ))
            .execute(pool)
            .await?;
            created.push(name.to_string());
        }
    }

    if !created.is_empty() {
        info!(tables = ?created, "Schema migration created tables");
    }

    Ok(created)
}
