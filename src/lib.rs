//! SWAPI GraphQL backend
//!
//! Serves the Star Wars reference dataset (films, people, planets, species,
//! starships, vehicles) through a Relay-style GraphQL API. Every list is a
//! cursor-paginated connection backed by a SQLite table.

pub mod config;
pub mod db;
pub mod graphql;

pub use config::Config;
pub use db::Database;
pub use graphql::{SwapiSchema, build_schema};
