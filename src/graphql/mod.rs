//! GraphQL API
//!
//! Read-only Relay-style API over the SWAPI dataset. Each entity lives in
//! `types/` with its connections; root fields live in `queries/`, one
//! `#[derive(Default)]` struct per entity merged into `QueryRoot`.
//!
//! Every list field is a connection produced by
//! [`resolver::ConnectionResolver`], which delegates to
//! [`pagination::build_connection`].

pub mod error;
pub mod global_id;
pub mod helpers;
pub mod node;
pub mod pagination;
pub mod queries;
pub mod resolver;
mod schema;
pub mod service;
pub mod types;

pub use error::ConnectionError;
pub use schema::{QueryRoot, SwapiSchema, build_schema};
