//! GraphQL schema definition

use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

use crate::db::Database;

use super::queries::{
    FilmQueries, PersonQueries, PlanetQueries, SpeciesQueries, StarshipQueries, VehicleQueries,
};

/// The GraphQL schema type
pub type SwapiSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    FilmQueries,
    PersonQueries,
    PlanetQueries,
    SpeciesQueries,
    StarshipQueries,
    VehicleQueries,
);

/// Build the GraphQL schema with the database injected as schema data
pub fn build_schema(db: Database) -> SwapiSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(db)
        .extension(async_graphql::extensions::Tracing)
        .finish()
}
