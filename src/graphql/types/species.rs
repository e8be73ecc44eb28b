//! Species node and its connections

use async_graphql::{ComplexObject, Context, ID, Result, SimpleObject};

use crate::db::{Database, SpeciesRecord, relations, sqlite_helpers::json_to_vec_opt};
use crate::define_connection;
use crate::graphql::error::repository_error;
use crate::graphql::helpers::format_datetime;
use crate::graphql::node::NodeType;
use crate::graphql::pagination::ConnectionArgs;
use crate::graphql::resolver::ConnectionResolver;

use super::{Film, Person, Planet};

/// A type of person or character within the Star Wars Universe.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(complex)]
pub struct Species {
    /// The ID of an object
    pub id: ID,
    /// The name of this species.
    pub name: Option<String>,
    /// The classification of this species, such as "mammal" or "reptile".
    pub classification: Option<String>,
    /// The designation of this species, such as "sentient".
    pub designation: Option<String>,
    /// The average height of this species in centimeters.
    pub average_height: Option<i32>,
    /// The average lifespan of this species in years, null if unknown.
    pub average_lifespan: Option<i32>,
    pub eye_colors: Vec<String>,
    pub hair_colors: Vec<String>,
    pub skin_colors: Vec<String>,
    /// The language commonly spoken by this species.
    pub language: Option<String>,
    pub created: Option<String>,
    pub edited: Option<String>,

    #[graphql(skip)]
    pub homeworld_id: Option<i64>,
}

impl NodeType for Species {
    type Row = SpeciesRecord;
    const TYPE_NAME: &'static str = "species";

    fn from_row(row: SpeciesRecord) -> Self {
        Species {
            id: Self::global_id(row.id),
            name: row.name,
            classification: row.classification,
            designation: row.designation,
            average_height: row.average_height,
            average_lifespan: row.average_lifespan,
            eye_colors: json_to_vec_opt(row.eye_colors.as_deref()),
            hair_colors: json_to_vec_opt(row.hair_colors.as_deref()),
            skin_colors: json_to_vec_opt(row.skin_colors.as_deref()),
            language: row.language,
            created: format_datetime(row.created.as_deref()),
            edited: format_datetime(row.edited.as_deref()),
            homeworld_id: row.homeworld_id,
        }
    }
}

define_connection!(SpeciesConnection, SpeciesEdge, Species, species);
define_connection!(SpeciesPeopleConnection, SpeciesPeopleEdge, Person, people);
define_connection!(SpeciesFilmsConnection, SpeciesFilmsEdge, Film, films);

#[ComplexObject]
impl Species {
    /// A planet that this species originates from.
    async fn homeworld(&self, ctx: &Context<'_>) -> Result<Option<Planet>> {
        let Some(id) = self.homeworld_id else {
            return Ok(None);
        };
        let db = ctx.data::<Database>()?;
        let row = db.planets().find_by_id(id).await.map_err(repository_error)?;
        Ok(row.map(Planet::from_row))
    }

    async fn person_connection(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<SpeciesPeopleConnection> {
        let conn = ConnectionResolver::<Person>::nested(relations::people_of_species)
            .resolve(ctx, Some(&self.id), ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(SpeciesPeopleConnection::from_connection(conn))
    }

    async fn film_connection(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<SpeciesFilmsConnection> {
        let conn = ConnectionResolver::<Film>::nested(relations::films_with_species)
            .resolve(ctx, Some(&self.id), ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(SpeciesFilmsConnection::from_connection(conn))
    }
}
