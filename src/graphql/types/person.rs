//! Person node and its connections

use async_graphql::{ComplexObject, Context, ID, Result, SimpleObject};

use crate::db::{Database, PersonRecord, relations};
use crate::define_connection;
use crate::graphql::error::repository_error;
use crate::graphql::helpers::format_datetime;
use crate::graphql::node::NodeType;
use crate::graphql::pagination::ConnectionArgs;
use crate::graphql::resolver::ConnectionResolver;

use super::{Film, Planet, Species, Starship, Vehicle};

/// An individual person or character within the Star Wars universe.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(complex)]
pub struct Person {
    /// The ID of an object
    pub id: ID,
    /// The name of this person.
    pub name: Option<String>,
    /// The birth year of the person, using the in-universe standard of BBY or ABY.
    pub birth_year: Option<String>,
    /// The eye color of this person.
    pub eye_color: Option<String>,
    /// The gender of this person.
    pub gender: Option<String>,
    /// The hair color of this person.
    pub hair_color: Option<String>,
    /// The height of the person in centimeters.
    pub height: Option<i32>,
    /// The mass of the person in kilograms.
    pub mass: Option<f64>,
    /// The skin color of this person.
    pub skin_color: Option<String>,
    pub created: Option<String>,
    pub edited: Option<String>,

    #[graphql(skip)]
    pub homeworld_id: Option<i64>,
    #[graphql(skip)]
    pub species_id: Option<i64>,
}

impl NodeType for Person {
    type Row = PersonRecord;
    const TYPE_NAME: &'static str = "people";

    fn from_row(row: PersonRecord) -> Self {
        Person {
            id: Self::global_id(row.id),
            name: row.name,
            birth_year: row.birth_year,
            eye_color: row.eye_color,
            gender: row.gender,
            hair_color: row.hair_color,
            height: row.height,
            mass: row.mass,
            skin_color: row.skin_color,
            created: format_datetime(row.created.as_deref()),
            edited: format_datetime(row.edited.as_deref()),
            homeworld_id: row.homeworld_id,
            species_id: row.species_id,
        }
    }
}

define_connection!(PeopleConnection, PeopleEdge, Person, people);
define_connection!(PersonFilmsConnection, PersonFilmsEdge, Film, films);
define_connection!(PersonStarshipsConnection, PersonStarshipsEdge, Starship, starships);
define_connection!(PersonVehiclesConnection, PersonVehiclesEdge, Vehicle, vehicles);

#[ComplexObject]
impl Person {
    /// A planet that this person was born on or inhabits.
    async fn homeworld(&self, ctx: &Context<'_>) -> Result<Option<Planet>> {
        let Some(id) = self.homeworld_id else {
            return Ok(None);
        };
        let db = ctx.data::<Database>()?;
        let row = db.planets().find_by_id(id).await.map_err(repository_error)?;
        Ok(row.map(Planet::from_row))
    }

    /// The species that this person belongs to, or null if unknown.
    async fn species(&self, ctx: &Context<'_>) -> Result<Option<Species>> {
        let Some(id) = self.species_id else {
            return Ok(None);
        };
        let db = ctx.data::<Database>()?;
        let row = db.species().find_by_id(id).await.map_err(repository_error)?;
        Ok(row.map(Species::from_row))
    }

    async fn film_connection(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<PersonFilmsConnection> {
        let conn = ConnectionResolver::<Film>::nested(relations::films_with_character)
            .resolve(ctx, Some(&self.id), ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(PersonFilmsConnection::from_connection(conn))
    }

    async fn starship_connection(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<PersonStarshipsConnection> {
        let conn = ConnectionResolver::<Starship>::nested(relations::starships_piloted_by)
            .resolve(ctx, Some(&self.id), ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(PersonStarshipsConnection::from_connection(conn))
    }

    async fn vehicle_connection(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<PersonVehiclesConnection> {
        let conn = ConnectionResolver::<Vehicle>::nested(relations::vehicles_piloted_by)
            .resolve(ctx, Some(&self.id), ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(PersonVehiclesConnection::from_connection(conn))
    }
}
