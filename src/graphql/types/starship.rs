//! Starship node and its connections

use async_graphql::{ComplexObject, Context, ID, Result, SimpleObject};

use crate::db::{StarshipRecord, relations, sqlite_helpers::json_to_vec_opt};
use crate::define_connection;
use crate::graphql::helpers::format_datetime;
use crate::graphql::node::NodeType;
use crate::graphql::pagination::ConnectionArgs;
use crate::graphql::resolver::ConnectionResolver;

use super::{Film, Person};

/// A single transport craft that has hyperdrive capability.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(complex)]
pub struct Starship {
    /// The ID of an object
    pub id: ID,
    /// The name of this starship. The common name, such as "Death Star".
    pub name: Option<String>,
    /// The model or official name of this starship.
    pub model: Option<String>,
    /// The class of this starship, such as "Starfighter" or "Deep Space Mobile
    /// Battlestation"
    pub starship_class: Option<String>,
    /// The manufacturers of this starship.
    pub manufacturers: Vec<String>,
    /// The cost of this starship new, in galactic credits.
    pub cost_in_credits: Option<f64>,
    /// The length of this starship in meters.
    pub length: Option<f64>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    /// The maximum speed of this starship in atmosphere. null if this starship
    /// is incapable of atmosphering flight.
    pub max_atmosphering_speed: Option<i32>,
    /// The class of this starships hyperdrive.
    pub hyperdrive_rating: Option<f64>,
    /// The Maximum number of Megalights this starship can travel in a standard
    /// hour.
    #[graphql(name = "MGLT")]
    pub mglt: Option<i32>,
    /// The maximum number of kilograms that this starship can transport.
    pub cargo_capacity: Option<f64>,
    /// The maximum length of time that this starship can provide consumables
    /// for its entire crew without having to resupply.
    pub consumables: Option<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
}

impl NodeType for Starship {
    type Row = StarshipRecord;
    const TYPE_NAME: &'static str = "starships";

    fn from_row(row: StarshipRecord) -> Self {
        Starship {
            id: Self::global_id(row.id),
            name: row.name,
            model: row.model,
            starship_class: row.starship_class,
            manufacturers: json_to_vec_opt(row.manufacturers.as_deref()),
            cost_in_credits: row.cost_in_credits,
            length: row.length,
            crew: row.crew,
            passengers: row.passengers,
            max_atmosphering_speed: row.max_atmosphering_speed,
            hyperdrive_rating: row.hyperdrive_rating,
            mglt: row.mglt,
            cargo_capacity: row.cargo_capacity,
            consumables: row.consumables,
            created: format_datetime(row.created.as_deref()),
            edited: format_datetime(row.edited.as_deref()),
        }
    }
}

define_connection!(StarshipsConnection, StarshipsEdge, Starship, starships);
define_connection!(StarshipPilotsConnection, StarshipPilotsEdge, Person, pilots);
define_connection!(StarshipFilmsConnection, StarshipFilmsEdge, Film, films);

#[ComplexObject]
impl Starship {
    async fn pilot_connection(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<StarshipPilotsConnection> {
        let conn = ConnectionResolver::<Person>::nested(relations::pilots_of_starship)
            .resolve(ctx, Some(&self.id), ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(StarshipPilotsConnection::from_connection(conn))
    }

    async fn film_connection(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<StarshipFilmsConnection> {
        let conn = ConnectionResolver::<Film>::nested(relations::films_with_starship)
            .resolve(ctx, Some(&self.id), ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(StarshipFilmsConnection::from_connection(conn))
    }
}
