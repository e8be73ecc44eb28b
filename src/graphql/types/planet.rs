//! Planet node and its connections

use async_graphql::{ComplexObject, Context, ID, Result, SimpleObject};

use crate::db::{PlanetRecord, relations, sqlite_helpers::json_to_vec_opt};
use crate::define_connection;
use crate::graphql::helpers::format_datetime;
use crate::graphql::node::NodeType;
use crate::graphql::pagination::ConnectionArgs;
use crate::graphql::resolver::ConnectionResolver;

use super::{Film, Person};

/// A large mass, planet or planetoid in the Star Wars Universe, at the time of
/// 0 ABY.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(complex)]
pub struct Planet {
    /// The ID of an object
    pub id: ID,
    /// The name of this planet.
    pub name: Option<String>,
    /// The diameter of this planet in kilometers.
    pub diameter: Option<i32>,
    /// The number of standard hours it takes for this planet to complete a
    /// single rotation on its axis.
    pub rotation_period: Option<i32>,
    /// The number of standard days it takes for this planet to complete a
    /// single orbit of its local star.
    pub orbital_period: Option<i32>,
    /// A number denoting the gravity of this planet, where "1" is normal.
    pub gravity: Option<String>,
    /// The average population of sentient beings inhabiting this planet.
    pub population: Option<f64>,
    /// The climates of this planet.
    pub climates: Vec<String>,
    /// The terrains of this planet.
    pub terrains: Vec<String>,
    /// The percentage of the planet surface that is naturally occurring water
    /// or bodies of water.
    pub surface_water: Option<f64>,
    pub created: Option<String>,
    pub edited: Option<String>,
}

impl NodeType for Planet {
    type Row = PlanetRecord;
    const TYPE_NAME: &'static str = "planets";

    fn from_row(row: PlanetRecord) -> Self {
        Planet {
            id: Self::global_id(row.id),
            name: row.name,
            diameter: row.diameter,
            rotation_period: row.rotation_period,
            orbital_period: row.orbital_period,
            gravity: row.gravity,
            population: row.population,
            climates: json_to_vec_opt(row.climates.as_deref()),
            terrains: json_to_vec_opt(row.terrains.as_deref()),
            surface_water: row.surface_water,
            created: format_datetime(row.created.as_deref()),
            edited: format_datetime(row.edited.as_deref()),
        }
    }
}

define_connection!(PlanetsConnection, PlanetsEdge, Planet, planets);
define_connection!(PlanetResidentsConnection, PlanetResidentsEdge, Person, residents);
define_connection!(PlanetFilmsConnection, PlanetFilmsEdge, Film, films);

#[ComplexObject]
impl Planet {
    async fn resident_connection(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<PlanetResidentsConnection> {
        let conn = ConnectionResolver::<Person>::nested(relations::residents_of)
            .resolve(ctx, Some(&self.id), ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(PlanetResidentsConnection::from_connection(conn))
    }

    async fn film_connection(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<PlanetFilmsConnection> {
        let conn = ConnectionResolver::<Film>::nested(relations::films_with_planet)
            .resolve(ctx, Some(&self.id), ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(PlanetFilmsConnection::from_connection(conn))
    }
}
