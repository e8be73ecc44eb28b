//! Root query fields, one struct per entity merged into `QueryRoot`

pub mod films;
pub mod people;
pub mod planets;
pub mod species;
pub mod starships;
pub mod vehicles;

pub use films::FilmQueries;
pub use people::PersonQueries;
pub use planets::PlanetQueries;
pub use species::SpeciesQueries;
pub use starships::StarshipQueries;
pub use vehicles::VehicleQueries;

use async_graphql::{Context, ErrorExtensions, ID, Result};

use crate::db::{Database, Entity};
use crate::graphql::error::repository_error;
use crate::graphql::helpers::lookup_id;
use crate::graphql::node::NodeType;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, ID, Object, Result};

    pub(crate) use crate::graphql::pagination::ConnectionArgs;
    pub(crate) use crate::graphql::resolver::ConnectionResolver;
    pub(crate) use crate::graphql::types::*;

    pub(crate) use super::fetch_node;
}

/// Single-node lookup by Global ID or raw id; a missing row is `None`
pub(crate) async fn fetch_node<N>(
    ctx: &Context<'_>,
    id: Option<ID>,
    raw_id: Option<ID>,
) -> Result<Option<N>>
where
    N: NodeType,
    N::Row: Entity,
{
    let key = lookup_id(id.as_ref(), raw_id.as_ref()).map_err(|e| e.extend())?;
    let db = ctx.data::<Database>()?;
    let row = db
        .table::<N::Row>()
        .find_by_id(key)
        .await
        .map_err(repository_error)?;
    Ok(row.map(N::from_row))
}
