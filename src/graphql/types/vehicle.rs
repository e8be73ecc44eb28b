//! Vehicle node and its connections

use async_graphql::{ComplexObject, Context, ID, Result, SimpleObject};

use crate::db::{VehicleRecord, relations, sqlite_helpers::json_to_vec_opt};
use crate::define_connection;
use crate::graphql::helpers::format_datetime;
use crate::graphql::node::NodeType;
use crate::graphql::pagination::ConnectionArgs;
use crate::graphql::resolver::ConnectionResolver;

use super::{Film, Person};

/// A single transport craft that does not have hyperdrive capability
#[derive(SimpleObject, Debug, Clone)]
#[graphql(complex)]
pub struct Vehicle {
    /// The ID of an object
    pub id: ID,
    pub name: Option<String>,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturers: Vec<String>,
    pub cost_in_credits: Option<f64>,
    pub length: Option<f64>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<i32>,
    pub cargo_capacity: Option<f64>,
    pub consumables: Option<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
}

impl NodeType for Vehicle {
    type Row = VehicleRecord;
    const TYPE_NAME: &'static str = "vehicles";

    fn from_row(row: VehicleRecord) -> Self {
        Vehicle {
            id: Self::global_id(row.id),
            name: row.name,
            model: row.model,
            vehicle_class: row.vehicle_class,
            manufacturers: json_to_vec_opt(row.manufacturers.as_deref()),
            cost_in_credits: row.cost_in_credits,
            length: row.length,
            crew: row.crew,
            passengers: row.passengers,
            max_atmosphering_speed: row.max_atmosphering_speed,
            cargo_capacity: row.cargo_capacity,
            consumables: row.consumables,
            created: format_datetime(row.created.as_deref()),
            edited: format_datetime(row.edited.as_deref()),
        }
    }
}

define_connection!(VehiclesConnection, VehiclesEdge, Vehicle, vehicles);
define_connection!(VehiclePilotsConnection, VehiclePilotsEdge, Person, pilots);
define_connection!(VehicleFilmsConnection, VehicleFilmsEdge, Film, films);

#[ComplexObject]
impl Vehicle {
    async fn pilot_connection(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<VehiclePilotsConnection> {
        let conn = ConnectionResolver::<Person>::nested(relations::pilots_of_vehicle)
            .resolve(ctx, Some(&self.id), ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(VehiclePilotsConnection::from_connection(conn))
    }

    async fn film_connection(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<VehicleFilmsConnection> {
        let conn = ConnectionResolver::<Film>::nested(relations::films_with_vehicle)
            .resolve(ctx, Some(&self.id), ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(VehicleFilmsConnection::from_connection(conn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_defaults_missing_lists() {
        let vehicle = Vehicle::from_row(VehicleRecord {
            id: 4,
            name: Some("Sand Crawler".to_string()),
            model: Some("Digger Crawler".to_string()),
            vehicle_class: Some("wheeled".to_string()),
            manufacturers: None,
            cost_in_credits: Some(150000.0),
            length: Some(36.8),
            crew: Some("46".to_string()),
            passengers: Some("30".to_string()),
            max_atmosphering_speed: Some(30),
            cargo_capacity: Some(50000.0),
            consumables: Some("2 months".to_string()),
            created: Some("2014-12-10T15:36:25.724000Z".to_string()),
            edited: None,
        });

        assert!(vehicle.manufacturers.is_empty());
        assert_eq!(vehicle.created.as_deref(), Some("2014-12-10T15:36:25.724000Z"));
    }
}
