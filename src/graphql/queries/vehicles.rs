use super::prelude::*;

#[derive(Default)]
pub struct VehicleQueries;

#[Object]
impl VehicleQueries {
    async fn all_vehicles(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<VehiclesConnection> {
        let conn = ConnectionResolver::<Vehicle>::root()
            .resolve(ctx, None, ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(VehiclesConnection::from_connection(conn))
    }

    async fn vehicle(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        #[graphql(name = "vehicleID")] vehicle_id: Option<ID>,
    ) -> Result<Option<Vehicle>> {
        fetch_node(ctx, id, vehicle_id).await
    }
}
