use super::prelude::*;

#[derive(Default)]
pub struct PlanetQueries;

#[Object]
impl PlanetQueries {
    async fn all_planets(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<PlanetsConnection> {
        let conn = ConnectionResolver::<Planet>::root()
            .resolve(ctx, None, ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(PlanetsConnection::from_connection(conn))
    }

    async fn planet(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        #[graphql(name = "planetID")] planet_id: Option<ID>,
    ) -> Result<Option<Planet>> {
        fetch_node(ctx, id, planet_id).await
    }
}
