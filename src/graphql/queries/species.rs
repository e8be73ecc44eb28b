use super::prelude::*;

#[derive(Default)]
pub struct SpeciesQueries;

#[Object]
impl SpeciesQueries {
    async fn all_species(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<SpeciesConnection> {
        let conn = ConnectionResolver::<Species>::root()
            .resolve(ctx, None, ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(SpeciesConnection::from_connection(conn))
    }

    async fn species(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        #[graphql(name = "speciesID")] species_id: Option<ID>,
    ) -> Result<Option<Species>> {
        fetch_node(ctx, id, species_id).await
    }
}
