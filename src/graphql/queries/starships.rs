use super::prelude::*;

#[derive(Default)]
pub struct StarshipQueries;

#[Object]
impl StarshipQueries {
    async fn all_starships(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<StarshipsConnection> {
        let conn = ConnectionResolver::<Starship>::root()
            .resolve(ctx, None, ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(StarshipsConnection::from_connection(conn))
    }

    async fn starship(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        #[graphql(name = "starshipID")] starship_id: Option<ID>,
    ) -> Result<Option<Starship>> {
        fetch_node(ctx, id, starship_id).await
    }
}
