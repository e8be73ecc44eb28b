use super::prelude::*;

#[derive(Default)]
pub struct FilmQueries;

#[Object]
impl FilmQueries {
    /// All films, oldest id first
    async fn all_films(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<FilmsConnection> {
        let conn = ConnectionResolver::<Film>::root()
            .resolve(ctx, None, ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(FilmsConnection::from_connection(conn))
    }

    /// Look up a film by Global ID or by its numeric `filmID`
    async fn film(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        #[graphql(name = "filmID")] film_id: Option<ID>,
    ) -> Result<Option<Film>> {
        fetch_node(ctx, id, film_id).await
    }
}
