use super::prelude::*;

#[derive(Default)]
pub struct PersonQueries;

#[Object]
impl PersonQueries {
    /// Every character in the dataset
    async fn all_people(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<PeopleConnection> {
        let conn = ConnectionResolver::<Person>::root()
            .resolve(ctx, None, ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(PeopleConnection::from_connection(conn))
    }

    async fn person(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        #[graphql(name = "personID")] person_id: Option<ID>,
    ) -> Result<Option<Person>> {
        fetch_node(ctx, id, person_id).await
    }
}
