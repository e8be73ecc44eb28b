//! Connection resolver factory
//!
//! A [`ConnectionResolver`] is configured once per connection field with the
//! target node type and, for nested fields, how to derive the relation filter
//! from the parent node. At query time it pulls the [`Database`] out of the
//! schema data and delegates to [`build_connection`].
//!
//! ```rust,ignore
//! #[ComplexObject]
//! impl Person {
//!     async fn starship_connection(&self, ctx: &Context<'_>, ...) -> Result<PersonStarshipsConnection> {
//!         let conn = ConnectionResolver::<Starship>::nested(relations::starships_piloted_by)
//!             .resolve(ctx, Some(&self.id), args)
//!             .await?;
//!         Ok(PersonStarshipsConnection::from_connection(conn))
//!     }
//! }
//! ```

use std::marker::PhantomData;

use async_graphql::{Context, ErrorExtensions, ID, Result};

use crate::db::{Database, Entity, RelationFilter};

use super::error::ConnectionError;
use super::global_id::{self, CursorFormat};
use super::node::NodeType;
use super::pagination::{Connection, ConnectionArgs, build_connection};

/// Derives the relation filter for a nested connection from the parent's id
pub type FilterFn = fn(i64) -> RelationFilter;

/// Resolver for one connection field of node type `N`
pub struct ConnectionResolver<N> {
    derive_filter: Option<FilterFn>,
    cursor_format: CursorFormat,
    _node: PhantomData<fn() -> N>,
}

impl<N> Clone for ConnectionResolver<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for ConnectionResolver<N> {}

impl<N> ConnectionResolver<N>
where
    N: NodeType,
    N::Row: Entity,
{
    /// Root connection over the whole table
    pub fn root() -> Self {
        Self {
            derive_filter: None,
            cursor_format: CursorFormat::default(),
            _node: PhantomData,
        }
    }

    /// Nested connection restricted to rows related to the parent node
    pub fn nested(derive_filter: FilterFn) -> Self {
        Self {
            derive_filter: Some(derive_filter),
            ..Self::root()
        }
    }

    pub fn with_cursor_format(mut self, cursor_format: CursorFormat) -> Self {
        self.cursor_format = cursor_format;
        self
    }

    /// Relation filter for this invocation.
    ///
    /// The parent's id is always a Global ID; its type component is ignored.
    pub fn filter_for(&self, parent: Option<&ID>) -> Result<RelationFilter, ConnectionError> {
        match (self.derive_filter, parent) {
            (None, _) => Ok(RelationFilter::All),
            (Some(derive), Some(parent)) => Ok(derive(global_id::decode(parent.as_str())?)),
            (Some(_), None) => Err(ConnectionError::InvalidArgument(format!(
                "nested {} connection resolved without a parent node",
                N::TYPE_NAME
            ))),
        }
    }

    /// Resolve against an explicit database handle
    pub async fn resolve_with(
        &self,
        db: &Database,
        parent: Option<&ID>,
        args: &ConnectionArgs,
    ) -> Result<Connection<N>, ConnectionError> {
        let filter = self.filter_for(parent)?;
        let repo = db.table::<N::Row>();
        build_connection::<_, N>(&repo, &filter, args, self.cursor_format).await
    }

    /// Resolve using the database stored in the schema data
    pub async fn resolve(
        &self,
        ctx: &Context<'_>,
        parent: Option<&ID>,
        args: ConnectionArgs,
    ) -> Result<Connection<N>> {
        let db = ctx.data::<Database>()?;
        self.resolve_with(db, parent, &args)
            .await
            .map_err(|e| e.extend())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::db::relations;
    use crate::graphql::types::{Person, Starship};

    async fn seeded() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        for id in 1..=4 {
            sqlx::query("INSERT INTO people (id, name) VALUES (?, ?)")
                .bind(id)
                .bind(format!("Pilot {}", id))
                .execute(db.pool())
                .await
                .unwrap();
        }
        for id in [5, 9, 10, 12] {
            sqlx::query("INSERT INTO starships (id, name) VALUES (?, ?)")
                .bind(id)
                .bind(format!("Ship {}", id))
                .execute(db.pool())
                .await
                .unwrap();
        }
        for (ship, pilot) in [(9, 1), (10, 1), (12, 1), (5, 2)] {
            sqlx::query("INSERT INTO starship_pilots (starship_id, person_id) VALUES (?, ?)")
                .bind(ship)
                .bind(pilot)
                .execute(db.pool())
                .await
                .unwrap();
        }
        db
    }

    fn first(n: i32) -> ConnectionArgs {
        ConnectionArgs {
            first: Some(n),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_root_resolver_pages_whole_table() {
        let db = seeded().await;
        let conn = ConnectionResolver::<Person>::root()
            .resolve_with(&db, None, &first(3))
            .await
            .unwrap();

        assert_eq!(conn.total_count, 4);
        assert_eq!(conn.edges.len(), 3);
        assert!(conn.page_info.has_next_page);
        assert_eq!(conn.edges[0].cursor, global_id::encode("people", 1));
    }

    #[tokio::test]
    async fn test_nested_resolver_scopes_to_parent() {
        let db = seeded().await;
        let resolver = ConnectionResolver::<Starship>::nested(relations::starships_piloted_by);
        let parent = Person::global_id(1);

        let conn = resolver
            .resolve_with(&db, Some(&parent), &first(2))
            .await
            .unwrap();
        let names: Vec<_> = conn.nodes().into_iter().filter_map(|s| s.name).collect();
        assert_eq!(names, vec!["Ship 9", "Ship 10"]);
        assert_eq!(conn.total_count, 3);
        assert!(conn.page_info.has_next_page);

        let args = ConnectionArgs {
            first: Some(2),
            after: conn.page_info.end_cursor.clone(),
            ..Default::default()
        };
        let next = resolver.resolve_with(&db, Some(&parent), &args).await.unwrap();
        assert_eq!(next.edges.len(), 1);
        assert_eq!(next.edges[0].cursor, global_id::encode("starships", 12));
        assert!(!next.page_info.has_next_page);
    }

    #[tokio::test]
    async fn test_cursor_outside_relation_skips_nothing() {
        let db = seeded().await;
        let resolver = ConnectionResolver::<Starship>::nested(relations::starships_piloted_by);
        let args = ConnectionArgs {
            first: Some(5),
            // Ship 5 belongs to pilot 2
            after: Some(global_id::encode("starships", 5)),
            ..Default::default()
        };
        let conn = resolver
            .resolve_with(&db, Some(&Person::global_id(1)), &args)
            .await
            .unwrap();
        assert_eq!(conn.edges.len(), 3);
    }

    #[tokio::test]
    async fn test_nested_resolver_needs_parent() {
        let db = seeded().await;
        let resolver = ConnectionResolver::<Starship>::nested(relations::starships_piloted_by);
        let result = resolver.resolve_with(&db, None, &first(1)).await;
        assert_matches!(result, Err(ConnectionError::InvalidArgument(_)));

        let bad_parent = ID::from("%%%");
        let result = resolver.resolve_with(&db, Some(&bad_parent), &first(1)).await;
        assert_matches!(result, Err(ConnectionError::InvalidCursor(_)));
    }

    #[tokio::test]
    async fn test_raw_cursor_resolver() {
        let db = seeded().await;
        let conn = ConnectionResolver::<Person>::root()
            .with_cursor_format(CursorFormat::RawId)
            .resolve_with(&db, None, &first(2))
            .await
            .unwrap();
        assert_eq!(conn.page_info.end_cursor.as_deref(), Some("2"));
    }

    #[test]
    fn test_root_filter_ignores_parent() {
        let resolver = ConnectionResolver::<Person>::root();
        let parent = ID::from(global_id::encode("films", 1));
        assert_eq!(resolver.filter_for(Some(&parent)).unwrap(), RelationFilter::All);
    }
}
