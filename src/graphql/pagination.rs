//! Cursor-based pagination types for GraphQL
//!
//! Implements the Relay Connection shape (`pageInfo`, `edges`, `totalCount`
//! and a flat node list) on top of the [`Repository`] capability.
//!
//! Every resolution costs exactly one `count` and one `find_many`. The scan
//! asks for one row more than the page size; whether that extra row comes
//! back is the only signal used for `hasNextPage` / `hasPreviousPage`.
//!
//! Usage: Use the `define_connection!` macro to create type-specific connections.

use async_graphql::SimpleObject;

use crate::db::{FindMany, PrimaryKey, RelationFilter, Repository, SortDirection};

use super::error::ConnectionError;
use super::global_id::CursorFormat;
use super::node::NodeType;

/// Page size when neither `first` nor `last` is given
pub const DEFAULT_PAGE_SIZE: i64 = 30;

/// Information about pagination in a connection
#[derive(SimpleObject, Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// When paginating forwards, are there more items?
    pub has_next_page: bool,
    /// When paginating backwards, are there more items?
    pub has_previous_page: bool,
    /// Cursor of the first item in this page
    pub start_cursor: Option<String>,
    /// Cursor of the last item in this page
    pub end_cursor: Option<String>,
}

/// An edge in a connection, containing a node and cursor (internal use)
#[derive(Debug, Clone)]
pub struct Edge<T> {
    /// The item at the end of the edge
    pub node: T,
    /// A cursor for pagination
    pub cursor: String,
}

/// A paginated connection result (internal use)
#[derive(Debug, Clone)]
pub struct Connection<T> {
    /// Pagination information
    pub page_info: PageInfo,
    /// The edges in this connection
    pub edges: Vec<Edge<T>>,
    /// Rows matching the filter, ignoring pagination
    pub total_count: i64,
}

impl<T: Clone> Connection<T> {
    /// Nodes of this page, parallel to `edges`
    pub fn nodes(&self) -> Vec<T> {
        self.edges.iter().map(|e| e.node.clone()).collect()
    }
}

/// Macro to define a GraphQL connection type for a specific entity
///
/// The last argument names the flat node list exposed next to `edges`.
///
/// Usage:
/// ```ignore
/// define_connection!(PersonStarshipsConnection, PersonStarshipsEdge, Starship, starships);
/// ```
#[macro_export]
macro_rules! define_connection {
    ($conn_name:ident, $edge_name:ident, $node_type:ty, $plural:ident) => {
        /// An edge in a connection.
        #[derive(async_graphql::SimpleObject, Debug, Clone)]
        pub struct $edge_name {
            /// The item at the end of the edge
            pub node: $node_type,
            /// A cursor for use in pagination
            pub cursor: String,
        }

        /// A connection to a list of items.
        #[derive(async_graphql::SimpleObject, Debug, Clone)]
        pub struct $conn_name {
            /// Information to aid in pagination.
            pub page_info: $crate::graphql::pagination::PageInfo,
            /// A list of edges.
            pub edges: Vec<$edge_name>,
            /// A count of the total number of objects in this connection, ignoring pagination.
            pub total_count: i64,
            /// A list of all of the objects returned in the connection.
            pub $plural: Vec<$node_type>,
        }

        impl $conn_name {
            /// Create from a generic Connection
            pub fn from_connection(
                conn: $crate::graphql::pagination::Connection<$node_type>,
            ) -> Self {
                let $plural = conn.nodes();
                Self {
                    page_info: conn.page_info,
                    edges: conn
                        .edges
                        .into_iter()
                        .map(|e| $edge_name {
                            node: e.node,
                            cursor: e.cursor,
                        })
                        .collect(),
                    total_count: conn.total_count,
                    $plural,
                }
            }
        }
    };
}

/// Relay pagination arguments as received from the field
#[derive(Debug, Clone, Default)]
pub struct ConnectionArgs {
    pub after: Option<String>,
    pub first: Option<i32>,
    pub before: Option<String>,
    pub last: Option<i32>,
}

/// Which end of the ordered result set a page is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `first` / `after`
    Forward,
    /// `last` / `before`
    Backward,
}

/// Validated pagination arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub direction: Direction,
    pub size: i64,
    pub cursor: Option<i64>,
}

impl PageRequest {
    /// Signed row count for the repository, including the overfetch probe
    pub fn take(&self) -> i64 {
        match self.direction {
            Direction::Forward => self.size + 1,
            Direction::Backward => -(self.size + 1),
        }
    }

    /// The cursor row itself is never part of the page
    pub fn skip(&self) -> i64 {
        if self.cursor.is_some() { 1 } else { 0 }
    }
}

impl ConnectionArgs {
    pub fn new(
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Self {
        Self {
            after,
            first,
            before,
            last,
        }
    }

    /// Resolve direction, page size and cursor.
    ///
    /// `first` wins when both `first` and `last` are given. Every supplied
    /// cursor must decode, including one the chosen direction ignores.
    pub fn page_request(&self, format: CursorFormat) -> Result<PageRequest, ConnectionError> {
        for (name, value) in [("first", self.first), ("last", self.last)] {
            if let Some(n) = value {
                if n < 0 {
                    return Err(ConnectionError::InvalidArgument(format!(
                        "`{}` must be non-negative, got {}",
                        name, n
                    )));
                }
            }
        }

        let after = self.after.as_deref().map(|c| format.decode(c)).transpose()?;
        let before = self.before.as_deref().map(|c| format.decode(c)).transpose()?;

        match (self.first, self.last) {
            (_, None) | (Some(_), Some(_)) => {
                if self.last.is_some() {
                    tracing::debug!("Both first and last supplied, paging forward");
                }
                Ok(PageRequest {
                    direction: Direction::Forward,
                    size: self.first.map(i64::from).unwrap_or(DEFAULT_PAGE_SIZE),
                    cursor: after,
                })
            }
            (None, Some(last)) => Ok(PageRequest {
                direction: Direction::Backward,
                size: i64::from(last),
                cursor: before,
            }),
        }
    }
}

/// Run one paginated read against `repo` and assemble the connection.
pub async fn build_connection<R, N>(
    repo: &R,
    filter: &RelationFilter,
    args: &ConnectionArgs,
    format: CursorFormat,
) -> Result<Connection<N>, ConnectionError>
where
    R: Repository,
    R::Row: PrimaryKey,
    N: NodeType<Row = R::Row>,
{
    let request = args.page_request(format)?;

    let total_count = repo.count(filter).await?;
    let mut rows = repo
        .find_many(FindMany {
            filter,
            cursor: request.cursor,
            take: request.take(),
            skip: request.skip(),
            order: SortDirection::Asc,
        })
        .await?;

    let size = usize::try_from(request.size).unwrap_or(usize::MAX);
    let overflow = rows.len() > size;
    let (has_next_page, has_previous_page) = match request.direction {
        Direction::Forward => {
            rows.truncate(size);
            (overflow, false)
        }
        Direction::Backward => {
            // Backward pages are ascending, so the probe row is at the front
            if overflow {
                rows.drain(..rows.len() - size);
            }
            (false, overflow)
        }
    };

    tracing::debug!(
        entity = N::TYPE_NAME,
        direction = ?request.direction,
        take = request.take(),
        cursor = ?request.cursor,
        page_size = rows.len(),
        total_count,
        "Resolved connection page"
    );

    let edges: Vec<Edge<N>> = rows
        .into_iter()
        .map(|row| {
            let cursor = format.encode(N::TYPE_NAME, row.primary_key());
            Edge {
                node: N::from_row(row),
                cursor,
            }
        })
        .collect();

    let page_info = PageInfo {
        has_next_page,
        has_previous_page,
        start_cursor: edges.first().map(|e| e.cursor.clone()),
        end_cursor: edges.last().map(|e| e.cursor.clone()),
    };

    Ok(Connection {
        page_info,
        edges,
        total_count,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graphql::global_id::{self, GlobalIdError};

    #[derive(Debug, Clone)]
    struct Row {
        id: i64,
        group: i64,
    }

    impl PrimaryKey for Row {
        fn primary_key(&self) -> i64 {
            self.id
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Thing {
        id: String,
        group: i64,
    }

    impl NodeType for Thing {
        type Row = Row;
        const TYPE_NAME: &'static str = "things";

        fn from_row(row: Row) -> Self {
            Thing {
                id: global_id::encode(Self::TYPE_NAME, row.id),
                group: row.group,
            }
        }
    }

    /// Vec-backed repository with the same scan semantics as the SQL one
    struct MemoryRepository {
        rows: Vec<Row>,
        calls: AtomicUsize,
    }

    impl MemoryRepository {
        fn with_ids(ids: impl IntoIterator<Item = i64>) -> Self {
            Self {
                rows: ids.into_iter().map(|id| Row { id, group: id % 2 }).collect(),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn matching(&self, filter: &RelationFilter) -> Vec<Row> {
            let mut rows: Vec<Row> = self
                .rows
                .iter()
                .filter(|r| match filter {
                    RelationFilter::All => true,
                    RelationFilter::Column { id, .. } => r.group == *id,
                    RelationFilter::Linked { .. } => false,
                })
                .cloned()
                .collect();
            rows.sort_by_key(|r| r.id);
            rows
        }
    }

    #[async_trait]
    impl Repository for MemoryRepository {
        type Row = Row;

        async fn count(&self, filter: &RelationFilter) -> Result<i64, sqlx::Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.matching(filter).len() as i64)
        }

        async fn find_many(&self, query: FindMany<'_>) -> Result<Vec<Row>, sqlx::Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut rows = self.matching(query.filter);
            let exclusive = query.skip > 0;
            let n = query.take.unsigned_abs() as usize;

            if query.take >= 0 {
                if let Some(c) = query.cursor {
                    rows.retain(|r| if exclusive { r.id > c } else { r.id >= c });
                }
                rows.truncate(n);
                Ok(rows)
            } else {
                if let Some(c) = query.cursor {
                    rows.retain(|r| if exclusive { r.id < c } else { r.id <= c });
                }
                let start = rows.len().saturating_sub(n);
                Ok(rows.split_off(start))
            }
        }
    }

    fn cursor(id: i64) -> String {
        global_id::encode("things", id)
    }

    fn forward(first: Option<i32>, after: Option<i64>) -> ConnectionArgs {
        ConnectionArgs {
            first,
            after: after.map(cursor),
            ..Default::default()
        }
    }

    fn backward(last: i32, before: Option<i64>) -> ConnectionArgs {
        ConnectionArgs {
            last: Some(last),
            before: before.map(cursor),
            ..Default::default()
        }
    }

    async fn page(repo: &MemoryRepository, args: ConnectionArgs) -> Connection<Thing> {
        build_connection(repo, &RelationFilter::All, &args, CursorFormat::GlobalId)
            .await
            .unwrap()
    }

    fn ids(conn: &Connection<Thing>) -> Vec<i64> {
        conn.edges
            .iter()
            .map(|e| global_id::decode(&e.cursor).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_first_page() {
        let repo = MemoryRepository::with_ids(1..=5);
        let conn = page(&repo, forward(Some(2), None)).await;

        assert_eq!(ids(&conn), vec![1, 2]);
        assert!(conn.page_info.has_next_page);
        assert!(!conn.page_info.has_previous_page);
        assert_eq!(conn.total_count, 5);
        assert_eq!(conn.page_info.start_cursor, Some(cursor(1)));
        assert_eq!(conn.page_info.end_cursor, Some(cursor(2)));
        assert_eq!(repo.calls(), 2);
    }

    #[tokio::test]
    async fn test_after_cursor() {
        let repo = MemoryRepository::with_ids(1..=5);

        let conn = page(&repo, forward(Some(2), Some(2))).await;
        assert_eq!(ids(&conn), vec![3, 4]);
        assert!(conn.page_info.has_next_page);

        let conn = page(&repo, forward(Some(2), Some(4))).await;
        assert_eq!(ids(&conn), vec![5]);
        assert!(!conn.page_info.has_next_page);
        assert!(!conn.page_info.has_previous_page);
    }

    #[tokio::test]
    async fn test_exact_fit_has_no_next_page() {
        let repo = MemoryRepository::with_ids(1..=5);
        let conn = page(&repo, forward(Some(5), None)).await;
        assert_eq!(ids(&conn), vec![1, 2, 3, 4, 5]);
        assert!(!conn.page_info.has_next_page);
    }

    #[tokio::test]
    async fn test_default_page_size() {
        let repo = MemoryRepository::with_ids(1..=35);
        let conn = page(&repo, ConnectionArgs::default()).await;
        assert_eq!(conn.edges.len(), DEFAULT_PAGE_SIZE as usize);
        assert!(conn.page_info.has_next_page);
        assert_eq!(conn.total_count, 35);
    }

    #[tokio::test]
    async fn test_forward_continuation_visits_every_row_once() {
        let repo = MemoryRepository::with_ids([2, 3, 5, 7, 11, 13, 17]);
        let mut seen = Vec::new();
        let mut after = None;
        let mut pages = 0;

        loop {
            let conn = page(&repo, forward(Some(3), after)).await;
            pages += 1;
            seen.extend(ids(&conn));
            if !conn.page_info.has_next_page {
                break;
            }
            after = conn
                .page_info
                .end_cursor
                .map(|c| global_id::decode(&c).unwrap());
        }

        assert_eq!(seen, vec![2, 3, 5, 7, 11, 13, 17]);
        assert_eq!(pages, 3);
    }

    #[tokio::test]
    async fn test_backward_pages() {
        let repo = MemoryRepository::with_ids(1..=5);

        let conn = page(&repo, backward(2, None)).await;
        assert_eq!(ids(&conn), vec![4, 5]);
        assert!(conn.page_info.has_previous_page);
        assert!(!conn.page_info.has_next_page);

        let conn = page(&repo, backward(2, Some(4))).await;
        assert_eq!(ids(&conn), vec![2, 3]);
        assert!(conn.page_info.has_previous_page);

        let conn = page(&repo, backward(2, Some(3))).await;
        assert_eq!(ids(&conn), vec![1, 2]);
        assert!(!conn.page_info.has_previous_page);
        assert_eq!(conn.total_count, 5);
    }

    #[tokio::test]
    async fn test_zero_sized_pages_still_probe() {
        let repo = MemoryRepository::with_ids(1..=5);

        let conn = page(&repo, forward(Some(0), None)).await;
        assert!(conn.edges.is_empty());
        assert!(conn.page_info.has_next_page);
        assert_eq!(conn.page_info.start_cursor, None);
        assert_eq!(conn.page_info.end_cursor, None);

        let conn = page(&repo, forward(Some(0), Some(5))).await;
        assert!(!conn.page_info.has_next_page);

        let conn = page(&repo, backward(0, None)).await;
        assert!(conn.edges.is_empty());
        assert!(conn.page_info.has_previous_page);
    }

    #[tokio::test]
    async fn test_empty_result_set() {
        let repo = MemoryRepository::with_ids(1..=5);
        let filter = RelationFilter::Column {
            column: "group",
            id: 7,
        };
        let conn: Connection<Thing> =
            build_connection(&repo, &filter, &forward(Some(3), None), CursorFormat::GlobalId)
                .await
                .unwrap();

        assert_eq!(conn.total_count, 0);
        assert!(conn.edges.is_empty());
        assert_eq!(conn.page_info, PageInfo::default());
    }

    #[tokio::test]
    async fn test_filter_applies_to_count_and_page() {
        let repo = MemoryRepository::with_ids(1..=9);
        let odd = RelationFilter::Column {
            column: "group",
            id: 1,
        };
        let conn: Connection<Thing> =
            build_connection(&repo, &odd, &forward(Some(2), Some(3)), CursorFormat::GlobalId)
                .await
                .unwrap();

        assert_eq!(ids(&conn), vec![5, 7]);
        assert_eq!(conn.total_count, 5);
        assert!(conn.page_info.has_next_page);
        assert!(conn.nodes().iter().all(|n| n.group == 1));
    }

    #[tokio::test]
    async fn test_total_count_ignores_pagination() {
        let repo = MemoryRepository::with_ids(1..=8);
        for args in [
            forward(Some(1), None),
            forward(Some(3), Some(6)),
            forward(None, Some(8)),
            backward(2, Some(2)),
            backward(10, None),
        ] {
            assert_eq!(page(&repo, args).await.total_count, 8);
        }
    }

    #[tokio::test]
    async fn test_edges_parallel_nodes() {
        let repo = MemoryRepository::with_ids(1..=4);
        let conn = page(&repo, forward(Some(3), None)).await;
        let nodes = conn.nodes();

        assert_eq!(conn.edges.len(), nodes.len());
        for (edge, node) in conn.edges.iter().zip(&nodes) {
            assert_eq!(&edge.node, node);
            assert_eq!(edge.cursor, node.id);
        }
    }

    #[tokio::test]
    async fn test_malformed_cursor_makes_no_repository_call() {
        let repo = MemoryRepository::with_ids(1..=5);
        let args = ConnectionArgs {
            after: Some("not-base64!!".to_string()),
            first: Some(2),
            ..Default::default()
        };
        let result: Result<Connection<Thing>, _> =
            build_connection(&repo, &RelationFilter::All, &args, CursorFormat::GlobalId).await;

        assert_matches!(
            result,
            Err(ConnectionError::InvalidCursor(GlobalIdError::InvalidBase64))
        );
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_ignored_before_cursor_is_still_validated() {
        let repo = MemoryRepository::with_ids(1..=5);
        let args = ConnectionArgs {
            first: Some(2),
            before: Some("ZmlsbXM=".to_string()),
            ..Default::default()
        };
        let result: Result<Connection<Thing>, _> =
            build_connection(&repo, &RelationFilter::All, &args, CursorFormat::GlobalId).await;
        assert_matches!(result, Err(ConnectionError::InvalidCursor(_)));
    }

    #[tokio::test]
    async fn test_negative_sizes_rejected_before_repository() {
        let repo = MemoryRepository::with_ids(1..=5);
        for args in [forward(Some(-1), None), backward(-3, None)] {
            let result: Result<Connection<Thing>, _> =
                build_connection(&repo, &RelationFilter::All, &args, CursorFormat::GlobalId)
                    .await;
            assert_matches!(result, Err(ConnectionError::InvalidArgument(_)));
        }
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_first_wins_over_last() {
        let repo = MemoryRepository::with_ids(1..=5);
        let args = ConnectionArgs {
            first: Some(2),
            last: Some(1),
            ..Default::default()
        };
        let conn = page(&repo, args).await;
        assert_eq!(ids(&conn), vec![1, 2]);
        assert!(conn.page_info.has_next_page);
        assert!(!conn.page_info.has_previous_page);
    }

    #[tokio::test]
    async fn test_raw_id_cursors() {
        let repo = MemoryRepository::with_ids(1..=5);
        let args = ConnectionArgs {
            first: Some(2),
            after: Some("1".to_string()),
            ..Default::default()
        };
        let conn: Connection<Thing> =
            build_connection(&repo, &RelationFilter::All, &args, CursorFormat::RawId)
                .await
                .unwrap();

        let cursors: Vec<&str> = conn.edges.iter().map(|e| e.cursor.as_str()).collect();
        assert_eq!(cursors, vec!["2", "3"]);
        assert_eq!(conn.page_info.end_cursor.as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn test_concurrent_resolutions_share_repository() {
        let repo = MemoryRepository::with_ids(1..=6);
        let (a, b) = tokio::join!(
            page(&repo, forward(Some(2), None)),
            page(&repo, backward(2, None))
        );
        assert_eq!(ids(&a), vec![1, 2]);
        assert_eq!(ids(&b), vec![5, 6]);
        assert_eq!(repo.calls(), 4);
    }

    #[test]
    fn test_page_request_take_and_skip() {
        let request = forward(Some(4), Some(9))
            .page_request(CursorFormat::GlobalId)
            .unwrap();
        assert_eq!(request.direction, Direction::Forward);
        assert_eq!(request.take(), 5);
        assert_eq!(request.skip(), 1);

        let request = backward(3, None).page_request(CursorFormat::GlobalId).unwrap();
        assert_eq!(request.direction, Direction::Backward);
        assert_eq!(request.take(), -4);
        assert_eq!(request.skip(), 0);
    }
}
