//! Repository pattern for entity data access
//!
//! The pagination layer only depends on the [`Repository`] capability:
//! a filtered `count` and a cursor-bounded, ordered `find_many`. The SQLite
//! binding lives in [`TableRepository`], which works for any [`Entity`].
//!
//! ```rust,ignore
//! let repo = db.starships();
//! let total = repo.count(&RelationFilter::All).await?;
//! let page = repo
//!     .find_many(FindMany {
//!         filter: &relations::starships_piloted_by(1),
//!         cursor: Some(10),
//!         take: 6,
//!         skip: 1,
//!         order: SortDirection::Asc,
//!     })
//!     .await?;
//! ```

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;

/// Primary key column shared by every entity table
pub const PRIMARY_KEY: &str = "id";

/// A persisted row with a stable integer primary key.
pub trait PrimaryKey {
    fn primary_key(&self) -> i64;
}

/// Metadata about a database entity (table).
pub trait Entity:
    PrimaryKey + for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static
{
    /// The SQL table name (e.g., "starships")
    const TABLE_NAME: &'static str;

    /// List of all column names in the table
    fn column_names() -> &'static [&'static str];

    /// Build a SELECT query for all columns
    fn select_sql() -> String {
        let columns = Self::column_names().join(", ");
        format!("SELECT {} FROM {}", columns, Self::TABLE_NAME)
    }
}

/// Predicate restricting a table scan to the rows related to a parent node.
///
/// Passed through the pagination layer untouched; only the repository
/// interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RelationFilter {
    /// Every row of the table
    #[default]
    All,
    /// Rows whose foreign-key `column` equals `id` (many-to-one)
    Column { column: &'static str, id: i64 },
    /// Rows linked to `id` through a join table (many-to-many).
    ///
    /// Selects `key_column` from `join_table` where `parent_column = id`.
    Linked {
        join_table: &'static str,
        key_column: &'static str,
        parent_column: &'static str,
        id: i64,
    },
}

impl RelationFilter {
    /// Render this filter as WHERE clause fragments and the ids to bind,
    /// in placeholder order.
    pub fn to_sql_conditions(&self) -> (Vec<String>, Vec<i64>) {
        match self {
            RelationFilter::All => (Vec::new(), Vec::new()),
            RelationFilter::Column { column, id } => {
                (vec![format!("{} = ?", column)], vec![*id])
            }
            RelationFilter::Linked {
                join_table,
                key_column,
                parent_column,
                id,
            } => (
                vec![format!(
                    "{} IN (SELECT {} FROM {} WHERE {} = ?)",
                    PRIMARY_KEY, key_column, join_table, parent_column
                )],
                vec![*id],
            ),
        }
    }
}

/// Order direction for sorting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending (A-Z, 0-9, oldest-newest)
    #[default]
    Asc,
    /// Descending (Z-A, 9-0, newest-oldest)
    Desc,
}

/// A bounded scan request.
///
/// `take > 0` returns the first `take` rows at or after `cursor` in `order`;
/// `take < 0` returns the last `|take|` rows at or before `cursor`, still in
/// `order`. `skip` is 0 or 1: 1 excludes the cursor row itself.
#[derive(Debug, Clone, Copy)]
pub struct FindMany<'a> {
    pub filter: &'a RelationFilter,
    pub cursor: Option<i64>,
    pub take: i64,
    pub skip: i64,
    pub order: SortDirection,
}

/// Per-entity store capability consumed by the connection builder.
#[async_trait]
pub trait Repository: Send + Sync {
    type Row: Send;

    /// Number of rows matching `filter`, ignoring any pagination
    async fn count(&self, filter: &RelationFilter) -> Result<i64, sqlx::Error>;

    /// Rows matching the scan request, ordered by primary key
    async fn find_many(&self, query: FindMany<'_>) -> Result<Vec<Self::Row>, sqlx::Error>;
}

/// SQLite-backed repository for one entity table.
pub struct TableRepository<E> {
    pool: SqlitePool,
    _marker: PhantomData<fn() -> E>,
}

impl<E> Clone for TableRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E: Entity> TableRepository<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }

    /// Fetch one row by primary key
    pub async fn find_by_id(&self, id: i64) -> Result<Option<E>, sqlx::Error> {
        let sql = format!("{} WHERE {} = ?", E::select_sql(), PRIMARY_KEY);
        tracing::debug!(sql = %sql, id, "Executing entity lookup");

        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Build the SELECT for a scan request. Returns the SQL, its bind values
    /// and whether the rows come back reversed relative to `query.order`.
    fn build_find_sql(query: &FindMany<'_>) -> (String, Vec<i64>, bool) {
        let (mut conditions, mut values) = query.filter.to_sql_conditions();

        let forward = query.take >= 0;
        let ascending = query.order == SortDirection::Asc;
        // Backward pages scan against the requested order and are flipped afterwards
        let scan_ascending = forward == ascending;

        if let Some(cursor) = query.cursor {
            let op = match (scan_ascending, query.skip > 0) {
                (true, true) => ">",
                (true, false) => ">=",
                (false, true) => "<",
                (false, false) => "<=",
            };
            conditions.push(format!("{} {} ?", PRIMARY_KEY, op));
            values.push(cursor);
        }

        let mut sql = E::select_sql();
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(&format!(
            " ORDER BY {} {} LIMIT {}",
            PRIMARY_KEY,
            if scan_ascending { "ASC" } else { "DESC" },
            query.take.unsigned_abs()
        ));

        (sql, values, !forward)
    }

    fn build_count_sql(filter: &RelationFilter) -> (String, Vec<i64>) {
        let mut sql = format!("SELECT COUNT(*) FROM {}", E::TABLE_NAME);
        let (conditions, values) = filter.to_sql_conditions();
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        (sql, values)
    }
}

#[async_trait]
impl<E: Entity> Repository for TableRepository<E> {
    type Row = E;

    async fn count(&self, filter: &RelationFilter) -> Result<i64, sqlx::Error> {
        let (sql, values) = Self::build_count_sql(filter);
        tracing::debug!(sql = %sql, "Executing count query");

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for value in values {
            query = query.bind(value);
        }

        query.fetch_one(&self.pool).await
    }

    async fn find_many(&self, query: FindMany<'_>) -> Result<Vec<E>, sqlx::Error> {
        let (sql, values, reversed) = Self::build_find_sql(&query);
        tracing::debug!(sql = %sql, "Executing entity query");

        let mut q = sqlx::query_as::<_, E>(&sql);
        for value in values {
            q = q.bind(value);
        }

        let mut rows = q.fetch_all(&self.pool).await?;
        if reversed {
            rows.reverse();
        }
        Ok(rows)
    }
}
