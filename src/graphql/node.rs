//! Node mapping contract

use async_graphql::ID;

use crate::db::PrimaryKey;

use super::global_id;

/// A public node type built from one persisted row.
///
/// `from_row` is total: optional or unparseable columns map to `None`, never
/// to an error.
pub trait NodeType: Sized + Send + Sync {
    type Row: PrimaryKey + Send;

    /// Type component of this node's Global ID (e.g. "films")
    const TYPE_NAME: &'static str;

    fn from_row(row: Self::Row) -> Self;

    /// Global ID for a primary key of this type
    fn global_id(id: i64) -> ID {
        ID::from(global_id::encode(Self::TYPE_NAME, id))
    }
}
