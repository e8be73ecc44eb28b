//! Species table

use super::repository::{Entity, PrimaryKey};

/// Species record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SpeciesRecord {
    pub id: i64,
    pub name: Option<String>,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<i32>,
    pub average_lifespan: Option<i32>,
    pub eye_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub skin_colors: Option<String>,
    pub language: Option<String>,
    pub homeworld_id: Option<i64>,
    pub created: Option<String>,
    pub edited: Option<String>,
}

impl PrimaryKey for SpeciesRecord {
    fn primary_key(&self) -> i64 {
        self.id
    }
}

impl Entity for SpeciesRecord {
    const TABLE_NAME: &'static str = "species";

    fn column_names() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "classification",
            "designation",
            "average_height",
            "average_lifespan",
            "eye_colors",
            "hair_colors",
            "skin_colors",
            "language",
            "homeworld_id",
            "created",
            "edited",
        ]
    }
}
