//! People table

use super::repository::{Entity, PrimaryKey};

/// Person record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PersonRecord {
    pub id: i64,
    pub name: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<f64>,
    pub skin_color: Option<String>,
    pub homeworld_id: Option<i64>,
    pub species_id: Option<i64>,
    pub created: Option<String>,
    pub edited: Option<String>,
}

impl PrimaryKey for PersonRecord {
    fn primary_key(&self) -> i64 {
        self.id
    }
}

impl Entity for PersonRecord {
    const TABLE_NAME: &'static str = "people";

    fn column_names() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "birth_year",
            "eye_color",
            "gender",
            "hair_color",
            "height",
            "mass",
            "skin_color",
            "homeworld_id",
            "species_id",
            "created",
            "edited",
        ]
    }
}
