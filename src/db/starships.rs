//! Starships table

use super::repository::{Entity, PrimaryKey};

/// Starship record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StarshipRecord {
    pub id: i64,
    pub name: Option<String>,
    pub model: Option<String>,
    pub starship_class: Option<String>,
    /// JSON array
    pub manufacturers: Option<String>,
    pub cost_in_credits: Option<f64>,
    pub length: Option<f64>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<i32>,
    pub hyperdrive_rating: Option<f64>,
    pub mglt: Option<i32>,
    pub cargo_capacity: Option<f64>,
    pub consumables: Option<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
}

impl PrimaryKey for StarshipRecord {
    fn primary_key(&self) -> i64 {
        self.id
    }
}

impl Entity for StarshipRecord {
    const TABLE_NAME: &'static str = "starships";

    fn column_names() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "model",
            "starship_class",
            "manufacturers",
            "cost_in_credits",
            "length",
            "crew",
            "passengers",
            "max_atmosphering_speed",
            "hyperdrive_rating",
            "mglt",
            "cargo_capacity",
            "consumables",
            "created",
            "edited",
        ]
    }
}
