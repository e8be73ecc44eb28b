//! Planets table

use super::repository::{Entity, PrimaryKey};

/// Planet record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlanetRecord {
    pub id: i64,
    pub name: Option<String>,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<f64>,
    /// JSON array
    pub climates: Option<String>,
    /// JSON array
    pub terrains: Option<String>,
    pub surface_water: Option<f64>,
    pub created: Option<String>,
    pub edited: Option<String>,
}

impl PrimaryKey for PlanetRecord {
    fn primary_key(&self) -> i64 {
        self.id
    }
}

impl Entity for PlanetRecord {
    const TABLE_NAME: &'static str = "planets";

    fn column_names() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "diameter",
            "rotation_period",
            "orbital_period",
            "gravity",
            "population",
            "climates",
            "terrains",
            "surface_water",
            "created",
            "edited",
        ]
    }
}
