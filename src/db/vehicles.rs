//! Vehicles table

use super::repository::{Entity, PrimaryKey};

/// Vehicle record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VehicleRecord {
    pub id: i64,
    pub name: Option<String>,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    /// JSON array
    pub manufacturers: Option<String>,
    pub cost_in_credits: Option<f64>,
    pub length: Option<f64>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<i32>,
    pub cargo_capacity: Option<f64>,
    pub consumables: Option<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
}

impl PrimaryKey for VehicleRecord {
    fn primary_key(&self) -> i64 {
        self.id
    }
}

impl Entity for VehicleRecord {
    const TABLE_NAME: &'static str = "vehicles";

    fn column_names() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "model",
            "vehicle_class",
            "manufacturers",
            "cost_in_credits",
            "length",
            "crew",
            "passengers",
            "max_atmosphering_speed",
            "cargo_capacity",
            "consumables",
            "created",
            "edited",
        ]
    }
}
