//! Films table

use super::repository::{Entity, PrimaryKey};

/// Film record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FilmRecord {
    pub id: i64,
    pub title: Option<String>,
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    /// JSON array of producer names
    pub producers: Option<String>,
    pub release_date: Option<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
}

impl PrimaryKey for FilmRecord {
    fn primary_key(&self) -> i64 {
        self.id
    }
}

impl Entity for FilmRecord {
    const TABLE_NAME: &'static str = "films";

    fn column_names() -> &'static [&'static str] {
        &[
            "id",
            "title",
            "episode_id",
            "opening_crawl",
            "director",
            "producers",
            "release_date",
            "created",
            "edited",
        ]
    }
}
