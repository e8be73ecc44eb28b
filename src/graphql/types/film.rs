//! Film node and its connections

use async_graphql::{ComplexObject, Context, ID, Result, SimpleObject};

use crate::db::{FilmRecord, relations, sqlite_helpers::json_to_vec_opt};
use crate::define_connection;
use crate::graphql::helpers::{format_date, format_datetime};
use crate::graphql::node::NodeType;
use crate::graphql::pagination::ConnectionArgs;
use crate::graphql::resolver::ConnectionResolver;

use super::{Person, Planet, Species, Starship, Vehicle};

/// A single film.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(complex)]
pub struct Film {
    /// The ID of an object
    pub id: ID,
    /// The title of this film.
    pub title: Option<String>,
    /// The episode number of this film.
    #[graphql(name = "episodeID")]
    pub episode_id: Option<i32>,
    /// The opening paragraphs at the beginning of this film.
    pub opening_crawl: Option<String>,
    /// The name of the director of this film.
    pub director: Option<String>,
    /// The name(s) of the producer(s) of this film.
    pub producers: Vec<String>,
    /// The ISO 8601 date format of film release at original creator country.
    pub release_date: Option<String>,
    /// The ISO 8601 date format of the time that this resource was created.
    pub created: Option<String>,
    /// The ISO 8601 date format of the time that this resource was edited.
    pub edited: Option<String>,
}

impl NodeType for Film {
    type Row = FilmRecord;
    const TYPE_NAME: &'static str = "films";

    fn from_row(row: FilmRecord) -> Self {
        Film {
            id: Self::global_id(row.id),
            title: row.title,
            episode_id: row.episode_id,
            opening_crawl: row.opening_crawl,
            director: row.director,
            producers: json_to_vec_opt(row.producers.as_deref()),
            release_date: format_date(row.release_date.as_deref()),
            created: format_datetime(row.created.as_deref()),
            edited: format_datetime(row.edited.as_deref()),
        }
    }
}

define_connection!(FilmsConnection, FilmsEdge, Film, films);
define_connection!(FilmCharactersConnection, FilmCharactersEdge, Person, characters);
define_connection!(FilmPlanetsConnection, FilmPlanetsEdge, Planet, planets);
define_connection!(FilmSpeciesConnection, FilmSpeciesEdge, Species, species);
define_connection!(FilmStarshipsConnection, FilmStarshipsEdge, Starship, starships);
define_connection!(FilmVehiclesConnection, FilmVehiclesEdge, Vehicle, vehicles);

#[ComplexObject]
impl Film {
    async fn character_connection(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<FilmCharactersConnection> {
        let conn = ConnectionResolver::<Person>::nested(relations::characters_in_film)
            .resolve(ctx, Some(&self.id), ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(FilmCharactersConnection::from_connection(conn))
    }

    async fn planet_connection(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<FilmPlanetsConnection> {
        let conn = ConnectionResolver::<Planet>::nested(relations::planets_in_film)
            .resolve(ctx, Some(&self.id), ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(FilmPlanetsConnection::from_connection(conn))
    }

    async fn species_connection(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<FilmSpeciesConnection> {
        let conn = ConnectionResolver::<Species>::nested(relations::species_in_film)
            .resolve(ctx, Some(&self.id), ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(FilmSpeciesConnection::from_connection(conn))
    }

    async fn starship_connection(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<FilmStarshipsConnection> {
        let conn = ConnectionResolver::<Starship>::nested(relations::starships_in_film)
            .resolve(ctx, Some(&self.id), ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(FilmStarshipsConnection::from_connection(conn))
    }

    async fn vehicle_connection(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<FilmVehiclesConnection> {
        let conn = ConnectionResolver::<Vehicle>::nested(relations::vehicles_in_film)
            .resolve(ctx, Some(&self.id), ConnectionArgs::new(after, first, before, last))
            .await?;
        Ok(FilmVehiclesConnection::from_connection(conn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_row() {
        let film = Film::from_row(FilmRecord {
            id: 1,
            title: Some("A New Hope".to_string()),
            episode_id: Some(4),
            opening_crawl: None,
            director: Some("George Lucas".to_string()),
            producers: Some(r#"["Gary Kurtz","Rick McCallum"]"#.to_string()),
            release_date: Some("1977-05-25".to_string()),
            created: Some("2014-12-10 14:23:31.880000".to_string()),
            edited: None,
        });

        assert_eq!(film.id.as_str(), "ZmlsbXM6MQ==");
        assert_eq!(film.producers, vec!["Gary Kurtz", "Rick McCallum"]);
        assert_eq!(film.release_date.as_deref(), Some("1977-05-25"));
        assert_eq!(film.created.as_deref(), Some("2014-12-10T14:23:31.880000Z"));
        assert_eq!(film.edited, None);
    }
}
