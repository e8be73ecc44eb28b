//! Relationship filters between entity tables
//!
//! Each function selects the rows of one table that are related to a parent
//! row of another. Many-to-one relations compare a foreign-key column,
//! many-to-many relations go through a join table.

use super::repository::RelationFilter;

const fn linked(
    join_table: &'static str,
    key_column: &'static str,
    parent_column: &'static str,
    id: i64,
) -> RelationFilter {
    RelationFilter::Linked {
        join_table,
        key_column,
        parent_column,
        id,
    }
}

// ----------------------------------------------------------------------------
// Many-to-one
// ----------------------------------------------------------------------------

/// People whose homeworld is the planet
pub const fn residents_of(planet_id: i64) -> RelationFilter {
    RelationFilter::Column {
        column: "homeworld_id",
        id: planet_id,
    }
}

/// People belonging to the species
pub const fn people_of_species(species_id: i64) -> RelationFilter {
    RelationFilter::Column {
        column: "species_id",
        id: species_id,
    }
}

// ----------------------------------------------------------------------------
// Films <-> everything
// ----------------------------------------------------------------------------

pub const fn characters_in_film(film_id: i64) -> RelationFilter {
    linked("film_characters", "person_id", "film_id", film_id)
}

pub const fn films_with_character(person_id: i64) -> RelationFilter {
    linked("film_characters", "film_id", "person_id", person_id)
}

pub const fn planets_in_film(film_id: i64) -> RelationFilter {
    linked("film_planets", "planet_id", "film_id", film_id)
}

pub const fn films_with_planet(planet_id: i64) -> RelationFilter {
    linked("film_planets", "film_id", "planet_id", planet_id)
}

pub const fn species_in_film(film_id: i64) -> RelationFilter {
    linked("film_species", "species_id", "film_id", film_id)
}

pub const fn films_with_species(species_id: i64) -> RelationFilter {
    linked("film_species", "film_id", "species_id", species_id)
}

pub const fn starships_in_film(film_id: i64) -> RelationFilter {
    linked("film_starships", "starship_id", "film_id", film_id)
}

pub const fn films_with_starship(starship_id: i64) -> RelationFilter {
    linked("film_starships", "film_id", "starship_id", starship_id)
}

pub const fn vehicles_in_film(film_id: i64) -> RelationFilter {
    linked("film_vehicles", "vehicle_id", "film_id", film_id)
}

pub const fn films_with_vehicle(vehicle_id: i64) -> RelationFilter {
    linked("film_vehicles", "film_id", "vehicle_id", vehicle_id)
}

// ----------------------------------------------------------------------------
// Pilots
// ----------------------------------------------------------------------------

pub const fn starships_piloted_by(person_id: i64) -> RelationFilter {
    linked("starship_pilots", "starship_id", "person_id", person_id)
}

pub const fn pilots_of_starship(starship_id: i64) -> RelationFilter {
    linked("starship_pilots", "person_id", "starship_id", starship_id)
}

pub const fn vehicles_piloted_by(person_id: i64) -> RelationFilter {
    linked("vehicle_pilots", "vehicle_id", "person_id", person_id)
}

pub const fn pilots_of_vehicle(vehicle_id: i64) -> RelationFilter {
    linked("vehicle_pilots", "person_id", "vehicle_id", vehicle_id)
}
