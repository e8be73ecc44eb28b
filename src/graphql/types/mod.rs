//! GraphQL node types
//!
//! One module per entity. Each module owns the node type, its root
//! connection and the nested connections hanging off it.

mod film;
mod person;
mod planet;
mod species;
mod starship;
mod vehicle;

pub use film::*;
pub use person::*;
pub use planet::*;
pub use species::*;
pub use starship::*;
pub use vehicle::*;
