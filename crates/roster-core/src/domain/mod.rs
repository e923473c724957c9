//! Domain entities for Roster.

mod user;

pub use user::*;
