//! # Roster Core
//!
//! Core types and error definitions for the Roster user service.
//! Every other crate in the workspace builds on the error type, the typed
//! user id, pagination and the `User` entity defined here.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
