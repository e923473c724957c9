//! # Roster Service
//!
//! Business logic service layer for the Roster user service.
//! Turns repository results into response DTOs and the domain errors the
//! transport layer reports to callers.

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::*;
pub use user_service::*;
