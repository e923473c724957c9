//! # Roster Server Library
//!
//! Core library for the Roster user service binary.
//!
//! This module provides dependency injection wiring, logging setup and the
//! application runner used by `main`.

pub mod app;
pub mod di;
pub mod logging;
pub mod startup;
