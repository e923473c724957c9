//! Remote clients for calling the user service over gRPC.
//!
//! A client implements the same `UserService` trait as the local
//! implementation, so callers can swap one for the other.

mod user_client;

pub use user_client::*;
