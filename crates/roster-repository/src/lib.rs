//! # Roster Repository
//!
//! Data access for the Roster user service:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>        (domain interface)
//! SqliteUserRepository                (SQLx queries)
//!   ↓  Arc<dyn DatabasePoolInterface> (store handle)
//! SQLite file
//! ```
//!
//! Every repository call checks a connection out of the handle for the
//! duration of that call only; writes additionally run inside their own
//! transaction.

pub mod pool;
pub mod sqlite;
pub mod traits;

pub use pool::*;
pub use sqlite::*;
pub use traits::*;
