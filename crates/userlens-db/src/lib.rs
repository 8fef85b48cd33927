//! UserLens Database — SurrealDB connection management, schema
//! migrations, and store implementations for the `userlens-core`
//! traits.
//!
//! The query layer itself is read-only; the `create_*` methods on the
//! stores are the seed/write path used by tests and external loaders.

mod connection;
mod error;
mod schema;
mod store;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use schema::{run_migrations, schema_v1};
pub use store::{SurrealSessionStore, SurrealUserStore};
