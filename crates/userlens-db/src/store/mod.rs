//! SurrealDB store implementations.

mod rows;
mod session;
mod user;

pub use session::SurrealSessionStore;
pub use user::SurrealUserStore;
