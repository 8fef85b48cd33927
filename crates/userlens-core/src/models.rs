//! Domain models for UserLens.
//!
//! The query layer treats these as immutable snapshots retrieved
//! per-query; creation and mutation belong to the write path.

pub mod session;
pub mod user;
