//! UserLens Core — domain models, store abstractions, and error types
//! shared across the workspace.

pub mod error;
pub mod models;
pub mod store;
