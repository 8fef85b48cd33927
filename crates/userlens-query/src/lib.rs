//! UserLens Query — read-only query services over users and their
//! sessions.
//!
//! Two parallel services consume the `userlens-core` store traits:
//! [`SessionQueryService`] for session-centric questions and
//! [`UserQueryService`] for user-centric ones. Neither mutates state;
//! store failures are logged at error level and propagated unchanged.

pub mod session;
pub mod user;

pub use session::{ENDED_BEFORE_CUTOFF, SessionQueryService};
pub use user::UserQueryService;
