//! Store trait definitions for read access to persisted records.
//!
//! All store operations are async, read-only, and snapshot-consistent
//! within a single call: one logical round trip per operation, no
//! retry, no internal timeout. Related records named in an operation's
//! result type are resolved before the operation returns.

use chrono::{DateTime, Utc};

use crate::error::LensResult;
use crate::models::session::{DeviceType, Session, SessionWithUser};
use crate::models::user::{UserStatus, UserWithSessions};

/// Read access to session records.
pub trait SessionStore: Send + Sync {
    /// The first session of the given device type when ordered
    /// ascending by start instant, or `None` if there is no such
    /// session. Tie order at the minimal start instant is
    /// implementation-defined.
    fn earliest_by_device(
        &self,
        device: DeviceType,
    ) -> impl Future<Output = LensResult<Option<Session>>> + Send;

    /// Sessions that ended strictly before `cutoff` and whose owning
    /// user has the given status, each carrying its resolved owner.
    /// A session without an end instant never matches.
    fn ended_before(
        &self,
        owner_status: UserStatus,
        cutoff: DateTime<Utc>,
    ) -> impl Future<Output = LensResult<Vec<SessionWithUser>>> + Send;
}

/// Read access to user records.
pub trait UserStore: Send + Sync {
    /// The user owning the most sessions, with the full session
    /// collection loaded, or `None` if no users exist. Tie order at
    /// the maximal count is implementation-defined.
    fn most_sessions(&self) -> impl Future<Output = LensResult<Option<UserWithSessions>>> + Send;

    /// Users owning at least one session of the given device type.
    /// Each returned user carries its full session collection, not
    /// only the sessions that matched.
    fn with_device_session(
        &self,
        device: DeviceType,
    ) -> impl Future<Output = LensResult<Vec<UserWithSessions>>> + Send;
}
