//! Session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::User;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    /// Back-reference to the owning user (relation only, not ownership).
    pub user_id: Uuid,
    pub device_type: DeviceType,
    pub started_at: DateTime<Utc>,
    /// `None` while the session is still open.
    /// When present, `ended_at >= started_at`.
    pub ended_at: Option<DateTime<Utc>>,
}

/// A session together with its resolved owning user, populated before
/// the aggregate is returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionWithUser {
    pub session: Session,
    pub user: User,
}

/// Input for the write path that seeds session records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSession {
    pub user_id: Uuid,
    pub device_type: DeviceType,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}
