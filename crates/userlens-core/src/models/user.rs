//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::session::Session;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

/// A user together with every session it owns.
///
/// The session collection is populated before the aggregate is
/// returned; reading it never triggers another store round trip.
/// It may be empty and never contains duplicate session ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserWithSessions {
    pub user: User,
    pub sessions: Vec<Session>,
}

impl UserWithSessions {
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

/// Input for the write path that seeds user records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub status: UserStatus,
}
