//! DB-side row structs and enum/string conversions shared by the
//! store implementations.

use chrono::{DateTime, Utc};
use surrealdb_types::SurrealValue;
use userlens_core::models::session::{DeviceType, Session};
use userlens_core::models::user::{User, UserStatus};
use uuid::Uuid;

use crate::error::DbError;

pub(crate) fn parse_status(s: &str) -> Result<UserStatus, DbError> {
    match s {
        "Active" => Ok(UserStatus::Active),
        "Inactive" => Ok(UserStatus::Inactive),
        "Suspended" => Ok(UserStatus::Suspended),
        other => Err(DbError::Decode(format!("unknown user status: {other}"))),
    }
}

pub(crate) fn status_to_string(s: &UserStatus) -> &'static str {
    match s {
        UserStatus::Active => "Active",
        UserStatus::Inactive => "Inactive",
        UserStatus::Suspended => "Suspended",
    }
}

pub(crate) fn parse_device(s: &str) -> Result<DeviceType, DbError> {
    match s {
        "Desktop" => Ok(DeviceType::Desktop),
        "Mobile" => Ok(DeviceType::Mobile),
        "Tablet" => Ok(DeviceType::Tablet),
        other => Err(DbError::Decode(format!("unknown device type: {other}"))),
    }
}

pub(crate) fn device_to_string(d: &DeviceType) -> &'static str {
    match d {
        DeviceType::Desktop => "Desktop",
        DeviceType::Mobile => "Mobile",
        DeviceType::Tablet => "Tablet",
    }
}

/// Row struct for CREATE results, where the UUID is already known.
#[derive(Debug, SurrealValue)]
pub(crate) struct UserRow {
    email: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    pub(crate) fn into_user(self, id: Uuid) -> Result<User, DbError> {
        Ok(User {
            id,
            email: self.email,
            status: parse_status(&self.status)?,
            created_at: self.created_at,
        })
    }
}

/// Row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
pub(crate) struct UserRowWithId {
    record_id: String,
    email: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl UserRowWithId {
    pub(crate) fn try_into_user(self) -> Result<User, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid user UUID: {e}")))?;
        Ok(User {
            id,
            email: self.email,
            status: parse_status(&self.status)?,
            created_at: self.created_at,
        })
    }
}

/// Row struct for CREATE results, where the UUID is already known.
#[derive(Debug, SurrealValue)]
pub(crate) struct SessionRow {
    user_id: String,
    device_type: String,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl SessionRow {
    pub(crate) fn into_session(self, id: Uuid) -> Result<Session, DbError> {
        let user_id = Uuid::parse_str(&self.user_id)
            .map_err(|e| DbError::Decode(format!("invalid owner UUID: {e}")))?;
        Ok(Session {
            id,
            user_id,
            device_type: parse_device(&self.device_type)?,
            started_at: self.started_at,
            ended_at: self.ended_at,
        })
    }
}

/// Row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
pub(crate) struct SessionRowWithId {
    record_id: String,
    user_id: String,
    device_type: String,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl SessionRowWithId {
    pub(crate) fn try_into_session(self) -> Result<Session, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid session UUID: {e}")))?;
        let user_id = Uuid::parse_str(&self.user_id)
            .map_err(|e| DbError::Decode(format!("invalid owner UUID: {e}")))?;
        Ok(Session {
            id,
            user_id,
            device_type: parse_device(&self.device_type)?,
            started_at: self.started_at,
            ended_at: self.ended_at,
        })
    }
}
