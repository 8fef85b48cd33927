//! Session-scoped read queries.

use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use tracing::{error, info, warn};
use userlens_core::error::LensResult;
use userlens_core::models::session::{DeviceType, Session, SessionWithUser};
use userlens_core::models::user::UserStatus;
use userlens_core::store::SessionStore;

/// Fixed threshold bounding the "ended before 2025" query:
/// 2025-01-01T00:00:00Z. Defined once, read-only.
pub static ENDED_BEFORE_CUTOFF: LazyLock<DateTime<Utc>> = LazyLock::new(|| {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .expect("valid calendar date")
});

/// Answers session-centric read queries.
///
/// Generic over the store implementation so that the query layer has
/// no dependency on the database crate.
pub struct SessionQueryService<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionQueryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the earliest desktop session by start instant, or
    /// `None` if no desktop session exists. An absent result is a
    /// valid outcome, not an error.
    ///
    /// When several desktop sessions share the minimal start instant,
    /// which one is returned is implementation-defined.
    pub async fn earliest_desktop_session(&self) -> LensResult<Option<Session>> {
        info!("Retrieving earliest desktop session");

        let session = match self.store.earliest_by_device(DeviceType::Desktop).await {
            Ok(session) => session,
            Err(e) => {
                error!(error = %e, "Error occurred while retrieving earliest desktop session");
                return Err(e);
            }
        };

        match &session {
            Some(s) => info!(session_id = %s.id, "Found earliest desktop session"),
            None => warn!("No desktop sessions found"),
        }

        Ok(session)
    }

    /// Returns the sessions of active users that ended strictly
    /// before `cutoff`, each carrying its resolved owner. Sessions
    /// that are still open never match. An empty result is a valid
    /// outcome, not an error.
    pub async fn active_sessions_ended_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> LensResult<Vec<SessionWithUser>> {
        info!(%cutoff, "Retrieving sessions of active users ended before cutoff");

        let sessions = match self.store.ended_before(UserStatus::Active, cutoff).await {
            Ok(sessions) => sessions,
            Err(e) => {
                error!(error = %e, "Error occurred while retrieving sessions ended before cutoff");
                return Err(e);
            }
        };

        info!(count = sessions.len(), "Retrieved sessions matching criteria");
        Ok(sessions)
    }
}
