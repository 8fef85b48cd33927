//! SurrealDB implementation of [`SessionStore`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use userlens_core::error::LensResult;
use userlens_core::models::session::{CreateSession, DeviceType, Session, SessionWithUser};
use userlens_core::models::user::{User, UserStatus};
use userlens_core::store::SessionStore;
use uuid::Uuid;

use crate::error::DbError;
use crate::store::rows::{
    SessionRow, SessionRowWithId, UserRowWithId, device_to_string, status_to_string,
};

/// SurrealDB implementation of the Session store.
#[derive(Clone)]
pub struct SurrealSessionStore<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealSessionStore<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    /// Write path: stores a new session record. Used by the seed
    /// layer and tests; the query operations never call it.
    pub async fn create(&self, input: CreateSession) -> LensResult<Session> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('session', $id) SET \
                 user_id = $user_id, \
                 device_type = $device_type, \
                 started_at = $started_at, \
                 ended_at = $ended_at",
            )
            .bind(("id", id_str.clone()))
            .bind(("user_id", input.user_id.to_string()))
            .bind(("device_type", device_to_string(&input.device_type).to_string()))
            .bind(("started_at", input.started_at))
            .bind(("ended_at", input.ended_at))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<SessionRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| {
            DbError::Query(format!("CREATE session returned no row for id {id_str}"))
        })?;

        row.into_session(id).map_err(Into::into)
    }
}

impl<C: Connection> SessionStore for SurrealSessionStore<C> {
    async fn earliest_by_device(&self, device: DeviceType) -> LensResult<Option<Session>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM session \
                 WHERE device_type = $device \
                 ORDER BY started_at ASC \
                 LIMIT 1",
            )
            .bind(("device", device_to_string(&device).to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<SessionRowWithId> = result.take(0).map_err(DbError::from)?;
        rows.into_iter()
            .next()
            .map(SessionRowWithId::try_into_session)
            .transpose()
            .map_err(Into::into)
    }

    async fn ended_before(
        &self,
        owner_status: UserStatus,
        cutoff: DateTime<Utc>,
    ) -> LensResult<Vec<SessionWithUser>> {
        // One request, two statements: owners with the wanted status,
        // then ended sessions below the cutoff. Joined by user_id
        // below. The `!= NONE` guard keeps open sessions out; NONE
        // sorts below every datetime, so the comparison alone would
        // let them through.
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM user \
                 WHERE status = $status; \
                 SELECT meta::id(id) AS record_id, * FROM session \
                 WHERE ended_at != NONE AND ended_at < $cutoff \
                 ORDER BY started_at ASC",
            )
            .bind(("status", status_to_string(&owner_status).to_string()))
            .bind(("cutoff", cutoff))
            .await
            .map_err(DbError::from)?;

        let user_rows: Vec<UserRowWithId> = result.take(0).map_err(DbError::from)?;
        let session_rows: Vec<SessionRowWithId> = result.take(1).map_err(DbError::from)?;

        let mut owners: HashMap<Uuid, User> = HashMap::with_capacity(user_rows.len());
        for row in user_rows {
            let user = row.try_into_user()?;
            owners.insert(user.id, user);
        }

        let mut matches = Vec::new();
        for row in session_rows {
            let session = row.try_into_session()?;
            if let Some(user) = owners.get(&session.user_id) {
                matches.push(SessionWithUser {
                    session,
                    user: user.clone(),
                });
            }
        }

        Ok(matches)
    }
}
