//! SurrealDB implementation of [`UserStore`].

use std::collections::HashMap;

use surrealdb::{Connection, Surreal};
use userlens_core::error::LensResult;
use userlens_core::models::session::{DeviceType, Session};
use userlens_core::models::user::{CreateUser, User, UserWithSessions};
use userlens_core::store::UserStore;
use uuid::Uuid;

use crate::error::DbError;
use crate::store::rows::{SessionRowWithId, UserRow, UserRowWithId, status_to_string};

/// SurrealDB implementation of the User store.
#[derive(Clone)]
pub struct SurrealUserStore<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealUserStore<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    /// Write path: stores a new user record. Used by the seed layer
    /// and tests; the query operations never call it.
    pub async fn create(&self, input: CreateUser) -> LensResult<User> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('user', $id) SET \
                 email = $email, \
                 status = $status",
            )
            .bind(("id", id_str.clone()))
            .bind(("email", input.email))
            .bind(("status", status_to_string(&input.status).to_string()))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| {
            DbError::Query(format!("CREATE user returned no row for id {id_str}"))
        })?;

        row.into_user(id).map_err(Into::into)
    }

    /// Loads every user with its full session collection in one
    /// request (two statements), grouped by `user_id`.
    async fn load_users_with_sessions(&self) -> Result<Vec<UserWithSessions>, DbError> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM user \
                 ORDER BY created_at ASC; \
                 SELECT meta::id(id) AS record_id, * FROM session \
                 ORDER BY started_at ASC",
            )
            .await?;

        let user_rows: Vec<UserRowWithId> = result.take(0)?;
        let session_rows: Vec<SessionRowWithId> = result.take(1)?;

        let mut sessions_by_user: HashMap<Uuid, Vec<Session>> = HashMap::new();
        for row in session_rows {
            let session = row.try_into_session()?;
            sessions_by_user
                .entry(session.user_id)
                .or_default()
                .push(session);
        }

        let mut users = Vec::with_capacity(user_rows.len());
        for row in user_rows {
            let user = row.try_into_user()?;
            let sessions = sessions_by_user.remove(&user.id).unwrap_or_default();
            users.push(UserWithSessions { user, sessions });
        }

        Ok(users)
    }
}

impl<C: Connection> UserStore for SurrealUserStore<C> {
    async fn most_sessions(&self) -> LensResult<Option<UserWithSessions>> {
        let users = self.load_users_with_sessions().await?;

        // Keeps the first user at the maximal count; tie order is
        // implementation-defined.
        let mut best: Option<UserWithSessions> = None;
        for candidate in users {
            match &best {
                Some(current) if current.sessions.len() >= candidate.sessions.len() => {}
                _ => best = Some(candidate),
            }
        }

        Ok(best)
    }

    async fn with_device_session(&self, device: DeviceType) -> LensResult<Vec<UserWithSessions>> {
        let users = self.load_users_with_sessions().await?;

        Ok(users
            .into_iter()
            .filter(|u| u.sessions.iter().any(|s| s.device_type == device))
            .collect())
    }
}
