//! User-scoped read queries.

use tracing::{error, info, warn};
use userlens_core::error::LensResult;
use userlens_core::models::session::DeviceType;
use userlens_core::models::user::UserWithSessions;
use userlens_core::store::UserStore;

/// Answers user-centric read queries.
///
/// Generic over the store implementation so that the query layer has
/// no dependency on the database crate.
pub struct UserQueryService<U: UserStore> {
    store: U,
}

impl<U: UserStore> UserQueryService<U> {
    pub fn new(store: U) -> Self {
        Self { store }
    }

    /// Returns the user owning the largest number of sessions, with
    /// its full session collection loaded, or `None` if no users
    /// exist. An absent result is a valid outcome, not an error.
    ///
    /// When several users share the maximal count, which one is
    /// returned is implementation-defined.
    pub async fn user_with_most_sessions(&self) -> LensResult<Option<UserWithSessions>> {
        info!("Retrieving user with the most sessions");

        let user = match self.store.most_sessions().await {
            Ok(user) => user,
            Err(e) => {
                error!(error = %e, "Error occurred while retrieving user with most sessions");
                return Err(e);
            }
        };

        match &user {
            Some(u) => info!(
                user_id = %u.user.id,
                session_count = u.session_count(),
                "Found user with most sessions"
            ),
            None => warn!("No users found"),
        }

        Ok(user)
    }

    /// Returns every user that owns at least one mobile session. Each
    /// returned user carries its full session collection, not only
    /// the mobile ones. An empty result is a valid outcome, not an
    /// error.
    pub async fn users_with_mobile_session(&self) -> LensResult<Vec<UserWithSessions>> {
        info!("Retrieving users with mobile sessions");

        let users = match self.store.with_device_session(DeviceType::Mobile).await {
            Ok(users) => users,
            Err(e) => {
                error!(error = %e, "Error occurred while retrieving users with mobile sessions");
                return Err(e);
            }
        };

        info!(count = users.len(), "Retrieved users with mobile sessions");
        Ok(users)
    }
}
