use std::ops::Not;

use serde::{Deserialize, Serialize};
use shared::{Page, SessionIdentity, storage::KeyValueStore};

use crate::{USER_ID_KEY, USERNAME_KEY};

/// What the login form leaves behind in session storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: SessionIdentity,
    pub username: Option<String>,
}

impl Session {
    /// Reads the session fresh from `store`. No id, no session.
    pub fn load(store: &impl KeyValueStore) -> Option<Self> {
        let user_id = SessionIdentity::from_stored(store.get(USER_ID_KEY))?;
        Some(Session {
            user_id,
            username: store.get(USERNAME_KEY),
        })
    }

    pub fn clear(store: &impl KeyValueStore) {
        store.remove(USER_ID_KEY);
        store.remove(USERNAME_KEY);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginStatus {
    LoggedIn(Session),
    LoggedOut,
}

impl LoginStatus {
    pub fn from_store(store: &impl KeyValueStore) -> Self {
        Session::load(store).into()
    }

    pub fn identity(&self) -> Option<&SessionIdentity> {
        match self {
            LoginStatus::LoggedIn(session) => Some(&session.user_id),
            LoginStatus::LoggedOut => None,
        }
    }
}

impl Not for &LoginStatus {
    type Output = bool;

    fn not(self) -> Self::Output {
        matches!(self, LoginStatus::LoggedOut)
    }
}

impl From<Option<Session>> for LoginStatus {
    fn from(value: Option<Session>) -> Self {
        match value {
            Some(session) => LoginStatus::LoggedIn(session),
            None => LoginStatus::LoggedOut,
        }
    }
}

/// Forgets the session and returns the page to navigate to.
pub fn sign_out(store: &impl KeyValueStore) -> Page {
    Session::clear(store);
    tracing::info!("signed out");
    Page::Login
}
