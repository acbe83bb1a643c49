// src/viewer.rs

//! The user on whose behalf a query runs
//!
//! Filtering and membership checks take a [`Viewer`] argument instead of
//! reading the current user from ambient request state.

use crate::error::{Error, Result};

/// Requesting user: anonymous, or an authenticated user ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewer {
    #[default]
    Anonymous,
    User(i64),
}

impl Viewer {
    /// Viewer for an optional user ID
    pub fn from_user_id(user_id: Option<i64>) -> Self {
        user_id.map_or(Viewer::Anonymous, Viewer::User)
    }

    pub fn user_id(&self) -> Option<i64> {
        match self {
            Viewer::Anonymous => None,
            Viewer::User(id) => Some(*id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Viewer::User(_))
    }

    /// The user ID, or `AuthenticationRequired` naming what needed it
    pub fn require_user(&self, what: &str) -> Result<i64> {
        self.user_id()
            .ok_or_else(|| Error::AuthenticationRequired(format!("{what} requires a signed-in user")))
    }
}
