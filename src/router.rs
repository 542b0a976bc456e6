//! Role router: which dashboard flow the current user can reach.
//!
//! States: `Unauthenticated`, `Operator`, `Admin`, `UnknownRole`.
//! Only two transitions exist: login (from `Unauthenticated`) and logout
//! (from anywhere). There is no lateral Operator ↔ Admin switch.

use crate::auth::{Role, UserProfile};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum RouteState {
    Unauthenticated,
    Operator(UserProfile),
    Admin(UserProfile),
    /// Terminal: the only way out is logout.
    UnknownRole(UserProfile),
}

/// The screen a route state resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dashboard {
    Login,
    Operator,
    Admin,
    UnknownRole,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("already signed in as {0}; log out first")]
    AlreadyAuthenticated(String),
}

impl RouteState {
    /// Initial state from the outcome of session restore.
    pub fn from_session(user: Option<UserProfile>) -> Self {
        match user {
            Some(user) => Self::for_user(user),
            None => RouteState::Unauthenticated,
        }
    }

    fn for_user(user: UserProfile) -> Self {
        match user.role {
            Role::Operator => RouteState::Operator(user),
            Role::Admin => RouteState::Admin(user),
            Role::Unknown(_) => RouteState::UnknownRole(user),
        }
    }

    /// Transition on a successful login, keyed purely off the user's role.
    pub fn login(self, user: UserProfile) -> Result<Self, RouteError> {
        match self {
            RouteState::Unauthenticated => Ok(Self::for_user(user)),
            RouteState::Operator(current)
            | RouteState::Admin(current)
            | RouteState::UnknownRole(current) => {
                Err(RouteError::AlreadyAuthenticated(current.name))
            }
        }
    }

    pub fn logout(self) -> Self {
        RouteState::Unauthenticated
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            RouteState::Unauthenticated => None,
            RouteState::Operator(u) | RouteState::Admin(u) | RouteState::UnknownRole(u) => Some(u),
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        match self {
            RouteState::Unauthenticated => Dashboard::Login,
            RouteState::Operator(_) => Dashboard::Operator,
            RouteState::Admin(_) => Dashboard::Admin,
            RouteState::UnknownRole(_) => Dashboard::UnknownRole,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, RouteState::Unauthenticated)
    }
}
