//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the auth page after a successful provider sign-in, read by route
//! guards, the role home pages, and the hook layer (for the API bearer token).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// User classification deciding the landing route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Teacher,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Student, Role::Teacher];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }

    /// Capitalized label for tabs and headings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Teacher => "Teacher",
        }
    }

    /// Post-auth landing route, `/{role}/home`.
    #[must_use]
    pub fn home_route(self) -> &'static str {
        match self {
            Self::Student => "/student/home",
            Self::Teacher => "/teacher/home",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// The locally stored record of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub uid: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub avatar: String,
    /// Identity-provider ID token, sent as the API bearer.
    #[serde(default)]
    pub id_token: Option<String>,
}

/// Authentication state tracking the current user and loading status.
///
/// `loading` starts `true` and drops once the stored session has been
/// restored in the browser, so guards do not redirect before that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
    /// Role picked on the auth page for the attempt in progress.
    pub selected_role: Role,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true, selected_role: Role::Student }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Home route of the signed-in user, if any.
    #[must_use]
    pub fn landing_route(&self) -> Option<&'static str> {
        self.user.as_ref().map(|u| u.role.home_route())
    }

    #[must_use]
    pub fn id_token(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.id_token.as_deref())
    }

    pub fn set_user_role(&mut self, role: Role) {
        self.selected_role = role;
    }

    pub fn set_user(&mut self, user: SessionUser) {
        self.selected_role = user.role;
        self.user = Some(user);
        self.loading = false;
    }

    /// Finish session restore with whatever was stored (possibly nothing).
    pub fn restore(&mut self, stored: Option<SessionUser>) {
        if let Some(user) = stored {
            self.set_user(user);
        }
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
