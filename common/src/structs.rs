use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Administrator,
    Advocate,
    Clerk,
    Client,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Administrator,
        Role::Advocate,
        Role::Clerk,
        Role::Client,
    ];

    /// Human readable label shown under the user's name in the sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::Advocate => "Advocate",
            Role::Clerk => "Clerk",
            Role::Client => "Client",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Administrator => "ADMINISTRATOR",
            Role::Advocate => "ADVOCATE",
            Role::Clerk => "CLERK",
            Role::Client => "CLIENT",
        })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized role `{0}`")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // the login page stores `ADMIN`, older sessions may carry the long form
        match s.trim().to_uppercase().as_str() {
            "ADMIN" | "ADMINISTRATOR" => Ok(Role::Administrator),
            "ADVOCATE" => Ok(Role::Advocate),
            "CLERK" => Ok(Role::Clerk),
            "CLIENT" => Ok(Role::Client),
            _ => Err(UnknownRole(s.to_owned())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub icon: String,
    pub path: String,
}

impl NavEntry {
    pub fn new(label: &str, icon: &str, path: &str) -> Self {
        Self {
            label: label.to_owned(),
            icon: icon.to_owned(),
            path: path.to_owned(),
        }
    }
}

/// Snapshot of the externally owned session. `role` is `None` whenever the
/// stored role is absent or not one we know, which is the unauthenticated state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub role: Option<Role>,
    pub name: String,
    pub email: String,
    pub has_token: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "User"
        } else {
            &self.name
        }
    }
}
