/// Role tags assigned to user accounts
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TechNotesError;

/// Role tag from the fixed enumeration
///
/// Declaration order is privilege order, so `Ord` ranks `Employee` lowest
/// and `Admin` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Regular staff; sees only their own notes
    Employee,

    /// Sees all notes and manages users
    Manager,

    /// Full access
    Admin,
}

impl Role {
    /// Every role, lowest privilege first
    pub const ALL: [Role; 3] = [Role::Employee, Role::Manager, Role::Admin];

    /// Tag as sent by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Manager => "Manager",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = TechNotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Employee" => Ok(Role::Employee),
            "Manager" => Ok(Role::Manager),
            "Admin" => Ok(Role::Admin),
            other => Err(TechNotesError::UnknownRole(other.to_string())),
        }
    }
}
