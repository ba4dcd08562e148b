//! Acting user identity
//!
//! Passed explicitly into every projection instead of being read from an
//! ambient session, so projections stay pure.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::role::Role;

/// The signed-in user a view is computed for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    /// Username from the access token
    pub username: String,

    /// Roles from the access token
    pub roles: BTreeSet<Role>,
}

impl Actor {
    /// Create an actor
    pub fn new(username: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            username: username.into(),
            roles: roles.into_iter().collect(),
        }
    }

    /// Holds the Manager role
    pub fn is_manager(&self) -> bool {
        self.roles.contains(&Role::Manager)
    }

    /// Holds the Admin role
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }

    /// Holds Manager or Admin
    pub fn is_privileged(&self) -> bool {
        self.is_manager() || self.is_admin()
    }

    /// Highest role held; `Employee` when the token carried none
    pub fn status(&self) -> Role {
        self.roles.iter().max().copied().unwrap_or(Role::Employee)
    }

    /// Sees every note rather than only their own
    pub fn can_view_all_notes(&self) -> bool {
        self.is_privileged()
    }

    /// May delete notes from the edit form
    pub fn can_delete_notes(&self) -> bool {
        self.is_privileged()
    }

    /// May open the users list and edit accounts
    pub fn can_manage_users(&self) -> bool {
        self.is_privileged()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_capabilities() {
        let actor = Actor::new("alice", [Role::Employee]);
        assert!(!actor.is_privileged());
        assert!(!actor.can_view_all_notes());
        assert!(!actor.can_delete_notes());
        assert!(!actor.can_manage_users());
        assert_eq!(actor.status(), Role::Employee);
    }

    #[test]
    fn status_is_highest_role() {
        let actor = Actor::new("carol", [Role::Employee, Role::Manager]);
        assert_eq!(actor.status(), Role::Manager);

        let actor = Actor::new("root", [Role::Admin, Role::Employee]);
        assert_eq!(actor.status(), Role::Admin);
        assert!(actor.can_manage_users());
    }

    #[test]
    fn empty_roles_fall_back_to_employee() {
        let actor = Actor::new("ghost", []);
        assert_eq!(actor.status(), Role::Employee);
        assert!(!actor.is_privileged());
    }
}
