/// User domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ids::UserId;
use super::role::Role;
use super::timestamp;
use crate::entity_state::Entity;

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login name, unique across active and inactive accounts
    pub username: String,

    /// Assigned roles; duplicates in the payload collapse
    pub roles: BTreeSet<Role>,

    /// Whether the account may sign in
    #[serde(default = "default_active")]
    pub active: bool,

    /// Account creation timestamp; `None` when missing or unreadable in the payload
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl User {
    /// Create an active user
    pub fn new(
        id: impl Into<UserId>,
        username: impl Into<String>,
        roles: impl IntoIterator<Item = Role>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            roles: roles.into_iter().collect(),
            active: true,
            created_at: Some(created_at),
        }
    }

    /// Whether the account carries `role`
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Number of distinct roles
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn duplicate_roles_collapse() {
        let json = r#"{
            "id": "u1",
            "username": "dan",
            "roles": ["Employee", "Manager", "Employee"],
            "active": false,
            "createdAt": "2023-11-05T09:00:00Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role_count(), 2);
        assert!(user.has_role(Role::Manager));
        assert!(!user.has_role(Role::Admin));
        assert!(!user.active);
    }

    #[test]
    fn active_defaults_to_true() {
        let json = r#"{"id":"u2","username":"eve","roles":["Admin"],"createdAt":"2023-11-05T09:00:00Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.active);
    }

    #[test]
    fn new_user_is_active() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let user = User::new("u3", "zed", [Role::Employee], at);
        assert!(user.active);
        assert_eq!(user.id.as_str(), "u3");
    }

    #[test]
    fn accepts_lenient_created_at() {
        let date_only = r#"{"id":"u4","username":"amy","roles":["Admin"],"createdAt":"2024-01-01"}"#;
        let epoch = r#"{"id":"u5","username":"bo","roles":["Admin"],"createdAt":1704067200000}"#;
        let expected = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        assert_eq!(serde_json::from_str::<User>(date_only).unwrap().created_at, expected);
        assert_eq!(serde_json::from_str::<User>(epoch).unwrap().created_at, expected);
    }

    #[test]
    fn missing_created_at_does_not_reject_user() {
        let json = r#"{"id":"u6","username":"kim","roles":["Employee"]}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.created_at, None);
        assert_eq!(user.username, "kim");
    }
}
