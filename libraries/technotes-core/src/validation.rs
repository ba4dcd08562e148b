//! Save rules for note and user drafts
//!
//! A draft can be saved only when every rule holds. Forms call `can_save` to
//! enable their save button and `validate` to explain what is missing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::types::{Role, UserId};

static USERNAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{3,20}$").unwrap_or_else(|e| panic!("invalid username pattern: {e}"))
});

static PASSWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!@#$%]{4,12}$")
        .unwrap_or_else(|e| panic!("invalid password pattern: {e}"))
});

/// Why a draft cannot be saved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field is empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Username is not 3-20 letters
    #[error("username must be 3-20 letters")]
    InvalidUsername,

    /// Password is not 4-12 of letters, digits or `!@#$%`
    #[error("password must be 4-12 characters of letters, digits or !@#$%")]
    InvalidPassword,

    /// Role set is empty
    #[error("at least one role is required")]
    MissingRoles,
}

/// Whether `username` satisfies the account naming rule
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_RE.is_match(username)
}

/// Whether `password` satisfies the password rule
pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_RE.is_match(password)
}

/// New or edited note
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    /// Title
    pub title: String,
    /// Body
    pub text: String,
    /// Assignee
    pub user: Option<UserId>,
}

impl NoteDraft {
    /// Check every field is filled in
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.text.is_empty() {
            return Err(ValidationError::MissingField("text"));
        }
        match &self.user {
            Some(user) if !user.as_str().is_empty() => Ok(()),
            _ => Err(ValidationError::MissingField("user")),
        }
    }

    /// Whether the draft can be saved
    pub fn can_save(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Account being created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserDraft {
    /// Login name
    pub username: String,
    /// Initial password
    pub password: String,
    /// Roles; new accounts start as `Employee`
    pub roles: BTreeSet<Role>,
}

impl Default for NewUserDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            roles: BTreeSet::from([Role::Employee]),
        }
    }
}

impl NewUserDraft {
    /// Flip a role checkbox
    pub fn toggle_role(&mut self, role: Role) {
        if !self.roles.remove(&role) {
            self.roles.insert(role);
        }
    }

    /// Check username, password and roles
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_username(&self.username) {
            return Err(ValidationError::InvalidUsername);
        }
        if !is_valid_password(&self.password) {
            return Err(ValidationError::InvalidPassword);
        }
        if self.roles.is_empty() {
            return Err(ValidationError::MissingRoles);
        }
        Ok(())
    }

    /// Whether the draft can be saved
    pub fn can_save(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Edits to an existing account
///
/// An empty or absent password keeps the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdateDraft {
    /// Target account
    pub id: UserId,
    /// Login name
    pub username: String,
    /// Replacement password
    pub password: Option<String>,
    /// Roles
    pub roles: BTreeSet<Role>,
    /// Whether the account may sign in
    pub active: bool,
}

impl UserUpdateDraft {
    /// Start editing `user` with its current values
    pub fn from_user(user: &crate::types::User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            password: None,
            roles: user.roles.clone(),
            active: user.active,
        }
    }

    /// Replacement password, if one was typed
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }

    /// Check username, roles and any replacement password
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_username(&self.username) {
            return Err(ValidationError::InvalidUsername);
        }
        if let Some(password) = self.new_password() {
            if !is_valid_password(password) {
                return Err(ValidationError::InvalidPassword);
            }
        }
        if self.roles.is_empty() {
            return Err(ValidationError::MissingRoles);
        }
        Ok(())
    }

    /// Whether the draft can be saved
    pub fn can_save(&self) -> bool {
        self.validate().is_ok()
    }
}
