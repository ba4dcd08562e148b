//! View parameters
//!
//! Closed sets of filter and sort keys. The string forms match the values the
//! list toolbars submit (`"name-desc"`, `"completed"`, ...), and parsing any
//! other string is an error rather than a silent no-op.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use technotes_core::Role;

use crate::error::{Result, ViewError};

/// Completion filter for the notes list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteStatusFilter {
    /// Every note
    #[default]
    All,

    /// Only `completed == true`
    Completed,

    /// Only `completed == false`
    Open,
}

impl NoteStatusFilter {
    const EXPECTED: &'static str = "all, completed, open";

    /// Key as submitted by the toolbar
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Open => "open",
        }
    }
}

impl FromStr for NoteStatusFilter {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "open" => Ok(Self::Open),
            other => Err(ViewError::unknown("note status filter", other, Self::EXPECTED)),
        }
    }
}

/// Sort order for the notes list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSortKey {
    /// `created_at` descending
    #[default]
    Newest,

    /// `created_at` ascending
    Oldest,

    /// `updated_at` descending
    Updated,

    /// Title, locale-aware ascending
    Title,

    /// Open notes first; ties keep input order
    Status,
}

impl NoteSortKey {
    const EXPECTED: &'static str = "newest, oldest, updated, title, status";

    /// Key as submitted by the toolbar
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Updated => "updated",
            Self::Title => "title",
            Self::Status => "status",
        }
    }
}

impl FromStr for NoteSortKey {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "updated" => Ok(Self::Updated),
            "title" => Ok(Self::Title),
            "status" => Ok(Self::Status),
            other => Err(ViewError::unknown("note sort key", other, Self::EXPECTED)),
        }
    }
}

/// Account status filter for the users list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatusFilter {
    /// Every account
    #[default]
    All,

    /// Only `active == true`
    Active,

    /// Only `active == false`
    Inactive,
}

impl UserStatusFilter {
    const EXPECTED: &'static str = "all, active, inactive";

    /// Key as submitted by the toolbar
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl FromStr for UserStatusFilter {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(ViewError::unknown("user status filter", other, Self::EXPECTED)),
        }
    }
}

/// Role filter for the users list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RoleFilter {
    /// Every account
    #[default]
    All,

    /// Accounts holding this role
    Only(Role),
}

impl RoleFilter {
    const EXPECTED: &'static str = "all, Admin, Manager, Employee";
}

impl FromStr for RoleFilter {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse::<Role>()
            .map(Self::Only)
            .map_err(|_| ViewError::unknown("role filter", s, Self::EXPECTED))
    }
}

impl TryFrom<String> for RoleFilter {
    type Error = ViewError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<RoleFilter> for String {
    fn from(filter: RoleFilter) -> Self {
        filter.to_string()
    }
}

impl From<Role> for RoleFilter {
    fn from(role: Role) -> Self {
        Self::Only(role)
    }
}

/// Sort order for the users list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserSortKey {
    /// Username, locale-aware ascending
    #[default]
    #[serde(rename = "name")]
    Name,

    /// Username, locale-aware descending
    #[serde(rename = "name-desc")]
    NameDesc,

    /// Active accounts first; ties keep input order
    #[serde(rename = "status")]
    Status,

    /// Fewest roles first; ties keep input order
    #[serde(rename = "roles")]
    Roles,

    /// `created_at` descending
    #[serde(rename = "newest")]
    Newest,
}

impl UserSortKey {
    const EXPECTED: &'static str = "name, name-desc, status, roles, newest";

    /// Key as submitted by the toolbar
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::NameDesc => "name-desc",
            Self::Status => "status",
            Self::Roles => "roles",
            Self::Newest => "newest",
        }
    }
}

impl FromStr for UserSortKey {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(Self::Name),
            "name-desc" => Ok(Self::NameDesc),
            "status" => Ok(Self::Status),
            "roles" => Ok(Self::Roles),
            "newest" => Ok(Self::Newest),
            other => Err(ViewError::unknown("user sort key", other, Self::EXPECTED)),
        }
    }
}

impl fmt::Display for NoteStatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for NoteSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UserStatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RoleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(role) => write!(f, "{}", role),
        }
    }
}

impl fmt::Display for UserSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Toolbar state of the notes list
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteViewParams {
    /// Free-text search over title, text and owner
    pub search_term: String,

    /// Completion filter
    pub status: NoteStatusFilter,

    /// Sort order
    pub sort_by: NoteSortKey,
}

impl NoteViewParams {
    /// Set the search term
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Set the completion filter
    pub fn with_status(mut self, status: NoteStatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Set the sort order
    pub fn with_sort(mut self, sort_by: NoteSortKey) -> Self {
        self.sort_by = sort_by;
        self
    }
}

/// Toolbar state of the users list
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct UserViewParams {
    /// Free-text search over usernames
    pub search_term: String,

    /// Account status filter
    pub status: UserStatusFilter,

    /// Role filter
    pub role: RoleFilter,

    /// Sort order
    pub sort_by: UserSortKey,
}

impl UserViewParams {
    /// Set the search term
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Set the account status filter
    pub fn with_status(mut self, status: UserStatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Set the role filter
    pub fn with_role(mut self, role: impl Into<RoleFilter>) -> Self {
        self.role = role.into();
        self
    }

    /// Set the sort order
    pub fn with_sort(mut self, sort_by: UserSortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Reset search and filters, keeping the sort order
    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.status = UserStatusFilter::All;
        self.role = RoleFilter::All;
    }
}
