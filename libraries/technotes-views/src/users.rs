//! Users list projection
//!
//! No role gate here: only managers and admins can reach the users list, and
//! that check belongs to whoever routes to it (see
//! [`Actor::can_manage_users`](technotes_core::Actor::can_manage_users)).
//!
//! Unlike the notes stats, the user stats are organisation-wide KPIs and are
//! counted over the whole snapshot, not over the filtered list.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;
use technotes_core::{EntityState, Role, User};

use crate::collation::{contains_ignore_case, locale_cmp, search_needle};
use crate::memo::Memo;
use crate::ordering::newest_first;
use crate::params::{RoleFilter, UserSortKey, UserStatusFilter, UserViewParams};

/// Global account counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// All accounts
    pub total: usize,

    /// Accounts that may sign in
    pub active: usize,

    /// Disabled accounts
    pub inactive: usize,

    /// Accounts holding Admin
    pub admins: usize,

    /// Accounts holding Manager
    pub managers: usize,

    /// Accounts holding Employee
    pub employees: usize,
}

impl UserStats {
    /// Count over every account
    pub fn from_users<'a>(users: impl IntoIterator<Item = &'a User>) -> Self {
        let mut stats = Self::default();
        for user in users {
            stats.total += 1;
            if user.active {
                stats.active += 1;
            } else {
                stats.inactive += 1;
            }
            stats.admins += usize::from(user.has_role(Role::Admin));
            stats.managers += usize::from(user.has_role(Role::Manager));
            stats.employees += usize::from(user.has_role(Role::Employee));
        }
        stats
    }
}

/// Ordered users plus global stats
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersView {
    /// Users in display order
    pub users: Vec<User>,

    /// Counts over the whole snapshot
    pub stats: UserStats,
}

impl UsersView {
    /// `(shown, total)` for the "Showing N of M users" line
    pub fn showing(&self) -> (usize, usize) {
        (self.users.len(), self.stats.total)
    }

    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Project a users snapshot
pub fn project_users(users: &EntityState<User>, params: &UserViewParams) -> UsersView {
    let mut shown: Vec<&User> = users.iter().collect();

    if let Some(needle) = search_needle(&params.search_term) {
        shown.retain(|user| contains_ignore_case(&user.username, &needle));
    }
    shown.retain(|user| matches_status(user, params.status));
    shown.retain(|user| matches_role(user, params.role));

    let compare = comparator(params.sort_by);
    shown.sort_by(|a, b| compare(*a, *b));

    let stats = UserStats::from_users(users.iter());
    warn_malformed(users);

    tracing::debug!(
        snapshot = users.len(),
        shown = shown.len(),
        role = %params.role,
        sort = %params.sort_by,
        "Projected users"
    );

    UsersView {
        users: shown.into_iter().cloned().collect(),
        stats,
    }
}

fn matches_status(user: &User, status: UserStatusFilter) -> bool {
    match status {
        UserStatusFilter::All => true,
        UserStatusFilter::Active => user.active,
        UserStatusFilter::Inactive => !user.active,
    }
}

fn matches_role(user: &User, role: RoleFilter) -> bool {
    match role {
        RoleFilter::All => true,
        RoleFilter::Only(role) => user.has_role(role),
    }
}

type UserComparator = fn(&User, &User) -> Ordering;

fn comparator(sort_by: UserSortKey) -> UserComparator {
    match sort_by {
        UserSortKey::Name => |a, b| locale_cmp(&a.username, &b.username),
        UserSortKey::NameDesc => |a, b| locale_cmp(&b.username, &a.username),
        // true sorts before false
        UserSortKey::Status => |a, b| b.active.cmp(&a.active),
        UserSortKey::Roles => |a, b| a.role_count().cmp(&b.role_count()),
        UserSortKey::Newest => |a, b| newest_first(a.created_at, b.created_at),
    }
}

fn warn_malformed(users: &EntityState<User>) {
    let roleless = users.iter().filter(|u| u.roles.is_empty()).count();
    if roleless > 0 {
        tracing::warn!(count = roleless, "Users with an empty role set");
    }
}

/// Memoizing users projector
pub struct UsersProjector {
    memo: Memo<EntityState<User>, UserViewParams, UsersView>,
}

impl UsersProjector {
    /// Create a projector with an empty cache
    pub fn new() -> Self {
        Self { memo: Memo::new() }
    }

    /// Project, reusing the previous result when nothing changed
    pub fn project(
        &mut self,
        snapshot: &Arc<EntityState<User>>,
        params: &UserViewParams,
    ) -> &UsersView {
        self.memo.get_or_compute(snapshot, params, project_users)
    }

    /// Drop the cached result
    pub fn invalidate(&mut self) {
        self.memo.clear();
    }

    /// Calls answered from the cache
    pub fn cache_hits(&self) -> u64 {
        self.memo.hits()
    }

    /// Calls that ran the projection
    pub fn cache_misses(&self) -> u64 {
        self.memo.misses()
    }
}

impl Default for UsersProjector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn user(id: &str, name: &str, active: bool, roles: &[Role]) -> User {
        let at = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let mut user = User::new(id, name, roles.iter().copied(), at);
        user.active = active;
        user
    }

    #[test]
    fn stats_ignore_filters() {
        let users = EntityState::from_entities(vec![
            user("1", "zed", true, &[Role::Employee]),
            user("2", "amy", false, &[Role::Admin, Role::Manager]),
        ]);
        let params = UserViewParams::default().with_status(UserStatusFilter::Active);
        let view = project_users(&users, &params);

        assert_eq!(view.showing(), (1, 2));
        assert_eq!(
            view.stats,
            UserStats {
                total: 2,
                active: 1,
                inactive: 1,
                admins: 1,
                managers: 1,
                employees: 1
            }
        );
    }

    #[test]
    fn role_filter_requires_exact_role() {
        let users = EntityState::from_entities(vec![
            user("1", "a", true, &[Role::Employee]),
            user("2", "b", true, &[Role::Employee, Role::Manager]),
            user("3", "c", true, &[Role::Admin]),
        ]);
        let view = project_users(&users, &UserViewParams::default().with_role(Role::Manager));
        let names: Vec<&str> = view.users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["b"]);
    }

    #[test]
    fn roles_sort_is_by_count_and_stable() {
        let users = EntityState::from_entities(vec![
            user("1", "two", true, &[Role::Employee, Role::Manager]),
            user("2", "one-a", true, &[Role::Admin]),
            user("3", "none", true, &[]),
            user("4", "one-b", true, &[Role::Employee]),
        ]);
        let view = project_users(&users, &UserViewParams::default().with_sort(UserSortKey::Roles));
        let names: Vec<&str> = view.users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["none", "one-a", "one-b", "two"]);
    }

    #[test]
    fn projector_reuses_result() {
        let snapshot = Arc::new(EntityState::from_entities(vec![user(
            "1",
            "amy",
            true,
            &[Role::Admin],
        )]));
        let params = UserViewParams::default();
        let mut projector = UsersProjector::new();

        projector.project(&snapshot, &params);
        projector.project(&snapshot, &params);
        assert_eq!((projector.cache_hits(), projector.cache_misses()), (1, 1));

        projector.invalidate();
        projector.project(&snapshot, &params);
        assert_eq!(projector.cache_misses(), 2);
    }
}
