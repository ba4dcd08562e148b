//! Users projection integration tests

use chrono::{DateTime, TimeZone, Utc};
use technotes_core::{EntityState, Role, User};
use technotes_views::{
    project_users, RoleFilter, UserSortKey, UserStats, UserStatusFilter, UserViewParams,
};

// ===== Test Helpers =====

fn month(m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, m, 1, 0, 0, 0).unwrap()
}

fn create_user(id: &str, username: &str, active: bool, roles: &[Role], created: u32) -> User {
    let mut user = User::new(id, username, roles.iter().copied(), month(created));
    user.active = active;
    user
}

fn names(users: &[User]) -> Vec<&str> {
    users.iter().map(|u| u.username.as_str()).collect()
}

fn team() -> EntityState<User> {
    EntityState::from_entities(vec![
        create_user("1", "zed", true, &[Role::Employee], 3),
        create_user("2", "amy", false, &[Role::Admin], 1),
        create_user("3", "Bob", true, &[Role::Employee, Role::Manager], 5),
        create_user("4", "carla", true, &[Role::Employee], 2),
        create_user("5", "dan", false, &[Role::Employee], 4),
    ])
}

// ===== Scenarios =====

#[test]
fn test_sort_by_name() {
    let users = EntityState::from_entities(vec![
        create_user("1", "zed", true, &[Role::Employee], 1),
        create_user("2", "amy", false, &[Role::Admin], 1),
    ]);
    let view = project_users(&users, &UserViewParams::default());
    assert_eq!(names(&view.users), vec!["amy", "zed"]);
    assert_eq!(view.stats.admins, 1);

    // Filters never change the global stats.
    let filtered = project_users(
        &users,
        &UserViewParams::default().with_role(RoleFilter::Only(Role::Employee)),
    );
    assert_eq!(names(&filtered.users), vec!["zed"]);
    assert_eq!(filtered.stats.admins, 1);
}

#[test]
fn test_name_sort_ignores_case() {
    let view = project_users(&team(), &UserViewParams::default());
    assert_eq!(names(&view.users), vec!["amy", "Bob", "carla", "dan", "zed"]);

    let desc = project_users(&team(), &UserViewParams::default().with_sort(UserSortKey::NameDesc));
    assert_eq!(names(&desc.users), vec!["zed", "dan", "carla", "Bob", "amy"]);
}

#[test]
fn test_status_sort_active_first_stable() {
    let params = UserViewParams::default().with_sort(UserSortKey::Status);
    let view = project_users(&team(), &params);
    assert_eq!(names(&view.users), vec!["zed", "Bob", "carla", "amy", "dan"]);
}

#[test]
fn test_newest_sort() {
    let params = UserViewParams::default().with_sort(UserSortKey::Newest);
    let view = project_users(&team(), &params);
    assert_eq!(names(&view.users), vec!["Bob", "dan", "zed", "carla", "amy"]);
}

#[test]
fn test_newest_sort_puts_undated_users_last() {
    let mut undated = create_user("6", "eve", true, &[Role::Employee], 1);
    undated.created_at = None;
    let users = EntityState::from_entities(vec![
        undated,
        create_user("1", "zed", true, &[Role::Employee], 3),
        create_user("2", "amy", true, &[Role::Admin], 6),
    ]);
    let params = UserViewParams::default().with_sort(UserSortKey::Newest);
    let view = project_users(&users, &params);
    assert_eq!(names(&view.users), vec!["amy", "zed", "eve"]);
}

#[test]
fn test_name_sort_accented_names() {
    let users = EntityState::from_entities(vec![
        create_user("1", "Zoe", true, &[Role::Employee], 1),
        create_user("2", "Émile", true, &[Role::Employee], 1),
        create_user("3", "david", true, &[Role::Employee], 1),
    ]);
    let view = project_users(&users, &UserViewParams::default());
    assert_eq!(names(&view.users), vec!["david", "Émile", "Zoe"]);
}

#[test]
fn test_roles_sort_groups_by_count() {
    let params = UserViewParams::default().with_sort(UserSortKey::Roles);
    let view = project_users(&team(), &params);
    assert_eq!(names(&view.users), vec!["zed", "amy", "carla", "dan", "Bob"]);
}

// ===== Filters =====

#[test]
fn test_search_is_case_insensitive() {
    let params = UserViewParams::default().with_search("B");
    let view = project_users(&team(), &params);
    assert_eq!(names(&view.users), vec!["Bob"]);

    let params = UserViewParams::default().with_search("A");
    let view = project_users(&team(), &params);
    assert_eq!(names(&view.users), vec!["amy", "carla", "dan"]);
}

#[test]
fn test_filters_combine() {
    let params = UserViewParams::default()
        .with_search("a")
        .with_status(UserStatusFilter::Inactive)
        .with_role(Role::Employee);
    let view = project_users(&team(), &params);
    assert_eq!(names(&view.users), vec!["dan"]);
    assert_eq!(view.showing(), (1, 5));
}

#[test]
fn test_clear_filters_restores_full_list() {
    let mut params = UserViewParams::default()
        .with_search("zzz")
        .with_status(UserStatusFilter::Active);
    assert!(project_users(&team(), &params).is_empty());

    params.clear_filters();
    assert_eq!(project_users(&team(), &params).users.len(), 5);
}

// ===== Stats =====

#[test]
fn test_global_stats() {
    let view = project_users(&team(), &UserViewParams::default().with_search("nobody"));
    assert!(view.is_empty());
    assert_eq!(
        view.stats,
        UserStats {
            total: 5,
            active: 3,
            inactive: 2,
            admins: 1,
            managers: 1,
            employees: 4
        }
    );
}

#[test]
fn test_empty_snapshot() {
    let view = project_users(&EntityState::new(), &UserViewParams::default());
    assert!(view.is_empty());
    assert_eq!(view.stats, UserStats::default());
    assert_eq!(view.showing(), (0, 0));
}

#[test]
fn test_roleless_user_is_tolerated() {
    let users = EntityState::from_entities(vec![
        create_user("1", "ivy", true, &[Role::Employee], 1),
        create_user("2", "orphan", true, &[], 1),
    ]);
    let view = project_users(&users, &UserViewParams::default().with_sort(UserSortKey::Roles));
    assert_eq!(names(&view.users), vec!["orphan", "ivy"]);
    assert_eq!(view.stats.employees, 1);
    assert_eq!(view.stats.total, 2);
}
