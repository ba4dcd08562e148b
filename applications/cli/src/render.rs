//! Plain-text rendering of projected views

use chrono::{DateTime, Utc};
use std::fmt::Write;
use technotes_core::{Note, User};
use technotes_views::{NotesView, UsersView};

const CREATED_FORMAT: &str = "%b %-d, %Y";
const UPDATED_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

fn format_date(at: Option<DateTime<Utc>>, format: &str) -> String {
    at.map_or_else(|| "unknown".to_string(), |at| at.format(format).to_string())
}

/// Status label shown on a note card
pub fn note_status_label(note: &Note) -> &'static str {
    if note.completed {
        "Completed"
    } else {
        "In Progress"
    }
}

/// One list line for a note
pub fn note_line(note: &Note) -> String {
    let mut line = format!(
        "{:<6} {:<11} {:<30} {:<16} created {}",
        note.ticket_label(),
        note_status_label(note),
        note.title,
        note.username,
        format_date(note.created_at, CREATED_FORMAT),
    );
    if note.was_edited() {
        let _ = write!(
            line,
            ", updated {}",
            format_date(note.updated_at, UPDATED_FORMAT)
        );
    }
    line
}

/// "1 role" / "3 roles"
pub fn role_count_label(user: &User) -> String {
    let count = user.role_count();
    format!("{} role{}", count, if count == 1 { "" } else { "s" })
}

/// One list line for a user
pub fn user_line(user: &User) -> String {
    let roles = if user.roles.is_empty() {
        "No Role".to_string()
    } else {
        user.roles
            .iter()
            .rev()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "{:<20} {:<8} {:<28} {}",
        user.username,
        if user.active { "Active" } else { "Inactive" },
        roles,
        role_count_label(user),
    )
}

/// Notes list followed by its stats block
pub fn render_notes(view: &NotesView) -> String {
    let mut out = String::new();
    if view.is_empty() {
        out.push_str("No notes found\n");
    }
    for note in &view.notes {
        out.push_str(&note_line(note));
        out.push('\n');
    }
    let stats = &view.stats;
    let _ = writeln!(
        out,
        "\nTotal: {}  Completed: {}  In Progress: {}  Team Members: {}",
        stats.total, stats.completed, stats.open, stats.distinct_owners
    );
    out
}

/// Users list followed by the global stats block
pub fn render_users(view: &UsersView) -> String {
    let mut out = String::new();
    let stats = &view.stats;
    let _ = writeln!(
        out,
        "Total: {}  Active: {}  Inactive: {}  Admins: {}  Managers: {}  Employees: {}\n",
        stats.total, stats.active, stats.inactive, stats.admins, stats.managers, stats.employees
    );
    for user in &view.users {
        out.push_str(&user_line(user));
        out.push('\n');
    }
    let (shown, total) = view.showing();
    let _ = writeln!(out, "\nShowing {} of {} users", shown, total);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use technotes_core::Role;

    #[test]
    fn note_line_shows_update_only_when_edited() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
        let mut note = Note::new("n1", 12, "Fix VPN", "", "alice", "u1", at);
        let line = note_line(&note);
        assert!(line.starts_with("#12"));
        assert!(line.contains("In Progress"));
        assert!(line.contains("created Mar 5, 2024"));
        assert!(!line.contains("updated"));

        note.updated_at = Some(at + Duration::hours(1));
        note.completed = true;
        let line = note_line(&note);
        assert!(line.contains("Completed"));
        assert!(line.ends_with("updated Mar 5, 2024, 03:07 PM"));
    }

    #[test]
    fn undated_note_renders_unknown_date() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
        let mut note = Note::new("n2", 13, "Mouse", "", "bob", "u2", at);
        note.created_at = None;
        let line = note_line(&note);
        assert!(line.ends_with("created unknown"));
    }

    #[test]
    fn user_line_lists_roles_highest_first() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let user = User::new("u1", "carol", [Role::Employee, Role::Manager], at);
        let line = user_line(&user);
        assert!(line.contains("Manager, Employee"));
        assert!(line.ends_with("2 roles"));

        let mut lonely = User::new("u2", "dave", [], at);
        lonely.active = false;
        let line = user_line(&lonely);
        assert!(line.contains("Inactive"));
        assert!(line.contains("No Role"));
        assert!(line.ends_with("0 roles"));
    }

    #[test]
    fn empty_notes_view() {
        let out = render_notes(&NotesView::default());
        assert!(out.starts_with("No notes found"));
        assert!(out.contains("Total: 0  Completed: 0  In Progress: 0  Team Members: 0"));
    }
}
