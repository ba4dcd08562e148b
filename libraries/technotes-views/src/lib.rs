//! TechNotes - List View Projection
//!
//! Pure derivation of the notes and users lists from a normalized entity
//! snapshot.
//!
//! This crate provides:
//! - Role gate (employees see only their own notes)
//! - Case-insensitive substring search
//! - Status and role filters
//! - Stable sorting with locale-aware name/title ordering
//! - Stats panels (filtered for notes, global for users)
//! - Memoizing projectors keyed on snapshot identity
//!
//! # Architecture
//!
//! `technotes-views` owns no state beyond the last memoized result. The entity
//! cache, the HTTP client and the renderer live elsewhere; a snapshot goes in,
//! an ordered list plus stats comes out. Projection never fails: empty input
//! yields an empty list and zeroed stats.
//!
//! # Example: Notes for an employee
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use technotes_core::{Actor, EntityState, Note, Role};
//! use technotes_views::{project_notes, NoteSortKey, NoteViewParams};
//!
//! let day = |d| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap();
//! let notes = EntityState::from_entities(vec![
//!     Note::new("1", 1, "Reset password", "", "alice", "u1", day(1)),
//!     Note::new("2", 2, "Order laptops", "", "bob", "u2", day(2)),
//! ]);
//!
//! let alice = Actor::new("alice", [Role::Employee]);
//! let view = project_notes(&notes, &alice, &NoteViewParams::default());
//! assert_eq!(view.notes.len(), 1);
//! assert_eq!(view.stats.open, 1);
//!
//! let manager = Actor::new("mia", [Role::Manager]);
//! let params = NoteViewParams::default().with_sort(NoteSortKey::Oldest);
//! let view = project_notes(&notes, &manager, &params);
//! assert_eq!(view.notes[0].id.as_str(), "1");
//! ```
//!
//! # Example: Memoized users list
//!
//! ```rust
//! use std::sync::Arc;
//! use technotes_core::EntityState;
//! use technotes_views::{UserViewParams, UsersProjector};
//!
//! let snapshot = Arc::new(EntityState::new());
//! let mut projector = UsersProjector::new();
//!
//! let params: UserViewParams = UserViewParams::default().with_search("am");
//! assert!(projector.project(&snapshot, &params).is_empty());
//! assert!(projector.project(&snapshot, &params).is_empty());
//! assert_eq!(projector.cache_hits(), 1);
//! ```

pub mod collation;
mod error;
mod memo;
mod notes;
mod ordering;
pub mod params;
mod users;

// Public exports
pub use error::{Result, ViewError};
pub use notes::{project_notes, NoteStats, NotesProjector, NotesView};
pub use params::{
    NoteSortKey, NoteStatusFilter, NoteViewParams, RoleFilter, UserSortKey, UserStatusFilter,
    UserViewParams,
};
pub use users::{project_users, UserStats, UsersProjector, UsersView};
