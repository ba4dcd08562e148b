//! TechNotes Core
//!
//! Platform-agnostic domain types, entity snapshots and draft validation
//! for the TechNotes ticketing application.
//!
//! This crate provides the building blocks consumed by the view projectors
//! and by any front-end that renders notes and user accounts.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Note`, `User`, `Role`, `Actor` and their ids
//! - **Entity State**: the normalized `{ids, entities}` snapshot supplied by the
//!   external entity cache
//! - **Validation**: the save rules for note and user drafts
//! - **Error Handling**: unified `TechNotesError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use technotes_core::{Actor, EntityState, Note, Role};
//! use chrono::{TimeZone, Utc};
//!
//! let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
//! let note = Note::new("n1", 1, "Printer jam", "Tray 2", "alice", "u1", at);
//! let notes = EntityState::from_entities(vec![note]);
//!
//! let actor = Actor::new("alice", [Role::Employee]);
//! assert!(!actor.is_privileged());
//! assert_eq!(notes.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod entity_state;
pub mod error;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use entity_state::{Entity, EntityState};
pub use error::{Result, TechNotesError};
pub use types::{Actor, Note, NoteId, Role, User, UserId};
pub use validation::{NewUserDraft, NoteDraft, UserUpdateDraft, ValidationError};
