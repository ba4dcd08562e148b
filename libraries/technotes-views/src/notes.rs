//! Notes list projection
//!
//! Stages run in a fixed order, each narrowing the previous output:
//!
//! ```text
//! snapshot ──► role gate ──► search ──► status ──► stable sort ──► stats
//! ```
//!
//! The role gate comes first so that no later stage can see, and therefore
//! leak, a note the actor may not read.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;
use technotes_core::{Actor, EntityState, Note};

use crate::collation::{contains_ignore_case, locale_cmp, search_needle};
use crate::memo::Memo;
use crate::ordering::{newest_first, oldest_first};
use crate::params::{NoteSortKey, NoteStatusFilter, NoteViewParams};

/// Counts shown above the notes list
///
/// Computed over the final list so they always match what is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteStats {
    /// Notes shown
    pub total: usize,

    /// Completed notes shown
    pub completed: usize,

    /// Open notes shown
    pub open: usize,

    /// Distinct owner usernames shown
    pub distinct_owners: usize,
}

impl NoteStats {
    /// Count over a list of notes
    pub fn from_notes<'a>(notes: impl IntoIterator<Item = &'a Note>) -> Self {
        let mut stats = Self::default();
        let mut owners = HashSet::new();
        for note in notes {
            stats.total += 1;
            if note.completed {
                stats.completed += 1;
            } else {
                stats.open += 1;
            }
            owners.insert(note.username.as_str());
        }
        stats.distinct_owners = owners.len();
        stats
    }
}

/// Ordered notes plus their stats
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesView {
    /// Notes in display order
    pub notes: Vec<Note>,

    /// Counts over `notes`
    pub stats: NoteStats,
}

impl NotesView {
    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Project a notes snapshot for `actor`
///
/// Employees only ever see notes whose `username` equals theirs exactly
/// (case-sensitive); managers and admins see every note.
pub fn project_notes(
    notes: &EntityState<Note>,
    actor: &Actor,
    params: &NoteViewParams,
) -> NotesView {
    let mut visible: Vec<&Note> = if actor.can_view_all_notes() {
        notes.iter().collect()
    } else {
        notes
            .iter()
            .filter(|note| note.username == actor.username)
            .collect()
    };
    let gated = visible.len();

    if let Some(needle) = search_needle(&params.search_term) {
        visible.retain(|note| matches_search(note, &needle));
    }
    let searched = visible.len();

    visible.retain(|note| matches_status(note, params.status));

    warn_malformed(&visible);

    // `sort_by` is stable, so ties keep snapshot order.
    let compare = comparator(params.sort_by);
    visible.sort_by(|a, b| compare(*a, *b));

    tracing::debug!(
        actor = %actor.username,
        privileged = actor.is_privileged(),
        snapshot = notes.len(),
        gated,
        searched,
        shown = visible.len(),
        sort = %params.sort_by,
        "Projected notes"
    );

    let stats = NoteStats::from_notes(visible.iter().copied());
    NotesView {
        notes: visible.into_iter().cloned().collect(),
        stats,
    }
}

fn matches_search(note: &Note, needle: &str) -> bool {
    contains_ignore_case(&note.title, needle)
        || contains_ignore_case(&note.text, needle)
        || contains_ignore_case(&note.username, needle)
}

fn matches_status(note: &Note, status: NoteStatusFilter) -> bool {
    match status {
        NoteStatusFilter::All => true,
        NoteStatusFilter::Completed => note.completed,
        NoteStatusFilter::Open => !note.completed,
    }
}

type NoteComparator = fn(&Note, &Note) -> Ordering;

fn comparator(sort_by: NoteSortKey) -> NoteComparator {
    match sort_by {
        NoteSortKey::Newest => |a, b| newest_first(a.created_at, b.created_at),
        NoteSortKey::Oldest => |a, b| oldest_first(a.created_at, b.created_at),
        NoteSortKey::Updated => |a, b| newest_first(a.updated_at, b.updated_at),
        NoteSortKey::Title => |a, b| locale_cmp(&a.title, &b.title),
        // false < true puts open notes first
        NoteSortKey::Status => |a, b| a.completed.cmp(&b.completed),
    }
}

fn warn_malformed(notes: &[&Note]) {
    let inverted = notes.iter().filter(|n| n.has_inverted_timestamps()).count();
    if inverted > 0 {
        tracing::warn!(count = inverted, "Notes with updatedAt before createdAt");
    }
}

/// Memoizing notes projector
///
/// Holds the last result and returns it while the snapshot `Arc`, the actor
/// and the parameters are unchanged, so re-rendering on every keystroke does
/// not re-sort an unchanged list.
pub struct NotesProjector {
    memo: Memo<EntityState<Note>, (Actor, NoteViewParams), NotesView>,
}

impl NotesProjector {
    /// Create a projector with an empty cache
    pub fn new() -> Self {
        Self { memo: Memo::new() }
    }

    /// Project, reusing the previous result when nothing changed
    pub fn project(
        &mut self,
        snapshot: &Arc<EntityState<Note>>,
        actor: &Actor,
        params: &NoteViewParams,
    ) -> &NotesView {
        let key = (actor.clone(), params.clone());
        self.memo.get_or_compute(snapshot, &key, |notes, (actor, params)| {
            project_notes(notes, actor, params)
        })
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

impl Default for NotesProjector {
    fn default() -> Self {
        Self::new()
    }
}
