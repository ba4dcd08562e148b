/// Note domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{NoteId, UserId};
use super::timestamp;
use crate::entity_state::Entity;

/// A ticket note assigned to an employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique note identifier
    pub id: NoteId,

    /// Display number; may repeat after deletions
    pub ticket: u64,

    /// Short title
    pub title: String,

    /// Body text
    pub text: String,

    /// Whether the ticket is done
    #[serde(default)]
    pub completed: bool,

    /// Owner's username, copied at creation time (may be stale after a rename)
    pub username: String,

    /// Assigned user
    pub user: UserId,

    /// Creation timestamp; `None` when missing or unreadable in the payload
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp; `None` when missing or unreadable in the payload
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Create an open note whose update timestamp equals its creation timestamp
    pub fn new(
        id: impl Into<NoteId>,
        ticket: u64,
        title: impl Into<String>,
        text: impl Into<String>,
        username: impl Into<String>,
        user: impl Into<UserId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            ticket,
            title: title.into(),
            text: text.into(),
            completed: false,
            username: username.into(),
            user: user.into(),
            created_at: Some(created_at),
            updated_at: Some(created_at),
        }
    }

    /// Whether the note changed after creation
    ///
    /// Needs both timestamps; a note missing either is never reported edited.
    pub fn was_edited(&self) -> bool {
        matches!(
            (self.created_at, self.updated_at),
            (Some(created), Some(updated)) if updated != created
        )
    }

    /// Ticket number as shown in lists (`#12`)
    pub fn ticket_label(&self) -> String {
        format!("#{}", self.ticket)
    }

    /// Whether the timestamps violate `updated_at >= created_at`
    pub fn has_inverted_timestamps(&self) -> bool {
        matches!(
            (self.created_at, self.updated_at),
            (Some(created), Some(updated)) if updated < created
        )
    }
}

impl Entity for Note {
    type Id = NoteId;

    fn id(&self) -> &NoteId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample() -> Note {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 8, 30, 0).unwrap();
        Note::new("n1", 7, "Replace toner", "Floor 3 printer", "alice", "u1", at)
    }

    #[test]
    fn new_note_is_open_and_unedited() {
        let note = sample();
        assert!(!note.completed);
        assert!(!note.was_edited());
        assert_eq!(note.ticket_label(), "#7");
    }

    #[test]
    fn edited_note_detected() {
        let mut note = sample();
        note.updated_at = note.created_at.map(|at| at + Duration::minutes(5));
        assert!(note.was_edited());
        assert!(!note.has_inverted_timestamps());
    }

    #[test]
    fn deserializes_api_payload() {
        let json = r#"{
            "id": "65a1",
            "ticket": 500,
            "title": "VPN down",
            "text": "Cannot connect from home",
            "completed": true,
            "username": "bob",
            "user": "u2",
            "createdAt": "2024-01-02T10:00:00.000Z",
            "updatedAt": "2024-01-03T11:15:00.000Z"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id.as_str(), "65a1");
        assert!(note.completed);
        assert!(note.was_edited());
        assert_eq!(note.user.as_str(), "u2");
    }

    fn payload(created: &str, updated: &str) -> String {
        format!(
            r#"{{"id":"n9","ticket":9,"title":"Desk","text":"Wobbly","username":"alice","user":"u1"{}{}}}"#,
            created, updated
        )
    }

    #[test]
    fn accepts_date_only_timestamps() {
        let json = payload(r#","createdAt":"2024-01-01""#, r#","updatedAt":"2024-01-02""#);
        let note: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(
            note.created_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
        assert!(note.was_edited());
    }

    #[test]
    fn accepts_epoch_millis() {
        let json = payload(r#","createdAt":1704067200000"#, r#","updatedAt":1704067200000"#);
        let note: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(
            note.created_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
        assert!(!note.was_edited());
    }

    #[test]
    fn tolerates_missing_and_unreadable_timestamps() {
        let json = payload(r#","createdAt":"not a date""#, "");
        let note: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(note.created_at, None);
        assert_eq!(note.updated_at, None);
        assert!(!note.was_edited());
        assert!(!note.has_inverted_timestamps());
    }

    #[test]
    fn timestamps_serialize_as_rfc3339() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["createdAt"], "2024-01-01T08:30:00Z");
        let back: Note = serde_json::from_value(value).unwrap();
        assert_eq!(back, sample());
    }
}
