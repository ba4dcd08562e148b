//! Orderings over optional timestamps
//!
//! A record whose timestamp is missing sorts after every dated record in
//! both directions; the stable sort keeps undated records in input order.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

type Timestamp = Option<DateTime<Utc>>;

/// Latest first, undated last
pub(crate) fn newest_first(a: Timestamp, b: Timestamp) -> Ordering {
    dated_first(a, b, |a, b| b.cmp(&a))
}

/// Earliest first, undated last
pub(crate) fn oldest_first(a: Timestamp, b: Timestamp) -> Ordering {
    dated_first(a, b, |a, b| a.cmp(&b))
}

fn dated_first(
    a: Timestamp,
    b: Timestamp,
    by: impl FnOnce(DateTime<Utc>, DateTime<Utc>) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => by(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
