//! The pitch record, the sole persisted entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Column bound for the submitted phrase and each term.
pub const MAX_TERM_LEN: usize = 250;

/// Column bound for the generated pitch text.
pub const MAX_PITCH_LEN: usize = 4096;

/// A generated pitch as stored.
///
/// After creation only `pitch` (via edit) and `deleted` (via toggle) ever
/// change; `created_at` is set once and never updated.
#[derive(Debug, Clone, Serialize)]
pub struct Pitch {
    pub id: i64,
    /// The user-submitted phrase
    pub prompt: String,
    /// Related terms, in acceptance order
    pub one: String,
    pub two: String,
    pub three: String,
    /// The generated pitch text
    pub pitch: String,
    pub created_at: DateTime<Utc>,
    /// Soft-delete flag; true means "in trash", not removed
    pub deleted: bool,
}

/// Input for creating a pitch record.
#[derive(Debug, Clone)]
pub struct NewPitch {
    pub prompt: String,
    pub one: String,
    pub two: String,
    pub three: String,
    pub pitch: String,
}

/// Which slice of records a listing wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    /// Records not in the trash
    Active,
    /// Only records in the trash
    Trashed,
    /// Everything, regardless of the deleted flag
    All,
}
