use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Scheduling state carried by every inflection card.
///
/// `next_due == None` means the card has never been activated for study and
/// is invisible to the scheduler. `total_correct <= total_reviews` always
/// holds because both counters are only touched by the review update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SrsState {
    /// Ease factor; grows intervals after repeated recall. Range [floor, 2.5].
    #[serde(default = "default_ease")]
    pub ease: f64,
    /// Current repetition interval in whole seconds.
    #[serde(default)]
    pub interval_secs: i64,
    /// Consecutive successful recalls; resets to zero on failure.
    #[serde(default)]
    pub consecutive_correct: u32,
    pub last_reviewed: Option<DateTime<Utc>>,
    pub next_due: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_reviews: u32,
    #[serde(default)]
    pub total_correct: u32,
    #[serde(default)]
    pub in_relearning: bool,
}

fn default_ease() -> f64 {
    2.5
}

impl Default for SrsState {
    fn default() -> Self {
        Self {
            ease: default_ease(),
            interval_secs: 0,
            consecutive_correct: 0,
            last_reviewed: None,
            next_due: None,
            total_reviews: 0,
            total_correct: 0,
            in_relearning: false,
        }
    }
}

impl SrsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activated cards have a scheduled due time; everything else is ignored
    /// by the study queries.
    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// A card counts as new until its first review, even if it was activated.
    pub fn is_new(&self) -> bool {
        self.next_due.is_none() || self.total_reviews == 0
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        matches!(self.next_due, Some(due) if due <= now)
    }
}
