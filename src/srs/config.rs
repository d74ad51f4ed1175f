use std::{
    fs,
    path::Path,
};

use serde::{
    Deserialize,
    Serialize,
};

/// Scheduler tuning knobs. Defaults mirror a conservative SM-2 setup: two
/// short learning steps, then ease-multiplied intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SrsConfig {
    /// Ease never drops below this, so failed cards keep growing again.
    pub ease_floor: f64,
    pub initial_ease: f64,
    /// Interval after the first successful recall, in seconds.
    pub first_interval_secs: i64,
    /// Interval after the second successful recall, in seconds.
    pub second_interval_secs: i64,
    /// Interval a failed card is bounced back to, in seconds.
    pub relearn_interval_secs: i64,
    /// Subtracted from ease on every failed recall.
    pub fail_penalty: f64,
    pub max_new_per_day: usize,
    pub max_reviews_per_day: usize,
    /// Shuffle due cards before ordering so ties come out in random order.
    pub shuffle: bool,
}

impl Default for SrsConfig {
    fn default() -> Self {
        Self {
            ease_floor: 1.3,
            initial_ease: 2.5,
            first_interval_secs: 600,
            second_interval_secs: 3600,
            relearn_interval_secs: 30,
            fail_penalty: 0.2,
            max_new_per_day: 20,
            max_reviews_per_day: 100,
            shuffle: true,
        }
    }
}

impl SrsConfig {
    /// Loads a config file, falling back to defaults when the file is missing
    /// or malformed. Study should never be blocked by a bad config.
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Invalid SRS config at {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                },
            },
            Err(_) => Self::default(),
        }
    }
}
