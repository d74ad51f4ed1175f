//! The pure scheduling update.
//!
//! Intervals follow a truncated SM-2 ladder: a fixed first and second step,
//! then the previous interval times the ease factor. A failed recall drops the
//! ease by a flat penalty (never below the floor), bounces the interval back
//! to the relearn step and flags the card as relearning until the next
//! success.

use chrono::{
    DateTime,
    Duration,
    Utc,
};

use super::{
    config::SrsConfig,
    state::SrsState,
};

/// Activates a card for study: due immediately, ease at the configured
/// starting value. Already-active cards are reset the same way.
pub fn init_card(state: &mut SrsState, now: DateTime<Utc>, config: &SrsConfig) {
    state.ease = config.initial_ease;
    state.interval_secs = 0;
    state.consecutive_correct = 0;
    state.in_relearning = false;
    state.next_due = Some(now);
}

/// Applies one review outcome and reschedules the card.
pub fn review(state: &mut SrsState, recalled: bool, now: DateTime<Utc>, config: &SrsConfig) {
    state.total_reviews += 1;
    state.last_reviewed = Some(now);

    if recalled {
        state.total_correct += 1;
        state.consecutive_correct += 1;
        state.in_relearning = false;
        state.interval_secs = match state.consecutive_correct {
            1 => config.first_interval_secs,
            2 => config.second_interval_secs,
            _ => (state.interval_secs as f64 * state.ease) as i64,
        };
    } else {
        state.consecutive_correct = 0;
        state.ease = (state.ease - config.fail_penalty).max(config.ease_floor);
        state.interval_secs = config.relearn_interval_secs;
        state.in_relearning = true;
    }

    state.next_due = Some(now + Duration::seconds(state.interval_secs));
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn successful_recalls_climb_the_interval_ladder() {
        let config = SrsConfig::default();
        let mut state = SrsState::new();
        let now = start();
        init_card(&mut state, now, &config);

        review(&mut state, true, now, &config);
        assert_eq!(state.interval_secs, 600);
        assert_eq!(state.next_due, Some(now + Duration::seconds(600)));

        review(&mut state, true, now, &config);
        assert_eq!(state.interval_secs, 3600);

        review(&mut state, true, now, &config);
        assert_eq!(state.interval_secs, 9000); // 3600 * 2.5
        assert_eq!(state.consecutive_correct, 3);
        assert!(!state.in_relearning);
    }

    #[test]
    fn failure_resets_streak_and_enters_relearning() {
        let config = SrsConfig::default();
        let mut state = SrsState::new();
        let now = start();
        init_card(&mut state, now, &config);
        review(&mut state, true, now, &config);
        review(&mut state, true, now, &config);

        review(&mut state, false, now, &config);
        assert_eq!(state.consecutive_correct, 0);
        assert_eq!(state.interval_secs, 30);
        assert!(state.in_relearning);
        assert!((state.ease - 2.3).abs() < 1e-9);
        assert_eq!(state.total_reviews, 3);
        assert_eq!(state.total_correct, 2);

        // Recovery restarts at the first step.
        review(&mut state, true, now, &config);
        assert_eq!(state.interval_secs, 600);
        assert!(!state.in_relearning);
    }

    #[test]
    fn ease_never_drops_below_the_floor() {
        let config = SrsConfig::default();
        let mut state = SrsState::new();
        let now = start();
        init_card(&mut state, now, &config);
        for _ in 0..10 {
            review(&mut state, false, now, &config);
        }
        assert!((state.ease - config.ease_floor).abs() < 1e-9);
    }

    #[test]
    fn interval_multiplication_truncates() {
        let config = SrsConfig::default();
        let mut state = SrsState::new();
        let now = start();
        init_card(&mut state, now, &config);
        state.ease = 1.3;
        review(&mut state, true, now, &config);
        review(&mut state, true, now, &config);
        review(&mut state, true, now, &config);
        assert_eq!(state.interval_secs, 4680); // trunc(3600 * 1.3)
    }
}
