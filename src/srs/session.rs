//! Study queue construction and review bookkeeping on top of a card store.

use chrono::{
    DateTime,
    Utc,
};
use rand::{
    rngs::StdRng,
    seq::SliceRandom,
    SeedableRng,
};

use super::{
    config::SrsConfig,
    scheduler,
};
use crate::{
    core::{
        CardKey,
        SklonError,
    },
    phrase::CriteriaSet,
    store::CardStore,
    words::Inflection,
};

/// Aggregate progress numbers over the eligible portion of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Statistics {
    pub total: usize,
    /// Cards reviewed at least once.
    pub studied: usize,
    /// Cards never activated for study.
    pub fresh: usize,
    pub due_now: usize,
    pub in_relearning: usize,
    pub total_reviews: u64,
    pub total_correct: u64,
    /// Correct reviews over all reviews, as a percentage. Zero when nothing
    /// has been reviewed.
    pub accuracy_rate: f64,
}

/// One learner's study state: a card store, scheduler settings, and the rng
/// used to shuffle queues. Seedable so tests get deterministic order.
pub struct StudySession<S: CardStore> {
    store: S,
    config: SrsConfig,
    rng: StdRng,
}

impl<S: CardStore> StudySession<S> {
    pub fn new(store: S, config: SrsConfig) -> Self {
        Self { store, config, rng: StdRng::from_os_rng() }
    }

    pub fn with_seed(store: S, config: SrsConfig, seed: u64) -> Self {
        Self { store, config, rng: StdRng::seed_from_u64(seed) }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &SrsConfig {
        &self.config
    }

    fn eligible(&self, criteria: &CriteriaSet) -> Result<Vec<Inflection>, SklonError> {
        let mut pool = Vec::new();
        for kind in crate::core::WordKind::ALL {
            for card in self.store.cards(kind)? {
                if card.gloss().is_some() && criteria.matches(&card) {
                    pool.push(card);
                }
            }
        }
        Ok(pool)
    }

    /// Cards scheduled at or before `now`, relearning cards first, then by
    /// due time. Ties come out in shuffled order when shuffling is on. With
    /// no explicit limit the configured daily review cap applies.
    pub fn due_cards(
        &mut self,
        criteria: &CriteriaSet,
        now: DateTime<Utc>,
        limit: Option<usize>,
    ) -> Result<Vec<Inflection>, SklonError> {
        let mut due: Vec<Inflection> =
            self.eligible(criteria)?.into_iter().filter(|c| c.srs().is_due(now)).collect();
        if self.config.shuffle {
            due.shuffle(&mut self.rng);
        }
        // Stable sort, so the shuffle above survives within ties.
        due.sort_by_key(|c| (!c.srs().in_relearning, c.srs().next_due));
        due.truncate(limit.unwrap_or(self.config.max_reviews_per_day));
        Ok(due)
    }

    /// Eligible cards never activated for study, shuffled when configured.
    /// With no explicit limit the configured daily new-card cap applies.
    pub fn new_cards(
        &mut self,
        criteria: &CriteriaSet,
        limit: Option<usize>,
    ) -> Result<Vec<Inflection>, SklonError> {
        let mut fresh: Vec<Inflection> =
            self.eligible(criteria)?.into_iter().filter(|c| !c.srs().is_active()).collect();
        if self.config.shuffle {
            fresh.shuffle(&mut self.rng);
        }
        fresh.truncate(limit.unwrap_or(self.config.max_new_per_day));
        Ok(fresh)
    }

    pub fn count_due(
        &self,
        criteria: &CriteriaSet,
        now: DateTime<Utc>,
    ) -> Result<usize, SklonError> {
        Ok(self.eligible(criteria)?.iter().filter(|c| c.srs().is_due(now)).count())
    }

    pub fn count_new(&self, criteria: &CriteriaSet) -> Result<usize, SklonError> {
        Ok(self.eligible(criteria)?.iter().filter(|c| !c.srs().is_active()).count())
    }

    /// Activates a card so it enters the due queue immediately.
    pub fn init_card(
        &mut self,
        key: CardKey,
        now: DateTime<Utc>,
    ) -> Result<Inflection, SklonError> {
        let mut card = self.store.get(key)?.ok_or(SklonError::CardNotFound(key))?;
        scheduler::init_card(card.srs_mut(), now, &self.config);
        self.store.save(&card)?;
        Ok(card)
    }

    /// Records one review outcome and returns the rescheduled card.
    pub fn review(
        &mut self,
        key: CardKey,
        recalled: bool,
        now: DateTime<Utc>,
    ) -> Result<Inflection, SklonError> {
        let mut card = self.store.get(key)?.ok_or(SklonError::CardNotFound(key))?;
        scheduler::review(card.srs_mut(), recalled, now, &self.config);
        self.store.save(&card)?;
        Ok(card)
    }

    pub fn statistics(
        &self,
        criteria: &CriteriaSet,
        now: DateTime<Utc>,
    ) -> Result<Statistics, SklonError> {
        let pool = self.eligible(criteria)?;
        let mut stats = Statistics { total: pool.len(), ..Statistics::default() };
        for card in &pool {
            let srs = card.srs();
            if srs.total_reviews > 0 {
                stats.studied += 1;
            }
            if !srs.is_active() {
                stats.fresh += 1;
            }
            if srs.is_due(now) {
                stats.due_now += 1;
            }
            if srs.in_relearning {
                stats.in_relearning += 1;
            }
            stats.total_reviews += u64::from(srs.total_reviews);
            stats.total_correct += u64::from(srs.total_correct);
        }
        if stats.total_reviews > 0 {
            stats.accuracy_rate = stats.total_correct as f64 / stats.total_reviews as f64 * 100.0;
        }
        Ok(stats)
    }
}
