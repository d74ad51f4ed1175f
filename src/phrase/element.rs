//! Template building blocks.
//!
//! An element is either a slot, filled from the study pool by criterion
//! matching, or a support word, resolved from the dictionary so it agrees
//! grammatically with the slot it depends on. The two roles read differently
//! on a card: a slot quizzes the learner on the studied form, a support word
//! only completes the phrase.

use rand::{
    rngs::StdRng,
    Rng,
};

use super::criterion::Criterion;
use crate::words::Inflection;

/// Which language the front of the card shows. Picked at random per phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Front shows the source-language gloss, back the Slovene form.
    SourceToTarget,
    /// Front shows the Slovene form, back the gloss.
    TargetToSource,
}

impl Direction {
    pub fn random(rng: &mut StdRng) -> Self {
        if rng.random_bool(0.5) {
            Direction::SourceToTarget
        } else {
            Direction::TargetToSource
        }
    }
}

/// How a support word is looked up from the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportKind {
    /// Nominative personal pronoun agreeing with a verb slot in person and
    /// number.
    PronounForVerb,
    /// Numeral agreeing with a nominal slot in case, number and gender.
    NumeralAgreeing,
    /// Noun agreeing with an adjective slot in case, gender and number.
    NounAgreeing,
}

#[derive(Debug, Clone)]
pub enum Role {
    Slot { criterion: Criterion },
    Support { depends_on: &'static str, lookup: SupportKind },
}

/// Which text pair an element contributes to the two card sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// Gloss on the source side, accented form on the target side. The
    /// accent marks are the part being tested.
    Slot,
    /// Gloss on the source side, plain form on the target side.
    Support,
}

#[derive(Debug, Clone)]
pub struct PhraseElement {
    pub name: &'static str,
    pub role: Role,
    pub extraction: Extraction,
    assigned: Option<Inflection>,
    /// Index of the assigned card in the offered pool, used to report which
    /// pool cards a finished phrase consumed.
    pool_index: Option<usize>,
}

impl PhraseElement {
    pub fn slot(name: &'static str, criterion: Criterion) -> Self {
        Self { name, role: Role::Slot { criterion }, extraction: Extraction::Slot, assigned: None, pool_index: None }
    }

    pub fn support(name: &'static str, depends_on: &'static str, lookup: SupportKind) -> Self {
        Self {
            name,
            role: Role::Support { depends_on, lookup },
            extraction: Extraction::Support,
            assigned: None,
            pool_index: None,
        }
    }

    pub fn is_slot(&self) -> bool {
        matches!(self.role, Role::Slot { .. })
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned.is_some()
    }

    pub fn assigned(&self) -> Option<&Inflection> {
        self.assigned.as_ref()
    }

    pub fn pool_index(&self) -> Option<usize> {
        self.pool_index
    }

    /// Slot-only: whether this element's criterion accepts the card.
    pub fn accepts(&self, card: &Inflection) -> bool {
        match &self.role {
            Role::Slot { criterion } => criterion.matches(card),
            Role::Support { .. } => false,
        }
    }

    pub fn assign(&mut self, card: Inflection, pool_index: Option<usize>) {
        self.assigned = Some(card);
        self.pool_index = pool_index;
    }

    pub fn clear(&mut self) {
        self.assigned = None;
        self.pool_index = None;
    }

    /// The (front, back) texts of the assigned card for one display
    /// direction. Slot answers carry the accent marks being tested, so the
    /// accented form only ever appears on the back; asking from the Slovene
    /// side shows the plain form.
    pub fn texts(&self, direction: Direction) -> Option<(String, String)> {
        let card = self.assigned.as_ref()?;
        let gloss = card.gloss().unwrap_or_else(|| card.lemma()).to_string();
        match direction {
            Direction::SourceToTarget => {
                let target = match self.extraction {
                    Extraction::Slot => card.spelling().accented.clone(),
                    Extraction::Support => card.spelling().plain.clone(),
                };
                Some((gloss, target))
            },
            Direction::TargetToSource => Some((card.spelling().plain.clone(), gloss)),
        }
    }
}
