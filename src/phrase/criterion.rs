//! Grammatical filters over the card pool.
//!
//! A criterion is a conjunction: a part of speech plus a set of required
//! feature values, every one of which the card must answer with exactly that
//! value. A card that answers `None` for a required dimension never matches.

use std::collections::{
    BTreeMap,
    HashMap,
};

use crate::{
    core::WordKind,
    grammar::{
        Feature,
        FeatureValue,
    },
    words::Inflection,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    kind: WordKind,
    required: BTreeMap<Feature, FeatureValue>,
}

impl Criterion {
    pub fn new(
        kind: WordKind,
        required: impl IntoIterator<Item = FeatureValue>,
    ) -> Self {
        let required = required.into_iter().map(|v| (v.feature(), v)).collect();
        Self { kind, required }
    }

    pub fn kind(&self) -> WordKind {
        self.kind
    }

    pub fn requirement(&self, feature: Feature) -> Option<FeatureValue> {
        self.required.get(&feature).copied()
    }

    pub fn requirements(&self) -> impl Iterator<Item = (Feature, FeatureValue)> + '_ {
        self.required.iter().map(|(f, v)| (*f, *v))
    }

    pub fn matches(&self, card: &Inflection) -> bool {
        card.kind() == self.kind
            && self.required.iter().all(|(feature, value)| {
                card.characteristic(*feature).as_ref() == Some(value)
            })
    }
}

/// The union of the slot criteria of all active templates, grouped by part of
/// speech. A card is eligible for study when any criterion of its kind
/// matches it; kinds with no criteria accept nothing.
#[derive(Debug, Clone, Default)]
pub struct CriteriaSet {
    by_kind: HashMap<WordKind, Vec<Criterion>>,
}

impl CriteriaSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, criterion: Criterion) {
        self.by_kind.entry(criterion.kind()).or_default().push(criterion);
    }

    pub fn is_empty(&self) -> bool {
        self.by_kind.is_empty()
    }

    pub fn for_kind(&self, kind: WordKind) -> &[Criterion] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn matches(&self, card: &Inflection) -> bool {
        self.for_kind(card.kind()).iter().any(|c| c.matches(card))
    }
}
