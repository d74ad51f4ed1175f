//! In-memory card store, doubling as the dictionary for support lookups.

use std::collections::BTreeMap;

use super::CardStore;
use crate::{
    core::{
        CardKey,
        SklonError,
        WordKind,
    },
    grammar::{
        Case,
        Gender,
        GrammaticalNumber,
        Person,
    },
    phrase::Lexicon,
    words::{
        Inflection,
        NounInflection,
        NumeralInflection,
        PronounInflection,
    },
};

/// Holds every loaded inflection keyed by card key. Ordered map so `cards`
/// iterates in a stable order regardless of insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cards: BTreeMap<CardKey, Inflection>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, card: Inflection) {
        self.cards.insert(card.key(), card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Inflection> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Inflection>>(iter: I) -> Self {
        let mut store = Self::new();
        for card in iter {
            store.insert(card);
        }
        store
    }
}

impl CardStore for MemoryStore {
    fn cards(&self, kind: WordKind) -> Result<Vec<Inflection>, SklonError> {
        Ok(self.cards.values().filter(|c| c.kind() == kind).cloned().collect())
    }

    fn get(&self, key: CardKey) -> Result<Option<Inflection>, SklonError> {
        Ok(self.cards.get(&key).cloned())
    }

    fn save(&mut self, card: &Inflection) -> Result<(), SklonError> {
        self.cards.insert(card.key(), card.clone());
        Ok(())
    }
}

impl Lexicon for MemoryStore {
    fn nominative_pronouns(
        &self,
        person: Person,
        number: GrammaticalNumber,
    ) -> Vec<PronounInflection> {
        self.cards
            .values()
            .filter_map(|card| match card {
                Inflection::Pronoun(p)
                    if !p.clitic
                        && p.case == Case::Nominative
                        && p.person == Some(person)
                        && p.number == Some(number) =>
                {
                    Some(p.clone())
                },
                _ => None,
            })
            .collect()
    }

    fn numerals(
        &self,
        case: Case,
        number: GrammaticalNumber,
        gender: Option<Gender>,
    ) -> Vec<NumeralInflection> {
        self.cards
            .values()
            .filter_map(|card| match card {
                Inflection::Numeral(m)
                    if m.case == case
                        && m.number == number
                        && (gender.is_none() || m.gender == gender) =>
                {
                    Some(m.clone())
                },
                _ => None,
            })
            .collect()
    }

    fn nouns(
        &self,
        case: Case,
        number: GrammaticalNumber,
        gender: Option<Gender>,
    ) -> Vec<NounInflection> {
        self.cards
            .values()
            .filter_map(|card| match card {
                Inflection::Noun(n)
                    if n.case == case
                        && n.number == number
                        && (gender.is_none() || Some(n.base.gender) == gender) =>
                {
                    Some(n.clone())
                },
                _ => None,
            })
            .collect()
    }
}
