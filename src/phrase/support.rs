//! Dictionary lookups for support words.
//!
//! Support words are not drawn from the study pool; they come from the full
//! dictionary so a phrase can always be completed around whatever card landed
//! in the slot. Each lookup narrows by the agreement features of the slot
//! card and picks uniformly at random among the candidates.

use rand::{
    rngs::StdRng,
    seq::IndexedRandom,
};

use super::element::SupportKind;
use crate::{
    grammar::{
        Case,
        Feature,
        FeatureValue,
        Gender,
        GrammaticalNumber,
        Person,
    },
    words::{
        Inflection,
        NounInflection,
        NumeralInflection,
        PronounInflection,
    },
};

/// Read-only dictionary access used to resolve support words.
pub trait Lexicon {
    /// Non-clitic nominative personal pronouns for the given person and
    /// number.
    fn nominative_pronouns(&self, person: Person, number: GrammaticalNumber)
        -> Vec<PronounInflection>;

    /// Numeral forms in the given case and number, optionally narrowed by
    /// gender.
    fn numerals(
        &self,
        case: Case,
        number: GrammaticalNumber,
        gender: Option<Gender>,
    ) -> Vec<NumeralInflection>;

    /// Noun forms in the given case and number, optionally narrowed by
    /// gender.
    fn nouns(
        &self,
        case: Case,
        number: GrammaticalNumber,
        gender: Option<Gender>,
    ) -> Vec<NounInflection>;
}

/// Only these numeral lemmas read naturally before a counted noun: "en" for
/// singular, "dva" for dual, anything else for plural.
fn numeral_lemma_fits(number: GrammaticalNumber, lemma: &str) -> bool {
    match number {
        GrammaticalNumber::Singular => lemma == "en",
        GrammaticalNumber::Dual => lemma == "dva",
        GrammaticalNumber::Plural => lemma != "en" && lemma != "dva",
    }
}

/// Resolves one support word against the slot card it depends on. Returns
/// `None` when the dictionary has no fitting form.
pub fn resolve(
    kind: SupportKind,
    slot_card: &Inflection,
    lexicon: &dyn Lexicon,
    rng: &mut StdRng,
) -> Option<Inflection> {
    match kind {
        SupportKind::PronounForVerb => {
            let person = slot_card.characteristic(Feature::Person)?;
            let number = slot_card.characteristic(Feature::Number)?;
            let (FeatureValue::Person(person), FeatureValue::Number(number)) = (person, number)
            else {
                return None;
            };
            let candidates = lexicon.nominative_pronouns(person, number);
            candidates.choose(rng).cloned().map(Inflection::Pronoun)
        },
        SupportKind::NumeralAgreeing => {
            let case = slot_card.characteristic(Feature::Case)?.as_case()?;
            let FeatureValue::Number(number) = slot_card.characteristic(Feature::Number)? else {
                return None;
            };
            let gender = match slot_card.characteristic(Feature::Gender) {
                Some(FeatureValue::Gender(g)) => Some(g),
                _ => None,
            };
            let mut candidates = lexicon.numerals(case, number, gender);
            if candidates.is_empty() && gender.is_some() {
                // Some numeral forms are not marked for gender at all.
                candidates = lexicon.numerals(case, number, None);
            }
            candidates.retain(|n| numeral_lemma_fits(number, &n.base.lemma));
            candidates.choose(rng).cloned().map(Inflection::Numeral)
        },
        SupportKind::NounAgreeing => {
            let case = slot_card.characteristic(Feature::Case)?.as_case()?;
            let FeatureValue::Number(number) = slot_card.characteristic(Feature::Number)? else {
                return None;
            };
            let gender = match slot_card.characteristic(Feature::Gender) {
                Some(FeatureValue::Gender(g)) => Some(g),
                _ => None,
            };
            let candidates = lexicon.nouns(case, number, gender);
            candidates.choose(rng).cloned().map(Inflection::Noun)
        },
    }
}
