//! Inflected surface forms, one card each.
//!
//! Every inflection keeps an `Arc` back-reference to its headword so pools can
//! be cloned cheaply and the gloss lives in exactly one place. The
//! `characteristic` answer on [`Inflection`] is the single dispatch point for
//! criteria: a part of speech that does not carry a dimension answers `None`
//! and therefore never matches a criterion requiring it.

use std::sync::Arc;

use serde::{
    Deserialize,
    Serialize,
};

use super::base::{
    Adjective,
    Noun,
    Numeral,
    Pronoun,
    Verb,
};
use crate::{
    core::{
        CardKey,
        WordKind,
    },
    grammar::{
        Case,
        Definiteness,
        Degree,
        Feature,
        FeatureValue,
        Gender,
        GrammaticalNumber,
        Person,
        VerbalForm,
    },
    srs::SrsState,
};

/// The written shape of one form. The accented spelling carries stress marks
/// and is what learners are shown as the answer side of a slot card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spelling {
    pub plain: String,
    pub accented: String,
    pub phonetic: Option<String>,
}

impl Spelling {
    pub fn new(plain: impl Into<String>, accented: impl Into<String>) -> Self {
        Self { plain: plain.into(), accented: accented.into(), phonetic: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerbInflection {
    pub id: u32,
    pub base: Arc<Verb>,
    pub form: VerbalForm,
    pub person: Option<Person>,
    pub number: Option<GrammaticalNumber>,
    pub gender: Option<Gender>,
    pub spelling: Spelling,
    pub srs: SrsState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NounInflection {
    pub id: u32,
    pub base: Arc<Noun>,
    pub case: Case,
    pub number: GrammaticalNumber,
    pub spelling: Spelling,
    pub srs: SrsState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdjectiveInflection {
    pub id: u32,
    pub base: Arc<Adjective>,
    pub case: Case,
    pub gender: Gender,
    pub number: GrammaticalNumber,
    pub degree: Degree,
    pub definiteness: Option<Definiteness>,
    pub spelling: Spelling,
    pub srs: SrsState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PronounInflection {
    pub id: u32,
    pub base: Arc<Pronoun>,
    pub case: Case,
    pub person: Option<Person>,
    pub gender: Option<Gender>,
    pub number: Option<GrammaticalNumber>,
    /// Clitic forms lean on a host word and are skipped as standalone
    /// support words.
    pub clitic: bool,
    pub spelling: Spelling,
    pub srs: SrsState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumeralInflection {
    pub id: u32,
    pub base: Arc<Numeral>,
    pub case: Case,
    pub gender: Option<Gender>,
    pub number: GrammaticalNumber,
    pub spelling: Spelling,
    pub srs: SrsState,
}

/// One studyable card of any part of speech.
#[derive(Debug, Clone, PartialEq)]
pub enum Inflection {
    Verb(VerbInflection),
    Noun(NounInflection),
    Adjective(AdjectiveInflection),
    Pronoun(PronounInflection),
    Numeral(NumeralInflection),
}

impl Inflection {
    pub fn kind(&self) -> WordKind {
        match self {
            Inflection::Verb(_) => WordKind::Verb,
            Inflection::Noun(_) => WordKind::Noun,
            Inflection::Adjective(_) => WordKind::Adjective,
            Inflection::Pronoun(_) => WordKind::Pronoun,
            Inflection::Numeral(_) => WordKind::Numeral,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Inflection::Verb(v) => v.id,
            Inflection::Noun(n) => n.id,
            Inflection::Adjective(a) => a.id,
            Inflection::Pronoun(p) => p.id,
            Inflection::Numeral(m) => m.id,
        }
    }

    pub fn key(&self) -> CardKey {
        CardKey::new(self.kind(), self.id())
    }

    pub fn lemma(&self) -> &str {
        match self {
            Inflection::Verb(v) => &v.base.lemma,
            Inflection::Noun(n) => &n.base.lemma,
            Inflection::Adjective(a) => &a.base.lemma,
            Inflection::Pronoun(p) => &p.base.lemma,
            Inflection::Numeral(m) => &m.base.lemma,
        }
    }

    pub fn gloss(&self) -> Option<&str> {
        let gloss = match self {
            Inflection::Verb(v) => &v.base.gloss,
            Inflection::Noun(n) => &n.base.gloss,
            Inflection::Adjective(a) => &a.base.gloss,
            Inflection::Pronoun(p) => &p.base.gloss,
            Inflection::Numeral(m) => &m.base.gloss,
        };
        gloss.as_deref()
    }

    pub fn spelling(&self) -> &Spelling {
        match self {
            Inflection::Verb(v) => &v.spelling,
            Inflection::Noun(n) => &n.spelling,
            Inflection::Adjective(a) => &a.spelling,
            Inflection::Pronoun(p) => &p.spelling,
            Inflection::Numeral(m) => &m.spelling,
        }
    }

    pub fn srs(&self) -> &SrsState {
        match self {
            Inflection::Verb(v) => &v.srs,
            Inflection::Noun(n) => &n.srs,
            Inflection::Adjective(a) => &a.srs,
            Inflection::Pronoun(p) => &p.srs,
            Inflection::Numeral(m) => &m.srs,
        }
    }

    pub fn srs_mut(&mut self) -> &mut SrsState {
        match self {
            Inflection::Verb(v) => &mut v.srs,
            Inflection::Noun(n) => &mut n.srs,
            Inflection::Adjective(a) => &mut a.srs,
            Inflection::Pronoun(p) => &mut p.srs,
            Inflection::Numeral(m) => &mut m.srs,
        }
    }

    /// The value this form carries for one grammatical dimension, or `None`
    /// when the dimension does not apply (or the dictionary left it blank).
    pub fn characteristic(&self, feature: Feature) -> Option<FeatureValue> {
        match self {
            Inflection::Verb(v) => match feature {
                Feature::VerbalForm => Some(FeatureValue::VerbalForm(v.form)),
                Feature::Person => v.person.map(FeatureValue::Person),
                Feature::Number => v.number.map(FeatureValue::Number),
                Feature::Gender => v.gender.map(FeatureValue::Gender),
                Feature::Transitivity => v.base.transitivity.map(FeatureValue::Transitivity),
                Feature::Aspect => v.base.aspect.map(FeatureValue::Aspect),
                _ => None,
            },
            Inflection::Noun(n) => match feature {
                Feature::Case => Some(FeatureValue::Case(n.case)),
                Feature::Number => Some(FeatureValue::Number(n.number)),
                Feature::Gender => Some(FeatureValue::Gender(n.base.gender)),
                _ => None,
            },
            Inflection::Adjective(a) => match feature {
                Feature::Case => Some(FeatureValue::Case(a.case)),
                Feature::Gender => Some(FeatureValue::Gender(a.gender)),
                Feature::Number => Some(FeatureValue::Number(a.number)),
                Feature::Degree => Some(FeatureValue::Degree(a.degree)),
                Feature::Definiteness => a.definiteness.map(FeatureValue::Definiteness),
                _ => None,
            },
            Inflection::Pronoun(p) => match feature {
                Feature::Case => Some(FeatureValue::Case(p.case)),
                Feature::Person => p.person.map(FeatureValue::Person),
                Feature::Gender => p.gender.map(FeatureValue::Gender),
                Feature::Number => p.number.map(FeatureValue::Number),
                _ => None,
            },
            Inflection::Numeral(m) => match feature {
                Feature::Case => Some(FeatureValue::Case(m.case)),
                Feature::Gender => m.gender.map(FeatureValue::Gender),
                Feature::Number => Some(FeatureValue::Number(m.number)),
                Feature::NumeralKind => m.base.kind.map(FeatureValue::NumeralKind),
                _ => None,
            },
        }
    }
}
