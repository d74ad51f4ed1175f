//! The unified feature model used by criteria.
//!
//! A `Feature` names a grammatical dimension; a `FeatureValue` carries one
//! concrete value of that dimension. Every inflection answers
//! `characteristic(feature)` with `Some(value)` when the dimension applies to
//! its part of speech and `None` when it does not. Adding a new feature here
//! forces every inflection kind to decide how it answers, which is the point.

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

use super::categories::{
    Aspect,
    Case,
    Definiteness,
    Degree,
    Gender,
    GrammaticalNumber,
    NumeralKind,
    Person,
    Transitivity,
    VerbalForm,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Case,
    Gender,
    Number,
    Person,
    Degree,
    Definiteness,
    VerbalForm,
    Transitivity,
    Aspect,
    NumeralKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureValue {
    Case(Case),
    Gender(Gender),
    Number(GrammaticalNumber),
    Person(Person),
    Degree(Degree),
    Definiteness(Definiteness),
    VerbalForm(VerbalForm),
    Transitivity(Transitivity),
    Aspect(Aspect),
    NumeralKind(NumeralKind),
}

impl FeatureValue {
    /// The dimension this value belongs to.
    pub fn feature(&self) -> Feature {
        match self {
            FeatureValue::Case(_) => Feature::Case,
            FeatureValue::Gender(_) => Feature::Gender,
            FeatureValue::Number(_) => Feature::Number,
            FeatureValue::Person(_) => Feature::Person,
            FeatureValue::Degree(_) => Feature::Degree,
            FeatureValue::Definiteness(_) => Feature::Definiteness,
            FeatureValue::VerbalForm(_) => Feature::VerbalForm,
            FeatureValue::Transitivity(_) => Feature::Transitivity,
            FeatureValue::Aspect(_) => Feature::Aspect,
            FeatureValue::NumeralKind(_) => Feature::NumeralKind,
        }
    }

    pub fn as_case(&self) -> Option<Case> {
        match self {
            FeatureValue::Case(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_verbal_form(&self) -> Option<VerbalForm> {
        match self {
            FeatureValue::VerbalForm(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Case(v) => write!(f, "{}", v),
            FeatureValue::Gender(v) => write!(f, "{}", v),
            FeatureValue::Number(v) => write!(f, "{}", v),
            FeatureValue::Person(v) => write!(f, "{}", v),
            FeatureValue::Degree(v) => write!(f, "{}", v),
            FeatureValue::Definiteness(v) => write!(f, "{}", v),
            FeatureValue::VerbalForm(v) => write!(f, "{}", v),
            FeatureValue::Transitivity(v) => write!(f, "{}", v),
            FeatureValue::Aspect(v) => write!(f, "{}", v),
            FeatureValue::NumeralKind(v) => write!(f, "{}", v),
        }
    }
}
