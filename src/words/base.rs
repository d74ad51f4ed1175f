//! Dictionary headwords.
//!
//! A base word owns all the inflected surface forms of one lemma. The gloss
//! is filled in by the user after import; an inflection whose base has no
//! gloss is not studyable yet and is filtered out of every pool.

use serde::{
    Deserialize,
    Serialize,
};

use crate::grammar::{
    Aspect,
    Gender,
    NumeralKind,
    Transitivity,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verb {
    pub lemma: String,
    pub gloss: Option<String>,
    pub transitivity: Option<Transitivity>,
    pub aspect: Option<Aspect>,
    /// Lemma of the paired verb in the other aspect, when one exists.
    pub aspect_pair: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Noun {
    pub lemma: String,
    pub gloss: Option<String>,
    pub gender: Gender,
    pub animate: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjective {
    pub lemma: String,
    pub gloss: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pronoun {
    pub lemma: String,
    pub gloss: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Numeral {
    pub lemma: String,
    pub gloss: Option<String>,
    pub kind: Option<NumeralKind>,
}
