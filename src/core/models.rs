use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// The parts of speech the study system tracks as cards.
///
/// Pronouns and numerals exist in the dictionary but are normally drawn in as
/// support words during phrase assembly rather than scheduled on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordKind {
    Verb,
    Noun,
    Adjective,
    Pronoun,
    Numeral,
}

impl WordKind {
    pub const ALL: [WordKind; 5] =
        [WordKind::Verb, WordKind::Noun, WordKind::Adjective, WordKind::Pronoun, WordKind::Numeral];

    /// One-letter code used in display rows and review callbacks.
    pub fn code(&self) -> &'static str {
        match self {
            WordKind::Verb => "v",
            WordKind::Noun => "n",
            WordKind::Adjective => "a",
            WordKind::Pronoun => "p",
            WordKind::Numeral => "m",
        }
    }

    pub fn from_code(code: &str) -> Option<WordKind> {
        WordKind::ALL.iter().copied().find(|k| k.code() == code)
    }
}

impl fmt::Display for WordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let readable = match self {
            WordKind::Verb => "Verb",
            WordKind::Noun => "Noun",
            WordKind::Adjective => "Adjective",
            WordKind::Pronoun => "Pronoun",
            WordKind::Numeral => "Numeral",
        };
        write!(f, "{}", readable)
    }
}

/// Stable identifier of one inflection card. Ids are only unique within a
/// word kind, so the kind is part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardKey {
    pub kind: WordKind,
    pub id: u32,
}

impl CardKey {
    pub fn new(kind: WordKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.code(), self.id)
    }
}
