//! Core of a Slovene vocabulary trainer: a spaced-repetition scheduler over
//! inflection cards, plus a phrase assembler that wraps due cards into short
//! grammatical phrases with agreeing support words.

pub mod core;
pub mod grammar;
pub mod phrase;
pub mod srs;
pub mod store;
pub mod words;

pub use crate::core::{
    CardKey,
    SklonError,
    WordKind,
};

pub use phrase::{
    builtin_templates,
    CriteriaSet,
    Criterion,
    DisplayRow,
    Lexicon,
    PhraseAssembler,
    Template,
};
pub use srs::{
    SrsConfig,
    SrsState,
    Statistics,
    StudySession,
};
pub use store::{
    CardStore,
    MemoryStore,
};
pub use words::Inflection;
