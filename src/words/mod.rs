pub mod base;
pub mod inflection;

pub use base::{
    Adjective,
    Noun,
    Numeral,
    Pronoun,
    Verb,
};
pub use inflection::{
    AdjectiveInflection,
    Inflection,
    NounInflection,
    NumeralInflection,
    PronounInflection,
    Spelling,
    VerbInflection,
};
