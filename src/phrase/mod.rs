pub mod assembler;
pub mod criterion;
pub mod element;
pub mod support;
pub mod template;
pub mod templates;

pub use assembler::{
    PhraseAssembler,
    TemplateInfo,
};
pub use criterion::{
    CriteriaSet,
    Criterion,
};
pub use element::{
    Direction,
    Extraction,
    PhraseElement,
    Role,
    SupportKind,
};
pub use support::Lexicon;
pub use template::{
    DisplayRow,
    Template,
};
pub use templates::builtin_templates;
