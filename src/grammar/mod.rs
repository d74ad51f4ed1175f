pub mod categories;
pub mod features;

pub use categories::{
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
pub use features::{
    Feature,
    FeatureValue,
};
