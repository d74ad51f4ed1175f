pub mod errors;
pub mod models;

pub use errors::SklonError;
pub use models::{
    CardKey,
    WordKind,
};
