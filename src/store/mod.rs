pub mod memory;

pub use memory::MemoryStore;

use crate::{
    core::{
        CardKey,
        SklonError,
        WordKind,
    },
    words::Inflection,
};

/// Persistence boundary for inflection cards. The scheduler and the phrase
/// assembler only ever see this trait, so a database-backed store can slot in
/// without touching either.
pub trait CardStore {
    /// All cards of one part of speech, in a stable order.
    fn cards(&self, kind: WordKind) -> Result<Vec<Inflection>, SklonError>;

    fn get(&self, key: CardKey) -> Result<Option<Inflection>, SklonError>;

    /// Persists the card's current state, keyed by `card.key()`.
    fn save(&mut self, card: &Inflection) -> Result<(), SklonError>;
}
