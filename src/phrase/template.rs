//! Phrase templates.
//!
//! A template is an ordered list of elements describing one sentence shape,
//! e.g. pronoun + verb + numeral + object. Templates are stateful: the
//! assembler resets them, offers pool cards to their slots first-fit, and
//! reads the finished phrase out of the assigned elements.

use rand::rngs::StdRng;

use super::{
    criterion::Criterion,
    element::{
        Direction,
        PhraseElement,
        Role,
    },
    support::{
        self,
        Lexicon,
    },
};
use crate::{
    core::{
        CardKey,
        WordKind,
    },
    words::Inflection,
};

/// One line of a rendered phrase card. `key` and `kind` are present for slot
/// rows so a review outcome can be routed back to the studied card; support
/// rows carry neither.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub front: String,
    pub back: String,
    pub key: Option<CardKey>,
    pub kind: Option<WordKind>,
}

#[derive(Debug, Clone)]
pub struct Template {
    id: &'static str,
    display_name: &'static str,
    /// When set, the template only counts as complete once every support
    /// word resolved. Off by default: a missing support word drops that row
    /// rather than the whole phrase.
    require_support: bool,
    elements: Vec<PhraseElement>,
}

impl Template {
    /// Panics if a support element names a dependency that is not a slot of
    /// this template. Template shapes are fixed at compile time, so a bad
    /// dependency is a programming error, not a runtime condition.
    pub fn new(
        id: &'static str,
        display_name: &'static str,
        elements: Vec<PhraseElement>,
    ) -> Self {
        for element in &elements {
            if let Role::Support { depends_on, .. } = element.role {
                let found = elements
                    .iter()
                    .any(|e| e.is_slot() && e.name == depends_on);
                assert!(found, "support element {} depends on unknown slot {}", element.name, depends_on);
            }
        }
        Self { id, display_name, require_support: false, elements }
    }

    pub fn with_require_support(mut self) -> Self {
        self.require_support = true;
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn require_support(&self) -> bool {
        self.require_support
    }

    pub fn criteria(&self) -> impl Iterator<Item = &Criterion> {
        self.elements.iter().filter_map(|e| match &e.role {
            Role::Slot { criterion } => Some(criterion),
            Role::Support { .. } => None,
        })
    }

    pub fn reset(&mut self) {
        for element in &mut self.elements {
            element.clear();
        }
    }

    /// Offers one pool card to the first open slot that accepts it.
    pub fn try_assign(&mut self, card: &Inflection, pool_index: usize) -> bool {
        for element in &mut self.elements {
            if element.is_slot() && !element.is_assigned() && element.accepts(card) {
                element.assign(card.clone(), Some(pool_index));
                return true;
            }
        }
        false
    }

    pub fn is_complete(&self) -> bool {
        let slots_full =
            self.elements.iter().filter(|e| e.is_slot()).all(PhraseElement::is_assigned);
        if !slots_full {
            return false;
        }
        !self.require_support
            || self.elements.iter().filter(|e| !e.is_slot()).all(PhraseElement::is_assigned)
    }

    /// Fills the open support elements from the dictionary. Elements whose
    /// dependency is unassigned, or for which no fitting form exists, stay
    /// open.
    pub fn resolve_supports(&mut self, lexicon: &dyn Lexicon, rng: &mut StdRng) {
        for i in 0..self.elements.len() {
            let (depends_on, lookup) = match self.elements[i].role {
                Role::Support { depends_on, lookup } if !self.elements[i].is_assigned() => {
                    (depends_on, lookup)
                },
                _ => continue,
            };
            let resolved = self
                .elements
                .iter()
                .find(|e| e.name == depends_on)
                .and_then(PhraseElement::assigned)
                .and_then(|slot_card| support::resolve(lookup, slot_card, lexicon, rng));
            if let Some(word) = resolved {
                self.elements[i].assign(word, None);
            }
        }
    }

    /// Pool indices of the cards currently sitting in slots.
    pub fn consumed_indices(&self) -> Vec<usize> {
        self.elements.iter().filter_map(PhraseElement::pool_index).collect()
    }

    /// Mean due time of the assigned slot cards, in milliseconds since the
    /// epoch. The assembler picks the template whose cards are most overdue,
    /// i.e. the smallest mean. Cards without a scheduled due time are left
    /// out of the mean rather than counted as infinitely overdue.
    pub fn mean_due_millis(&self) -> f64 {
        let due: Vec<i64> = self
            .elements
            .iter()
            .filter(|e| e.is_slot())
            .filter_map(PhraseElement::assigned)
            .filter_map(|card| card.srs().next_due)
            .map(|t| t.timestamp_millis())
            .collect();
        if due.is_empty() {
            return f64::MAX;
        }
        due.iter().sum::<i64>() as f64 / due.len() as f64
    }

    #[cfg(test)]
    pub(crate) fn element(&self, name: &str) -> Option<&PhraseElement> {
        self.elements.iter().find(|e| e.name == name)
    }

    /// Renders the phrase as one row per assigned element, in declaration
    /// order, with a randomly chosen front side.
    pub fn build_display(&self, rng: &mut StdRng) -> Vec<DisplayRow> {
        let direction = Direction::random(rng);
        self.elements
            .iter()
            .filter(|e| e.is_assigned())
            .filter_map(|element| {
                let (front, back) = element.texts(direction)?;
                let (key, kind) = if element.is_slot() {
                    let card = element.assigned()?;
                    (Some(card.key()), Some(card.kind()))
                } else {
                    (None, None)
                };
                Some(DisplayRow { front, back, key, kind })
            })
            .collect()
    }
}
