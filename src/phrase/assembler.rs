//! The phrase assembler.
//!
//! Owns the template set and turns a pool of due cards into one rendered
//! phrase per call. Assembly is a single critical section: templates carry
//! assignment state between reset and readout, so the whole
//! reset-assign-select-render cycle runs under one lock.

use std::sync::{
    Mutex,
    MutexGuard,
};

use rand::{
    rngs::StdRng,
    SeedableRng,
};

use super::{
    criterion::CriteriaSet,
    support::Lexicon,
    template::{
        DisplayRow,
        Template,
    },
    templates::builtin_templates,
};
use crate::{
    core::SklonError,
    grammar::{
        Case,
        Feature,
        VerbalForm,
    },
    words::Inflection,
};

/// Listing entry for template toggles in a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    pub active: bool,
}

struct Entry {
    template: Template,
    active: bool,
}

struct Inner {
    entries: Vec<Entry>,
    rng: StdRng,
}

pub struct PhraseAssembler {
    inner: Mutex<Inner>,
}

impl PhraseAssembler {
    /// Assembler over the built-in templates, all active.
    pub fn new() -> Self {
        Self::with_templates(builtin_templates(), StdRng::from_os_rng())
    }

    /// Deterministic assembler for tests and reproducible sessions.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_templates(builtin_templates(), StdRng::seed_from_u64(seed))
    }

    pub fn with_templates(templates: Vec<Template>, rng: StdRng) -> Self {
        let entries = templates.into_iter().map(|template| Entry { template, active: true }).collect();
        Self { inner: Mutex::new(Inner { entries, rng }) }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Template state is reset at the top of every cycle, so a phrase
        // interrupted by a panic leaves nothing worth protecting.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn templates(&self) -> Vec<TemplateInfo> {
        self.lock()
            .entries
            .iter()
            .map(|e| TemplateInfo {
                id: e.template.id(),
                display_name: e.template.display_name(),
                active: e.active,
            })
            .collect()
    }

    pub fn set_active(&self, id: &str, active: bool) -> Result<(), SklonError> {
        let mut inner = self.lock();
        match inner.entries.iter_mut().find(|e| e.template.id() == id) {
            Some(entry) => {
                entry.active = active;
                Ok(())
            },
            None => Err(SklonError::UnknownTemplate(id.to_string())),
        }
    }

    /// Union of the slot criteria of every active template. This is what
    /// decides which cards are studyable at all.
    pub fn aggregate_criteria(&self) -> CriteriaSet {
        let inner = self.lock();
        let mut set = CriteriaSet::new();
        for entry in inner.entries.iter().filter(|e| e.active) {
            for criterion in entry.template.criteria() {
                set.insert(criterion.clone());
            }
        }
        set
    }

    /// Cases required by any active slot, deduplicated in case order.
    pub fn active_cases(&self) -> Vec<Case> {
        let inner = self.lock();
        let mut cases: Vec<Case> = inner
            .entries
            .iter()
            .filter(|e| e.active)
            .flat_map(|e| e.template.criteria())
            .filter_map(|c| c.requirement(Feature::Case).and_then(|v| v.as_case()))
            .collect();
        cases.sort_unstable();
        cases.dedup();
        cases
    }

    /// Verbal forms required by any active slot, deduplicated.
    pub fn active_verbal_forms(&self) -> Vec<VerbalForm> {
        let inner = self.lock();
        let mut forms: Vec<VerbalForm> = inner
            .entries
            .iter()
            .filter(|e| e.active)
            .flat_map(|e| e.template.criteria())
            .filter_map(|c| c.requirement(Feature::VerbalForm).and_then(|v| v.as_verbal_form()))
            .collect();
        forms.sort_unstable();
        forms.dedup();
        forms
    }

    /// Builds one phrase from the given pool of due cards.
    ///
    /// Every card is offered to every active template first-fit; among the
    /// templates that filled all their slots, the one whose assigned cards
    /// have the earliest mean due time wins, ties going to declaration
    /// order. Returns an empty vector when no active template completes.
    pub fn assemble(&self, pool: &[Inflection], lexicon: &dyn Lexicon) -> Vec<DisplayRow> {
        let mut inner = self.lock();
        let Inner { entries, rng } = &mut *inner;

        for entry in entries.iter_mut().filter(|e| e.active) {
            entry.template.reset();
            for (index, card) in pool.iter().enumerate() {
                entry.template.try_assign(card, index);
            }
            if entry.template.require_support() {
                entry.template.resolve_supports(lexicon, rng);
            }
        }

        let winner = entries
            .iter_mut()
            .filter(|e| e.active && e.template.is_complete())
            .min_by(|a, b| a.template.mean_due_millis().total_cmp(&b.template.mean_due_millis()));

        match winner {
            Some(entry) => {
                if !entry.template.require_support() {
                    entry.template.resolve_supports(lexicon, rng);
                }
                entry.template.build_display(rng)
            },
            None => Vec::new(),
        }
    }
}

impl Default for PhraseAssembler {
    fn default() -> Self {
        Self::new()
    }
}
