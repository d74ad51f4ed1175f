//! The built-in phrase shapes.

use super::{
    criterion::Criterion,
    element::{
        PhraseElement,
        SupportKind,
    },
    template::Template,
};
use crate::{
    core::WordKind,
    grammar::{
        Case,
        Degree,
        FeatureValue,
        Transitivity,
        VerbalForm,
    },
};

/// All templates the assembler knows, in priority order for tie-breaking.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        verb_present(),
        transitive_verb_accusative(),
        nominative_noun(),
        adjective_noun(),
    ]
}

/// "jaz delam" - subject pronoun plus a present-tense verb form.
fn verb_present() -> Template {
    Template::new(
        "verb_present",
        "Present-tense verb",
        vec![
            PhraseElement::support("PRONOUN", "VERB", SupportKind::PronounForVerb),
            PhraseElement::slot(
                "VERB",
                Criterion::new(WordKind::Verb, [FeatureValue::VerbalForm(VerbalForm::Present)]),
            ),
        ],
    )
}

/// "jaz vidim dve mizi" - pronoun, transitive present verb, numeral, and a
/// direct object in the accusative.
fn transitive_verb_accusative() -> Template {
    Template::new(
        "transitive_verb_accusative",
        "Transitive verb with direct object",
        vec![
            PhraseElement::support("PRONOUN", "VERB", SupportKind::PronounForVerb),
            PhraseElement::slot(
                "VERB",
                Criterion::new(
                    WordKind::Verb,
                    [
                        FeatureValue::VerbalForm(VerbalForm::Present),
                        FeatureValue::Transitivity(Transitivity::Transitive),
                    ],
                ),
            ),
            PhraseElement::support("NUMBER", "OBJECT", SupportKind::NumeralAgreeing),
            PhraseElement::slot(
                "OBJECT",
                Criterion::new(WordKind::Noun, [FeatureValue::Case(Case::Accusative)]),
            ),
        ],
    )
}

/// A bare noun in the nominative, counted by an agreeing numeral.
fn nominative_noun() -> Template {
    Template::new(
        "nominative_noun",
        "Nominative noun",
        vec![
            PhraseElement::support("NUMBER", "NOUN", SupportKind::NumeralAgreeing),
            PhraseElement::slot(
                "NOUN",
                Criterion::new(WordKind::Noun, [FeatureValue::Case(Case::Nominative)]),
            ),
        ],
    )
}

/// A nominative adjective with an agreeing dictionary noun after it.
fn adjective_noun() -> Template {
    Template::new(
        "adjective_noun",
        "Adjective with noun",
        vec![
            PhraseElement::support("NUMBER", "ADJECTIVE", SupportKind::NumeralAgreeing),
            PhraseElement::slot(
                "ADJECTIVE",
                Criterion::new(
                    WordKind::Adjective,
                    [
                        FeatureValue::Case(Case::Nominative),
                        FeatureValue::Degree(Degree::Positive),
                    ],
                ),
            ),
            PhraseElement::support("NOUN", "ADJECTIVE", SupportKind::NounAgreeing),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_unique() {
        let templates = builtin_templates();
        let mut ids: Vec<&str> = templates.iter().map(|t| t.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), templates.len());
    }

    #[test]
    fn every_builtin_has_at_least_one_slot() {
        for template in builtin_templates() {
            assert!(template.criteria().count() >= 1, "{} has no slots", template.id());
        }
    }
}
