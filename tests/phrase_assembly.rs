use std::sync::Arc;

use chrono::{
    DateTime,
    TimeZone,
    Utc,
};
use sklon::{
    grammar::{
        Case,
        Degree,
        Gender,
        GrammaticalNumber,
        Person,
        Transitivity,
        VerbalForm,
    },
    words::{
        Adjective,
        AdjectiveInflection,
        Noun,
        NounInflection,
        Numeral,
        NumeralInflection,
        Pronoun,
        PronounInflection,
        Spelling,
        Verb,
        VerbInflection,
    },
    CardKey,
    Inflection,
    MemoryStore,
    PhraseAssembler,
    SrsState,
    WordKind,
};

fn at(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + chrono::Duration::seconds(secs)
}

fn active_srs(due_secs: i64) -> SrsState {
    SrsState { next_due: Some(at(due_secs)), total_reviews: 1, total_correct: 1, ..SrsState::new() }
}

fn verb_card(id: u32, due_secs: i64) -> Inflection {
    Inflection::Verb(VerbInflection {
        id,
        base: Arc::new(Verb {
            lemma: "videti".into(),
            gloss: Some("to see".into()),
            transitivity: Some(Transitivity::Transitive),
            aspect: None,
            aspect_pair: None,
        }),
        form: VerbalForm::Present,
        person: Some(Person::First),
        number: Some(GrammaticalNumber::Singular),
        gender: None,
        spelling: Spelling::new("vidim", "vídim"),
        srs: active_srs(due_secs),
    })
}

fn noun_card(id: u32, due_secs: i64) -> Inflection {
    Inflection::Noun(NounInflection {
        id,
        base: Arc::new(Noun {
            lemma: "miza".into(),
            gloss: Some("table".into()),
            gender: Gender::Feminine,
            animate: None,
        }),
        case: Case::Accusative,
        number: GrammaticalNumber::Singular,
        spelling: Spelling::new("mizo", "mízo"),
        srs: active_srs(due_secs),
    })
}

fn dictionary() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert(Inflection::Pronoun(PronounInflection {
        id: 100,
        base: Arc::new(Pronoun { lemma: "jaz".into(), gloss: Some("I".into()) }),
        case: Case::Nominative,
        person: Some(Person::First),
        gender: None,
        number: Some(GrammaticalNumber::Singular),
        clitic: false,
        spelling: Spelling::new("jaz", "jàz"),
        srs: SrsState::new(),
    }));
    store.insert(Inflection::Numeral(NumeralInflection {
        id: 200,
        base: Arc::new(Numeral { lemma: "en".into(), gloss: Some("one".into()), kind: None }),
        case: Case::Accusative,
        gender: Some(Gender::Feminine),
        number: GrammaticalNumber::Singular,
        spelling: Spelling::new("eno", "êno"),
        srs: SrsState::new(),
    }));
    store
}

#[test]
fn verb_with_object_renders_four_rows_in_order() {
    let assembler = PhraseAssembler::with_seed(7);
    let lexicon = dictionary();
    // The noun is long overdue, so the two-slot template has the earlier
    // mean due time and beats the bare verb template.
    let pool = vec![verb_card(1, 1000), noun_card(2, -1000)];

    let rows = assembler.assemble(&pool, &lexicon);

    assert_eq!(rows.len(), 4);
    // Pronoun, verb, numeral, object - declaration order of the template.
    assert_eq!(rows[0].key, None);
    assert_eq!(rows[1].key, Some(CardKey::new(WordKind::Verb, 1)));
    assert_eq!(rows[1].kind, Some(WordKind::Verb));
    assert_eq!(rows[2].key, None);
    assert_eq!(rows[3].key, Some(CardKey::new(WordKind::Noun, 2)));

    // The front side is random per phrase: asking from the gloss shows the
    // accented answer, asking from the Slovene side shows the plain form.
    let verb_sides = [rows[1].front.as_str(), rows[1].back.as_str()];
    assert!(verb_sides.contains(&"to see"));
    assert!(verb_sides == ["to see", "vídim"] || verb_sides == ["vidim", "to see"]);
    assert_ne!(rows[1].front, "vídim");
    let pronoun_sides = [rows[0].front.as_str(), rows[0].back.as_str()];
    assert!(pronoun_sides.contains(&"I"));
    assert!(pronoun_sides.contains(&"jaz"));
}

#[test]
fn empty_pool_yields_no_phrase() {
    let assembler = PhraseAssembler::with_seed(7);
    let rows = assembler.assemble(&[], &dictionary());
    assert!(rows.is_empty());
}

#[test]
fn lone_verb_falls_back_to_the_bare_verb_template() {
    let assembler = PhraseAssembler::with_seed(3);
    let rows = assembler.assemble(&[verb_card(1, 0)], &dictionary());
    // Pronoun support plus the verb slot.
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].key, Some(CardKey::new(WordKind::Verb, 1)));
}

#[test]
fn missing_support_word_drops_the_row_not_the_phrase() {
    let assembler = PhraseAssembler::with_seed(3);
    // Empty dictionary: no pronoun to resolve.
    let rows = assembler.assemble(&[verb_card(1, 0)], &MemoryStore::new());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].key, Some(CardKey::new(WordKind::Verb, 1)));
}

#[test]
fn same_seed_gives_the_same_phrase() {
    let pool = vec![verb_card(1, 1000), noun_card(2, -1000)];
    let lexicon = dictionary();
    let a = PhraseAssembler::with_seed(42).assemble(&pool, &lexicon);
    let b = PhraseAssembler::with_seed(42).assemble(&pool, &lexicon);
    assert_eq!(a, b);
}

#[test]
fn deactivated_templates_take_no_cards() {
    let assembler = PhraseAssembler::with_seed(7);
    for info in assembler.templates() {
        assembler.set_active(info.id, false).unwrap();
    }
    let rows = assembler.assemble(&[verb_card(1, 0)], &dictionary());
    assert!(rows.is_empty());
    assert!(assembler.aggregate_criteria().is_empty());
}

#[test]
fn unknown_template_id_is_rejected() {
    let assembler = PhraseAssembler::with_seed(7);
    assert!(assembler.set_active("no_such_template", true).is_err());
}

#[test]
fn aggregate_criteria_admit_only_matching_cards() {
    let assembler = PhraseAssembler::with_seed(7);
    let criteria = assembler.aggregate_criteria();
    assert!(criteria.matches(&verb_card(1, 0)));
    assert!(criteria.matches(&noun_card(2, 0)));

    // An infinitive matches no active slot.
    let mut infinitive = verb_card(3, 0);
    if let Inflection::Verb(v) = &mut infinitive {
        v.form = VerbalForm::Infinitive;
    }
    assert!(!criteria.matches(&infinitive));
}

#[test]
fn adjective_phrase_pulls_an_agreeing_noun_and_genderless_numeral() {
    let assembler = PhraseAssembler::with_seed(5);
    let mut lexicon = MemoryStore::new();
    // The only numeral form carries no gender mark, so the lookup has to
    // retry without the adjective's gender to find it.
    lexicon.insert(Inflection::Numeral(NumeralInflection {
        id: 200,
        base: Arc::new(Numeral { lemma: "en".into(), gloss: Some("one".into()), kind: None }),
        case: Case::Nominative,
        gender: None,
        number: GrammaticalNumber::Singular,
        spelling: Spelling::new("ena", "êna"),
        srs: SrsState::new(),
    }));
    lexicon.insert(Inflection::Noun(NounInflection {
        id: 300,
        base: Arc::new(Noun {
            lemma: "miza".into(),
            gloss: Some("table".into()),
            gender: Gender::Feminine,
            animate: None,
        }),
        case: Case::Nominative,
        number: GrammaticalNumber::Singular,
        spelling: Spelling::new("miza", "míza"),
        srs: SrsState::new(),
    }));

    let adjective = Inflection::Adjective(AdjectiveInflection {
        id: 10,
        base: Arc::new(Adjective { lemma: "lep".into(), gloss: Some("beautiful".into()) }),
        case: Case::Nominative,
        gender: Gender::Feminine,
        number: GrammaticalNumber::Singular,
        degree: Degree::Positive,
        definiteness: None,
        spelling: Spelling::new("lepa", "lépa"),
        srs: active_srs(0),
    });

    let rows = assembler.assemble(&[adjective], &lexicon);
    assert_eq!(rows.len(), 3);
    // Numeral, adjective, noun; only the adjective is a studied card.
    assert_eq!(rows[0].key, None);
    assert_eq!(rows[1].key, Some(CardKey::new(WordKind::Adjective, 10)));
    assert_eq!(rows[2].key, None);
    let noun_sides = [rows[2].front.as_str(), rows[2].back.as_str()];
    assert!(noun_sides.contains(&"miza"));
}

#[test]
fn active_cases_and_forms_reflect_the_builtin_set() {
    let assembler = PhraseAssembler::with_seed(7);
    assert_eq!(assembler.active_cases(), vec![Case::Nominative, Case::Accusative]);
    assert_eq!(assembler.active_verbal_forms(), vec![VerbalForm::Present]);
}
