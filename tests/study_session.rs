use std::sync::Arc;

use chrono::{
    DateTime,
    TimeZone,
    Utc,
};
use sklon::{
    grammar::{
        Case,
        Gender,
        GrammaticalNumber,
    },
    phrase::PhraseAssembler,
    words::{
        Noun,
        NounInflection,
        Spelling,
    },
    CardKey,
    CardStore,
    Inflection,
    MemoryStore,
    SrsConfig,
    SrsState,
    StudySession,
    WordKind,
};

fn at(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + chrono::Duration::seconds(secs)
}

fn noun_card(id: u32, gloss: Option<&str>, srs: SrsState) -> Inflection {
    Inflection::Noun(NounInflection {
        id,
        base: Arc::new(Noun {
            lemma: "miza".into(),
            gloss: gloss.map(String::from),
            gender: Gender::Feminine,
            animate: None,
        }),
        case: Case::Nominative,
        number: GrammaticalNumber::Singular,
        spelling: Spelling::new("miza", "míza"),
        srs,
    })
}

fn due(secs: i64) -> SrsState {
    SrsState { next_due: Some(at(secs)), total_reviews: 1, ..SrsState::new() }
}

fn session(cards: Vec<Inflection>) -> StudySession<MemoryStore> {
    let _ = env_logger::builder().is_test(true).try_init();
    let store: MemoryStore = cards.into_iter().collect();
    StudySession::with_seed(store, SrsConfig::default(), 11)
}

#[test]
fn review_flow_reschedules_and_persists() {
    let mut session = session(vec![noun_card(1, Some("table"), SrsState::new())]);
    let key = CardKey::new(WordKind::Noun, 1);

    let card = session.init_card(key, at(0)).unwrap();
    assert!(card.srs().is_due(at(0)));

    let card = session.review(key, true, at(0)).unwrap();
    assert_eq!(card.srs().interval_secs, 600);
    assert_eq!(card.srs().next_due, Some(at(600)));

    // The store saw the update.
    let stored = session.store().get(key).unwrap().unwrap();
    assert_eq!(stored.srs().total_reviews, 1);
}

#[test]
fn reviewing_a_missing_card_fails() {
    let mut session = session(vec![]);
    let missing = CardKey::new(WordKind::Noun, 99);
    assert!(session.review(missing, true, at(0)).is_err());
}

#[test]
fn relearning_cards_come_first_in_the_due_queue() {
    let relearning = SrsState { in_relearning: true, ..due(0) };
    let mut session = session(vec![
        noun_card(1, Some("table"), due(-500)),
        noun_card(2, Some("chair"), relearning),
        noun_card(3, Some("lamp"), due(-900)),
    ]);
    let criteria = PhraseAssembler::with_seed(1).aggregate_criteria();

    let queue = session.due_cards(&criteria, at(0), None).unwrap();
    let ids: Vec<u32> = queue.iter().map(Inflection::id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn future_cards_and_glossless_cards_stay_out() {
    let mut session = session(vec![
        noun_card(1, Some("table"), due(0)),
        noun_card(2, Some("chair"), due(500)),
        noun_card(3, None, due(0)),
    ]);
    let criteria = PhraseAssembler::with_seed(1).aggregate_criteria();

    let queue = session.due_cards(&criteria, at(0), None).unwrap();
    let ids: Vec<u32> = queue.iter().map(Inflection::id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn new_cards_are_the_never_activated_ones() {
    let mut session = session(vec![
        noun_card(1, Some("table"), SrsState::new()),
        noun_card(2, Some("chair"), due(0)),
        noun_card(3, None, SrsState::new()),
    ]);
    let criteria = PhraseAssembler::with_seed(1).aggregate_criteria();

    let fresh = session.new_cards(&criteria, None).unwrap();
    let ids: Vec<u32> = fresh.iter().map(Inflection::id).collect();
    assert_eq!(ids, vec![1]);
    assert_eq!(session.count_new(&criteria).unwrap(), 1);
    assert_eq!(session.count_due(&criteria, at(0)).unwrap(), 1);
}

#[test]
fn due_limit_truncates_the_queue() {
    let mut session = session(vec![
        noun_card(1, Some("table"), due(-100)),
        noun_card(2, Some("chair"), due(-200)),
        noun_card(3, Some("lamp"), due(-300)),
    ]);
    let criteria = PhraseAssembler::with_seed(1).aggregate_criteria();

    let queue = session.due_cards(&criteria, at(0), Some(2)).unwrap();
    assert_eq!(queue.len(), 2);
}

#[test]
fn statistics_cover_the_eligible_pool() {
    let studied = SrsState {
        next_due: Some(at(3600)),
        total_reviews: 4,
        total_correct: 3,
        ..SrsState::new()
    };
    let relearning = SrsState { in_relearning: true, total_reviews: 2, ..due(-10) };
    let session = session(vec![
        noun_card(1, Some("table"), studied),
        noun_card(2, Some("chair"), relearning),
        noun_card(3, Some("lamp"), SrsState::new()),
        noun_card(4, None, SrsState::new()),
    ]);
    let criteria = PhraseAssembler::with_seed(1).aggregate_criteria();

    let stats = session.statistics(&criteria, at(0)).unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.studied, 2);
    assert_eq!(stats.fresh, 1);
    assert_eq!(stats.due_now, 1);
    assert_eq!(stats.in_relearning, 1);
    assert_eq!(stats.total_reviews, 6);
    assert_eq!(stats.total_correct, 3);
    assert!((stats.accuracy_rate - 50.0).abs() < 1e-9);
}
