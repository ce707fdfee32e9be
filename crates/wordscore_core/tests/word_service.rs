use rusqlite::Connection;
use wordscore_core::db::open_db_in_memory;
use wordscore_core::{
    Dictionary, RejectReason, SqliteWordRepository, WordOutcome, WordService,
};

fn test_service(conn: &Connection) -> WordService<SqliteWordRepository<'_>> {
    let dictionary = Dictionary::from_words([
        "cat", "dog", "level", "madam", "apple", "hello", "civic", "deeds",
    ]);
    WordService::new(dictionary, SqliteWordRepository::new(conn))
}

#[test]
fn empty_and_whitespace_input_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = test_service(&conn);

    assert_eq!(
        service.process("").unwrap(),
        WordOutcome::Rejected(RejectReason::EmptyInput)
    );
    assert_eq!(
        service.process("   \t").unwrap(),
        WordOutcome::Rejected(RejectReason::EmptyInput)
    );
    assert!(service.ranked_words().unwrap().is_empty());
}

#[test]
fn unknown_words_are_rejected_regardless_of_case_and_whitespace() {
    let conn = open_db_in_memory().unwrap();
    let service = test_service(&conn);

    for input in ["xyz", "XYZ", "  xYz  "] {
        assert_eq!(
            service.process(input).unwrap(),
            WordOutcome::Rejected(RejectReason::NotAWord),
            "input {input:?} should be rejected"
        );
    }
    assert!(service.ranked_words().unwrap().is_empty());
}

#[test]
fn rejection_reasons_carry_distinct_messages() {
    assert_eq!(RejectReason::EmptyInput.message(), "empty input");
    assert_eq!(RejectReason::NotAWord.message(), "not an english word");
}

#[test]
fn known_words_score_their_fixture_values() {
    let conn = open_db_in_memory().unwrap();
    let service = test_service(&conn);

    for (word, expected) in [("hello", 4), ("level", 6), ("civic", 6), ("cat", 3)] {
        let outcome = service.process(word).unwrap();
        assert_eq!(
            outcome,
            WordOutcome::Scored {
                word: word.to_string(),
                score: expected,
                created: true,
            }
        );
    }
}

#[test]
fn case_and_whitespace_variants_resolve_to_one_record() {
    let conn = open_db_in_memory().unwrap();
    let service = test_service(&conn);

    let first = service.process("level").unwrap();
    assert_eq!(
        first,
        WordOutcome::Scored {
            word: "level".to_string(),
            score: 6,
            created: true,
        }
    );

    let repeat = service.process("  LEVEL \t").unwrap();
    assert_eq!(
        repeat,
        WordOutcome::Scored {
            word: "level".to_string(),
            score: 6,
            created: false,
        }
    );

    assert_eq!(service.ranked_words().unwrap().len(), 1);
}

#[test]
fn only_the_first_submission_creates_and_its_score_sticks() {
    let conn = open_db_in_memory().unwrap();
    let service = test_service(&conn);

    let first = service.process("madam").unwrap();
    let WordOutcome::Scored {
        score: first_score,
        created: first_created,
        ..
    } = first
    else {
        panic!("expected scored outcome, got {first:?}");
    };
    assert!(first_created);

    for _ in 0..3 {
        let repeat = service.process("madam").unwrap();
        assert_eq!(
            repeat,
            WordOutcome::Scored {
                word: "madam".to_string(),
                score: first_score,
                created: false,
            }
        );
    }
}

#[test]
fn ranked_words_come_back_in_non_increasing_score_order() {
    let conn = open_db_in_memory().unwrap();
    let service = test_service(&conn);

    for word in ["cat", "hello", "level", "deeds", "civic"] {
        service.process(word).unwrap();
    }

    let ranked = service.ranked_words().unwrap();
    assert_eq!(ranked.len(), 5);

    let scores: Vec<u32> = ranked.iter().map(|record| record.score).collect();
    let mut sorted = scores.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);

    assert_eq!(ranked[0].score, 6);
    assert_eq!(ranked[4].word, "cat");
}

#[test]
fn dictionary_is_shared_read_only_through_the_service() {
    let conn = open_db_in_memory().unwrap();
    let service = test_service(&conn);

    assert_eq!(service.dictionary().len(), 8);
    assert!(service.dictionary().contains("CAT"));
}
