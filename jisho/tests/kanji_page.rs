use std::{fs, path::PathBuf};

use jisho::extract::{compound_examples, parts, radical, readings};
use jisho::{CompoundExample, KanjiRecord, Radical, ReadingClass, parse_kanji_page};

const GO_HTML: &str = include_str!("fixtures/kanji/go.html");
const NOT_FOUND_HTML: &str = include_str!("fixtures/kanji/not_found.html");

fn example(example: &str, reading: &str, meaning: &str) -> CompoundExample {
    CompoundExample {
        example: example.to_string(),
        reading: reading.to_string(),
        meaning: meaning.to_string(),
    }
}

#[test]
fn it_should_parse_scalar_fields() {
    let record = parse_kanji_page(GO_HTML, "語");
    let details = record.details.expect("details");

    assert!(record.found);
    assert_eq!(record.query, "語");
    assert_eq!(details.grade_number, Some(2));
    assert_eq!(details.level.as_deref(), Some("grade 2"));
    assert_eq!(details.stroke_count, Some(14));
    assert_eq!(details.meaning.as_deref(), Some("word, speech, language"));
    assert_eq!(
        record.stroke_order_diagram_uri,
        "http://classic.jisho.org/static/images/stroke_diagrams/35486_frames.png"
    );
}

#[test]
fn it_should_parse_readings() {
    assert_eq!(
        readings(GO_HTML, ReadingClass::Kunyomi),
        vec!["かた.る", "かた.らう"]
    );
    assert_eq!(readings(GO_HTML, ReadingClass::Onyomi), vec!["ゴ"]);
}

#[test]
fn it_should_parse_onyomi_examples() {
    let examples = compound_examples(GO_HTML, ReadingClass::Onyomi).expect("examples");

    assert_eq!(examples.len(), 4);
    assert_eq!(examples[0], example("語", "ゴ", "word, language"));
    assert_eq!(
        examples[3],
        example(
            "物語",
            "モノガタリ",
            "tale, story, legend; \"narrative\" & fable"
        )
    );
}

#[test]
fn it_should_parse_kunyomi_examples() {
    let examples = compound_examples(GO_HTML, ReadingClass::Kunyomi).expect("examples");

    assert_eq!(
        examples,
        vec![
            example(
                "語る",
                "かたる",
                "to talk about, to speak of, to tell, to narrate"
            ),
            example("語らう", "かたらう", "to talk, to tell, to recite"),
        ]
    );
}

#[test]
fn it_should_parse_radical_and_parts() {
    assert_eq!(
        radical(GO_HTML),
        Some(Radical {
            symbol: "言".to_string(),
            meaning: "speech".to_string(),
        })
    );
    assert_eq!(parts(GO_HTML), vec!["口", "五", "言"]);
}

#[test]
fn it_should_assemble_every_field() {
    let record = parse_kanji_page(GO_HTML, "語");
    let details = record.details.expect("details");

    assert_eq!(details.kunyomi.len(), 2);
    assert_eq!(details.onyomi.len(), 1);
    assert_eq!(details.onyomi_examples.len(), 4);
    assert_eq!(details.kunyomi_examples.len(), 2);
    assert!(details.radical.is_some());
    assert_eq!(details.parts.len(), 3);
}

#[test]
fn it_should_not_find_other_kanji() {
    let record = parse_kanji_page(GO_HTML, "言");

    assert_eq!(record, KanjiRecord::not_found("言"));
}

#[test]
fn it_should_not_extract_anything_from_a_search_page() {
    let record = parse_kanji_page(NOT_FOUND_HTML, "xyz");

    assert!(!record.found);
    assert!(record.details.is_none());
    assert_eq!(record.query, "xyz");
    assert_eq!(
        record.stroke_order_diagram_uri,
        "http://classic.jisho.org/static/images/stroke_diagrams/120_frames.png"
    );
}

#[test]
fn it_should_be_idempotent() {
    let first = parse_kanji_page(GO_HTML, "語");
    let second = KanjiRecord::from_html(GO_HTML, "語");

    assert_eq!(first, second);
}

fn kanji_fixture_paths() -> Vec<PathBuf> {
    fs::read_dir("tests/fixtures/kanji")
        .expect("could not read kanji fixtures directory")
        .filter_map(|entry| entry.map(|inner| inner.path()).ok())
        .collect()
}

#[test]
fn it_should_parse_every_fixture_without_panicking() {
    for path in kanji_fixture_paths() {
        let html = fs::read_to_string(&path).unwrap();

        for kanji in ["語", "日", ""] {
            let _ = parse_kanji_page(&html, kanji);
        }
    }
}
