//! Pipeline tests for clipmark-core
//!
//! These tests drive the full pipeline from raw export text and check the
//! extraction, deduplication, grouping and rendering rules end to end.

use clipmark_core::decoder::{decoder_for_extension, extract};
use clipmark_core::encoder::{encoder_for_format, MarkdownEncoder};
use clipmark_core::{convert_str, run_file, ClipmarkError, Highlight, Library, Status, UNKNOWN_AUTHOR};
use proptest::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/My Clippings.txt"
);

/// Build one export record
fn block(title_line: &str, meta: &str, content: &str) -> String {
    format!("{}\n{}\n{}\n==========\n", title_line, meta, content)
}

// =============================================================================
// Extraction
// =============================================================================

#[test]
fn test_valid_block_yields_one_highlight() {
    let input = block("Book (Author)", "- Your Highlight at location 5-9", "text");
    assert_eq!(extract(&input).len(), 1);
}

#[test]
fn test_malformed_block_does_not_crash() {
    let input = format!(
        "Book (Author)\n- Your Highlight at location 5-9\n==========\n{}",
        block("Book (Author)", "- Your Highlight at location 10-12", "kept")
    );
    let conversion = convert_str(&input);
    assert_eq!(conversion.library.highlight_count(), 1);
    assert_eq!(
        conversion.library.get("Book").unwrap().highlights[0].content,
        "kept"
    );
}

#[test]
fn test_non_range_location_is_dropped() {
    let input = block("Book (Author)", "- Your Note at location 42 | Added on Monday", "a note");
    assert!(extract(&input).is_empty());
    assert!(convert_str(&input).library.is_empty());
}

#[test]
fn test_empty_input() {
    let conversion = convert_str("");
    assert!(conversion.library.is_empty());
    assert_eq!(conversion.markdown, "# My Kindle Highlights\n\n");
}

#[test]
fn test_windows_line_endings() {
    let unix = block("Book (A)", "- Location 1-2", "line one\nline two");
    let windows = unix.replace('\n', "\r\n");
    assert_eq!(convert_str(&unix).markdown, convert_str(&windows).markdown);
}

// =============================================================================
// Deduplication
// =============================================================================

#[test]
fn test_dedup_keeps_longer_in_either_order() {
    let short = block("Book", "- Location 1-2", "12345");
    let long = block("Book", "- Location 1-2", "1234567890");

    for input in [format!("{short}{long}"), format!("{long}{short}")] {
        let library = convert_str(&input).library;
        assert_eq!(library.highlight_count(), 1);
        assert_eq!(library.groups()[0].highlights[0].content_length(), 10);
    }
}

#[test]
fn test_dedup_tie_keeps_first_metadata_and_author() {
    let input = format!(
        "{}{}",
        block("Book (First)", "- Location 1-2 | first export", "abcde"),
        block("Book (Second)", "- Location 1-2 | second export", "vwxyz"),
    );
    let library = convert_str(&input).library;
    let group = library.get("Book").unwrap();

    assert_eq!(group.author, "First");
    assert_eq!(group.highlights[0].meta_line, "Location 1-2 | first export");
    assert_eq!(group.highlights[0].author, "First");
}

#[test]
fn test_dedup_tie_with_emoji_keeps_first() {
    let input = format!(
        "{}{}",
        block("Book", "- Location 1-2 | first", "\u{1F600}a"),
        block("Book", "- Location 1-2 | second", "abc"),
    );
    let library = convert_str(&input).library;
    let survivor = &library.get("Book").unwrap().highlights[0];

    assert_eq!(survivor.meta_line, "Location 1-2 | first");
    assert_eq!(survivor.content, "\u{1F600}a");
}

#[test]
fn test_dedup_key_uses_stripped_title() {
    let input = format!(
        "{}{}",
        block("Book (Author A)", "- Location 1-2", "short"),
        block("Book", "- Location 1-2", "longer text"),
    );
    let library = convert_str(&input).library;
    assert_eq!(library.highlight_count(), 1);
    // The longer record replaced the first one, so its author seeds the group
    assert_eq!(library.get("Book").unwrap().author, UNKNOWN_AUTHOR);
}

// =============================================================================
// Grouping and sorting
// =============================================================================

#[test]
fn test_author_inheritance() {
    let input = format!(
        "{}{}",
        block("Book (Jane Doe)", "- Location 5-6", "a"),
        block("Book (J. Doe)", "- Location 1-2", "b"),
    );
    let library = convert_str(&input).library;
    assert_eq!(library.len(), 1);
    assert_eq!(library.get("Book").unwrap().author, "Jane Doe");
}

#[test]
fn test_two_highlights_in_one_book() {
    let input = "Book One (Jane Doe)\n\
        - Your Highlight at location 10-12 | Added on ...\n\
        First highlight text\n\
        ==========\n\
        Book One (Jane Doe)\n\
        - Your Highlight at location 1-3 | Added on ...\n\
        Second highlight text\n\
        ==========\n";

    let conversion = convert_str(input);
    let library = &conversion.library;

    assert_eq!(library.len(), 1);
    let group = library.get("Book One").unwrap();
    assert_eq!(group.author, "Jane Doe");
    let locations: Vec<&str> = group.highlights.iter().map(|h| h.location.as_str()).collect();
    assert_eq!(locations, vec!["1-3", "10-12"]);

    let md = &conversion.markdown;
    assert!(md.contains("## Book One"));
    assert!(md.contains("### by Jane Doe"));
    assert!(md.contains("> First highlight text"));
    assert!(md.contains("> Second highlight text"));
    assert!(md.contains("----"));
    assert!(md.find("Second highlight text").unwrap() < md.find("First highlight text").unwrap());
}

// =============================================================================
// Fixture file
// =============================================================================

#[test]
fn test_fixture_through_decoder() {
    let decoder = decoder_for_extension("txt").unwrap();
    let mut reader = BufReader::new(File::open(FIXTURE).unwrap());
    let library = decoder.decode(&mut reader).unwrap();

    let titles: Vec<&str> = library.groups().iter().map(|g| g.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["The Pragmatic Programmer", "Meditations", "Untitled Document"]
    );
    assert_eq!(library.highlight_count(), 5);

    let prag = library.get("The Pragmatic Programmer").unwrap();
    assert_eq!(prag.author, "David Thomas;Andrew Hunt");
    assert_eq!(prag.highlights[0].location, "45-47");
    assert!(prag.highlights[1].content.starts_with("Care about your craft. Why"));
}

#[test]
fn test_run_file_status() {
    let conversion = run_file(Some(Path::new(FIXTURE))).unwrap();
    assert_eq!(
        conversion.status(),
        Status::Complete { highlights: 5 }
    );
}

#[test]
fn test_run_file_from_temp_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clippings.txt");
    std::fs::write(&path, block("Book", "- Location 3-4", "x")).unwrap();

    let conversion = run_file(Some(&path)).unwrap();
    assert_eq!(conversion.library.highlight_count(), 1);

    let err = run_file(Some(&dir.path().join("missing.txt"))).unwrap_err();
    assert!(matches!(err, ClipmarkError::FileRead(_)));
}

#[test]
fn test_idempotent_markdown() {
    let input = std::fs::read_to_string(FIXTURE).unwrap();
    let first = convert_str(&input).markdown;
    let second = convert_str(&input).markdown;
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_encoders_write_output() {
    let library = convert_str(&std::fs::read_to_string(FIXTURE).unwrap()).library;
    for format in ["markdown", "html", "json"] {
        let encoder = encoder_for_format(format).unwrap();
        let mut out = Vec::new();
        encoder.encode(&library, &mut out).unwrap();
        assert!(!out.is_empty(), "{} output is empty", format);
    }
}

// =============================================================================
// Properties
// =============================================================================

fn location_strategy() -> impl Strategy<Value = (u32, u32)> {
    (0u32..100_000, 0u32..50)
}

proptest! {
    #[test]
    fn prop_sorted_within_group(locations in prop::collection::vec(location_strategy(), 1..40)) {
        let highlights = locations
            .iter()
            .enumerate()
            .map(|(i, (start, span))| {
                Highlight::new("Book", format!("{}-{}", start, start + span), format!("text {}", i))
            });
        let library = Library::from_highlights(highlights);

        for group in library.groups() {
            for pair in group.highlights.windows(2) {
                prop_assert!(pair[0].location_start() <= pair[1].location_start());
            }
        }
    }

    #[test]
    fn prop_longest_duplicate_survives(lengths in prop::collection::vec(1usize..60, 1..10)) {
        let input: String = lengths
            .iter()
            .map(|n| block("Book", "- Location 7-8", &"x".repeat(*n)))
            .collect();
        let library = convert_str(&input).library;

        prop_assert_eq!(library.highlight_count(), 1);
        let max = *lengths.iter().max().unwrap();
        prop_assert_eq!(library.groups()[0].highlights[0].content_length(), max);
    }

    #[test]
    fn prop_markdown_is_deterministic(contents in prop::collection::vec("[a-z ]{1,20}", 1..10)) {
        let input: String = contents
            .iter()
            .enumerate()
            .map(|(i, c)| block(&format!("Book {}", i % 3), &format!("- Location {}-{}", i, i + 1), c))
            .collect();
        let encoder = MarkdownEncoder::new();
        let a = encoder.render(&convert_str(&input).library);
        let b = encoder.render(&convert_str(&input).library);
        prop_assert_eq!(a, b);
    }
}
