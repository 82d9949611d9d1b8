//! Property-based tests for tf output parsers, diff classification and filtering
//!
//! Uses proptest to verify parsers handle arbitrary input without panicking
//! and that the pure functions keep their invariants.
//! Reference: https://lib.rs/crates/proptest

use proptest::prelude::*;
use tfsk::model::{ChangesetSummary, DiffSegment, FilterCriteria, classify, should_display};
use tfsk::tfs::VersionSpec;
use tfsk::tfs::parser::Parser;

// =============================================================================
// Strategy generators for realistic-ish tf output
// =============================================================================

/// Generate a display name (no colons, no leading/trailing space)
fn owner_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,10}( [A-Z][a-z]{1,10})?".prop_map(|s| s.to_string())
}

/// Generate a single comment line
fn comment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 ,.!-]{0,60}[a-zA-Z0-9]".prop_map(|s| s.to_string())
}

/// Generate a server path
fn server_path_strategy() -> impl Strategy<Value = String> {
    "\\$/[A-Za-z0-9_]{1,10}(/[A-Za-z0-9_.]{1,12}){0,3}".prop_map(|s| s.to_string())
}

fn changeset_strategy() -> impl Strategy<Value = ChangesetSummary> {
    (
        1u32..100_000,
        owner_strategy(),
        prop::option::of(comment_strategy()),
    )
        .prop_map(|(id, owner, comment)| ChangesetSummary {
            id,
            owner_display_name: owner,
            comment,
            date: String::new(),
        })
}

// =============================================================================
// Robustness tests: parsers should never panic on arbitrary input
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// History parser should not panic on arbitrary input
    #[test]
    fn history_parser_does_not_panic(input in ".*") {
        // Should return Ok or Err, never panic
        let _ = Parser::parse_history(&input);
    }

    /// Changeset parser should not panic on arbitrary input
    #[test]
    fn changeset_parser_does_not_panic(input in ".*") {
        let _ = Parser::parse_changeset_items(&input);
    }

    /// Properties parser should not panic on arbitrary input
    #[test]
    fn properties_parser_does_not_panic(input in ".*") {
        let _ = Parser::parse_properties(&input);
    }

    /// Versionspec parser should not panic on arbitrary input
    #[test]
    fn version_spec_parser_does_not_panic(input in ".*") {
        let _ = VersionSpec::parse(&input);
    }

    /// Classification should not panic on arbitrary input
    #[test]
    fn classify_does_not_panic(input in "\\PC*") {
        let _ = classify(&input);
    }
}

// =============================================================================
// Structured input tests: parsers handle well-formed input correctly
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// History parser reads back id, owner and comment of a record
    #[test]
    fn history_parser_handles_structured_record(
        id in 1u32..10_000_000,
        owner in owner_strategy(),
        comment in comment_strategy(),
        path in server_path_strategy(),
        change_type in prop::sample::select(vec!["add", "edit", "delete", "edit, rename"]),
    ) {
        let record = format!(
            "Changeset: {}\nUser: {}\nDate: Monday, March 3, 2014 9:15:00 AM\n\nComment:\n  {}\n\nItems:\n  {:<20} {}\n",
            id, owner, comment, change_type, path
        );

        let changesets = Parser::parse_history(&record);
        prop_assert!(changesets.is_ok(), "Failed to parse: {:?}", changesets);
        let changesets = changesets.unwrap();
        prop_assert_eq!(changesets.len(), 1);
        prop_assert_eq!(changesets[0].id, id);
        prop_assert_eq!(&changesets[0].owner_display_name, &owner);
        prop_assert_eq!(changesets[0].comment.as_deref(), Some(comment.as_str()));

        let items = Parser::parse_changeset_items(&record).unwrap();
        prop_assert_eq!(items.len(), 1);
        prop_assert_eq!(&items[0].item_path, &path);
        prop_assert_eq!(items[0].change_type.as_str(), change_type);
        prop_assert_eq!(items[0].changeset_id, id);
    }

    /// Changeset versionspecs round-trip through Display
    #[test]
    fn changeset_version_spec_round_trip(n in 1u32..u32::MAX) {
        let spec = VersionSpec::parse_single(&format!("C{}", n)).unwrap();
        prop_assert_eq!(&spec, &VersionSpec::Changeset(n));
        prop_assert_eq!(VersionSpec::parse_single(&spec.to_string()).unwrap(), spec);
    }
}

// =============================================================================
// Diff classification invariants
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// One text segment per input line, each followed by a line break
    #[test]
    fn classify_one_segment_per_line(input in "[-+@ a-z\\r\\n]{0,200}") {
        let segments = classify(&input);
        let line_count = input.split('\n').count();

        let text_segments = segments.iter().filter(|s| !s.is_line_break()).count();
        prop_assert_eq!(text_segments, line_count);
        prop_assert_eq!(segments.last(), Some(&DiffSegment::LineBreak));
    }

    /// Only hunk headers are preceded by an extra line break
    #[test]
    fn classify_break_count(input in "[-+@ a-z\\n]{0,200}") {
        let segments = classify(&input);
        let lines: Vec<&str> = input.split('\n').collect();
        let hunks = lines.iter().filter(|l| l.starts_with("@@")).count();

        let breaks = segments.iter().filter(|s| s.is_line_break()).count();
        prop_assert_eq!(breaks, lines.len() + hunks);
    }

    /// CRLF and LF input classify identically
    #[test]
    fn classify_crlf_equivalent(lines in prop::collection::vec("[-+@ a-z]{0,20}", 0..20)) {
        let lf = lines.join("\n");
        let crlf = lines.join("\r\n");
        prop_assert_eq!(classify(&lf), classify(&crlf));
    }
}

// =============================================================================
// Filter invariants
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// An empty filter shows everything
    #[test]
    fn identity_filter_shows_all(changeset in changeset_strategy()) {
        prop_assert!(should_display(&changeset, &FilterCriteria::new()));
    }

    /// Excluded owners are always hidden, whatever the keyword
    #[test]
    fn excluded_owner_always_hidden(
        changeset in changeset_strategy(),
        keyword in prop::option::of("[a-z]{1,5}"),
    ) {
        let criteria = FilterCriteria::from_inputs(
            Some(&changeset.owner_display_name),
            keyword.as_deref(),
        );
        prop_assert!(!should_display(&changeset, &criteria));
    }

    /// Keyword matching ignores case
    #[test]
    fn keyword_case_insensitive(changeset in changeset_strategy(), upper in prop::bool::ANY) {
        let Some(comment) = changeset.comment.clone() else {
            return Ok(());
        };
        let word: String = comment.chars().take_while(|c| c.is_ascii_alphanumeric()).collect();
        let keyword = if upper { word.to_uppercase() } else { word.to_lowercase() };

        let criteria = FilterCriteria::from_inputs(None, Some(&keyword));
        prop_assert!(should_display(&changeset, &criteria));
    }

    /// A keyword hides changesets without a comment
    #[test]
    fn keyword_hides_missing_comment(owner in owner_strategy(), keyword in "[a-z]{1,5}") {
        let changeset = ChangesetSummary {
            id: 1,
            owner_display_name: owner,
            comment: None,
            date: String::new(),
        };
        let criteria = FilterCriteria::from_inputs(None, Some(&keyword));
        prop_assert!(!should_display(&changeset, &criteria));
    }
}
