// crates/find_large_blocks/tests/properties.rs

use find_large_blocks::{
    find_block_ranges_with, find_large_block_ranges, BraceMatcher, LineRange, PatternMatcher,
};
use proptest::prelude::*;

/// Lines drawn from a small alphabet so braces show up often.
fn source_text() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        Just(String::new()),
        Just("x = 1".to_string()),
        Just("d = {".to_string()),
        Just("}".to_string()),
        Just("{}".to_string()),
        Just("    'k': 'v',".to_string()),
        "[a-z {}'\t]{0,12}",
    ];
    prop::collection::vec(line, 0..60).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn no_open_brace_means_no_ranges(src in "[a-z0-9 }'\n\t]{0,300}") {
        prop_assert!(find_large_block_ranges(&src).is_empty());
    }

    #[test]
    fn ranges_exceed_threshold_and_never_overlap(src in source_text()) {
        let ranges = find_large_block_ranges(&src);
        for r in &ranges {
            prop_assert!(r.end - r.start > 5, "range too small: {:?}", r);
        }
        for pair in ranges.windows(2) {
            prop_assert!(pair[0].end < pair[1].start, "overlap: {:?}", pair);
        }
    }

    #[test]
    fn scanning_twice_gives_same_result(src in source_text()) {
        prop_assert_eq!(find_large_block_ranges(&src), find_large_block_ranges(&src));
    }

    #[test]
    fn regex_braces_agree_with_plain_braces(src in source_text()) {
        let regex = PatternMatcher::with_defaults(None, None).unwrap();
        prop_assert_eq!(
            find_block_ranges_with(&src, &regex, 5),
            find_large_block_ranges(&src)
        );
    }

    #[test]
    fn short_blocks_are_never_reported(filler in 0usize..5) {
        let mut lines = vec!["{".to_string()];
        lines.extend((0..filler).map(|i| format!("    'k{}': {},", i, i)));
        lines.push("}".to_string());
        prop_assert!(find_large_block_ranges(&lines.join("\n")).is_empty());
    }
}

#[test]
fn reference_block_of_eight_lines() {
    let src = ["{", "1", "2", "3", "4", "5", "6", "}"].join("\n");
    assert_eq!(find_large_block_ranges(&src), vec![LineRange { start: 1, end: 8 }]);
}

#[test]
fn custom_patterns_find_large_lists() {
    let src = [
        "values = [",
        "    1,",
        "    2,",
        "    3,",
        "    4,",
        "    5,",
        "]",
    ]
    .join("\n");
    let lists = PatternMatcher::new(r"\[\s*$", r"^\s*\]").unwrap();
    assert_eq!(
        find_block_ranges_with(&src, &lists, 5),
        vec![LineRange { start: 1, end: 7 }]
    );
    assert!(find_block_ranges_with(&src, &BraceMatcher, 5).is_empty());
}
