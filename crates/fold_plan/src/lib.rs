// crates/fold_plan/src/lib.rs

//! Decorations the editor host applies for each large block: a folding
//! region, a note zone under the opening line and an inspect widget placed
//! right after the opening line's code.
//!
//! Everything here is plain data; rendering is left to the host.

use serde::Serialize;

use block_markers::{FOLDED_BLOCK_NOTE, INSPECT_WIDGET_ID_PREFIX};
use find_large_blocks::LineRange;
use resolve_end_column::resolve_end_column;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldingKind {
    Region,
}

/// Lines the host makes foldable (1-based, inclusive).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FoldingRegion {
    pub start: usize,
    pub end: usize,
    pub kind: FoldingKind,
}

/// A view zone inserted below `after_line_number`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CommentZone {
    pub after_line_number: usize,
    pub text: String,
}

/// An inline widget pinned at an exact (1-based) line and column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InspectWidget {
    pub id: String,
    pub line_number: usize,
    pub column: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FoldPlan {
    pub regions: Vec<FoldingRegion>,
    pub zones: Vec<CommentZone>,
    pub widgets: Vec<InspectWidget>,
}

impl FoldPlan {
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }
}

/// Builds one region, zone and widget per range, in range order.
///
/// The zone sits after line `start - 1`, which the host counts from 1, so
/// it lands directly above the folded block's first line. The widget
/// column comes from [`resolve_end_column`] on the opening line.
pub fn build_fold_plan(source: &str, ranges: &[LineRange]) -> FoldPlan {
    let mut plan = FoldPlan::default();

    for (index, range) in ranges.iter().enumerate() {
        plan.regions.push(FoldingRegion {
            start: range.start,
            end: range.end,
            kind: FoldingKind::Region,
        });
        plan.zones.push(CommentZone {
            after_line_number: range.start - 1,
            text: FOLDED_BLOCK_NOTE.to_string(),
        });
        plan.widgets.push(InspectWidget {
            id: format!("{}{}", INSPECT_WIDGET_ID_PREFIX, index),
            line_number: range.start,
            column: resolve_end_column(source, range.start - 1),
        });
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use find_large_blocks::find_large_block_ranges;
    use sample_document::SAMPLE_SOURCE;

    #[test]
    fn test_plan_for_sample() {
        let ranges = find_large_block_ranges(SAMPLE_SOURCE);
        let plan = build_fold_plan(SAMPLE_SOURCE, &ranges);

        assert_eq!(
            plan.regions,
            vec![FoldingRegion { start: 12, end: 20, kind: FoldingKind::Region }]
        );
        assert_eq!(
            plan.zones,
            vec![CommentZone { after_line_number: 11, text: FOLDED_BLOCK_NOTE.to_string() }]
        );
        assert_eq!(
            plan.widgets,
            vec![InspectWidget { id: "inspect.button.0".to_string(), line_number: 12, column: 16 }]
        );
    }

    #[test]
    fn test_empty_ranges_give_empty_plan() {
        let plan = build_fold_plan("x = 1", &[]);
        assert!(plan.is_empty());
        assert_eq!(plan, FoldPlan::default());
    }

    #[test]
    fn test_widget_ids_follow_range_order() {
        let src = "a = {\nb = {";
        let ranges = [LineRange { start: 1, end: 7 }, LineRange { start: 2, end: 9 }];
        let plan = build_fold_plan(src, &ranges);

        assert_eq!(plan.len(), 2);
        let ids: Vec<&str> = plan.widgets.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["inspect.button.0", "inspect.button.1"]);
        assert_eq!(plan.widgets[0].column, 6);
        assert_eq!(plan.widgets[1].column, 6);
    }

    #[test]
    fn test_plan_serializes_to_json() {
        let plan = build_fold_plan("{", &[LineRange { start: 1, end: 8 }]);
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["regions"][0]["kind"], "region");
        assert_eq!(json["regions"][0]["end"], 8);
        assert_eq!(json["zones"][0]["after_line_number"], 0);
        assert_eq!(json["widgets"][0]["column"], 2);
    }
}
