// crates/dict_fold/src/render.rs

use fold_plan::FoldPlan;

const SEPARATOR: &str = "--------------------------------------------------";

/// Prints the source with 1-based line numbers. Lines inside a folding
/// region are marked with `|`, the first line of a region with `>`.
pub fn render_source(source: &str, plan: &FoldPlan) -> String {
    let mut out = String::new();
    for (index, line) in source.split('\n').enumerate() {
        let number = index + 1;
        let marker = plan
            .regions
            .iter()
            .find(|r| r.start <= number && number <= r.end)
            .map(|r| if r.start == number { '>' } else { '|' })
            .unwrap_or(' ');
        out.push_str(&format!("{:>4} {} {}\n", number, marker, line));
    }
    out
}

/// Human-readable listing of every region with its zone and widget.
pub fn render_plan(plan: &FoldPlan) -> String {
    let mut out = String::new();
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&format!("Large blocks found: {}\n", plan.len()));
    out.push_str(SEPARATOR);
    out.push('\n');

    let entries = plan.regions.iter().zip(&plan.zones).zip(&plan.widgets);
    for (i, ((region, zone), widget)) in entries.enumerate() {
        out.push_str(&format!(
            "Block {}: lines {}-{} ({} lines)\n",
            i + 1,
            region.start,
            region.end,
            region.end - region.start + 1
        ));
        out.push_str(&format!("  zone:   after line {}: {}\n", zone.after_line_number, zone.text));
        out.push_str(&format!(
            "  widget: {} at {}:{}\n",
            widget.id, widget.line_number, widget.column
        ));
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}
