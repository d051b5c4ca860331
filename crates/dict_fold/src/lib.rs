// crates/dict_fold/src/lib.rs

use anyhow::{Context, Result};

use block_markers::LARGE_BLOCK_THRESHOLD;
use find_large_blocks::{find_block_ranges_with, find_large_block_ranges, LineRange, PatternMatcher};
use fold_plan::build_fold_plan;
use resolve_end_column::resolve_end_column_signed;
use sample_document::{SAMPLE_LANGUAGE, SAMPLE_SOURCE};

pub mod config;
pub mod render;

pub use config::{AppConfig, OutputFormat};

/// Scans the built-in sample and returns what the CLI prints.
pub fn run(config: &AppConfig) -> Result<String> {
    run_on(SAMPLE_SOURCE, config)
}

/// Scans `source` and renders the result according to `config`.
pub fn run_on(source: &str, config: &AppConfig) -> Result<String> {
    log::debug!("config: {:?}", config);

    if let Some(line_index) = config.column_of {
        let column = resolve_end_column_signed(source, line_index);
        log::debug!("end column of line index {}: {}", line_index, column);
        return Ok(column.to_string());
    }

    let ranges = find_ranges(source, config)?;
    let plan = build_fold_plan(source, &ranges);
    log::info!(
        "{} large block(s) found in {} sample ({} lines)",
        plan.len(),
        SAMPLE_LANGUAGE,
        source.split('\n').count()
    );

    match config.format {
        OutputFormat::Json => {
            if config.show_source {
                log::warn!("--show-source is ignored with JSON output");
            }
            serde_json::to_string_pretty(&plan).context("Failed to serialize fold plan")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            if config.show_source {
                out.push_str(&render::render_source(source, &plan));
            }
            out.push_str(&render::render_plan(&plan));
            Ok(out.trim_end().to_string())
        }
    }
}

fn find_ranges(source: &str, config: &AppConfig) -> Result<Vec<LineRange>> {
    if !config.uses_patterns() {
        return Ok(find_large_block_ranges(source));
    }

    let matcher = PatternMatcher::with_defaults(
        config.open_pattern.as_deref(),
        config.close_pattern.as_deref(),
    )
    .with_context(|| {
        format!(
            "Invalid block pattern (open: {:?}, close: {:?})",
            config.open_pattern, config.close_pattern
        )
    })?;
    log::debug!(
        "matching blocks with open /{}/ and close /{}/",
        matcher.open_pattern(),
        matcher.close_pattern()
    );
    Ok(find_block_ranges_with(source, &matcher, LARGE_BLOCK_THRESHOLD))
}
