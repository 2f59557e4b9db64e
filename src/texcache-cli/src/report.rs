//! Console formatting for generation and preview output

use serde_json::Value;
use texcache::{FileOutcome, OutcomeStatus, RunSummary};

pub const SEPARATOR_WIDTH: usize = 50;

/// Texture lists longer than this are abbreviated
const FULL_LISTING_LIMIT: usize = 5;

pub fn separator(ch: char) -> String {
    ch.to_string().repeat(SEPARATOR_WIDTH)
}

/// Display a texture entry; strings print bare, anything else as JSON
pub fn texture_name(texture: &Value) -> String {
    match texture {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Numbered texture listing, abbreviated to first two and last when long
pub fn texture_lines(textures: &[Value]) -> Vec<String> {
    if textures.len() <= FULL_LISTING_LIMIT {
        return textures
            .iter()
            .enumerate()
            .map(|(i, t)| format!("    {}. {}", i + 1, texture_name(t)))
            .collect();
    }

    let last = textures.len();
    vec![
        format!("    1. {}", texture_name(&textures[0])),
        format!("    2. {}", texture_name(&textures[1])),
        "    ...".to_string(),
        format!("    {}. {}", last, texture_name(&textures[last - 1])),
    ]
}

/// Lines describing what happened to one descriptor
pub fn outcome_lines(outcome: &FileOutcome) -> Vec<String> {
    let descriptor = outcome.descriptor.display();

    match &outcome.status {
        OutcomeStatus::Generated {
            cache,
            format,
            textures,
        } => {
            let mut lines = vec![
                format!("✓ Generated: {}", cache.display()),
                format!("  Format: {}", format),
                format!("  Contains {} texture file(s)", textures.len()),
            ];
            lines.extend(texture_lines(textures));
            lines
        }
        OutcomeStatus::Skipped => vec![
            format!("⚠ Skipped: {}", descriptor),
            "  Reason: no supported textures field found".to_string(),
            "  Detected format: unrecognized".to_string(),
        ],
        OutcomeStatus::Failed(e) if e.is_parse_error() => vec![
            format!("✗ JSON error: {}", descriptor),
            format!("  Details: {}", e),
        ],
        OutcomeStatus::Failed(e) => vec![
            format!("✗ Processing error: {}", descriptor),
            format!("  Details: {}", e),
        ],
    }
}

pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    vec![
        "Summary:".to_string(),
        format!("✓ Generated: {} textures.cache file(s)", summary.succeeded),
        format!("⚠ Skipped:   {} file(s)", summary.skipped),
        format!("✗ Errors:    {} file(s)", summary.errored),
        format!("Total:       {} index.json file(s)", summary.total()),
    ]
}
