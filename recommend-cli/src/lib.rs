//! Loading and rendering helpers for the `recommend-cli` binary.
//!
//! Ratings are read from a JSON object mapping each user to their item
//! ratings, e.g. `{"alice": {"maths-puzzle-app": 5.0}}`.

use anyhow::Context;
use recommend::{RatingTable, Recommendation};
use std::fmt::Write;
use std::path::Path;

/// Read a rating table from a JSON file.
pub fn load_ratings(path: impl AsRef<Path>) -> anyhow::Result<RatingTable> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading ratings from {}", path.display()))?;
    let ratings: RatingTable = serde_json::from_str(&raw)
        .with_context(|| format!("parsing ratings in {}", path.display()))?;
    log::debug!("loaded {} users from {}", ratings.len(), path.display());
    Ok(ratings)
}

/// Human readable listing with scores to four decimals.
pub fn render_text(user: &str, recs: &[Recommendation]) -> String {
    let mut out = format!("Recommendations for {user}:\n");
    if recs.is_empty() {
        out.push_str(" (no recommendations)\n");
    }
    for rec in recs {
        let _ = writeln!(out, "  {} -> score: {:.4}", rec.item, rec.score);
    }
    out
}

/// Pretty-printed JSON array of the recommendations.
pub fn render_json(recs: &[Recommendation]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(recs)?)
}
