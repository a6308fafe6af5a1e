//! Command implementations. Each returns the text to print on stdout.

use strmatch_core::{levenshtein_distance, CaseStyle, Ranker, StringMatchingError};
use tracing::{debug, info};

use crate::error::Result;

/// Output format for ranking commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Lines,
    Json,
}

pub fn distance(a: &str, b: &str) -> String {
    levenshtein_distance(a, b).to_string()
}

pub fn closest(
    ranker: &Ranker,
    query: &str,
    candidates: &[String],
    format: Format,
) -> Result<String> {
    debug!(query, candidates = candidates.len(), "closest");
    match format {
        Format::Lines => Ok(ranker.closest(query, candidates)?.to_string()),
        Format::Json => {
            // First ranked entry is the closest: the sort is stable
            let best = ranker
                .rank(query, candidates)
                .into_iter()
                .next()
                .ok_or_else(StringMatchingError::empty_candidates)?;
            Ok(serde_json::to_string_pretty(&best)?)
        }
    }
}

pub fn top(
    ranker: &Ranker,
    query: &str,
    candidates: &[String],
    n: usize,
    format: Format,
) -> Result<String> {
    debug!(query, n, candidates = candidates.len(), "top");
    match format {
        Format::Lines => Ok(ranker.closest_n(query, candidates, n).join("\n")),
        Format::Json => {
            let mut ranked = ranker.rank(query, candidates);
            ranked.truncate(n);
            Ok(serde_json::to_string_pretty(&ranked)?)
        }
    }
}

pub fn sort(
    ranker: &Ranker,
    target: &str,
    candidates: &[String],
    format: Format,
) -> Result<String> {
    debug!(query = target, candidates = candidates.len(), "sort");
    match format {
        Format::Lines => Ok(ranker.sort_by_similarity(candidates, target).join("\n")),
        Format::Json => Ok(serde_json::to_string_pretty(&ranker.rank(target, candidates))?),
    }
}

pub fn convert_case(style: CaseStyle, text: &str) -> String {
    let converted = style.convert(text);
    info!(%style, input = text, output = %converted, "converted case");
    converted
}
