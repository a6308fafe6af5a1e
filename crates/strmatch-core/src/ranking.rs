//! Ranking Engine - closest match, top-N and similarity ordering
//!
//! Every operation builds one [`Comparator`], computes each candidate's
//! distance exactly once, then selects or stably sorts. Ties always keep the
//! caller's candidate order.
//!
//! With the `parallel` feature, distances for large candidate sets are
//! computed with rayon. Results are gathered in input order before any
//! sorting, so output is identical to the sequential path.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::comparator::{Comparator, MatchingOptions};
use crate::error::{MatchResult, StringMatchingError};

#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
use rayon::prelude::*;

/// A candidate together with its distance from the query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub value: String,
    pub distance: usize,
    /// Position in the caller's candidate slice
    pub index: usize,
}

/// Ranker configuration
#[derive(Debug, Clone)]
pub struct RankerConfig {
    /// Candidate count at which distances are computed in parallel
    pub parallel_threshold: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 1000,
        }
    }
}

/// Ranks candidates against a query with one resolved comparator
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    comparator: Comparator,
    config: RankerConfig,
}

impl Ranker {
    pub fn new(options: Option<&MatchingOptions>) -> Self {
        Self::with_config(options, RankerConfig::default())
    }

    pub fn with_config(options: Option<&MatchingOptions>, config: RankerConfig) -> Self {
        Self {
            comparator: Comparator::build(options),
            config,
        }
    }

    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    /// The candidate with the smallest distance; first one wins ties
    pub fn closest<'a, S>(&self, query: &str, candidates: &'a [S]) -> MatchResult<&'a str>
    where
        S: AsRef<str> + Sync,
    {
        if candidates.is_empty() {
            debug!(query, "closest match requested with no candidates");
            return Err(StringMatchingError::empty_candidates());
        }

        let distances = self.distances(query, candidates);
        // min_by_key keeps the first of equal minima
        let (best, _) = distances
            .iter()
            .enumerate()
            .min_by_key(|&(_, d)| *d)
            .ok_or_else(StringMatchingError::empty_candidates)?;

        trace!(query, best, distance = distances[best], "closest match");
        Ok(candidates[best].as_ref())
    }

    /// Up to `n` candidates, nearest first
    pub fn closest_n<'a, S>(&self, query: &str, candidates: &'a [S], n: usize) -> Vec<&'a str>
    where
        S: AsRef<str> + Sync,
    {
        if n == 0 || candidates.is_empty() {
            return Vec::new();
        }
        let mut order = self.ordered(query, candidates);
        order.truncate(n);
        order
            .into_iter()
            .map(|(idx, _)| candidates[idx].as_ref())
            .collect()
    }

    /// All candidates, nearest to `target` first
    pub fn sort_by_similarity<'a, S>(&self, candidates: &'a [S], target: &str) -> Vec<&'a str>
    where
        S: AsRef<str> + Sync,
    {
        self.ordered(target, candidates)
            .into_iter()
            .map(|(idx, _)| candidates[idx].as_ref())
            .collect()
    }

    /// All candidates with their distances, nearest first
    pub fn rank<S>(&self, query: &str, candidates: &[S]) -> Vec<RankedMatch>
    where
        S: AsRef<str> + Sync,
    {
        self.ordered(query, candidates)
            .into_iter()
            .map(|(index, distance)| RankedMatch {
                value: candidates[index].as_ref().to_string(),
                distance,
                index,
            })
            .collect()
    }

    /// Compare two strings by their distance to `target`
    pub fn compare(&self, target: &str, a: &str, b: &str) -> Ordering {
        self.comparator
            .distance(target, a)
            .cmp(&self.comparator.distance(target, b))
    }

    /// (index, distance) pairs stably sorted by distance
    fn ordered<S>(&self, query: &str, candidates: &[S]) -> Vec<(usize, usize)>
    where
        S: AsRef<str> + Sync,
    {
        debug!(
            candidates = candidates.len(),
            metric = self.comparator.metric_name(),
            "ranking candidates"
        );
        let mut order: Vec<(usize, usize)> = self
            .distances(query, candidates)
            .into_iter()
            .enumerate()
            .collect();
        // sort_by_key is stable: equal distances keep input order
        order.sort_by_key(|&(_, distance)| distance);
        order
    }

    /// Distances in candidate order - parallel on native for large inputs
    #[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
    fn distances<S>(&self, query: &str, candidates: &[S]) -> Vec<usize>
    where
        S: AsRef<str> + Sync,
    {
        if candidates.len() >= self.config.parallel_threshold {
            candidates
                .par_iter()
                .map(|c| self.comparator.distance(query, c.as_ref()))
                .collect()
        } else {
            self.distances_sequential(query, candidates)
        }
    }

    /// Distances in candidate order (WASM or when parallel feature disabled)
    #[cfg(any(target_arch = "wasm32", not(feature = "parallel")))]
    fn distances<S>(&self, query: &str, candidates: &[S]) -> Vec<usize>
    where
        S: AsRef<str> + Sync,
    {
        self.distances_sequential(query, candidates)
    }

    fn distances_sequential<S>(&self, query: &str, candidates: &[S]) -> Vec<usize>
    where
        S: AsRef<str>,
    {
        candidates
            .iter()
            .map(|c| self.comparator.distance(query, c.as_ref()))
            .collect()
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }
}

/// Closest candidate to `query`. Errors when `candidates` is empty.
pub fn closest_string<'a, S>(
    query: &str,
    candidates: &'a [S],
    options: Option<&MatchingOptions>,
) -> MatchResult<&'a str>
where
    S: AsRef<str> + Sync,
{
    Ranker::new(options).closest(query, candidates)
}

/// [`closest_string`] with default options
pub fn closest_string_simple<'a, S>(query: &str, candidates: &'a [S]) -> MatchResult<&'a str>
where
    S: AsRef<str> + Sync,
{
    closest_string(query, candidates, None)
}

/// The `n` closest candidates to `query`, nearest first
pub fn closest_strings<'a, S>(
    query: &str,
    candidates: &'a [S],
    n: usize,
    options: Option<&MatchingOptions>,
) -> Vec<&'a str>
where
    S: AsRef<str> + Sync,
{
    Ranker::new(options).closest_n(query, candidates, n)
}

/// A sort comparator ordering strings by their distance to `target`
///
/// ```rust
/// use strmatch_core::compare_similarity_simple;
///
/// let mut words = vec!["world", "help", "hello"];
/// let cmp = compare_similarity_simple("hep");
/// words.sort_by(|a, b| cmp(a, b));
/// assert_eq!(words[0], "help");
/// ```
pub fn compare_similarity<'t>(
    target: &'t str,
    options: Option<&MatchingOptions>,
) -> impl Fn(&str, &str) -> Ordering + Send + Sync + 't {
    let ranker = Ranker::new(options);
    move |a: &str, b: &str| ranker.compare(target, a, b)
}

/// [`compare_similarity`] with default options
pub fn compare_similarity_simple(
    target: &str,
) -> impl Fn(&str, &str) -> Ordering + Send + Sync + '_ {
    compare_similarity(target, None)
}

/// Every candidate, nearest to `target` first
pub fn sort_by_similarity<'a, S>(
    candidates: &'a [S],
    target: &str,
    options: Option<&MatchingOptions>,
) -> Vec<&'a str>
where
    S: AsRef<str> + Sync,
{
    Ranker::new(options).sort_by_similarity(candidates, target)
}

/// Every candidate with its distance to `query`, nearest first
pub fn rank<S>(
    query: &str,
    candidates: &[S],
    options: Option<&MatchingOptions>,
) -> Vec<RankedMatch>
where
    S: AsRef<str> + Sync,
{
    Ranker::new(options).rank(query, candidates)
}

/// "Did you mean" lookup: the closest word within `max_distance`, ignoring
/// exact matches.
pub fn suggest<'a, S>(input: &str, vocabulary: &'a [S], max_distance: usize) -> Option<&'a str>
where
    S: AsRef<str> + Sync,
{
    let ranker = Ranker::new(None);
    let best = ranker.rank(input, vocabulary).into_iter().next()?;
    if best.distance > 0 && best.distance <= max_distance {
        Some(vocabulary[best.index].as_ref())
    } else {
        None
    }
}
