//! Comparator Factory
//!
//! Turns [`MatchingOptions`] into a ready-to-call distance function. The
//! configuration is inspected once, at build time; the resulting closure does
//! no per-call branching on options.
//!
//! # Example
//!
//! ```rust
//! use strmatch_core::comparator::{Comparator, MatchingOptions};
//!
//! let insensitive = Comparator::build(None);
//! assert_eq!(insensitive.distance("ABC", "abc"), 0);
//!
//! let sensitive = Comparator::build(Some(&MatchingOptions::case_sensitive()));
//! assert_eq!(sensitive.distance("ABC", "abc"), 3);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::distance::levenshtein_distance;

/// Shared, thread-safe distance function `(a, b) -> distance`
pub type DistanceFn = Arc<dyn Fn(&str, &str) -> usize + Send + Sync>;

/// Distance metric used by a comparator
#[derive(Clone, Default)]
pub enum Metric {
    /// Built-in Levenshtein edit distance
    #[default]
    Levenshtein,
    /// Caller-supplied function, used as-is (not validated)
    Custom(DistanceFn),
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Levenshtein => "levenshtein",
            Metric::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options shared by every matching and similarity operation
#[derive(Debug, Clone, Default)]
pub struct MatchingOptions {
    /// When false, both inputs are lowercased before the metric runs
    pub case_sensitive: bool,
    pub metric: Metric,
}

impl MatchingOptions {
    /// Case-insensitive Levenshtein
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-sensitive Levenshtein
    pub fn case_sensitive() -> Self {
        Self {
            case_sensitive: true,
            metric: Metric::Levenshtein,
        }
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Replace the metric with a custom distance function
    pub fn with_compare_fn<F>(mut self, compare_fn: F) -> Self
    where
        F: Fn(&str, &str) -> usize + Send + Sync + 'static,
    {
        self.metric = Metric::Custom(Arc::new(compare_fn));
        self
    }
}

/// Default options for `closest_string` / `closest_strings`
pub fn default_closest_string_options() -> MatchingOptions {
    MatchingOptions::new()
}

/// Case-sensitive options for `closest_string` / `closest_strings`
pub fn case_sensitive_closest_string_options() -> MatchingOptions {
    MatchingOptions::case_sensitive()
}

/// Default options for `compare_similarity` / `sort_by_similarity`
pub fn default_compare_similarity_options() -> MatchingOptions {
    MatchingOptions::new()
}

/// Case-sensitive options for `compare_similarity` / `sort_by_similarity`
pub fn case_sensitive_compare_similarity_options() -> MatchingOptions {
    MatchingOptions::case_sensitive()
}

/// A resolved distance function plus the options it was built from
#[derive(Clone)]
pub struct Comparator {
    distance_fn: DistanceFn,
    case_sensitive: bool,
    metric: &'static str,
}

impl Comparator {
    /// Resolve options into a concrete comparator. `None` means defaults.
    pub fn build(options: Option<&MatchingOptions>) -> Self {
        let defaults = MatchingOptions::default();
        let options = options.unwrap_or(&defaults);

        let distance_fn: DistanceFn = match (options.case_sensitive, &options.metric) {
            (true, Metric::Levenshtein) => Arc::new(levenshtein_distance),
            (false, Metric::Levenshtein) => Arc::new(|a: &str, b: &str| {
                levenshtein_distance(&a.to_lowercase(), &b.to_lowercase())
            }),
            (true, Metric::Custom(custom)) => Arc::clone(custom),
            (false, Metric::Custom(custom)) => {
                let custom = Arc::clone(custom);
                Arc::new(move |a: &str, b: &str| custom(&a.to_lowercase(), &b.to_lowercase()))
            }
        };

        Self {
            distance_fn,
            case_sensitive: options.case_sensitive,
            metric: options.metric.name(),
        }
    }

    #[inline]
    pub fn distance(&self, a: &str, b: &str) -> usize {
        (self.distance_fn)(a, b)
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn metric_name(&self) -> &'static str {
        self.metric
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("case_sensitive", &self.case_sensitive)
            .field("metric", &self.metric)
            .finish()
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::build(None)
    }
}
