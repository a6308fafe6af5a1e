//! strmatch Core Engine
//!
//! String similarity and fuzzy matching: edit distance, comparators built
//! from options, and similarity ranking over candidate lists.
//!
//! # Features
//!
//! - `native` - Enable all native optimizations
//! - `parallel` - Parallel distance computation via rayon for large candidate sets
//!
//! The rayon path is only compiled, and so only tested, with
//! `cargo test --features parallel`.
//!
//! # Example
//!
//! ```rust
//! use strmatch_core::{closest_string_simple, closest_strings, levenshtein_distance};
//!
//! assert_eq!(levenshtein_distance("hep", "help"), 1);
//!
//! let words = ["length", "size", "help", "world"];
//! assert_eq!(closest_string_simple("hep", &words).unwrap(), "help");
//! assert_eq!(closest_strings("hep", &words, 2, None), vec!["help", "size"]);
//! ```

pub mod comparator;
pub mod distance;
pub mod error;
pub mod ranking;
pub mod text;

// Re-export main types at crate root
pub use comparator::{
    case_sensitive_closest_string_options, case_sensitive_compare_similarity_options,
    default_closest_string_options, default_compare_similarity_options, Comparator, DistanceFn,
    MatchingOptions, Metric,
};
pub use distance::{levenshtein_distance, BIT_PARALLEL_THRESHOLD};
pub use error::{MatchResult, StringMatchingError};
pub use ranking::{
    closest_string, closest_string_simple, closest_strings, compare_similarity,
    compare_similarity_simple, rank, sort_by_similarity, suggest, RankedMatch, Ranker,
    RankerConfig,
};
pub use text::{
    camel_case, capitalize, kebab_case, lowercase, pascal_case, snake_case, split_words,
    CaseStyle, ParseCaseStyleError,
};
