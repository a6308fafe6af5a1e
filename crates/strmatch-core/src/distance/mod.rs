//! Edit Distance Engine
//!
//! Levenshtein distance over `char` sequences with two interchangeable kernels:
//!
//! - **Bit-parallel** (Myers/Hyyrö): packs one DP column into a machine word,
//!   used when both inputs are shorter than [`BIT_PARALLEL_THRESHOLD`]
//! - **Dynamic**: classical recurrence with two rolling rows, used otherwise
//!
//! Both kernels return identical results for every input; the threshold only
//! affects speed. Comparison is exact (case-sensitive) - folding is the
//! comparator's job.
//!
//! # Example
//!
//! ```rust
//! use strmatch_core::distance::levenshtein_distance;
//!
//! assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
//! assert_eq!(levenshtein_distance("", "abc"), 3);
//! ```

mod bit_parallel;
mod dynamic;

pub use bit_parallel::{distance as bit_parallel, WORD_BITS};
pub use dynamic::distance as dynamic;

/// Inputs whose longer side has fewer chars than this use the bit-parallel kernel
pub const BIT_PARALLEL_THRESHOLD: usize = 32;

/// Which kernel computes a given pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    BitParallel,
    Dynamic,
}

impl Kernel {
    /// Pick the kernel for inputs of the given char lengths
    #[inline]
    pub fn select(a_len: usize, b_len: usize) -> Self {
        if a_len.max(b_len) < BIT_PARALLEL_THRESHOLD {
            Kernel::BitParallel
        } else {
            Kernel::Dynamic
        }
    }

    /// Run this kernel on two char sequences
    #[inline]
    pub fn run(self, a: &[char], b: &[char]) -> usize {
        match self {
            Kernel::BitParallel => bit_parallel(a, b),
            Kernel::Dynamic => dynamic(a, b),
        }
    }
}

/// Levenshtein distance between two strings, counted in chars
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

/// Levenshtein distance between two pre-split char sequences
#[inline]
pub fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    Kernel::select(a.len(), b.len()).run(a, b)
}
