//! Word splitting and case conversion
//!
//! Words are separated by whitespace, `_`, `-`, and case boundaries
//! (`fooBar`, `HTTPServer`, `utf8Decoder`). A digit followed by a lowercase
//! letter stays in one word.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '_' || c == '-'
}

/// Split an identifier or phrase into its words
pub fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if is_separator(c) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        // current is non-empty only when chars[i - 1] was a word char
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Unicode simple lowercase
pub fn lowercase(input: &str) -> String {
    input.to_lowercase()
}

/// First char uppercased, the rest lowercased
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// `fooBarBaz`
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, word) in split_words(input).iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// `FooBarBaz`
pub fn pascal_case(input: &str) -> String {
    split_words(input).iter().map(|w| capitalize(w)).collect()
}

/// `foo_bar_baz`
pub fn snake_case(input: &str) -> String {
    join_lower(input, "_")
}

/// `foo-bar-baz`
pub fn kebab_case(input: &str) -> String {
    join_lower(input, "-")
}

fn join_lower(input: &str, sep: &str) -> String {
    split_words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Supported identifier styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Camel,
    Pascal,
    Snake,
    Kebab,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 4] = [
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Snake,
        CaseStyle::Kebab,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Snake => "snake",
            CaseStyle::Kebab => "kebab",
        }
    }

    pub fn convert(self, input: &str) -> String {
        match self {
            CaseStyle::Camel => camel_case(input),
            CaseStyle::Pascal => pascal_case(input),
            CaseStyle::Snake => snake_case(input),
            CaseStyle::Kebab => kebab_case(input),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown case style name
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown case style '{0}' (expected camel, pascal, snake or kebab)")]
pub struct ParseCaseStyleError(String);

impl FromStr for CaseStyle {
    type Err = ParseCaseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        CaseStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == name)
            .ok_or_else(|| ParseCaseStyleError(s.to_string()))
    }
}
