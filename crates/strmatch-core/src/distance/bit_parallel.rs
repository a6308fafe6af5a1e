//! Myers' bit-vector Levenshtein (Hyyrö's formulation) over a single `u64`

use ahash::AHashMap;

use super::dynamic;

/// Longest pattern the single-word kernel can hold
pub const WORD_BITS: usize = u64::BITS as usize;

/// Edit distance with the shorter input packed into one machine word.
///
/// Pairs whose shorter side exceeds [`WORD_BITS`] chars are handed to the
/// dynamic kernel, so the result is defined for every input.
pub fn distance(a: &[char], b: &[char]) -> usize {
    let (pattern, text) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if pattern.is_empty() {
        return text.len();
    }
    if pattern.len() > WORD_BITS {
        return dynamic::distance(pattern, text);
    }

    // Per-char match masks: bit i set where pattern[i] == c
    let mut peq: AHashMap<char, u64> = AHashMap::with_capacity(pattern.len());
    for (i, &c) in pattern.iter().enumerate() {
        *peq.entry(c).or_insert(0) |= 1u64 << i;
    }

    let last = 1u64 << (pattern.len() - 1);
    let mut vp = u64::MAX;
    let mut vn = 0u64;
    let mut score = pattern.len();

    for c in text {
        let eq = peq.get(c).copied().unwrap_or(0);
        let xv = eq | vn;
        let d0 = ((eq & vp).wrapping_add(vp) ^ vp) | xv;
        let hp = vn | !(d0 | vp);
        let hn = vp & d0;

        if hp & last != 0 {
            score += 1;
        } else if hn & last != 0 {
            score -= 1;
        }

        let hp = (hp << 1) | 1;
        let hn = hn << 1;
        vp = hn | !(d0 | hp);
        vn = hp & d0;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        distance(&a, &b)
    }

    #[test]
    fn test_basic() {
        assert_eq!(dist("kitten", "sitting"), 3);
        assert_eq!(dist("sitting", "kitten"), 3);
        assert_eq!(dist("a", "b"), 1);
        assert_eq!(dist("a", "a"), 0);
    }

    #[test]
    fn test_repeated_chars() {
        assert_eq!(dist("aaaa", "aa"), 2);
        assert_eq!(dist("abab", "baba"), 2);
    }

    #[test]
    fn test_full_word() {
        let a = "a".repeat(WORD_BITS);
        let b = "b".repeat(WORD_BITS);
        assert_eq!(dist(&a, &b), WORD_BITS);
        assert_eq!(dist(&a, &a), 0);
    }

    #[test]
    fn test_pattern_wider_than_word() {
        let a = vec!['a'; 70];
        let b = vec!['b'; 70];
        assert_eq!(distance(&a, &b), 70);
        assert_eq!(distance(&a, &b), dynamic::distance(&a, &b));

        let mut c = a.clone();
        c[35] = 'b';
        c.push('c');
        assert_eq!(distance(&a, &c), 2);
    }

    #[test]
    fn test_empty() {
        assert_eq!(dist("", ""), 0);
        assert_eq!(dist("", "abc"), 3);
    }
}
