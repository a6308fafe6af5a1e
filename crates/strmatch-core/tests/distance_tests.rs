//! Metric property tests for the edit distance engine

use strmatch_core::distance::{
    bit_parallel, dynamic, levenshtein_distance, BIT_PARALLEL_THRESHOLD,
};

/// Sample inputs covering empty, short, threshold-sized and long strings
fn samples() -> Vec<String> {
    vec![
        String::new(),
        "a".into(),
        "hep".into(),
        "help".into(),
        "hello".into(),
        "kitten".into(),
        "sitting".into(),
        "héllo wörld".into(),
        "a".repeat(BIT_PARALLEL_THRESHOLD - 1),
        "a".repeat(BIT_PARALLEL_THRESHOLD),
        format!("{}b", "a".repeat(BIT_PARALLEL_THRESHOLD - 1)),
        "the quick brown fox jumps over the lazy dog".into(),
        "pack my box with five dozen liquor jugs".into(),
    ]
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn test_identity() {
    for s in samples() {
        assert_eq!(levenshtein_distance(&s, &s), 0, "d({:?}, itself)", s);
    }
}

#[test]
fn test_empty_distance_is_length() {
    for s in samples() {
        assert_eq!(levenshtein_distance("", &s), s.chars().count());
        assert_eq!(levenshtein_distance(&s, ""), s.chars().count());
    }
}

#[test]
fn test_symmetry() {
    let samples = samples();
    for a in &samples {
        for b in &samples {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        }
    }
}

#[test]
fn test_triangle_inequality() {
    let samples = samples();
    for a in &samples {
        for b in &samples {
            let ab = levenshtein_distance(a, b);
            for c in &samples {
                let via = levenshtein_distance(a, c) + levenshtein_distance(c, b);
                assert!(ab <= via, "d({:?},{:?}) = {} > {}", a, b, ab, via);
            }
        }
    }
}

#[test]
fn test_matches_reference_implementation() {
    let samples = samples();
    for a in &samples {
        for b in &samples {
            assert_eq!(
                levenshtein_distance(a, b),
                strsim::levenshtein(a, b),
                "mismatch for {:?} / {:?}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_kernels_agree_on_all_samples() {
    let samples = samples();
    for a in &samples {
        for b in &samples {
            let (a, b) = (chars(a), chars(b));
            assert_eq!(bit_parallel(&a, &b), dynamic(&a, &b));
        }
    }
}

#[test]
fn test_bit_parallel_beyond_one_word() {
    let a = vec!['a'; 70];
    let b = vec!['b'; 70];
    assert_eq!(bit_parallel(&a, &b), 70);
    assert_eq!(bit_parallel(&a, &b), dynamic(&a, &b));
}

#[test]
fn test_threshold_boundary_pairs() {
    // Pairs whose longer side is 30, 31, 32 and 33 chars, straddling the switch
    for len in BIT_PARALLEL_THRESHOLD - 2..=BIT_PARALLEL_THRESHOLD + 1 {
        let a: String = (0..len).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        let shifted: String = a.chars().skip(1).chain(std::iter::once('z')).collect();
        let interleaved: String = a
            .chars()
            .enumerate()
            .map(|(i, c)| if i % 3 == 0 { 'X' } else { c })
            .collect();
        let shorter: String = a.chars().take(len / 2).collect();

        for b in [&shifted, &interleaved, &shorter] {
            let (ca, cb) = (chars(&a), chars(b));
            let expected = strsim::levenshtein(&a, b);
            assert_eq!(bit_parallel(&ca, &cb), expected, "bit-parallel, len {}", len);
            assert_eq!(dynamic(&ca, &cb), expected, "dynamic, len {}", len);
            assert_eq!(levenshtein_distance(&a, b), expected, "dispatch, len {}", len);
        }
    }
}
