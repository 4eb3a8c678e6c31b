//! The segments lit by each digit on a correctly wired display.
//!
//! | digit | segments  | count |
//! | ----- | --------- | ----- |
//! | 0     | `abc efg` | 6     |
//! | 1     | `  c  f ` | 2     |
//! | 2     | `a cde g` | 5     |
//! | 3     | `a cd fg` | 5     |
//! | 4     | ` bcd f ` | 4     |
//! | 5     | `ab d fg` | 5     |
//! | 6     | `ab defg` | 6     |
//! | 7     | `a c  f ` | 3     |
//! | 8     | `abcdefg` | 7     |
//! | 9     | `abcd fg` | 6     |

use crate::segment::Pattern;

pub type Digit = u8;

const CANONICAL: [Pattern; 10] = [
    Pattern::from_letters("abcefg"),
    Pattern::from_letters("cf"),
    Pattern::from_letters("acdeg"),
    Pattern::from_letters("acdfg"),
    Pattern::from_letters("bcdf"),
    Pattern::from_letters("abdfg"),
    Pattern::from_letters("abdefg"),
    Pattern::from_letters("acf"),
    Pattern::from_letters("abcdefg"),
    Pattern::from_letters("abcdfg"),
];

const LOOKUP: [Option<Digit>; 128] = build_lookup();

const fn build_lookup() -> [Option<Digit>; 128] {
    let mut table: [Option<Digit>; 128] = [None; 128];
    let mut digit = 0;
    while digit < CANONICAL.len() {
        table[CANONICAL[digit].bits() as usize] = Some(digit as Digit);
        digit += 1;
    }
    table
}

/// Which digit, if any, is shown by this (unscrambled) set of segments.
pub fn lookup(segments: Pattern) -> Option<Digit> {
    LOOKUP.get(segments.bits() as usize).copied().flatten()
}

/// The segments lit for `digit`.
pub fn canonical(digit: Digit) -> Option<Pattern> {
    CANONICAL.get(digit as usize).copied()
}

pub fn entries() -> impl Iterator<Item = (Digit, Pattern)> {
    CANONICAL
        .iter()
        .enumerate()
        .map(|(digit, pattern)| (digit as Digit, *pattern))
}

#[test]
fn test_catalog_completeness() {
    let lengths: Vec<usize> = entries().map(|(_, p)| p.len()).collect();
    assert_eq!(lengths, vec![6, 2, 5, 5, 4, 5, 6, 3, 7, 6]);
    let defined = (0..=127u8)
        .filter_map(Pattern::from_bits)
        .filter(|p| lookup(*p).is_some())
        .count();
    assert_eq!(defined, 10);
    for (digit, pattern) in entries() {
        assert_eq!(lookup(pattern), Some(digit));
        assert_eq!(canonical(digit), Some(pattern));
    }
    assert_eq!(canonical(10), None);
}

#[test]
fn test_lookup() {
    let parse = |s: &str| s.parse::<Pattern>().expect("valid pattern");
    assert_eq!(lookup(parse("fc")), Some(1));
    assert_eq!(lookup(parse("gfdca")), Some(3));
    assert_eq!(lookup(parse("ab")), None);
    assert_eq!(lookup(parse("abcdef")), None);
    assert_eq!(lookup(Pattern::EMPTY), None);
    assert_eq!(lookup(Pattern::ALL), Some(8));
}
