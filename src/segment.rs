use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::errors::PatternError;

pub const SEGMENT_COUNT: usize = 7;

/// One of the seven segments of a display, `a` (top) to `g` (middle).
///
/// ```text
///  aaaa
/// b    c
/// b    c
///  dddd
/// e    f
/// e    f
///  gggg
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment(u8);

impl Segment {
    pub const A: Segment = Segment(0);
    pub const B: Segment = Segment(1);
    pub const C: Segment = Segment(2);
    pub const D: Segment = Segment(3);
    pub const E: Segment = Segment(4);
    pub const F: Segment = Segment(5);
    pub const G: Segment = Segment(6);

    pub fn all() -> impl Iterator<Item = Segment> + Clone {
        (0..SEGMENT_COUNT as u8).map(Segment)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        (b'a' + self.0) as char
    }
}

impl TryFrom<char> for Segment {
    type Error = PatternError;
    fn try_from(ch: char) -> Result<Segment, PatternError> {
        match ch {
            'a'..='g' => Ok(Segment(ch as u8 - b'a')),
            _ => Err(PatternError::BadSegment(ch)),
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A set of lit segments.  Bit `i` is set when segment `i` is lit, so
/// two spellings of the same set ("ab", "ba") are the same pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pattern(u8);

impl Pattern {
    pub const EMPTY: Pattern = Pattern(0);
    pub const ALL: Pattern = Pattern(0b111_1111);

    pub const fn from_bits(bits: u8) -> Option<Pattern> {
        if bits & !Pattern::ALL.0 == 0 {
            Some(Pattern(bits))
        } else {
            None
        }
    }

    /// For compile-time tables only; `letters` must be drawn from a-g.
    pub(crate) const fn from_letters(letters: &str) -> Pattern {
        let bytes = letters.as_bytes();
        let mut bits: u8 = 0;
        let mut i = 0;
        while i < bytes.len() {
            bits |= 1 << (bytes[i] - b'a');
            i += 1;
        }
        Pattern(bits & Pattern::ALL.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, segment: Segment) -> bool {
        self.0 & (1 << segment.0) != 0
    }

    pub fn with(self, segment: Segment) -> Pattern {
        Pattern(self.0 | (1 << segment.0))
    }

    pub fn segments(self) -> impl Iterator<Item = Segment> {
        Segment::all().filter(move |s| self.contains(*s))
    }

    /// True if the number of lit segments alone identifies the digit
    /// (2 for 1, 3 for 7, 4 for 4, 7 for 8).
    pub fn has_unique_length(self) -> bool {
        matches!(self.len(), 2 | 3 | 4 | 7)
    }
}

impl FromIterator<Segment> for Pattern {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Pattern {
        iter.into_iter().fold(Pattern::EMPTY, Pattern::with)
    }
}

impl FromStr for Pattern {
    type Err = PatternError;
    fn from_str(s: &str) -> Result<Pattern, PatternError> {
        if s.is_empty() {
            return Err(PatternError::Empty);
        }
        if s.chars().count() > SEGMENT_COUNT {
            return Err(PatternError::TooLong(s.to_string()));
        }
        let mut result = Pattern::EMPTY;
        for ch in s.chars() {
            let segment = Segment::try_from(ch)?;
            if result.contains(segment) {
                return Err(PatternError::RepeatedSegment {
                    pattern: s.to_string(),
                    segment: ch,
                });
            }
            result = result.with(segment);
        }
        Ok(result)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for segment in self.segments() {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[test]
fn test_segment_from_char() {
    assert_eq!(Segment::try_from('a'), Ok(Segment::A));
    assert_eq!(Segment::try_from('g'), Ok(Segment::G));
    assert_eq!(Segment::try_from('h'), Err(PatternError::BadSegment('h')));
    assert_eq!(Segment::try_from('A'), Err(PatternError::BadSegment('A')));
    assert_eq!(Segment::E.to_string(), "e");
}

#[test]
fn test_pattern_is_a_set() {
    let ab: Pattern = "ab".parse().expect("valid pattern");
    let ba: Pattern = "ba".parse().expect("valid pattern");
    assert_eq!(ab, ba);
    assert_eq!(ab.len(), 2);
    assert!(ab.contains(Segment::A));
    assert!(!ab.contains(Segment::C));
    assert_eq!("gfedcba".parse::<Pattern>().map(|p| p.to_string()), Ok("abcdefg".to_string()));
    assert_eq!("gfedcba".parse::<Pattern>(), Ok(Pattern::ALL));
}

#[test]
fn test_pattern_parse_errors() {
    assert_eq!("".parse::<Pattern>(), Err(PatternError::Empty));
    assert_eq!(
        "abcdefga".parse::<Pattern>(),
        Err(PatternError::TooLong("abcdefga".to_string()))
    );
    assert_eq!("abx".parse::<Pattern>(), Err(PatternError::BadSegment('x')));
    assert_eq!(
        "aba".parse::<Pattern>(),
        Err(PatternError::RepeatedSegment {
            pattern: "aba".to_string(),
            segment: 'a'
        })
    );
}

#[test]
fn test_pattern_from_bits() {
    assert_eq!(Pattern::from_bits(0b101), Some(Pattern::from_letters("ac")));
    assert_eq!(Pattern::from_bits(0b1000_0000), None);
    assert_eq!(Pattern::from_letters("cf").len(), 2);
}

#[test]
fn test_unique_length() {
    let unique: Vec<usize> = (1..=7)
        .filter(|n| Pattern::from_bits((1u8 << n) - 1).map_or(false, Pattern::has_unique_length))
        .collect();
    assert_eq!(unique, vec![2, 3, 4, 7]);
}
