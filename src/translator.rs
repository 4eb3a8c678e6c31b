use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use once_cell::sync::Lazy;

use crate::errors::TranslatorError;
use crate::segment::{Pattern, Segment, SEGMENT_COUNT};

/// A hypothesis about how the display is wired: a one-to-one mapping
/// from scrambled segments to true segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Translator {
    /// `forward[i]` is the true segment for scrambled segment `i`.
    forward: [Segment; SEGMENT_COUNT],
}

/// All 7! wirings, in lexicographic order of their images.
static CANDIDATES: Lazy<Vec<Translator>> = Lazy::new(|| {
    Segment::all()
        .permutations(SEGMENT_COUNT)
        .map(|images| {
            let mut forward = [Segment::A; SEGMENT_COUNT];
            forward.copy_from_slice(&images);
            Translator { forward }
        })
        .collect()
});

/// Every possible wiring.  The list is built on first use and shared.
pub fn candidates() -> &'static [Translator] {
    CANDIDATES.as_slice()
}

impl Translator {
    pub fn identity() -> Translator {
        let mut forward = [Segment::A; SEGMENT_COUNT];
        for (slot, segment) in forward.iter_mut().zip(Segment::all()) {
            *slot = segment;
        }
        Translator { forward }
    }

    /// Builds a translator from the images of a..g, in that order.
    pub fn from_images(images: [Segment; SEGMENT_COUNT]) -> Result<Translator, TranslatorError> {
        let seen: Pattern = images.iter().copied().collect();
        if seen == Pattern::ALL {
            Ok(Translator { forward: images })
        } else {
            let spelled: String = images.iter().map(|s| s.as_char()).collect();
            Err(TranslatorError::NotABijection(spelled))
        }
    }

    pub fn unscramble(&self, scrambled: Segment) -> Segment {
        self.forward[scrambled.index()]
    }

    pub fn scramble(&self, unscrambled: Segment) -> Segment {
        self.inverse().unscramble(unscrambled)
    }

    /// Maps every lit segment of `scrambled` to its true segment.
    pub fn apply(&self, scrambled: Pattern) -> Pattern {
        let bits = scrambled.bits();
        let mut result = Pattern::EMPTY;
        for (i, target) in self.forward.iter().enumerate() {
            if bits & (1 << i) != 0 {
                result = result.with(*target);
            }
        }
        result
    }

    pub fn inverse(&self) -> Translator {
        let mut reverse = [Segment::A; SEGMENT_COUNT];
        for (scrambled, unscrambled) in Segment::all().zip(self.forward.iter()) {
            reverse[unscrambled.index()] = scrambled;
        }
        Translator { forward: reverse }
    }

    /// Applies `self`, then `next`.
    pub fn then(&self, next: &Translator) -> Translator {
        let mut forward = self.forward;
        for slot in forward.iter_mut() {
            *slot = next.unscramble(*slot);
        }
        Translator { forward }
    }
}

impl FromStr for Translator {
    type Err = TranslatorError;
    fn from_str(s: &str) -> Result<Translator, TranslatorError> {
        let segments: Vec<Segment> = s
            .chars()
            .map(Segment::try_from)
            .collect::<Result<Vec<Segment>, _>>()?;
        match <[Segment; SEGMENT_COUNT]>::try_from(segments) {
            Ok(images) => Translator::from_images(images),
            Err(_) => Err(TranslatorError::NotABijection(s.to_string())),
        }
    }
}

impl Display for Translator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for segment in self.forward.iter() {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[test]
fn test_candidates_are_distinct_bijections() {
    use std::collections::HashSet;
    let all = candidates();
    assert_eq!(all.len(), 5040);
    let distinct: HashSet<&Translator> = all.iter().collect();
    assert_eq!(distinct.len(), 5040);
    let identity = Translator::identity();
    for t in all {
        assert_eq!(t.then(&t.inverse()), identity);
        assert_eq!(t.inverse().then(t), identity);
        for segment in Segment::all() {
            assert_eq!(t.scramble(t.unscramble(segment)), segment);
        }
    }
    assert_eq!(all[0], identity);
}

#[test]
fn test_parse_translator() {
    let t: Translator = "cfgabde".parse().expect("valid translator");
    assert_eq!(t.unscramble(Segment::D), Segment::A);
    assert_eq!(t.scramble(Segment::A), Segment::D);
    assert_eq!(t.to_string(), "cfgabde");
    assert_eq!(
        "abcdefa".parse::<Translator>(),
        Err(TranslatorError::NotABijection("abcdefa".to_string()))
    );
    assert_eq!(
        "abc".parse::<Translator>(),
        Err(TranslatorError::NotABijection("abc".to_string()))
    );
    assert!(matches!(
        "abcdefz".parse::<Translator>(),
        Err(TranslatorError::Segment(_))
    ));
}

#[test]
fn test_apply() {
    let t: Translator = "cfgabde".parse().expect("valid translator");
    let p = |s: &str| s.parse::<Pattern>().expect("valid pattern");
    // "ab" is the scrambled digit 1.
    assert_eq!(t.apply(p("ab")), p("cf"));
    assert_eq!(t.apply(p("ba")), p("cf"));
    assert_eq!(t.apply(Pattern::ALL), Pattern::ALL);
    assert_eq!(t.apply(Pattern::EMPTY), Pattern::EMPTY);
    assert_eq!(t.inverse().apply(p("cf")), p("ab"));
}
