use thiserror::Error;

use crate::segment::Pattern;

/// Something wrong with a single pattern such as `"fdgacbe"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("empty pattern")]
    Empty,
    #[error("pattern '{0}' has more than 7 segments")]
    TooLong(String),
    #[error("'{0}' is not a segment (expected a-g)")]
    BadSegment(char),
    #[error("pattern '{pattern}' lists segment '{segment}' more than once")]
    RepeatedSegment { pattern: String, segment: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslatorError {
    #[error(transparent)]
    Segment(#[from] PatternError),
    #[error("'{0}' is not a permutation of abcdefg")]
    NotABijection(String),
}

/// An observation which can't be decoded because of its shape,
/// detected before any attempt to find the wiring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedObservation {
    #[error("expected two fields separated by '|': {0}")]
    Syntax(String),
    #[error("expected 10 hypothesis patterns, got {0}")]
    HypothesisCount(usize),
    #[error("expected 4 output patterns, got {0}")]
    OutputCount(usize),
    #[error("hypothesis pattern '{0}' appears more than once")]
    DuplicateHypothesis(Pattern),
    #[error("bad pattern: {0}")]
    Pattern(#[from] PatternError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed observation: {0}")]
    Malformed(#[from] MalformedObservation),
    #[error("no wiring is consistent with all of the hypothesis patterns in '{0}'")]
    NoConsistentTranslator(String),
    #[error("output pattern {position} ('{pattern}') unscrambles to '{image}', which is not a digit")]
    UndecodableOutput {
        position: usize,
        pattern: Pattern,
        image: Pattern,
    },
}

#[test]
fn test_error_messages() {
    assert_eq!(
        MalformedObservation::HypothesisCount(9).to_string(),
        "expected 10 hypothesis patterns, got 9"
    );
    assert_eq!(
        DecodeError::from(MalformedObservation::Pattern(PatternError::BadSegment('x'))).to_string(),
        "malformed observation: bad pattern: 'x' is not a segment (expected a-g)"
    );
}
