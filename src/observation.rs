use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::errors::{MalformedObservation, PatternError};
use crate::parse;
use crate::segment::Pattern;

pub const HYPOTHESIS_COUNT: usize = 10;
pub const OUTPUT_COUNT: usize = 4;

/// One line of puzzle input: every digit shown once (in no particular
/// order) followed by the four-digit readout, all through the same
/// unknown wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    hypotheses: [Pattern; HYPOTHESIS_COUNT],
    outputs: [Pattern; OUTPUT_COUNT],
}

impl Observation {
    pub fn new(hypotheses: &[Pattern], outputs: &[Pattern]) -> Result<Observation, MalformedObservation> {
        let hypothesis_array: [Pattern; HYPOTHESIS_COUNT] = hypotheses
            .try_into()
            .map_err(|_| MalformedObservation::HypothesisCount(hypotheses.len()))?;
        let output_array: [Pattern; OUTPUT_COUNT] = outputs
            .try_into()
            .map_err(|_| MalformedObservation::OutputCount(outputs.len()))?;
        if hypotheses.iter().chain(outputs.iter()).any(|p| p.is_empty()) {
            return Err(MalformedObservation::Pattern(PatternError::Empty));
        }
        for (i, pattern) in hypotheses.iter().enumerate() {
            if hypotheses[..i].contains(pattern) {
                return Err(MalformedObservation::DuplicateHypothesis(*pattern));
            }
        }
        Ok(Observation {
            hypotheses: hypothesis_array,
            outputs: output_array,
        })
    }

    pub fn hypotheses(&self) -> &[Pattern; HYPOTHESIS_COUNT] {
        &self.hypotheses
    }

    pub fn outputs(&self) -> &[Pattern; OUTPUT_COUNT] {
        &self.outputs
    }

    /// How many of the outputs are a 1, 4, 7 or 8, judging only by
    /// their length.
    pub fn unique_length_outputs(&self) -> usize {
        self.outputs.iter().filter(|p| p.has_unique_length()).count()
    }
}

impl FromStr for Observation {
    type Err = MalformedObservation;
    fn from_str(s: &str) -> Result<Observation, MalformedObservation> {
        parse::parse_observation(s)
    }
}

impl Display for Observation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for pattern in self.hypotheses.iter() {
            write!(f, "{} ", pattern)?;
        }
        f.write_str("|")?;
        for pattern in self.outputs.iter() {
            write!(f, " {}", pattern)?;
        }
        Ok(())
    }
}

#[cfg(test)]
fn patterns(s: &str) -> Vec<Pattern> {
    s.split_whitespace()
        .map(|p| p.parse().expect("valid pattern"))
        .collect()
}

#[test]
fn test_new_checks_counts() {
    let nine = patterns("be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd");
    let ten = patterns("be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb");
    let four = patterns("fdgacbe cefdb cefbgd gcbe");
    assert_eq!(
        Observation::new(&nine, &four),
        Err(MalformedObservation::HypothesisCount(9))
    );
    assert_eq!(
        Observation::new(&ten, &four[..3]),
        Err(MalformedObservation::OutputCount(3))
    );
    assert!(Observation::new(&ten, &four).is_ok());
}

#[test]
fn test_new_rejects_duplicates_and_empties() {
    let dup = patterns("be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd eb");
    let four = patterns("fdgacbe cefdb cefbgd gcbe");
    assert_eq!(
        Observation::new(&dup, &four),
        Err(MalformedObservation::DuplicateHypothesis(Pattern::from_letters("be")))
    );
    let ten = patterns("be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb");
    let with_empty = [four[0], four[1], four[2], Pattern::EMPTY];
    assert_eq!(
        Observation::new(&ten, &with_empty),
        Err(MalformedObservation::Pattern(PatternError::Empty))
    );
}

#[test]
fn test_display() {
    let line = "be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe";
    let obs: Observation = line.parse().expect("valid observation");
    assert_eq!(
        obs.to_string(),
        "be abcdefg bcdefg acdefg bceg cdefg abdefg bcdef abcdf bde | abcdefg bcdef bcdefg bceg"
    );
    assert_eq!(obs.unique_length_outputs(), 2);
}
