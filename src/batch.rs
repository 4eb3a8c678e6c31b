use rayon::prelude::*;
use tracing::{event, Level};

use crate::decode::{decode, Strategy};
use crate::errors::DecodeError;
use crate::observation::Observation;
use crate::parse::parse_observation;

/// The outcome of decoding many observations.  A failure in one
/// observation doesn't stop the others being decoded.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Index of each successfully decoded observation, with its value.
    pub values: Vec<(usize, u32)>,
    /// Index of each observation which could not be decoded, with the reason.
    pub failures: Vec<(usize, DecodeError)>,
}

impl BatchReport {
    fn from_results<I>(results: I) -> BatchReport
    where
        I: IntoIterator<Item = (usize, Result<u32, DecodeError>)>,
    {
        let mut report = BatchReport::default();
        for (index, result) in results {
            match result {
                Ok(value) => report.values.push((index, value)),
                Err(e) => {
                    event!(Level::WARN, "observation {}: {}", index, e);
                    report.failures.push((index, e));
                }
            }
        }
        report
    }

    pub fn sum(&self) -> u64 {
        self.values.iter().map(|(_, value)| u64::from(*value)).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Decodes every observation, in parallel.  Indexes in the report
/// are positions in `observations`.
pub fn decode_all(observations: &[Observation], strategy: Strategy) -> BatchReport {
    let results: Vec<(usize, Result<u32, DecodeError>)> = observations
        .par_iter()
        .enumerate()
        .map(|(index, observation)| (index, decode(observation, strategy)))
        .collect();
    BatchReport::from_results(results)
}

/// Parses and decodes every non-blank line, in parallel.  Indexes in
/// the report are positions in `lines`, and lines which don't parse
/// are reported as failures alongside those which don't decode.
pub fn decode_lines<S>(lines: &[S], strategy: Strategy) -> BatchReport
where
    S: AsRef<str> + Sync,
{
    let results: Vec<(usize, Result<u32, DecodeError>)> = lines
        .par_iter()
        .enumerate()
        .map(|(index, line)| {
            let text: &str = line.as_ref();
            (index, text)
        })
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| {
            let result = parse_observation(text)
                .map_err(DecodeError::from)
                .and_then(|observation| decode(&observation, strategy));
            (index, result)
        })
        .collect();
    BatchReport::from_results(results)
}

#[test]
fn test_decode_all() {
    let observations: Vec<Observation> = crate::SAMPLE
        .iter()
        .map(|line| line.parse().expect("valid sample"))
        .collect();
    let report = decode_all(&observations, Strategy::SpeculativeSearch);
    assert!(report.is_complete());
    assert_eq!(report.sum(), 61229);
    let expected: Vec<(usize, u32)> = crate::SAMPLE_VALUES.iter().copied().enumerate().collect();
    assert_eq!(report.values, expected);
}

#[test]
fn test_decode_lines_keeps_going() {
    use crate::errors::MalformedObservation;
    let lines = vec![
        crate::SAMPLE[0],
        "be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd | fdgacbe cefdb cefbgd gcbe",
        "",
        crate::SMALL_EXAMPLE,
        "acedgfb abcde gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf",
    ];
    let report = decode_lines(lines.as_slice(), Strategy::Search);
    assert_eq!(report.values, vec![(0, 8394), (3, 5353)]);
    assert_eq!(report.sum(), 8394 + 5353);
    assert!(!report.is_complete());
    let failed: Vec<usize> = report.failures.iter().map(|(i, _)| *i).collect();
    assert_eq!(failed, vec![1, 4]);
    assert_eq!(
        report.failures[0].1,
        DecodeError::Malformed(MalformedObservation::HypothesisCount(9))
    );
    assert!(matches!(
        report.failures[1].1,
        DecodeError::NoConsistentTranslator(_)
    ));
}
