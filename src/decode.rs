use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use rayon::prelude::*;
use tracing::{event, span, Level};

use crate::catalog;
use crate::deduce;
use crate::errors::DecodeError;
use crate::observation::Observation;
use crate::segment::Pattern;
use crate::translator::{self, Translator};

/// How to find the wiring of an observation.  All of these find the
/// same wiring for a well-formed observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Try each candidate in turn, stopping at the first which fits.
    #[default]
    Search,
    /// Try the candidates in parallel, but still accept the first
    /// which fits in enumeration order.
    SpeculativeSearch,
    /// Work out the wiring from how often each segment is used.
    Deduce,
}

impl FromStr for Strategy {
    type Err = String;
    fn from_str(s: &str) -> Result<Strategy, String> {
        match s {
            "search" => Ok(Strategy::Search),
            "speculative" => Ok(Strategy::SpeculativeSearch),
            "deduce" => Ok(Strategy::Deduce),
            _ => Err(format!(
                "unknown strategy '{}' (expected search, speculative or deduce)",
                s
            )),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Search => "search",
            Strategy::SpeculativeSearch => "speculative",
            Strategy::Deduce => "deduce",
        })
    }
}

/// True if `translator` turns every one of `hypotheses` into a real
/// digit.  When the hypotheses are distinct, this means they map onto
/// the ten digits exactly once each.
pub fn is_consistent(translator: &Translator, hypotheses: &[Pattern]) -> bool {
    hypotheses
        .iter()
        .all(|pattern| catalog::lookup(translator.apply(*pattern)).is_some())
}

/// Every candidate wiring consistent with `observation`.  For real
/// puzzle input there is exactly one.
pub fn consistent_translators(observation: &Observation) -> Vec<Translator> {
    translator::candidates()
        .iter()
        .filter(|t| is_consistent(t, observation.hypotheses()))
        .copied()
        .collect()
}

fn search(observation: &Observation) -> Option<Translator> {
    translator::candidates()
        .iter()
        .find(|t| is_consistent(t, observation.hypotheses()))
        .copied()
}

fn speculative_search(observation: &Observation) -> Option<Translator> {
    translator::candidates()
        .par_iter()
        .find_first(|t| is_consistent(t, observation.hypotheses()))
        .copied()
}

/// Finds the wiring of `observation`.  If more than one wiring fits,
/// the first in candidate order is chosen.
pub fn find_translator(observation: &Observation, strategy: Strategy) -> Result<Translator, DecodeError> {
    let found = match strategy {
        Strategy::Search => search(observation),
        Strategy::SpeculativeSearch => speculative_search(observation),
        Strategy::Deduce => deduce::deduce(observation),
    };
    found.ok_or_else(|| DecodeError::NoConsistentTranslator(observation.to_string()))
}

/// Reads the display: `outputs` are unscrambled by `translator` and
/// interpreted as the decimal digits of a number, most significant
/// first.
pub fn decode_outputs(translator: &Translator, outputs: &[Pattern]) -> Result<u32, DecodeError> {
    outputs
        .iter()
        .enumerate()
        .try_fold(0u32, |number, (position, pattern)| {
            let image = translator.apply(*pattern);
            match catalog::lookup(image) {
                Some(digit) => Ok(number * 10 + u32::from(digit)),
                None => Err(DecodeError::UndecodableOutput {
                    position,
                    pattern: *pattern,
                    image,
                }),
            }
        })
}

pub fn decode(observation: &Observation, strategy: Strategy) -> Result<u32, DecodeError> {
    let span = span!(Level::ERROR, "decode", %strategy, observation=%observation);
    let _enter = span.enter();
    let translator = find_translator(observation, strategy)?;
    event!(Level::DEBUG, "wiring is {}", translator);
    let value = decode_outputs(&translator, observation.outputs())?;
    event!(Level::DEBUG, "display reads {:04}", value);
    Ok(value)
}

/// Counts the outputs, across all observations, which are a 1, 4, 7
/// or 8.  No wiring is needed for this.
pub fn count_unique_lengths(observations: &[Observation]) -> usize {
    observations
        .iter()
        .map(Observation::unique_length_outputs)
        .sum()
}

#[cfg(test)]
fn sample_observations() -> Vec<Observation> {
    crate::SAMPLE
        .iter()
        .map(|line| line.parse().expect("valid sample"))
        .collect()
}

/// Builds an observation showing `digits` through the wiring
/// `translator` (i.e. whose solution is `translator`).
#[cfg(test)]
fn scrambled_observation(translator: &Translator, digits: [u8; 4]) -> Observation {
    let scramble = translator.inverse();
    let hypotheses: Vec<Pattern> = catalog::entries()
        .map(|(_, pattern)| scramble.apply(pattern))
        .collect();
    let outputs: Vec<Pattern> = digits
        .iter()
        .map(|d| scramble.apply(catalog::canonical(*d).expect("valid digit")))
        .collect();
    Observation::new(&hypotheses, &outputs).expect("well-formed observation")
}

#[test]
fn test_strategy_names() {
    for strategy in [Strategy::Search, Strategy::SpeculativeSearch, Strategy::Deduce] {
        assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
    }
    assert!("guess".parse::<Strategy>().is_err());
    assert_eq!(Strategy::default(), Strategy::Search);
}

#[test]
fn test_known_wiring_is_the_only_one() {
    let obs: Observation = crate::SMALL_EXAMPLE.parse().expect("valid observation");
    let wiring: Translator = crate::SMALL_EXAMPLE_WIRING.parse().expect("valid translator");
    let mut digits: Vec<u8> = obs
        .hypotheses()
        .iter()
        .filter_map(|p| catalog::lookup(wiring.apply(*p)))
        .collect();
    digits.sort_unstable();
    assert_eq!(digits, (0..10).collect::<Vec<u8>>());
    assert_eq!(consistent_translators(&obs), vec![wiring]);
}

#[test]
fn test_small_example() {
    let obs: Observation = crate::SMALL_EXAMPLE.parse().expect("valid observation");
    assert_eq!(decode(&obs, Strategy::Search), Ok(5353));
    assert_eq!(
        find_translator(&obs, Strategy::Search).map(|t| t.to_string()),
        Ok(crate::SMALL_EXAMPLE_WIRING.to_string())
    );
}

#[test]
fn test_first_sample_hypotheses_with_other_outputs() {
    let obs: Observation =
        "be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | edb cefdb eb gcbe"
            .parse()
            .expect("valid observation");
    assert_eq!(decode(&obs, Strategy::Search), Ok(7314));
}

#[test]
fn test_sample() {
    let observations = sample_observations();
    assert_eq!(count_unique_lengths(&observations), 26);
    let values: Vec<u32> = observations
        .iter()
        .map(|obs| decode(obs, Strategy::Search).expect("sample should decode"))
        .collect();
    assert_eq!(values, crate::SAMPLE_VALUES);
    assert_eq!(values.iter().sum::<u32>(), 61229);
}

#[test]
fn test_strategies_agree() {
    for obs in sample_observations() {
        let searched = find_translator(&obs, Strategy::Search);
        assert!(searched.is_ok());
        assert_eq!(find_translator(&obs, Strategy::SpeculativeSearch), searched);
        assert_eq!(find_translator(&obs, Strategy::Deduce), searched);
    }
}

#[test]
fn test_round_trip_keeps_leading_zeros() {
    let wiring = translator::candidates()[1234];
    let obs = scrambled_observation(&wiring, [0, 4, 0, 7]);
    assert_eq!(find_translator(&obs, Strategy::Search), Ok(wiring));
    assert_eq!(decode(&obs, Strategy::Search), Ok(407));
    assert_eq!(decode_outputs(&wiring, obs.outputs()), Ok(407));
    let obs = scrambled_observation(&wiring, [9, 8, 7, 6]);
    assert_eq!(decode(&obs, Strategy::SpeculativeSearch), Ok(9876));
}

#[test]
fn test_no_consistent_translator() {
    // The second pattern of the small example replaced by one which
    // no wiring can explain.
    let obs: Observation =
        "acedgfb abcde gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf"
            .parse()
            .expect("well-formed observation");
    for strategy in [Strategy::Search, Strategy::SpeculativeSearch, Strategy::Deduce] {
        assert!(matches!(
            decode(&obs, strategy),
            Err(DecodeError::NoConsistentTranslator(_))
        ));
    }
    assert!(consistent_translators(&obs).is_empty());
}

#[test]
fn test_undecodable_output() {
    let obs: Observation =
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb ad cdfeb cdbaf"
            .parse()
            .expect("well-formed observation");
    assert_eq!(
        decode(&obs, Strategy::Search),
        Err(DecodeError::UndecodableOutput {
            position: 1,
            pattern: Pattern::from_letters("ad"),
            image: Pattern::from_letters("ac"),
        })
    );
}

#[test]
fn test_counting_ignores_wiring() {
    let wiring = translator::candidates()[4000];
    let obs = scrambled_observation(&wiring, [1, 7, 4, 8]);
    assert_eq!(count_unique_lengths(&[obs.clone()]), 4);
    let other = scrambled_observation(&translator::candidates()[17], [1, 7, 4, 8]);
    assert_eq!(count_unique_lengths(&[other]), 4);
    let none = scrambled_observation(&wiring, [0, 2, 3, 5]);
    assert_eq!(count_unique_lengths(&[none.clone()]), 0);
    assert_eq!(count_unique_lengths(&[none.clone(), obs.clone()]), 4);
    assert_eq!(count_unique_lengths(&[obs, none]), 4);
}
