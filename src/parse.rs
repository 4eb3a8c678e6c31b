use nom::{
    bytes::complete::take_till1,
    character::complete::{char, multispace0, multispace1},
    combinator::all_consuming,
    multi::separated_list0,
    sequence::{delimited, separated_pair},
    IResult,
};

use crate::errors::{MalformedObservation, PatternError};
use crate::observation::Observation;
use crate::segment::Pattern;

fn token(input: &str) -> IResult<&str, &str> {
    take_till1(|ch: char| ch.is_whitespace() || ch == '|')(input)
}

fn token_list(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(multispace0, separated_list0(multispace1, token), multispace0)(input)
}

fn fields(input: &str) -> IResult<&str, (Vec<&str>, Vec<&str>)> {
    all_consuming(separated_pair(token_list, char('|'), token_list))(input)
}

fn parse_patterns(tokens: &[&str]) -> Result<Vec<Pattern>, PatternError> {
    tokens.iter().map(|token| token.parse::<Pattern>()).collect()
}

/// Parses a line such as `"be cfbegad ... edb | fdgacbe cefdb cefbgd gcbe"`.
pub fn parse_observation(line: &str) -> Result<Observation, MalformedObservation> {
    let (hypotheses, outputs) = match fields(line) {
        Ok((_, (hypotheses, outputs))) => (hypotheses, outputs),
        Err(_) => {
            return Err(MalformedObservation::Syntax(line.to_string()));
        }
    };
    let hypotheses = parse_patterns(&hypotheses)?;
    let outputs = parse_patterns(&outputs)?;
    Observation::new(&hypotheses, &outputs)
}

/// Parses every non-blank line of `input`.  Each result is paired
/// with the zero-based index of its line.
pub fn parse_lines(input: &str) -> Vec<(usize, Result<Observation, MalformedObservation>)> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index, parse_observation(line)))
        .collect()
}

#[test]
fn test_parse_observation() {
    let obs = parse_observation(crate::SMALL_EXAMPLE).expect("valid observation");
    assert_eq!(obs.hypotheses()[0], Pattern::ALL);
    assert_eq!(obs.hypotheses()[9], Pattern::from_letters("ab"));
    assert_eq!(obs.outputs()[0], Pattern::from_letters("bcdef"));
    assert_eq!(obs.outputs()[3], Pattern::from_letters("abcdf"));
}

#[test]
fn test_parse_tolerates_spacing() {
    let tidy = parse_observation(crate::SAMPLE[0]).expect("valid observation");
    let messy = parse_observation(
        "  be  cfbegad cbdgef\tfgaecd cgeb fdcge agebfd fecdb fabcd edb|fdgacbe cefdb cefbgd gcbe \r",
    )
    .expect("valid observation");
    assert_eq!(tidy, messy);
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        parse_observation("be cfbegad cbdgef fgaecd cgeb"),
        Err(MalformedObservation::Syntax(
            "be cfbegad cbdgef fgaecd cgeb".to_string()
        ))
    );
    assert!(matches!(
        parse_observation("a b | c | d"),
        Err(MalformedObservation::Syntax(_))
    ));
    assert_eq!(
        parse_observation("be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd | fdgacbe cefdb cefbgd gcbe"),
        Err(MalformedObservation::HypothesisCount(9))
    );
    assert_eq!(
        parse_observation("be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe gcbe"),
        Err(MalformedObservation::OutputCount(5))
    );
    assert_eq!(
        parse_observation("be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edx | fdgacbe cefdb cefbgd gcbe"),
        Err(MalformedObservation::Pattern(PatternError::BadSegment('x')))
    );
    assert_eq!(
        parse_observation("| "),
        Err(MalformedObservation::HypothesisCount(0))
    );
}

#[test]
fn test_parse_lines() {
    let input = format!("{}\n\n{}\nnonsense\n", crate::SAMPLE[0], crate::SAMPLE[1]);
    let parsed = parse_lines(&input);
    let indexes: Vec<usize> = parsed.iter().map(|(i, _)| *i).collect();
    assert_eq!(indexes, vec![0, 2, 3]);
    assert!(parsed[0].1.is_ok());
    assert!(parsed[1].1.is_ok());
    assert!(matches!(parsed[2].1, Err(MalformedObservation::Syntax(_))));
}
