//! Working out the wiring directly, instead of searching for it.
//!
//! Across the ten digits, each true segment is lit a characteristic
//! number of times:
//!
//! | segment | used by             | count |
//! | ------- | ------------------- | ----- |
//! | a       | 0 2 3 5 6 7 8 9     | 8     |
//! | b       | 0 4 5 6 8 9         | 6     |
//! | c       | 0 1 2 3 4 7 8 9     | 8     |
//! | d       | 2 3 4 5 6 8 9       | 7     |
//! | e       | 0 2 6 8             | 4     |
//! | f       | 0 1 3 4 5 6 7 8 9   | 9     |
//! | g       | 0 2 3 5 6 8 9       | 7     |
//!
//! So counting how often each scrambled segment appears among the
//! hypothesis patterns immediately identifies b, e and f.
//!
//! Of the two segments used 8 times, c is part of the 2-segment digit
//! (1) and a is not.  Of the two used 7 times, d is part of the
//! 4-segment digit (4) and g is not.

use tracing::{event, Level};

use crate::decode::is_consistent;
use crate::observation::Observation;
use crate::segment::{Segment, SEGMENT_COUNT};
use crate::translator::Translator;

pub fn deduce(observation: &Observation) -> Option<Translator> {
    let hypotheses = observation.hypotheses();
    let one = match hypotheses.iter().find(|p| p.len() == 2) {
        Some(p) => *p,
        None => {
            event!(Level::TRACE, "deduce: no 2-segment hypothesis");
            return None;
        }
    };
    let four = match hypotheses.iter().find(|p| p.len() == 4) {
        Some(p) => *p,
        None => {
            event!(Level::TRACE, "deduce: no 4-segment hypothesis");
            return None;
        }
    };

    let mut images = [Segment::A; SEGMENT_COUNT];
    for scrambled in Segment::all() {
        let uses = hypotheses.iter().filter(|p| p.contains(scrambled)).count();
        images[scrambled.index()] = match uses {
            4 => Segment::E,
            6 => Segment::B,
            9 => Segment::F,
            8 if one.contains(scrambled) => Segment::C,
            8 => Segment::A,
            7 if four.contains(scrambled) => Segment::D,
            7 => Segment::G,
            n => {
                event!(
                    Level::TRACE,
                    "deduce: scrambled segment {} is used {} times, which fits no true segment",
                    scrambled,
                    n
                );
                return None;
            }
        };
    }

    let translator = match Translator::from_images(images) {
        Ok(t) => t,
        Err(e) => {
            event!(Level::TRACE, "deduce: {}", e);
            return None;
        }
    };
    if is_consistent(&translator, hypotheses) {
        Some(translator)
    } else {
        event!(
            Level::TRACE,
            "deduce: wiring {} does not explain every hypothesis",
            translator
        );
        None
    }
}

#[test]
fn test_segment_usage_table() {
    use crate::catalog;
    let expected: [usize; SEGMENT_COUNT] = [8, 6, 8, 7, 4, 9, 7];
    for segment in Segment::all() {
        let uses = catalog::entries()
            .filter(|(_, pattern)| pattern.contains(segment))
            .count();
        assert_eq!(uses, expected[segment.index()], "segment {}", segment);
    }
}

#[test]
fn test_deduce_small_example() {
    let obs: Observation = crate::SMALL_EXAMPLE.parse().expect("valid observation");
    assert_eq!(
        deduce(&obs).map(|t| t.to_string()),
        Some(crate::SMALL_EXAMPLE_WIRING.to_string())
    );
}

#[test]
fn test_deduce_every_wiring() {
    use crate::catalog;
    use crate::segment::Pattern;
    use crate::translator::candidates;
    for wiring in candidates().iter().step_by(37) {
        let scramble = wiring.inverse();
        let hypotheses: Vec<Pattern> = catalog::entries()
            .map(|(_, pattern)| scramble.apply(pattern))
            .collect();
        let outputs = &hypotheses[..4];
        let obs = Observation::new(&hypotheses, outputs).expect("well-formed observation");
        assert_eq!(deduce(&obs), Some(*wiring));
    }
}
