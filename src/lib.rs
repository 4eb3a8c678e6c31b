//! Decoding of scrambled seven-segment displays.
//!
//! Each observation shows all ten digits once, plus a four-digit
//! readout, with the wires between the display driver and the
//! segments connected in some unknown order.  We recover the wiring
//! by trying every permutation of the seven segments until one of
//! them turns all ten observed digits into real digits, and then use
//! it to read the display.

pub mod batch;
pub mod catalog;
pub mod decode;
pub mod deduce;
pub mod errors;
pub mod observation;
pub mod parse;
pub mod segment;
pub mod translator;

pub use batch::{decode_all, decode_lines, BatchReport};
pub use decode::{count_unique_lengths, decode, find_translator, Strategy};
pub use errors::{DecodeError, MalformedObservation, PatternError, TranslatorError};
pub use observation::Observation;
pub use segment::{Pattern, Segment};
pub use translator::Translator;

#[cfg(test)]
pub(crate) const SAMPLE: &[&str] = &[
    "be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe",
    "edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc",
    "fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg",
    "fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb",
    "aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea",
    "fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb",
    "dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe",
    "bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef",
    "egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb",
    "gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce",
];

/// The decoded values of the lines of `SAMPLE`, in order.
#[cfg(test)]
pub(crate) const SAMPLE_VALUES: &[u32] = &[
    8394, 9781, 1197, 9361, 4873, 8418, 4548, 1625, 8717, 4315,
];

/// The single-line example, whose wiring is known.
#[cfg(test)]
pub(crate) const SMALL_EXAMPLE: &str =
    "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf";

/// Images of a..g under the wiring of `SMALL_EXAMPLE`.
#[cfg(test)]
pub(crate) const SMALL_EXAMPLE_WIRING: &str = "cfgabde";
