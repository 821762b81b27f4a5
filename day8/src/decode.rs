use std::{collections::BTreeSet, fmt::Display, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(crate) enum DecodeError {
    #[error("malformed entry: {0}")]
    MalformedEntry(String),

    #[error("resolving digit {digit} matched {matched} candidate patterns instead of exactly one")]
    AmbiguousResolution { digit: u8, matched: usize },

    #[error("codeword '{0}' does not match any training pattern")]
    UnknownCodeword(String),
}

/// An unordered, duplicate-free set of lit segment letters 'a'..='g'.
///
/// The letter-to-wire assignment is scrambled per entry, but set containment
/// between patterns is unaffected by any relabeling, which is what the
/// resolution schedule relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Pattern {
    letters: BTreeSet<char>,
}

impl Pattern {
    pub(crate) fn len(&self) -> usize {
        self.letters.len()
    }

    fn is_superset_of(&self, other: &Pattern) -> bool {
        self.letters.is_superset(&other.letters)
    }

    fn is_subset_of(&self, other: &Pattern) -> bool {
        self.letters.is_subset(&other.letters)
    }
}

impl FromStr for Pattern {
    type Err = DecodeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut letters = BTreeSet::new();
        for c in token.chars() {
            let c = c.to_ascii_lowercase();
            if !('a'..='g').contains(&c) {
                return Err(DecodeError::MalformedEntry(format!(
                    "letter '{}' in pattern '{}' is outside the segment alphabet",
                    c, token,
                )));
            }
            if !letters.insert(c) {
                return Err(DecodeError::MalformedEntry(format!(
                    "duplicate letter '{}' in pattern '{}'",
                    c, token,
                )));
            }
        }
        if letters.is_empty() {
            return Err(DecodeError::MalformedEntry("empty pattern token".into()));
        }

        Ok(Self { letters })
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.letters {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// One puzzle record: ten training patterns covering digits 0-9 exactly once,
/// followed by the four codeword patterns to decode. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) training: Vec<Pattern>,
    pub(crate) codewords: Vec<Pattern>,
}

impl FromStr for Entry {
    type Err = DecodeError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (training, codewords) = line.split_once('|').ok_or_else(|| {
            DecodeError::MalformedEntry(format!("no '|' separator in line '{}'", line))
        })?;

        let training: Vec<Pattern> = training
            .split_ascii_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()?;
        let codewords: Vec<Pattern> = codewords
            .split_ascii_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()?;

        if training.len() != 10 {
            return Err(DecodeError::MalformedEntry(format!(
                "expected 10 training patterns, got {}",
                training.len(),
            )));
        }
        if codewords.len() != 4 {
            return Err(DecodeError::MalformedEntry(format!(
                "expected 4 codewords, got {}",
                codewords.len(),
            )));
        }

        Ok(Self {
            training,
            codewords,
        })
    }
}

/// Output of the length-based classification pass: the four digits whose
/// segment counts are unique, plus the still-unresolved candidate groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Classification<'a> {
    one: &'a Pattern,
    seven: &'a Pattern,
    four: &'a Pattern,
    eight: &'a Pattern,
    five_segment: Vec<&'a Pattern>,
    six_segment: Vec<&'a Pattern>,
}

/// Partitions the ten training patterns by length. Only one training pattern
/// may have length 2, 3, 4, or 7 (digits 1, 7, 4, 8); lengths 5 and 6 must
/// have three candidates each, or the entry's length multiset is wrong.
pub(crate) fn classify(training: &[Pattern]) -> Result<Classification<'_>, DecodeError> {
    if training.len() != 10 {
        return Err(DecodeError::MalformedEntry(format!(
            "expected 10 training patterns, got {}",
            training.len(),
        )));
    }

    let unique_length = |length: usize| {
        training
            .iter()
            .filter(|p| p.len() == length)
            .exactly_one()
            .map_err(|candidates| {
                DecodeError::MalformedEntry(format!(
                    "expected exactly 1 training pattern of length {}, got {}",
                    length,
                    candidates.count(),
                ))
            })
    };
    let length_group = |length: usize| {
        let group: Vec<&Pattern> = training.iter().filter(|p| p.len() == length).collect();
        if group.len() != 3 {
            Err(DecodeError::MalformedEntry(format!(
                "expected exactly 3 training patterns of length {}, got {}",
                length,
                group.len(),
            )))
        } else {
            Ok(group)
        }
    };

    Ok(Classification {
        one: unique_length(2)?,
        seven: unique_length(3)?,
        four: unique_length(4)?,
        eight: unique_length(7)?,
        five_segment: length_group(5)?,
        six_segment: length_group(6)?,
    })
}

/// The completed digit-to-pattern bijection for a single entry.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DigitMap<'a> {
    patterns: [&'a Pattern; 10],
}

impl<'a> DigitMap<'a> {
    #[allow(dead_code)]
    pub(crate) fn pattern(&self, digit: u8) -> &'a Pattern {
        self.patterns[digit as usize]
    }

    pub(crate) fn digit_for(&self, codeword: &Pattern) -> Option<u8> {
        self.patterns
            .iter()
            .position(|p| *p == codeword)
            .map(|digit| digit as u8)
    }
}

#[derive(Debug, Default)]
struct DigitMapBuilder<'a> {
    resolved: [Option<&'a Pattern>; 10],
}

impl<'a> DigitMapBuilder<'a> {
    fn assign(mut self, digit: u8, pattern: &'a Pattern) -> Self {
        let slot = &mut self.resolved[digit as usize];
        assert!(slot.is_none(), "digit {} resolved twice", digit);
        *slot = Some(pattern);
        self
    }

    /// Validates that all ten digits were resolved to ten distinct patterns
    /// before the mapping is frozen.
    fn freeze(self) -> Result<DigitMap<'a>, DecodeError> {
        let mut patterns = [None; 10];
        for (digit, slot) in self.resolved.iter().enumerate() {
            match slot {
                Some(pattern) => patterns[digit] = Some(*pattern),
                None => {
                    return Err(DecodeError::AmbiguousResolution {
                        digit: digit as u8,
                        matched: 0,
                    })
                }
            }
        }
        let patterns = patterns.map(|p| p.unwrap());

        let distinct: BTreeSet<&Pattern> = patterns.iter().copied().collect();
        if distinct.len() != patterns.len() {
            return Err(DecodeError::MalformedEntry(
                "training patterns are not pairwise distinct".into(),
            ));
        }

        Ok(DigitMap { patterns })
    }
}

fn pick<'a, I>(digit: u8, candidates: I, predicate: impl Fn(&Pattern) -> bool) -> Result<&'a Pattern, DecodeError>
where
    I: IntoIterator<Item = &'a Pattern>,
{
    candidates
        .into_iter()
        .filter(|p| predicate(p))
        .exactly_one()
        .map_err(|candidates| DecodeError::AmbiguousResolution {
            digit,
            matched: candidates.count(),
        })
}

/// Resolves the six remaining patterns against the already-classified digits.
///
/// The step order matters: each step narrows its candidate group to the
/// patterns not claimed by an earlier step, and must be left with exactly
/// one match. Containment between letter sets is preserved under any
/// relabeling of the wires, so no knowledge of the actual permutation
/// is needed.
pub(crate) fn resolve<'a>(classified: &Classification<'a>) -> Result<DigitMap<'a>, DecodeError> {
    let five_segment = classified.five_segment.iter().copied();
    let six_segment = classified.six_segment.iter().copied();

    // 3 is the only 5-segment digit containing both of 1's segments.
    let three = pick(3, five_segment.clone(), |p| p.is_superset_of(classified.one))?;

    // 9 is the only 6-segment digit containing all of 4's segments.
    let nine = pick(9, six_segment.clone(), |p| p.is_superset_of(classified.four))?;

    // Of the remaining 6-segment digits, only 0 contains all of 7's segments.
    let zero = pick(
        0,
        six_segment.clone().filter(|p| *p != nine),
        |p| p.is_superset_of(classified.seven),
    )?;

    // 6 is the last 6-segment digit standing.
    let six = pick(6, six_segment.filter(|p| *p != nine && *p != zero), |_| true)?;

    // Of the remaining 5-segment digits, only 5 fits entirely inside 9.
    let five = pick(
        5,
        five_segment.clone().filter(|p| *p != three),
        |p| p.is_subset_of(nine),
    )?;

    // 2 is the last 5-segment digit standing.
    let two = pick(2, five_segment.filter(|p| *p != three && *p != five), |_| true)?;

    DigitMapBuilder::default()
        .assign(0, zero)
        .assign(1, classified.one)
        .assign(2, two)
        .assign(3, three)
        .assign(4, classified.four)
        .assign(5, five)
        .assign(6, six)
        .assign(7, classified.seven)
        .assign(8, classified.eight)
        .assign(9, nine)
        .freeze()
}

/// Maps each codeword to its digit by set equality and folds the digits
/// most-significant-first into a base-10 value.
pub(crate) fn decode_codewords(map: &DigitMap<'_>, codewords: &[Pattern]) -> Result<u64, DecodeError> {
    codewords.iter().try_fold(0u64, |acc, codeword| {
        let digit = map
            .digit_for(codeword)
            .ok_or_else(|| DecodeError::UnknownCodeword(codeword.to_string()))?;
        Ok((acc * 10) + u64::from(digit))
    })
}

/// The full per-entry pipeline: classify, resolve, decode.
pub(crate) fn decode_entry(entry: &Entry) -> Result<u64, DecodeError> {
    let classified = classify(&entry.training)?;
    let map = resolve(&classified)?;
    decode_codewords(&map, &entry.codewords)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{classify, decode_codewords, decode_entry, resolve, DecodeError, Entry, Pattern};

    const WORKED_EXAMPLE: &str =
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf";

    fn pattern(token: &str) -> Pattern {
        token.parse().unwrap()
    }

    #[test]
    fn classification_resolves_unique_lengths() {
        let entry: Entry = WORKED_EXAMPLE.parse().unwrap();
        let map = resolve(&classify(&entry.training).unwrap()).unwrap();

        assert_eq!(*map.pattern(1), pattern("ab"));
        assert_eq!(*map.pattern(7), pattern("dab"));
        assert_eq!(*map.pattern(4), pattern("eafb"));
        assert_eq!(*map.pattern(8), pattern("acedgfb"));
    }

    #[test]
    fn worked_example_decodes() {
        let entry: Entry = WORKED_EXAMPLE.parse().unwrap();
        assert_eq!(decode_entry(&entry), Ok(5353));
    }

    #[test]
    fn resolved_map_is_a_bijection() {
        let entry: Entry = WORKED_EXAMPLE.parse().unwrap();
        let map = resolve(&classify(&entry.training).unwrap()).unwrap();

        let mapped: BTreeSet<&Pattern> = (0..10).map(|digit| map.pattern(digit)).collect();
        let training: BTreeSet<&Pattern> = entry.training.iter().collect();
        assert_eq!(mapped.len(), 10);
        assert_eq!(mapped, training);
    }

    #[test]
    fn classification_is_deterministic() {
        let entry: Entry = WORKED_EXAMPLE.parse().unwrap();
        let first = classify(&entry.training).unwrap();
        let second = classify(&entry.training).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn decoding_is_invariant_under_relabeling() {
        // Rotate the whole alphabet by one: a->b, b->c, ..., g->a.
        let relabeled: String = WORKED_EXAMPLE
            .chars()
            .map(|c| match c {
                'a'..='f' => (c as u8 + 1) as char,
                'g' => 'a',
                other => other,
            })
            .collect();

        let original: Entry = WORKED_EXAMPLE.parse().unwrap();
        let relabeled: Entry = relabeled.parse().unwrap();
        assert_eq!(decode_entry(&original), decode_entry(&relabeled));
    }

    #[test]
    fn duplicate_unique_length_is_malformed() {
        // Two patterns of length 2 cannot both be the digit 1.
        let line = "ab fg gcdfa fbcad dab cefabd cdfgeb eafb cagedb acedgfb | ab ab ab ab";
        let entry: Entry = line.parse().unwrap();
        assert!(matches!(
            classify(&entry.training),
            Err(DecodeError::MalformedEntry(_))
        ));
    }

    #[test]
    fn wrong_length_multiset_is_malformed() {
        // Length 4 appears twice, length 5 only twice.
        let line = "acedgfb cdfbe gcdf fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf";
        let entry: Entry = line.parse().unwrap();
        assert!(matches!(
            classify(&entry.training),
            Err(DecodeError::MalformedEntry(_))
        ));
    }

    #[test]
    fn ambiguous_resolution_is_rejected() {
        // The length multiset is valid, but two 5-segment patterns contain
        // both of 1's segments, so the step resolving digit 3 has no unique
        // match.
        let line = "ab dab eafb abcdefg fbcad fbcad cdfbe cefabd cdfgeb cagedb | ab dab eafb ab";
        let entry: Entry = line.parse().unwrap();
        let classified = classify(&entry.training).unwrap();

        assert_eq!(
            resolve(&classified),
            Err(DecodeError::AmbiguousResolution {
                digit: 3,
                matched: 2,
            }),
        );
    }

    #[test]
    fn unmatched_codeword_is_rejected() {
        let entry: Entry = WORKED_EXAMPLE.parse().unwrap();
        let map = resolve(&classify(&entry.training).unwrap()).unwrap();

        let codewords = vec![pattern("gfe")];
        assert_eq!(
            decode_codewords(&map, &codewords),
            Err(DecodeError::UnknownCodeword("efg".to_string())),
        );
    }

    #[test]
    fn letters_outside_the_alphabet_are_rejected() {
        assert!(matches!(
            "zzz".parse::<Pattern>(),
            Err(DecodeError::MalformedEntry(_))
        ));
        assert!(matches!(
            "aab".parse::<Pattern>(),
            Err(DecodeError::MalformedEntry(_))
        ));
    }

    #[test]
    fn entry_requires_ten_training_and_four_codeword_patterns() {
        assert!(matches!(
            "ab dab | ab".parse::<Entry>(),
            Err(DecodeError::MalformedEntry(_))
        ));
        assert!(matches!(
            "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb"
                .parse::<Entry>(),
            Err(DecodeError::MalformedEntry(_))
        ));
    }

    #[test]
    fn pattern_equality_ignores_letter_order() {
        assert_eq!(pattern("abc"), pattern("cba"));
        assert_eq!(pattern("DAB"), pattern("abd"));
    }
}
