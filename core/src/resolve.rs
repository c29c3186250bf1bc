//! Resolution of scanned occurrences against a flag definition table.
//!
//! Every occurrence is looked up by name. Unknown names become
//! [`ReportLine::Unknown`], names matched more than once in the input are
//! suppressed according to the [`DuplicatePolicy`], and the rest become
//! [`ReportLine::Resolved`] lines describing how the numeric payload was
//! interpreted.
//!
//! # Examples
//!
//! ```
//! use flagscan_core::*;
//!
//! let table = vec![
//!     FlagDefinition::new('r', "repeat", NumberAcceptance::Single),
//!     FlagDefinition::switch('v', "version"),
//! ];
//! let occurrences = scan(&["-r", "1", "-q"]).occurrences;
//! let report = interpret(&occurrences, &table);
//!
//! assert_eq!(
//!     report.lines(),
//!     vec![
//!         ">> Argument --repeat(-r) with number: 1",
//!         ">> Unknown argument -q",
//!     ]
//! );
//! ```

use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{FlagDefinition, FlagName, FlagOccurrence, NumberAcceptance};

const LINE_PREFIX: &str = ">> ";

/// What to do with a flag that matched more than once in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Suppress every occurrence of a repeated flag (the default).
    #[default]
    DropAll,
    /// Report the first occurrence, suppress the later ones.
    KeepFirst,
}

/// One line of an interpretation report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// The name matched no definition.
    Unknown(FlagName),
    /// The name matched `definition` and carried `numbers`.
    Resolved {
        definition: FlagDefinition,
        numbers: Vec<i32>,
    },
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(f, "{LINE_PREFIX}Unknown argument {name}"),
            Self::Resolved {
                definition,
                numbers,
            } => {
                write!(f, "{LINE_PREFIX}Argument {definition}")?;
                write_payload(f, definition.number_acceptance, numbers)
            }
        }
    }
}

fn write_payload(
    f: &mut fmt::Formatter<'_>,
    acceptance: NumberAcceptance,
    numbers: &[i32],
) -> fmt::Result {
    let Some(&first) = numbers.first() else {
        if acceptance.expects_numbers() {
            write!(f, " expected numbers, but none were provided")?;
        }
        return Ok(());
    };

    match acceptance {
        NumberAcceptance::None => write!(f, " doesn't expect numbers, so they were ignored"),
        NumberAcceptance::Single if numbers.len() > 1 => write!(
            f,
            " expects a single number, so only it is accepted: {first}"
        ),
        NumberAcceptance::Single => write!(f, " with number: {first}"),
        NumberAcceptance::Multiple => {
            let joined = numbers
                .iter()
                .map(i32::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, " with numbers: {joined}")
        }
    }
}

/// Ordered report produced by [`interpret`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Lines in occurrence order
    pub entries: Vec<ReportLine>,
}

impl Report {
    /// Renders every entry to its text form.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Writes one line per entry.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(out, "{entry}")?;
        }
        out.flush()
    }

    /// Returns `true` when no occurrence produced a line.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Finds the index of the first definition `name` refers to.
///
/// # Examples
///
/// ```
/// use flagscan_core::{find_by_name, FlagDefinition, FlagName};
///
/// let table = vec![FlagDefinition::switch('v', "version")];
/// assert_eq!(find_by_name(&FlagName::Short('v'), &table), Some(0));
/// assert_eq!(find_by_name(&FlagName::Long("verbose".into()), &table), None);
/// ```
pub fn find_by_name(name: &FlagName, definitions: &[FlagDefinition]) -> Option<usize> {
    definitions.iter().position(|def| def.matches(name))
}

/// Interprets occurrences with [`DuplicatePolicy::DropAll`].
pub fn interpret(occurrences: &[FlagOccurrence], definitions: &[FlagDefinition]) -> Report {
    interpret_with_policy(occurrences, definitions, DuplicatePolicy::default())
}

/// Interprets occurrences against `definitions`.
///
/// A definition matched by more than one occurrence, under any mix of short
/// and long names, counts as repeated.
pub fn interpret_with_policy(
    occurrences: &[FlagOccurrence],
    definitions: &[FlagDefinition],
    policy: DuplicatePolicy,
) -> Report {
    let matched: Vec<Option<usize>> = occurrences
        .iter()
        .map(|occ| find_by_name(&occ.name, definitions))
        .collect();

    let mut counts: HashMap<usize, usize> = HashMap::new();
    for index in matched.iter().flatten() {
        *counts.entry(*index).or_default() += 1;
    }

    let mut reported: Vec<usize> = Vec::new();
    let mut report = Report::default();

    for (occ, index) in occurrences.iter().zip(&matched) {
        let Some(index) = *index else {
            report.entries.push(ReportLine::Unknown(occ.name.clone()));
            continue;
        };

        if counts[&index] > 1 {
            let keep = policy == DuplicatePolicy::KeepFirst && !reported.contains(&index);
            if !keep {
                debug!(flag = %occ.name, "suppressing repeated flag");
                continue;
            }
        }

        reported.push(index);
        report.entries.push(ReportLine::Resolved {
            definition: definitions[index].clone(),
            numbers: occ.numbers.clone(),
        });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<FlagDefinition> {
        vec![
            FlagDefinition::new('h', "help", NumberAcceptance::Single),
            FlagDefinition::switch('v', "version"),
            FlagDefinition::new('a', "args", NumberAcceptance::Multiple),
            FlagDefinition::new('r', "repeat", NumberAcceptance::Single),
        ]
    }

    fn render(occurrences: &[FlagOccurrence]) -> Vec<String> {
        interpret(occurrences, &table()).lines()
    }

    #[test]
    fn test_find_by_name_distinguishes_variants() {
        let defs = table();
        assert_eq!(find_by_name(&FlagName::Short('a'), &defs), Some(2));
        assert_eq!(find_by_name(&FlagName::Long("repeat".into()), &defs), Some(3));
        assert_eq!(find_by_name(&FlagName::Long("a".into()), &defs), None);
        assert_eq!(find_by_name(&FlagName::Short('x'), &[]), None);
    }

    #[test]
    fn test_switch_without_numbers() {
        assert_eq!(
            render(&[FlagOccurrence::short('v')]),
            vec![">> Argument --version(-v)"]
        );
    }

    #[test]
    fn test_switch_ignores_numbers() {
        assert_eq!(
            render(&[FlagOccurrence::long("version").with_numbers(vec![3])]),
            vec![">> Argument --version(-v) doesn't expect numbers, so they were ignored"]
        );
    }

    #[test]
    fn test_single_number() {
        assert_eq!(
            render(&[FlagOccurrence::short('r').with_numbers(vec![1])]),
            vec![">> Argument --repeat(-r) with number: 1"]
        );
    }

    #[test]
    fn test_single_takes_first_of_many() {
        assert_eq!(
            render(&[FlagOccurrence::short('h').with_numbers(vec![9, 8])]),
            vec![">> Argument --help(-h) expects a single number, so only it is accepted: 9"]
        );
    }

    #[test]
    fn test_multiple_lists_all_in_order() {
        assert_eq!(
            render(&[FlagOccurrence::long("args").with_numbers(vec![1, 2, 3])]),
            vec![">> Argument --args(-a) with numbers: 1 2 3"]
        );
    }

    #[test]
    fn test_missing_numbers() {
        assert_eq!(
            render(&[FlagOccurrence::short('a'), FlagOccurrence::short('h')]),
            vec![
                ">> Argument --args(-a) expected numbers, but none were provided",
                ">> Argument --help(-h) expected numbers, but none were provided",
            ]
        );
    }

    #[test]
    fn test_unknown_short_and_long() {
        assert_eq!(
            render(&[FlagOccurrence::short('q'), FlagOccurrence::long("quiet")]),
            vec![">> Unknown argument -q", ">> Unknown argument --quiet"]
        );
    }

    #[test]
    fn test_duplicates_are_all_dropped() {
        let occurrences = vec![
            FlagOccurrence::short('r').with_numbers(vec![1]),
            FlagOccurrence::short('v'),
            FlagOccurrence::long("repeat").with_numbers(vec![2]),
            FlagOccurrence::short('r'),
        ];
        assert_eq!(render(&occurrences), vec![">> Argument --version(-v)"]);
    }

    #[test]
    fn test_unknown_duplicates_are_each_reported() {
        let occurrences = vec![FlagOccurrence::short('q'), FlagOccurrence::short('q')];
        assert_eq!(render(&occurrences).len(), 2);
    }

    #[test]
    fn test_keep_first_policy() {
        let occurrences = vec![
            FlagOccurrence::short('r').with_numbers(vec![1]),
            FlagOccurrence::short('r').with_numbers(vec![2]),
            FlagOccurrence::long("repeat"),
        ];
        let report = interpret_with_policy(&occurrences, &table(), DuplicatePolicy::KeepFirst);
        assert_eq!(
            report.lines(),
            vec![">> Argument --repeat(-r) with number: 1"]
        );
    }

    #[test]
    fn test_write_to_emits_lines() {
        let report = interpret(&[FlagOccurrence::short('v')], &table());
        let mut buf = Vec::new();
        report.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), ">> Argument --version(-v)\n");
    }

    #[test]
    fn test_bare_dash_is_unknown() {
        let occurrences = vec![FlagOccurrence::short(crate::EMPTY_SHORT).with_numbers(vec![5])];
        assert_eq!(render(&occurrences), vec![">> Unknown argument -\0"]);
    }

    #[test]
    fn test_empty_input_gives_empty_report() {
        assert!(interpret(&[], &table()).is_empty());
    }
}
