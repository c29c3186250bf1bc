//! Flag type definitions.
//!
//! This module defines the data model shared by the scanner and the
//! resolver: the caller-supplied [`FlagDefinition`] table entries and the
//! [`FlagOccurrence`]s produced from raw command-line tokens. The types are
//! designed for serialization with [`serde`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// How many numbers a flag accepts as its payload.
///
/// # Examples
///
/// ```
/// use flagscan_core::NumberAcceptance;
///
/// let acceptance = NumberAcceptance::default();
/// assert_eq!(acceptance, NumberAcceptance::None);
/// assert!(NumberAcceptance::Multiple.expects_numbers());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NumberAcceptance {
    /// Plain switch; any supplied numbers are ignored (the default).
    #[default]
    None,
    /// Exactly one number; extra numbers are dropped.
    Single,
    /// Any count of numbers.
    Multiple,
}

impl NumberAcceptance {
    /// Returns `true` unless the flag is a plain switch.
    pub fn expects_numbers(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// One entry of a flag definition table.
///
/// A definition pairs a single-character short name (`-h`) with a long name
/// (`--help`) and a [`NumberAcceptance`] policy. Short and long names are
/// expected to be unique across a table; see
/// [`validate_definitions`](crate::validate_definitions).
///
/// # Examples
///
/// ```
/// use flagscan_core::{FlagDefinition, FlagName, NumberAcceptance};
///
/// let help = FlagDefinition::new('h', "help", NumberAcceptance::Single);
/// assert!(help.matches(&FlagName::Short('h')));
/// assert!(help.matches(&FlagName::Long("help".into())));
/// assert!(!help.matches(&FlagName::Long("h".into())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagDefinition {
    /// Short form, without the leading dash (e.g. `'h'`)
    pub short_name: char,
    /// Long form, without the leading dashes (e.g. `"help"`)
    pub long_name: String,
    /// Numeric payload policy
    pub number_acceptance: NumberAcceptance,
}

impl FlagDefinition {
    /// Creates a definition.
    pub fn new(short_name: char, long_name: &str, number_acceptance: NumberAcceptance) -> Self {
        Self {
            short_name,
            long_name: long_name.to_string(),
            number_acceptance,
        }
    }

    /// Creates a plain switch that takes no numbers.
    pub fn switch(short_name: char, long_name: &str) -> Self {
        Self::new(short_name, long_name, NumberAcceptance::None)
    }

    /// Checks whether `name` refers to this definition.
    ///
    /// Short names only match the short form and long names only match the
    /// long form, so `--h` never resolves to `-h`.
    pub fn matches(&self, name: &FlagName) -> bool {
        match name {
            FlagName::Short(c) => *c == self.short_name,
            FlagName::Long(s) => *s == self.long_name,
        }
    }
}

impl fmt::Display for FlagDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}(-{})", self.long_name, self.short_name)
    }
}

/// Name of a flag as it appeared on the command line.
///
/// # Examples
///
/// ```
/// use flagscan_core::FlagName;
///
/// assert_eq!(FlagName::Short('q').to_string(), "-q");
/// assert_eq!(FlagName::Long("quiet".into()).to_string(), "--quiet");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagName {
    /// `-c`, one character of a (possibly bundled) short flag token
    Short(char),
    /// `--name`
    Long(String),
}

impl fmt::Display for FlagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short(c) => write!(f, "-{c}"),
            Self::Long(s) => write!(f, "--{s}"),
        }
    }
}

/// A single appearance of a flag in the input, with its numeric payload.
///
/// Occurrences are created by [`scan`](crate::scan) and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagOccurrence {
    /// Name the flag was written with
    pub name: FlagName,
    /// Numbers from the token that immediately followed the flag, if any
    pub numbers: Vec<i32>,
}

impl FlagOccurrence {
    /// Creates an occurrence carrying `numbers`.
    pub fn new(name: FlagName, numbers: Vec<i32>) -> Self {
        Self { name, numbers }
    }

    /// Creates an occurrence of a short flag with no numbers.
    pub fn short(c: char) -> Self {
        Self::new(FlagName::Short(c), Vec::new())
    }

    /// Creates an occurrence of a long flag with no numbers.
    pub fn long(name: &str) -> Self {
        Self::new(FlagName::Long(name.to_string()), Vec::new())
    }

    /// Attaches a numeric payload.
    pub fn with_numbers(mut self, numbers: Vec<i32>) -> Self {
        self.numbers = numbers;
        self
    }
}
