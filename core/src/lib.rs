//! Flag scanning and resolution primitives.
//!
//! This crate turns a flat list of command-line tokens into a report of how
//! each flag resolved against a caller-supplied definition table:
//!
//! - [`FlagDefinition`] — a known flag with short/long names and a
//!   [`NumberAcceptance`] policy for its numeric payload.
//! - [`scan`] — splits raw tokens into [`FlagOccurrence`]s, unbundling
//!   `-xyz` groups and attaching comma-separated number lists.
//! - [`interpret`] — matches occurrences by [`FlagName`], suppresses repeated
//!   flags and renders a [`Report`].
//!
//! Nothing in the pipeline fails: malformed tokens become
//! [`ScanDiagnostic`]s, unknown flags become report lines, and non-numeric
//! payload segments convert to `0`.
//!
//! # Example
//!
//! ```
//! use flagscan_core::*;
//!
//! let table = vec![
//!     FlagDefinition::new('a', "args", NumberAcceptance::Multiple),
//!     FlagDefinition::switch('v', "version"),
//! ];
//! assert!(validate_definitions(&table).is_empty());
//!
//! let output = scan(&["-va", "1,2,3"]);
//! assert!(output.diagnostics.is_empty());
//!
//! let report = interpret(&output.occurrences, &table);
//! assert_eq!(
//!     report.lines(),
//!     vec![
//!         ">> Argument --version(-v)",
//!         ">> Argument --args(-a) with numbers: 1 2 3",
//!     ]
//! );
//! ```

mod resolve;
mod scan;
mod tokenize;
mod types;
mod validate;

pub use resolve::{
    DuplicatePolicy, Report, ReportLine, find_by_name, interpret, interpret_with_policy,
};
pub use scan::{EMPTY_SHORT, ScanDiagnostic, ScanOutput, scan};
pub use tokenize::{parse_number, parse_numbers, split};
pub use types::*;
pub use validate::{DefinitionError, validate_definitions};
