//! Argument scanning: raw tokens to [`FlagOccurrence`]s.
//!
//! The scanner walks the token list by index. Each flag token produces one
//! occurrence per flag it names (`-hv` names two), and the token right after
//! a flag is consumed as that flag's numeric payload when it does not itself
//! start with `-`. Tokens that are neither flags nor payloads are reported as
//! [`ScanDiagnostic`]s and skipped.
//!
//! # Examples
//!
//! ```
//! use flagscan_core::scan;
//!
//! let output = scan(&["-hv", "--args", "1,2", "stray"]);
//! let names: Vec<String> = output.occurrences.iter().map(|o| o.name.to_string()).collect();
//! assert_eq!(names, vec!["-h", "-v", "--args"]);
//! assert_eq!(output.occurrences[2].numbers, vec![1, 2]);
//! assert_eq!(output.diagnostics.len(), 1);
//! ```

use thiserror::Error;
use tracing::debug;

use crate::tokenize::parse_numbers;
use crate::types::{FlagName, FlagOccurrence};

const SHORT_PREFIX: char = '-';
const LONG_PREFIX: &str = "--";

/// Name given to the flag of a bare `-` token.
pub const EMPTY_SHORT: char = '\0';

/// Recoverable problems found while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanDiagnostic {
    /// A token that is neither a flag nor the payload of one.
    #[error("Bad arguments format")]
    BadFormat {
        /// Index of the token in the input
        position: usize,
        /// The offending token
        token: String,
    },
}

/// Result of [`scan`]: occurrences and diagnostics, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    /// Flag occurrences, one per named flag
    pub occurrences: Vec<FlagOccurrence>,
    /// Tokens that were skipped
    pub diagnostics: Vec<ScanDiagnostic>,
}

/// Scans raw command-line tokens (program name excluded).
///
/// Never fails; malformed tokens end up in [`ScanOutput::diagnostics`].
pub fn scan<S: AsRef<str>>(tokens: &[S]) -> ScanOutput {
    let mut output = ScanOutput::default();
    let mut pos = 0;

    while pos < tokens.len() {
        let token = tokens[pos].as_ref();

        let Some(name) = flag_name(token, &mut output.occurrences) else {
            debug!(position = pos, token, "skipping malformed token");
            output.diagnostics.push(ScanDiagnostic::BadFormat {
                position: pos,
                token: token.to_string(),
            });
            pos += 1;
            continue;
        };

        let numbers = match tokens.get(pos + 1).map(|next| next.as_ref()) {
            Some(next) if !is_flag(next) => {
                pos += 1;
                parse_numbers(next)
            }
            _ => Vec::new(),
        };

        output.occurrences.push(FlagOccurrence::new(name, numbers));
        pos += 1;
    }

    output
}

fn is_flag(token: &str) -> bool {
    token.starts_with(SHORT_PREFIX)
}

/// Determines the name of the occurrence that may take a payload.
///
/// Non-final characters of a bundled short group are pushed to `out`
/// directly since they can never receive numbers. Returns `None` for tokens
/// that do not start with `-`.
fn flag_name(token: &str, out: &mut Vec<FlagOccurrence>) -> Option<FlagName> {
    if let Some(long) = token.strip_prefix(LONG_PREFIX) {
        return Some(FlagName::Long(long.to_string()));
    }

    let bundle = token.strip_prefix(SHORT_PREFIX)?;
    let mut chars = bundle.chars().peekable();
    while let Some(c) = chars.next() {
        if chars.peek().is_none() {
            return Some(FlagName::Short(c));
        }
        out.push(FlagOccurrence::short(c));
    }

    // A bare "-" is an empty short group; it still takes a payload.
    Some(FlagName::Short(EMPTY_SHORT))
}
