//! Flag definition table validation.
//!
//! The scanner and resolver trust the table they are given: a repeated short
//! or long name simply makes the later definition unreachable. Callers that
//! build tables dynamically can use [`validate_definitions`] to catch such
//! mistakes up front.
//!
//! # Examples
//!
//! ```
//! use flagscan_core::*;
//!
//! let table = vec![
//!     FlagDefinition::switch('v', "version"),
//!     FlagDefinition::new('v', "verbose", NumberAcceptance::None),
//! ];
//! assert_eq!(
//!     validate_definitions(&table),
//!     vec![DefinitionError::DuplicateShortName('v')]
//! );
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::FlagDefinition;

/// Definition table validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// Two definitions share a short name.
    #[error("duplicate short flag: -{0}")]
    DuplicateShortName(char),
    /// Two definitions share a long name.
    #[error("duplicate long flag: --{0}")]
    DuplicateLongName(String),
    /// Long name is empty.
    #[error("long flag name cannot be empty (short form -{0})")]
    EmptyLongName(char),
    /// Short name can never be produced by the scanner (`-` or whitespace).
    #[error("invalid short flag character: {0:?}")]
    InvalidShortName(char),
    /// Long name starts with a dash, so it would be written as `---name`.
    #[error("invalid long flag format: {0}")]
    InvalidLongName(String),
}

/// Validates a definition table, collecting every problem found.
pub fn validate_definitions(definitions: &[FlagDefinition]) -> Vec<DefinitionError> {
    let mut errors = Vec::new();
    let mut seen_short = HashSet::new();
    let mut seen_long = HashSet::new();

    for def in definitions {
        if def.short_name == '-' || def.short_name.is_whitespace() {
            errors.push(DefinitionError::InvalidShortName(def.short_name));
        } else if !seen_short.insert(def.short_name) {
            errors.push(DefinitionError::DuplicateShortName(def.short_name));
        }

        if def.long_name.is_empty() {
            errors.push(DefinitionError::EmptyLongName(def.short_name));
        } else if def.long_name.starts_with('-') {
            errors.push(DefinitionError::InvalidLongName(def.long_name.clone()));
        } else if !seen_long.insert(def.long_name.as_str()) {
            errors.push(DefinitionError::DuplicateLongName(def.long_name.clone()));
        }
    }

    errors
}
