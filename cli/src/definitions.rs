//! Flag table the `flagscan` binary resolves its arguments against.

use flagscan_core::{FlagDefinition, NumberAcceptance};

/// Returns the built-in definition table, in lookup order.
pub fn default_definitions() -> Vec<FlagDefinition> {
    vec![
        FlagDefinition::new('h', "help", NumberAcceptance::Single),
        FlagDefinition::switch('v', "version"),
        FlagDefinition::new('a', "args", NumberAcceptance::Multiple),
        FlagDefinition::new('r', "repeat", NumberAcceptance::Single),
    ]
}
