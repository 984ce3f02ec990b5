//! Common utilities shared across the workspace.

#![deny(missing_docs)]

mod config;
pub use crate::config::MergeOptions;

pub mod testing;

mod errors;
pub use errors::Fallible;

/// Commonly used imports for error handling.
pub mod prelude_errors {
    pub use crate::errors::prelude::*;
}

use std::collections::HashSet;

/// Parse a comma-separated list into a set.
///
/// Entries are kept verbatim and duplicates collapse. An empty input
/// yields an empty set.
pub fn parse_comma_set<S>(value: S) -> HashSet<String>
where
    S: AsRef<str>,
{
    match value.as_ref() {
        "" => HashSet::new(),
        list => list.split(',').map(str::to_string).collect(),
    }
}
