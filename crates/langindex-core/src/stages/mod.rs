//! The merge stages, in the order the pipeline runs them.
//!
//! Every stage takes the index built so far by mutable reference and returns
//! its counters. Stages never look at each other's inputs.

pub mod countries;
pub mod ethnologue;
pub mod expansion;
pub mod finalize;
pub mod registry;

use langindex_standards::SubtagRegistry;

use crate::error::MergeError;
use crate::report::Stage;

/// Region code meaning "no country".
pub const NO_REGION: &str = "?";

/// Resolves a region code to its country display name.
///
/// `?` yields `None`; any other code must be registered.
pub(crate) fn country_name<'a>(
    registry: &'a SubtagRegistry,
    code: &str,
    stage: Stage,
) -> Result<Option<&'a str>, MergeError> {
    if code == NO_REGION {
        return Ok(None);
    }
    registry
        .region_name(code)
        .map(Some)
        .ok_or_else(|| MergeError::UnknownRegion {
            code: code.to_string(),
            stage,
        })
}

/// Replaces ASCII apostrophes with the typographic one.
pub(crate) fn normalize_apostrophes(name: &str) -> String {
    name.replace('\'', "\u{2019}")
}
