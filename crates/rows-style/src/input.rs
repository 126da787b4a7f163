//! Arrangements from author-entered text.

use rows_core::{ArrangementSet, Breakpoint, ConfigError, RowsError};
use rows_parser::{parse_arrangement, FractionPolicy};

use crate::options::StyleOptions;

/// Build an arrangement set from `(breakpoint, tokens)` text pairs.
///
/// Each breakpoint must be one of `options.breakpoints`, and each token list
/// is validated with `policy`. The result is ordered like `options`.
pub fn parse_arrangement_set<'a, I>(
    entries: I,
    options: &StyleOptions,
    policy: FractionPolicy,
) -> Result<ArrangementSet, RowsError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut set = ArrangementSet::new();
    for (name, text) in entries {
        let breakpoint = Breakpoint::new(name);
        if !options.breakpoints.contains(&breakpoint) {
            return Err(ConfigError::InvalidBreakpoint {
                name: name.to_string(),
            }
            .into());
        }
        let arrangement = parse_arrangement(text, &options.vocabulary, policy)?;
        set.insert(breakpoint, arrangement);
    }
    Ok(set.ordered_by(&options.breakpoints))
}
