//! Range-filter codec
//!
//! A profile's range filters are the successive zoom steps the user has
//! committed, stored in a single query value. Each filter is written as
//! `start_end` and filters are joined with `~`:
//!
//! ```text
//! 0.5_120~12_48.25
//! ```
//!
//! Bounds use the shortest decimal form that parses back to the same `f64`,
//! so `parse_range_filters(&stringify_range_filters(fs)) == fs` for every
//! finite input.

use serde::{Deserialize, Serialize};

use crate::errors::{ProfviewError, Result};

const FILTER_SEPARATOR: char = '~';
const BOUND_SEPARATOR: char = '_';

/// One committed zoom step over `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub start: f64,
    pub end: f64,
}

impl RangeFilter {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

/// Decode a serialized range-filter list
///
/// The empty string decodes to no filters.
///
/// # Errors
///
/// Returns `MalformedRangeFilter` if a segment is empty, lacks the `_`
/// separator, or has a bound that is not a number.
pub fn parse_range_filters(value: &str) -> Result<Vec<RangeFilter>> {
    if value.is_empty() {
        return Ok(Vec::new());
    }
    value.split(FILTER_SEPARATOR).map(parse_segment).collect()
}

fn parse_segment(segment: &str) -> Result<RangeFilter> {
    let malformed = |reason: &str| ProfviewError::MalformedRangeFilter {
        segment: segment.to_string(),
        reason: reason.to_string(),
    };

    let (start, end) = segment
        .split_once(BOUND_SEPARATOR)
        .ok_or_else(|| malformed("missing '_' between start and end"))?;
    let start = start
        .parse::<f64>()
        .map_err(|_| malformed("start is not a number"))?;
    let end = end
        .parse::<f64>()
        .map_err(|_| malformed("end is not a number"))?;

    Ok(RangeFilter { start, end })
}

/// Encode a range-filter list, preserving order
pub fn stringify_range_filters(filters: &[RangeFilter]) -> String {
    filters
        .iter()
        .map(|f| format!("{}{}{}", f.start, BOUND_SEPARATOR, f.end))
        .collect::<Vec<_>>()
        .join(&FILTER_SEPARATOR.to_string())
}
