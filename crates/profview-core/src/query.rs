//! URL query mapping and its mutators
//!
//! The viewer keeps part of its view state in the URL query: boolean toggles
//! are present-or-absent keys, string values are present iff non-empty.
//!
//! Mutators never touch their input. A change that would leave the mapping
//! as it is returns a clone of the same shared pointer, so callers can use
//! [`Query::ptr_eq`] to skip downstream work.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::range_filters::{parse_range_filters, stringify_range_filters, RangeFilter};

/// Query key for the "JavaScript frames only" toggle
pub const JS_ONLY_PARAM: &str = "jsOnly";
/// Query key for the inverted call tree toggle
pub const INVERT_CALLSTACK_PARAM: &str = "invertCallstack";
/// Query key holding the serialized range-filter list
pub const RANGE_FILTERS_PARAM: &str = "rangeFilters";

type QueryMap = BTreeMap<String, Option<String>>;

/// Query parameters of the current location
///
/// A key mapping to `None` is a boolean flag that is switched on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(Arc<QueryMap>);

impl Query {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether two queries share the same underlying mapping
    pub fn ptr_eq(a: &Query, b: &Query) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Check if the key is present, as a flag or with a value
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Get a string value; flags and absent keys yield `None`
    pub fn value(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|v| v.as_deref())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy the mapping, apply `edit` to the copy and wrap it as a new query
    fn edited(&self, edit: impl FnOnce(&mut QueryMap)) -> Query {
        let mut map = QueryMap::clone(&self.0);
        edit(&mut map);
        Query(Arc::new(map))
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        Query::ptr_eq(self, other) || self.0 == other.0
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for Query
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Query(Arc::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        ))
    }
}

/// Switch a boolean flag on or off
///
/// Returns the same mapping when the flag's presence already equals `on`.
pub fn change_bool_query_param(query: &Query, name: &str, on: bool) -> Query {
    if query.contains(name) == on {
        return query.clone();
    }
    query.edited(|map| {
        if on {
            map.insert(name.to_string(), None);
        } else {
            map.remove(name);
        }
    })
}

/// Set or clear a string value
///
/// `None` and the empty string both mean "absent". Returns the same mapping
/// when clearing a key that is already absent.
pub fn change_string_query_param(query: &Query, name: &str, value: Option<&str>) -> Query {
    let value = value.filter(|v| !v.is_empty());
    if value.is_none() && !query.contains(name) {
        return query.clone();
    }
    query.edited(|map| match value {
        Some(v) => {
            map.insert(name.to_string(), Some(v.to_string()));
        }
        None => {
            map.remove(name);
        }
    })
}

/// Append a range filter after the ones already in the query
///
/// # Errors
///
/// Returns `MalformedRangeFilter` if the current `rangeFilters` value cannot
/// be decoded.
pub fn add_range_filter_to_query(query: &Query, start: f64, end: f64) -> Result<Query> {
    let mut filters = parse_range_filters(query.value(RANGE_FILTERS_PARAM).unwrap_or_default())?;
    filters.push(RangeFilter::new(start, end));
    let encoded = stringify_range_filters(&filters);
    Ok(change_string_query_param(
        query,
        RANGE_FILTERS_PARAM,
        Some(&encoded),
    ))
}

/// Decode the range filters currently in the query
///
/// # Errors
///
/// Returns `MalformedRangeFilter` if the stored value cannot be decoded.
pub fn range_filters(query: &Query) -> Result<Vec<RangeFilter>> {
    parse_range_filters(query.value(RANGE_FILTERS_PARAM).unwrap_or_default())
}

/// A declarative change to the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueryAction {
    ChangeJsOnly { js_only: bool },
    ChangeInvertCallstack { invert_callstack: bool },
    AddRangeFilter { start: f64, end: f64 },
}

/// Compute the query that results from applying `action` to `query`
///
/// `QueryAction` is closed, so every kind is routed here and there is no
/// fallthrough case. A kind that would leave the query unchanged returns the
/// same mapping.
///
/// # Errors
///
/// Returns `MalformedRangeFilter` when appending to an undecodable
/// `rangeFilters` value.
pub fn query_root_reducer(query: &Query, action: &QueryAction) -> Result<Query> {
    match *action {
        QueryAction::ChangeJsOnly { js_only } => {
            Ok(change_bool_query_param(query, JS_ONLY_PARAM, js_only))
        }
        QueryAction::ChangeInvertCallstack { invert_callstack } => Ok(change_bool_query_param(
            query,
            INVERT_CALLSTACK_PARAM,
            invert_callstack,
        )),
        QueryAction::AddRangeFilter { start, end } => add_range_filter_to_query(query, start, end),
    }
}
