//! Navigation dispatch adapter
//!
//! Query-changing user actions do not go to the reducer. They compute the
//! next query from the current location and hand a navigation request to the
//! history store, which updates the visible URL.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::query::{query_root_reducer, Query, QueryAction};

/// The part of the current location the action layer reads
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub pathname: String,
    #[serde(default)]
    pub query: Query,
}

impl Location {
    pub fn new(pathname: impl Into<String>, query: Query) -> Self {
        Self {
            pathname: pathname.into(),
            query,
        }
    }
}

/// Request to push a new history entry at `pathname` carrying `query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub pathname: String,
    pub query: Query,
}

/// History store collaborator
pub trait Navigator {
    /// Push a new location with the requested query
    fn navigate(&self, request: NavigationRequest);
}

/// Run `action` against the location's query and wrap the result
///
/// The request keeps the location's pathname; only the query changes.
///
/// # Errors
///
/// Propagates decoding errors from the range-filter codec.
pub fn push_query_action(action: &QueryAction, location: &Location) -> Result<NavigationRequest> {
    Ok(NavigationRequest {
        pathname: location.pathname.clone(),
        query: query_root_reducer(&location.query, action)?,
    })
}

/// Toggle the "JavaScript frames only" view
///
/// # Errors
///
/// Never fails for flag changes; the `Result` matches the other query builders.
pub fn change_js_only(js_only: bool, location: &Location) -> Result<NavigationRequest> {
    push_query_action(&QueryAction::ChangeJsOnly { js_only }, location)
}

/// Toggle the inverted call tree
///
/// # Errors
///
/// Never fails for flag changes; the `Result` matches the other query builders.
pub fn change_invert_callstack(
    invert_callstack: bool,
    location: &Location,
) -> Result<NavigationRequest> {
    push_query_action(
        &QueryAction::ChangeInvertCallstack { invert_callstack },
        location,
    )
}

/// Commit a zoom step over `[start, end]`
///
/// # Errors
///
/// Returns `MalformedRangeFilter` if the location's current range filters
/// cannot be decoded.
pub fn add_range_filter(start: f64, end: f64, location: &Location) -> Result<NavigationRequest> {
    push_query_action(&QueryAction::AddRangeFilter { start, end }, location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{INVERT_CALLSTACK_PARAM, JS_ONLY_PARAM, RANGE_FILTERS_PARAM};

    #[test]
    fn test_change_js_only_wraps_query() {
        let location = Location::default();
        let request = change_js_only(true, &location).unwrap();
        assert!(request.query.contains(JS_ONLY_PARAM));
    }

    #[test]
    fn test_noop_toggle_keeps_query_reference() {
        let query: Query = [(INVERT_CALLSTACK_PARAM, None::<&str>)].into_iter().collect();
        let location = Location::new("/calltree/", query.clone());
        let request = change_invert_callstack(true, &location).unwrap();
        assert!(Query::ptr_eq(&request.query, &query));
    }

    #[test]
    fn test_add_range_filter_reads_location_query() {
        let query: Query = [(RANGE_FILTERS_PARAM, Some("0_10"))].into_iter().collect();
        let location = Location::new("/calltree/", query);
        let request = add_range_filter(2.0, 4.0, &location).unwrap();
        assert_eq!(request.query.value(RANGE_FILTERS_PARAM), Some("0_10~2_4"));
        assert_eq!(request.pathname, "/calltree/");
    }

    #[test]
    fn test_request_serializes_pathname_and_query() {
        let request = change_js_only(true, &Location::new("/flamegraph/", Query::new())).unwrap();
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"pathname":"/flamegraph/","query":{"jsOnly":null}}"#);
    }
}
