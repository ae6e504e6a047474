use std::collections::BTreeMap;

use profview_core_types::{FuncIndex, ThreadIndex};
use serde::{Deserialize, Serialize};

/// Pending function-table changes for one thread within a batching window
///
/// Accumulates two kinds of update between frame flushes:
/// - merges: `old_func_to_new_func_map` sends each old function to the
///   canonical function it has been folded into
/// - renames: `func_indices[i]` gets the name `func_names[i]`
///
/// Both kinds may be present on the same record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadFunctionsUpdate {
    /// Old function index to the function it was merged into
    pub old_func_to_new_func_map: BTreeMap<FuncIndex, FuncIndex>,

    /// Functions receiving a new name, positionally paired with `func_names`
    pub func_indices: Vec<FuncIndex>,

    /// New names, positionally paired with `func_indices`
    pub func_names: Vec<String>,
}

/// Pending updates for every thread touched in a window
pub type FunctionsUpdatePerThread = BTreeMap<ThreadIndex, ThreadFunctionsUpdate>;

impl ThreadFunctionsUpdate {
    /// Start a record from a merge map, with no pending renames
    pub fn from_merge(old_func_to_new_func_map: BTreeMap<FuncIndex, FuncIndex>) -> Self {
        Self {
            old_func_to_new_func_map,
            func_indices: Vec::new(),
            func_names: Vec::new(),
        }
    }

    /// Start a record from paired rename lists, with no pending merges
    ///
    /// Callers must pass lists of equal length.
    pub fn from_renames(func_indices: Vec<FuncIndex>, func_names: Vec<String>) -> Self {
        debug_assert_eq!(func_indices.len(), func_names.len());
        Self {
            old_func_to_new_func_map: BTreeMap::new(),
            func_indices,
            func_names,
        }
    }

    /// Fold further merges in; a later mapping for the same old function wins
    pub fn merge_functions(&mut self, old_func_to_new_func_map: BTreeMap<FuncIndex, FuncIndex>) {
        self.old_func_to_new_func_map.extend(old_func_to_new_func_map);
    }

    /// Append further renames after the ones already pending
    ///
    /// Callers must pass lists of equal length.
    pub fn append_names(&mut self, func_indices: Vec<FuncIndex>, func_names: Vec<String>) {
        debug_assert_eq!(func_indices.len(), func_names.len());
        self.func_indices.extend(func_indices);
        self.func_names.extend(func_names);
    }

    /// Number of pending renames
    pub fn rename_count(&self) -> usize {
        self.func_indices.len()
    }
}
