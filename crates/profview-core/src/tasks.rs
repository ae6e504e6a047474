//! Deferred tasks
//!
//! Some user actions cannot be expressed as a single action value: they feed
//! the coalescing dispatcher, or they must both navigate and dispatch in a
//! fixed order. Builders here return a [`Task`] describing that work; an
//! [`Executor`](crate::executor::Executor) runs it with the handles it owns.

use std::collections::BTreeMap;

use profview_core_types::{FuncIndex, ThreadIndex};

use crate::navigation::Location;

/// Work that needs the dispatch handle, the navigator or the batching window
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Fold a merge map into the thread's pending record
    MergeFunctions {
        thread_index: ThreadIndex,
        old_func_to_new_func_map: BTreeMap<FuncIndex, FuncIndex>,
    },

    /// Append renames to the thread's pending record
    AssignFunctionNames {
        thread_index: ThreadIndex,
        func_indices: Vec<FuncIndex>,
        func_names: Vec<String>,
    },

    /// Push the zoomed-in query, then clear the timeline selection
    AddRangeFilterAndUnsetSelection {
        start: f64,
        end: f64,
        location: Location,
    },
}

impl Task {
    /// Operation name used in log events
    pub fn op_name(&self) -> &'static str {
        match self {
            Task::MergeFunctions { .. } => "merge_functions",
            Task::AssignFunctionNames { .. } => "assign_function_names",
            Task::AddRangeFilterAndUnsetSelection { .. } => "add_range_filter_and_unset_selection",
        }
    }

    /// Check if the task only feeds the batching window
    pub fn is_batched(&self) -> bool {
        matches!(
            self,
            Task::MergeFunctions { .. } | Task::AssignFunctionNames { .. }
        )
    }
}

pub fn merge_functions(
    thread_index: ThreadIndex,
    old_func_to_new_func_map: BTreeMap<FuncIndex, FuncIndex>,
) -> Task {
    Task::MergeFunctions {
        thread_index,
        old_func_to_new_func_map,
    }
}

/// Name functions, `func_names[i]` going to `func_indices[i]`
///
/// Length agreement is checked when the task runs; a mismatch fails the
/// run with `MismatchedFunctionNames` before anything is recorded.
pub fn assign_function_names(
    thread_index: ThreadIndex,
    func_indices: Vec<FuncIndex>,
    func_names: Vec<String>,
) -> Task {
    Task::AssignFunctionNames {
        thread_index,
        func_indices,
        func_names,
    }
}

pub fn add_range_filter_and_unset_selection(start: f64, end: f64, location: &Location) -> Task {
    Task::AddRangeFilterAndUnsetSelection {
        start,
        end,
        location: location.clone(),
    }
}
