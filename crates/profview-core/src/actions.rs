//! Action types consumed by the viewer's reducer
//!
//! Every state change the reducer understands is one `Action` variant. On the
//! wire an action is an object whose `type` field names the variant, with
//! payload fields in camelCase:
//!
//! ```
//! use profview_core::actions::change_selected_thread;
//! use profview_core_types::ThreadIndex;
//!
//! let json = serde_json::to_string(&change_selected_thread(ThreadIndex::new(3))).unwrap();
//! assert_eq!(json, r#"{"type":"CHANGE_SELECTED_THREAD","selectedThread":3}"#);
//! ```

use profview_core_types::{FuncStackIndex, ThreadIndex};
use serde::{Deserialize, Serialize};

use crate::model::{FunctionsUpdatePerThread, ProfileSelection, RequestedLib};

/// Action enum representing every reducer-visible event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    /// Profile load from the add-on is pending
    WaitingForProfileFromAddon,

    /// Profile data arrived from the add-on
    ReceiveProfileFromAddon { profile: serde_json::Value },

    /// Symbol lookup started for a library
    RequestingSymbolTable { requested_lib: RequestedLib },

    /// Symbol lookup finished for a library
    ReceivedSymbolTableReply { requested_lib: RequestedLib },

    StartSymbolicating,

    DoneSymbolicating,

    /// One frame's worth of merges and renames, per thread
    CoalescedFunctionsUpdate {
        functions_update_per_thread: FunctionsUpdatePerThread,
    },

    /// Selected call node in a thread's tree; `None` clears the selection
    ChangeSelectedFuncStack {
        thread_index: ThreadIndex,
        selected_func_stack: Option<FuncStackIndex>,
    },

    ChangeSelectedThread { selected_thread: ThreadIndex },

    /// New display order of threads
    ChangeThreadOrder { thread_order: Vec<ThreadIndex> },

    /// Call nodes currently expanded in a thread's tree
    ChangeExpandedFuncStacks {
        thread_index: ThreadIndex,
        expanded_func_stacks: Vec<FuncStackIndex>,
    },

    UpdateProfileSelection { selection: ProfileSelection },
}

impl Action {
    /// Wire tag of this action
    pub fn type_name(&self) -> &'static str {
        match self {
            Action::WaitingForProfileFromAddon => "WAITING_FOR_PROFILE_FROM_ADDON",
            Action::ReceiveProfileFromAddon { .. } => "RECEIVE_PROFILE_FROM_ADDON",
            Action::RequestingSymbolTable { .. } => "REQUESTING_SYMBOL_TABLE",
            Action::ReceivedSymbolTableReply { .. } => "RECEIVED_SYMBOL_TABLE_REPLY",
            Action::StartSymbolicating => "START_SYMBOLICATING",
            Action::DoneSymbolicating => "DONE_SYMBOLICATING",
            Action::CoalescedFunctionsUpdate { .. } => "COALESCED_FUNCTIONS_UPDATE",
            Action::ChangeSelectedFuncStack { .. } => "CHANGE_SELECTED_FUNC_STACK",
            Action::ChangeSelectedThread { .. } => "CHANGE_SELECTED_THREAD",
            Action::ChangeThreadOrder { .. } => "CHANGE_THREAD_ORDER",
            Action::ChangeExpandedFuncStacks { .. } => "CHANGE_EXPANDED_FUNC_STACKS",
            Action::UpdateProfileSelection { .. } => "UPDATE_PROFILE_SELECTION",
        }
    }
}

pub fn waiting_for_profile_from_addon() -> Action {
    Action::WaitingForProfileFromAddon
}

pub fn receive_profile_from_addon(profile: serde_json::Value) -> Action {
    Action::ReceiveProfileFromAddon { profile }
}

pub fn requesting_symbol_table(requested_lib: RequestedLib) -> Action {
    Action::RequestingSymbolTable { requested_lib }
}

pub fn received_symbol_table_reply(requested_lib: RequestedLib) -> Action {
    Action::ReceivedSymbolTableReply { requested_lib }
}

pub fn start_symbolicating() -> Action {
    Action::StartSymbolicating
}

pub fn done_symbolicating() -> Action {
    Action::DoneSymbolicating
}

/// Wrap one flushed batching window
///
/// An empty map is a valid action that changes nothing downstream.
pub fn coalesced_functions_update(functions_update_per_thread: FunctionsUpdatePerThread) -> Action {
    Action::CoalescedFunctionsUpdate {
        functions_update_per_thread,
    }
}

pub fn change_selected_func_stack(
    thread_index: ThreadIndex,
    selected_func_stack: Option<FuncStackIndex>,
) -> Action {
    Action::ChangeSelectedFuncStack {
        thread_index,
        selected_func_stack,
    }
}

pub fn change_selected_thread(selected_thread: ThreadIndex) -> Action {
    Action::ChangeSelectedThread { selected_thread }
}

pub fn change_thread_order(thread_order: Vec<ThreadIndex>) -> Action {
    Action::ChangeThreadOrder { thread_order }
}

pub fn change_expanded_func_stacks(
    thread_index: ThreadIndex,
    expanded_func_stacks: Vec<FuncStackIndex>,
) -> Action {
    Action::ChangeExpandedFuncStacks {
        thread_index,
        expanded_func_stacks,
    }
}

pub fn update_profile_selection(selection: ProfileSelection) -> Action {
    Action::UpdateProfileSelection { selection }
}
