//! Coalescing dispatcher for function merges and renames
//!
//! Symbolication produces merge and rename requests in bursts, often many
//! per thread within one frame. Dispatching each one would re-run the
//! reducer and re-render for every request. Instead, requests are folded
//! into one [`ThreadFunctionsUpdate`] per thread and the whole batch goes out
//! as a single `COALESCED_FUNCTIONS_UPDATE` at the next frame boundary.
//!
//! ## Window lifecycle
//!
//! - The first request after a flush schedules one frame callback.
//! - Further requests in the same frame only update the pending records.
//! - The callback takes the pending records, clears the scheduled flag and
//!   then dispatches. Requests made from inside that dispatch already belong
//!   to the next window and schedule a new callback.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Instant;

use profview_core_types::schema::EVENT_SCHEDULED;
use profview_core_types::{FuncIndex, ThreadIndex};

use crate::actions::coalesced_functions_update;
use crate::dispatch::Dispatch;
use crate::errors::{ProfviewError, Result};
use crate::logging_facility::elapsed_ms;
use crate::model::{FunctionsUpdatePerThread, ThreadFunctionsUpdate};
use crate::scheduler::FrameScheduler;
use crate::{log_op_end, log_op_start};

#[derive(Debug, Default)]
struct BatchWindow {
    frame_requested: bool,
    updates: FunctionsUpdatePerThread,
}

/// Batches per-thread function updates into one action per frame
///
/// Owned per store; cloning is not supported so that exactly one instance
/// holds a given window.
pub struct CoalescingDispatcher {
    scheduler: Rc<dyn FrameScheduler>,
    window: Rc<RefCell<BatchWindow>>,
}

impl CoalescingDispatcher {
    pub fn new(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            scheduler,
            window: Rc::new(RefCell::new(BatchWindow::default())),
        }
    }

    /// Check whether a flush is scheduled for the current window
    pub fn is_frame_requested(&self) -> bool {
        self.window.borrow().frame_requested
    }

    /// Number of threads with pending updates in the current window
    pub fn pending_thread_count(&self) -> usize {
        self.window.borrow().updates.len()
    }

    /// Snapshot of the pending record for a thread, if any
    pub fn pending_for(&self, thread_index: ThreadIndex) -> Option<ThreadFunctionsUpdate> {
        self.window.borrow().updates.get(&thread_index).cloned()
    }

    /// Make sure a flush is scheduled for the current window
    ///
    /// The dispatch handle of the request that opens a window is the one the
    /// flush dispatches to.
    pub fn request_frame_flush(&self, dispatch: &Rc<dyn Dispatch>) {
        {
            let mut window = self.window.borrow_mut();
            if window.frame_requested {
                return;
            }
            window.frame_requested = true;
        }

        let window = Rc::clone(&self.window);
        let dispatch = Rc::clone(dispatch);
        self.scheduler
            .schedule_once(Box::new(move || flush_window(&window, dispatch.as_ref())));
        tracing::debug!(
            component = module_path!(),
            op = "coalesced_flush",
            event = EVENT_SCHEDULED,
        );
    }

    /// Record that functions in `old_func_to_new_func_map` were merged
    ///
    /// For a thread that already has pending merges, entries are folded in
    /// one by one; a later mapping for the same old function replaces the
    /// earlier one.
    pub fn merge_functions(
        &self,
        dispatch: &Rc<dyn Dispatch>,
        thread_index: ThreadIndex,
        old_func_to_new_func_map: BTreeMap<FuncIndex, FuncIndex>,
    ) {
        {
            let mut window = self.window.borrow_mut();
            match window.updates.get_mut(&thread_index) {
                Some(record) => record.merge_functions(old_func_to_new_func_map),
                None => {
                    window.updates.insert(
                        thread_index,
                        ThreadFunctionsUpdate::from_merge(old_func_to_new_func_map),
                    );
                }
            }
        }
        self.request_frame_flush(dispatch);
    }

    /// Record new names for functions, paired by position
    ///
    /// For a thread that already has pending renames, the new pairs are
    /// appended after them.
    ///
    /// # Errors
    ///
    /// Returns `MismatchedFunctionNames` if the two lists differ in length.
    /// Nothing is recorded and no flush is scheduled in that case.
    pub fn assign_function_names(
        &self,
        dispatch: &Rc<dyn Dispatch>,
        thread_index: ThreadIndex,
        func_indices: Vec<FuncIndex>,
        func_names: Vec<String>,
    ) -> Result<()> {
        if func_indices.len() != func_names.len() {
            return Err(ProfviewError::MismatchedFunctionNames {
                thread_index,
                func_indices: func_indices.len(),
                func_names: func_names.len(),
            });
        }

        {
            let mut window = self.window.borrow_mut();
            match window.updates.get_mut(&thread_index) {
                Some(record) => record.append_names(func_indices, func_names),
                None => {
                    window.updates.insert(
                        thread_index,
                        ThreadFunctionsUpdate::from_renames(func_indices, func_names),
                    );
                }
            }
        }
        self.request_frame_flush(dispatch);
        Ok(())
    }
}

impl std::fmt::Debug for CoalescingDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoalescingDispatcher")
            .field("window", &self.window.borrow())
            .finish_non_exhaustive()
    }
}

/// Close the window and dispatch its contents
///
/// The window borrow ends before `dispatch` runs, so the store may record
/// new updates while handling the action.
fn flush_window(window: &RefCell<BatchWindow>, dispatch: &dyn Dispatch) {
    let started = Instant::now();
    let updates = {
        let mut window = window.borrow_mut();
        window.frame_requested = false;
        std::mem::take(&mut window.updates)
    };

    let thread_count = updates.len();
    let merge_count: usize = updates
        .values()
        .map(|u| u.old_func_to_new_func_map.len())
        .sum();
    let rename_count: usize = updates.values().map(ThreadFunctionsUpdate::rename_count).sum();
    log_op_start!("coalesced_flush", thread_count = thread_count);

    dispatch.dispatch(coalesced_functions_update(updates));

    log_op_end!(
        "coalesced_flush",
        duration_ms = elapsed_ms(started),
        thread_count = thread_count,
        merge_count = merge_count,
        rename_count = rename_count
    );
}
