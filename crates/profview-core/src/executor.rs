//! Task executor
//!
//! The executor owns the handles a task needs: the store's dispatch handle,
//! the navigator and this store's coalescing dispatcher. Building a task and
//! running it are separate steps, so UI code can construct tasks without
//! access to any of them.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::collections::BTreeMap;
//! use std::rc::Rc;
//!
//! use profview_core::actions::Action;
//! use profview_core::executor::Executor;
//! use profview_core::navigation::{NavigationRequest, Navigator};
//! use profview_core::scheduler::ManualFrameScheduler;
//! use profview_core::tasks::merge_functions;
//! use profview_core_types::{FuncIndex, ThreadIndex};
//!
//! struct NoHistory;
//! impl Navigator for NoHistory {
//!     fn navigate(&self, _request: NavigationRequest) {}
//! }
//!
//! let scheduler = Rc::new(ManualFrameScheduler::new());
//! let store = Rc::new(RefCell::new(Vec::<Action>::new()));
//! let executor = Executor::new(store.clone(), Rc::new(NoHistory), scheduler.clone());
//!
//! let map = BTreeMap::from([(FuncIndex::new(1), FuncIndex::new(0))]);
//! executor.run(merge_functions(ThreadIndex::new(0), map)).unwrap();
//! assert!(store.borrow().is_empty());
//!
//! scheduler.run_frame();
//! assert_eq!(store.borrow().len(), 1);
//! ```

use std::rc::Rc;
use std::time::Instant;

use crate::actions::{update_profile_selection, Action};
use crate::coalesce::CoalescingDispatcher;
use crate::dispatch::Dispatch;
use crate::errors::Result;
use crate::logging_facility::elapsed_ms;
use crate::model::ProfileSelection;
use crate::navigation::{add_range_filter, NavigationRequest, Navigator};
use crate::scheduler::FrameScheduler;
use crate::tasks::Task;
use crate::{log_op_end, log_op_error, log_op_start};

/// Runs tasks against one store's dispatch handle and navigator
pub struct Executor {
    dispatch: Rc<dyn Dispatch>,
    navigator: Rc<dyn Navigator>,
    coalescer: CoalescingDispatcher,
}

impl Executor {
    /// Create an executor with its own batching window on `scheduler`
    pub fn new(
        dispatch: Rc<dyn Dispatch>,
        navigator: Rc<dyn Navigator>,
        scheduler: Rc<dyn FrameScheduler>,
    ) -> Self {
        Self {
            dispatch,
            navigator,
            coalescer: CoalescingDispatcher::new(scheduler),
        }
    }

    /// The batching window fed by merge and rename tasks
    pub fn coalescer(&self) -> &CoalescingDispatcher {
        &self.coalescer
    }

    /// Hand a plain action straight to the store
    pub fn dispatch(&self, action: Action) {
        tracing::debug!(
            component = module_path!(),
            op = "dispatch",
            action_type = action.type_name(),
        );
        self.dispatch.dispatch(action);
    }

    /// Hand a navigation request straight to the history store
    pub fn navigate(&self, request: NavigationRequest) {
        tracing::debug!(
            component = module_path!(),
            op = "navigate",
            query_len = request.query.len(),
        );
        self.navigator.navigate(request);
    }

    /// Run a deferred task
    ///
    /// Merge and rename tasks return as soon as the pending record is
    /// updated; their action is dispatched at the next frame. Their start
    /// and end events are logged at debug level, leaving the per-frame
    /// `coalesced_flush` events at info.
    ///
    /// # Errors
    ///
    /// - `MismatchedFunctionNames` for a rename task whose lists differ in
    ///   length
    /// - `MalformedRangeFilter` if the task's location carries undecodable
    ///   range filters; nothing is navigated or dispatched then
    pub fn run(&self, task: Task) -> Result<()> {
        let op = task.op_name();
        let batched = task.is_batched();
        let started = Instant::now();
        if batched {
            log_op_start!(debug: op);
        } else {
            log_op_start!(op);
        }

        let result = self.run_task(task);
        match &result {
            Ok(()) if batched => {
                log_op_end!(debug: op, duration_ms = elapsed_ms(started));
            }
            Ok(()) => {
                log_op_end!(op, duration_ms = elapsed_ms(started));
            }
            Err(err) => {
                log_op_error!(op, err.clone(), duration_ms = elapsed_ms(started));
            }
        }
        result
    }

    fn run_task(&self, task: Task) -> Result<()> {
        match task {
            Task::MergeFunctions {
                thread_index,
                old_func_to_new_func_map,
            } => {
                self.coalescer
                    .merge_functions(&self.dispatch, thread_index, old_func_to_new_func_map);
                Ok(())
            }

            Task::AssignFunctionNames {
                thread_index,
                func_indices,
                func_names,
            } => self.coalescer.assign_function_names(
                &self.dispatch,
                thread_index,
                func_indices,
                func_names,
            ),

            Task::AddRangeFilterAndUnsetSelection {
                start,
                end,
                location,
            } => {
                let request = add_range_filter(start, end, &location)?;
                self.navigate(request);
                self.dispatch(update_profile_selection(ProfileSelection::none()));
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("coalescer", &self.coalescer)
            .finish_non_exhaustive()
    }
}
