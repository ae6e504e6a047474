//! profview Core - Action layer of the profiling-data viewer
//!
//! This crate builds the values the viewer's store consumes, including:
//! - Tagged actions for symbolication, selection and thread changes
//! - URL query mutation for view toggles and range filters
//! - Per-frame coalescing of function merges and renames
//! - Deferred tasks run by an executor that owns the store handles
//!
//! Everything runs on one thread; the only deferred work is the frame
//! callback that flushes the coalescing window.

pub mod actions;
pub mod coalesce;
pub mod dispatch;
pub mod errors;
pub mod executor;
pub mod logging_facility;
pub mod model;
pub mod navigation;
pub mod query;
pub mod range_filters;
pub mod scheduler;
pub mod tasks;

// Re-export commonly used types
pub use actions::Action;
pub use coalesce::CoalescingDispatcher;
pub use dispatch::Dispatch;
pub use errors::{ErrorKind, ExError, ProfviewError, Result};
pub use executor::Executor;
pub use navigation::{Location, NavigationRequest, Navigator};
pub use query::Query;
pub use range_filters::RangeFilter;
pub use scheduler::{FrameScheduler, ManualFrameScheduler};
pub use tasks::Task;
