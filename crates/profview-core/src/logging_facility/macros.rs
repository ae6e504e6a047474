//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.
//! Callers must depend on `profview-core-types` for the schema constants.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use profview_core::log_op_start;
/// log_op_start!("merge_functions");
/// log_op_start!("merge_functions", thread_index = 2);
/// log_op_start!(debug: "merge_functions");
/// ```
///
/// A leading `debug:` logs at debug level, for per-request operations.
#[macro_export]
macro_rules! log_op_start {
    (debug: $op:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = profview_core_types::schema::EVENT_START,
        );
    };
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = profview_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = profview_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use profview_core::log_op_end;
/// log_op_end!("coalesced_flush", duration_ms = 3);
/// log_op_end!(debug: "merge_functions", duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_end {
    (debug: $op:expr, duration_ms = $duration:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = profview_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = profview_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = profview_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use profview_core::log_op_error;
/// # use profview_core::errors::ProfviewError;
/// let err = ProfviewError::MalformedRangeFilter {
///     segment: "x".to_string(),
///     reason: "missing '_'".to_string(),
/// };
/// log_op_error!("add_range_filter", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = profview_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = profview_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}
