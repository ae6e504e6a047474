//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_THREAD_INDEX: &str = "thread_index";
pub const FIELD_ACTION_TYPE: &str = "action_type";

// Collection sizes
pub const FIELD_THREAD_COUNT: &str = "thread_count";
pub const FIELD_MERGE_COUNT: &str = "merge_count";
pub const FIELD_RENAME_COUNT: &str = "rename_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_SCHEDULED: &str = "scheduled";
