//! Canonical schema constants for structured logging
//!
//! The logging macros emit every operation event with an `op` and an
//! `event` field; `event` takes one of the names below. Readers of the log
//! stream (the test capture layer) key on the same field names.

// Field keys read back from emitted events
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
