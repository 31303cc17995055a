//! Core types shared across modiff facilities
//!
//! This crate provides the small foundational types used by both the
//! error/logging facilities and the async engine:
//!
//! - **Correlation types**: RequestId, one per handled chat command
//! - **Sensitive data**: Sensitive<T> marker for API keys and bot tokens
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::RequestId;
pub use sensitive::Sensitive;
