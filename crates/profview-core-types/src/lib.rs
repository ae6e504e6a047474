//! Core types shared across profview crates
//!
//! This crate provides foundational types used by the action layer, the
//! logging facility and the CLI:
//!
//! - **Index newtypes**: ThreadIndex, FuncIndex, FuncStackIndex
//! - **Schema constants**: Canonical field keys and event names

pub mod indices;
pub mod schema;

pub use indices::{FuncIndex, FuncStackIndex, ThreadIndex};
