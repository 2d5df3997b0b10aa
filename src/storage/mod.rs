//! In-memory album collection
//!
//! Nothing is persisted, the collection lives as long as the process.

pub mod collection;
pub mod error;
