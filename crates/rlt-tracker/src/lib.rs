//! High-level facade for Reactive List Tracking (RLT).
//!
//! Provides a unified API for callers that want to diff and synchronize
//! lists without wiring an analyzer, a visitor, and a handler themselves.
//! This is the main entry point for applications embedding RLT.

pub mod tracker;

pub use tracker::ListTracker;

// Re-export key types
pub use rlt_diff::{AnalyzerOptions, ChangeChain, ChangeSegment, CollectionAnalyzer};
pub use rlt_types::{ChangeAction, ItemComparer, ListChange};
pub use rlt_update::{UpdateError, UpdateResult, UpdateVisitor};
