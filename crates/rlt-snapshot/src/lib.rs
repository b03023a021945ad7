//! Immutable ordered snapshots for Reactive List Tracking (RLT).
//!
//! A [`Snapshot`] is an indexed, countable view over a sequence at a point in
//! time. The analyzer takes one snapshot of the previous list and one of the
//! updated list; neither is mutated during the diff. The `index_of` search
//! primitive is specialized per backing shape where a faster scan exists and
//! falls back to a generic linear search everywhere else.
//!
//! # Key Types
//!
//! - [`Snapshot`] — The indexed-view trait (`len` / `get` / `index_of`)
//!
//! Implementations are provided for `[T]`, `Vec<T>`, `Arc<[T]>`, and
//! `VecDeque<T>`.

pub mod shapes;
pub mod traits;

pub use traits::Snapshot;
