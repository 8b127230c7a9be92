//! # Snapshot Testing Support
//!
//! Structural checks used alongside `insta` snapshots of parsed fixtures.
//!
//! - **`invariants`**: spans in bounds, in document order, non-overlapping,
//!   and clear of the front matter

pub mod invariants;

pub use invariants::check as invariants;
