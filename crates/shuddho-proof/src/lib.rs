//! Correction-overlay and text-reconciliation engine.
//!
//! The proof core is synchronous, deterministic, and total over its inputs:
//! filtering corrections against the ignore-dictionary, partitioning text
//! into rendered segments, and substituting flagged phrases with their
//! suggested replacements. Nothing in this crate suspends or errors during
//! reconciliation; I/O is limited to dictionary persistence.

pub mod annotate;
pub mod dictionary;
pub mod filter;
pub mod reconcile;

pub use annotate::annotate;
pub use dictionary::Dictionary;
pub use filter::{filter_corrections, FilterCache};
pub use reconcile::{apply_all, apply_one};
