//! Shared types, errors, and configuration for the Shuddho proofreading engine.
//!
//! Every other crate in the workspace depends on this one. It owns the
//! `Correction` data model produced by the suggestion service, the segment
//! model the annotator renders, the top-level error type, and the TOML
//! configuration.

pub mod config;
pub mod error;
pub mod types;

pub use config::ShuddhoConfig;
pub use error::{Result, ShuddhoError};
pub use types::{ActiveCorrection, Correction, PopoverPosition, Segment};
