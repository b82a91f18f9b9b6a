//! Suggestion-service client for the Shuddho proofreading engine.
//!
//! Sends document text to a remote language model and returns the list of
//! suggested corrections. The client is an explicit session object built
//! from configuration and passed to call sites; there is no global handle.

pub mod client;
pub mod error;
pub mod parse;

pub use client::{SuggestClient, SuggestionService};
pub use error::SuggestError;
pub use parse::parse_corrections;
