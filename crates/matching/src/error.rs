//! Error types for the matching crate.

use thiserror::Error;

/// Outcomes of a search that the caller must handle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Well-formed criteria matched zero recipes. Not a fault.
    #[error("No recipes found matching the search criteria")]
    NoMatch,
}

pub type Result<T> = std::result::Result<T, MatchError>;
