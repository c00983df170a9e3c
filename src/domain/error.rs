//! Typed failure reasons returned by use-cases.

use thiserror::Error;

/// Failures a use-case can return.
///
/// These are discriminated results, never uncaught faults: the dispatcher
/// converts each into a one-shot message event, and the rendering layer
/// resolves the reason to localized text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Connectivity or transport failure.
    #[error("network request failed")]
    Network,

    /// A meal must have a non-empty name.
    #[error("meal name must not be empty")]
    EmptyMealName,

    /// Requested food id is not in the catalog.
    #[error("food {0} is not in the catalog")]
    UnknownFood(i64),

    /// Anything unclassified; surfaced to the user as a generic message.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
