//! Navigation arguments supplied at screen attach.

use std::collections::HashMap;

use thiserror::Error;

/// Errors that abort screen construction.
///
/// A missing required seed key is not recoverable locally: the screen cannot
/// proceed with a degraded state, so attach fails instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachError {
    #[error("required screen argument '{key}' was not supplied")]
    MissingArg { key: &'static str },
}

/// A single navigation argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Int(i64),
    Text(String),
}

/// Typed bag of navigation arguments (the seed-key carrier).
///
/// The navigation layer fills this at screen attach; dispatchers read their
/// seed key from it exactly once, in [`Dispatcher::attach`].
///
/// [`Dispatcher::attach`]: super::Dispatcher::attach
#[derive(Debug, Clone, Default)]
pub struct ScreenArgs {
    values: HashMap<&'static str, ArgValue>,
}

impl ScreenArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_int(mut self, key: &'static str, value: i64) -> Self {
        self.values.insert(key, ArgValue::Int(value));
        self
    }

    pub fn with_text(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(key, ArgValue::Text(value.into()));
        self
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        match self.values.get(key) {
            Some(ArgValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(ArgValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Read a required integer argument, failing attach when absent.
    pub fn require_int(&self, key: &'static str) -> Result<i64, AttachError> {
        self.int(key).ok_or(AttachError::MissingArg { key })
    }
}
