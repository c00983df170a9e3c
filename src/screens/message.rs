//! Failure-reason selection for transient messages.

use crate::domain::DomainError;

/// Which user-facing message to show for a failed operation.
///
/// The screen only selects the reason; resolving it to localized text is the
/// rendering layer's job. Unclassified failures fall back to [`Unknown`]
/// rather than leaking raw diagnostics to the user.
///
/// [`Unknown`]: MessageKind::Unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    NetworkError,
    EmptyMealName,
    Unknown,
}

impl From<&DomainError> for MessageKind {
    fn from(error: &DomainError) -> Self {
        match error {
            DomainError::Network => MessageKind::NetworkError,
            DomainError::EmptyMealName => MessageKind::EmptyMealName,
            DomainError::UnknownFood(_) | DomainError::Unexpected(_) => MessageKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclassified_failures_map_to_unknown() {
        let error = DomainError::Unexpected("backend returned 500".to_string());
        assert_eq!(MessageKind::from(&error), MessageKind::Unknown);
        assert_eq!(
            MessageKind::from(&DomainError::UnknownFood(9)),
            MessageKind::Unknown
        );
    }

    #[test]
    fn classified_failures_keep_their_reason() {
        assert_eq!(
            MessageKind::from(&DomainError::Network),
            MessageKind::NetworkError
        );
        assert_eq!(
            MessageKind::from(&DomainError::EmptyMealName),
            MessageKind::EmptyMealName
        );
    }
}
