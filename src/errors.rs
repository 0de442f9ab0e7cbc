use thiserror::Error;

/// Failures while retrieving or interpreting provider records.
///
/// Either variant aborts the build of a combatant; no partial combatant is
/// ever returned.
#[derive(Debug, Error)]
pub enum DataError {
    /// Network or transport failure while retrieving a record
    #[error("failed to fetch {reference}: {reason}")]
    Fetch { reference: String, reason: String },
    /// A required field is missing or malformed
    #[error("malformed {record} record: {details}")]
    Parse {
        record: &'static str,
        details: String,
    },
}

impl DataError {
    pub fn fetch(reference: impl Into<String>, reason: impl ToString) -> Self {
        DataError::Fetch {
            reference: reference.into(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(record: &'static str, details: impl Into<String>) -> Self {
        DataError::Parse {
            record,
            details: details.into(),
        }
    }
}

/// Errors surfaced by an interactive duel session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("battle setup failed: {0}")]
    Setup(#[from] DataError),
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using DataError
pub type DataResult<T> = Result<T, DataError>;

/// Type alias for Results using SessionError
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DataError::fetch("https://example.test/move/1", "connection refused");
        assert_eq!(
            err.to_string(),
            "failed to fetch https://example.test/move/1: connection refused"
        );

        let err = DataError::parse("type", "missing damage_relations");
        assert_eq!(err.to_string(), "malformed type record: missing damage_relations");

        let err: SessionError = err.into();
        assert!(err.to_string().starts_with("battle setup failed"));
    }
}
