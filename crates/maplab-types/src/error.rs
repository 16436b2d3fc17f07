use thiserror::Error;

/// Errors related to session operations.
///
/// Cloning and modifying are only meaningful once a map exists; asking
/// for either beforehand is a user-sequencing error, not a fault. The
/// session is left untouched when one of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no map has been built yet")]
    NoOriginal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        let err = SessionError::NoOriginal;
        assert_eq!(err.to_string(), "no map has been built yet");
    }
}
