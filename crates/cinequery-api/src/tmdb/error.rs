//! Endpoint validation errors.

/// A required identifier was missing, or caller text would leave the
/// requested resource, when resolving an endpoint.
///
/// Returned synchronously by [`EndpointResolver`](super::EndpointResolver)
/// before any request is issued. Callers must not send the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ValidationError {
    /// Movie detail or recommendation lookup without a movie ID.
    #[error("Movie ID is required")]
    MissingMovieId,
    /// Actor detail lookup without a person ID.
    #[error("Actor ID is required")]
    MissingActorId,
    /// Filmography lookup without a person ID.
    #[error("Actor ID is missing")]
    MissingCastId,
    /// Account list lookup without an account ID or session ID.
    #[error("Account ID or Session ID is missing")]
    MissingAccountOrSession,
    /// A list name or sub-list path contains a `.` or `..` segment.
    #[error("Path segment must not be '.' or '..'")]
    DotPathSegment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::MissingMovieId.to_string(),
            "Movie ID is required"
        );
        assert_eq!(
            ValidationError::MissingActorId.to_string(),
            "Actor ID is required"
        );
        assert_eq!(
            ValidationError::MissingCastId.to_string(),
            "Actor ID is missing"
        );
        assert_eq!(
            ValidationError::MissingAccountOrSession.to_string(),
            "Account ID or Session ID is missing"
        );
        assert_eq!(
            ValidationError::DotPathSegment.to_string(),
            "Path segment must not be '.' or '..'"
        );
    }
}
