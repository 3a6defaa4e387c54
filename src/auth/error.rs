use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the signup/signin flow.
///
/// Only the credential and validation variants carry a client-facing
/// message; everything else collapses to an opaque 500.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Email already registered (signup).
    #[error("Credentials taken")]
    CredentialsTaken,

    /// Unknown email or wrong password (signin). Deliberately a single
    /// variant so the two cases are indistinguishable to the caller.
    #[error("Credentials incorrect")]
    CredentialsInvalid,

    /// Malformed input caught before the flow runs.
    #[error("{0}")]
    Validation(&'static str),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::CredentialsTaken | AuthError::CredentialsInvalid => StatusCode::FORBIDDEN,
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AuthError::Internal(e) => {
                error!(error = %e, "internal auth error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_errors_map_to_forbidden() {
        assert_eq!(AuthError::CredentialsTaken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AuthError::CredentialsInvalid.status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn internal_errors_map_to_500_without_detail() {
        let err = AuthError::Internal(anyhow::anyhow!("pool timed out at 10.0.0.5"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unknown_email_and_wrong_password_share_a_message() {
        // Both signin failure paths use this one variant, so the client
        // cannot tell which one happened.
        assert_eq!(AuthError::CredentialsInvalid.to_string(), "Credentials incorrect");
    }
}
