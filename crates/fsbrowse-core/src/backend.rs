//! Abstraction over the REST API the client consumes.
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | [`Backend::me`] | `GET auth/me` |
//! | [`Backend::login`] | `POST auth/login` |
//! | [`Backend::logout`] | `POST auth/logout` |
//! | [`Backend::list_directory`] | `POST files` |
//!
//! The web client implements this over `fetch`; tests use in-memory backends.

use crate::error::{ApiError, ClientError};
use crate::model::{ApiResponse, Credentials, FileOrDir, UserSession};

/// Endpoint paths relative to the API base URL.
pub mod endpoints {
    pub const ME: &str = "auth/me";
    pub const LOGIN: &str = "auth/login";
    pub const LOGOUT: &str = "auth/logout";
    pub const FILES: &str = "files";
}

#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Resolve the session attached to the current cookie.
    async fn me(&self) -> Result<ApiResponse<UserSession>, ClientError>;

    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<ApiResponse<UserSession>, ClientError>;

    /// Succeeds only on a 2xx response; the body is ignored.
    async fn logout(&self) -> Result<(), ClientError>;

    async fn list_directory(&self, path: &str) -> Result<ApiResponse<FileOrDir>, ClientError>;
}

/// Convert a transport failure into the generic error envelope.
///
/// Failures are logged here, at the point of the request, and never
/// propagate further as errors.
pub fn settle<T>(result: Result<ApiResponse<T>, ClientError>, action: &str) -> ApiResponse<T> {
    match result {
        Ok(response) => response,
        Err(err) => {
            log::error!("Failed to {}: {}", action, err);
            ApiResponse::error(ApiError::from(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_passes_responses_through() {
        let response: ApiResponse<u8> = ApiResponse::error(ApiError::new("Bad Request", None));
        assert_eq!(settle(Ok(response.clone()), "test"), response);
    }

    #[test]
    fn test_settle_collapses_transport_errors() {
        let settled: ApiResponse<u8> = settle(Err(ClientError::Decode("eof".into())), "test");
        assert_eq!(settled, ApiResponse::error(ApiError::unknown()));
    }
}
