//! HTTP implementation of [`Backend`] over `fetch`.
//!
//! Every request carries credentials so the session cookie travels with it.
//! Error envelopes arrive with non-2xx statuses and are decoded like any
//! other body; only transport and decoding failures become [`ClientError`].

use fsbrowse_core::backend::endpoints;
use fsbrowse_core::model::ListRequest;
use fsbrowse_core::{ApiResponse, Backend, ClientError, Credentials, FileOrDir, UserSession};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::{AbortSignal, RequestCredentials};

use crate::config::api_url;

/// Backend reached over HTTP, optionally tied to an abort signal.
#[derive(Clone, Default)]
pub struct HttpBackend {
    signal: Option<AbortSignal>,
}

impl HttpBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort every request issued through this backend when `signal` fires.
    pub fn with_abort(signal: AbortSignal) -> Self {
        Self {
            signal: Some(signal),
        }
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .abort_signal(self.signal.as_ref())
    }

    fn get(&self, endpoint: &str) -> RequestBuilder {
        self.prepare(Request::get(&api_url(endpoint)))
    }

    fn post(&self, endpoint: &str) -> RequestBuilder {
        self.prepare(Request::post(&api_url(endpoint)))
    }
}

async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ClientError> {
    let request = request.map_err(|e| ClientError::RequestBuild(e.to_string()))?;
    request
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>, ClientError> {
    response
        .json::<ApiResponse<T>>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

impl Backend for HttpBackend {
    async fn me(&self) -> Result<ApiResponse<UserSession>, ClientError> {
        let response = send(self.get(endpoints::ME).build()).await?;
        decode(response).await
    }

    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<ApiResponse<UserSession>, ClientError> {
        let response = send(self.post(endpoints::LOGIN).json(credentials)).await?;
        decode(response).await
    }

    async fn logout(&self) -> Result<(), ClientError> {
        let response = send(self.post(endpoints::LOGOUT).build()).await?;
        if response.ok() {
            Ok(())
        } else {
            Err(ClientError::Http(response.status()))
        }
    }

    async fn list_directory(&self, path: &str) -> Result<ApiResponse<FileOrDir>, ClientError> {
        let body = ListRequest { path };
        let response = send(self.post(endpoints::FILES).json(&body)).await?;
        decode(response).await
    }
}
