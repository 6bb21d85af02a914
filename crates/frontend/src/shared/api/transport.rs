use async_trait::async_trait;
use gloo_net::http::Request;
use thiserror::Error;

/// Ошибки обращения к API каталога
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Raw GET access to the catalog API.
///
/// Futures are not `Send`: everything runs on the browser's UI thread.
#[async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    /// GET `url` and return the body of a 2xx response
    async fn get_text(&self, url: &str) -> Result<String, ApiError>;
}

/// `fetch`-backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn get_text(&self, url: &str) -> Result<String, ApiError> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}
