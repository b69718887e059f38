use crate::responses;
use reqwest::StatusCode;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for the community events backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Fetch past and upcoming community calls.
    pub async fn community_events(
        &self,
    ) -> Result<responses::CommunityEvents, ClientError> {
        let response = self.empty_get("calendar_events").await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}
