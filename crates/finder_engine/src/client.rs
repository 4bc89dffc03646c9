use std::time::Duration;

use finder_logging::{finder_debug, finder_warn};
use futures_util::StreamExt;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Url;

use crate::{ClientError, DetailResponse, FailureKind, SearchRequest, SearchResponse};

/// Characters left untouched when a value becomes one path segment; the rest
/// is percent-encoded, including `/`, `?`, `#`, `&` and spaces.
const PATH_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait RecipeClient: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ClientError>;

    async fn recipe_detail(
        &self,
        data_structure: &str,
        recipe_name: &str,
    ) -> Result<DetailResponse, ClientError>;
}

pub fn search_url(base_url: &str) -> Result<Url, ClientError> {
    parse_url(&format!("{}/search", base_url.trim_end_matches('/')))
}

/// Builds `{base}/recipe/{data_structure}/{name}` with both segments encoded.
pub fn detail_url(
    base_url: &str,
    data_structure: &str,
    recipe_name: &str,
) -> Result<Url, ClientError> {
    parse_url(&format!(
        "{}/recipe/{}/{}",
        base_url.trim_end_matches('/'),
        utf8_percent_encode(data_structure, PATH_COMPONENT),
        utf8_percent_encode(recipe_name, PATH_COMPONENT),
    ))
}

fn parse_url(raw: &str) -> Result<Url, ClientError> {
    Url::parse(raw).map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))
}

#[derive(Debug, Clone)]
pub struct ReqwestRecipeClient {
    settings: ClientSettings,
}

impl ReqwestRecipeClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ClientError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(
                self.settings.redirect_limit,
            ))
            .build()
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))
    }

    /// Collects the body, refusing anything above `max_bytes`.
    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, ClientError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(ClientError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(ClientError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl RecipeClient for ReqwestRecipeClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ClientError> {
        let url = search_url(&self.settings.base_url)?;
        let body = serde_json::to_vec(request)
            .map_err(|err| ClientError::new(FailureKind::Decode, err.to_string()))?;
        let client = self.build_client()?;

        finder_debug!(
            "POST {} ingredients={} tags={} sort_by={} data_structure={}",
            url,
            request.ingredients.len(),
            request.tags.len(),
            request.sort_by,
            request.data_structure
        );
        let response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = self.read_body(response).await?;
        serde_json::from_slice(&bytes).map_err(|err| {
            finder_warn!("search response did not parse: {}", err);
            ClientError::new(FailureKind::Decode, err.to_string())
        })
    }

    async fn recipe_detail(
        &self,
        data_structure: &str,
        recipe_name: &str,
    ) -> Result<DetailResponse, ClientError> {
        let url = detail_url(&self.settings.base_url, data_structure, recipe_name)?;
        let client = self.build_client()?;

        finder_debug!("GET {}", url);
        let response = client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // The service reports unknown recipes as a 404 carrying `{"error": ...}`,
        // so the body is inspected before the status.
        let status = response.status();
        let bytes = self.read_body(response).await?;
        match serde_json::from_slice::<DetailResponse>(&bytes) {
            Ok(rejected @ DetailResponse::Rejected { .. }) => Ok(rejected),
            Ok(found) if status.is_success() => Ok(found),
            Err(err) if status.is_success() => {
                finder_warn!("detail response did not parse: {}", err);
                Err(ClientError::new(FailureKind::Decode, err.to_string()))
            }
            _ => Err(ClientError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            )),
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return ClientError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    ClientError::new(FailureKind::Network, err.to_string())
}
