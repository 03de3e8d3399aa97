//! HTTP client for the Resource Manager API.

use std::collections::HashSet;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::SdkError;

/// The public-cloud Resource Manager endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://management.azure.com";

const API_VERSION_PARAM: &str = "api-version";

/// Options for building an [`ArmClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Resource Manager endpoint, without a trailing slash.
    pub endpoint: String,
    /// Bearer token sent with every request.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: None,
            timeout: Duration::from_secs(60),
        }
    }
}

/// One page of a list operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub value: Vec<T>,
    #[serde(default)]
    pub next_link: Option<String>,
}

impl<T> Page<T> {
    /// The link to the next page, if there is one.
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref().filter(|link| !link.is_empty())
    }
}

/// Resource Manager API client shared by every operation client.
#[derive(Debug, Clone)]
pub struct ArmClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ArmClient {
    /// Create a new client from options.
    pub fn new(options: ClientOptions) -> Result<Self, SdkError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("armkit/", env!("CARGO_PKG_VERSION"))),
        );

        if let Some(token) = options.token.as_deref() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| SdkError::Config("invalid token format".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(options.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: options.endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build a URL for a resource path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    /// Make a GET request.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        api_version: &str,
    ) -> Result<T, SdkError> {
        let url = self.url(path);
        debug!(method = "GET", url = %url, api_version, "Sending request");
        let request = self
            .client
            .get(&url)
            .query(&[(API_VERSION_PARAM, api_version)]);
        let body = self.execute(request, "GET", &url).await?;
        decode(&body)
    }

    /// Make a GET request to an absolute URL, such as a `nextLink`.
    pub async fn get_url<T: DeserializeOwned>(&self, url: &str) -> Result<T, SdkError> {
        debug!(method = "GET", url = %url, "Sending request");
        let request = self.client.get(url);
        let body = self.execute(request, "GET", url).await?;
        decode(&body)
    }

    /// Make a PUT request.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        api_version: &str,
        body: &B,
    ) -> Result<T, SdkError> {
        let url = self.url(path);
        debug!(method = "PUT", url = %url, api_version, "Sending request");
        let request = self
            .client
            .put(&url)
            .query(&[(API_VERSION_PARAM, api_version)])
            .json(body);
        let body = self.execute(request, "PUT", &url).await?;
        decode(&body)
    }

    /// Make a PATCH request.
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        api_version: &str,
        body: &B,
    ) -> Result<T, SdkError> {
        let url = self.url(path);
        debug!(method = "PATCH", url = %url, api_version, "Sending request");
        let request = self
            .client
            .patch(&url)
            .query(&[(API_VERSION_PARAM, api_version)])
            .json(body);
        let body = self.execute(request, "PATCH", &url).await?;
        decode(&body)
    }

    /// Make a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        api_version: &str,
        body: &B,
    ) -> Result<T, SdkError> {
        let url = self.url(path);
        debug!(method = "POST", url = %url, api_version, "Sending request");
        let request = self
            .client
            .post(&url)
            .query(&[(API_VERSION_PARAM, api_version)])
            .json(body);
        let body = self.execute(request, "POST", &url).await?;
        decode(&body)
    }

    /// Make a POST request without a body, as used by `list*` actions.
    pub async fn post_action<T: DeserializeOwned>(
        &self,
        path: &str,
        api_version: &str,
    ) -> Result<T, SdkError> {
        let url = self.url(path);
        debug!(method = "POST", url = %url, api_version, "Sending request");
        let request = self
            .client
            .post(&url)
            .query(&[(API_VERSION_PARAM, api_version)]);
        let body = self.execute(request, "POST", &url).await?;
        decode(&body)
    }

    /// Make a DELETE request. Any success status, including 204, is accepted.
    pub async fn delete(&self, path: &str, api_version: &str) -> Result<(), SdkError> {
        let url = self.url(path);
        debug!(method = "DELETE", url = %url, api_version, "Sending request");
        let request = self
            .client
            .delete(&url)
            .query(&[(API_VERSION_PARAM, api_version)]);
        self.execute(request, "DELETE", &url).await?;
        Ok(())
    }

    /// List every item under `path`, following `nextLink` until exhausted.
    ///
    /// Fails with [`SdkError::Pagination`] if a link repeats.
    pub async fn list_all<T: DeserializeOwned>(
        &self,
        path: &str,
        api_version: &str,
    ) -> Result<Vec<T>, SdkError> {
        let mut page: Page<T> = self.get(path, api_version).await?;
        let mut items = Vec::new();
        let mut seen = HashSet::new();

        loop {
            let next = page.next_link().map(str::to_string);
            items.extend(page.value);

            let Some(next) = next else {
                break;
            };
            if !seen.insert(next.clone()) {
                error!(next_link = %next, fetched = items.len(), "nextLink repeated");
                return Err(SdkError::Pagination(next));
            }
            debug!(next_link = %next, fetched = items.len(), "Following nextLink");
            page = self.get_url(&next).await?;
        }

        Ok(items)
    }

    /// Send a request and return the body of a successful response.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<String, SdkError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            debug!(method, url, status = %status, "Request succeeded");
            return Ok(body);
        }

        error!(method, url, status = %status, body = %body, "Request failed");
        Err(SdkError::from_response_body(status.as_u16(), &body))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, SdkError> {
    Ok(serde_json::from_str(body)?)
}
