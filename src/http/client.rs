use std::future::Future;
use std::time::Duration;

use log::debug;
use reqwest::{Client, header};

use crate::api::request::ApiRequest;
use crate::config::{ClientSettings, Credentials};
use crate::errors::ClientError;

/// Status code and body of a finished request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Performs authenticated GET requests against the service
pub trait Transport {
    /// Base URL requests are resolved against, used in error reports
    fn base_url(&self) -> &str;

    fn get(
        &self,
        request: &ApiRequest,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<RawResponse, ClientError>> + Send;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        let client = Self::build_client(&settings.user_agent, settings.timeout_secs).map_err(|e| {
            ClientError::Transport {
                url: settings.api_base_url.clone(),
                source: Box::new(e),
            }
        })?;

        Ok(Self {
            client,
            base_url: settings.api_base_url.clone(),
        })
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> reqwest::Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
    }

    async fn send_get_request(
        &self,
        url: &str,
        request: &ApiRequest,
        credentials: &Credentials,
    ) -> reqwest::Result<RawResponse> {
        let response = self
            .client
            .get(url)
            .basic_auth(&credentials.username, Some(credentials.api_key()))
            .header(header::ACCEPT, request.format.mime_type())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

impl Transport for HttpTransport {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, request: &ApiRequest, credentials: &Credentials) -> Result<RawResponse, ClientError> {
        let url = request.to_url(&self.base_url);
        debug!("GET {}", url);

        self.send_get_request(&url, request, credentials)
            .await
            .map_err(|e| ClientError::Transport {
                url,
                source: Box::new(e),
            })
    }
}
