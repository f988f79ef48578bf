//! Main iControl REST client implementation.

use crate::api::{DevicesApi, UtilApi};
use f5ops_core::{F5Error, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for one appliance's iControl REST interface
#[derive(Clone, Debug)]
pub struct F5Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http: HttpClient,
    base_url: String,
    username: String,
    password: String,
    timeout: Duration,
}

impl F5Client {
    /// Create a builder for the given management host and credentials
    #[must_use]
    pub fn builder(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> F5ClientBuilder {
        F5ClientBuilder::new(host, username, password)
    }

    /// Access the BIG-IQ device inventory endpoints
    #[must_use]
    pub fn devices(&self) -> DevicesApi<'_> {
        DevicesApi::new(self)
    }

    /// Access the BIG-IP `util` endpoints (ad-hoc bash/tmsh execution)
    #[must_use]
    pub fn util(&self) -> UtilApi<'_> {
        UtilApi::new(self)
    }

    /// The management host this client talks to
    #[must_use]
    pub fn host(&self) -> &str {
        self.inner
            .base_url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
    }

    /// Perform a GET request with query parameters
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.build_url(path, params);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .basic_auth(&self.inner.username, Some(&self.inner.password))
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        self.handle_response(response).await
    }

    /// Perform a POST request with JSON body
    pub(crate) async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path, &[]);
        debug!(url = %url, "POST request");

        let response = self
            .inner
            .http
            .post(&url)
            .basic_auth(&self.inner.username, Some(&self.inner.password))
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        self.handle_response(response).await
    }

    /// Build a URL with query parameters
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.inner.base_url, path);

        for (i, (key, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }

    fn transport_error(&self, e: &reqwest::Error) -> F5Error {
        if e.is_timeout() {
            F5Error::Timeout(self.inner.timeout.as_secs())
        } else {
            F5Error::Http(e.to_string())
        }
    }

    /// Handle an API response that returns JSON
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| F5Error::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(F5Error::Json)
        } else {
            Self::handle_error(status.as_u16(), response).await
        }
    }

    /// Convert a non-2xx response to an `F5Error`
    async fn handle_error<T>(status: u16, response: reqwest::Response) -> Result<T> {
        let body = response.text().await.unwrap_or_default();

        match status {
            401 => {
                warn!("appliance rejected credentials");
                Err(F5Error::Unauthorized)
            }
            _ => Err(F5Error::Api {
                code: status,
                message: body,
            }),
        }
    }
}

/// Builder for configuring an [`F5Client`]
pub struct F5ClientBuilder {
    base_url: String,
    username: String,
    password: String,
    timeout: Duration,
    verify_tls: bool,
    user_agent: String,
}

impl F5ClientBuilder {
    /// Create a new builder for the given management host.
    ///
    /// `host` is an IP or hostname; a full `http(s)://` URL is also
    /// accepted and used as-is (handy for tests).
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let host = host.into();
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host
        } else {
            format!("https://{host}")
        };

        Self {
            base_url,
            username: username.into(),
            password: password.into(),
            timeout: DEFAULT_TIMEOUT,
            verify_tls: true,
            user_agent: format!("f5ops/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Disable TLS certificate verification.
    ///
    /// Most appliances ship with a self-signed device certificate, so
    /// operators often need this - but verification stays on unless asked.
    #[must_use]
    pub fn insecure(mut self, insecure: bool) -> Self {
        self.verify_tls = !insecure;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<F5Client> {
        url::Url::parse(&self.base_url)
            .map_err(|e| F5Error::InvalidUrl(format!("{}: {e}", self.base_url)))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .danger_accept_invalid_certs(!self.verify_tls)
            .build()
            .map_err(|e| F5Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(F5Client {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.base_url,
                username: self.username,
                password: self.password,
                timeout: self.timeout,
            }),
        })
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https_scheme() {
        let builder = F5ClientBuilder::new("10.1.1.1", "admin", "pw");
        assert_eq!(builder.base_url, "https://10.1.1.1");
    }

    #[test]
    fn explicit_url_is_kept() {
        let builder = F5ClientBuilder::new("http://127.0.0.1:8080", "admin", "pw");
        assert_eq!(builder.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn malformed_host_fails_to_build() {
        let err = F5ClientBuilder::new("bad host", "admin", "pw")
            .build()
            .unwrap_err();
        assert!(matches!(err, F5Error::InvalidUrl(_)));
    }

    #[test]
    fn verification_is_on_by_default() {
        let builder = F5ClientBuilder::new("10.1.1.1", "admin", "pw");
        assert!(builder.verify_tls);
        let builder = builder.insecure(true);
        assert!(!builder.verify_tls);
    }
}
