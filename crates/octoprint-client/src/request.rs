use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use url::Url;

use crate::{OctoPrintError, Result};

const API_KEY_HEADER: &str = "X-Api-Key";

/// Parse a server base URL. Only absolute `http`/`https` URLs with a host
/// are accepted.
pub fn parse_server(server: &str) -> Result<Url> {
    let server = server.trim().trim_end_matches('/');
    let parsed = Url::parse(server)?;
    let has_host = parsed.host_str().is_some_and(|host| !host.is_empty());
    if !matches!(parsed.scheme(), "http" | "https") || !has_host {
        return Err(OctoPrintError::InvalidServer(server.to_string()));
    }
    Ok(parsed)
}

/// OctoPrint REST client with `X-Api-Key` header injection.
#[derive(Debug, Clone)]
pub struct OctoPrintClient {
    http: reqwest::Client,
    server: String,
    api_key: HeaderValue,
}

impl OctoPrintClient {
    /// Create a client for `server` (e.g. `http://octopi.local`).
    ///
    /// A trailing `/` is dropped so endpoint paths join cleanly. The server
    /// must pass [`parse_server`].
    pub fn new(server: &str, api_key: &str) -> Result<Self> {
        parse_server(server)?;
        let server = server.trim().trim_end_matches('/');

        let mut api_key =
            HeaderValue::from_str(api_key).map_err(|_| OctoPrintError::InvalidApiKey)?;
        api_key.set_sensitive(true);

        Ok(Self {
            http: reqwest::Client::new(),
            server: server.to_string(),
            api_key,
        })
    }

    /// Base server URL without a trailing slash.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Absolute URL for an API path such as `/api/job`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.server)
    }

    fn api_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, self.api_key.clone());
        headers
    }

    /// Execute a GET request and return the body of a 2xx response.
    pub(crate) async fn get(&self, path: &str) -> Result<String> {
        let url = self.endpoint(path);
        let resp = self.http.get(&url).headers(self.api_headers()).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "OctoPrint GET failed");
            return Err(OctoPrintError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }

    /// Execute a POST request with a JSON body. The response body is only
    /// kept for error reporting.
    pub(crate) async fn post_json(&self, path: &str, body: &impl Serialize) -> Result<()> {
        let url = self.endpoint(path);
        let resp = self
            .http
            .post(&url)
            .headers(self.api_headers())
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await?;
            tracing::debug!(url, status = status.as_u16(), "OctoPrint POST failed");
            return Err(OctoPrintError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
