use super::{
    errors::{Result, TrelloError},
    Arguments,
};
use crate::{
    constants::{DEFAULT_BASE_URL, FORM_CONTENT_TYPE},
    utils::build_http_client,
};
use reqwest::{header::CONTENT_TYPE, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use url::Url;

/// A client for the Trello REST API.
///
/// Every request resolves `path` against [base_url](Self::base_url), sends
/// [Arguments] in the query string together with the `key` and `token`
/// credentials, and decodes the JSON response into any caller-chosen type.
///
/// The client is cheap to clone and may be shared between tasks; the underlying
/// [reqwest::Client] pools its own connections.
///
/// # Example
/// ```no_run
/// use serde::Deserialize;
/// use trello_sdk::{Arguments, TrelloClient};
///
/// #[derive(Deserialize)]
/// struct Board {
///     id: String,
///     name: String,
/// }
///
/// # async fn run() -> trello_sdk::Result<()> {
/// let client = TrelloClient::new("TRELLO_KEY", "TRELLO_TOKEN");
///
/// let board: Board = client
///     .get("boards/4d5ea62fd76aa1136000000c", &Arguments::from([("fields", "name")]))
///     .await?;
///
/// println!("{} {}", board.id, board.name);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TrelloClient {
    http_client: Client,
    pub base_url: String,
    pub key: String,
    pub token: String,
}

impl TrelloClient {
    /// Create a client with the default transport and base URL.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized, as [reqwest::Client::new] does.
    pub fn new(key: &str, token: &str) -> Self {
        Self::with_http_client(build_http_client(), key, token)
    }

    /// Create a client that sends its requests through `http_client`.
    ///
    /// Timeouts, proxies and TLS settings all come from the given client.
    pub fn with_http_client(http_client: Client, key: &str, token: &str) -> Self {
        Self {
            http_client,
            base_url: DEFAULT_BASE_URL.to_string(),
            key: key.to_string(),
            token: token.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn http_client(&self) -> &Client {
        &self.http_client
    }

    /// Send a GET request and decode the response body.
    ///
    /// Any status other than `200 OK` fails with [TrelloError::Status],
    /// carrying the response body text.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, args: &Arguments) -> Result<T> {
        let (url, request_url) = self.request_url(&Method::GET, path, args)?;
        let response = self
            .send(self.http_client.get(request_url), &Method::GET, &url)
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return match response.text().await {
                Ok(body) => Err(TrelloError::Status { url, status, body }),
                Err(source) => {
                    let source = source.without_url();
                    tracing::warn!("Failed to read rejected response from {}: {:?}", url, source);
                    Err(TrelloError::StatusBodyUnreadable {
                        url,
                        status,
                        source,
                    })
                }
            };
        }

        response
            .json()
            .await
            .map_err(|source| TrelloError::Decode {
                url,
                source: source.without_url(),
            })
    }

    /// Send a POST request and decode the buffered response body.
    ///
    /// Arguments travel in the query string; the body is empty and labelled as a form.
    pub async fn post<T: DeserializeOwned>(&self, path: &str, args: &Arguments) -> Result<T> {
        self.send_buffered(Method::POST, path, args).await
    }

    /// Send a PUT request, shaped like [post](Self::post).
    pub async fn put<T: DeserializeOwned>(&self, path: &str, args: &Arguments) -> Result<T> {
        self.send_buffered(Method::PUT, path, args).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str, args: &Arguments) -> Result<T> {
        self.send_buffered(Method::DELETE, path, args).await
    }

    async fn send_buffered<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        args: &Arguments,
    ) -> Result<T> {
        let (url, request_url) = self.request_url(&method, path, args)?;

        let mut request = self.http_client.request(method.clone(), request_url);
        if method != Method::DELETE {
            request = request.header(CONTENT_TYPE, FORM_CONTENT_TYPE);
        }

        let response = self.send(request, &method, &url).await?;
        let status = response.status();

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(source) => {
                return Err(TrelloError::Read {
                    url,
                    source: source.without_url(),
                })
            }
        };

        if status != StatusCode::OK {
            return Err(TrelloError::Status {
                url,
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        serde_json::from_slice(&bytes).map_err(|source| TrelloError::DecodeBody {
            url,
            body: String::from_utf8_lossy(&bytes).into_owned(),
            source,
        })
    }

    async fn send(&self, request: RequestBuilder, method: &Method, url: &str) -> Result<Response> {
        tracing::debug!("Trello request: {} {}", method, url);

        let response = request.send().await.map_err(|source| TrelloError::Request {
            url: url.to_string(),
            source: source.without_url(),
        })?;

        tracing::debug!("Trello response: {} {} {}", method, url, response.status());

        Ok(response)
    }

    /// Returns the credential-free URL used in logs and errors, and the full
    /// request URL with the encoded query.
    ///
    /// A query already present in `path` is kept; [Arguments] replace its
    /// values name by name, and the credentials replace both.
    fn request_url(&self, method: &Method, path: &str, args: &Arguments) -> Result<(String, Url)> {
        let raw_url = format!("{}/{}", self.base_url, path);

        let mut request_url = Url::parse(&raw_url).map_err(|source| TrelloError::InvalidRequest {
            method: method.clone(),
            url: raw_url.clone(),
            source,
        })?;

        let mut params: Arguments = request_url.query_pairs().into_owned().collect();
        for (name, values) in args {
            params.remove(name);
            params.extend(values.iter().map(|value| (name.as_str(), value.as_str())));
        }
        if !self.key.is_empty() {
            params.insert("key", self.key.as_str());
        }
        if !self.token.is_empty() {
            params.insert("token", self.token.as_str());
        }

        request_url.set_query(None);
        let url = request_url.to_string();
        if !params.is_empty() {
            request_url.set_query(Some(&params.encode()));
        }

        Ok((url, request_url))
    }
}

impl fmt::Debug for TrelloClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(secret: &str) -> &'static str {
            if secret.is_empty() {
                ""
            } else {
                "<redacted>"
            }
        }

        f.debug_struct("TrelloClient")
            .field("base_url", &self.base_url)
            .field("key", &redact(&self.key))
            .field("token", &redact(&self.token))
            .finish_non_exhaustive()
    }
}
