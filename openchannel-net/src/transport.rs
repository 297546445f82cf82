// openchannel-net/src/transport.rs
// The single seam between the client and the network: one request in, one
// `(status, body)` pair out.
use std::fmt;

use openchannel_common::error::{OcError, Result};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use tracing::debug;
use url::Url;

const USER_AGENT_STRING: &str = "openchannel-rs (Rust; +https://market.openchannel.io)";

/// HTTP Basic credentials: marketplace id as user name, secret as password.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    /// Serialized JSON, sent as `application/json`.
    Json(String),
    /// A single multipart part whose field name and file name are both `filename`.
    Multipart { filename: String, bytes: Vec<u8> },
}

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub body: RequestBody,
    pub auth: BasicAuth,
}

impl ApiRequest {
    /// The JSON body as text, if this request carries one.
    pub fn json_body(&self) -> Option<&str> {
        match &self.body {
            RequestBody::Json(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

pub trait Transport {
    /// Performs one HTTP exchange. Transport failures are errors; every HTTP
    /// status, including non-2xx, is a successful exchange.
    fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        (**self).send(request)
    }
}

/// Blocking `reqwest` transport. Timeouts are left at reqwest's defaults.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: HttpClient,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: build_http_client()?,
        })
    }

    pub fn from_client(client: HttpClient) -> Self {
        Self { client }
    }
}

fn build_http_client() -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STRING));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    HttpClient::builder()
        .default_headers(headers)
        .build()
        .map_err(OcError::from)
}

impl Transport for HttpTransport {
    fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let ApiRequest {
            method,
            url,
            body,
            auth,
        } = request;

        let builder = self
            .client
            .request(method.clone(), url.clone())
            .basic_auth(auth.username, Some(auth.password));

        let builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(text) => builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(text),
            RequestBody::Multipart { filename, bytes } => {
                let part = Part::bytes(bytes).file_name(filename.clone());
                builder.multipart(Form::new().part(filename, part))
            }
        };

        let response = builder.send().map_err(|e| {
            debug!("HTTP request failed for {} {}: {}", method, url, e);
            OcError::from(e)
        })?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(ApiResponse { status, body })
    }
}
