// openchannel-net/src/client/mod.rs
//! Blocking client for the marketplace REST API.
//!
//! Every operation is one request: build the URL under the configured base,
//! send it with basic auth, accept only HTTP 200, parse the body. Operations
//! are grouped by resource in the submodules; they all go through the helpers
//! defined here.
use openchannel_common::config::Config;
use openchannel_common::error::{OcError, Result};
use openchannel_common::model::{Field, Record};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

use crate::clock::{Clock, SystemClock};
use crate::transport::{ApiRequest, BasicAuth, HttpTransport, RequestBody, Transport};

pub mod accounts;
pub mod apps;
pub mod files;
pub mod ownership;
pub mod stats;

pub use apps::AppStatusAction;

pub struct Client<T = HttpTransport> {
    config: Config,
    base: Url,
    auth: BasicAuth,
    transport: T,
    clock: Box<dyn Clock + Send + Sync>,
}

impl Client<HttpTransport> {
    /// A client talking to the configured marketplace over HTTPS.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_transport(config, HttpTransport::new()?)
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(config: Config, transport: T) -> Result<Self> {
        let base = config.base_url()?;
        let auth = BasicAuth {
            username: config.marketplace_id.clone(),
            password: config.secret.clone(),
        };
        debug!(
            "Created openchannel client for marketplace '{}' at {}",
            config.marketplace_id, base
        );
        Ok(Self {
            config,
            base,
            auth,
            transport,
            clock: Box::new(SystemClock),
        })
    }

    /// Replaces the clock used for default statistics windows.
    pub fn with_clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    /// `base/<segments...>?<query...>`. Segments are percent-encoded as path
    /// components, query values as form values.
    pub(crate) fn url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                OcError::ValidationError(format!("API base URL '{}' cannot take a path", self.base))
            })?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Sends one request and returns the body of a 200 response.
    pub(crate) fn execute(&self, method: Method, url: Url, body: RequestBody) -> Result<String> {
        debug!("{} {}", method, url);
        let request = ApiRequest {
            method: method.clone(),
            url: url.clone(),
            body,
            auth: self.auth.clone(),
        };
        let response = self.transport.send(request)?;
        debug!("Received HTTP status: {} for {} {}", response.status, method, url);

        if response.status != 200 {
            error!(
                "HTTP error {} for {} {}: {}",
                response.status, method, url, response.body
            );
            return Err(OcError::Api {
                code: response.status,
                body: response.body,
            });
        }
        Ok(response.body)
    }

    pub(crate) fn get_one<R: Record>(&self, url: Url) -> Result<R> {
        let body = self.execute(Method::GET, url, RequestBody::Empty)?;
        R::parse_str(&body)
    }

    pub(crate) fn get_list<R: Record>(&self, url: Url) -> Result<Vec<R>> {
        let body = self.execute(Method::GET, url, RequestBody::Empty)?;
        parse_list(&body)
    }

    pub(crate) fn post_record<R: Record, B: Record>(&self, url: Url, record: &B) -> Result<R> {
        let body = self.execute(Method::POST, url, RequestBody::Json(record.encode()?))?;
        R::parse_str(&body)
    }

    pub(crate) fn post_json<B: Serialize>(&self, url: Url, payload: &B) -> Result<String> {
        let text = serde_json::to_string(payload)?;
        self.execute(Method::POST, url, RequestBody::Json(text))
    }

    pub(crate) fn delete(&self, url: Url) -> Result<()> {
        self.execute(Method::DELETE, url, RequestBody::Empty)?;
        Ok(())
    }
}

/// Builds records from the `list` array of a collection response, in order.
pub(crate) fn parse_list<R: Record>(body: &str) -> Result<Vec<R>> {
    let mut value: Value = serde_json::from_str(body)?;
    match value.get_mut("list").map(Value::take) {
        Some(Value::Array(items)) => items.into_iter().map(R::parse).collect(),
        _ => Err(OcError::ParseError(
            "list",
            "collection response has no 'list' array".to_string(),
        )),
    }
}

/// JSON text of a query filter, falling back to `default` when none is given.
pub(crate) fn query_param(query: Option<&Value>, default: Value) -> Result<String> {
    match query {
        Some(q) => Ok(serde_json::to_string(q)?),
        None => Ok(serde_json::to_string(&default)?),
    }
}

/// The value of an identity field, or `MissingField` naming it.
pub(crate) fn require<'a, V>(field: &'a Field<V>, name: &'static str) -> Result<&'a V> {
    field.get().ok_or(OcError::MissingField(name))
}
