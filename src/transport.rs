// Copyright 2026 The cloudstack-rs Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HTTP transport for signed API requests.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Url};

use super::params::ParameterBag;
use super::session::DEFAULT_REQUEST_TIMEOUT;
use super::signer::{self, Credentials};
use super::{Error, ErrorKind, Result};

/// Parameters that are always set by the client itself.
const RESERVED: &[&str] = &["apikey", "command", "response", "signature"];

/// Longest time to wait for a connection to be established.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP method used for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    /// Parameters are sent in the query string.
    Get,
    /// Parameters are sent as a form body.
    Post,
}

/// A fully signed API request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: RequestMethod,
    endpoint: Url,
    command: String,
    params: Vec<(String, String)>,
    query: String,
    signature: String,
}

/// A raw response as received from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

/// Something that can deliver a signed request to the management server.
///
/// The default implementation is [HttpTransport](struct.HttpTransport.html).
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    /// Send the request and return the raw response.
    ///
    /// Only failures to talk to the server are reported as errors, any
    /// HTTP status is a valid response.
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse>;
}

/// Transport using a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: HttpClient,
}

impl ApiRequest {
    /// Build and sign a request.
    pub fn new(
        method: RequestMethod,
        endpoint: Url,
        command: &str,
        params: &ParameterBag,
        credentials: &Credentials,
    ) -> ApiRequest {
        let mut pairs = params.to_url_values();
        pairs.retain(|(name, _)| !RESERVED.contains(&name.to_lowercase().as_str()));
        pairs.push(("apiKey".to_string(), credentials.api_key().to_string()));
        pairs.push(("command".to_string(), command.to_string()));
        pairs.push(("response".to_string(), "json".to_string()));
        signer::sort_params(&mut pairs);

        let query = signer::canonical_query(&pairs);
        let signature = credentials.sign(&query);
        ApiRequest {
            method,
            endpoint,
            command: command.to_string(),
            params: pairs,
            query,
            signature,
        }
    }

    /// HTTP method to use.
    #[inline]
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// Command name.
    #[inline]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// API endpoint the request is sent to.
    #[inline]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The request signature (not percent-encoded).
    #[inline]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Canonical query string the signature was computed over.
    #[inline]
    pub fn canonical_query(&self) -> &str {
        &self.query
    }

    /// Value of a parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All parameters in the signed order, excluding the signature.
    #[inline]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Parameters of a form body, including the signature.
    pub fn form(&self) -> Vec<(String, String)> {
        let mut result = self.params.clone();
        result.push(("signature".to_string(), self.signature.clone()));
        result
    }

    /// Full URL of a GET request.
    pub fn url(&self) -> Result<Url> {
        let mut base = self.endpoint.as_str().to_string();
        base.push(if base.contains('?') { '&' } else { '?' });
        base.push_str(&self.query);
        base.push_str("&signature=");
        base.push_str(&signer::encode_value(&self.signature));
        Url::parse(&base).map_err(|e| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("Cannot build request URL: {}", e),
            )
        })
    }
}

impl HttpTransport {
    /// Create a transport, optionally skipping TLS certificate verification.
    ///
    /// Requests are aborted after `DEFAULT_REQUEST_TIMEOUT`.
    #[inline]
    pub fn new(verify_tls: bool) -> Result<HttpTransport> {
        HttpTransport::with_timeout(verify_tls, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a transport aborting requests after the given timeout.
    pub fn with_timeout(verify_tls: bool, timeout: Duration) -> Result<HttpTransport> {
        let builder = HttpClient::builder()
            .gzip(true)
            .timeout(timeout)
            .connect_timeout(timeout.min(CONNECT_TIMEOUT));
        let builder = if verify_tls {
            builder
        } else {
            warn!("TLS certificate verification is disabled");
            disable_verification(builder)
        };
        Ok(HttpTransport {
            client: builder.build()?,
        })
    }

    /// Use an existing `reqwest` client.
    pub fn from_client(client: HttpClient) -> HttpTransport {
        HttpTransport { client }
    }
}

#[cfg(any(feature = "native-tls", feature = "rustls"))]
fn disable_verification(builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder {
    builder.danger_accept_invalid_certs(true)
}

#[cfg(not(any(feature = "native-tls", feature = "rustls")))]
fn disable_verification(builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder {
    warn!("Built without TLS support, the verification flag has no effect");
    builder
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse> {
        let builder = match request.method() {
            RequestMethod::Get => self.client.get(request.url()?),
            RequestMethod::Post => self
                .client
                .post(request.endpoint().clone())
                .form(&request.form()),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        trace!(
            "Command {} returned HTTP {}: {}",
            request.command(),
            status,
            body
        );
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Scripted transport for unit tests.

    #![allow(dead_code)]

    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::Value;

    use super::{ApiRequest, RawResponse, Transport};
    use crate::{Error, ErrorKind, Result};

    /// Replies with queued responses per command, repeating the last one.
    #[derive(Debug, Default)]
    pub struct FakeTransport {
        responses: Mutex<HashMap<String, VecDeque<RawResponse>>>,
        requests: Mutex<Vec<ApiRequest>>,
    }

    impl FakeTransport {
        pub fn new() -> FakeTransport {
            FakeTransport::default()
        }

        /// Queue a successful response wrapped into the command envelope.
        pub fn reply(&self, command: &str, inner: Value) -> &FakeTransport {
            let mut body = serde_json::Map::new();
            let _ = body.insert(format!("{}response", command.to_lowercase()), inner);
            self.reply_raw(command, 200, Value::Object(body).to_string())
        }

        /// Queue a raw response.
        pub fn reply_raw(&self, command: &str, status: u16, body: String) -> &FakeTransport {
            self.responses
                .lock()
                .unwrap()
                .entry(command.to_string())
                .or_default()
                .push_back(RawResponse { status, body });
            self
        }

        /// All requests sent so far.
        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// Number of requests sent for the command.
        pub fn count(&self, command: &str) -> usize {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.command() == command)
                .count()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn send(&self, request: &ApiRequest) -> Result<RawResponse> {
            self.requests.lock().unwrap().push(request.clone());
            let mut responses = self.responses.lock().unwrap();
            let queue = responses.get_mut(request.command()).ok_or_else(|| {
                Error::new(
                    ErrorKind::ProtocolError,
                    format!("No response scripted for {}", request.command()),
                )
            })?;
            let response = if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            };
            response.ok_or_else(|| Error::new(ErrorKind::ProtocolError, "Empty script"))
        }
    }
}
