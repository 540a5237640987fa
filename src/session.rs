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

//! Session structure definition.
//!
//! The `Session` ties together the endpoint, the credentials and the
//! transport. Every command goes through
//! [execute](struct.Session.html#method.execute): sign, send, unwrap the
//! envelope, wait for the job if needed and decode the response.

use std::sync::Arc;
use std::time::Duration;

use async_stream::try_stream;
use futures::stream::Stream;
use reqwest::Url;
use serde_json::Value;

use super::asyncjob::{self, AsyncJobResult, PollPolicy};
use super::command::{Command, ListCommand, ListResponse};
use super::envelope;
use super::params::ParameterBag;
use super::quirks;
use super::signer::Credentials;
use super::transport::{ApiRequest, RequestMethod, Transport};
use super::{Error, ErrorKind, Result};

/// Page size used when walking list results.
pub const DEFAULT_PAGE_SIZE: i32 = 500;

/// Default time to wait for an asynchronous job.
pub const DEFAULT_ASYNC_TIMEOUT: Duration = Duration::from_secs(300);

/// Default time to wait for a response to a single request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy)]
struct SessionOptions {
    async_mode: bool,
    async_timeout: Duration,
    http_get_only: bool,
    poll_policy: PollPolicy,
    request_timeout: Duration,
}

/// A CloudStack API session.
///
/// Cheap to clone, all clones share the transport.
#[derive(Debug, Clone)]
pub struct Session {
    endpoint: Url,
    credentials: Arc<Credentials>,
    transport: Arc<dyn Transport>,
    options: SessionOptions,
}

impl Default for SessionOptions {
    fn default() -> SessionOptions {
        SessionOptions {
            async_mode: true,
            async_timeout: DEFAULT_ASYNC_TIMEOUT,
            http_get_only: false,
            poll_policy: PollPolicy::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Session {
    /// Create a session sending requests through the given transport.
    ///
    /// Asynchronous mode is on by default.
    pub fn new(endpoint: Url, credentials: Credentials, transport: Arc<dyn Transport>) -> Session {
        Session {
            endpoint,
            credentials: Arc::new(credentials),
            transport,
            options: SessionOptions::default(),
        }
    }

    /// API endpoint.
    #[inline]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Whether asynchronous commands wait for their jobs.
    #[inline]
    pub fn is_async(&self) -> bool {
        self.options.async_mode
    }

    /// Time to wait for an asynchronous job.
    #[inline]
    pub fn async_timeout(&self) -> Duration {
        self.options.async_timeout
    }

    /// Whether all commands are sent with GET.
    #[inline]
    pub fn is_http_get_only(&self) -> bool {
        self.options.http_get_only
    }

    /// Delays between polls of asynchronous jobs.
    #[inline]
    pub fn poll_policy(&self) -> PollPolicy {
        self.options.poll_policy
    }

    /// Time to wait for a response to a single request.
    #[inline]
    pub fn request_timeout(&self) -> Duration {
        self.options.request_timeout
    }

    /// Toggle waiting for asynchronous jobs.
    pub fn set_async(&mut self, value: bool) {
        self.options.async_mode = value;
    }

    /// Set the time to wait for an asynchronous job.
    pub fn set_async_timeout(&mut self, value: Duration) {
        self.options.async_timeout = value;
    }

    /// Set the time to wait for a response to a single request.
    ///
    /// Applies on top of any limit of the transport itself.
    pub fn set_request_timeout(&mut self, value: Duration) {
        self.options.request_timeout = value;
    }

    /// Send all commands with GET, even those that prefer POST.
    pub fn set_http_get_only(&mut self, value: bool) {
        self.options.http_get_only = value;
    }

    /// Set delays between polls of asynchronous jobs.
    pub fn set_poll_policy(&mut self, value: PollPolicy) {
        self.options.poll_policy = value;
    }

    /// Send a raw command and return the unwrapped, normalized envelope.
    ///
    /// Server errors, whether reported with an HTTP error or inside a
    /// successful response, are converted into errors.
    pub async fn request(
        &self,
        command: &str,
        params: &ParameterBag,
        method: RequestMethod,
    ) -> Result<Value> {
        let method = if self.options.http_get_only {
            RequestMethod::Get
        } else {
            method
        };
        let request = ApiRequest::new(
            method,
            self.endpoint.clone(),
            command,
            params,
            &self.credentials,
        );
        debug!("Sending {} with {:?}", command, method);

        let timeout = self.options.request_timeout;
        let response = tokio::time::timeout(timeout, self.transport.send(&request))
            .await
            .map_err(|_| {
                debug!("No response to {} within {:?}", command, timeout);
                Error::new(
                    ErrorKind::OperationTimedOut,
                    format!(
                        "No response to {} within {} seconds",
                        command,
                        timeout.as_secs_f64()
                    ),
                )
            })??;
        let success = (200..300).contains(&response.status);

        let mut value =
            match envelope::unwrap_envelope(&response.body, &envelope::response_key(command)) {
                Ok(value) => value,
                Err(err) if success => return Err(err),
                Err(_) => return Err(Error::from_status(response.status, &response.body)),
            };

        if let Some(err) = envelope::server_error(&value) {
            debug!("Command {} failed: {}", command, err);
            return Err(err.with_status(response.status));
        }

        if !success {
            return Err(Error::from_status(response.status, &response.body));
        }

        quirks::normalize(&mut value);
        Ok(value)
    }

    /// Execute a command and decode its response.
    ///
    /// For asynchronous commands in asynchronous mode the job is polled
    /// until it finishes, and its result is merged over the initial
    /// response.
    pub async fn execute<C: Command>(&self, command: &C) -> Result<C::Response> {
        let value = self.request(C::NAME, command.params(), C::METHOD).await?;

        let value = match job_id_of(&value) {
            Some(job_id) if C::ASYNC && self.options.async_mode => {
                debug!("Waiting for job {} of {}", job_id, C::NAME);
                let job = self
                    .wait_for_job(&job_id, self.options.async_timeout)
                    .await?;
                let result = job.job_result.unwrap_or(Value::Null);
                envelope::merge(value, envelope::nested_value(result, C::NESTED))
            }
            _ => envelope::nested_value(value, C::NESTED),
        };

        serde_json::from_value(value).map_err(Error::from)
    }

    /// Wait for an asynchronous job to finish.
    ///
    /// Fails with `OperationTimedOut` if the job is still running after
    /// `timeout`, and with `OperationFailed` if the job failed. In both
    /// cases the error carries the job ID.
    pub async fn wait_for_job(&self, job_id: &str, timeout: Duration) -> Result<AsyncJobResult> {
        asyncjob::wait_for_job(self, job_id, timeout, self.options.poll_policy).await
    }

    /// Stream all items of a list command, page by page.
    ///
    /// Uses the page size of the command if set, otherwise 500.
    pub fn list_all<C>(
        &self,
        command: C,
    ) -> impl Stream<Item = Result<<C::Response as ListResponse>::Item>> + Send + 'static
    where
        C: ListCommand + 'static,
        C::Response: ListResponse,
        <C::Response as ListResponse>::Item: Send + 'static,
    {
        let session = self.clone();
        let page_size = command
            .params()
            .get::<i32>("pagesize")
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let first_page = command
            .params()
            .get::<i32>("page")
            .filter(|page| *page > 0)
            .unwrap_or(1);

        try_stream! {
            let mut command = command;
            let mut page = first_page;
            let mut seen = 0usize;
            loop {
                command.set_paging(page, page_size);
                let response = session.execute(&command).await?;
                let total = response.count();
                let items = response.into_items();
                let received = items.len();
                trace!("Page {} of {} returned {} item(s)", page, C::NAME, received);
                for item in items {
                    yield item;
                }

                seen += received;
                if received < page_size as usize || (total > 0 && seen >= total) {
                    break;
                }
                page += 1;
            }
        }
    }
}

fn job_id_of(value: &Value) -> Option<String> {
    value
        .get("jobid")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(String::from)
}

static_assertions::assert_impl_all!(Session: Send, Sync, Clone);
