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

//! Blocking wrapper around the asynchronous client.
//!
//! ```rust,no_run
//! # fn list() -> cloudstack::Result<()> {
//! use cloudstack::asyncjob::ListAsyncJobs;
//!
//! let cs = cloudstack::sync::SyncClient::new(cloudstack::Client::from_env()?)?;
//! let jobs = cs.execute(&ListAsyncJobs::new())?;
//! println!("{} job(s)", jobs.count);
//! # Ok(()) }
//! ```

use std::fmt;
use std::future::Future;
use std::time::Duration;

use futures::stream::{Stream, TryStreamExt};
use tokio::runtime::{Builder as RuntimeBuilder, Runtime};

use super::asyncjob::AsyncJobResult;
use super::command::{Command, ListCommand, ListResponse};
use super::{Client, Error, ErrorKind, Result};

/// A client that blocks the calling thread until each call finishes.
pub struct SyncClient {
    inner: Client,
    runtime: Runtime,
}

impl fmt::Debug for SyncClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncClient")
            .field("inner", &self.inner)
            .finish()
    }
}

impl SyncClient {
    /// Create a blocking wrapper with its own single-threaded runtime.
    pub fn new(client: Client) -> Result<SyncClient> {
        let runtime = RuntimeBuilder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                Error::new(
                    ErrorKind::InvalidConfig,
                    format!("Cannot create a runtime: {}", e),
                )
            })?;
        Ok(SyncClient {
            inner: client,
            runtime,
        })
    }

    /// Create a blocking client from environment variables.
    #[inline]
    pub fn from_env() -> Result<SyncClient> {
        SyncClient::new(Client::from_env()?)
    }

    /// Create a blocking client from a profile in `cloudstack.yaml`.
    #[inline]
    pub fn from_config<S: AsRef<str>>(profile: S) -> Result<SyncClient> {
        SyncClient::new(Client::from_config(profile)?)
    }

    /// The wrapped asynchronous client.
    #[inline]
    pub fn client(&self) -> &Client {
        &self.inner
    }

    /// Run any future to completion on the internal runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Execute a command.
    pub fn execute<C: Command>(&self, command: &C) -> Result<C::Response> {
        self.block_on(self.inner.session().execute(command))
    }

    /// Fetch all pages of a list command.
    pub fn list_all<C>(&self, command: C) -> Result<Vec<<C::Response as ListResponse>::Item>>
    where
        C: ListCommand + 'static,
        C::Response: ListResponse,
        <C::Response as ListResponse>::Item: Send + 'static,
    {
        self.collect(self.inner.session().list_all(command))
    }

    /// Wait for an asynchronous job.
    pub fn wait_for_job<S: AsRef<str>>(
        &self,
        job_id: S,
        timeout: Duration,
    ) -> Result<AsyncJobResult> {
        self.block_on(self.inner.session().wait_for_job(job_id.as_ref(), timeout))
    }

    fn collect<S, T>(&self, stream: S) -> Result<Vec<T>>
    where
        S: Stream<Item = Result<T>>,
    {
        self.block_on(stream.try_collect())
    }
}
