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

//! Asynchronous job commands.

use std::time::Duration;

use futures::stream::Stream;

use super::super::session::Session;
use super::super::Result;
use super::params::{ListAsyncJobs, QueryAsyncJobResult};
use super::protocol::{AsyncJobList, AsyncJobResult};

/// Commands of the asynchronous job API.
#[derive(Debug, Clone)]
pub struct AsyncJobService {
    session: Session,
}

impl AsyncJobService {
    pub(crate) fn new(session: Session) -> AsyncJobService {
        AsyncJobService { session }
    }

    /// Get the current state of a job.
    pub async fn query_async_job_result(
        &self,
        params: &QueryAsyncJobResult,
    ) -> Result<AsyncJobResult> {
        self.session.execute(params).await
    }

    /// List jobs of the last day.
    pub async fn list_async_jobs(&self, params: &ListAsyncJobs) -> Result<AsyncJobList> {
        self.session.execute(params).await
    }

    /// Stream all jobs across pages.
    pub fn list_async_jobs_stream(
        &self,
        params: ListAsyncJobs,
    ) -> impl Stream<Item = Result<AsyncJobResult>> + Send + 'static {
        self.session.list_all(params)
    }

    /// Wait for a job using the session's poll policy.
    pub async fn wait<S: AsRef<str>>(
        &self,
        job_id: S,
        timeout: Duration,
    ) -> Result<AsyncJobResult> {
        self.session.wait_for_job(job_id.as_ref(), timeout).await
    }
}
