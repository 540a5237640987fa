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

//! Polling of asynchronous jobs.

use std::time::Duration;

use serde_json::Value;
use tokio::time::{sleep, Instant};

use super::super::command::Command;
use super::super::session::Session;
use super::super::{Error, ErrorKind, Result};
use super::params::QueryAsyncJobResult;
use super::protocol::{AsyncJobResult, JobStatus};

/// Shortest delay between two polls of the same job.
pub const MIN_POLL_DELAY: Duration = Duration::from_millis(100);

/// Delays between polls of an asynchronous job.
///
/// The delay starts at `initial_delay` and grows by `step` after every poll,
/// up to `max_delay`. Delays shorter than `MIN_POLL_DELAY` are raised to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay before the second poll.
    pub initial_delay: Duration,
    /// Increment of the delay after each poll.
    pub step: Duration,
    /// Maximum delay.
    pub max_delay: Duration,
}

impl Default for PollPolicy {
    fn default() -> PollPolicy {
        PollPolicy {
            initial_delay: Duration::from_secs(1),
            step: Duration::from_secs(1),
            max_delay: Duration::from_secs(15),
        }
    }
}

impl PollPolicy {
    /// Create a policy with a linearly growing delay.
    pub fn new(initial_delay: Duration, step: Duration, max_delay: Duration) -> PollPolicy {
        PollPolicy {
            initial_delay,
            step,
            max_delay,
        }
    }

    /// Create a policy with a constant delay.
    pub fn fixed(delay: Duration) -> PollPolicy {
        PollPolicy::new(delay, Duration::ZERO, delay)
    }

    fn first_delay(&self) -> Duration {
        self.initial_delay.min(self.max_delay).max(MIN_POLL_DELAY)
    }

    fn next_delay(&self, current: Duration) -> Duration {
        current
            .saturating_add(self.step)
            .min(self.max_delay)
            .max(MIN_POLL_DELAY)
    }
}

/// Poll the job until it finishes or the timeout expires.
///
/// Returns the final state of a successful job. The job is left running
/// on timeout. A timeout too large to be represented means no deadline.
pub(crate) async fn wait_for_job(
    session: &Session,
    job_id: &str,
    timeout: Duration,
    policy: PollPolicy,
) -> Result<AsyncJobResult> {
    let deadline = Instant::now().checked_add(timeout);
    if deadline.is_none() {
        debug!("Waiting for job {} without a deadline", job_id);
    }
    let query = QueryAsyncJobResult::new(job_id);
    let mut delay = policy.first_delay();
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        let value = session
            .request(
                QueryAsyncJobResult::NAME,
                query.params(),
                QueryAsyncJobResult::METHOD,
            )
            .await?;
        let job: AsyncJobResult = serde_json::from_value(value)?;

        match job.job_status {
            JobStatus::Succeeded => {
                debug!("Job {} succeeded after {} poll(s)", job_id, attempt);
                return Ok(job);
            }
            JobStatus::Failed => {
                debug!("Job {} failed after {} poll(s)", job_id, attempt);
                return Err(job_failure(job_id, &job));
            }
            JobStatus::Pending => {}
        }

        let pause = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    debug!("Giving up on job {} after {} poll(s)", job_id, attempt);
                    return Err(Error::new(
                        ErrorKind::OperationTimedOut,
                        format!(
                            "Timeout waiting for job {} to finish after {} seconds",
                            job_id,
                            timeout.as_secs_f64()
                        ),
                    )
                    .with_job_id(job_id));
                }
                delay.min(deadline - now)
            }
            None => delay,
        };
        trace!(
            "Job {} is still pending, next poll in {:?}",
            job_id,
            pause
        );
        sleep(pause).await;
        delay = policy.next_delay(delay);
    }
}

fn job_failure(job_id: &str, job: &AsyncJobResult) -> Error {
    let (code, text) = match job.job_result {
        Some(Value::Object(ref map)) => (
            map.get("errorcode")
                .and_then(Value::as_i64)
                .and_then(|c| i32::try_from(c).ok()),
            map.get("errortext")
                .and_then(Value::as_str)
                .map(String::from),
        ),
        Some(Value::String(ref text)) => (None, Some(text.clone())),
        _ => (None, None),
    };

    let text = text.unwrap_or_else(|| {
        format!(
            "Job {} failed with result code {}",
            job_id, job.job_result_code
        )
    });
    let err = Error::new(ErrorKind::OperationFailed, text).with_job_id(job_id);
    match code {
        Some(code) => err.with_error_code(code),
        None => err,
    }
}

#[cfg(test)]
pub mod test {
    use std::sync::Arc;
    use std::time::Duration;

    use serde_json::json;
    use tokio::time::Instant;

    use super::{wait_for_job, JobStatus, PollPolicy, MIN_POLL_DELAY};
    use crate::session::test::new_session;
    use crate::transport::fake::FakeTransport;
    use crate::ErrorKind;

    const QUERY: &str = "queryAsyncJobResult";

    fn pending() -> serde_json::Value {
        json!({"jobid": "abc", "jobstatus": 0, "jobprocstatus": 0, "jobresultcode": 0})
    }

    #[test]
    fn test_policy_delays() {
        let policy = PollPolicy::default();
        let mut delay = policy.first_delay();
        let mut seen = Vec::new();
        for _ in 0..17 {
            seen.push(delay.as_secs());
            delay = policy.next_delay(delay);
        }
        assert_eq!(seen[..4], [1, 2, 3, 4]);
        assert_eq!(seen[16], 15);

        let fixed = PollPolicy::fixed(Duration::from_millis(500));
        assert_eq!(fixed.next_delay(fixed.first_delay()), Duration::from_millis(500));

        let zero = PollPolicy::fixed(Duration::ZERO);
        assert_eq!(zero.first_delay(), MIN_POLL_DELAY);
        assert_eq!(zero.next_delay(zero.first_delay()), MIN_POLL_DELAY);

        let huge = PollPolicy::new(Duration::MAX, Duration::MAX, Duration::MAX);
        assert_eq!(huge.next_delay(huge.first_delay()), Duration::MAX);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_still_sleeps() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply(QUERY, pending());
        let session = new_session(transport.clone());

        let err = wait_for_job(
            &session,
            "abc",
            Duration::from_secs(1),
            PollPolicy::fixed(Duration::ZERO),
        )
        .await
        .err()
        .unwrap();
        assert_eq!(err.kind(), ErrorKind::OperationTimedOut);
        // One poll every 100 ms, from 0 to 1 second inclusive.
        assert_eq!(transport.count(QUERY), 11);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unbounded_timeout() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply(QUERY, pending());
        transport.reply(
            QUERY,
            json!({"jobid": "abc", "jobstatus": 1, "jobresult": {"success": true}}),
        );
        let session = new_session(transport.clone());

        let job = wait_for_job(&session, "abc", Duration::MAX, PollPolicy::default())
            .await
            .unwrap();
        assert_eq!(job.job_status, JobStatus::Succeeded);
        assert_eq!(transport.count(QUERY), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_after_pending() {
        let transport = Arc::new(FakeTransport::new());
        for _ in 0..3 {
            transport.reply(QUERY, pending());
        }
        transport.reply(
            QUERY,
            json!({"jobid": "abc", "jobstatus": 1, "jobresult": {"success": "true"}}),
        );
        let session = new_session(transport.clone());

        let job = wait_for_job(&session, "abc", Duration::from_secs(60), PollPolicy::default())
            .await
            .unwrap();
        assert_eq!(job.job_result, Some(json!({"success": true})));
        assert_eq!(transport.count(QUERY), 4);
        for request in transport.requests() {
            assert_eq!(request.param("jobid"), Some("abc"));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply(QUERY, pending());
        let session = new_session(transport.clone());
        let timeout = Duration::from_secs(10);

        let started = Instant::now();
        let err = wait_for_job(&session, "abc", timeout, PollPolicy::default())
            .await
            .err()
            .unwrap();
        let elapsed = started.elapsed();

        assert_eq!(err.kind(), ErrorKind::OperationTimedOut);
        assert_eq!(err.job_id(), Some("abc"));
        assert!(elapsed >= timeout);
        assert!(elapsed < timeout + Duration::from_secs(1));
        // Polls at 0, 1, 3, 6 and 10 seconds.
        assert_eq!(transport.count(QUERY), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply(QUERY, pending());
        transport.reply(
            QUERY,
            json!({
                "jobid": "abc",
                "jobstatus": 2,
                "jobresultcode": 530,
                "jobresult": {"errorcode": 530, "errortext": "Region is in use"}
            }),
        );
        let session = new_session(transport.clone());

        let err = wait_for_job(&session, "abc", Duration::from_secs(60), PollPolicy::default())
            .await
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::OperationFailed);
        assert_eq!(err.message(), Some("Region is in use"));
        assert_eq!(err.error_code(), Some(530));
        assert_eq!(err.job_id(), Some("abc"));
        assert_eq!(transport.count(QUERY), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_without_details() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply(
            QUERY,
            json!({"jobid": "abc", "jobstatus": 2, "jobresultcode": 530}),
        );
        let session = new_session(transport);

        let err = wait_for_job(&session, "abc", Duration::from_secs(60), PollPolicy::default())
            .await
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::OperationFailed);
        assert!(err.message().unwrap().contains("530"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_error_is_not_retried() {
        let transport = Arc::new(FakeTransport::new());
        let session = new_session(transport.clone());

        let err = wait_for_job(&session, "abc", Duration::from_secs(60), PollPolicy::default())
            .await
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::ProtocolError);
        assert_eq!(transport.count(QUERY), 1);
    }
}
