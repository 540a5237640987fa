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

//! JSON structures of asynchronous jobs.

#![allow(missing_docs)]

use chrono::{DateTime, FixedOffset};
use serde::de::Error as DeserError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::super::common::protocol::deser_optional_timestamp;

/// Status of an asynchronous job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobStatus {
    /// The job is still running.
    Pending,
    /// The job finished successfully.
    Succeeded,
    /// The job failed.
    Failed,
}

impl JobStatus {
    /// Status from its numeric code.
    pub fn from_code(code: i64) -> Option<JobStatus> {
        match code {
            0 => Some(JobStatus::Pending),
            1 => Some(JobStatus::Succeeded),
            2 => Some(JobStatus::Failed),
            _ => None,
        }
    }

    /// Numeric code of the status.
    pub fn code(self) -> i32 {
        match self {
            JobStatus::Pending => 0,
            JobStatus::Succeeded => 1,
            JobStatus::Failed => 2,
        }
    }

    /// Whether the job has finished.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != JobStatus::Pending
    }
}

impl<'de> Deserialize<'de> for JobStatus {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<JobStatus, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let code = match value {
            Value::Number(ref n) => n.as_i64(),
            Value::String(ref s) => s.parse().ok(),
            _ => None,
        };
        code.and_then(JobStatus::from_code)
            .ok_or_else(|| D::Error::custom(format!("invalid job status {}", value)))
    }
}

/// State of an asynchronous job.
#[derive(Debug, Clone, Deserialize)]
pub struct AsyncJobResult {
    #[serde(default, rename = "jobid")]
    pub job_id: String,
    #[serde(rename = "jobstatus")]
    pub job_status: JobStatus,
    #[serde(default, rename = "jobresultcode")]
    pub job_result_code: i32,
    #[serde(default, rename = "jobresulttype")]
    pub job_result_type: Option<String>,
    #[serde(default, rename = "jobresult")]
    pub job_result: Option<Value>,
    #[serde(default, rename = "jobinstancetype")]
    pub job_instance_type: Option<String>,
    #[serde(default, rename = "jobinstanceid")]
    pub job_instance_id: Option<String>,
    #[serde(default, rename = "jobprocstatus")]
    pub job_proc_status: Option<i32>,
    #[serde(default)]
    pub cmd: Option<String>,
    #[serde(default, rename = "accountid")]
    pub account_id: Option<String>,
    #[serde(default, rename = "userid")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "deser_optional_timestamp")]
    pub created: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "deser_optional_timestamp")]
    pub completed: Option<DateTime<FixedOffset>>,
}

list_response! {
    #[doc = "Response of `listAsyncJobs`."]
    AsyncJobList { async_jobs: AsyncJobResult = "asyncjobs" }
}

#[cfg(test)]
pub mod test {
    use serde_json::json;

    use super::{AsyncJobList, AsyncJobResult, JobStatus};

    #[test]
    fn test_job_status_codes() {
        for status in &[JobStatus::Pending, JobStatus::Succeeded, JobStatus::Failed] {
            assert_eq!(
                JobStatus::from_code(i64::from(status.code())),
                Some(*status)
            );
        }
        assert_eq!(JobStatus::from_code(3), None);
        assert!(!JobStatus::Pending.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
    }

    #[test]
    fn test_decode_finished_job() {
        let job: AsyncJobResult = serde_json::from_value(json!({
            "accountid": "a1",
            "cmd": "org.apache.cloudstack.api.command.admin.region.RemoveRegionCmd",
            "completed": "2024-05-01T10:12:13+0000",
            "created": "2024-05-01T10:12:10+0000",
            "jobid": "abc",
            "jobprocstatus": 0,
            "jobresult": {"success": true},
            "jobresultcode": 0,
            "jobresulttype": "object",
            "jobstatus": 1,
            "userid": "u1"
        }))
        .unwrap();
        assert_eq!(job.job_id, "abc");
        assert_eq!(job.job_status, JobStatus::Succeeded);
        assert_eq!(job.job_result, Some(json!({"success": true})));
        assert!(job.completed.unwrap() > job.created.unwrap());
    }

    #[test]
    fn test_decode_pending_job() {
        let job: AsyncJobResult =
            serde_json::from_value(json!({"jobid": "abc", "jobstatus": "0"})).unwrap();
        assert_eq!(job.job_status, JobStatus::Pending);
        assert!(job.job_result.is_none());
        assert!(job.completed.is_none());
    }

    #[test]
    fn test_decode_invalid_status() {
        assert!(serde_json::from_value::<AsyncJobResult>(json!({"jobstatus": 7})).is_err());
        assert!(serde_json::from_value::<AsyncJobResult>(json!({"jobid": "abc"})).is_err());
    }

    #[test]
    fn test_decode_list() {
        let list: AsyncJobList = serde_json::from_value(json!({
            "count": 2,
            "asyncjobs": [
                {"jobid": "a", "jobstatus": 0},
                {"jobid": "b", "jobstatus": 2}
            ]
        }))
        .unwrap();
        assert_eq!(list.count, 2);
        assert_eq!(list.async_jobs.len(), 2);
        assert_eq!(list.async_jobs[1].job_status, JobStatus::Failed);

        let empty: AsyncJobList = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.count, 0);
        assert!(empty.async_jobs.is_empty());
    }
}
