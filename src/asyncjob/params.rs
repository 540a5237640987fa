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

//! Parameters of the asynchronous job commands.

use super::protocol::{AsyncJobList, AsyncJobResult};

command_params! {
    #[doc = "Parameters of `queryAsyncJobResult`."]
    QueryAsyncJobResult {
        #[doc = "ID of the job."]
        job_id, set_job_id, with_job_id, reset_job_id: String = "jobid",
    }
}

impl QueryAsyncJobResult {
    /// Query the given job.
    pub fn new<S: Into<String>>(job_id: S) -> QueryAsyncJobResult {
        QueryAsyncJobResult::default().with_job_id(job_id)
    }
}

api_command!(QueryAsyncJobResult => AsyncJobResult, "queryAsyncJobResult");

command_params! {
    #[doc = "Parameters of `listAsyncJobs`."]
    ListAsyncJobs {
        #[doc = "Only jobs of this account."]
        account, set_account, with_account, reset_account: String = "account",
        #[doc = "Only jobs of this domain."]
        domain_id, set_domain_id, with_domain_id, reset_domain_id: String = "domainid",
        #[doc = "Include jobs of subdomains."]
        is_recursive, set_is_recursive, with_is_recursive, reset_is_recursive: bool = "isrecursive",
        #[doc = "List jobs of all accounts the caller can see."]
        list_all, set_list_all, with_list_all, reset_list_all: bool = "listall",
        #[doc = "Only jobs running on this management server."]
        management_server_id, set_management_server_id, with_management_server_id,
            reset_management_server_id: String = "managementserverid",
        #[doc = "Only jobs created after this date (`yyyy-MM-dd` or `yyyy-MM-dd HH:mm:ss`)."]
        start_date, set_start_date, with_start_date, reset_start_date: String = "startdate",
    }
}

impl ListAsyncJobs {
    /// List jobs without filters.
    pub fn new() -> ListAsyncJobs {
        ListAsyncJobs::default()
    }
}

list_command!(ListAsyncJobs => AsyncJobList, "listAsyncJobs");

#[cfg(test)]
pub mod test {
    use super::{ListAsyncJobs, QueryAsyncJobResult};
    use crate::command::{Command, ListCommand};

    #[test]
    fn test_query_params() {
        let params = QueryAsyncJobResult::new("abc");
        assert_eq!(params.job_id().as_deref(), Some("abc"));
        assert_eq!(QueryAsyncJobResult::NAME, "queryAsyncJobResult");
        assert!(!QueryAsyncJobResult::ASYNC);
        assert_eq!(
            params.params().to_url_values(),
            vec![("jobid".to_string(), "abc".to_string())]
        );
    }

    #[test]
    fn test_list_paging() {
        let mut params = ListAsyncJobs::new().with_list_all(true);
        params.set_paging(2, 50);
        assert_eq!(
            params.params().to_url_values(),
            vec![
                ("listall".to_string(), "true".to_string()),
                ("page".to_string(), "2".to_string()),
                ("pagesize".to_string(), "50".to_string()),
            ]
        );
        params.reset_list_all();
        assert_eq!(params.list_all(), None);
    }
}
