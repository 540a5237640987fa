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

use std::env;
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let cs = cloudstack::Client::from_env()
        .expect("Failed to create a client from the environment");

    let job_id = env::args().nth(1).expect("Provide a job ID");
    let wait = env::args()
        .nth(2)
        .map(|s| s.parse::<u64>().expect("Timeout must be a number of seconds"));

    let job = match wait {
        Some(seconds) => cs
            .async_job()
            .wait(&job_id, Duration::from_secs(seconds))
            .await
            .expect("Job did not succeed"),
        None => cs
            .async_job()
            .query_async_job_result(&cloudstack::asyncjob::QueryAsyncJobResult::new(job_id))
            .await
            .expect("Cannot query the job"),
    };
    println!(
        "Status = {:?}, Command = {:?}, Result = {:?}",
        job.job_status, job.cmd, job.job_result
    );
}
