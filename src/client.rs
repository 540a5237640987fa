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

//! Client handle.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;

#[cfg(feature = "annotation")]
use super::annotation::AnnotationService;
use super::asyncjob::{AsyncJobService, PollPolicy};
#[cfg(feature = "certificate")]
use super::certificate::CertificateService;
use super::config::CloudConfig;
#[cfg(feature = "extension")]
use super::extension::ExtensionService;
#[cfg(feature = "gpu")]
use super::gpu::GpuService;
#[cfg(feature = "guest-os")]
use super::guest_os::GuestOsService;
#[cfg(feature = "region")]
use super::region::RegionService;
use super::session::Session;
#[cfg(feature = "shared-filesystem")]
use super::shared_filesystem::SharedFileSystemService;
use super::signer::Credentials;
#[cfg(feature = "storage-pool")]
use super::storage_pool::StoragePoolService;
#[cfg(feature = "swift")]
use super::swift::SwiftService;
use super::transport::{HttpTransport, Transport};
use super::{Error, ErrorKind, Result};

/// CloudStack API client.
///
/// Provides per-service accessors sharing one session. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Client {
    session: Session,
}

impl Client {
    /// Create a client for the given endpoint and API keys.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// fn client() -> cloudstack::Result<cloudstack::Client> {
    ///     cloudstack::Client::new(
    ///         "https://cloud.example.com/client/api",
    ///         "api-key",
    ///         "secret-key",
    ///         true,
    ///     )
    /// }
    /// # fn main() { client().unwrap(); }
    /// ```
    ///
    /// # See Also
    ///
    /// * [from_config](#method.from_config) to create a client from cloudstack.yaml
    /// * [from_env](#method.from_env) to create a client from environment variables
    pub fn new<U, K, S>(endpoint: U, api_key: K, secret_key: S, verify_tls: bool) -> Result<Client>
    where
        U: AsRef<str>,
        K: Into<String>,
        S: Into<String>,
    {
        let transport = Arc::new(HttpTransport::new(verify_tls)?);
        Client::with_transport(endpoint, api_key, secret_key, transport)
    }

    /// Create a client sending requests through a custom transport.
    pub fn with_transport<U, K, S>(
        endpoint: U,
        api_key: K,
        secret_key: S,
        transport: Arc<dyn Transport>,
    ) -> Result<Client>
    where
        U: AsRef<str>,
        K: Into<String>,
        S: Into<String>,
    {
        let endpoint = Url::parse(endpoint.as_ref()).map_err(|e| {
            Error::new(
                ErrorKind::InvalidConfig,
                format!("Invalid endpoint {}: {}", endpoint.as_ref(), e),
            )
        })?;
        let credentials = Credentials::new(api_key, secret_key)?;
        Ok(Client {
            session: Session::new(endpoint, credentials, transport),
        })
    }

    /// Create a client from a configuration.
    pub fn from_cloud_config(config: CloudConfig) -> Result<Client> {
        let timeout = config.async_timeout();
        let request_timeout = config.request_timeout();
        let transport = Arc::new(HttpTransport::with_timeout(
            config.verify_tls,
            request_timeout,
        )?);
        let client = Client::with_transport(
            &config.url,
            config.api_key,
            config.secret_key,
            transport,
        )?;
        Ok(client
            .with_async(config.async_mode)
            .with_async_timeout(timeout)
            .with_request_timeout(request_timeout)
            .with_http_get_only(config.http_get_only))
    }

    /// Create a client from a profile in `cloudstack.yaml`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # fn client_from_config() -> cloudstack::Result<()> {
    /// let cs = cloudstack::Client::from_config("lab")?;
    /// # Ok(()) }
    /// # fn main() { client_from_config().unwrap(); }
    /// ```
    pub fn from_config<S: AsRef<str>>(profile: S) -> Result<Client> {
        Client::from_cloud_config(CloudConfig::from_config(profile)?)
    }

    /// Create a client from `CLOUDSTACK_*` environment variables.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # fn client_from_env() -> cloudstack::Result<()> {
    /// let cs = cloudstack::Client::from_env()?;
    /// # Ok(()) }
    /// # fn main() { client_from_env().unwrap(); }
    /// ```
    pub fn from_env() -> Result<Client> {
        Client::from_cloud_config(CloudConfig::from_env()?)
    }

    /// Toggle waiting for asynchronous jobs (on by default).
    pub fn with_async(mut self, value: bool) -> Client {
        self.session.set_async(value);
        self
    }

    /// Set the time to wait for asynchronous jobs.
    pub fn with_async_timeout(mut self, value: Duration) -> Client {
        self.session.set_async_timeout(value);
        self
    }

    /// Set the time to wait for a response to a single request.
    ///
    /// The transport created by [new](#method.new) also aborts requests
    /// after `DEFAULT_REQUEST_TIMEOUT`, use
    /// [from_cloud_config](#method.from_cloud_config) or a custom transport
    /// for a longer limit.
    pub fn with_request_timeout(mut self, value: Duration) -> Client {
        self.session.set_request_timeout(value);
        self
    }

    /// Send all commands with GET.
    pub fn with_http_get_only(mut self, value: bool) -> Client {
        self.session.set_http_get_only(value);
        self
    }

    /// Set delays between polls of asynchronous jobs.
    pub fn with_poll_policy(mut self, value: PollPolicy) -> Client {
        self.session.set_poll_policy(value);
        self
    }

    /// Underlying session.
    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Asynchronous job API.
    pub fn async_job(&self) -> AsyncJobService {
        AsyncJobService::new(self.session.clone())
    }

    /// Annotation API.
    #[cfg(feature = "annotation")]
    pub fn annotation(&self) -> AnnotationService {
        AnnotationService::new(self.session.clone())
    }

    /// Certificate API.
    #[cfg(feature = "certificate")]
    pub fn certificate(&self) -> CertificateService {
        CertificateService::new(self.session.clone())
    }

    /// Extension API.
    #[cfg(feature = "extension")]
    pub fn extension(&self) -> ExtensionService {
        ExtensionService::new(self.session.clone())
    }

    /// GPU API.
    #[cfg(feature = "gpu")]
    pub fn gpu(&self) -> GpuService {
        GpuService::new(self.session.clone())
    }

    /// Guest OS API.
    #[cfg(feature = "guest-os")]
    pub fn guest_os(&self) -> GuestOsService {
        GuestOsService::new(self.session.clone())
    }

    /// Region API.
    #[cfg(feature = "region")]
    pub fn region(&self) -> RegionService {
        RegionService::new(self.session.clone())
    }

    /// Shared filesystem API.
    #[cfg(feature = "shared-filesystem")]
    pub fn shared_filesystem(&self) -> SharedFileSystemService {
        SharedFileSystemService::new(self.session.clone())
    }

    /// Storage pool API.
    #[cfg(feature = "storage-pool")]
    pub fn storage_pool(&self) -> StoragePoolService {
        StoragePoolService::new(self.session.clone())
    }

    /// Swift API.
    #[cfg(feature = "swift")]
    pub fn swift(&self) -> SwiftService {
        SwiftService::new(self.session.clone())
    }
}

static_assertions::assert_impl_all!(Client: Send, Sync, Clone);

#[cfg(test)]
pub mod test {
    use std::sync::Arc;
    use std::time::Duration;

    use super::Client;
    use crate::asyncjob::PollPolicy;
    use crate::config::CloudConfig;
    use crate::transport::fake::FakeTransport;
    use crate::ErrorKind;

    #[test]
    fn test_builders() {
        let client = Client::with_transport(
            "http://cloud.example.com/client/api",
            "key",
            "secret",
            Arc::new(FakeTransport::new()),
        )
        .unwrap()
        .with_async(false)
        .with_async_timeout(Duration::from_secs(10))
        .with_request_timeout(Duration::from_secs(20))
        .with_http_get_only(true)
        .with_poll_policy(PollPolicy::fixed(Duration::from_secs(2)));

        let session = client.session();
        assert!(!session.is_async());
        assert!(session.is_http_get_only());
        assert_eq!(session.async_timeout(), Duration::from_secs(10));
        assert_eq!(session.request_timeout(), Duration::from_secs(20));
        assert_eq!(session.poll_policy(), PollPolicy::fixed(Duration::from_secs(2)));
        assert_eq!(session.endpoint().host_str(), Some("cloud.example.com"));
    }

    #[test]
    fn test_from_cloud_config() {
        let config = CloudConfig {
            url: "https://cloud.example.com/client/api".to_string(),
            api_key: "key".to_string(),
            secret_key: "secret".to_string(),
            verify_tls: true,
            async_mode: false,
            timeout: 30,
            request_timeout: 90,
            http_get_only: true,
        };
        let client = Client::from_cloud_config(config).unwrap();
        let session = client.session();
        assert!(!session.is_async());
        assert!(session.is_http_get_only());
        assert_eq!(session.async_timeout(), Duration::from_secs(30));
        assert_eq!(session.request_timeout(), Duration::from_secs(90));
    }

    #[test]
    fn test_invalid_settings() {
        let transport = Arc::new(FakeTransport::new());
        let err = Client::with_transport("not a url", "key", "secret", transport)
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);

        let err = Client::with_transport(
            "http://cloud.example.com/client/api",
            "",
            "secret",
            Arc::new(FakeTransport::new()),
        )
        .err()
        .unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }
}
