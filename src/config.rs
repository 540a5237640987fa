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

//! Client configuration from the environment or a configuration file.
//!
//! The configuration file is `cloudstack.yaml`, looked up in the current
//! directory, `~/.config/cloudstack/` and `/etc/cloudstack/` (or taken from
//! `CLOUDSTACK_CONFIG`):
//!
//! ```yaml
//! profiles:
//!   lab:
//!     url: https://cloud.example.com/client/api
//!     apikey: <api key>
//!     secretkey: <secret key>
//!     verifyssl: false
//!     timeout: 600
//!     requesttimeout: 120
//! ```

use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::session::{DEFAULT_ASYNC_TIMEOUT, DEFAULT_REQUEST_TIMEOUT};
use super::{Error, ErrorKind, Result};

const CONFIG_FILE: &str = "cloudstack.yaml";

/// Settings needed to create a client.
#[derive(Clone, Deserialize)]
pub struct CloudConfig {
    /// API endpoint, e.g. `https://cloud.example.com/client/api`.
    pub url: String,
    /// API key.
    #[serde(rename = "apikey")]
    pub api_key: String,
    /// Secret key.
    #[serde(rename = "secretkey")]
    pub secret_key: String,
    /// Whether to verify TLS certificates.
    #[serde(default = "default_true", rename = "verifyssl")]
    pub verify_tls: bool,
    /// Whether asynchronous commands wait for their jobs.
    #[serde(default = "default_true", rename = "async")]
    pub async_mode: bool,
    /// Time to wait for an asynchronous job, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Time to wait for a response to a single request, in seconds.
    #[serde(default = "default_request_timeout", rename = "requesttimeout")]
    pub request_timeout: u64,
    /// Send all commands with GET.
    #[serde(default)]
    pub http_get_only: bool,
}

#[derive(Debug, Deserialize)]
struct Root {
    profiles: HashMap<String, CloudConfig>,
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    DEFAULT_ASYNC_TIMEOUT.as_secs()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT.as_secs()
}

impl ::std::fmt::Debug for CloudConfig {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.debug_struct("CloudConfig")
            .field("url", &self.url)
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .field("verify_tls", &self.verify_tls)
            .field("async_mode", &self.async_mode)
            .field("timeout", &self.timeout)
            .field("request_timeout", &self.request_timeout)
            .field("http_get_only", &self.http_get_only)
            .finish()
    }
}

impl CloudConfig {
    /// Time to wait for an asynchronous job.
    #[inline]
    pub fn async_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Time to wait for a response to a single request.
    #[inline]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Read the configuration from `CLOUDSTACK_*` environment variables.
    pub fn from_env() -> Result<CloudConfig> {
        CloudConfig::from_lookup(|name| env::var(name).ok())
    }

    /// Read a profile from the configuration file.
    pub fn from_config<S: AsRef<str>>(profile: S) -> Result<CloudConfig> {
        let path = find_config().ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidConfig,
                format!("{} was not found in any location", CONFIG_FILE),
            )
        })?;
        CloudConfig::from_file(path, profile)
    }

    /// Read a profile from the given file.
    pub fn from_file<P: AsRef<Path>, S: AsRef<str>>(path: P, profile: S) -> Result<CloudConfig> {
        let path = path.as_ref();
        debug!("Loading profile {} from {:?}", profile.as_ref(), path);
        let file = File::open(path).map_err(|e| {
            Error::new(
                ErrorKind::InvalidConfig,
                format!("Cannot read {:?}: {}", path, e),
            )
        })?;
        let root: Root = serde_yaml::from_reader(file).map_err(|e| {
            Error::new(
                ErrorKind::InvalidConfig,
                format!("Cannot parse {:?}: {}", path, e),
            )
        })?;
        pick_profile(root, profile.as_ref())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<CloudConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).filter(|v| !v.is_empty()).ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidConfig,
                    format!("Environment variable {} is required", name),
                )
            })
        };
        let flag = |name: &str| -> Result<bool> {
            match lookup(name) {
                Some(value) => parse_bool(name, &value),
                None => Ok(true),
            }
        };

        let seconds = |name: &str, default: u64| -> Result<u64> {
            match lookup(name) {
                Some(value) => value.trim().parse().map_err(|_| {
                    Error::new(
                        ErrorKind::InvalidConfig,
                        format!("{} must be a number of seconds, got {}", name, value),
                    )
                }),
                None => Ok(default),
            }
        };

        let timeout = seconds("CLOUDSTACK_TIMEOUT", default_timeout())?;
        let request_timeout =
            seconds("CLOUDSTACK_REQUEST_TIMEOUT", default_request_timeout())?;
        let http_get_only = match lookup("CLOUDSTACK_HTTP_GET_ONLY") {
            Some(value) => parse_bool("CLOUDSTACK_HTTP_GET_ONLY", &value)?,
            None => false,
        };

        Ok(CloudConfig {
            url: required("CLOUDSTACK_API_URL")?,
            api_key: required("CLOUDSTACK_API_KEY")?,
            secret_key: required("CLOUDSTACK_SECRET_KEY")?,
            verify_tls: flag("CLOUDSTACK_VERIFY_SSL")?,
            async_mode: flag("CLOUDSTACK_ASYNC")?,
            timeout,
            request_timeout,
            http_get_only,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::new(
            ErrorKind::InvalidConfig,
            format!("{} must be a boolean, got {}", name, value),
        )),
    }
}

fn pick_profile(mut root: Root, profile: &str) -> Result<CloudConfig> {
    root.profiles.remove(profile).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidConfig,
            format!("No such profile: {}", profile),
        )
    })
}

fn find_config() -> Option<PathBuf> {
    if let Some(path) = env::var_os("CLOUDSTACK_CONFIG") {
        let path = PathBuf::from(path);
        if path.is_file() {
            return Some(path);
        }
        warn!("CLOUDSTACK_CONFIG points to {:?} which is not a file", path);
    }

    let current = Path::new(".").join(CONFIG_FILE);
    if current.is_file() {
        match current.canonicalize() {
            Ok(val) => return Some(val),
            Err(e) => warn!("Cannot canonicalize {:?}: {}", current, e),
        }
    }

    if let Some(mut home) = dirs::home_dir() {
        home.push(".config/cloudstack");
        home.push(CONFIG_FILE);
        if home.is_file() {
            return Some(home);
        }
    } else {
        warn!("Cannot find home directory");
    }

    let abs = Path::new("/etc/cloudstack").join(CONFIG_FILE);
    if abs.is_file() {
        Some(abs)
    } else {
        None
    }
}

#[cfg(test)]
pub mod test {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::{pick_profile, CloudConfig, Root};
    use crate::ErrorKind;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("CLOUDSTACK_API_URL", "http://cloud/client/api"),
        ("CLOUDSTACK_API_KEY", "key"),
        ("CLOUDSTACK_SECRET_KEY", "secret"),
    ];

    #[test]
    fn test_env_defaults() {
        let config = CloudConfig::from_lookup(lookup(REQUIRED)).unwrap();
        assert_eq!(config.url, "http://cloud/client/api");
        assert!(config.verify_tls);
        assert!(config.async_mode);
        assert!(!config.http_get_only);
        assert_eq!(config.async_timeout(), Duration::from_secs(300));
        assert_eq!(config.request_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_env_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("CLOUDSTACK_VERIFY_SSL", "false"));
        vars.push(("CLOUDSTACK_ASYNC", "0"));
        vars.push(("CLOUDSTACK_TIMEOUT", "42"));
        vars.push(("CLOUDSTACK_HTTP_GET_ONLY", "Yes"));
        vars.push(("CLOUDSTACK_REQUEST_TIMEOUT", "15"));
        let config = CloudConfig::from_lookup(lookup(&vars)).unwrap();
        assert!(!config.verify_tls);
        assert!(!config.async_mode);
        assert!(config.http_get_only);
        assert_eq!(config.timeout, 42);
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_env_missing_or_invalid() {
        let err = CloudConfig::from_lookup(lookup(&REQUIRED[..2])).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert!(err.message().unwrap().contains("CLOUDSTACK_SECRET_KEY"));

        let mut vars = REQUIRED.to_vec();
        vars.push(("CLOUDSTACK_TIMEOUT", "soon"));
        let err = CloudConfig::from_lookup(lookup(&vars)).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);

        let mut vars = REQUIRED.to_vec();
        vars.push(("CLOUDSTACK_REQUEST_TIMEOUT", "-1"));
        let err = CloudConfig::from_lookup(lookup(&vars)).err().unwrap();
        assert!(err.message().unwrap().contains("CLOUDSTACK_REQUEST_TIMEOUT"));

        let mut vars = REQUIRED.to_vec();
        vars.push(("CLOUDSTACK_VERIFY_SSL", "maybe"));
        assert!(CloudConfig::from_lookup(lookup(&vars)).is_err());
    }

    #[test]
    fn test_profiles() {
        let root: Root = serde_yaml::from_str(
            "profiles:
  lab:
    url: https://lab/client/api
    apikey: k
    secretkey: s
    verifyssl: false
    timeout: 600
    requesttimeout: 120
  prod:
    url: https://prod/client/api
    apikey: k2
    secretkey: s2
    async: false
    http_get_only: true
",
        )
        .unwrap();
        let lab = pick_profile(root, "lab").unwrap();
        assert_eq!(lab.url, "https://lab/client/api");
        assert!(!lab.verify_tls);
        assert!(lab.async_mode);
        assert_eq!(lab.timeout, 600);
        assert_eq!(lab.request_timeout(), Duration::from_secs(120));

        let root: Root = serde_yaml::from_str(
            "profiles:\n  prod:\n    url: u\n    apikey: k\n    secretkey: s\n    async: false\n",
        )
        .unwrap();
        let err = pick_profile(root, "lab").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_debug_hides_secret() {
        let mut vars = REQUIRED[..2].to_vec();
        vars.push(("CLOUDSTACK_SECRET_KEY", "very-secret-value"));
        let config = CloudConfig::from_lookup(lookup(&vars)).unwrap();
        assert!(!format!("{:?}", config).contains("very-secret-value"));
    }
}
