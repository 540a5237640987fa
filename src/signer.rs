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

//! API key credentials and request signing.
//!
//! The management server recomputes the signature over the decoded
//! parameters, so the canonical form below has to match it byte for byte:
//! pairs sorted by lower-cased name, values percent-encoded (space as
//! `%20`), joined with `&`, the whole string lower-cased, HMAC-SHA1 with the
//! secret key, standard base64.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha1::Sha1;

use super::{Error, ErrorKind, Result};

/// Everything except `A-Z a-z 0-9 - _ . ~` is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

type HmacSha1 = Hmac<Sha1>;

/// API key and secret key of a CloudStack account.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    secret_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Create credentials from an API key and a secret key.
    pub fn new<K, S>(api_key: K, secret_key: S) -> Result<Credentials>
    where
        K: Into<String>,
        S: Into<String>,
    {
        let api_key = api_key.into();
        let secret_key = secret_key.into();
        if api_key.is_empty() || secret_key.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidConfig,
                "Both the API key and the secret key are required",
            ));
        }
        Ok(Credentials {
            api_key,
            secret_key,
        })
    }

    /// The API key.
    #[inline]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Compute the signature of a canonical query string.
    pub fn sign(&self, canonical: &str) -> String {
        let mut mac = HmacSha1::new_from_slice(self.secret_key.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(canonical.to_lowercase().as_bytes());
        BASE64.encode(mac.finalize().into_bytes())
    }
}

/// Percent-encode a query value.
pub fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Sort parameters in the order the server expects.
///
/// Ordering is by lower-cased name, ties broken by the original name.
pub fn sort_params(params: &mut [(String, String)]) {
    params.sort_by(|a, b| {
        a.0.to_lowercase()
            .cmp(&b.0.to_lowercase())
            .then_with(|| a.0.cmp(&b.0))
    });
}

/// Build the canonical query string from sorted parameters.
///
/// Names are kept verbatim, values are percent-encoded.
pub fn canonical_query(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, encode_value(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
pub mod test {
    use super::{canonical_query, encode_value, sort_params, Credentials};

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_encode_value() {
        assert_eq!(encode_value("abc-_.~XYZ019"), "abc-_.~XYZ019");
        assert_eq!(encode_value("a b"), "a%20b");
        assert_eq!(encode_value("a+b/c=d&e*"), "a%2Bb%2Fc%3Dd%26e%2A");
        assert_eq!(encode_value("http://region2/"), "http%3A%2F%2Fregion2%2F");
        assert_eq!(encode_value("é"), "%C3%A9");
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let mut params = pairs(&[
            ("response", "json"),
            ("apiKey", "key"),
            ("command", "listZones"),
            ("Available", "true"),
        ]);
        sort_params(&mut params);
        let names: Vec<_> = params.iter().map(|p| p.0.as_str()).collect();
        assert_eq!(names, vec!["apiKey", "Available", "command", "response"]);
    }

    #[test]
    fn test_canonical_query() {
        let mut params = pairs(&[
            ("name", "my region"),
            ("command", "addRegion"),
            ("details[0].key", "a"),
        ]);
        sort_params(&mut params);
        assert_eq!(
            canonical_query(&params),
            "command=addRegion&details[0].key=a&name=my%20region"
        );
    }

    #[test]
    fn test_sign_reference_request() {
        let creds = Credentials::new(
            "miVr6X7u6bN_sdahOBpjNejPgEsT35eXq-jB8CG20YI3yaxXcgpyuaIRmFI_EJTVwZ0nUkkJbPmY3y2bciKwFQ",
            "Lxx1DM40AjcXU_8mR1uBPSOcrlvE8aKTGB3kMFZbgd4L7j8T-xu7M-xuFtMFwQ0SoAHxxM0RO3LW2r4ICx2I5RQ",
        )
        .unwrap();
        let mut params = pairs(&[
            ("command", "listUsers"),
            ("response", "json"),
            ("apiKey", creds.api_key()),
        ]);
        sort_params(&mut params);
        let canonical = canonical_query(&params);
        assert!(canonical.starts_with("apiKey=miVr6X7u6bN_sdahOBpjNejPgEsT35eXq-jB8CG20YI3"));
        assert!(canonical.ends_with("&command=listUsers&response=json"));
        assert_eq!(creds.sign(&canonical), "gcgduaONiRINDnCCS2afUDnK1Uw=");
    }

    #[test]
    fn test_sign_ignores_case() {
        let creds = Credentials::new("key", "secret").unwrap();
        assert_eq!(
            creds.sign("apiKey=KEY&command=listZones"),
            creds.sign("apikey=key&command=listzones")
        );
    }

    #[test]
    fn test_credentials_required() {
        assert!(Credentials::new("", "secret").is_err());
        assert!(Credentials::new("key", "").is_err());
    }

    #[test]
    fn test_debug_hides_secret() {
        let creds = Credentials::new("key", "very-secret").unwrap();
        let repr = format!("{:?}", creds);
        assert!(repr.contains("key"));
        assert!(!repr.contains("very-secret"));
    }
}
