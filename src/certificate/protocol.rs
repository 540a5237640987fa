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

//! JSON structures of the certificate API.

#![allow(missing_docs)]

use serde::Deserialize;

/// Result of uploading a custom certificate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomCertificate {
    #[serde(default)]
    pub message: String,
}

/// A certificate authority provider plugin.
#[derive(Debug, Clone, Deserialize)]
pub struct CaProvider {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

list_response! {
    #[doc = "Response of `listCAProviders`."]
    CaProviderList { providers: CaProvider = "caprovider" }
}

/// PEM encoded certificate material.
///
/// `issueCertificate` fills in all fields, `listCaCertificate` only the
/// certificate itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Certificate {
    #[serde(default)]
    pub certificate: String,
    #[serde(default, rename = "privatekey")]
    pub private_key: Option<String>,
    #[serde(default, rename = "cacertificates")]
    pub ca_certificates: Option<String>,
}
