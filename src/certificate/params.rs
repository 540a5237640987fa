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

//! Parameters of the certificate commands.

use super::super::common::SuccessResponse;
use super::super::transport::RequestMethod;
use super::protocol::{CaProviderList, Certificate, CustomCertificate};

command_params! {
    #[doc = "Parameters of `uploadCustomCertificate`."]
    UploadCustomCertificate {
        #[doc = "PEM encoded certificate."]
        certificate, set_certificate, with_certificate, reset_certificate: String = "certificate",
        #[doc = "DNS domain suffix the certificate is valid for."]
        domain_suffix, set_domain_suffix, with_domain_suffix,
            reset_domain_suffix: String = "domainsuffix",
        #[doc = "Index of the certificate in a chain, starting with 1."]
        id, set_id, with_id, reset_id: i32 = "id",
        #[doc = "Alias of an intermediate certificate."]
        name, set_name, with_name, reset_name: String = "name",
        #[doc = "PEM encoded private key, only for the server certificate."]
        private_key, set_private_key, with_private_key, reset_private_key: String = "privatekey",
    }
}

impl UploadCustomCertificate {
    /// Upload a certificate for the console proxy domain.
    pub fn new<C, D>(certificate: C, domain_suffix: D) -> UploadCustomCertificate
    where
        C: Into<String>,
        D: Into<String>,
    {
        UploadCustomCertificate::default()
            .with_certificate(certificate)
            .with_domain_suffix(domain_suffix)
    }
}

api_command!(
    UploadCustomCertificate => CustomCertificate,
    "uploadCustomCertificate",
    method = RequestMethod::Post,
    asynchronous = true,
    nested = "customcertificate",
);

command_params! {
    #[doc = "Parameters of `listCAProviders`."]
    ListCaProviders {
        #[doc = "Name of the provider."]
        name, set_name, with_name, reset_name: String = "name",
    }
}

impl ListCaProviders {
    /// List all providers.
    pub fn new() -> ListCaProviders {
        ListCaProviders::default()
    }
}

list_command!(ListCaProviders => CaProviderList, "listCAProviders");

command_params! {
    #[doc = "Parameters of `issueCertificate`."]
    IssueCertificate {
        #[doc = "IP addresses to put into the certificate."]
        addresses, set_addresses, with_addresses, reset_addresses: Vec<String> = "address",
        #[doc = "Certificate signing request, PEM encoded."]
        csr, set_csr, with_csr, reset_csr: String = "csr",
        #[doc = "Domain names to put into the certificate."]
        domains, set_domains, with_domains, reset_domains: Vec<String> = "domain",
        #[doc = "Validity in days."]
        duration, set_duration, with_duration, reset_duration: i32 = "duration",
        #[doc = "Name of the CA provider."]
        provider, set_provider, with_provider, reset_provider: String = "provider",
    }
}

impl IssueCertificate {
    /// Issue a certificate, either from a CSR or for the given domains.
    pub fn new() -> IssueCertificate {
        IssueCertificate::default()
    }
}

api_command!(
    IssueCertificate => Certificate,
    "issueCertificate",
    asynchronous = true,
    nested = "certificates",
);

command_params! {
    #[doc = "Parameters of `revokeCertificate`."]
    RevokeCertificate {
        #[doc = "Common name of the certificate."]
        cn, set_cn, with_cn, reset_cn: String = "cn",
        #[doc = "Name of the CA provider."]
        provider, set_provider, with_provider, reset_provider: String = "provider",
        #[doc = "Serial number of the certificate, in hex."]
        serial, set_serial, with_serial, reset_serial: String = "serial",
    }
}

impl RevokeCertificate {
    /// Revoke the certificate with the given serial.
    pub fn new<S: Into<String>>(serial: S) -> RevokeCertificate {
        RevokeCertificate::default().with_serial(serial)
    }
}

api_command!(RevokeCertificate => SuccessResponse, "revokeCertificate", asynchronous = true);

command_params! {
    #[doc = "Parameters of `provisionCertificate`."]
    ProvisionCertificate {
        #[doc = "ID of the host."]
        host_id, set_host_id, with_host_id, reset_host_id: String = "hostid",
        #[doc = "Name of the CA provider."]
        provider, set_provider, with_provider, reset_provider: String = "provider",
        #[doc = "Reconnect the host agent afterwards."]
        reconnect, set_reconnect, with_reconnect, reset_reconnect: bool = "reconnect",
    }
}

impl ProvisionCertificate {
    /// Provision a new certificate to the host.
    pub fn new<S: Into<String>>(host_id: S) -> ProvisionCertificate {
        ProvisionCertificate::default().with_host_id(host_id)
    }
}

api_command!(ProvisionCertificate => SuccessResponse, "provisionCertificate", asynchronous = true);

command_params! {
    #[doc = "Parameters of `listCaCertificate`."]
    ListCaCertificate {
        #[doc = "Name of the CA provider."]
        provider, set_provider, with_provider, reset_provider: String = "provider",
    }
}

impl ListCaCertificate {
    /// Fetch the certificate of the default provider.
    pub fn new() -> ListCaCertificate {
        ListCaCertificate::default()
    }
}

api_command!(ListCaCertificate => Certificate, "listCaCertificate", nested = "cacertificates");

#[cfg(test)]
pub mod test {
    use super::{IssueCertificate, UploadCustomCertificate};
    use crate::command::Command;
    use crate::transport::RequestMethod;

    #[test]
    fn test_upload_is_post() {
        assert_eq!(UploadCustomCertificate::METHOD, RequestMethod::Post);
        assert!(UploadCustomCertificate::ASYNC);
        assert_eq!(UploadCustomCertificate::NAME, "uploadCustomCertificate");
    }

    #[test]
    fn test_issue_lists() {
        let params = IssueCertificate::new()
            .with_domains(vec!["a.example.com".to_string(), "b.example.com".to_string()])
            .with_duration(30);
        assert_eq!(
            params.params().to_url_values(),
            vec![
                ("domain".to_string(), "a.example.com,b.example.com".to_string()),
                ("duration".to_string(), "30".to_string()),
            ]
        );
    }
}
