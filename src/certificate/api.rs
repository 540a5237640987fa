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

//! Certificate commands.

use super::super::common::SuccessResponse;
use super::super::session::Session;
use super::super::Result;
use super::params::{
    IssueCertificate, ListCaCertificate, ListCaProviders, ProvisionCertificate,
    RevokeCertificate, UploadCustomCertificate,
};
use super::protocol::{CaProviderList, Certificate, CustomCertificate};

/// Commands of the certificate API.
#[derive(Debug, Clone)]
pub struct CertificateService {
    session: Session,
}

impl CertificateService {
    pub(crate) fn new(session: Session) -> CertificateService {
        CertificateService { session }
    }

    /// Upload a custom certificate for the system VMs.
    pub async fn upload_custom_certificate(
        &self,
        params: &UploadCustomCertificate,
    ) -> Result<CustomCertificate> {
        debug!("Uploading certificate for domain {:?}", params.domain_suffix());
        self.session.execute(params).await
    }

    /// List CA providers.
    pub async fn list_ca_providers(&self, params: &ListCaProviders) -> Result<CaProviderList> {
        self.session.execute(params).await
    }

    /// Issue a certificate.
    pub async fn issue_certificate(&self, params: &IssueCertificate) -> Result<Certificate> {
        debug!("Issuing certificate for domains {:?}", params.domains());
        self.session.execute(params).await
    }

    /// Revoke a certificate.
    pub async fn revoke_certificate(&self, params: &RevokeCertificate) -> Result<SuccessResponse> {
        trace!("Revoking certificate {:?}", params);
        self.session.execute(params).await
    }

    /// Provision a certificate to a host.
    pub async fn provision_certificate(
        &self,
        params: &ProvisionCertificate,
    ) -> Result<SuccessResponse> {
        trace!("Provisioning certificate {:?}", params);
        self.session.execute(params).await
    }

    /// Fetch the CA certificate.
    pub async fn list_ca_certificate(&self, params: &ListCaCertificate) -> Result<Certificate> {
        self.session.execute(params).await
    }
}

#[cfg(test)]
pub mod test {
    use std::sync::Arc;

    use serde_json::json;

    use super::CertificateService;
    use crate::certificate::{IssueCertificate, ListCaCertificate, UploadCustomCertificate};
    use crate::session::test::new_session;
    use crate::transport::fake::FakeTransport;
    use crate::transport::RequestMethod;

    const PEM: &str = "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----";

    #[tokio::test(start_paused = true)]
    async fn test_upload_custom_certificate() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply("uploadCustomCertificate", json!({"jobid": "j1"}));
        transport.reply(
            "queryAsyncJobResult",
            json!({"jobid": "j1", "jobstatus": 1, "jobresult": {"customcertificate": {
                "message": "Certificate has been successfully updated"
            }}}),
        );
        let service = CertificateService::new(new_session(transport.clone()));

        let result = service
            .upload_custom_certificate(&UploadCustomCertificate::new(PEM, "example.com"))
            .await
            .unwrap();
        assert_eq!(result.message, "Certificate has been successfully updated");

        let requests = transport.requests();
        assert_eq!(requests[0].method(), RequestMethod::Post);
        assert_eq!(requests[0].param("certificate"), Some(PEM));
        assert_eq!(requests[1].method(), RequestMethod::Get);
    }

    #[tokio::test(start_paused = true)]
    async fn test_issue_certificate() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply("issueCertificate", json!({"jobid": "j2"}));
        transport.reply(
            "queryAsyncJobResult",
            json!({"jobid": "j2", "jobstatus": 1, "jobresult": {"certificates": {
                "certificate": PEM,
                "privatekey": "key",
                "cacertificates": PEM
            }}}),
        );
        let service = CertificateService::new(new_session(transport));

        let params = IssueCertificate::new().with_domains(vec!["a.example.com".to_string()]);
        let cert = service.issue_certificate(&params).await.unwrap();
        assert_eq!(cert.certificate, PEM);
        assert_eq!(cert.private_key.as_deref(), Some("key"));
    }

    #[tokio::test]
    async fn test_list_ca_certificate() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply("listCaCertificate", json!({"cacertificates": {"certificate": PEM}}));
        let service = CertificateService::new(new_session(transport));

        let cert = service
            .list_ca_certificate(&ListCaCertificate::new())
            .await
            .unwrap();
        assert_eq!(cert.certificate, PEM);
        assert!(cert.private_key.is_none());
    }
}
