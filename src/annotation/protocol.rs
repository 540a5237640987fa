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

//! JSON structures of the annotation API.

#![allow(missing_docs)]

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::super::common::protocol::deser_optional_timestamp;
use super::super::common::NamedResource;

protocol_enum! {
    #[doc = "Type of an annotated entity."]
    enum AnnotationEntityType {
        VirtualMachine = "VM",
        Volume = "VOLUME",
        Snapshot = "SNAPSHOT",
        VmSnapshot = "VM_SNAPSHOT",
        InstanceGroup = "INSTANCE_GROUP",
        SshKeyPair = "SSH_KEYPAIR",
        UserData = "USER_DATA",
        Network = "NETWORK",
        Vpc = "VPC",
        PublicIpAddress = "PUBLIC_IP_ADDRESS",
        VpnCustomerGateway = "VPN_CUSTOMER_GATEWAY",
        Template = "TEMPLATE",
        Iso = "ISO",
        KubernetesCluster = "KUBERNETES_CLUSTER",
        ServiceOffering = "SERVICE_OFFERING",
        DiskOffering = "DISK_OFFERING",
        NetworkOffering = "NETWORK_OFFERING",
        Zone = "ZONE",
        Pod = "POD",
        Cluster = "CLUSTER",
        Host = "HOST",
        Domain = "DOMAIN",
        PrimaryStorage = "PRIMARY_STORAGE",
        SecondaryStorage = "SECONDARY_STORAGE",
        VirtualRouter = "VR",
        SystemVm = "SYSTEM_VM",
        AutoScaleVmGroup = "AUTOSCALE_VM_GROUP",
        ManagementServer = "MANAGEMENT_SERVER"
    }
}

protocol_enum! {
    #[doc = "Which annotations to list."]
    enum AnnotationFilter {
        All = "all",
        Own = "self"
    }
}

/// An annotation.
#[derive(Debug, Clone, Deserialize)]
pub struct Annotation {
    pub id: String,
    #[serde(default)]
    pub annotation: String,
    #[serde(default, rename = "entityid")]
    pub entity_id: Option<String>,
    #[serde(default, rename = "entityname")]
    pub entity_name: Option<String>,
    #[serde(default, rename = "entitytype")]
    pub entity_type: Option<String>,
    #[serde(default, rename = "userid")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, rename = "adminsonly")]
    pub admins_only: bool,
    #[serde(default, deserialize_with = "deser_optional_timestamp")]
    pub created: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "deser_optional_timestamp")]
    pub removed: Option<DateTime<FixedOffset>>,
}

list_response! {
    #[doc = "Response of `listAnnotations`."]
    AnnotationList { annotations: Annotation = "annotation" }
}

impl NamedResource for Annotation {
    fn resource_id(&self) -> String {
        self.id.clone()
    }

    fn resource_name(&self) -> &str {
        self.entity_name.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
pub mod test {
    use serde_json::json;

    use super::{Annotation, AnnotationEntityType};

    #[test]
    fn test_entity_type() {
        assert_eq!(String::from(AnnotationEntityType::Host), "HOST");
        assert_eq!(AnnotationEntityType::VirtualMachine.to_string(), "VM");
        let parsed: AnnotationEntityType = serde_json::from_value(json!("vr")).unwrap();
        assert_eq!(parsed, AnnotationEntityType::VirtualRouter);
        assert!(serde_json::from_value::<AnnotationEntityType>(json!("TOASTER")).is_err());
    }

    #[test]
    fn test_decode() {
        let note: Annotation = serde_json::from_value(json!({
            "id": "a1",
            "annotation": "disk replaced",
            "entityid": "h1",
            "entitytype": "HOST",
            "adminsonly": true,
            "created": "2024-02-03T04:05:06+0000"
        }))
        .unwrap();
        assert_eq!(note.annotation, "disk replaced");
        assert!(note.admins_only);
        assert!(note.created.is_some());
        assert!(note.removed.is_none());
    }
}
