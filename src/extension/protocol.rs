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

//! JSON structures of the extension API.

#![allow(missing_docs)]

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::super::common::protocol::{deser_details, deser_optional_timestamp};
use super::super::common::NamedResource;

protocol_enum! {
    #[doc = "Kind of an extension."]
    enum ExtensionType {
        Orchestrator = "Orchestrator"
    }
}

protocol_enum! {
    #[doc = "State of an extension."]
    enum ExtensionState {
        Enabled = "Enabled",
        Disabled = "Disabled"
    }
}

/// A resource an extension is registered for.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtensionResource {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub resource_type: Option<String>,
    #[serde(default, deserialize_with = "deser_details")]
    pub details: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "deser_optional_timestamp")]
    pub created: Option<DateTime<FixedOffset>>,
}

/// An extension.
#[derive(Debug, Clone, Deserialize)]
pub struct Extension {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub extension_type: ExtensionType,
    #[serde(default)]
    pub state: Option<ExtensionState>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, rename = "pathready")]
    pub path_ready: bool,
    #[serde(default, rename = "isuserdefined")]
    pub is_user_defined: bool,
    #[serde(default, deserialize_with = "deser_details")]
    pub details: BTreeMap<String, String>,
    #[serde(default)]
    pub resources: Vec<ExtensionResource>,
    #[serde(default, deserialize_with = "deser_optional_timestamp")]
    pub created: Option<DateTime<FixedOffset>>,
}

list_response! {
    #[doc = "Response of `listExtensions`."]
    ExtensionList { extensions: Extension = "extension" }
}

/// A parameter accepted by a custom action.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomActionParameter {
    pub name: String,
    #[serde(default, rename = "type")]
    pub parameter_type: Option<String>,
    #[serde(default, rename = "validationformat")]
    pub validation_format: Option<String>,
    #[serde(default)]
    pub required: bool,
}

/// A custom action of an extension.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomAction {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "extensionid")]
    pub extension_id: Option<String>,
    #[serde(default, rename = "extensionname")]
    pub extension_name: Option<String>,
    #[serde(default, rename = "resourcetype")]
    pub resource_type: Option<String>,
    #[serde(default, rename = "allowedroletypes")]
    pub allowed_role_types: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<CustomActionParameter>,
    #[serde(default)]
    pub timeout: Option<i64>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, deserialize_with = "deser_optional_timestamp")]
    pub created: Option<DateTime<FixedOffset>>,
}

list_response! {
    #[doc = "Response of `listCustomActions`."]
    CustomActionList { actions: CustomAction = "extensioncustomaction" }
}

/// Outcome of running a custom action.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomActionResult {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "deser_details")]
    pub result: BTreeMap<String, String>,
}

impl CustomActionResult {
    /// Message reported by the action, if any.
    pub fn message(&self) -> Option<&str> {
        self.result.get("message").map(String::as_str)
    }
}

impl NamedResource for Extension {
    fn resource_id(&self) -> String {
        self.id.clone()
    }

    fn resource_name(&self) -> &str {
        &self.name
    }
}

impl NamedResource for CustomAction {
    fn resource_id(&self) -> String {
        self.id.clone()
    }

    fn resource_name(&self) -> &str {
        &self.name
    }
}
