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

//! Parameters of the extension commands.

use super::super::common::SuccessResponse;
use super::super::params::IndexedMap;
use super::super::transport::RequestMethod;
use super::protocol::{
    CustomActionList, CustomActionResult, Extension, ExtensionList, ExtensionType,
};

command_params! {
    #[doc = "Parameters of `createExtension`."]
    CreateExtension {
        #[doc = "Description of the extension."]
        description, set_description, with_description, reset_description: String = "description",
        #[doc = "Extension details, sent as `details[0].<key>`."]
        details, set_details, with_details, reset_details: IndexedMap = "details",
        #[doc = "Name of the extension."]
        name, set_name, with_name, reset_name: String = "name",
        #[doc = "Whether the orchestrator needs a prepare step before deploying a VM."]
        orchestrator_requires_prepare_vm, set_orchestrator_requires_prepare_vm,
            with_orchestrator_requires_prepare_vm,
            reset_orchestrator_requires_prepare_vm: bool = "orchestratorrequirespreparevm",
        #[doc = "Path of the entry point, relative to the extensions directory."]
        path, set_path, with_path, reset_path: String = "path",
        #[doc = "Initial state, `Enabled` or `Disabled`."]
        state, set_state, with_state, reset_state: String = "state",
        #[doc = "Kind of the extension."]
        extension_type, set_extension_type, with_extension_type,
            reset_extension_type: String = "type",
    }
}

impl CreateExtension {
    /// Create parameters with all required fields.
    pub fn new<S: Into<String>>(name: S, extension_type: ExtensionType) -> CreateExtension {
        CreateExtension::default()
            .with_name(name)
            .with_extension_type(extension_type)
    }
}

api_command!(
    CreateExtension => Extension,
    "createExtension",
    method = RequestMethod::Post,
    nested = "extension",
);

command_params! {
    #[doc = "Parameters of `listExtensions`."]
    ListExtensions {
        #[doc = "Which details to include, e.g. `all` or `resource`."]
        details, set_details, with_details, reset_details: Vec<String> = "details",
        #[doc = "ID of the extension."]
        id, set_id, with_id, reset_id: String = "id",
        #[doc = "Name of the extension."]
        name, set_name, with_name, reset_name: String = "name",
    }
}

impl ListExtensions {
    /// List all extensions.
    pub fn new() -> ListExtensions {
        ListExtensions::default()
    }
}

list_command!(ListExtensions => ExtensionList, "listExtensions");

command_params! {
    #[doc = "Parameters of `updateExtension`."]
    UpdateExtension {
        #[doc = "Remove all details instead of updating them."]
        cleanup_details, set_cleanup_details, with_cleanup_details,
            reset_cleanup_details: bool = "cleanupdetails",
        #[doc = "New description."]
        description, set_description, with_description, reset_description: String = "description",
        #[doc = "Details to set, sent as `details[0].<key>`."]
        details, set_details, with_details, reset_details: IndexedMap = "details",
        #[doc = "ID of the extension."]
        id, set_id, with_id, reset_id: String = "id",
        #[doc = "Whether the orchestrator needs a prepare step before deploying a VM."]
        orchestrator_requires_prepare_vm, set_orchestrator_requires_prepare_vm,
            with_orchestrator_requires_prepare_vm,
            reset_orchestrator_requires_prepare_vm: bool = "orchestratorrequirespreparevm",
        #[doc = "New state, `Enabled` or `Disabled`."]
        state, set_state, with_state, reset_state: String = "state",
    }
}

impl UpdateExtension {
    /// Update the extension with the given ID.
    pub fn new<S: Into<String>>(id: S) -> UpdateExtension {
        UpdateExtension::default().with_id(id)
    }
}

api_command!(
    UpdateExtension => Extension,
    "updateExtension",
    method = RequestMethod::Post,
    nested = "extension",
);

command_params! {
    #[doc = "Parameters of `deleteExtension`."]
    DeleteExtension {
        #[doc = "Also remove the extension files from the management servers."]
        cleanup, set_cleanup, with_cleanup, reset_cleanup: bool = "cleanup",
        #[doc = "ID of the extension."]
        id, set_id, with_id, reset_id: String = "id",
    }
}

impl DeleteExtension {
    /// Delete the extension with the given ID.
    pub fn new<S: Into<String>>(id: S) -> DeleteExtension {
        DeleteExtension::default().with_id(id)
    }
}

api_command!(DeleteExtension => SuccessResponse, "deleteExtension");

command_params! {
    #[doc = "Parameters of `registerExtension`."]
    RegisterExtension {
        #[doc = "Resource specific details, sent as `details[0].<key>`."]
        details, set_details, with_details, reset_details: IndexedMap = "details",
        #[doc = "ID of the extension."]
        extension_id, set_extension_id, with_extension_id,
            reset_extension_id: String = "extensionid",
        #[doc = "ID of the resource."]
        resource_id, set_resource_id, with_resource_id, reset_resource_id: String = "resourceid",
        #[doc = "Type of the resource, e.g. `Cluster`."]
        resource_type, set_resource_type, with_resource_type,
            reset_resource_type: String = "resourcetype",
    }
}

impl RegisterExtension {
    /// Register the extension for a resource.
    pub fn new<E, I, T>(extension_id: E, resource_id: I, resource_type: T) -> RegisterExtension
    where
        E: Into<String>,
        I: Into<String>,
        T: Into<String>,
    {
        RegisterExtension::default()
            .with_extension_id(extension_id)
            .with_resource_id(resource_id)
            .with_resource_type(resource_type)
    }
}

api_command!(RegisterExtension => Extension, "registerExtension", nested = "extension");

command_params! {
    #[doc = "Parameters of `runCustomAction`."]
    RunCustomAction {
        #[doc = "ID of the custom action."]
        custom_action_id, set_custom_action_id, with_custom_action_id,
            reset_custom_action_id: String = "customactionid",
        #[doc = "Action parameters, sent as `parameters[0].<name>`."]
        parameters, set_parameters, with_parameters, reset_parameters: IndexedMap = "parameters",
        #[doc = "ID of the resource to run the action against."]
        resource_id, set_resource_id, with_resource_id, reset_resource_id: String = "resourceid",
        #[doc = "Type of the resource."]
        resource_type, set_resource_type, with_resource_type,
            reset_resource_type: String = "resourcetype",
    }
}

impl RunCustomAction {
    /// Run an action against a resource.
    pub fn new<A, R>(custom_action_id: A, resource_id: R) -> RunCustomAction
    where
        A: Into<String>,
        R: Into<String>,
    {
        RunCustomAction::default()
            .with_custom_action_id(custom_action_id)
            .with_resource_id(resource_id)
    }
}

api_command!(
    RunCustomAction => CustomActionResult,
    "runCustomAction",
    method = RequestMethod::Post,
    asynchronous = true,
    nested = "customactionresult",
);

command_params! {
    #[doc = "Parameters of `listCustomActions`."]
    ListCustomActions {
        #[doc = "Only enabled or disabled actions."]
        enabled, set_enabled, with_enabled, reset_enabled: bool = "enabled",
        #[doc = "ID of the extension."]
        extension_id, set_extension_id, with_extension_id,
            reset_extension_id: String = "extensionid",
        #[doc = "ID of the action."]
        id, set_id, with_id, reset_id: String = "id",
        #[doc = "Name of the action."]
        name, set_name, with_name, reset_name: String = "name",
        #[doc = "Only actions applicable to this resource."]
        resource_id, set_resource_id, with_resource_id, reset_resource_id: String = "resourceid",
        #[doc = "Only actions for this resource type."]
        resource_type, set_resource_type, with_resource_type,
            reset_resource_type: String = "resourcetype",
    }
}

impl ListCustomActions {
    /// List all custom actions.
    pub fn new() -> ListCustomActions {
        ListCustomActions::default()
    }
}

list_command!(ListCustomActions => CustomActionList, "listCustomActions");

#[cfg(test)]
pub mod test {
    use super::{CreateExtension, RunCustomAction};
    use crate::command::Command;
    use crate::extension::ExtensionType;
    use crate::params::IndexedMap;

    #[test]
    fn test_create_params() {
        let details: IndexedMap = vec![("url", "https://pve:8006"), ("realm", "pam")]
            .into_iter()
            .collect();
        let params = CreateExtension::new("proxmox", ExtensionType::Orchestrator)
            .with_path("proxmox/proxmox.sh")
            .with_details(details);
        assert_eq!(
            params.params().to_url_values(),
            vec![
                ("details[0].realm".to_string(), "pam".to_string()),
                ("details[1].url".to_string(), "https://pve:8006".to_string()),
                ("name".to_string(), "proxmox".to_string()),
                ("path".to_string(), "proxmox/proxmox.sh".to_string()),
                ("type".to_string(), "Orchestrator".to_string()),
            ]
        );
    }

    #[test]
    fn test_run_custom_action_flags() {
        assert!(RunCustomAction::ASYNC);
        assert_eq!(RunCustomAction::NESTED, Some("customactionresult"));
        let params = RunCustomAction::new("a1", "vm1").with_resource_type("VirtualMachine");
        assert_eq!(params.resource_type().as_deref(), Some("VirtualMachine"));
    }
}
