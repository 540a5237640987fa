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

//! Extension commands.

use futures::stream::Stream;

use super::super::common::{one_by_id, one_by_name, SuccessResponse};
use super::super::session::Session;
use super::super::Result;
use super::params::{
    CreateExtension, DeleteExtension, ListCustomActions, ListExtensions, RegisterExtension,
    RunCustomAction, UpdateExtension,
};
use super::protocol::{CustomActionList, CustomActionResult, Extension, ExtensionList};

/// Commands of the extension API.
#[derive(Debug, Clone)]
pub struct ExtensionService {
    session: Session,
}

impl ExtensionService {
    pub(crate) fn new(session: Session) -> ExtensionService {
        ExtensionService { session }
    }

    /// Create an extension.
    pub async fn create_extension(&self, params: &CreateExtension) -> Result<Extension> {
        trace!("Creating extension {:?}", params);
        let extension: Extension = self.session.execute(params).await?;
        debug!("Created extension {} ({})", extension.name, extension.id);
        Ok(extension)
    }

    /// List extensions.
    pub async fn list_extensions(&self, params: &ListExtensions) -> Result<ExtensionList> {
        self.session.execute(params).await
    }

    /// Stream extensions across all pages.
    pub fn list_extensions_stream(
        &self,
        params: ListExtensions,
    ) -> impl Stream<Item = Result<Extension>> + Send + 'static {
        self.session.list_all(params)
    }

    /// Update an extension.
    pub async fn update_extension(&self, params: &UpdateExtension) -> Result<Extension> {
        trace!("Updating extension {:?}", params);
        self.session.execute(params).await
    }

    /// Delete an extension.
    pub async fn delete_extension(&self, params: &DeleteExtension) -> Result<SuccessResponse> {
        trace!("Deleting extension {:?}", params);
        self.session.execute(params).await
    }

    /// Register an extension for a resource.
    pub async fn register_extension(&self, params: &RegisterExtension) -> Result<Extension> {
        trace!("Registering extension {:?}", params);
        self.session.execute(params).await
    }

    /// Run a custom action.
    pub async fn run_custom_action(&self, params: &RunCustomAction) -> Result<CustomActionResult> {
        trace!("Running custom action {:?}", params);
        let result: CustomActionResult = self.session.execute(params).await?;
        if !result.success {
            debug!(
                "Custom action {:?} reported failure: {:?}",
                result.name,
                result.message()
            );
        }
        Ok(result)
    }

    /// List custom actions.
    pub async fn list_custom_actions(
        &self,
        params: &ListCustomActions,
    ) -> Result<CustomActionList> {
        self.session.execute(params).await
    }

    /// Find an extension by its exact name.
    pub async fn get_extension_by_name<S: AsRef<str>>(&self, name: S) -> Result<Extension> {
        let name = name.as_ref();
        let list = self
            .list_extensions(&ListExtensions::new().with_name(name))
            .await?;
        one_by_name(name, list.extensions)
    }

    /// Find an extension by its ID.
    pub async fn get_extension_by_id<S: AsRef<str>>(&self, id: S) -> Result<Extension> {
        let id = id.as_ref();
        let list = self
            .list_extensions(&ListExtensions::new().with_id(id))
            .await?;
        one_by_id(id, list.extensions)
    }
}
