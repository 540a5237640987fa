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

//! Annotation commands.

use futures::stream::Stream;

use super::super::common::one_by_id;
use super::super::session::Session;
use super::super::Result;
use super::params::{AddAnnotation, ListAnnotations, RemoveAnnotation, UpdateAnnotationVisibility};
use super::protocol::{Annotation, AnnotationList};

/// Commands of the annotation API.
#[derive(Debug, Clone)]
pub struct AnnotationService {
    session: Session,
}

impl AnnotationService {
    pub(crate) fn new(session: Session) -> AnnotationService {
        AnnotationService { session }
    }

    /// Add an annotation to an entity.
    pub async fn add_annotation(&self, params: &AddAnnotation) -> Result<Annotation> {
        trace!("Adding annotation {:?}", params);
        self.session.execute(params).await
    }

    /// List annotations.
    pub async fn list_annotations(&self, params: &ListAnnotations) -> Result<AnnotationList> {
        self.session.execute(params).await
    }

    /// Stream annotations across all pages.
    pub fn list_annotations_stream(
        &self,
        params: ListAnnotations,
    ) -> impl Stream<Item = Result<Annotation>> + Send + 'static {
        self.session.list_all(params)
    }

    /// Remove an annotation.
    ///
    /// Returns the removed annotation.
    pub async fn remove_annotation(&self, params: &RemoveAnnotation) -> Result<Annotation> {
        trace!("Removing annotation {:?}", params);
        self.session.execute(params).await
    }

    /// Change who can see an annotation.
    pub async fn update_annotation_visibility(
        &self,
        params: &UpdateAnnotationVisibility,
    ) -> Result<Annotation> {
        self.session.execute(params).await
    }

    /// Find an annotation by its ID.
    pub async fn get_annotation_by_id<S: AsRef<str>>(&self, id: S) -> Result<Annotation> {
        let id = id.as_ref();
        let list = self
            .list_annotations(&ListAnnotations::new().with_id(id))
            .await?;
        one_by_id(id, list.annotations)
    }
}

#[cfg(test)]
pub mod test {
    use std::sync::Arc;

    use serde_json::json;

    use super::AnnotationService;
    use crate::annotation::{AnnotationEntityType, AddAnnotation, UpdateAnnotationVisibility};
    use crate::session::test::new_session;
    use crate::transport::fake::FakeTransport;
    use crate::ErrorKind;

    #[tokio::test]
    async fn test_add_and_update() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply(
            "addAnnotation",
            json!({"annotation": {"id": "a1", "annotation": "note", "entitytype": "HOST"}}),
        );
        transport.reply(
            "updateAnnotationVisibility",
            json!({"annotation": {"id": "a1", "annotation": "note", "adminsonly": true}}),
        );
        let service = AnnotationService::new(new_session(transport.clone()));

        let note = service
            .add_annotation(&AddAnnotation::new("note", "h1", AnnotationEntityType::Host))
            .await
            .unwrap();
        assert_eq!(note.id, "a1");
        assert_eq!(note.entity_type.as_deref(), Some("HOST"));

        let note = service
            .update_annotation_visibility(&UpdateAnnotationVisibility::new("a1", true))
            .await
            .unwrap();
        assert!(note.admins_only);
        assert_eq!(transport.requests()[1].param("adminsonly"), Some("true"));
    }

    #[tokio::test]
    async fn test_get_by_id_ambiguous() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply(
            "listAnnotations",
            json!({"count": 2, "annotation": [{"id": "a2"}, {"id": "a3"}]}),
        );
        let service = AnnotationService::new(new_session(transport));

        let err = service.get_annotation_by_id("a1").await.err().unwrap();
        assert_eq!(err.kind(), ErrorKind::TooManyItems);
        assert!(err.message().unwrap().contains("a1"));
    }
}
