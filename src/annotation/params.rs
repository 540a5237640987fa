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

//! Parameters of the annotation commands.

use super::protocol::{Annotation, AnnotationList};

command_params! {
    #[doc = "Parameters of `addAnnotation`."]
    AddAnnotation {
        #[doc = "Whether only administrators can see the annotation."]
        admins_only, set_admins_only, with_admins_only, reset_admins_only: bool = "adminsonly",
        #[doc = "Text of the annotation."]
        annotation, set_annotation, with_annotation, reset_annotation: String = "annotation",
        #[doc = "ID of the annotated entity."]
        entity_id, set_entity_id, with_entity_id, reset_entity_id: String = "entityid",
        #[doc = "Type of the annotated entity, see `AnnotationEntityType`."]
        entity_type, set_entity_type, with_entity_type, reset_entity_type: String = "entitytype",
    }
}

impl AddAnnotation {
    /// Annotate an entity.
    pub fn new<A, I, T>(annotation: A, entity_id: I, entity_type: T) -> AddAnnotation
    where
        A: Into<String>,
        I: Into<String>,
        T: Into<String>,
    {
        AddAnnotation::default()
            .with_annotation(annotation)
            .with_entity_id(entity_id)
            .with_entity_type(entity_type)
    }
}

api_command!(AddAnnotation => Annotation, "addAnnotation", nested = "annotation");

command_params! {
    #[doc = "Parameters of `listAnnotations`."]
    ListAnnotations {
        #[doc = "Which annotations to list, see `AnnotationFilter`."]
        annotation_filter, set_annotation_filter, with_annotation_filter,
            reset_annotation_filter: String = "annotationfilter",
        #[doc = "Only annotations of this entity."]
        entity_id, set_entity_id, with_entity_id, reset_entity_id: String = "entityid",
        #[doc = "Only annotations of this entity type."]
        entity_type, set_entity_type, with_entity_type, reset_entity_type: String = "entitytype",
        #[doc = "ID of the annotation."]
        id, set_id, with_id, reset_id: String = "id",
        #[doc = "Only annotations created by this user."]
        user_id, set_user_id, with_user_id, reset_user_id: String = "userid",
    }
}

impl ListAnnotations {
    /// List all visible annotations.
    pub fn new() -> ListAnnotations {
        ListAnnotations::default()
    }
}

list_command!(ListAnnotations => AnnotationList, "listAnnotations");

command_params! {
    #[doc = "Parameters of `removeAnnotation`."]
    RemoveAnnotation {
        #[doc = "ID of the annotation."]
        id, set_id, with_id, reset_id: String = "id",
    }
}

impl RemoveAnnotation {
    /// Remove the annotation with the given ID.
    pub fn new<S: Into<String>>(id: S) -> RemoveAnnotation {
        RemoveAnnotation::default().with_id(id)
    }
}

api_command!(RemoveAnnotation => Annotation, "removeAnnotation", nested = "annotation");

command_params! {
    #[doc = "Parameters of `updateAnnotationVisibility`."]
    UpdateAnnotationVisibility {
        #[doc = "Whether only administrators can see the annotation."]
        admins_only, set_admins_only, with_admins_only, reset_admins_only: bool = "adminsonly",
        #[doc = "ID of the annotation."]
        id, set_id, with_id, reset_id: String = "id",
    }
}

impl UpdateAnnotationVisibility {
    /// Change the visibility of an annotation.
    pub fn new<S: Into<String>>(id: S, admins_only: bool) -> UpdateAnnotationVisibility {
        UpdateAnnotationVisibility::default()
            .with_id(id)
            .with_admins_only(admins_only)
    }
}

api_command!(
    UpdateAnnotationVisibility => Annotation,
    "updateAnnotationVisibility",
    nested = "annotation",
);

#[cfg(test)]
pub mod test {
    use super::{AddAnnotation, ListAnnotations};
    use crate::annotation::{AnnotationEntityType, AnnotationFilter};
    use crate::command::Command;

    #[test]
    fn test_enum_as_param() {
        let params = AddAnnotation::new("note", "h1", AnnotationEntityType::Host);
        assert_eq!(params.entity_type().as_deref(), Some("HOST"));
        assert_eq!(params.admins_only(), None);

        let params = ListAnnotations::new().with_annotation_filter(AnnotationFilter::Own);
        assert_eq!(
            params.params().to_url_values(),
            vec![("annotationfilter".to_string(), "self".to_string())]
        );
    }
}
