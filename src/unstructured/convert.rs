// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

use crate::error::{FieldPathError, Result};
use crate::fields::nested::value_kind;
use crate::fields::Document;
use kube::core::DynamicObject;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

fn into_document(value: Value) -> Result<Document> {
    match value {
        Value::Object(document) => Ok(document),
        other => Err(FieldPathError::NotAnObject(value_kind(&other).to_string())),
    }
}

/// Convert a typed object into an unstructured document
pub fn to_unstructured<T: Serialize>(obj: &T) -> Result<Document> {
    into_document(serde_json::to_value(obj)?)
}

/// Convert an unstructured document into a typed object
pub fn to_typed<T: DeserializeOwned>(document: &Document) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(document.clone()))?)
}

/// Parse a single YAML document into an unstructured document.
/// An empty document yields an empty [`Document`].
pub fn yaml_to_unstructured(content: &[u8]) -> Result<Document> {
    match serde_yaml::from_slice::<Value>(content)? {
        Value::Null => Ok(Document::new()),
        value => into_document(value),
    }
}

/// View an unstructured document as a [`DynamicObject`]
pub fn to_dynamic_object(document: &Document) -> Result<DynamicObject> {
    to_typed(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::NestedFields;
    use k8s_openapi::api::core::v1::{Namespace, Pod, PodSpec};
    use k8s_openapi::List;
    use kube::api::ObjectMeta;
    use kube::ResourceExt;
    use serde_json::json;

    fn make_namespace(name: &str) -> Namespace {
        Namespace {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_to_unstructured_object() {
        let document = to_unstructured(&make_namespace("test")).unwrap();

        assert_eq!(document.get("kind"), Some(&json!("Namespace")));
        assert_eq!(document.get("apiVersion"), Some(&json!("v1")));
        assert_eq!(document.nested_field("metadata.name"), Some(&json!("test")));
    }

    #[test]
    fn test_to_unstructured_list() {
        let list = List::<Namespace> {
            items: vec![make_namespace("test")],
            metadata: Default::default(),
        };

        let document = to_unstructured(&list).unwrap();

        assert_eq!(document.get("kind"), Some(&json!("NamespaceList")));
        assert_eq!(document.get("items").and_then(Value::as_array).map(Vec::len), Some(1));
    }

    #[test]
    fn test_to_unstructured_non_object_fails() {
        let bytes = b"apiVersion: v1\nkind: Namespace\n".to_vec();

        let err = to_unstructured(&bytes).unwrap_err();

        assert!(matches!(err, FieldPathError::NotAnObject(ref kind) if kind == "array"));
    }

    #[test]
    fn test_to_typed_object() {
        let document = into_document(json!({
            "apiVersion": "v1",
            "kind": "Namespace",
            "metadata": {"name": "test"}
        }))
        .unwrap();

        let namespace: Namespace = to_typed(&document).unwrap();

        assert_eq!(namespace.name_any(), "test");
    }

    #[test]
    fn test_to_typed_after_nested_set() {
        let mut document = to_unstructured(&Pod {
            metadata: ObjectMeta {
                name: Some("web".to_string()),
                ..Default::default()
            },
            spec: Some(PodSpec::default()),
            ..Default::default()
        })
        .unwrap();

        document.set_nested_field("spec.nodeName", json!("node-1"));
        document.set_nested_field("metadata.labels.app", json!("web"));

        let pod: Pod = to_typed(&document).unwrap();
        assert_eq!(
            pod.spec.as_ref().and_then(|s| s.node_name.as_deref()),
            Some("node-1")
        );
        assert_eq!(pod.labels().get("app").map(String::as_str), Some("web"));
    }

    #[test]
    fn test_to_typed_mismatched_shape_fails() {
        let document = into_document(json!({
            "apiVersion": "v1",
            "kind": "Namespace",
            "metadata": "not an object"
        }))
        .unwrap();

        let result: Result<Namespace> = to_typed(&document);

        assert!(matches!(result, Err(FieldPathError::JsonError(_))));
    }

    #[test]
    fn test_yaml_to_unstructured() {
        let content = b"
apiVersion: v1
kind: Namespace
metadata:
  name: test
";

        let document = yaml_to_unstructured(content).unwrap();

        assert_eq!(document.nested_field("metadata.name"), Some(&json!("test")));
    }

    #[test]
    fn test_yaml_to_unstructured_empty_input() {
        assert_eq!(yaml_to_unstructured(b"").unwrap(), Document::new());
        assert_eq!(
            yaml_to_unstructured(b"# nothing but a comment\n").unwrap(),
            Document::new()
        );
        assert_eq!(yaml_to_unstructured(b"null\n").unwrap(), Document::new());
    }

    #[test]
    fn test_yaml_to_unstructured_multiple_documents_fails() {
        let err = yaml_to_unstructured(b"a: 1\n---\nb: 2\n").unwrap_err();

        assert!(matches!(err, FieldPathError::YamlError(_)));
    }

    #[test]
    fn test_yaml_to_unstructured_scalar_fails() {
        let err = yaml_to_unstructured(b"aaa").unwrap_err();

        assert!(matches!(err, FieldPathError::NotAnObject(ref kind) if kind == "string"));
    }

    #[test]
    fn test_yaml_to_unstructured_invalid_yaml_fails() {
        let err = yaml_to_unstructured(b"key: [unclosed").unwrap_err();

        assert!(matches!(err, FieldPathError::YamlError(_)));
    }

    #[test]
    fn test_to_dynamic_object() {
        let document = yaml_to_unstructured(
            b"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
  namespace: default
spec:
  replicas: 2
",
        )
        .unwrap();

        let obj = to_dynamic_object(&document).unwrap();

        assert_eq!(obj.name_any(), "web");
        assert_eq!(obj.namespace().as_deref(), Some("default"));
        assert_eq!(
            obj.types.as_ref().map(|t| t.kind.as_str()),
            Some("Deployment")
        );
        assert_eq!(obj.nested_field("spec.replicas"), Some(&json!(2)));
    }
}
