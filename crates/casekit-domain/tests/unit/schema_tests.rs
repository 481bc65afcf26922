//! Unit tests for parameter schema descriptors

use casekit_domain::value_objects::{FieldDescriptor, FieldKind, FieldOption};

#[test]
fn test_field_kind_wire_names() {
    let kinds = [
        (FieldKind::Input, "input"),
        (FieldKind::Combo, "combo"),
        (FieldKind::Textarea, "textarea"),
        (FieldKind::VariableList, "variable-list"),
        (FieldKind::TemplateSelect, "template-select"),
        (FieldKind::JsonTree, "json-tree"),
    ];

    for (kind, name) in kinds {
        assert_eq!(
            serde_json::to_value(kind).expect("serialization should succeed"),
            serde_json::Value::String(name.to_string())
        );
    }
}

#[test]
fn test_plain_and_labeled_options() {
    let json = r#"["Select",{"value":"@\\soap\\Payment.xml","label":"缴费"}]"#;
    let options: Vec<FieldOption> =
        serde_json::from_str(json).expect("deserialization should succeed");

    assert_eq!(options[0], FieldOption::Plain("Select".to_string()));
    assert_eq!(
        options[1],
        FieldOption::Labeled {
            value: "@\\soap\\Payment.xml".to_string(),
            label: "缴费".to_string(),
        }
    );
}

#[test]
fn test_optional_fields_are_omitted() {
    let json = r#"{"name":"vars","label":"变量列表","type":"variable-list","required":true}"#;
    let field: FieldDescriptor = serde_json::from_str(json).expect("deserialization should succeed");

    assert_eq!(field.kind, FieldKind::VariableList);
    assert!(field.required);
    assert_eq!(
        serde_json::to_string(&field).expect("serialization should succeed"),
        json
    );
}

#[test]
fn test_json_tree_field_keeps_default_value() {
    let json = r#"{"name":"rRsp","label":"响应验证","type":"json-tree","required":false,"defaultValue":{"code":{"type":"number","value":200}},"isResponse":true}"#;
    let field: FieldDescriptor = serde_json::from_str(json).expect("deserialization should succeed");

    assert_eq!(field.is_response, Some(true));
    assert_eq!(field.is_request, None);
    let default_value = field.default_value.as_ref().expect("default value");
    assert_eq!(default_value["code"]["value"], 200);
    assert_eq!(
        serde_json::to_string(&field).expect("serialization should succeed"),
        json
    );
}

#[test]
fn test_unknown_field_kind_is_rejected() {
    let json = r#"{"name":"x","label":"x","type":"slider","required":false}"#;

    assert!(serde_json::from_str::<FieldDescriptor>(json).is_err());
}
