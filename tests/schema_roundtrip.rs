use form_design::api::{FieldType, FormDesignResp, FormField, FormFieldValidation, FormSchema};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn sample_schema() -> FormSchema {
    let mut schema = FormSchema::new(vec![
        FormField::new("f3", "textarea", "Reason", "reason")
            .required()
            .placeholder("Why are you requesting leave?")
            .validation(FormFieldValidation {
                max_length: Some(500),
                message: Some("Too long".to_string()),
                ..FormFieldValidation::default()
            }),
        FormField::new("f1", "select", "Leave type", "leave_type")
            .option("Annual", "annual")
            .option("Sick", 2)
            .option("Unpaid", false)
            .default_value("annual")
            .sort_order(1),
        FormField::new("f2", "number", "Days", "days")
            .validation(FormFieldValidation {
                min: Some(1.into()),
                max: Some(30.into()),
                ..FormFieldValidation::default()
            })
            .prop("step", 0.5)
            .prop("controls", json!({"position": "right"})),
        FormField::new("f4", "signature-pad", "Signature", "signature"),
    ]);
    schema.layout = Some("grid".to_string());
    schema
}

#[test]
fn test_schema_roundtrip_keeps_order_and_presence() {
    let schema = sample_schema();

    let text = serde_json::to_string(&schema).unwrap();
    let parsed: FormSchema = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed, schema);
    let ids: Vec<&str> = parsed.fields.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["f3", "f1", "f2", "f4"]);
    assert_eq!(parsed.fields[3].field_type, FieldType::Other("signature-pad".to_string()));
    assert!(parsed.style.is_none());
}

#[test]
fn test_backend_json_reserializes_to_same_keys() {
    let raw = json!({
        "fields": [
            {"id": "a", "type": "text", "label": "Title", "name": "title", "required": true},
            {
                "id": "b",
                "type": "Cascader",
                "label": "Region",
                "name": "region",
                "required": false,
                "options": [{"label": "North", "value": 1}],
                "validation": {"min": 0, "max": 10.5, "pattern": "^[A-Z]+$"},
                "props": {"z": 1, "a": {"nested": [1, 2]}},
                "sort_order": 0
            }
        ],
        "style": ".form { width: 100% }"
    });

    let schema: FormSchema = serde_json::from_value(raw.clone()).unwrap();
    let back = serde_json::to_value(&schema).unwrap();

    assert_eq!(back, raw);
    // absent optionals stay absent
    assert!(back["fields"][0].get("placeholder").is_none());
    assert!(back.get("layout").is_none());
}

#[test]
fn test_prop_order_is_preserved() {
    let raw = r#"{"id":"a","type":"text","label":"A","name":"a","required":false,"props":{"zeta":1,"alpha":2,"mid":3}}"#;
    let field: FormField = serde_json::from_str(raw).unwrap();
    assert_eq!(serde_json::to_string(&field).unwrap(), raw);
}

#[test]
fn test_detail_without_optional_category() {
    let raw: Value = json!({
        "id": 1,
        "name": "Leave Request",
        "description": "",
        "schema": serde_json::to_value(sample_schema()).unwrap(),
        "version": 3,
        "status": 1,
        "creator_id": 2,
        "creator_name": "ops",
        "created_at": "2024-05-01 10:00:00",
        "updated_at": "2024-05-03 09:30:00"
    });

    let resp: FormDesignResp = serde_json::from_value(raw.clone()).unwrap();
    assert!(resp.category_id.is_none());
    assert!(resp.category.is_none());
    assert_eq!(resp.schema, sample_schema());
    assert_eq!(serde_json::to_value(&resp).unwrap(), raw);
}

#[test]
fn test_null_default_value_survives_roundtrip() {
    let raw = json!({
        "fields": [
            {"id": "a", "type": "select", "label": "Shift", "name": "shift", "required": false, "default_value": null},
            {"id": "b", "type": "text", "label": "Note", "name": "note", "required": false}
        ]
    });

    let schema: FormSchema = serde_json::from_value(raw.clone()).unwrap();
    let back = serde_json::to_value(&schema).unwrap();

    assert_eq!(back, raw);
    assert!(back["fields"][0].get("default_value").is_some());
    assert!(back["fields"][1].get("default_value").is_none());
}
