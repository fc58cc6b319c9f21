//! Wire shapes exchanged with the form-design endpoints
//!
//! Every optional attribute is skipped when absent so that a value parsed from
//! the backend serializes back to the same set of keys.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::HashMap;
use std::fmt;

/// Empty lists may come back as `null`
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Keeps a present key present, even when its value is `null`
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Kind of input a form field renders as.
///
/// The backend treats the tag as an open string. Known kinds get their own
/// variant; anything else is carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    Password,
    Select,
    Radio,
    Checkbox,
    Date,
    DateTime,
    Time,
    Switch,
    Upload,
    Other(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Password => "password",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Time => "time",
            Self::Switch => "switch",
            Self::Upload => "upload",
            Self::Other(tag) => tag,
        }
    }

    /// Whether the field picks its value from a list of options
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Select | Self::Radio | Self::Checkbox)
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "text" => Self::Text,
            "textarea" => Self::Textarea,
            "number" => Self::Number,
            "password" => Self::Password,
            "select" => Self::Select,
            "radio" => Self::Radio,
            "checkbox" => Self::Checkbox,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "time" => Self::Time,
            "switch" => Self::Switch,
            "upload" => Self::Upload,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selectable choice of a select/radio/checkbox field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormFieldOption {
    pub label: String,
    /// Scalar of any shape (string, number, bool)
    pub value: Value,
}

impl FormFieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormFieldValidation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    /// Kept as a JSON number so integer bounds stay integers on the wire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One input element of a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// An explicit `null` parses as `Some(Value::Null)` and is written back
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FormFieldOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FormFieldValidation>,
    /// Free-form rendering properties passed through to the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

impl FormField {
    pub fn new(
        id: impl Into<String>,
        field_type: impl Into<FieldType>,
        label: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            field_type: field_type.into(),
            label: label.into(),
            name: name.into(),
            required: false,
            placeholder: None,
            default_value: None,
            options: None,
            validation: None,
            props: None,
            sort_order: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Append a selectable option, creating the option list on first use
    pub fn option(mut self, label: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options
            .get_or_insert_with(Vec::new)
            .push(FormFieldOption::new(label, value));
        self
    }

    pub fn validation(mut self, validation: FormFieldValidation) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = Some(sort_order);
        self
    }
}

/// Ordered field list plus optional layout and style descriptors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fields: Vec<FormField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl FormSchema {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            layout: None,
            style: None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields in render order.
    ///
    /// Fields with a `sort_order` come first, ascending; the rest follow in
    /// their declared order. The schema itself is left untouched.
    pub fn sorted_fields(&self) -> Vec<&FormField> {
        let mut fields: Vec<&FormField> = self.fields.iter().collect();
        fields.sort_by_key(|f| (f.sort_order.is_none(), f.sort_order));
        fields
    }
}

/// Workorder category a design may be filed under.
///
/// Owned by the category endpoints; only `id` and `name` are relied on here,
/// the remaining attributes are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Create/update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDesignReq {
    /// Present when updating an existing design
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub schema: FormSchema,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl FormDesignReq {
    pub fn new(name: impl Into<String>, description: impl Into<String>, schema: FormSchema) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            schema,
            category_id: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Full detail view of a stored design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDesignResp {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub schema: FormSchema,
    pub version: i32,
    pub status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub creator_id: i64,
    #[serde(default)]
    pub creator_name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// List projection of a stored design, without its schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDesignItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub version: i32,
    pub status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub creator_id: i64,
    #[serde(default)]
    pub creator_name: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewFormDesignResp {
    pub id: i64,
    pub schema: FormSchema,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateFormDesignResp {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Pagination envelope returned by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResp<T> {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListFormDesignReq {
    pub page: u32,
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListFormDesignReq {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            category_id: None,
            status: None,
            search: None,
        }
    }

    /// Query string pairs for the list endpoint. Unset filters are left out.
    pub fn to_query_params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();
        params.insert("page".to_string(), self.page.to_string());
        params.insert("size".to_string(), self.size.to_string());

        if let Some(category_id) = self.category_id {
            params.insert("category_id".to_string(), category_id.to_string());
        }

        if let Some(status) = self.status {
            params.insert("status".to_string(), status.to_string());
        }

        if let Some(search) = &self.search {
            params.insert("search".to_string(), search.clone());
        }

        params
    }
}

impl Default for ListFormDesignReq {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailFormDesignReq {
    pub id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishFormDesignReq {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneFormDesignReq {
    pub id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_type_known_and_unknown_tags() {
        assert_eq!(FieldType::from("select"), FieldType::Select);
        assert_eq!(FieldType::from("datetime"), FieldType::DateTime);
        assert_eq!(FieldType::from("rich-text"), FieldType::Other("rich-text".to_string()));

        let json = serde_json::to_value(FieldType::Other("Cascader".to_string())).unwrap();
        assert_eq!(json, json!("Cascader"));

        let parsed: FieldType = serde_json::from_value(json!("textarea")).unwrap();
        assert_eq!(parsed, FieldType::Textarea);
        assert!(FieldType::Radio.is_choice());
        assert!(!FieldType::Text.is_choice());
    }

    #[test]
    fn test_field_serializes_type_key_and_skips_absent_optionals() {
        let field = FormField::new("f1", FieldType::Text, "Reason", "reason").required();
        let json = serde_json::to_value(&field).unwrap();

        assert_eq!(
            json,
            json!({
                "id": "f1",
                "type": "text",
                "label": "Reason",
                "name": "reason",
                "required": true
            })
        );
    }

    #[test]
    fn test_field_builder_accumulates_options_and_props() {
        let field = FormField::new("f2", "select", "Leave type", "leave_type")
            .option("Annual", "annual")
            .option("Sick", 2)
            .prop("clearable", true)
            .sort_order(3);

        let options = field.options.as_ref().unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].value, json!(2));
        assert_eq!(field.props.as_ref().unwrap()["clearable"], json!(true));
        assert_eq!(field.sort_order, Some(3));
    }

    #[test]
    fn test_sorted_fields_puts_unordered_fields_last() {
        let schema = FormSchema::new(vec![
            FormField::new("a", "text", "A", "a"),
            FormField::new("b", "text", "B", "b").sort_order(2),
            FormField::new("c", "text", "C", "c"),
            FormField::new("d", "text", "D", "d").sort_order(1),
        ]);

        let ids: Vec<&str> = schema.sorted_fields().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "b", "a", "c"]);
        // declared order is untouched
        assert_eq!(schema.fields[0].id, "a");
    }

    #[test]
    fn test_list_query_params_omit_unset_filters() {
        let params = ListFormDesignReq::new(2, 20).to_query_params();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("page"), Some(&"2".to_string()));
        assert_eq!(params.get("size"), Some(&"20".to_string()));
        assert!(!params.contains_key("search"));

        let params = ListFormDesignReq {
            category_id: Some(4),
            status: Some(1),
            search: Some("leave".to_string()),
            ..ListFormDesignReq::new(1, 10)
        }
        .to_query_params();
        assert_eq!(params.len(), 5);
        assert_eq!(params.get("category_id"), Some(&"4".to_string()));
        assert_eq!(params.get("status"), Some(&"1".to_string()));
        assert_eq!(params.get("search"), Some(&"leave".to_string()));
    }

    #[test]
    fn test_category_keeps_unknown_attributes() {
        let raw = json!({"id": 3, "name": "HR", "icon": "user", "sort_order": 1});
        let category: Category = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(category.id, 3);
        assert_eq!(category.name, "HR");
        assert_eq!(category.extra.get("icon"), Some(&json!("user")));
        assert_eq!(serde_json::to_value(&category).unwrap(), raw);
    }

    #[test]
    fn test_detail_response_with_embedded_category() {
        let raw = json!({
            "id": 9,
            "name": "Leave Request",
            "description": "",
            "schema": {"fields": []},
            "version": 2,
            "status": 1,
            "category_id": 3,
            "category": {"id": 3, "name": "HR"},
            "creator_id": 1,
            "creator_name": "admin",
            "created_at": "2024-05-01 10:00:00",
            "updated_at": "2024-05-02 10:00:00"
        });

        let resp: FormDesignResp = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.version, 2);
        assert_eq!(resp.category.as_ref().map(|c| c.name.as_str()), Some("HR"));
        assert!(resp.schema.fields.is_empty());
    }

    #[test]
    fn test_null_lists_decode_as_empty() {
        let list: ListResp<FormDesignItem> =
            serde_json::from_value(json!({"items": null, "total": 0})).unwrap();
        assert!(list.items.is_empty());
        assert_eq!(list.total, 0);

        let schema: FormSchema = serde_json::from_value(json!({"fields": null})).unwrap();
        assert!(schema.fields.is_empty());
    }

    #[test]
    fn test_null_default_value_stays_present() {
        let raw = json!({"id": "a", "type": "text", "label": "A", "name": "a", "required": false, "default_value": null});
        let field: FormField = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(field.default_value, Some(Value::Null));
        assert_eq!(serde_json::to_value(&field).unwrap(), raw);

        let absent: FormField =
            serde_json::from_value(json!({"id": "b", "type": "text", "label": "B", "name": "b"})).unwrap();
        assert!(absent.default_value.is_none());
    }
}
