//! Local lint for form schemas
//!
//! Nothing in the request path calls this. It exists so a schema file can be
//! checked before it is sent, producing the same shape the backend uses for
//! validation results.

use super::models::{FormField, FormSchema, ValidateFormDesignResp};
use regex::Regex;
use std::collections::HashSet;

pub fn check_schema(schema: &FormSchema) -> ValidateFormDesignResp {
    let mut errors = Vec::new();

    if schema.fields.is_empty() {
        errors.push("form has no fields".to_string());
    }

    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();

    for (index, field) in schema.fields.iter().enumerate() {
        let at = describe(index, field);

        if field.id.trim().is_empty() {
            errors.push(format!("{}: id is empty", at));
        } else if !seen_ids.insert(field.id.as_str()) {
            errors.push(format!("{}: duplicate id '{}'", at, field.id));
        }

        if field.name.trim().is_empty() {
            errors.push(format!("{}: name is empty", at));
        } else if !seen_names.insert(field.name.as_str()) {
            errors.push(format!("{}: duplicate name '{}'", at, field.name));
        }

        if field.label.trim().is_empty() {
            errors.push(format!("{}: label is empty", at));
        }

        if field.field_type.is_choice() && field.options.as_ref().map_or(true, |o| o.is_empty()) {
            errors.push(format!("{}: {} field has no options", at, field.field_type));
        }

        check_validation(field, &at, &mut errors);
    }

    if errors.is_empty() {
        ValidateFormDesignResp {
            is_valid: true,
            errors: None,
        }
    } else {
        ValidateFormDesignResp {
            is_valid: false,
            errors: Some(errors),
        }
    }
}

fn describe(index: usize, field: &FormField) -> String {
    if field.name.trim().is_empty() {
        format!("field #{}", index + 1)
    } else {
        format!("field #{} ({})", index + 1, field.name)
    }
}

fn check_validation(field: &FormField, at: &str, errors: &mut Vec<String>) {
    let Some(rules) = &field.validation else {
        return;
    };

    if let (Some(min), Some(max)) = (rules.min_length, rules.max_length) {
        if min > max {
            errors.push(format!("{}: min_length {} exceeds max_length {}", at, min, max));
        }
    }

    let min = rules.min.as_ref().and_then(|n| n.as_f64());
    let max = rules.max.as_ref().and_then(|n| n.as_f64());
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            errors.push(format!("{}: min {} exceeds max {}", at, min, max));
        }
    }

    if let Some(pattern) = &rules.pattern {
        if let Err(e) = Regex::new(pattern) {
            errors.push(format!("{}: invalid pattern '{}': {}", at, pattern, e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{FieldType, FormFieldValidation};

    #[test]
    fn test_valid_schema() {
        let schema = FormSchema::new(vec![
            FormField::new("f1", FieldType::Text, "Reason", "reason").required(),
            FormField::new("f2", FieldType::Select, "Type", "leave_type").option("Annual", "annual"),
        ]);

        let result = check_schema(&schema);
        assert!(result.is_valid);
        assert!(result.errors.is_none());
    }

    #[test]
    fn test_empty_schema_is_invalid() {
        let result = check_schema(&FormSchema::default());
        assert!(!result.is_valid);
        assert_eq!(result.errors.unwrap(), vec!["form has no fields".to_string()]);
    }

    #[test]
    fn test_duplicates_and_blanks() {
        let schema = FormSchema::new(vec![
            FormField::new("f1", "text", "Reason", "reason"),
            FormField::new("f1", "text", "", "reason"),
            FormField::new("", "text", "Days", ""),
        ]);

        let errors = check_schema(&schema).errors.unwrap();
        assert_eq!(
            errors,
            vec![
                "field #2 (reason): duplicate id 'f1'".to_string(),
                "field #2 (reason): duplicate name 'reason'".to_string(),
                "field #2 (reason): label is empty".to_string(),
                "field #3: id is empty".to_string(),
                "field #3: name is empty".to_string(),
            ]
        );
    }

    #[test]
    fn test_choice_field_without_options() {
        let schema = FormSchema::new(vec![FormField::new("f1", "radio", "Urgent", "urgent")]);
        let errors = check_schema(&schema).errors.unwrap();
        assert_eq!(errors, vec!["field #1 (urgent): radio field has no options".to_string()]);
    }

    #[test]
    fn test_validation_rules() {
        let rules = FormFieldValidation {
            min_length: Some(10),
            max_length: Some(2),
            min: Some(5.into()),
            max: Some(1.into()),
            pattern: Some("([a-z".to_string()),
            message: None,
        };
        let schema = FormSchema::new(vec![FormField::new("f1", "text", "Code", "code").validation(rules)]);

        let errors = check_schema(&schema).errors.unwrap();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("min_length 10 exceeds max_length 2"));
        assert!(errors[1].contains("min 5 exceeds max 1"));
        assert!(errors[2].contains("invalid pattern"));
    }
}
