//! Per-method parameter validation.
//!
//! Each dispatchable method declares a schema in a static registry. A request
//! is checked against its schema before anything else runs, and every
//! violation is reported in one [`ValidationError`] rather than stopping at
//! the first.
//!
//! Methods without a schema are passed through unchanged with a warning so
//! newer clients are not rejected outright.

mod sanitize;

pub use sanitize::sanitize_input;

use serde_json::{Map, Value};
use thiserror::Error;

/// Upper bound on any string argument, in characters.
pub const MAX_STRING_LENGTH: usize = 1000;

/// Shape a single field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A string whose character count lies in `min..=max`.
    Text {
        /// Minimum length.
        min: usize,
        /// Maximum length.
        max: usize,
    },
    /// Any JSON value.
    Any,
}

/// One field rule in a method schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Argument name as sent by the client.
    pub name: &'static str,
    /// Whether the field must be present.
    pub required: bool,
    /// Expected shape.
    pub kind: FieldKind,
}

impl FieldRule {
    const fn required_text(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            kind: FieldKind::Text {
                min: 1,
                max: MAX_STRING_LENGTH,
            },
        }
    }

    const fn optional_text(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            kind: FieldKind::Text {
                min: 1,
                max: MAX_STRING_LENGTH,
            },
        }
    }

    const fn optional_any(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            kind: FieldKind::Any,
        }
    }
}

/// Schema for one method.
#[derive(Debug, Clone, Copy)]
pub struct MethodSchema {
    /// Method name.
    pub method: &'static str,
    /// Field rules.
    pub fields: &'static [FieldRule],
}

static SCHEMAS: &[MethodSchema] = &[
    MethodSchema {
        method: "get_anime_component",
        fields: &[FieldRule::required_text("componentName")],
    },
    MethodSchema {
        method: "list_anime_components",
        fields: &[FieldRule::optional_text("category")],
    },
    MethodSchema {
        method: "get_anime_example",
        fields: &[FieldRule::required_text("exampleType")],
    },
    MethodSchema {
        method: "search_anime_examples",
        fields: &[FieldRule::required_text("query")],
    },
    MethodSchema {
        method: "get_anime_docs",
        fields: &[FieldRule::required_text("topic")],
    },
    MethodSchema {
        method: "list_resources",
        fields: &[],
    },
    MethodSchema {
        method: "list_resource_templates",
        fields: &[],
    },
    MethodSchema {
        method: "list_tools",
        fields: &[],
    },
    MethodSchema {
        method: "list_prompts",
        fields: &[],
    },
    MethodSchema {
        method: "read_resource",
        fields: &[FieldRule::required_text("uri")],
    },
    MethodSchema {
        method: "get_prompt",
        fields: &[
            FieldRule::required_text("name"),
            FieldRule::optional_any("arguments"),
        ],
    },
];

/// Looks up the schema registered for `method`.
#[must_use]
pub fn schema_for(method: &str) -> Option<&'static MethodSchema> {
    SCHEMAS.iter().find(|schema| schema.method == method)
}

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field path, e.g. `componentName`. Empty for the params object itself.
    pub path: String,
    /// What was wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// All violations found while validating one request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed for {method}: {}", join_violations(.violations))]
pub struct ValidationError {
    /// Method whose params were rejected.
    pub method: String,
    /// Every violated rule, in schema order.
    pub violations: Vec<Violation>,
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates `params` against the schema for `method` and returns the
/// sanitised params.
///
/// Missing params are treated as an empty object.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every violated field.
pub fn validate(method: &str, params: Option<&Value>) -> Result<Value, ValidationError> {
    let Some(schema) = schema_for(method) else {
        tracing::warn!(method, "No validation schema registered, passing params through");
        return Ok(params.cloned().unwrap_or_else(|| Value::Object(Map::new())));
    };

    validate_against(schema, params)
}

fn validate_against(
    schema: &MethodSchema,
    params: Option<&Value>,
) -> Result<Value, ValidationError> {
    let method = schema.method;
    let empty = Map::new();
    let object = match params {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(map)) => map,
        Some(_) => {
            return Err(ValidationError {
                method: method.to_string(),
                violations: vec![Violation {
                    path: String::new(),
                    message: "params must be an object".to_string(),
                }],
            });
        }
    };

    let mut violations = Vec::new();
    let mut sanitised = object.clone();

    for rule in schema.fields {
        match object.get(rule.name) {
            None | Some(Value::Null) => {
                if rule.required {
                    violations.push(Violation {
                        path: rule.name.to_string(),
                        message: "Required".to_string(),
                    });
                }
            }
            Some(value) => match check_field(rule.kind, value) {
                Some(message) => violations.push(Violation {
                    path: rule.name.to_string(),
                    message,
                }),
                None => {
                    if let Value::String(text) = value {
                        // Markup-only input sanitises to nothing and must
                        // still meet the minimum length.
                        let clean = sanitize_input(text);
                        if let Some(message) = check_min_length(rule.kind, &clean) {
                            violations.push(Violation {
                                path: rule.name.to_string(),
                                message,
                            });
                        } else {
                            sanitised.insert(rule.name.to_string(), Value::String(clean));
                        }
                    }
                }
            },
        }
    }

    if violations.is_empty() {
        Ok(Value::Object(sanitised))
    } else {
        Err(ValidationError {
            method: method.to_string(),
            violations,
        })
    }
}

fn check_field(kind: FieldKind, value: &Value) -> Option<String> {
    match kind {
        FieldKind::Any => None,
        FieldKind::Text { min, max } => {
            let Value::String(text) = value else {
                return Some(format!("Expected string, received {}", json_type_name(value)));
            };
            if text.chars().count() > max {
                return Some(format!("String must contain at most {max} character(s)"));
            }
            check_min_length(kind, text)
        }
    }
}

fn check_min_length(kind: FieldKind, text: &str) -> Option<String> {
    match kind {
        FieldKind::Text { min, .. } if text.chars().count() < min => {
            Some(format!("String must contain at least {min} character(s)"))
        }
        _ => None,
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_dispatch_method_has_a_schema() {
        for method in [
            "get_anime_component",
            "list_anime_components",
            "get_anime_example",
            "search_anime_examples",
            "get_anime_docs",
            "list_resources",
            "list_resource_templates",
            "list_tools",
            "list_prompts",
            "read_resource",
            "get_prompt",
        ] {
            assert!(schema_for(method).is_some(), "missing schema for {method}");
        }
    }

    #[test]
    fn missing_required_field_is_named() {
        let err = validate("get_anime_component", Some(&json!({}))).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].path, "componentName");
        assert!(err.to_string().contains("componentName: Required"));
    }

    #[test]
    fn absent_params_behave_like_empty_object() {
        let err = validate("get_anime_docs", None).unwrap_err();
        assert_eq!(err.violations[0].path, "topic");

        let ok = validate("list_anime_components", None).unwrap();
        assert_eq!(ok, json!({}));
    }

    #[test]
    fn over_long_string_is_rejected() {
        let name = "a".repeat(2000);
        let err = validate("get_anime_component", Some(&json!({ "componentName": name })))
            .unwrap_err();
        assert!(err.violations[0].message.contains("at most 1000"));
    }

    #[test]
    fn empty_string_is_rejected() {
        let err = validate("search_anime_examples", Some(&json!({ "query": "" }))).unwrap_err();
        assert!(err.violations[0].message.contains("at least 1"));
    }

    #[test]
    fn markup_only_string_is_rejected() {
        let err =
            validate("search_anime_examples", Some(&json!({ "query": "<b></b>" }))).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].path, "query");
        assert_eq!(
            err.violations[0].message,
            "String must contain at least 1 character(s)"
        );
    }

    #[test]
    fn wrong_type_is_rejected() {
        let err = validate("get_anime_example", Some(&json!({ "exampleType": 42 }))).unwrap_err();
        assert!(err.violations[0].message.contains("received number"));
    }

    #[test]
    fn all_violations_are_aggregated() {
        const FIELDS: &[FieldRule] = &[
            FieldRule::required_text("first"),
            FieldRule::required_text("second"),
            FieldRule::optional_text("third"),
        ];
        let schema = MethodSchema {
            method: "two_fields",
            fields: FIELDS,
        };
        let params = json!({ "second": "", "third": 3 });
        let err = validate_against(&schema, Some(&params)).unwrap_err();

        let paths: Vec<_> = err.violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, ["first", "second", "third"]);
        assert!(err.to_string().contains("first: Required; second: "));
    }

    #[test]
    fn non_object_params_are_rejected() {
        let err = validate("get_prompt", Some(&json!("not an object"))).unwrap_err();
        assert!(err.to_string().contains("params must be an object"));
    }

    #[test]
    fn aggregated_message_joins_fields() {
        let err = ValidationError {
            method: "get_prompt".to_string(),
            violations: vec![
                Violation {
                    path: "name".to_string(),
                    message: "Required".to_string(),
                },
                Violation {
                    path: "arguments".to_string(),
                    message: "Expected object".to_string(),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "Validation failed for get_prompt: name: Required; arguments: Expected object"
        );
    }

    #[test]
    fn valid_params_are_sanitised() {
        let params = json!({ "query": "<b>stagger</b>", "extra": true });
        let out = validate("search_anime_examples", Some(&params)).unwrap();
        assert_eq!(out, json!({ "query": "stagger", "extra": true }));
    }

    #[test]
    fn optional_any_accepts_objects() {
        let params = json!({ "name": "explain-component", "arguments": { "component": "anime" } });
        let out = validate("get_prompt", Some(&params)).unwrap();
        assert_eq!(out["arguments"]["component"], "anime");
    }

    #[test]
    fn unknown_method_passes_through() {
        let params = json!({ "anything": [1, 2, 3] });
        let out = validate("future_method", Some(&params)).unwrap();
        assert_eq!(out, params);
    }
}
