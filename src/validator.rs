//! JSON schema validation with default injection.
//!
//! Before validating, every property that the schema declares with a `default` and that is
//! missing from the document is filled in. Injection follows `properties`, `items`, `allOf`
//! and local `$ref`s, so defaults nested in plain object schemas are reached as well.
//! Branches of `oneOf`/`anyOf` are never applied since it is not known which one holds.

use std::borrow::Cow;

use jsonschema::{ValidationError, Validator};
use serde_json::Value;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SchemaValidationError {
    /// The document does not satisfy the schema.
    #[error("{0}")]
    Invalid(String),
    /// The schema itself could not be compiled.
    #[error("invalid schema: {0}")]
    Schema(String),
}

/// A compiled schema that injects defaults before validating.
pub struct DefaultInjectingValidator<'s> {
    schema: &'s Value,
    validator: Validator,
}

impl<'s> DefaultInjectingValidator<'s> {
    pub fn new(schema: &'s Value) -> Result<Self, SchemaValidationError> {
        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaValidationError::Schema(e.to_string()))?;

        Ok(DefaultInjectingValidator {
            schema: schema,
            validator: validator,
        })
    }

    /// Returns `document` with all absent defaults filled in, or the first violation.
    pub fn validate(&self, mut document: Value) -> Result<Value, SchemaValidationError> {
        inject_defaults(&mut document, self.schema, self.schema);
        match check(&self.validator, &document) {
            Some(message) => Err(SchemaValidationError::Invalid(message)),
            None => Ok(document),
        }
    }
}

/// Validates `document` against `schema`, returning the normalized document.
pub fn validate(document: Value, schema: &Value) -> Result<Value, SchemaValidationError> {
    DefaultInjectingValidator::new(schema)?.validate(document)
}

/// Plain validation without defaults, used for the request and response envelopes.
pub fn check(validator: &Validator, document: &Value) -> Option<String> {
    validator.iter_errors(document).next().map(|e| describe(&e))
}

/// Renders a validation error without echoing the offending instance, which may be a secret.
pub fn describe(error: &ValidationError) -> String {
    let message = error.to_string();
    let instance = error.instance.to_string();
    let path = error.instance_path.to_string();
    let subject = if path.is_empty() {
        Cow::Borrowed("properties")
    } else {
        Cow::Owned(format!("value at {}", path))
    };

    let message = match message.strip_prefix(&instance[..]) {
        Some(rest) => format!("{}{}", subject, rest),
        None => message,
    };
    let message = match message.strip_suffix(&instance[..]) {
        Some(rest) => format!("{}{}", rest, subject),
        None => message,
    };

    // short scalar renderings like `1` or `true` also occur in the schema part of a message
    match *error.instance {
        Value::String(..) | Value::Array(..) | Value::Object(..) if message.contains(&instance[..]) => {
            message.replace(&instance[..], &subject)
        },
        _ => message,
    }
}

fn inject_defaults(document: &mut Value, schema: &Value, root: &Value) {
    let schema = resolve(schema, root);

    if let Some(all) = schema.get("allOf").and_then(Value::as_array) {
        for sub in all {
            inject_defaults(document, sub, root);
        }
    }

    match document {
        Value::Object(object) => {
            let properties = match schema.get("properties").and_then(Value::as_object) {
                Some(properties) => properties,
                None => return,
            };
            for (name, sub) in properties {
                let sub = resolve(sub, root);
                if !object.contains_key(name) {
                    match sub.get("default") {
                        Some(default) => {
                            object.insert(name.clone(), default.clone());
                        },
                        None => continue,
                    }
                }
                if let Some(value) = object.get_mut(name) {
                    inject_defaults(value, sub, root);
                }
            }
        },
        Value::Array(items) => {
            if let Some(sub) = schema.get("items").filter(|s| s.is_object()) {
                for item in items {
                    inject_defaults(item, sub, root);
                }
            }
        },
        _ => (),
    }
}

/// Follows local `#/...` references; anything else resolves to the schema itself.
fn resolve<'a>(mut schema: &'a Value, root: &'a Value) -> &'a Value {
    // bounded, a reference cycle is left to the validator to report
    for _ in 0..32 {
        let target = schema
            .get("$ref")
            .and_then(Value::as_str)
            .and_then(|r| r.strip_prefix('#'))
            .and_then(|pointer| root.pointer(pointer));
        match target {
            Some(target) => schema = target,
            None => break,
        }
    }
    schema
}
