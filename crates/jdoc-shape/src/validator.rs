use serde_json::Value;
use tracing::debug;

use jdoc_types::kind::is_empty_container;
use jdoc_types::ValueKind;

use crate::dialect::ValidationDialect;
use crate::error::ShapeViolation;
use crate::model::{ShapeModel, REQUIRED_KEY};

/// Decides whether documents conform to a model.
///
/// The type-shape comparison runs from the model towards the document:
///
/// - every key the model names must be present in the document; extra
///   document keys are allowed;
/// - a model value that is an empty object or empty array accepts any
///   document value;
/// - nested objects recurse, everything else compares [`ValueKind`]s;
/// - a document array is checked element by element, each element against
///   the whole model (or against the first element of an array model).
///
/// Under [`ValidationDialect::OpenNested`] only the top level runs from the
/// model. Below it, objects are compared from the document towards the model.
#[derive(Clone, Debug)]
pub struct ShapeValidator {
    model: ShapeModel,
    dialect: ValidationDialect,
}

impl ShapeValidator {
    pub fn new(model: ShapeModel, dialect: ValidationDialect) -> Self {
        Self { model, dialect }
    }

    pub fn model(&self) -> &ShapeModel {
        &self.model
    }

    pub fn dialect(&self) -> ValidationDialect {
        self.dialect
    }

    /// `true` if `document` conforms.
    pub fn validate(&self, document: &Value) -> bool {
        self.check(document).is_ok()
    }

    /// Check `document`, reporting the first violation found.
    pub fn check(&self, document: &Value) -> Result<(), ShapeViolation> {
        let result = self.run(document);
        if let Err(violation) = &result {
            debug!(dialect = %self.dialect, %violation, "document failed shape check");
        }
        result
    }

    fn run(&self, document: &Value) -> Result<(), ShapeViolation> {
        if self.dialect.checks_required() {
            check_required(document, &self.model)?;
        }
        if self.dialect.checks_types() {
            let mut path = Vec::new();
            let open = self.dialect.open_nested();
            check_shape(document, self.model.template(), &mut path, true, open)?;
        }
        Ok(())
    }
}

/// One-shot validation without building a [`ShapeValidator`].
pub fn validate(document: &Value, model: &ShapeModel, dialect: ValidationDialect) -> bool {
    ShapeValidator::new(model.clone(), dialect).validate(document)
}

fn check_required(document: &Value, model: &ShapeModel) -> Result<(), ShapeViolation> {
    let Some(fields) = model.required_fields() else {
        return Ok(());
    };
    for field in fields {
        let present = document
            .as_object()
            .is_some_and(|map| map.contains_key(field));
        if !present {
            return Err(ShapeViolation::MissingRequired {
                field: field.to_string(),
            });
        }
    }
    Ok(())
}

/// `top` is set while `model` is the template root, where the reserved
/// required-list key lives. With `open` set, values below the top level are
/// handed to [`check_from_document`].
fn check_shape(
    document: &Value,
    model: &Value,
    path: &mut Vec<String>,
    top: bool,
    open: bool,
) -> Result<(), ShapeViolation> {
    if is_empty_container(model) {
        return Ok(());
    }

    match (model, document) {
        (Value::Object(fields), Value::Object(values)) => {
            for (key, expected) in fields {
                if top && key == REQUIRED_KEY {
                    continue;
                }
                path.push(key.clone());
                let actual = values.get(key).ok_or_else(|| ShapeViolation::MissingKey {
                    path: render(path),
                })?;
                if open {
                    check_from_document(actual, expected, path)?;
                } else {
                    check_shape(actual, expected, path, false, false)?;
                }
                path.pop();
            }
            Ok(())
        }
        (Value::Object(_), Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                path.push(format!("[{index}]"));
                check_shape(item, model, path, top, open)?;
                path.pop();
            }
            Ok(())
        }
        (Value::Array(templates), Value::Array(items)) => match templates.first() {
            Some(template) => {
                for (index, item) in items.iter().enumerate() {
                    path.push(format!("[{index}]"));
                    check_shape(item, template, path, false, open)?;
                    path.pop();
                }
                Ok(())
            }
            None => Ok(()),
        },
        _ => check_kind(document, model, path),
    }
}

/// Nested comparison for open dialects: every document key must be named by
/// the model, and keys the model names may be absent.
fn check_from_document(
    document: &Value,
    model: &Value,
    path: &mut Vec<String>,
) -> Result<(), ShapeViolation> {
    if is_empty_container(model) {
        return Ok(());
    }

    match (model, document) {
        (Value::Object(fields), Value::Object(values)) => {
            for (key, actual) in values {
                path.push(key.clone());
                let expected = fields.get(key).ok_or_else(|| ShapeViolation::UnexpectedKey {
                    path: render(path),
                })?;
                check_from_document(actual, expected, path)?;
                path.pop();
            }
            Ok(())
        }
        (Value::Object(_), Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                path.push(format!("[{index}]"));
                check_from_document(item, model, path)?;
                path.pop();
            }
            Ok(())
        }
        (Value::Array(templates), Value::Array(items)) => match templates.first() {
            Some(template) => {
                for (index, item) in items.iter().enumerate() {
                    path.push(format!("[{index}]"));
                    check_from_document(item, template, path)?;
                    path.pop();
                }
                Ok(())
            }
            None => Ok(()),
        },
        _ => check_kind(document, model, path),
    }
}

fn check_kind(document: &Value, model: &Value, path: &[String]) -> Result<(), ShapeViolation> {
    let expected = ValueKind::of(model);
    let found = ValueKind::of(document);
    if expected == found {
        Ok(())
    } else {
        Err(ShapeViolation::KindMismatch {
            path: render(path),
            expected,
            found,
        })
    }
}

fn render(path: &[String]) -> String {
    if path.is_empty() {
        return "<root>".to_string();
    }
    let mut out = String::new();
    for segment in path {
        if !out.is_empty() && !segment.starts_with('[') {
            out.push('.');
        }
        out.push_str(segment);
    }
    out
}
