use serde_json::{Map, Value};

use jdoc_types::{Document, PathError, PathExpr, PathResult, ValueKind};

/// Borrow the value at `path`.
pub fn get_at<'a>(document: &'a Document, path: &PathExpr) -> PathResult<&'a Value> {
    match path {
        PathExpr::ByKeys(segments) => {
            let mut current = document;
            for segment in segments {
                current = match current {
                    Value::Object(map) => map.get(segment),
                    _ => None,
                }
                .ok_or_else(|| not_found(path))?;
            }
            Ok(current)
        }
        PathExpr::ByIndex(index) => match document {
            Value::Array(items) => items.get(*index).ok_or_else(|| not_found(path)),
            other => Err(mismatch(ValueKind::Array, other)),
        },
    }
}

/// Return a copy of `document` with `value` assigned at `path`.
pub fn set_at(document: &Document, path: &PathExpr, value: Value) -> PathResult<Document> {
    let mut candidate = document.clone();
    set_in_place(&mut candidate, path, value)?;
    Ok(candidate)
}

/// Return a copy of `document` with the value at `path` removed.
pub fn delete_at(document: &Document, path: &PathExpr) -> PathResult<Document> {
    let mut candidate = document.clone();
    delete_in_place(&mut candidate, path)?;
    Ok(candidate)
}

/// Assign `value` at `path`, returning the value it replaced.
pub fn set_in_place(
    document: &mut Document,
    path: &PathExpr,
    value: Value,
) -> PathResult<Option<Value>> {
    match path {
        PathExpr::ByKeys(segments) => {
            let (last, parents) = split_segments(segments)?;
            let mut current = root_object_mut(document)?;
            for segment in parents {
                let slot = current
                    .entry(segment.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                current = slot.as_object_mut().ok_or_else(|| not_found(path))?;
            }
            Ok(current.insert(last.clone(), value))
        }
        PathExpr::ByIndex(index) => {
            let items = match document {
                Value::Array(items) => items,
                other => return Err(mismatch(ValueKind::Array, other)),
            };
            let len = items.len();
            if *index < len {
                Ok(Some(std::mem::replace(&mut items[*index], value)))
            } else if *index == len {
                items.push(value);
                Ok(None)
            } else {
                Err(PathError::IndexOutOfBounds { index: *index, len })
            }
        }
    }
}

/// Remove the value at `path`, returning it if it was present.
pub fn delete_in_place(document: &mut Document, path: &PathExpr) -> PathResult<Option<Value>> {
    match path {
        PathExpr::ByKeys(segments) => {
            let (last, parents) = split_segments(segments)?;
            let mut current = root_object_mut(document)?;
            for segment in parents {
                current = match current.get_mut(segment) {
                    Some(Value::Object(map)) => map,
                    _ => return Err(not_found(path)),
                };
            }
            // shift_remove keeps the remaining keys in document order.
            Ok(current.shift_remove(last))
        }
        PathExpr::ByIndex(index) => match document {
            Value::Array(items) if *index < items.len() => Ok(Some(items.remove(*index))),
            Value::Array(_) => Ok(None),
            other => Err(mismatch(ValueKind::Array, other)),
        },
    }
}

fn split_segments(segments: &[String]) -> PathResult<(&String, &[String])> {
    segments.split_last().ok_or(PathError::EmptyPath)
}

fn root_object_mut(document: &mut Document) -> PathResult<&mut Map<String, Value>> {
    match document {
        Value::Object(map) => Ok(map),
        other => Err(mismatch(ValueKind::Object, other)),
    }
}

fn not_found(path: &PathExpr) -> PathError {
    PathError::NotFound {
        path: path.to_string(),
    }
}

fn mismatch(expected: ValueKind, found: &Value) -> PathError {
    PathError::TypeMismatch {
        expected,
        found: ValueKind::of(found),
    }
}
