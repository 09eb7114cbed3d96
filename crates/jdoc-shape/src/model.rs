use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reserved top-level model key holding the required-field list.
pub const REQUIRED_KEY: &str = "required";

/// A model descriptor: an example document used only as a validation
/// template, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeModel(Value);

impl ShapeModel {
    pub fn new(template: Value) -> Self {
        Self(template)
    }

    /// Attach a required-field list, replacing any existing one.
    ///
    /// Has no effect on a model whose root is not an object.
    pub fn with_required<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Value::Object(map) = &mut self.0 {
            let list = fields.into_iter().map(|f| Value::String(f.into())).collect();
            map.insert(REQUIRED_KEY.to_string(), Value::Array(list));
        }
        self
    }

    pub fn template(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Field names from the `"required"` list.
    ///
    /// Returns `None` when the model declares no list. Entries that are not
    /// strings are skipped.
    pub fn required_fields(&self) -> Option<Vec<&str>> {
        match self.0.get(REQUIRED_KEY)? {
            Value::Array(items) => Some(items.iter().filter_map(Value::as_str).collect()),
            _ => None,
        }
    }
}

impl From<Value> for ShapeModel {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_required_list() {
        let model = ShapeModel::new(json!({"name": ""}));
        assert_eq!(model.required_fields(), None);
    }

    #[test]
    fn required_list_read_from_template() {
        let model = ShapeModel::new(json!({"name": "", "required": ["name", 3, "age"]}));
        assert_eq!(model.required_fields(), Some(vec!["name", "age"]));
    }

    #[test]
    fn non_array_required_is_ignored() {
        let model = ShapeModel::new(json!({"required": "name"}));
        assert_eq!(model.required_fields(), None);
    }

    #[test]
    fn with_required_overwrites() {
        let model = ShapeModel::new(json!({"required": ["x"]})).with_required(["age"]);
        assert_eq!(model.required_fields(), Some(vec!["age"]));
    }

    #[test]
    fn with_required_on_primitive_model_is_noop() {
        let model = ShapeModel::new(json!("")).with_required(["age"]);
        assert_eq!(model.template(), &json!(""));
    }

    #[test]
    fn serde_is_transparent() {
        let model: ShapeModel = serde_json::from_str(r#"{"age": 0}"#).unwrap();
        assert_eq!(model.template(), &json!({"age": 0}));
        assert_eq!(serde_json::to_value(&model).unwrap(), json!({"age": 0}));
    }
}
