use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use jdoc_shape::{ShapeModel, ShapeValidator, ValidationDialect};

use crate::error::{StoreError, StoreResult};

/// Construction-time options for a [`Store`](crate::Store).
///
/// Validation runs only when `validate_data` is set *and* a model is
/// configured; otherwise every candidate document is accepted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Model descriptor documents are checked against.
    pub model: Option<ShapeModel>,
    /// Whether mutating operations validate their candidate document.
    pub validate_data: bool,
    /// Which checks validation runs.
    pub dialect: ValidationDialect,
}

/// On-disk form of [`StoreOptions`]: the model may be inline or in a
/// separate JSON file, resolved relative to the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct OptionsFile {
    model: Option<ShapeModel>,
    model_file: Option<PathBuf>,
    validate_data: bool,
    dialect: ValidationDialect,
}

impl StoreOptions {
    /// Options with validation disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate against `model` using the default dialect.
    pub fn validated(model: impl Into<ShapeModel>) -> Self {
        Self {
            model: Some(model.into()),
            validate_data: true,
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<ShapeModel>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_validation(mut self, validate_data: bool) -> Self {
        self.validate_data = validate_data;
        self
    }

    pub fn with_dialect(mut self, dialect: ValidationDialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// The validator these options call for, or `None` when validation is
    /// bypassed.
    pub fn validator(&self) -> Option<ShapeValidator> {
        match (&self.model, self.validate_data) {
            (Some(model), true) => Some(ShapeValidator::new(model.clone(), self.dialect)),
            _ => None,
        }
    }

    /// Parse options from TOML. A `model_file` is resolved against `base`.
    pub fn from_toml_str(text: &str, base: &Path) -> StoreResult<Self> {
        let file: OptionsFile =
            toml::from_str(text).map_err(|e| StoreError::Config(e.to_string()))?;

        let model = match (file.model, file.model_file) {
            (Some(_), Some(_)) => {
                return Err(StoreError::Config(
                    "set either `model` or `model_file`, not both".into(),
                ))
            }
            (Some(model), None) => Some(model),
            (None, Some(model_file)) => Some(read_model_file(&base.join(model_file))?),
            (None, None) => None,
        };

        Ok(Self {
            model,
            validate_data: file.validate_data,
            dialect: file.dialect,
        })
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Config(format!("{}: {e}", path.display())))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_toml_str(&text, base)
    }
}

fn read_model_file(path: &Path) -> StoreResult<ShapeModel> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| StoreError::Config(format!("model file {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| StoreError::Config(format!("model file {}: {e}", path.display())))
}
