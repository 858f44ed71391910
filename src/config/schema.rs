//! Typed validators for project and dependency configuration.
//!
//! Validation walks the raw JSON value once, collecting every problem with
//! its field path, and fills defaults for missing fields. A missing input
//! (`None`) is valid and produces the all-defaults value.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::{Map, Value};

use super::{
    DependencyConfig, DependencySettings, FieldError, PlatformConfig, ProjectUserConfig,
    ValidationError,
};

/// Validates raw configuration values and normalizes them into typed config.
///
/// Kept as a trait so the accepted shapes can change independently of the
/// resolver that discovers them.
pub trait ConfigSchema: Send + Sync {
    /// Validates a project configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every non-conforming field.
    fn validate_project(&self, raw: Option<&Value>) -> Result<ProjectUserConfig, ValidationError>;

    /// Validates a dependency configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every non-conforming field.
    fn validate_dependency(&self, raw: Option<&Value>)
        -> Result<DependencyConfig, ValidationError>;
}

/// The built-in schema. Unknown keys are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSchema;

impl ConfigSchema for StandardSchema {
    fn validate_project(&self, raw: Option<&Value>) -> Result<ProjectUserConfig, ValidationError> {
        let mut report = Report::default();
        let config = project(raw, &mut report);
        report.finish("project configuration", config)
    }

    fn validate_dependency(
        &self,
        raw: Option<&Value>,
    ) -> Result<DependencyConfig, ValidationError> {
        let mut report = Report::default();
        let config = dependency_config(raw, "", &mut report);
        report.finish("dependency configuration", config)
    }
}

#[derive(Default)]
struct Report {
    errors: Vec<FieldError>,
}

impl Report {
    fn add_error(&mut self, path: &str, message: impl Into<String>) {
        let path = if path.is_empty() { "(root)" } else { path };
        self.errors.push(FieldError { path: path.to_string(), message: message.into() });
    }

    fn finish<T>(self, subject: &str, value: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError { subject: subject.to_string(), errors: self.errors })
        }
    }
}

fn child(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn expect_object<'v>(
    value: &'v Value,
    path: &str,
    report: &mut Report,
) -> Option<&'v Map<String, Value>> {
    if let Value::Object(map) = value {
        Some(map)
    } else {
        report.add_error(path, format!("must be an object, got {}", kind(value)));
        None
    }
}

fn string_list(value: Option<&Value>, path: &str, report: &mut Report) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };
    let Value::Array(items) = value else {
        report.add_error(path, format!("must be an array, got {}", kind(value)));
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::String(s) => Some(s.clone()),
            other => {
                report.add_error(
                    &format!("{path}[{index}]"),
                    format!("must be a string, got {}", kind(other)),
                );
                None
            }
        })
        .collect()
}

/// Validates an object whose values are checked individually by `entry`.
fn object_map<T>(
    value: Option<&Value>,
    path: &str,
    report: &mut Report,
    mut entry: impl FnMut(&Value, &str, &mut Report) -> Option<T>,
) -> BTreeMap<String, T> {
    let Some(map) = value.and_then(|v| expect_object(v, path, report)) else {
        return BTreeMap::new();
    };
    map.iter()
        .filter_map(|(key, item)| {
            entry(item, &child(path, key), report).map(|parsed| (key.clone(), parsed))
        })
        .collect()
}

fn platform_config(value: &Value, path: &str, report: &mut Report) -> Option<PlatformConfig> {
    expect_object(value, path, report).cloned()
}

fn nullable<T>(
    value: &Value,
    path: &str,
    report: &mut Report,
    inner: impl FnOnce(&Value, &str, &mut Report) -> Option<T>,
) -> Option<Option<T>> {
    if value.is_null() {
        Some(None)
    } else {
        inner(value, path, report).map(Some)
    }
}

fn command(value: &Value, path: &str, report: &mut Report) -> Option<String> {
    if let Value::String(s) = value {
        Some(s.clone())
    } else {
        report.add_error(path, format!("must be a string, got {}", kind(value)));
        None
    }
}

/// Accepts either a map of parameters or an array of prompt objects keyed by `name`.
fn params(value: Option<&Value>, path: &str, report: &mut Report) -> BTreeMap<String, Value> {
    match value {
        None => BTreeMap::new(),
        Some(Value::Object(map)) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        Some(Value::Array(items)) => {
            let mut out = BTreeMap::new();
            for (index, item) in items.iter().enumerate() {
                let item_path = format!("{path}[{index}]");
                let Some(prompt) = expect_object(item, &item_path, report) else {
                    continue;
                };
                match prompt.get("name") {
                    Some(Value::String(name)) => {
                        out.insert(name.clone(), item.clone());
                    }
                    _ => report.add_error(&child(&item_path, "name"), "must be a string"),
                }
            }
            out
        }
        Some(other) => {
            report.add_error(path, format!("must be an object or an array, got {}", kind(other)));
            BTreeMap::new()
        }
    }
}

fn dependency_settings(value: &Value, path: &str, report: &mut Report) -> DependencySettings {
    let Some(map) = expect_object(value, path, report) else {
        return DependencySettings::default();
    };
    DependencySettings {
        platforms: object_map(map.get("platforms"), &child(path, "platforms"), report, |v, p, r| {
            nullable(v, p, r, platform_config)
        }),
        assets: string_list(map.get("assets"), &child(path, "assets"), report),
        hooks: object_map(map.get("hooks"), &child(path, "hooks"), report, |v, p, r| {
            nullable(v, p, r, command)
        }),
        params: params(map.get("params"), &child(path, "params"), report),
    }
}

fn dependency_config(value: Option<&Value>, path: &str, report: &mut Report) -> DependencyConfig {
    let Some(map) = value.and_then(|v| expect_object(v, path, report)) else {
        return DependencyConfig::default();
    };
    DependencyConfig {
        dependency: map
            .get("dependency")
            .map(|v| dependency_settings(v, &child(path, "dependency"), report))
            .unwrap_or_default(),
        commands: string_list(map.get("commands"), &child(path, "commands"), report),
        platforms: map.get("platforms").map(|v| {
            object_map(Some(v), &child(path, "platforms"), report, |v, p, r| {
                expect_object(v, p, r).map(|_| v.clone())
            })
        }),
    }
}

fn project(value: Option<&Value>, report: &mut Report) -> ProjectUserConfig {
    let Some(map) = value.and_then(|v| expect_object(v, "", report)) else {
        return ProjectUserConfig::default();
    };
    let react_native_path = match map.get("reactNativePath") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(PathBuf::from(s)),
        Some(other) => {
            report.add_error("reactNativePath", format!("must be a string, got {}", kind(other)));
            None
        }
    };
    ProjectUserConfig {
        dependencies: object_map(map.get("dependencies"), "dependencies", report, |v, p, r| {
            Some(dependency_config(Some(v), p, r))
        }),
        commands: string_list(map.get("commands"), "commands", report),
        platforms: object_map(map.get("platforms"), "platforms", report, platform_config),
        assets: string_list(map.get("assets"), "assets", report),
        react_native_path,
    }
}
