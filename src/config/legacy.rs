//! Migration of the legacy `rnpm` manifest key.
//!
//! Older packages describe themselves under `"rnpm"` in `package.json`. The
//! adapter here rewrites that descriptor into the current dependency shape so
//! both formats go through the same schema. It performs no I/O; the optional
//! platform definition is returned as a path for the caller to load.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Manifest key holding the legacy descriptor.
pub const LEGACY_KEY: &str = "rnpm";

/// The legacy descriptor as found in the manifest. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LegacyDependencyDescriptor {
    /// iOS native settings.
    pub ios: Option<Value>,
    /// Android native settings.
    pub android: Option<Value>,
    /// Asset paths.
    pub assets: Option<Value>,
    /// Lifecycle hooks (`prelink`, `postlink`, ...).
    pub commands: Option<Value>,
    /// Parameters.
    pub params: Option<Value>,
    /// One plugin command or a list of them.
    pub plugin: Option<Value>,
    /// Path, relative to the package root, of a platform definition document.
    pub platform: Option<String>,
}

/// Result of adapting a legacy descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptedDependency {
    /// Raw value in the current dependency shape, ready for validation.
    pub config: Value,
    /// Platform definition to load and attach as `platforms`, if any.
    pub platform_module: Option<PathBuf>,
}

/// Rewrites a legacy descriptor into the current dependency shape.
///
/// Absent source fields stay absent in the output, except `commands` which is
/// always a list.
#[must_use]
pub fn adapt(descriptor: &LegacyDependencyDescriptor) -> AdaptedDependency {
    let mut platforms = Map::new();
    insert_present(&mut platforms, "ios", descriptor.ios.as_ref());
    insert_present(&mut platforms, "android", descriptor.android.as_ref());

    let mut dependency = Map::new();
    dependency.insert("platforms".into(), Value::Object(platforms));
    insert_present(&mut dependency, "assets", descriptor.assets.as_ref());
    insert_present(&mut dependency, "hooks", descriptor.commands.as_ref());
    insert_present(&mut dependency, "params", descriptor.params.as_ref());

    let commands = match &descriptor.plugin {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(single) => vec![single.clone()],
    };

    let mut config = Map::new();
    config.insert("dependency".into(), Value::Object(dependency));
    config.insert("commands".into(), Value::Array(commands));

    AdaptedDependency {
        config: Value::Object(config),
        platform_module: descriptor.platform.as_ref().map(PathBuf::from),
    }
}

fn insert_present(map: &mut Map<String, Value>, key: &str, value: Option<&Value>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor(raw: Value) -> LegacyDependencyDescriptor {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn maps_native_platforms_only() {
        let adapted = adapt(&descriptor(json!({
            "ios": {"project": "ios/Lib.xcodeproj"},
            "android": {"sourceDir": "android"}
        })));

        let dependency = &adapted.config["dependency"];
        assert_eq!(dependency["platforms"]["ios"], json!({"project": "ios/Lib.xcodeproj"}));
        assert_eq!(dependency["platforms"]["android"], json!({"sourceDir": "android"}));
        assert!(dependency.get("assets").is_none());
        assert!(dependency.get("hooks").is_none());
        assert!(dependency.get("params").is_none());
        assert_eq!(adapted.platform_module, None);
    }

    #[test]
    fn plugin_becomes_a_command_list() {
        let single = adapt(&descriptor(json!({"plugin": "foo"})));
        assert_eq!(single.config["commands"], json!(["foo"]));

        let none = adapt(&LegacyDependencyDescriptor::default());
        assert_eq!(none.config["commands"], json!([]));

        let many = adapt(&descriptor(json!({"plugin": ["a", "b"]})));
        assert_eq!(many.config["commands"], json!(["a", "b"]));
    }

    #[test]
    fn commands_become_hooks() {
        let adapted = adapt(&descriptor(json!({
            "commands": {"prelink": "node pre.js", "postlink": "node post.js"},
            "assets": ["fonts"],
            "params": [{"name": "key", "type": "input"}]
        })));

        let dependency = &adapted.config["dependency"];
        assert_eq!(dependency["hooks"], json!({"prelink": "node pre.js", "postlink": "node post.js"}));
        assert_eq!(dependency["assets"], json!(["fonts"]));
        assert_eq!(dependency["params"], json!([{"name": "key", "type": "input"}]));
    }

    #[test]
    fn platform_is_returned_as_path() {
        let adapted = adapt(&descriptor(json!({"platform": "./platform.json"})));
        assert_eq!(adapted.platform_module, Some(PathBuf::from("./platform.json")));
    }

    #[test]
    fn empty_descriptor_adapts_to_empty_shape() {
        let adapted = adapt(&LegacyDependencyDescriptor::default());
        assert_eq!(adapted.config, json!({"dependency": {"platforms": {}}, "commands": []}));
    }
}
