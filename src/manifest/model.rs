/// The parsed `package.json` and typed accessors for the fields we print.
///
/// No schema is enforced: any JSON object is a valid manifest. Accessors
/// return `None` (or an empty list) when a field is missing or has the wrong
/// type, so callers never have to distinguish the two.
use serde_json::{Map, Value};

/// A loaded package manifest.
///
/// Key order follows the source file (`serde_json` is built with
/// `preserve_order`), which keeps dependency listings in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    fields: Map<String, Value>,
}

/// One `name: range` entry of a dependency map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEntry {
    /// Dependency package name.
    pub name: String,
    /// Declared version range, verbatim when it is a string.
    pub range: String,
}

impl Manifest {
    /// Wrap an already-parsed JSON value. Returns `None` unless it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// The `name` field as displayed in the summary header.
    ///
    /// Strings are returned verbatim. Numbers, booleans and `null` use their
    /// JSON rendering. A missing name, an array or an object is `None`.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        match self.fields.get("name")? {
            Value::String(s) => Some(s.clone()),
            v @ (Value::Number(_) | Value::Bool(_) | Value::Null) => Some(v.to_string()),
            _ => None,
        }
    }

    /// `version`, when it is a non-empty string.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        non_empty_str(self.fields.get("version"))
    }

    /// `type` (module system), when it is a non-empty string.
    #[must_use]
    pub fn module_type(&self) -> Option<&str> {
        non_empty_str(self.fields.get("type"))
    }

    /// `repository.url`, when every level exists and the url is a non-empty string.
    #[must_use]
    pub fn repository_url(&self) -> Option<&str> {
        non_empty_str(self.fields.get("repository").and_then(|r| r.get("url")))
    }

    /// Entries of `peerDependencies`, in declaration order.
    #[must_use]
    pub fn peer_dependencies(&self) -> Vec<DependencyEntry> {
        self.dependency_map("peerDependencies")
    }

    /// Entries of `dependencies`, in declaration order.
    #[must_use]
    pub fn dependencies(&self) -> Vec<DependencyEntry> {
        self.dependency_map("dependencies")
    }

    fn dependency_map(&self, key: &str) -> Vec<DependencyEntry> {
        let Some(Value::Object(map)) = self.fields.get(key) else {
            return Vec::new();
        };
        map.iter()
            .map(|(name, range)| DependencyEntry {
                name: name.clone(),
                range: match range {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                },
            })
            .collect()
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest(value: Value) -> Manifest {
        Manifest::from_value(value).unwrap()
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(Manifest::from_value(json!([1, 2])).is_none());
        assert!(Manifest::from_value(json!("package")).is_none());
        assert!(Manifest::from_value(Value::Null).is_none());
    }

    #[test]
    fn test_string_fields() {
        let m = manifest(json!({
            "name": "x",
            "version": "1.0.0",
            "type": "module",
            "repository": { "type": "git", "url": "https://example.com/x.git" }
        }));
        assert_eq!(m.display_name().as_deref(), Some("x"));
        assert_eq!(m.version(), Some("1.0.0"));
        assert_eq!(m.module_type(), Some("module"));
        assert_eq!(m.repository_url(), Some("https://example.com/x.git"));
    }

    #[test]
    fn test_wrong_typed_fields_are_absent() {
        let m = manifest(json!({
            "version": 1,
            "type": "",
            "repository": "https://example.com/x.git"
        }));
        assert_eq!(m.version(), None);
        assert_eq!(m.module_type(), None);
        assert_eq!(m.repository_url(), None);
    }

    #[test]
    fn test_display_name_fallbacks() {
        assert_eq!(manifest(json!({ "name": 7 })).display_name().as_deref(), Some("7"));
        assert_eq!(manifest(json!({})).display_name(), None);
        assert_eq!(manifest(json!({ "name": null })).display_name().as_deref(), Some("null"));
        assert_eq!(manifest(json!({ "name": ["a"] })).display_name(), None);
    }

    #[test]
    fn test_dependencies_keep_declaration_order() {
        let m: Manifest = Manifest::from_value(
            serde_json::from_str(r#"{"peerDependencies":{"zeta":"^1","alpha":"~2","mid":"*"}}"#)
                .unwrap(),
        )
        .unwrap();
        let names: Vec<_> = m.peer_dependencies().into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_dependency_map_wrong_type_is_empty() {
        let m = manifest(json!({ "peerDependencies": ["a"], "dependencies": "b" }));
        assert!(m.peer_dependencies().is_empty());
        assert!(m.dependencies().is_empty());
    }

    #[test]
    fn test_non_string_range_uses_json_rendering() {
        let m = manifest(json!({ "dependencies": { "a": 3, "b": "^1.2.0" } }));
        let deps = m.dependencies();
        assert_eq!(deps[0].range, "3");
        assert_eq!(deps[1].range, "^1.2.0");
    }
}
