use crate::case::Transform;
use serde::{Deserialize, Serialize};

/// One constant of an enumerated type, with its final display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name:    String,
    pub display: String,
    pub value:   i64,
}

impl Member {
    pub fn new(name: &str, display: &str, value: i64) -> Member {
        Member {
            name:    name.to_owned(),
            display: display.to_owned(),
            value,
        }
    }
}

/// A named enumerated type and its members in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    pub name:    String,
    pub members: Vec<Member>,
}

impl EnumDef {
    pub fn new(name: &str, members: Vec<Member>) -> EnumDef {
        EnumDef {
            name: name.to_owned(),
            members,
        }
    }
}

/// A member as written in a manifest. `display` is computed when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDecl {
    pub name:  String,
    pub value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl MemberDecl {
    pub fn new(name: &str, value: i64) -> MemberDecl {
        MemberDecl {
            name:    name.to_owned(),
            value,
            display: None,
        }
    }

    pub fn with_display(name: &str, value: i64, display: &str) -> MemberDecl {
        MemberDecl {
            name:    name.to_owned(),
            value,
            display: Some(display.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDecl {
    pub name:    String,
    pub members: Vec<MemberDecl>,
}

impl EnumDecl {
    pub fn new(name: &str, members: Vec<MemberDecl>) -> EnumDecl {
        EnumDecl {
            name: name.to_owned(),
            members,
        }
    }

    /// Resolves every member's display string against `config`.
    pub fn resolve(&self, config: &Config) -> EnumDef {
        let members = self
            .members
            .iter()
            .map(|m| Member {
                name:    m.name.clone(),
                display: m.display.clone().unwrap_or_else(|| config.display_name(&m.name)),
                value:   m.value,
            })
            .collect();

        EnumDef {
            name: self.name.clone(),
            members,
        }
    }
}

/// Generator settings. Every field has a default so a manifest may omit
/// the whole `config` object or any part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Above this many runs, tables collapse into one flat string and a name-keyed map.
    pub runs_threshold: usize,
    /// Prefix of every generated table, map and lookup function identifier.
    pub prefix:         String,
    pub json:           bool,
    pub text:           bool,
    pub yaml:           bool,
    /// Emit the `pub enum` declaration along with its impls.
    pub declare:        bool,
    /// Path to the runtime crate as seen from the generated code.
    pub runtime:        String,
    pub transform:      Transform,
    pub trim_prefix:    String,
    pub add_prefix:     String,
}

pub const DEFAULT_RUNS_THRESHOLD: usize = 10;
pub const DEFAULT_PREFIX: &str = "enum";
pub const DEFAULT_RUNTIME: &str = "::brine_enumer";

impl Default for Config {
    fn default() -> Self {
        Config {
            runs_threshold: DEFAULT_RUNS_THRESHOLD,
            prefix:         DEFAULT_PREFIX.to_owned(),
            json:           false,
            text:           false,
            yaml:           false,
            declare:        true,
            runtime:        DEFAULT_RUNTIME.to_owned(),
            transform:      Transform::Noop,
            trim_prefix:    String::new(),
            add_prefix:     String::new(),
        }
    }
}

impl Config {
    /// Display string for a member name: trim, transform, then prefix.
    pub fn display_name(&self, name: &str) -> String {
        let trimmed = name.strip_prefix(self.trim_prefix.as_str()).unwrap_or(name);
        format!("{}{}", self.add_prefix, self.transform.apply(trimmed))
    }
}

/// Top-level input document: the collector's output for one generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default)]
    pub config:  Config,
    pub enums:   Vec<EnumDecl>,
}

impl Manifest {
    pub fn definitions(&self) -> Vec<EnumDef> {
        self.enums.iter().map(|e| e.resolve(&self.config)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_display_wins_over_transform() {
        let config = Config {
            transform: Transform::Upper,
            ..Config::default()
        };
        let decl = EnumDecl::new("Color", vec![
            MemberDecl::new("Red", 0),
            MemberDecl::with_display("Green", 1, "verde"),
        ]);
        let def = decl.resolve(&config);
        assert_eq!(def.members[0], Member::new("Red", "RED", 0));
        assert_eq!(def.members[1], Member::new("Green", "verde", 1));
    }

    #[test]
    fn trim_then_transform_then_add_prefix() {
        let config = Config {
            trim_prefix: "Pill".to_owned(),
            add_prefix:  "pill.".to_owned(),
            transform:   Transform::Kebab,
            ..Config::default()
        };
        assert_eq!(config.display_name("PillAcetaminophen"), "pill.acetaminophen");
        assert_eq!(config.display_name("PillVitaminC"), "pill.vitamin-c");
        assert_eq!(config.display_name("Other"), "pill.other");
    }

    #[test]
    fn manifest_defaults() {
        let manifest: Manifest = serde_json::from_str(r#"{
            "enums": [
                { "name": "Color", "members": [ { "name": "Red", "value": 0 } ] }
            ]
        }"#).unwrap();

        assert!(manifest.package.is_none());
        assert_eq!(manifest.config, Config::default());
        assert_eq!(manifest.config.runs_threshold, 10);
        assert_eq!(manifest.definitions()[0].members[0].display, "Red");
    }

    #[test]
    fn manifest_partial_config() {
        let manifest: Manifest = serde_json::from_str(r#"{
            "package": "colors",
            "config": { "runs_threshold": 1, "json": true, "transform": "snake-upper" },
            "enums": []
        }"#).unwrap();

        assert_eq!(manifest.package.as_deref(), Some("colors"));
        assert_eq!(manifest.config.runs_threshold, 1);
        assert!(manifest.config.json);
        assert!(!manifest.config.text);
        assert_eq!(manifest.config.transform, Transform::SnakeUpper);
        assert_eq!(manifest.config.prefix, "enum");
    }
}
