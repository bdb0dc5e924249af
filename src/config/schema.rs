use serde::{Deserialize, Serialize};

/// One launchable backend: endpoint, token and model identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformEntry {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(rename = "ANTHROPIC_BASE_URL", default)]
    pub base_url: String,

    #[serde(rename = "ANTHROPIC_AUTH_TOKEN", default)]
    pub auth_token: String,

    #[serde(rename = "ANTHROPIC_MODEL", default)]
    pub model: String,

    #[serde(
        rename = "ANTHROPIC_SMALL_FAST_MODEL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub small_model: Option<String>,
}

impl PlatformEntry {
    /// Vendor label, treating an empty string as absent.
    pub fn vendor(&self) -> Option<&str> {
        self.vendor.as_deref().filter(|v| !v.is_empty())
    }

    /// Small/fast model, treating an empty string as absent.
    pub fn small_model(&self) -> Option<&str> {
        self.small_model.as_deref().filter(|m| !m.is_empty())
    }

    /// Label used by the picker and listings, e.g. `prod (Anthropic)`.
    pub fn label(&self) -> String {
        match self.vendor() {
            Some(vendor) => format!("{} ({})", self.name, vendor),
            None => self.name.clone(),
        }
    }

    /// Names of required fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.base_url.trim().is_empty() {
            missing.push("ANTHROPIC_BASE_URL");
        }
        if self.auth_token.trim().is_empty() {
            missing.push("ANTHROPIC_AUTH_TOKEN");
        }
        if self.model.trim().is_empty() {
            missing.push("ANTHROPIC_MODEL");
        }
        missing
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GateConfig {
    #[serde(default)]
    pub platforms: Vec<PlatformEntry>,
}

/// Accepted on-disk shapes. Older files hold a bare array of platforms.
#[derive(Deserialize)]
#[serde(untagged)]
pub(super) enum ConfigFile {
    Wrapped(GateConfig),
    Bare(Vec<PlatformEntry>),
}

impl From<ConfigFile> for GateConfig {
    fn from(file: ConfigFile) -> Self {
        match file {
            ConfigFile::Wrapped(config) => config,
            ConfigFile::Bare(platforms) => GateConfig { platforms },
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigMessage {
    Warning(String),
    Error(String),
}

impl ConfigMessage {
    pub fn is_error(&self) -> bool {
        matches!(self, ConfigMessage::Error(_))
    }

    pub fn text(&self) -> &str {
        match self {
            ConfigMessage::Warning(text) | ConfigMessage::Error(text) => text,
        }
    }
}

/// What [`GateConfig::upsert`] did with the entry.
#[derive(Debug, PartialEq, Eq)]
pub enum Upsert {
    Added,
    Updated,
}

impl GateConfig {
    pub fn validate(&self) -> Vec<ConfigMessage> {
        let mut messages = Vec::new();

        for (i, platform) in self.platforms.iter().enumerate() {
            let missing = platform.missing_fields();
            if !missing.is_empty() {
                let label = if platform.name.trim().is_empty() {
                    format!("platform #{}", i + 1)
                } else {
                    format!("platform '{}'", platform.name)
                };
                messages.push(ConfigMessage::Error(format!(
                    "{} is missing {}",
                    label,
                    missing.join(", ")
                )));
            }
        }

        for (i, platform) in self.platforms.iter().enumerate() {
            let first = self
                .platforms
                .iter()
                .position(|p| p.name == platform.name)
                .unwrap_or(i);
            if first < i && !platform.name.is_empty() {
                messages.push(ConfigMessage::Warning(format!(
                    "duplicate platform name '{}' (entry #{}); only entry #{} is reachable",
                    platform.name,
                    i + 1,
                    first + 1
                )));
            }
        }

        messages
    }

    /// Replace the first entry with the same name, or append.
    pub fn upsert(&mut self, entry: PlatformEntry) -> Upsert {
        match self.platforms.iter_mut().find(|p| p.name == entry.name) {
            Some(existing) => {
                *existing = entry;
                Upsert::Updated
            }
            None => {
                self.platforms.push(entry);
                Upsert::Added
            }
        }
    }

    /// Remove the first entry with exactly this name.
    pub fn remove(&mut self, name: &str) -> Option<PlatformEntry> {
        let index = self.platforms.iter().position(|p| p.name == name)?;
        Some(self.platforms.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> PlatformEntry {
        PlatformEntry {
            name: name.to_string(),
            vendor: None,
            base_url: "https://api.example.com".into(),
            auth_token: "sk-test-token".into(),
            model: "claude-sonnet-4".into(),
            small_model: None,
        }
    }

    #[test]
    fn deserializes_env_style_keys() {
        let json = r#"{
            "name": "prod",
            "vendor": "Anthropic",
            "ANTHROPIC_BASE_URL": "https://api.anthropic.com",
            "ANTHROPIC_AUTH_TOKEN": "sk-abc",
            "ANTHROPIC_MODEL": "claude-sonnet-4",
            "ANTHROPIC_SMALL_FAST_MODEL": ""
        }"#;
        let p: PlatformEntry = serde_json::from_str(json).unwrap();
        assert_eq!(p.base_url, "https://api.anthropic.com");
        assert_eq!(p.vendor(), Some("Anthropic"));
        assert_eq!(p.small_model(), None);
        assert_eq!(p.label(), "prod (Anthropic)");
    }

    #[test]
    fn bare_array_is_accepted() {
        let json = r#"[{"name": "a", "ANTHROPIC_BASE_URL": "u", "ANTHROPIC_AUTH_TOKEN": "t", "ANTHROPIC_MODEL": "m"}]"#;
        let file: ConfigFile = serde_json::from_str(json).unwrap();
        let config = GateConfig::from(file);
        assert_eq!(config.platforms.len(), 1);
        assert_eq!(config.platforms[0].name, "a");
    }

    #[test]
    fn missing_required_fields_are_errors() {
        let mut bad = entry("prod");
        bad.model.clear();
        bad.auth_token = "  ".into();
        let config = GateConfig {
            platforms: vec![bad],
        };
        let messages = config.validate();
        assert_eq!(messages.len(), 1);
        match &messages[0] {
            ConfigMessage::Error(e) => {
                assert!(e.contains("ANTHROPIC_AUTH_TOKEN"));
                assert!(e.contains("ANTHROPIC_MODEL"));
            }
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_names_warn() {
        let config = GateConfig {
            platforms: vec![entry("prod"), entry("dev"), entry("prod")],
        };
        let messages = config.validate();
        assert_eq!(messages.len(), 1);
        assert!(matches!(&messages[0], ConfigMessage::Warning(w) if w.contains("entry #3")));
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut config = GateConfig {
            platforms: vec![entry("a"), entry("b")],
        };
        let mut updated = entry("a");
        updated.model = "other".into();

        assert_eq!(config.upsert(updated), Upsert::Updated);
        assert_eq!(config.platforms[0].model, "other");
        assert_eq!(config.upsert(entry("c")), Upsert::Added);
        assert_eq!(config.platforms.len(), 3);
    }

    #[test]
    fn remove_takes_first_match_only() {
        let mut config = GateConfig {
            platforms: vec![entry("a"), entry("b")],
        };
        assert!(config.remove("b").is_some());
        assert!(config.remove("b").is_none());
        assert_eq!(config.platforms.len(), 1);
    }
}
