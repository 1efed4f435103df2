use crate::domain::models::UnsetPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub layout: LayoutSection,
    #[serde(default)]
    pub store: StoreSection,
}

#[derive(Debug, Deserialize, Default)]
pub struct LayoutSection {
    #[serde(default)]
    pub unset_policy: UnsetPolicy,
}

#[derive(Debug, Deserialize, Default)]
pub struct StoreSection {
    pub path: Option<PathBuf>,
}

/// Effective settings after the config file and CLI overrides are merged.
#[derive(Debug, Clone)]
pub struct Settings {
    pub store_path: PathBuf,
    pub unset_policy: UnsetPolicy,
}

impl Settings {
    pub fn resolve(
        config: ConfigFile,
        store_override: Option<PathBuf>,
        policy_override: Option<UnsetPolicy>,
    ) -> anyhow::Result<Self> {
        let store_path = match store_override.or(config.store.path) {
            Some(p) => p,
            None => default_store_path()?,
        };
        Ok(Self {
            store_path,
            unset_policy: policy_override.unwrap_or(config.layout.unset_policy),
        })
    }
}

fn config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/desks"))
}

pub fn config_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("store.json"))
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    parse_config(&raw)
}

pub fn parse_config(raw: &str) -> anyhow::Result<ConfigFile> {
    Ok(toml::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::{load_config_from, parse_config, Settings};
    use crate::domain::models::UnsetPolicy;
    use std::path::PathBuf;

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config("").expect("parse");
        assert_eq!(config.layout.unset_policy, UnsetPolicy::Neutral);
        assert!(config.store.path.is_none());
    }

    #[test]
    fn config_sections_are_read() {
        let config = parse_config(
            r#"
[layout]
unset_policy = "reject"

[store]
path = "/srv/desks/store.json"
"#,
        )
        .expect("parse");
        assert_eq!(config.layout.unset_policy, UnsetPolicy::Reject);
        assert_eq!(
            config.store.path,
            Some(PathBuf::from("/srv/desks/store.json"))
        );
    }

    #[test]
    fn unknown_policy_is_an_error() {
        assert!(parse_config("[layout]\nunset_policy = \"ignore\"\n").is_err());
    }

    #[test]
    fn cli_overrides_win() {
        let config = parse_config("[layout]\nunset_policy = \"drop\"\n[store]\npath = \"a.json\"\n")
            .expect("parse");
        let settings = Settings::resolve(
            config,
            Some(PathBuf::from("b.json")),
            Some(UnsetPolicy::Reject),
        )
        .expect("resolve");
        assert_eq!(settings.store_path, PathBuf::from("b.json"));
        assert_eq!(settings.unset_policy, UnsetPolicy::Reject);
    }

    #[test]
    fn missing_config_file_is_default() {
        let config = load_config_from(&PathBuf::from("/nonexistent/desks/config.toml"))
            .expect("missing file is fine");
        assert_eq!(config.layout.unset_policy, UnsetPolicy::Neutral);
    }
}
