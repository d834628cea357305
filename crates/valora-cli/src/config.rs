use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

const DEFAULT_BATTERY: &str = "valoracion_psicologica";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValoraConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Battery used when an evaluation file names none.
    pub default_battery: String,
    #[serde(default)]
    pub log_format: LogFormat,
    pub created_at: jiff::Timestamp,
}

impl Default for ValoraConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            default_battery: DEFAULT_BATTERY.to_string(),
            log_format: LogFormat::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("valora").join("config.json"))
}

/// The explicit path if given, otherwise the per-user config file.
pub fn config_path(explicit: Option<&Path>) -> eyre::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

/// A loaded config and, when it was migrated, the on-disk version it
/// started from. Loading happens before logging is set up, so the caller
/// reports the migration.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ValoraConfig,
    pub migrated_from: Option<u32>,
}

/// Load the config at `path`, or defaults when the file does not exist.
pub fn load_config(path: &Path) -> eyre::Result<LoadedConfig> {
    if !path.exists() {
        return Ok(LoadedConfig {
            config: ValoraConfig::default(),
            migrated_from: None,
        });
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ValoraConfig = serde_json::from_value(migrated)?;
    Ok(LoadedConfig {
        config,
        migrated_from: (on_disk_version < CURRENT_VERSION).then_some(on_disk_version),
    })
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update valora."
        ));
    }

    // v0 → v1: `battery` renamed to `default_battery`, `created_at` added.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        let battery = obj
            .remove("battery")
            .unwrap_or_else(|| serde_json::Value::String(DEFAULT_BATTERY.to_string()));
        obj.entry("default_battery").or_insert(battery);
        obj.entry("created_at")
            .or_insert(serde_json::Value::String(jiff::Timestamp::now().to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &ValoraConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrates_unversioned_config() {
        let json = serde_json::json!({ "battery": "prueba_trabajo" });
        let migrated = migrate(json, 0).unwrap();
        let config: ValoraConfig = serde_json::from_value(migrated).unwrap();
        assert_eq!(config.config_version, 1);
        assert_eq!(config.default_battery, "prueba_trabajo");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn load_reports_the_migrated_version() {
        let dir = std::env::temp_dir().join(format!("valora-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let legacy = dir.join("legacy.json");
        std::fs::write(&legacy, r#"{ "battery": "prueba_trabajo" }"#).unwrap();
        let loaded = load_config(&legacy).unwrap();
        assert_eq!(loaded.migrated_from, Some(0));
        assert_eq!(loaded.config.default_battery, "prueba_trabajo");

        let current = dir.join("current.json");
        save_config(&current, &loaded.config).unwrap();
        assert_eq!(load_config(&current).unwrap().migrated_from, None);

        assert_eq!(load_config(&dir.join("missing.json")).unwrap().migrated_from, None);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn rejects_newer_config() {
        let json = serde_json::json!({ "config_version": 9 });
        assert!(migrate(json, 9).is_err());
    }
}
