use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use imprint_instruments::options::ScoringOptions;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

pub const CONFIG_ENV: &str = "IMPRINT_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImprintConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Applied to every instrument.
    #[serde(default)]
    pub defaults: ScoringOptions,
    /// Per-instrument overrides, keyed by instrument id. Unset fields fall
    /// back to `defaults`.
    #[serde(default)]
    pub instruments: BTreeMap<String, InstrumentOverrides>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstrumentOverrides {
    pub top_n: Option<usize>,
    pub discrepancy_threshold: Option<f64>,
    pub safety_threshold: Option<i32>,
}

impl ImprintConfig {
    /// Effective options for one instrument.
    pub fn options_for(&self, instrument_id: &str) -> ScoringOptions {
        let mut options = self.defaults.clone();
        if let Some(o) = self.instruments.get(instrument_id) {
            if let Some(top_n) = o.top_n {
                options.top_n = top_n;
            }
            if o.discrepancy_threshold.is_some() {
                options.discrepancy_threshold = o.discrepancy_threshold;
            }
            if o.safety_threshold.is_some() {
                options.safety_threshold = o.safety_threshold;
            }
        }
        options
    }
}

/// Load from `explicit`, else from `$IMPRINT_CONFIG`, else built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> eyre::Result<ImprintConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => std::env::var_os(CONFIG_ENV).map(PathBuf::from),
    };
    match path {
        Some(path) => load_config(&path),
        None => {
            tracing::debug!("no config given, using defaults");
            Ok(ImprintConfig::default())
        }
    }
}

pub fn load_config(path: &Path) -> eyre::Result<ImprintConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ImprintConfig = serde_json::from_value(migrated)?;
    tracing::debug!(path = %path.display(), version = config.config_version, "config loaded");
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update imprint."
        ));
    }

    // v0 → v1: flat scoring keys move under `defaults`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        let mut defaults = serde_json::Map::new();
        for key in ["top_n", "discrepancy_threshold", "safety_threshold"] {
            if let Some(value) = obj.remove(key) {
                defaults.insert(key.to_string(), value);
            }
        }
        obj.entry("defaults")
            .or_insert(serde_json::Value::Object(defaults));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (moved scoring keys under defaults)");
    }

    Ok(json)
}
