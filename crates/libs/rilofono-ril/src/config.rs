use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RilError;

/// Bridge backend configuration, read from TOML.
///
/// ```toml
/// classpath = "/system/framework/rilofono.jar"
/// hosted_class = "rilofono/Ril"
///
/// [env]
/// ANDROID_DATA = "/data/misc/radio"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Bytecode archive loaded by the embedded runtime.
    pub classpath: String,
    /// Class of the hosted radio object.
    pub hosted_class: String,
    /// Extra launcher options, appended after the classpath.
    pub runtime_options: Vec<String>,
    pub ignore_unrecognized: bool,
    /// Environment seen by the embedded runtime.
    pub env: BTreeMap<String, String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            classpath: "/system/framework/rilofono.jar".into(),
            hosted_class: "rilofono/Ril".into(),
            runtime_options: Vec::new(),
            ignore_unrecognized: false,
            env: BTreeMap::from([("ANDROID_DATA".to_string(), "/data/misc/radio".to_string())]),
        }
    }
}

impl BridgeConfig {
    pub const DEFAULT_PATH: &'static str = "/system/etc/rilofono/bridge.toml";

    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    }

    /// Load `path`, falling back to defaults when it does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, RilError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("no bridge config at {}; using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_path(path).map_err(|err| RilError::Config {
            message: format!("{}: {err}", path.display()),
        })
    }

    /// Launch options handed to the runtime launcher.
    pub fn runtime_options(&self) -> RuntimeOptions {
        let mut options = vec!["-classpath".to_string(), self.classpath.clone()];
        options.extend(self.runtime_options.iter().cloned());
        RuntimeOptions {
            options,
            env: self.env.clone(),
            ignore_unrecognized: self.ignore_unrecognized,
        }
    }
}

/// Options for one embedded runtime launch.
///
/// `env` applies to the launched runtime only, never to the host process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeOptions {
    pub options: Vec<String>,
    pub env: BTreeMap<String, String>,
    pub ignore_unrecognized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_defaults() {
        let cfg = BridgeConfig::from_toml("").expect("parse");
        assert_eq!(cfg, BridgeConfig::default());
        assert_eq!(cfg.env.get("ANDROID_DATA").map(String::as_str), Some("/data/misc/radio"));
    }

    #[test]
    fn classpath_leads_runtime_options() {
        let cfg = BridgeConfig::from_toml(
            r#"
classpath = "/data/local/tmp/radio.jar"
runtime_options = ["-Xcheck:jni"]
ignore_unrecognized = true
"#,
        )
        .expect("parse");
        let opts = cfg.runtime_options();
        assert_eq!(opts.options, vec!["-classpath", "/data/local/tmp/radio.jar", "-Xcheck:jni"]);
        assert!(opts.ignore_unrecognized);
    }

    #[test]
    fn env_table_replaces_default_env() {
        let cfg = BridgeConfig::from_toml(
            r#"
[env]
ANDROID_DATA = "/data/rilofono"
ANDROID_ROOT = "/system"
"#,
        )
        .expect("parse");
        assert_eq!(cfg.env.len(), 2);
        assert_eq!(cfg.runtime_options().env["ANDROID_DATA"], "/data/rilofono");
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(BridgeConfig::from_toml("classpath = 3").is_err());
    }
}
