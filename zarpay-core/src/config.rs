//! Configuration management
//!
//! Reads an optional `settings.json` from the zarpay directory:
//! ```json
//! {
//!   "server": { "host": "127.0.0.1", "port": 5000 },
//!   "app": { "demoMode": false, "processingDelayMs": 2000 }
//! }
//! ```
//! Environment variables override the file for CI and local testing.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_processing_delay_ms() -> u64 {
    2000
}

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    server: ServerSettings,
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServerSettings {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    /// How long a pending transaction sits before the timer completes it
    #[serde(default = "default_processing_delay_ms")]
    processing_delay_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            demo_mode: false,
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}

/// Zarpay configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub demo_mode: bool,
    pub processing_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            demo_mode: false,
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}

impl Config {
    /// Load config from the zarpay directory
    ///
    /// Overrides, in priority order: `ZARPAY_HOST`, `ZARPAY_PORT`,
    /// `ZARPAY_DEMO_MODE`, `ZARPAY_PROCESSING_DELAY_MS`, then settings.json,
    /// then defaults.
    pub fn load(zarpay_dir: &Path) -> Result<Self> {
        let settings_path = zarpay_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let host = std::env::var("ZARPAY_HOST").unwrap_or(raw.server.host);
        let port = std::env::var("ZARPAY_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(raw.server.port);
        let demo_mode = match std::env::var("ZARPAY_DEMO_MODE").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.demo_mode,
        };
        let processing_delay_ms = std::env::var("ZARPAY_PROCESSING_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(raw.app.processing_delay_ms);

        Ok(Self {
            host,
            port,
            demo_mode,
            processing_delay_ms,
        })
    }

    /// Save config to the zarpay directory
    pub fn save(&self, zarpay_dir: &Path) -> Result<()> {
        let settings = SettingsFile {
            server: ServerSettings {
                host: self.host.clone(),
                port: self.port,
            },
            app: AppSettings {
                demo_mode: self.demo_mode,
                processing_delay_ms: self.processing_delay_ms,
            },
        };

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(zarpay_dir.join("settings.json"), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_no_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert!(!config.demo_mode);
        assert_eq!(config.processing_delay_ms, 2000);
    }

    #[test]
    fn test_load_from_settings_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"server": {"port": 8080}, "app": {"demoMode": true, "processingDelayMs": 50}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.demo_mode);
        assert_eq!(config.processing_delay_ms, 50);
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempdir().unwrap();
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 9000,
            demo_mode: true,
            processing_delay_ms: 100,
        };
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.host, "0.0.0.0");
        assert_eq!(loaded.port, 9000);
        assert!(loaded.demo_mode);
        assert_eq!(loaded.processing_delay_ms, 100);
    }

    #[test]
    fn test_malformed_settings_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "not json").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.port, 5000);
    }
}
