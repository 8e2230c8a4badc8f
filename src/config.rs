//! Configuration management for casefile
//!
//! Stores settings in ~/.config/casefile/config.json

use crate::assistant::client::{DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::keyring;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variables checked for an API key, in order
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Legacy plaintext key; moved into the keychain on first use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
    /// Gemini model id (defaults to gemini-3-flash-preview)
    #[serde(default)]
    pub model: Option<String>,
    /// Sampling temperature for the detective (defaults to 0.8)
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Override for the Generative Language API base URL
    #[serde(default)]
    pub api_base: Option<String>,
    /// Casebook loaded at startup instead of the built-in cases
    #[serde(default)]
    pub cases_path: Option<PathBuf>,
}

impl Config {
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("casefile"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.json"))
    }

    /// Load config from disk, or return default
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                preserve_corrupt_config(path, &content);
                tracing::warn!(
                    "Config file was corrupted ({}). A backup was saved and defaults were loaded.",
                    err
                );
                Self::default()
            }
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), String> {
        let dir = Self::config_dir()
            .ok_or_else(|| "Could not determine config directory".to_string())?;
        self.save_to(&dir)
    }

    pub fn save_to(&self, dir: &Path) -> Result<(), String> {
        fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("Failed to set config directory permissions: {}", e);
            }
        }

        let path = dir.join("config.json");
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        write_config_atomic(&path, &content).map_err(|e| format!("Failed to write config: {}", e))
    }

    pub fn model(&self) -> String {
        self.model
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_MODEL)
            .to_string()
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
            .filter(|t| (0.0..=2.0).contains(t))
            .unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// API base URL; an override that doesn't parse falls back to the default
    pub fn api_base(&self) -> String {
        match self.api_base.as_deref() {
            Some(base) => match url::Url::parse(base) {
                Ok(url) if url.as_str().ends_with('/') => url.to_string(),
                Ok(url) => format!("{}/", url),
                Err(err) => {
                    tracing::warn!("Ignoring invalid api_base '{}': {}", base, err);
                    DEFAULT_API_BASE.to_string()
                }
            },
            None => DEFAULT_API_BASE.to_string(),
        }
    }

    /// Get the Gemini API key (environment, then keychain, then legacy config)
    pub fn get_api_key(&mut self) -> Option<String> {
        if let Some(key) = api_key_from_env() {
            return Some(key);
        }

        match keyring::get_api_key() {
            Ok(Some(key)) => return Some(key),
            Ok(None) => {}
            Err(err) => keyring::warn_keychain_error_once("the API key", &err),
        }

        if let Some(key) = self.gemini_api_key.clone() {
            if keyring::set_api_key(&key).is_ok() {
                self.gemini_api_key = None;
                if let Err(e) = self.save() {
                    tracing::warn!("Failed to save config after key migration: {}", e);
                } else {
                    tracing::info!("migrated API key from config file to system keychain");
                }
            }
            return Some(key);
        }

        None
    }

    /// Store the API key in the keychain and drop any plaintext copy
    pub fn set_api_key(&mut self, key: &str) -> Result<(), String> {
        keyring::set_api_key(key).map_err(|e| {
            format!(
                "Failed to store API key in system keychain: {}. \
                 You can set the GEMINI_API_KEY environment variable instead.",
                e
            )
        })?;
        self.gemini_api_key = None;
        self.save()
    }

    /// Gemini keys issued by AI Studio start with "AIza"
    pub fn validate_api_key_format(key: &str) -> bool {
        key.starts_with("AIza")
    }

    pub fn config_location() -> String {
        Self::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "~/.config/casefile/config.json".to_string())
    }
}

fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|key| !key.trim().is_empty())
}

/// Interactive prompt to set up the API key
pub fn setup_api_key_interactive() -> Result<String, String> {
    use std::io;

    println!();
    println!("  ┌─────────────────────────────────────────────────────────┐");
    println!("  │  GEMINI SETUP                                           │");
    println!("  └─────────────────────────────────────────────────────────┘");
    println!();
    println!("  Detective Thorne reasons with Google's Gemini models.");
    println!();
    println!("  1. Create a key at: https://aistudio.google.com/apikey");
    println!("  2. Paste it below (saved in your system keychain)");
    println!();
    print!("  API Key: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut key = String::new();
    io::stdin().read_line(&mut key).map_err(|e| e.to_string())?;
    let key = key.trim().to_string();

    if key.is_empty() {
        return Err("No API key provided".to_string());
    }

    if !Config::validate_api_key_format(&key) {
        println!();
        println!("  Warning: Key doesn't look like a Gemini key (should start with AIza)");
        println!("     Saving anyway...");
    }

    let mut config = Config::load();
    config.set_api_key(&key)?;

    println!();
    println!("  + API key saved. Settings live in {}", Config::config_location());
    println!();

    Ok(key)
}

fn preserve_corrupt_config(path: &Path, content: &str) {
    let corrupt_path = path.with_extension("json.corrupt");
    if fs::rename(path, &corrupt_path).is_err() {
        let _ = fs::write(&corrupt_path, content);
    }
}

fn write_config_atomic(path: &Path, content: &str) -> Result<(), String> {
    use std::fs::OpenOptions;

    let tmp_path = path.with_extension("tmp");
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&tmp_path)
        .map_err(|e| e.to_string())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = file.set_permissions(fs::Permissions::from_mode(0o600)) {
            tracing::warn!("Failed to set temp config file permissions: {}", e);
        }
    }

    file.write_all(content.as_bytes())
        .map_err(|e| e.to_string())?;

    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.temperature(), DEFAULT_TEMPERATURE);
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_overrides_and_validation() {
        let config = Config {
            model: Some("gemini-2.5-pro".to_string()),
            temperature: Some(5.0),
            api_base: Some("http://localhost:8080/v1beta".to_string()),
            ..Config::default()
        };
        assert_eq!(config.model(), "gemini-2.5-pro");
        assert_eq!(config.temperature(), DEFAULT_TEMPERATURE);
        assert_eq!(config.api_base(), "http://localhost:8080/v1beta/");

        let broken = Config {
            api_base: Some("::nope::".to_string()),
            ..Config::default()
        };
        assert_eq!(broken.api_base(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            model: Some("gemini-2.5-flash".to_string()),
            cases_path: Some(PathBuf::from("/tmp/book.json")),
            ..Config::default()
        };
        config.save_to(dir.path()).unwrap();

        let loaded = Config::load_from(&dir.path().join("config.json"));
        assert_eq!(loaded.model(), "gemini-2.5-flash");
        assert_eq!(loaded.cases_path, Some(PathBuf::from("/tmp/book.json")));
    }

    #[test]
    fn test_corrupt_config_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let loaded = Config::load_from(&path);
        assert!(loaded.model.is_none());
        assert!(dir.path().join("config.json.corrupt").exists());
    }

    #[test]
    fn test_key_format() {
        assert!(Config::validate_api_key_format("AIzaSyExample"));
        assert!(!Config::validate_api_key_format("sk-openai"));
    }
}
