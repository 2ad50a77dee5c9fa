use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default port for the registration API.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Port the registration API listens on.
    pub port: u16,
    /// Database file override; the platform data directory is used when unset.
    pub db_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            db_path: None,
        }
    }
}

/// Loads the configuration file, falling back to defaults when it is absent
/// or malformed. `PRAGATIX_PORT` overrides the configured port.
pub fn load_config() -> AppConfig {
    let path = config_path();
    let mut config = match std::fs::read_to_string(&path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    if let Ok(value) = std::env::var("PRAGATIX_PORT")
        && let Ok(port) = value.parse()
    {
        config.port = port;
    }
    config
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("PRAGATIX_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

pub(crate) fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("PRAGATIX_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("Pragatix");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("Pragatix");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("pragatix");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("pragatix");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".pragatix")
}
