use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Messages per page. Must be positive; zero falls back to the default.
    #[serde(default)]
    pub page_size: Option<u64>,
    /// Address the HTTP API binds to.
    #[serde(default)]
    pub bind_address: Option<String>,
    /// Base URL the bot client talks to.
    #[serde(default)]
    pub api_url: Option<String>,
    /// Path to the message store file.
    #[serde(default)]
    pub data_file: Option<String>,
}

impl AppConfig {
    pub const DEFAULT_PAGE_SIZE: u64 = 10;

    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/guestbook/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("guestbook/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("guestbook\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn effective_page_size(&self) -> u64 {
        self.page_size
            .filter(|&size| size > 0)
            .unwrap_or(Self::DEFAULT_PAGE_SIZE)
    }

    pub fn effective_bind_address(&self) -> &str {
        self.bind_address.as_deref().unwrap_or("127.0.0.1:8080")
    }

    pub fn effective_api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or("http://127.0.0.1:8080")
    }

    pub fn effective_data_file(&self) -> &str {
        self.data_file.as_deref().unwrap_or("guestbook.json")
    }
}
