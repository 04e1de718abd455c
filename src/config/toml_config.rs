use crate::config::validate_settings;
use crate::core::{ConfigProvider, Targets};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub targets: TargetsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub concurrent_lookups: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetsConfig {
    pub starship: String,
    pub person: String,
    pub planet: String,
}

impl Default for TargetsConfig {
    fn default() -> Self {
        let targets = Targets::default();
        Self {
            starship: targets.starship,
            person: targets.person,
            planet: targets.planet,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SWAPI_URL})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_url(&self) -> &str {
        self.catalog.base_url.as_deref().unwrap_or_default()
    }

    fn bind_addr(&self) -> &str {
        &self.server.bind_addr
    }

    fn targets(&self) -> Targets {
        Targets {
            starship: self.targets.starship.clone(),
            person: self.targets.person.clone(),
            planet: self.targets.planet.clone(),
        }
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.catalog.timeout_seconds.map(Duration::from_secs)
    }

    fn concurrent_lookups(&self) -> bool {
        self.catalog.concurrent_lookups
    }

    fn json_logs(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_required_field("catalog.base_url", &self.catalog.base_url)?;

        if let Some(format) = &self.logging.format {
            let valid_formats = ["compact", "json"];
            if !valid_formats.contains(&format.as_str()) {
                return Err(CatalogError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.clone(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        valid_formats.join(", ")
                    ),
                });
            }
        }

        validate_settings(self, self.catalog.timeout_seconds)
    }
}
