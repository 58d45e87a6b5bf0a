use crate::error::{AdvisorError, Result};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_BASE_URL: &str = "http://localhost:3000/";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Overrides the token stored by `agriadvice login`
    #[serde(
        default,
        deserialize_with = "deserialize_token",
        skip_serializing_if = "Option::is_none"
    )]
    pub access_token: Option<String>,
}

fn default_timeout_secs() -> u64 {
    15
}

/// Blank tokens and unresolved `${VAR}` placeholders count as absent
fn deserialize_token<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|t| !t.trim().is_empty() && !t.starts_with("${")))
}

impl ApiConfig {
    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: default_timeout_secs(),
            access_token: None,
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(AdvisorError::Config(format!(
                "Config file not found at {:?}. Run `agriadvice init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AdvisorError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&config_str)
    }

    /// Parse YAML after substituting `${VAR}` placeholders from the environment
    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| AdvisorError::Config(format!("Failed to parse config: {}", e)))?;

        if !config.api.base_url.starts_with("http://") && !config.api.base_url.starts_with("https://")
        {
            return Err(AdvisorError::Config(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                config.api.base_url
            )));
        }

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        Self::default_config_path()
    }

    /// Default path for writing new config files (~/.config/agriadvice/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AdvisorError::Config("Cannot determine config directory".into()))?
            .join("agriadvice");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive(config_override: Option<PathBuf>) -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up agriadvice!");
        println!();

        println!("Advisory API");
        let base_url: String = Input::new()
            .with_prompt("  Base URL")
            .default(DEFAULT_BASE_URL.into())
            .interact_text()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        let timeout_secs: u64 = Input::new()
            .with_prompt("  Request timeout (seconds)")
            .default(default_timeout_secs())
            .interact_text()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            api: ApiConfig {
                base_url,
                timeout_secs,
                access_token: None,
            },
        };

        let config_path = match config_override {
            Some(p) => p,
            None => Self::default_config_path()?,
        };
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = Self::render(&config)?;
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    /// YAML written by `init`, with a commented-out token placeholder
    fn render(config: &Config) -> Result<String> {
        let yaml = serde_yaml::to_string(config)
            .map_err(|e| AdvisorError::Config(format!("Failed to serialize config: {}", e)))?;

        let mut content = String::from(
            "# agriadvice configuration\n\
             # Generated by `agriadvice init`\n\
             # Environment variable substitution (${VAR}) is supported.\n\n",
        );
        content.push_str(&yaml);
        if config.api.access_token.is_none() {
            content.push_str("  # access_token: ${AGRIADVICE_TOKEN}\n");
        }
        Ok(content)
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }

    pub fn data_dir(data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        // CLI override takes priority
        if let Some(dir) = data_dir_override {
            std::fs::create_dir_all(dir)?;
            return Ok(dir.clone());
        }

        if let Ok(dir) = std::env::var("AGRIADVICE_DATA_DIR") {
            let p = PathBuf::from(dir);
            std::fs::create_dir_all(&p)?;
            return Ok(p);
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| AdvisorError::Config("Cannot determine data directory".into()))?
            .join("agriadvice");

        std::fs::create_dir_all(&data_dir)?;
        Ok(data_dir)
    }

    pub fn db_path(data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        Ok(Self::data_dir(data_dir_override)?.join("agriadvice.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal() {
        let config = Config::parse("api:\n  base_url: https://agri.example.com/\n").unwrap();
        assert_eq!(config.api.base_url, "https://agri.example.com/");
        assert_eq!(config.api.timeout_secs, 15);
        assert!(config.api.access_token.is_none());
    }

    #[test]
    fn substitutes_environment() {
        std::env::set_var("AGRIADVICE_TEST_TOKEN", "abc123");
        let config = Config::parse(
            "api:\n  base_url: http://10.0.0.5:3000\n  access_token: ${AGRIADVICE_TEST_TOKEN}\n",
        )
        .unwrap();
        assert_eq!(config.api.access_token.as_deref(), Some("abc123"));
    }

    #[test]
    fn unresolved_placeholder_is_no_token() {
        let config = Config::parse(
            "api:\n  base_url: http://10.0.0.5:3000\n  access_token: ${AGRIADVICE_UNSET_VAR_FOR_TEST}\n",
        )
        .unwrap();
        assert!(config.api.access_token.is_none());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = Config::parse("api:\n  base_url: ftp://example.com\n").unwrap_err();
        assert!(matches!(err, AdvisorError::Config(_)));
    }

    #[test]
    fn endpoint_joins_slashes() {
        let api = ApiConfig {
            base_url: "http://172.20.10.5:3000/".into(),
            ..Default::default()
        };
        assert_eq!(
            api.endpoint("/azure-maps/weather"),
            "http://172.20.10.5:3000/azure-maps/weather"
        );

        let api = ApiConfig {
            base_url: "http://host/api".into(),
            ..Default::default()
        };
        assert_eq!(api.endpoint("auth/login"), "http://host/api/auth/login");
    }

    #[test]
    fn rendered_config_omits_missing_token() {
        let config = Config::default();
        let content = Config::render(&config).unwrap();

        assert!(!content.contains("null"));
        assert!(content.contains("# access_token: ${AGRIADVICE_TOKEN}"));

        let reloaded = Config::parse(&content).unwrap();
        assert_eq!(reloaded.api.base_url, config.api.base_url);
        assert_eq!(reloaded.api.timeout_secs, 15);
        assert!(reloaded.api.access_token.is_none());
    }

    #[test]
    fn rendered_config_keeps_explicit_token() {
        let config = Config {
            api: ApiConfig {
                access_token: Some("written-token".into()),
                ..Default::default()
            },
        };
        let content = Config::render(&config).unwrap();
        assert!(content.contains("access_token: written-token"));
        assert!(!content.contains("# access_token"));
    }

    #[test]
    fn debug_redacts_token() {
        let api = ApiConfig {
            access_token: Some("secret-token".into()),
            ..Default::default()
        };
        let debug = format!("{:?}", api);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }
}
