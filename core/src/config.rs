use crate::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Environment variable holding the YAML configuration of the function.
pub const CONFIG_ENV: &str = "GREETING_CONFIG";

pub const DEFAULT_NAME: &str = "World";
pub const DEFAULT_PLACEHOLDER: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreetingConfig {
    /// Name greeted when the event carries no `arguments` at all.
    pub default_name: String,
    /// What to greet when `arguments` is present but has no `name`.
    pub missing_name: MissingNamePolicy,
    /// Text interpolated under [`MissingNamePolicy::Placeholder`].
    pub placeholder: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingNamePolicy {
    /// Interpolate `placeholder`, making the missing key visible in the greeting.
    #[default]
    Placeholder,
    /// Fall back to `default_name`, same as when `arguments` is absent.
    DefaultName,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_NAME.to_string(),
            missing_name: MissingNamePolicy::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

pub fn load_config(config_path: Option<&str>) -> Result<GreetingConfig> {
    let config = match config_path {
        Some(path) => GreetingConfig::from_file(path)?,
        None => GreetingConfig::from_env()?,
    };
    config.validate()?;
    Ok(config)
}

impl GreetingConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            origin: path.to_string(),
            error: Box::new(e),
        })?;
        Self::from_yaml_str(&content, path)
    }

    /// Reads [`CONFIG_ENV`]. An unset variable yields the defaults so the
    /// function can be deployed without any configuration.
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(config_str) => Self::from_yaml_str(&config_str, CONFIG_ENV),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::Invalid {
                message: format!("{CONFIG_ENV} is not valid unicode"),
            }
            .into()),
        }
    }

    pub fn from_yaml_str(content: &str, origin: &str) -> Result<Self> {
        // an empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| {
            ConfigError::LoadFailed {
                origin: origin.to_string(),
                error: Box::new(e),
            }
            .into()
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_name.is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "default_name cannot be empty".to_string(),
            }
            .into());
        }
        if self.missing_name == MissingNamePolicy::Placeholder && self.placeholder.is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "placeholder cannot be empty when missing_name is `placeholder`"
                    .to_string(),
            }
            .into());
        }
        Ok(())
    }
}
