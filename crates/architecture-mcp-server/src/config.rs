use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::info;

/// Environment variable naming a JSON configuration file
pub const CONFIG_ENV_VAR: &str = "ARCHITECTURE_MCP_CONFIG";

/// Configuration for the Architecture MCP Server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchitectureServerConfig {
    /// Parameters sent with every sampling request
    pub sampling: SamplingSettings,

    /// Request validation policy
    pub validation: ValidationSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingSettings {
    /// Maximum number of tokens the host may generate
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Which server contexts the host should include
    pub include_context: ContextScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextScope {
    None,
    ThisServer,
    AllServers,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Reject `domain` and `complexity` values outside the advertised enumerations
    pub strict_options: bool,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            max_tokens: 4000,
            temperature: 0.2,
            include_context: ContextScope::ThisServer,
        }
    }
}

impl From<ContextScope> for rmcp::model::ContextInclusion {
    fn from(scope: ContextScope) -> Self {
        match scope {
            ContextScope::None => rmcp::model::ContextInclusion::None,
            ContextScope::ThisServer => rmcp::model::ContextInclusion::ThisServer,
            ContextScope::AllServers => rmcp::model::ContextInclusion::AllServers,
        }
    }
}

impl ArchitectureServerConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve configuration from an explicit path, the config env var, or defaults
    /// with environment overrides.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        if let Some(path) = path {
            info!("Loading config from: {}", path.display());
            return Self::from_file(path);
        }

        if let Ok(config_path) = env::var(CONFIG_ENV_VAR) {
            info!("Loading config from: {}", config_path);
            return Self::from_file(&config_path);
        }

        let mut config = Self::default();
        config.apply_env_overrides(|key| env::var(key).ok());
        info!("Using default configuration with environment overrides");
        Ok(config)
    }

    /// Apply `ARCHITECTURE_MCP_*` overrides; unparsable values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("ARCHITECTURE_MCP_MAX_TOKENS").and_then(|v| v.parse().ok()) {
            self.sampling.max_tokens = val;
        }

        if let Some(val) = lookup("ARCHITECTURE_MCP_TEMPERATURE").and_then(|v| v.parse().ok()) {
            self.sampling.temperature = val;
        }

        if let Some(val) = lookup("ARCHITECTURE_MCP_STRICT") {
            self.validation.strict_options = val == "1" || val.eq_ignore_ascii_case("true");
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.sampling.max_tokens == 0 {
            return Err(crate::ConsultationError::config(
                "max_tokens must be greater than 0",
            ));
        }

        if !(0.0..=2.0).contains(&self.sampling.temperature) {
            return Err(crate::ConsultationError::config(
                "temperature must be between 0.0 and 2.0",
            ));
        }

        Ok(())
    }
}
