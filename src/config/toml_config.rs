use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_base_name, validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub source: Option<String>,
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub show_procedure: Option<bool>,
    pub show_steps: Option<bool>,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration text after environment substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| AppError::config("toml_parsing", format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| AppError::config("toml_parsing", e.to_string()))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(source) = &self.defaults.source {
            validate_base_name("defaults.source", source)?;
        }
        if let Some(target) = &self.defaults.target {
            validate_base_name("defaults.target", target)?;
        }
        if let Some(format) = &self.output.format {
            validate_one_of("output.format", format, &OUTPUT_FORMATS)?;
        }
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn source_base(&self) -> Option<&str> {
        self.defaults.source.as_deref()
    }

    fn target_base(&self) -> Option<&str> {
        self.defaults.target.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        match self.output.format.as_deref() {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }

    fn show_procedure(&self) -> bool {
        self.output.show_procedure.unwrap_or(true)
    }

    fn show_steps(&self) -> bool {
        self.output.show_steps.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
