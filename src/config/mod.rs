#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, OutputFormat};
use toml_config::TomlConfig;

/// Effective settings: command-line values win over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: Option<String>,
    pub target: Option<String>,
    pub format: OutputFormat,
    pub show_procedure: bool,
    pub show_steps: bool,
}

/// Command-line overrides, all optional.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: Option<String>,
    pub target: Option<String>,
    pub format: Option<OutputFormat>,
    pub hide_procedure: bool,
    pub show_steps: bool,
}

impl Settings {
    pub fn resolve(overrides: Overrides, file: Option<&TomlConfig>) -> Self {
        let base = file.cloned().unwrap_or_default();

        Self {
            source: overrides
                .source
                .or_else(|| base.source_base().map(str::to_string)),
            target: overrides
                .target
                .or_else(|| base.target_base().map(str::to_string)),
            format: overrides.format.unwrap_or_else(|| base.output_format()),
            show_procedure: !overrides.hide_procedure && base.show_procedure(),
            show_steps: overrides.show_steps || base.show_steps(),
        }
    }
}

impl ConfigProvider for Settings {
    fn source_base(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn target_base(&self) -> Option<&str> {
        self.target.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn show_procedure(&self) -> bool {
        self.show_procedure
    }

    fn show_steps(&self) -> bool {
        self.show_steps
    }
}

#[cfg(feature = "cli")]
impl From<&cli::CliConfig> for Overrides {
    fn from(cli: &cli::CliConfig) -> Self {
        Self {
            source: cli.from.clone(),
            target: cli.to.clone(),
            format: cli.format.as_deref().map(|f| match f {
                "json" => OutputFormat::Json,
                _ => OutputFormat::Text,
            }),
            hide_procedure: cli.no_procedure,
            show_steps: cli.steps,
        }
    }
}
