use crate::config::toml_config::OUTPUT_FORMATS;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "base-converter")]
#[command(about = "Convert numbers between binary, octal, decimal and hexadecimal")]
pub struct CliConfig {
    /// Source system (binary, octal, decimal, hexadecimal)
    #[arg(short, long)]
    pub from: Option<String>,

    /// Target system (binary, octal, decimal, hexadecimal)
    #[arg(short, long)]
    pub to: Option<String>,

    /// Numbers to convert; read line by line from stdin when omitted
    pub digits: Vec<String>,

    /// Output format: text or json
    #[arg(long)]
    pub format: Option<String>,

    /// Show a worked step-by-step trace for each number
    #[arg(long)]
    pub steps: bool,

    /// Hide the procedure description
    #[arg(long)]
    pub no_procedure: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Validate for CliConfig {
    // Base names are left to the converter so its own error kinds surface.
    fn validate(&self) -> Result<()> {
        if let Some(format) = &self.format {
            validate_one_of("--format", format, &OUTPUT_FORMATS)?;
        }
        Ok(())
    }
}
