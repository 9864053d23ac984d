use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings a front end needs to drive the converter.
pub trait ConfigProvider: Send + Sync {
    fn source_base(&self) -> Option<&str>;
    fn target_base(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    fn show_procedure(&self) -> bool;
    fn show_steps(&self) -> bool;
}
