pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::app::engine::{BatchReport, ConversionEngine};
pub use crate::app::form::ConversionForm;
pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::converter::{convert, convert_named, convert_request, resolve_named};
pub use crate::core::walkthrough::{convert_with_steps, walkthrough};
pub use crate::domain::model::{Base, ConversionRequest, ConversionResult, Walkthrough};
pub use crate::utils::error::{AppError, ConversionError, FormError, Result};
