pub mod converter;
pub mod procedure;
pub mod walkthrough;

pub use crate::domain::model::{Base, ConversionRequest, ConversionResult, Walkthrough};
pub use crate::domain::ports::{ConfigProvider, OutputFormat};
pub use crate::utils::error::ConversionError;
