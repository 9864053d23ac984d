use crate::core::Base;
use crate::utils::error::{AppError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::config(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Accepts any name, alias or radix `Base::from_name` understands.
pub fn validate_base_name(field_name: &str, value: &str) -> Result<Base> {
    validate_non_empty_string(field_name, value)?;

    Base::from_name(value).ok_or_else(|| {
        AppError::config(
            field_name,
            format!(
                "Unknown base '{}'. Valid bases: binary, octal, decimal, hexadecimal",
                value
            ),
        )
    })
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(AppError::config(
            field_name,
            format!("Unsupported value '{}'. Valid values: {}", value, allowed.join(", ")),
        ));
    }
    Ok(())
}
