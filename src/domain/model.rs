use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal];

    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Base::Binary => "binary",
            Base::Octal => "octal",
            Base::Decimal => "decimal",
            Base::Hexadecimal => "hexadecimal",
        }
    }

    /// Human-readable digit set, used in error messages.
    pub fn allowed_digits(self) -> &'static str {
        match self {
            Base::Binary => "0-1",
            Base::Octal => "0-7",
            Base::Decimal => "0-9",
            Base::Hexadecimal => "0-9 and A-F",
        }
    }

    /// Looks a base up by name, short alias or radix, ignoring case.
    pub fn from_name(name: &str) -> Option<Base> {
        match name.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" | "2" => Some(Base::Binary),
            "octal" | "oct" | "8" => Some(Base::Octal),
            "decimal" | "dec" | "10" => Some(Base::Decimal),
            "hexadecimal" | "hex" | "16" => Some(Base::Hexadecimal),
            _ => None,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub source: Base,
    pub target: Base,
    pub digits: String,
}

impl ConversionRequest {
    pub fn new(source: Base, target: Base, digits: impl Into<String>) -> Self {
        Self {
            source,
            target,
            digits: digits.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub result_digits: String,
    pub procedure: &'static str,
}

/// One worked step-by-step trace of a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Walkthrough {
    pub steps: Vec<String>,
    pub result_digits: String,
}
