use crate::core::converter::{convert_request, resolve_named};
use crate::core::{ConversionRequest, ConversionResult};
use crate::utils::error::{FormError, Result};

/// Raw values as a user entered them: two base selections and a number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionForm {
    pub system: Option<String>,
    pub target: Option<String>,
    pub number: String,
}

impl ConversionForm {
    pub fn new(system: Option<&str>, target: Option<&str>, number: &str) -> Self {
        Self {
            system: system.map(str::to_string),
            target: target.map(str::to_string),
            number: number.to_string(),
        }
    }

    /// Both selections, trimmed, or `MissingSelection` if either is blank.
    pub fn selections(&self) -> std::result::Result<(&str, &str), FormError> {
        let system = self.system.as_deref().map(str::trim).unwrap_or_default();
        let target = self.target.as_deref().map(str::trim).unwrap_or_default();

        if system.is_empty() || target.is_empty() {
            return Err(FormError::MissingSelection);
        }
        Ok((system, target))
    }

    pub fn trimmed_number(&self) -> std::result::Result<&str, FormError> {
        let number = self.number.trim();
        if number.is_empty() {
            return Err(FormError::EmptyInput);
        }
        Ok(number)
    }

    /// Runs the boundary checks and resolves the trimmed values into a
    /// typed request.
    pub fn request(&self) -> Result<ConversionRequest> {
        let (system, target) = self.selections()?;
        let number = self.trimmed_number()?;

        Ok(resolve_named(system, target, number)?)
    }

    pub fn submit(&self) -> Result<ConversionResult> {
        Ok(convert_request(&self.request()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{AppError, ConversionError};

    #[test]
    fn test_missing_selection_is_rejected_first() {
        let form = ConversionForm::new(None, Some("binary"), "");
        assert!(matches!(
            form.submit(),
            Err(AppError::Form(FormError::MissingSelection))
        ));

        let form = ConversionForm::new(Some("decimal"), Some("  "), "10");
        assert!(matches!(
            form.submit(),
            Err(AppError::Form(FormError::MissingSelection))
        ));
    }

    #[test]
    fn test_blank_number_is_rejected() {
        let form = ConversionForm::new(Some("decimal"), Some("binary"), "   ");
        assert!(matches!(
            form.submit(),
            Err(AppError::Form(FormError::EmptyInput))
        ));
    }

    #[test]
    fn test_valid_form_is_converted() {
        let form = ConversionForm::new(Some(" decimal "), Some("binary"), " 10 ");
        let result = form.submit().unwrap();
        assert_eq!(result.result_digits, "1010");
    }

    #[test]
    fn test_request_is_trimmed_and_typed() {
        let form = ConversionForm::new(Some("hex"), Some(" octal"), "  ff ");
        let request = form.request().unwrap();
        assert_eq!(
            request,
            ConversionRequest::new(crate::core::Base::Hexadecimal, crate::core::Base::Octal, "ff")
        );
    }

    #[test]
    fn test_converter_errors_pass_through() {
        let form = ConversionForm::new(Some("base64"), Some("binary"), "10");
        assert!(matches!(
            form.submit(),
            Err(AppError::Conversion(ConversionError::InvalidSourceBase { .. }))
        ));
    }
}
