use crate::core::procedure::procedure_for;
use crate::domain::model::{Base, ConversionRequest, ConversionResult};
use crate::utils::error::ConversionError;

type ConversionOutcome<T> = std::result::Result<T, ConversionError>;

/// Converts `digits` from `source` to `target` and picks the matching
/// procedure narrative.
pub fn convert(source: Base, target: Base, digits: &str) -> ConversionOutcome<ConversionResult> {
    let value = parse_digits(source, digits)?;
    let procedure = procedure_for(source, target)
        .ok_or_else(|| unsupported(source.name(), target.name()))?;

    Ok(ConversionResult {
        result_digits: render(value, target),
        procedure,
    })
}

pub fn convert_request(request: &ConversionRequest) -> ConversionOutcome<ConversionResult> {
    convert(request.source, request.target, &request.digits)
}

/// String-keyed entry point for front ends that pass base names through.
pub fn convert_named(
    source: &str,
    target: &str,
    digits: &str,
) -> ConversionOutcome<ConversionResult> {
    convert_request(&resolve_named(source, target, digits)?)
}

/// Resolves base names into a typed request.
///
/// Evaluation order: source name, digits, then the pair. An unknown target
/// name is reported as an unsupported pair once the digits have been checked.
pub fn resolve_named(
    source: &str,
    target: &str,
    digits: &str,
) -> ConversionOutcome<ConversionRequest> {
    let source_base = Base::from_name(source).ok_or_else(|| ConversionError::InvalidSourceBase {
        name: source.to_string(),
    })?;

    match Base::from_name(target) {
        Some(target_base) => Ok(ConversionRequest::new(source_base, target_base, digits)),
        None => {
            parse_digits(source_base, digits)?;
            Err(unsupported(source_base.name(), target))
        }
    }
}

/// Rejects any character outside the digit set of `base`.
pub fn validate_digits(base: Base, digits: &str) -> ConversionOutcome<()> {
    if digits.chars().all(|c| c.is_digit(base.radix())) {
        Ok(())
    } else {
        Err(ConversionError::InvalidDigits {
            base: base.name().to_string(),
            allowed: base.allowed_digits().to_string(),
        })
    }
}

/// Place-value parse of a trimmed digit string into a native integer.
pub fn parse_digits(base: Base, digits: &str) -> ConversionOutcome<u64> {
    let digits = digits.trim();
    validate_digits(base, digits)?;

    let invalid_number = || ConversionError::InvalidNumber {
        base: base.name().to_string(),
        digits: digits.to_string(),
    };

    if digits.is_empty() {
        return Err(invalid_number());
    }

    let radix = u64::from(base.radix());
    digits.chars().try_fold(0u64, |acc, c| {
        // validate_digits guarantees every char maps to a digit
        let digit = u64::from(c.to_digit(base.radix()).ok_or_else(invalid_number)?);
        acc.checked_mul(radix)
            .and_then(|shifted| shifted.checked_add(digit))
            .ok_or_else(invalid_number)
    })
}

/// Minimal rendering of `value` in `base`; hexadecimal is upper-cased.
pub fn render(value: u64, base: Base) -> String {
    match base {
        Base::Binary => format!("{:b}", value),
        Base::Octal => format!("{:o}", value),
        Base::Decimal => value.to_string(),
        Base::Hexadecimal => format!("{:X}", value),
    }
}

fn unsupported(source: &str, target: &str) -> ConversionError {
    ConversionError::UnsupportedPair {
        source_name: source.to_string(),
        target_name: target.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_to_binary() {
        let result = convert(Base::Decimal, Base::Binary, "10").unwrap();
        assert_eq!(result.result_digits, "1010");
        assert!(result.procedure.contains("Divide by 2"));
    }

    #[test]
    fn test_hex_input_is_case_insensitive() {
        assert_eq!(convert(Base::Hexadecimal, Base::Decimal, "ff").unwrap().result_digits, "255");
        assert_eq!(convert(Base::Hexadecimal, Base::Decimal, "Ff").unwrap().result_digits, "255");
    }

    #[test]
    fn test_hex_output_is_upper_case() {
        let result = convert(Base::Binary, Base::Hexadecimal, "11111111").unwrap();
        assert_eq!(result.result_digits, "FF");
    }

    #[test]
    fn test_octal_rejects_out_of_range_digit() {
        let err = convert(Base::Octal, Base::Decimal, "8").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidDigits { .. }));
    }

    #[test]
    fn test_every_base_validates_its_digit_set() {
        assert!(matches!(
            convert(Base::Binary, Base::Decimal, "102"),
            Err(ConversionError::InvalidDigits { .. })
        ));
        assert!(matches!(
            convert(Base::Decimal, Base::Binary, "12abc"),
            Err(ConversionError::InvalidDigits { .. })
        ));
        assert!(matches!(
            convert(Base::Hexadecimal, Base::Decimal, "0x1F"),
            Err(ConversionError::InvalidDigits { .. })
        ));
        assert!(matches!(
            convert(Base::Decimal, Base::Binary, "-5"),
            Err(ConversionError::InvalidDigits { .. })
        ));
    }

    #[test]
    fn test_empty_input_is_invalid_number() {
        assert!(matches!(
            convert(Base::Decimal, Base::Binary, ""),
            Err(ConversionError::InvalidNumber { .. })
        ));
        assert!(matches!(
            convert(Base::Decimal, Base::Binary, "   "),
            Err(ConversionError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_overflow_is_invalid_number() {
        assert_eq!(parse_digits(Base::Decimal, "18446744073709551615").unwrap(), u64::MAX);
        assert!(matches!(
            parse_digits(Base::Decimal, "18446744073709551616"),
            Err(ConversionError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_digits(Base::Hexadecimal, "10000000000000000"),
            Err(ConversionError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_same_base_is_unsupported() {
        let err = convert(Base::Decimal, Base::Decimal, "5").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnsupportedPair {
                source_name: "decimal".to_string(),
                target_name: "decimal".to_string(),
            }
        );
    }

    #[test]
    fn test_leading_zeros_are_dropped() {
        assert_eq!(convert(Base::Binary, Base::Octal, "0000101").unwrap().result_digits, "5");
        assert_eq!(convert(Base::Decimal, Base::Hexadecimal, "000").unwrap().result_digits, "0");
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(convert(Base::Octal, Base::Binary, "  17 ").unwrap().result_digits, "1111");
    }

    #[test]
    fn test_convert_named_reports_unknown_source() {
        let err = convert_named("ternary", "decimal", "1").unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidSourceBase {
                name: "ternary".to_string()
            }
        );
    }

    #[test]
    fn test_convert_named_checks_digits_before_unknown_target() {
        assert!(matches!(
            convert_named("octal", "roman", "9"),
            Err(ConversionError::InvalidDigits { .. })
        ));
        assert!(matches!(
            convert_named("octal", "roman", "7"),
            Err(ConversionError::UnsupportedPair { .. })
        ));
    }

    #[test]
    fn test_convert_named_accepts_aliases() {
        let result = convert_named("hex", "oct", "1F").unwrap();
        assert_eq!(result.result_digits, "37");
    }

    #[test]
    fn test_resolve_named_builds_typed_request() {
        let request = resolve_named("DEC", "16", "42").unwrap();
        assert_eq!(
            request,
            ConversionRequest::new(Base::Decimal, Base::Hexadecimal, "42")
        );
    }

    #[test]
    fn test_convert_request() {
        let request = ConversionRequest::new(Base::Octal, Base::Hexadecimal, "777");
        assert_eq!(convert_request(&request).unwrap().result_digits, "1FF");
    }

    #[test]
    fn test_render_zero() {
        for base in Base::ALL {
            assert_eq!(render(0, base), "0");
        }
    }
}
