use crate::core::converter::{parse_digits, render};
use crate::core::procedure::procedure_for;
use crate::domain::model::{Base, ConversionRequest, ConversionResult, Walkthrough};
use crate::utils::error::ConversionError;

/// Applies the manual method for the request's base pair to its actual
/// digits, one line per step.
pub fn walkthrough(request: &ConversionRequest) -> Result<Walkthrough, ConversionError> {
    convert_with_steps(request).map(|(_, walk)| walk)
}

/// Converts once and returns both the result and its worked steps.
pub fn convert_with_steps(
    request: &ConversionRequest,
) -> Result<(ConversionResult, Walkthrough), ConversionError> {
    let (source, target) = (request.source, request.target);
    let value = parse_digits(source, &request.digits)?;
    let procedure =
        procedure_for(source, target).ok_or_else(|| ConversionError::UnsupportedPair {
            source_name: source.name().to_string(),
            target_name: target.name().to_string(),
        })?;

    let steps = match (source, target) {
        (Base::Decimal, target) => division_steps(value, target),
        (source, Base::Decimal) => positional_steps(value, source),
        (Base::Binary, target) => grouping_steps(value, target),
        (source, Base::Binary) => expansion_steps(value, source),
        (source, target) => {
            let mut steps = expansion_steps(value, source);
            steps.extend(grouping_steps(value, target));
            steps
        }
    };

    tracing::debug!("Walkthrough {} -> {} produced {} steps", source, target, steps.len());

    let result_digits = render(value, target);
    Ok((
        ConversionResult {
            result_digits: result_digits.clone(),
            procedure,
        },
        Walkthrough {
            steps,
            result_digits,
        },
    ))
}

/// Bits per digit when a base is written in binary groups.
fn group_width(base: Base) -> usize {
    match base {
        Base::Octal => 3,
        Base::Hexadecimal => 4,
        Base::Binary | Base::Decimal => 1,
    }
}

/// Digit values of `value` in `base`, most significant first.
fn digit_values(value: u64, base: Base) -> Vec<u64> {
    let radix = u64::from(base.radix());
    let mut digits = Vec::new();
    let mut n = value;

    loop {
        digits.push(n % radix);
        n /= radix;
        if n == 0 {
            break;
        }
    }

    digits.reverse();
    digits
}

fn division_steps(value: u64, target: Base) -> Vec<String> {
    let radix = u64::from(target.radix());
    let mut steps = Vec::new();
    let mut remainders = Vec::new();
    let mut n = value;

    loop {
        let quotient = n / radix;
        let remainder = n % radix;
        let digit = render(remainder, target);
        if target == Base::Hexadecimal && remainder > 9 {
            steps.push(format!(
                "{} ÷ {} = {} remainder {} ({})",
                n, radix, quotient, remainder, digit
            ));
        } else {
            steps.push(format!("{} ÷ {} = {} remainder {}", n, radix, quotient, remainder));
        }
        remainders.push(digit);
        n = quotient;
        if n == 0 {
            break;
        }
    }

    remainders.reverse();
    steps.push(format!(
        "Read the remainders from bottom to top: {}",
        remainders.concat()
    ));
    steps
}

fn positional_steps(value: u64, source: Base) -> Vec<String> {
    let radix = u64::from(source.radix());
    let digits = digit_values(value, source);
    let last = digits.len() - 1;
    let mut steps = Vec::new();
    let mut terms = Vec::new();

    for (i, &digit) in digits.iter().enumerate() {
        let position = (last - i) as u32;
        // no leading zeros, so every weight is at most `value`
        let term = digit * radix.pow(position);
        steps.push(format!(
            "{} × {}^{} = {}",
            render(digit, source),
            radix,
            position,
            term
        ));
        terms.push(term.to_string());
    }

    steps.push(format!("Sum: {} = {}", terms.join(" + "), value));
    steps
}

fn grouping_steps(value: u64, target: Base) -> Vec<String> {
    let width = group_width(target);
    let digits = digit_values(value, target);
    let groups: Vec<String> = digits
        .iter()
        .map(|digit| format!("{:0width$b}", digit, width = width))
        .collect();

    let mut steps = vec![format!(
        "Group into {} bits from the right: {}",
        width,
        groups.concat()
    )];
    for (group, &digit) in groups.iter().zip(&digits) {
        steps.push(format!("{} → {}", group, render(digit, target)));
    }
    steps
}

fn expansion_steps(value: u64, source: Base) -> Vec<String> {
    let width = group_width(source);
    let mut steps = Vec::new();
    let mut joined = String::new();

    for digit in digit_values(value, source) {
        let bits = format!("{:0width$b}", digit, width = width);
        steps.push(format!("{} → {}", render(digit, source), bits));
        joined.push_str(&bits);
    }

    steps.push(format!("Join the groups: {}", joined));
    let trimmed = render(value, Base::Binary);
    if trimmed != joined {
        steps.push(format!("Drop leading zeros: {}", trimmed));
    }
    steps
}
