use crate::domain::model::Base;

/// Fixed narrative of the manual method for an ordered base pair.
///
/// Returns `None` when source and target are the same; there is nothing to
/// convert in that case.
pub fn procedure_for(source: Base, target: Base) -> Option<&'static str> {
    use Base::*;

    let text = match (source, target) {
        (Decimal, Binary) => "Procedure: Divide by 2 repeatedly and take the remainders.",
        (Decimal, Octal) => "Procedure: Divide by 8 repeatedly and take the remainders.",
        (Decimal, Hexadecimal) => "Procedure: Divide by 16 repeatedly and take the remainders.",
        (Binary, Decimal) => {
            "Procedure:\n\
             1. Number the digits from right to left.\n\
             2. Assign each digit its place value in base 2.\n\
             3. Multiply each binary digit by its place value.\n\
             4. Add up all the products."
        }
        (Octal, Decimal) => {
            "Procedure:\n\
             1. Give each octal digit a position, starting from 0 on the right.\n\
             2. Multiply each octal digit by 8 raised to its position.\n\
             3. Add up all the results."
        }
        (Hexadecimal, Decimal) => {
            "Procedure:\n\
             1. Give each hexadecimal digit a position, starting from 0 on the right.\n\
             2. Multiply each hexadecimal digit by 16 raised to its position.\n\
             3. Add up all the results."
        }
        (Binary, Octal) => {
            "Procedure:\n\
             1. Split the binary number into groups of 3 bits, starting from the right.\n\
             2. If the bit count is not a multiple of 3, pad with zeros on the left.\n\
             3. Convert each 3-bit group to its octal digit."
        }
        (Binary, Hexadecimal) => {
            "Procedure:\n\
             1. Split the binary number into groups of 4 bits, starting from the right.\n\
             2. If the bit count is not a multiple of 4, pad with zeros on the left.\n\
             3. Convert each 4-bit group to its hexadecimal digit."
        }
        (Octal, Binary) => {
            "Procedure:\n\
             1. Replace each octal digit with its 3-bit binary equivalent.\n\
             2. Join the 3-bit groups in the same order."
        }
        (Hexadecimal, Binary) => {
            "Procedure:\n\
             1. Replace each hexadecimal digit with its 4-bit binary equivalent.\n\
             2. Join the 4-bit groups in the same order."
        }
        (Octal, Hexadecimal) => {
            "Procedure:\n\
             1. Replace each octal digit with its 3-bit binary equivalent.\n\
             2. Join the 3-bit groups in the same order.\n\
             3. Regroup the bits into groups of 4, starting from the right.\n\
             4. Convert each 4-bit group to its hexadecimal digit."
        }
        (Hexadecimal, Octal) => {
            "Procedure:\n\
             1. Replace each hexadecimal digit with its 4-bit binary equivalent.\n\
             2. Join the 4-bit groups in the same order.\n\
             3. Regroup the bits into groups of 3, starting from the right.\n\
             4. Convert each 3-bit group to its octal digit."
        }
        (Binary, Binary) | (Octal, Octal) | (Decimal, Decimal) | (Hexadecimal, Hexadecimal) => {
            return None;
        }
    };

    Some(text)
}
