use crate::utils::error::Result;
use std::io::BufRead;

/// Reads one number per line, trimmed, skipping blank lines.
pub fn read_number_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut numbers = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            numbers.push(line.to_string());
        }
    }
    Ok(numbers)
}
