use crate::app::engine::{BatchReport, Outcome};
use crate::core::OutputFormat;
use crate::utils::error::Result;

pub fn render_report(
    report: &BatchReport,
    format: OutputFormat,
    show_procedure: bool,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(render_text(report, show_procedure)),
    }
}

fn render_text(report: &BatchReport, show_procedure: bool) -> String {
    let mut out = String::new();

    for (i, entry) in report.entries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if report.entries.len() > 1 {
            out.push_str(&format!("Input: {}\n", entry.input));
        }

        match &entry.outcome {
            Outcome::Converted(submission) => {
                out.push_str(&format!(
                    "The result is: {}\n",
                    submission.result.result_digits
                ));
                if show_procedure {
                    out.push_str(submission.result.procedure);
                    out.push('\n');
                }
                if let Some(walk) = &submission.walkthrough {
                    out.push_str("Steps:\n");
                    for (n, step) in walk.steps.iter().enumerate() {
                        out.push_str(&format!("  {}. {}\n", n + 1, step));
                    }
                }
            }
            Outcome::Failed { message, .. } => {
                out.push_str(message);
                out.push('\n');
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::engine::ConversionEngine;

    #[test]
    fn test_single_text_entry_has_no_input_header() {
        let engine = ConversionEngine::new(Some("decimal"), Some("binary")).unwrap();
        let report = engine.run_batch(&["10"]);
        let text = render_report(&report, OutputFormat::Text, true).unwrap();

        assert_eq!(
            text,
            "The result is: 1010\nProcedure: Divide by 2 repeatedly and take the remainders.\n"
        );
    }

    #[test]
    fn test_text_without_procedure() {
        let engine = ConversionEngine::new(Some("hex"), Some("decimal")).unwrap();
        let report = engine.run_batch(&["ff"]);
        let text = render_report(&report, OutputFormat::Text, false).unwrap();
        assert_eq!(text, "The result is: 255\n");
    }

    #[test]
    fn test_text_lists_steps_and_failures() {
        let engine = ConversionEngine::new(Some("octal"), Some("binary"))
            .unwrap()
            .with_steps(true);
        let report = engine.run_batch(&["5", "9"]);
        let text = render_report(&report, OutputFormat::Text, false).unwrap();

        assert!(text.contains("Input: 5\nThe result is: 101\nSteps:\n  1. 5 → 101\n"));
        assert!(text.contains("Input: 9\nInvalid number: the octal system only accepts the digits 0-7\n"));
    }

    #[test]
    fn test_entries_are_separated_by_a_blank_line() {
        let engine = ConversionEngine::new(Some("decimal"), Some("octal")).unwrap();
        let report = engine.run_batch(&["8", "9", "z"]);
        let text = render_report(&report, OutputFormat::Text, false).unwrap();

        assert_eq!(
            text,
            "Input: 8\nThe result is: 10\n\n\
             Input: 9\nThe result is: 11\n\n\
             Input: z\nInvalid number: the decimal system only accepts the digits 0-9\n"
        );
    }

    #[test]
    fn test_json_report() {
        let engine = ConversionEngine::new(Some("binary"), Some("hexadecimal")).unwrap();
        let report = engine.run_batch(&["11111111"]);
        let json = render_report(&report, OutputFormat::Json, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source"], "binary");
        assert_eq!(value["entries"][0]["result_digits"], "FF");
    }
}
