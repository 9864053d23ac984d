use crate::app::form::ConversionForm;
use crate::core::converter::convert_request;
use crate::core::walkthrough::convert_with_steps;
use crate::core::{ConversionResult, Walkthrough};
use crate::utils::error::{FormError, Result};
use serde::Serialize;

/// Drives repeated form submissions for one fixed base pair.
pub struct ConversionEngine {
    system: String,
    target: String,
    show_steps: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    #[serde(flatten)]
    pub result: ConversionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walkthrough: Option<Walkthrough>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Converted(Submission),
    Failed { kind: &'static str, message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub input: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub source: String,
    pub target: String,
    pub converted: usize,
    pub failed: usize,
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    /// 0 when every input converted, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_succeeded() {
            0
        } else {
            1
        }
    }
}

impl ConversionEngine {
    /// Fails with `MissingSelection` when either base is absent or blank.
    pub fn new(system: Option<&str>, target: Option<&str>) -> std::result::Result<Self, FormError> {
        let form = ConversionForm::new(system, target, "");
        let (system, target) = form.selections()?;

        Ok(Self {
            system: system.to_string(),
            target: target.to_string(),
            show_steps: false,
        })
    }

    pub fn with_steps(mut self, show_steps: bool) -> Self {
        self.show_steps = show_steps;
        self
    }

    pub fn submit(&self, number: &str) -> Result<Submission> {
        let form = ConversionForm::new(Some(&self.system), Some(&self.target), number);
        let request = form.request()?;

        if self.show_steps {
            let (result, walkthrough) = convert_with_steps(&request)?;
            Ok(Submission {
                result,
                walkthrough: Some(walkthrough),
            })
        } else {
            Ok(Submission {
                result: convert_request(&request)?,
                walkthrough: None,
            })
        }
    }

    /// Converts every input; a failure is recorded and the batch carries on.
    pub fn run_batch<S: AsRef<str>>(&self, inputs: &[S]) -> BatchReport {
        tracing::info!(
            "Converting {} input(s) from {} to {}",
            inputs.len(),
            self.system,
            self.target
        );

        let mut report = BatchReport {
            source: self.system.clone(),
            target: self.target.clone(),
            ..Default::default()
        };

        for input in inputs {
            let input = input.as_ref();
            let outcome = match self.submit(input) {
                Ok(submission) => {
                    tracing::debug!("{} -> {}", input, submission.result.result_digits);
                    report.converted += 1;
                    Outcome::Converted(submission)
                }
                Err(e) => {
                    tracing::warn!("Conversion of '{}' failed: {}", input, e);
                    report.failed += 1;
                    Outcome::Failed {
                        kind: e.kind(),
                        message: e.user_friendly_message(),
                    }
                }
            };
            report.entries.push(BatchEntry {
                input: input.to_string(),
                outcome,
            });
        }

        tracing::info!(
            "Batch finished: {} converted, {} failed",
            report.converted,
            report.failed
        );
        report
    }
}
