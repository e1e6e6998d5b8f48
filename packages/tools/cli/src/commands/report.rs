//! 클래스별 변환 결과 출력

use std::path::PathBuf;

use serde::Serialize;
use shift_core::mapping::ClassMetadata;
use shift_core::Error;

use crate::OutputFormat;

/// 클래스 하나의 변환 결과
#[derive(Debug, Serialize)]
pub struct ClassOutcome {
    pub class: String,
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub associations: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClassOutcome {
    pub fn converted(metadata: &ClassMetadata, file: Option<PathBuf>) -> Self {
        Self {
            class: metadata.name.clone(),
            status: "ok",
            fields: Some(metadata.fields.len()),
            associations: Some(metadata.associations.len()),
            generator: Some(metadata.id_generator.strategy_name()),
            file,
            code: None,
            error: None,
        }
    }

    pub fn failed(class: &str, error: &Error) -> Self {
        Self {
            class: class.to_string(),
            status: "error",
            fields: None,
            associations: None,
            generator: None,
            file: None,
            code: Some(error.code()),
            error: Some(error.to_string()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.code.is_some()
    }
}

/// 결과 출력
pub fn print(outcomes: &[ClassOutcome], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(outcomes)?);
        }
        OutputFormat::Text => {
            for outcome in outcomes {
                match &outcome.error {
                    Some(error) => println!("- {}: FAILED ({})", outcome.class, error),
                    None => {
                        println!(
                            "- {}: {} fields, {} associations, id generator {}",
                            outcome.class,
                            outcome.fields.unwrap_or_default(),
                            outcome.associations.unwrap_or_default(),
                            outcome.generator.unwrap_or("none"),
                        );
                        if let Some(file) = &outcome.file {
                            println!("  -> {}", file.display());
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

/// 실패 개수
pub fn failures(outcomes: &[ClassOutcome]) -> usize {
    outcomes.iter().filter(|o| o.is_failure()).count()
}
