//! 매핑 메타데이터 내보내기

use serde::{Deserialize, Serialize};

use super::metadata::ClassMetadata;
use crate::error::Result;

/// 내보내기 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Yaml,
    Json,
}

impl ExportFormat {
    /// 파일 확장자
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Yaml => "orm.yml",
            ExportFormat::Json => "orm.json",
        }
    }
}

/// 클래스 메타데이터를 문자열로 직렬화
#[derive(Debug, Clone, Copy, Default)]
pub struct MappingExporter {
    format: ExportFormat,
}

impl MappingExporter {
    pub fn new(format: ExportFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// 클래스별 파일 이름 (`Article.orm.yml`)
    pub fn file_name(&self, metadata: &ClassMetadata) -> String {
        format!("{}.{}", metadata.name, self.format.extension())
    }

    pub fn export(&self, metadata: &ClassMetadata) -> Result<String> {
        let content = match self.format {
            ExportFormat::Yaml => serde_yaml::to_string(metadata)?,
            ExportFormat::Json => serde_json::to_string_pretty(metadata)?,
        };
        Ok(content)
    }
}
