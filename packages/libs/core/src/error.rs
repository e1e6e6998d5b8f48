//! 공통 에러 타입
//!
//! 레거시 스키마 로딩과 매핑 변환 전반에서 사용되는 에러 타입을 정의합니다.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// shift 공통 에러
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("could not map legacy type '{type_name}' to a known mapping type")]
    UnknownType { type_name: String },

    #[error("invalid length '{value}' for column '{column}'")]
    InvalidLength { column: String, value: String },

    #[error("duplicate field '{field}' in class '{class}'")]
    DuplicateField { class: String, field: String },

    #[error("failed to convert class '{class}': {source}")]
    Class {
        class: String,
        #[source]
        source: Box<Error>,
    },

    // ─────────────────────────────────────────────────────────────────────────────
    // IO/Serialization Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 클래스 이름을 붙여 감싼다
    pub fn in_class(self, class: impl Into<String>) -> Self {
        Error::Class {
            class: class.into(),
            source: Box::new(self),
        }
    }

    /// 에러 코드 (리포트용)
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnknownType { .. } => "UNKNOWN_TYPE",
            Error::InvalidLength { .. } => "INVALID_LENGTH",
            Error::DuplicateField { .. } => "DUPLICATE_FIELD",
            Error::Class { source, .. } => source.code(),
            Error::Io { .. } => "IO_ERROR",
            Error::Yaml(_) => "YAML_ERROR",
            Error::Json(_) => "JSON_ERROR",
        }
    }
}
