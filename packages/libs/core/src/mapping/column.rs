//! 컬럼 매핑
//!
//! 레거시 컬럼 정의 하나를 필드 매핑으로 바꿉니다.
//!
//! # 형식 규칙
//!
//! - 저장 이름 별칭: `<word> as <word>` (대소문자 무시) → 저장 컬럼, 노출 필드
//! - 타입 길이: `<letters>(<digits>)` → 타입 토큰, `length`
//!
//! 두 패턴 모두 토큰 전체와 일치해야 합니다.

use std::sync::LazyLock;

use regex::Regex;

use super::metadata::FieldMapping;
use super::types::TypeResolver;
use crate::error::{Error, Result};
use crate::id::IdGenerator;
use crate::legacy::ColumnSpec;

static COLUMN_ALIAS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([[:word:]]+)\s+as\s+([[:word:]]+)$").expect("column alias pattern")
});

static TYPE_LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z_]+)\(([0-9]+)\)$").expect("type length pattern"));

/// 컬럼 하나의 변환 결과
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMapping {
    pub field: FieldMapping,

    /// 클래스 단위 식별자 생성 전략 지시자
    pub generator: Option<IdGenerator>,
}

/// 컬럼 매퍼
pub struct ColumnMapper<'a> {
    resolver: &'a TypeResolver,
}

impl<'a> ColumnMapper<'a> {
    pub fn new(resolver: &'a TypeResolver) -> Self {
        Self { resolver }
    }

    /// 컬럼 키와 정의를 필드 매핑으로 변환
    pub fn map(&self, key: &str, spec: &ColumnSpec) -> Result<ColumnMapping> {
        let definition = spec.normalize();

        let storage_name = definition.name.clone().unwrap_or_else(|| key.to_string());
        let (column_name, field_name) = split_column_alias(&storage_name)
            .unwrap_or_else(|| (storage_name.clone(), key.to_string()));

        let (type_token, embedded_length) = split_type_length(key, &definition.column_type)?;
        let handle = self.resolver.resolve(&type_token)?;

        let field = FieldMapping {
            length: embedded_length.or(definition.length),
            precision: definition.precision,
            scale: definition.scale,
            unique: definition.unique,
            notnull: definition.notnull,
            version: definition.version,
            options: definition.options.clone(),
            id: definition.primary,
            ..FieldMapping::new(field_name, column_name, handle.name())
        };

        let generator = IdGenerator::from_column_flags(
            definition.autoincrement,
            definition.sequence.as_ref(),
        );

        Ok(ColumnMapping { field, generator })
    }
}

/// `column as field` 분리
pub fn split_column_alias(storage_name: &str) -> Option<(String, String)> {
    let captures = COLUMN_ALIAS.captures(storage_name)?;
    Some((captures[1].to_string(), captures[2].to_string()))
}

/// `type(length)` 분리
pub fn split_type_length(column: &str, token: &str) -> Result<(String, Option<u32>)> {
    let Some(captures) = TYPE_LENGTH.captures(token) else {
        return Ok((token.to_string(), None));
    };

    let length = captures[2]
        .parse::<u32>()
        .map_err(|_| Error::InvalidLength {
            column: column.to_string(),
            value: captures[2].to_string(),
        })?;

    Ok((captures[1].to_string(), Some(length)))
}
