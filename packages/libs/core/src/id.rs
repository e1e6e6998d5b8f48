//! 식별자 생성 전략
//!
//! 컬럼의 `autoincrement`/`sequence` 선언에서 클래스 단위의 생성 전략을 결정합니다.
//!
//! # 지원되는 전략
//!
//! - `none`: 선언 없음 (기본값, 대상 ORM의 기본 동작)
//! - `auto`: DB 네이티브 자동 증가
//! - `sequence`: 이름 있는 시퀀스 (할당 크기, 초기값 선택)

use serde::Serialize;

use crate::legacy::SequenceSpec;

/// 식별자 생성 전략
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum IdGenerator {
    /// 선언 없음
    #[default]
    None,

    /// 자동 증가 - DB가 생성
    Auto,

    /// 시퀀스 기반
    Sequence(SequenceDefinition),
}

impl IdGenerator {
    /// 전략 이름
    pub fn strategy_name(&self) -> &'static str {
        match self {
            IdGenerator::None => "none",
            IdGenerator::Auto => "auto",
            IdGenerator::Sequence(_) => "sequence",
        }
    }

    /// 명시적으로 선언된 전략인지 여부
    pub fn is_declared(&self) -> bool {
        !matches!(self, IdGenerator::None)
    }

    pub fn sequence(&self) -> Option<&SequenceDefinition> {
        match self {
            IdGenerator::Sequence(definition) => Some(definition),
            _ => None,
        }
    }

    /// 컬럼 하나의 선언에서 생성 전략 지시자를 만든다
    ///
    /// 두 플래그가 함께 있으면 `sequence`가 이깁니다.
    pub fn from_column_flags(autoincrement: bool, sequence: Option<&SequenceSpec>) -> Option<Self> {
        match (sequence, autoincrement) {
            (Some(spec), _) => Some(IdGenerator::Sequence(SequenceDefinition::from(spec))),
            (None, true) => Some(IdGenerator::Auto),
            (None, false) => None,
        }
    }
}

/// 시퀀스 정의
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceDefinition {
    pub sequence_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<u32>,
}

impl SequenceDefinition {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            sequence_name: name.into(),
            allocation_size: None,
            initial_value: None,
        }
    }
}

impl From<&SequenceSpec> for SequenceDefinition {
    fn from(spec: &SequenceSpec) -> Self {
        match spec {
            SequenceSpec::Name(name) => SequenceDefinition::named(name.clone()),
            SequenceSpec::Definition { name, size, value } => SequenceDefinition {
                sequence_name: name.clone(),
                allocation_size: *size,
                initial_value: *value,
            },
        }
    }
}
