//! 레거시 선언 스키마 (입력 측)
//!
//! # 개요
//!
//! 레거시 스키마는 클래스 이름을 키로 하는 YAML 문서입니다.
//! 각 클래스는 `tableName`, `columns`, `indexes`, `relations`를 가지며,
//! 컬럼은 `string(255)` 같은 축약형 또는 구조화된 정의로 기술됩니다.
//!
//! # 모듈 구조
//!
//! - `document`: 입력 문서 타입 (serde 역직렬화용)
//! - `loader`: YAML 파싱 및 파일/디렉토리 로딩

mod document;
mod loader;

pub use document::{
    Cardinality, ClassSchema, ColumnDefinition, ColumnSpec, IndexFields, IndexSpec, RelationSpec,
    SchemaDocument, SequenceSpec,
};
pub use loader::{LegacyParser, SchemaLoader};
