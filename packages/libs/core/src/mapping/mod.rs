//! 레거시 스키마 → 대상 매핑 메타데이터 변환
//!
//! # 개요
//!
//! 축약형과 부분 지정이 섞인 레거시 컬럼/관계 문법을
//! 모호함 없는 매핑 메타데이터로 바꾸는 추론 및 정규화 로직입니다.
//!
//! # 모듈 구조
//!
//! - `types`: 타입 레지스트리와 레거시 별칭 해석
//! - `column`: 컬럼 → 필드 매핑, 식별자 생성 전략 지시자
//! - `table`: 테이블 이름 (스키마 한정자 포함)
//! - `index`: 인덱스 / 유니크 제약 분류
//! - `relation`: 관계 기본값 추론과 연관 형태 결정
//! - `naming`: tableize 명명 규칙
//! - `metadata`: 출력 메타데이터
//! - `converter`: 클래스 단위 오케스트레이션
//! - `export`: YAML/JSON 직렬화

mod column;
mod converter;
mod export;
mod index;
mod metadata;
mod naming;
mod relation;
mod table;
mod types;

pub use column::{split_column_alias, split_type_length, ColumnMapper, ColumnMapping};
pub use converter::ClassConverter;
pub use export::{ExportFormat, MappingExporter};
pub use index::IndexMapper;
pub use metadata::{
    AssociationKind, AssociationMapping, ClassMetadata, FieldMapping, IndexDescriptor, JoinColumn,
    TableDescriptor, SYNTHETIC_ID_FIELD,
};
pub use naming::{DefaultNaming, Naming};
pub use relation::{classify, DefaultRule, RelationField, RelationMapper, ResolvedRelation, RELATION_DEFAULTS};
pub use table::TableMapper;
pub use types::{
    BuiltinTypes, CustomTypes, MappingType, TypeHandle, TypeRegistry, TypeResolver,
    LEGACY_TYPE_ALIASES,
};
