//! 대상 매핑 메타데이터
//!
//! 변환 결과물입니다. 클래스마다 한 번 만들어지고 이후에는 변경되지 않습니다.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::id::IdGenerator;

/// 식별자가 선언되지 않은 클래스에 주입되는 필드 이름
pub const SYNTHETIC_ID_FIELD: &str = "id";

/// 클래스 메타데이터
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMetadata {
    /// 클래스 이름
    pub name: String,

    pub table: TableDescriptor,

    /// 필드 매핑 (선언 순서)
    pub fields: Vec<FieldMapping>,

    /// 연관 매핑 (선언 순서)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub associations: Vec<AssociationMapping>,

    pub id_generator: IdGenerator,
}

impl ClassMetadata {
    /// 빈 메타데이터 생성
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: TableDescriptor::default(),
            fields: Vec::new(),
            associations: Vec::new(),
            id_generator: IdGenerator::default(),
        }
    }

    /// 필드 추가
    ///
    /// 필드와 연관은 같은 이름 공간을 공유합니다.
    pub fn map_field(&mut self, field: FieldMapping) -> Result<()> {
        self.ensure_unique(&field.field_name)?;
        self.fields.push(field);
        Ok(())
    }

    /// 연관 추가
    pub fn map_association(&mut self, association: AssociationMapping) -> Result<()> {
        self.ensure_unique(&association.field_name)?;
        self.associations.push(association);
        Ok(())
    }

    pub fn set_id_generator(&mut self, generator: IdGenerator) {
        self.id_generator = generator;
    }

    /// 필드 조회
    pub fn field(&self, name: &str) -> Option<&FieldMapping> {
        self.fields.iter().find(|f| f.field_name == name)
    }

    /// 연관 조회
    pub fn association(&self, name: &str) -> Option<&AssociationMapping> {
        self.associations.iter().find(|a| a.field_name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some() || self.association(name).is_some()
    }

    /// 식별자 필드들
    pub fn identifier_fields(&self) -> impl Iterator<Item = &FieldMapping> {
        self.fields.iter().filter(|f| f.id)
    }

    fn ensure_unique(&self, name: &str) -> Result<()> {
        if self.has_field(name) {
            return Err(Error::DuplicateField {
                class: self.name.clone(),
                field: name.to_string(),
            });
        }
        Ok(())
    }
}

/// 테이블 정의
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDescriptor {
    /// 물리 테이블 이름 (없으면 대상 ORM의 명명 규칙을 따름)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// 스키마/카탈로그 한정자
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub indexes: IndexMap<String, IndexDescriptor>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub unique_constraints: IndexMap<String, IndexDescriptor>,
}

/// 인덱스 또는 유니크 제약
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexDescriptor {
    pub columns: Vec<String>,
}

/// 필드 매핑
///
/// 입력에 있던 속성만 채워집니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    /// 노출 필드 이름 (클래스 내 유일)
    pub field_name: String,

    /// 저장 컬럼 이름
    pub column_name: String,

    /// 논리 타입 이름
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notnull: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<IndexMap<String, serde_yaml::Value>>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub id: bool,
}

impl FieldMapping {
    /// 최소 필드 매핑
    pub fn new(
        field_name: impl Into<String>,
        column_name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            column_name: column_name.into(),
            type_name: type_name.into(),
            length: None,
            precision: None,
            scale: None,
            unique: None,
            notnull: None,
            version: None,
            options: None,
            id: false,
        }
    }

    /// 주입용 정수 식별자 필드
    pub fn synthetic_id() -> Self {
        Self {
            id: true,
            ..Self::new(SYNTHETIC_ID_FIELD, SYNTHETIC_ID_FIELD, "integer")
        }
    }
}

/// 연관 형태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AssociationKind {
    OneToOne,
    OneToMany,
    ManyToMany,
}

/// 연관 매핑
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationMapping {
    pub kind: AssociationKind,

    /// 소유 측 필드 이름
    pub field_name: String,

    pub target_entity: String,

    /// 반대 측 필드 이름
    pub mapped_by: String,

    /// 피벗 엔티티가 있으면 비어 있음
    pub join_columns: Vec<JoinColumn>,

    /// 명시적인 피벗 엔티티
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_entity: Option<String>,
}

/// 조인 컬럼
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinColumn {
    pub name: String,

    pub referenced_column_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_delete: Option<String>,
}
