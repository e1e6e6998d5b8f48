//! 관계 매핑
//!
//! 관계 정의마다 독립적으로 기본값을 채운 뒤 카디널리티로 연관 형태를 고릅니다.
//!
//! # 기본값 규칙 (적용 순서대로)
//!
//! | 필드 | 기본값 |
//! |---|---|
//! | `alias` | 관계 키 |
//! | `class` | 관계 키 |
//! | `local` | 확정된 `class`의 tableize 결과 |
//! | `foreign` | `id` |
//! | `foreignAlias` | 소유 클래스 이름 |
//!
//! # 형태 결정
//!
//! `refClass`가 있으면 양쪽 모두 `many`이고 조인 컬럼이 없습니다.
//! 그 외에는 `type` 기본값 `one`, `foreignType` 기본값 `many`입니다.
//!
//! | type | foreignType | 형태 |
//! |---|---|---|
//! | one | one | one-to-one |
//! | many | many | many-to-many |
//! | 그 외 | | one-to-many |

use super::metadata::{AssociationKind, AssociationMapping, JoinColumn};
use super::naming::Naming;
use crate::legacy::{Cardinality, RelationSpec};

/// 기본값이 적용되는 관계 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationField {
    Alias,
    Class,
    Local,
    Foreign,
    ForeignAlias,
}

/// 기본값 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultRule {
    /// 관계 키
    RelationKey,
    /// 이미 확정된 대상 클래스의 tableize 결과
    TableizedClass,
    /// 고정 값
    Literal(&'static str),
    /// 소유 클래스 이름
    OwningClass,
}

/// 순서가 의미를 갖는 기본값 표 (`Local`은 확정된 `Class`를 사용)
pub const RELATION_DEFAULTS: &[(RelationField, DefaultRule)] = &[
    (RelationField::Alias, DefaultRule::RelationKey),
    (RelationField::Class, DefaultRule::RelationKey),
    (RelationField::Local, DefaultRule::TableizedClass),
    (RelationField::Foreign, DefaultRule::Literal("id")),
    (RelationField::ForeignAlias, DefaultRule::OwningClass),
];

/// 기본값이 모두 채워진 관계
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedRelation {
    pub alias: String,
    pub class: String,
    pub local: String,
    pub foreign: String,
    pub foreign_alias: String,
}

impl ResolvedRelation {
    fn slot(&mut self, field: RelationField) -> &mut String {
        match field {
            RelationField::Alias => &mut self.alias,
            RelationField::Class => &mut self.class,
            RelationField::Local => &mut self.local,
            RelationField::Foreign => &mut self.foreign,
            RelationField::ForeignAlias => &mut self.foreign_alias,
        }
    }
}

/// 관계 매퍼
pub struct RelationMapper<'a> {
    naming: &'a dyn Naming,
}

impl<'a> RelationMapper<'a> {
    pub fn new(naming: &'a dyn Naming) -> Self {
        Self { naming }
    }

    /// 관계 정의 하나를 연관 매핑으로 변환
    pub fn map(&self, owning_class: &str, key: &str, spec: &RelationSpec) -> AssociationMapping {
        let relation = self.resolve_defaults(owning_class, key, spec);

        let (relation_type, foreign_type, join_columns) = if spec.ref_class.is_some() {
            (Cardinality::Many, Cardinality::Many, Vec::new())
        } else {
            let join_column = JoinColumn {
                name: relation.local.clone(),
                referenced_column_name: relation.foreign.clone(),
                on_delete: spec.on_delete.clone(),
            };
            (
                spec.relation_type.unwrap_or(Cardinality::One),
                spec.foreign_type.unwrap_or(Cardinality::Many),
                vec![join_column],
            )
        };

        AssociationMapping {
            kind: classify(relation_type, foreign_type),
            field_name: relation.alias,
            target_entity: relation.class,
            mapped_by: relation.foreign_alias,
            join_columns,
            join_entity: spec.ref_class.clone(),
        }
    }

    /// 기본값 표를 순서대로 적용
    pub fn resolve_defaults(&self, owning_class: &str, key: &str, spec: &RelationSpec) -> ResolvedRelation {
        let mut resolved = ResolvedRelation::default();

        for &(field, rule) in RELATION_DEFAULTS {
            let value = match declared(spec, field) {
                Some(value) => value.to_string(),
                None => match rule {
                    DefaultRule::RelationKey => key.to_string(),
                    DefaultRule::TableizedClass => self.naming.tableize(&resolved.class),
                    DefaultRule::Literal(value) => value.to_string(),
                    DefaultRule::OwningClass => owning_class.to_string(),
                },
            };
            *resolved.slot(field) = value;
        }

        resolved
    }
}

fn declared(spec: &RelationSpec, field: RelationField) -> Option<&str> {
    match field {
        RelationField::Alias => spec.alias.as_deref(),
        RelationField::Class => spec.class.as_deref(),
        RelationField::Local => spec.local.as_deref(),
        RelationField::Foreign => spec.foreign.as_deref(),
        RelationField::ForeignAlias => spec.foreign_alias.as_deref(),
    }
}

/// 양쪽 카디널리티로 연관 형태 결정
pub fn classify(relation_type: Cardinality, foreign_type: Cardinality) -> AssociationKind {
    match (relation_type, foreign_type) {
        (Cardinality::One, Cardinality::One) => AssociationKind::OneToOne,
        (Cardinality::Many, Cardinality::Many) => AssociationKind::ManyToMany,
        _ => AssociationKind::OneToMany,
    }
}
