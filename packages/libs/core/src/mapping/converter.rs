//! 클래스 변환기
//!
//! 클래스 문서 하나를 테이블 → 컬럼 → 인덱스 → 관계 순으로 변환합니다.
//! 어느 단계에서든 실패하면 해당 클래스의 메타데이터는 만들어지지 않습니다.

use tracing::{debug, warn};

use super::column::ColumnMapper;
use super::index::IndexMapper;
use super::metadata::{ClassMetadata, FieldMapping};
use super::naming::{DefaultNaming, Naming};
use super::relation::RelationMapper;
use super::table::TableMapper;
use super::types::TypeResolver;
use crate::error::Result;
use crate::id::IdGenerator;
use crate::legacy::{ClassSchema, SchemaDocument};

/// 클래스 변환기
pub struct ClassConverter {
    resolver: TypeResolver,
    naming: Box<dyn Naming>,
}

impl ClassConverter {
    pub fn new(resolver: TypeResolver) -> Self {
        Self {
            resolver,
            naming: Box::new(DefaultNaming),
        }
    }

    /// 명명 규칙 교체
    pub fn with_naming(mut self, naming: impl Naming + 'static) -> Self {
        self.naming = Box::new(naming);
        self
    }

    /// 클래스 하나 변환
    pub fn convert_class(&self, name: &str, schema: &ClassSchema) -> Result<ClassMetadata> {
        let mut metadata = ClassMetadata::new(name);

        TableMapper::apply(schema.table_name.as_deref(), &mut metadata.table);

        let columns = ColumnMapper::new(&self.resolver);
        let mut has_id = false;
        let mut directive: Option<IdGenerator> = None;

        for (key, spec) in &schema.columns {
            let mapping = columns.map(key, spec)?;
            has_id |= mapping.field.id;

            if let Some(generator) = mapping.generator {
                if let Some(previous) = directive.as_ref().filter(|p| **p != generator) {
                    warn!(
                        class = %name,
                        column = %key,
                        previous = previous.strategy_name(),
                        current = generator.strategy_name(),
                        "id generator declared more than once, keeping the later declaration"
                    );
                }
                directive = Some(generator);
            }

            metadata.map_field(mapping.field)?;
        }

        if has_id {
            if let Some(generator) = directive {
                metadata.set_id_generator(generator);
            }
        } else {
            debug!(class = %name, "no identifier declared, injecting synthetic id");
            metadata.map_field(FieldMapping::synthetic_id())?;
            metadata.set_id_generator(IdGenerator::Auto);
        }

        IndexMapper::apply(&schema.indexes, &mut metadata.table);

        let relations = RelationMapper::new(self.naming.as_ref());
        for (key, spec) in &schema.relations {
            metadata.map_association(relations.map(name, key, spec))?;
        }

        debug!(
            class = %name,
            fields = metadata.fields.len(),
            associations = metadata.associations.len(),
            generator = metadata.id_generator.strategy_name(),
            "converted class"
        );

        Ok(metadata)
    }

    /// 문서의 모든 클래스를 선언 순서대로 변환
    ///
    /// 클래스별 결과를 그대로 돌려주므로 중단 여부는 호출자가 정합니다.
    pub fn convert_document(&self, document: &SchemaDocument) -> Vec<(String, Result<ClassMetadata>)> {
        document
            .iter()
            .map(|(name, schema)| (name.to_string(), self.convert_class(name, schema)))
            .collect()
    }

    /// 모든 클래스 변환, 첫 실패에서 중단
    pub fn convert_all(&self, document: &SchemaDocument) -> Result<Vec<ClassMetadata>> {
        document
            .iter()
            .map(|(name, schema)| {
                self.convert_class(name, schema)
                    .map_err(|e| e.in_class(name))
            })
            .collect()
    }
}

impl Default for ClassConverter {
    fn default() -> Self {
        Self::new(TypeResolver::default())
    }
}
