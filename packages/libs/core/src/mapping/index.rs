//! 인덱스 매핑

use indexmap::IndexMap;

use super::metadata::{IndexDescriptor, TableDescriptor};
use crate::legacy::IndexSpec;

/// 인덱스 매퍼
pub struct IndexMapper;

impl IndexMapper {
    /// 이름 있는 인덱스들을 유니크 제약 또는 일반 인덱스로 분류해 적용
    pub fn apply(indexes: &IndexMap<String, IndexSpec>, table: &mut TableDescriptor) {
        for (name, index) in indexes {
            let descriptor = IndexDescriptor {
                columns: index.fields.column_names(),
            };

            if index.is_unique() {
                table.unique_constraints.insert(name.clone(), descriptor);
            } else {
                table.indexes.insert(name.clone(), descriptor);
            }
        }
    }
}
