//! 테이블 이름 매핑

use super::metadata::TableDescriptor;

/// 테이블 매퍼
pub struct TableMapper;

impl TableMapper {
    /// 테이블 이름 적용
    ///
    /// `schema.table`이면 앞부분이 스키마 한정자가 됩니다.
    /// 이름이 없거나 비어 있으면 아무것도 하지 않습니다.
    pub fn apply(table_name: Option<&str>, table: &mut TableDescriptor) {
        let Some(table_name) = table_name.filter(|name| !name.is_empty()) else {
            return;
        };

        let mut segments = table_name.split('.');
        match (segments.next(), segments.next()) {
            (Some(schema), Some(name)) => {
                table.schema = Some(schema.to_string());
                table.name = Some(name.to_string());
            }
            (Some(name), None) => table.name = Some(name.to_string()),
            (None, _) => {}
        }
    }
}
