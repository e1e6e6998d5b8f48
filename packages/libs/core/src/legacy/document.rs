//! 레거시 스키마 문서 타입
//!
//! 외부 로더가 만들어 주는 읽기 전용 입력입니다.
//! 선언 순서가 출력 순서가 되므로 모든 맵은 `IndexMap`을 사용합니다.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// 클래스 이름 -> 클래스 스키마
#[derive(Debug, Clone, Default)]
pub struct SchemaDocument {
    classes: IndexMap<String, ClassSchema>,
}

impl SchemaDocument {
    /// 빈 문서 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 클래스 추가. 같은 이름이 있으면 이전 정의를 돌려준다.
    pub fn insert(&mut self, name: impl Into<String>, class: ClassSchema) -> Option<ClassSchema> {
        self.classes.insert(name.into(), class)
    }

    /// 클래스 조회
    pub fn get(&self, name: &str) -> Option<&ClassSchema> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// 선언 순서대로 순회
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassSchema)> {
        self.classes.iter().map(|(name, class)| (name.as_str(), class))
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(|s| s.as_str())
    }

    /// 다른 문서를 병합하고 덮어쓴 클래스 이름 목록을 반환
    pub fn merge(&mut self, other: SchemaDocument) -> Vec<String> {
        let mut replaced = Vec::new();
        for (name, class) in other.classes {
            if self.classes.insert(name.clone(), class).is_some() {
                replaced.push(name);
            }
        }
        replaced
    }
}

/// 클래스 하나의 스키마
///
/// `actAs`, `options`, `inheritance` 등 매핑과 무관한 키는 무시됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassSchema {
    /// 물리 테이블 이름 (`schema.table` 형태 가능)
    #[serde(default, rename = "tableName")]
    pub table_name: Option<String>,

    #[serde(default, deserialize_with = "column_map")]
    pub columns: IndexMap<String, ColumnSpec>,

    #[serde(default, deserialize_with = "map_with_null_entries")]
    pub indexes: IndexMap<String, IndexSpec>,

    /// `User: ~` 처럼 값이 비어 있는 관계는 전부 기본값으로 채워집니다.
    #[serde(default, deserialize_with = "map_with_null_entries")]
    pub relations: IndexMap<String, RelationSpec>,
}

/// 컬럼 정의: 축약형 문자열 또는 구조화된 정의
#[derive(Debug, Clone)]
pub enum ColumnSpec {
    /// `title: string(100)`
    Shorthand(String),

    /// `title: { type: string, length: 100, notnull: true }`
    Definition(ColumnDefinition),
}

impl<'de> Deserialize<'de> for ColumnSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(token) => Ok(ColumnSpec::Shorthand(token)),
            value @ Value::Mapping(_) => serde_yaml::from_value(value)
                .map(ColumnSpec::Definition)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "expected a type token or a column definition, found {}",
                value_kind(&other)
            ))),
        }
    }
}

impl ColumnSpec {
    /// 구조화된 형태로 정규화
    pub fn normalize(&self) -> ColumnDefinition {
        match self {
            ColumnSpec::Shorthand(type_token) => ColumnDefinition::of_type(type_token.clone()),
            ColumnSpec::Definition(definition) => definition.clone(),
        }
    }
}

/// 구조화된 컬럼 정의
///
/// `primary`, `autoincrement`는 값이 아니라 존재 여부로 판단합니다.
/// `notnull`, `unique`, `version`은 `1`/`yes`/`on` 같은 레거시 표기도 받습니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColumnDefinition {
    /// 타입 토큰 (`string(255)`처럼 길이를 포함할 수 있음)
    #[serde(rename = "type")]
    pub column_type: String,

    /// 저장 컬럼 이름 (`column as field` 형태 가능)
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub length: Option<u32>,

    #[serde(default, deserialize_with = "presence")]
    pub primary: bool,

    #[serde(default, deserialize_with = "presence")]
    pub autoincrement: bool,

    #[serde(default)]
    pub sequence: Option<SequenceSpec>,

    #[serde(default, deserialize_with = "loose_bool")]
    pub notnull: Option<bool>,

    #[serde(default, deserialize_with = "loose_bool")]
    pub unique: Option<bool>,

    #[serde(default, deserialize_with = "loose_bool")]
    pub version: Option<bool>,

    #[serde(default)]
    pub precision: Option<u32>,

    #[serde(default)]
    pub scale: Option<u32>,

    #[serde(default)]
    pub options: Option<IndexMap<String, serde_yaml::Value>>,
}

impl ColumnDefinition {
    /// 타입만 지정된 정의
    pub fn of_type(column_type: impl Into<String>) -> Self {
        Self {
            column_type: column_type.into(),
            ..Self::default()
        }
    }
}

/// 시퀀스 선언: 이름만 주거나 구조화된 정의
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SequenceSpec {
    Name(String),
    Definition {
        name: String,
        #[serde(default)]
        size: Option<u32>,
        #[serde(default)]
        value: Option<u32>,
    },
}

/// 인덱스 정의
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexSpec {
    #[serde(default)]
    pub fields: IndexFields,

    /// `unique`이면 유니크 제약, 그 외에는 일반 인덱스
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl IndexSpec {
    pub fn is_unique(&self) -> bool {
        self.kind.as_deref() == Some("unique")
    }
}

/// 인덱스 컬럼 목록
///
/// 필드별 옵션(`sorting`, `length`)을 가진 맵 형태도 허용하지만 옵션은 버립니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IndexFields {
    List(Vec<String>),
    Map(IndexMap<String, serde_yaml::Value>),
}

impl Default for IndexFields {
    fn default() -> Self {
        IndexFields::List(Vec::new())
    }
}

impl IndexFields {
    pub fn column_names(&self) -> Vec<String> {
        match self {
            IndexFields::List(names) => names.clone(),
            IndexFields::Map(fields) => fields.keys().cloned().collect(),
        }
    }
}

/// 관계 정의
///
/// 모든 필드는 선택 사항이며, 빠진 값은 관계마다 독립적으로 기본값이 적용됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelationSpec {
    #[serde(default)]
    pub alias: Option<String>,

    /// 대상 클래스
    #[serde(default)]
    pub class: Option<String>,

    #[serde(default)]
    pub local: Option<String>,

    #[serde(default)]
    pub foreign: Option<String>,

    #[serde(default, rename = "foreignAlias")]
    pub foreign_alias: Option<String>,

    #[serde(default, rename = "type")]
    pub relation_type: Option<Cardinality>,

    #[serde(default, rename = "foreignType")]
    pub foreign_type: Option<Cardinality>,

    /// 명시적인 피벗 엔티티 (다대다)
    #[serde(default, rename = "refClass")]
    pub ref_class: Option<String>,

    #[serde(default, rename = "onDelete")]
    pub on_delete: Option<String>,
}

/// 관계 한쪽의 카디널리티
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    One,
    Many,
}

/// 컬럼 맵: 잘못된 정의는 컬럼 이름과 함께 보고
fn column_map<'de, D>(deserializer: D) -> Result<IndexMap<String, ColumnSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<IndexMap<String, Value>> = Option::deserialize(deserializer)?;
    raw.unwrap_or_default()
        .into_iter()
        .map(|(name, value)| match serde_yaml::from_value(value) {
            Ok(spec) => Ok((name, spec)),
            Err(e) => Err(D::Error::custom(format!("column '{}': {}", name, e))),
        })
        .collect()
}

/// null이 아닌 값이면 무엇이든 `true`
fn presence<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(!Value::deserialize(deserializer)?.is_null())
}

fn loose_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Bool(flag) => Ok(Some(flag)),
        Value::Number(n) => Ok(Some(n.as_f64() != Some(0.0))),
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(Some(true)),
            "false" | "no" | "off" | "0" | "" => Ok(Some(false)),
            _ => Err(D::Error::custom(format!("invalid flag value '{}'", s))),
        },
        other => Err(D::Error::custom(format!(
            "invalid flag value, found {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn map_with_null_entries<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let raw: Option<IndexMap<String, Option<T>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, entry)| (name, entry.unwrap_or_default()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(yaml: &str) -> ClassSchema {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_shorthand_and_structured_columns() {
        let schema = class(
            r#"
tableName: articles
columns:
  title: string(100)
  id:
    type: integer(4)
    primary: true
    autoincrement: true
"#,
        );

        assert_eq!(schema.table_name.as_deref(), Some("articles"));
        let title = schema.columns["title"].normalize();
        assert_eq!(title.column_type, "string(100)");
        assert!(!title.primary);

        let id = schema.columns["id"].normalize();
        assert_eq!(id.column_type, "integer(4)");
        assert!(id.primary);
        assert!(id.autoincrement);
    }

    #[test]
    fn test_legacy_flag_values() {
        let schema = class(
            r#"
columns:
  uid:
    type: integer
    primary: 1
    autoincrement: yes
    notnull: 1
    unique: "no"
    version: off
  other:
    type: integer
    primary: ~
"#,
        );

        let uid = schema.columns["uid"].normalize();
        assert!(uid.primary);
        assert!(uid.autoincrement);
        assert_eq!(uid.notnull, Some(true));
        assert_eq!(uid.unique, Some(false));
        assert_eq!(uid.version, Some(false));

        let other = schema.columns["other"].normalize();
        assert!(!other.primary);
        assert!(!other.autoincrement);
        assert_eq!(other.notnull, None);
    }

    #[test]
    fn test_malformed_column_names_the_column() {
        let err = serde_yaml::from_str::<ClassSchema>(
            r#"
columns:
  title:
    length: 10
"#,
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("column 'title'"), "{}", message);
        assert!(message.contains("missing field `type`"), "{}", message);
    }

    #[test]
    fn test_non_string_shorthand_is_rejected() {
        let err = serde_yaml::from_str::<ClassSchema>("columns:\n  count: 5\n").unwrap_err();
        assert!(err.to_string().contains("column 'count'"));
    }

    #[test]
    fn test_columns_keep_declaration_order() {
        let schema = class(
            r#"
columns:
  zeta: string
  alpha: integer
  mid: text
"#,
        );

        let names: Vec<&str> = schema.columns.keys().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_sequence_forms() {
        let schema = class(
            r#"
columns:
  a:
    type: integer
    sequence: a_seq
  b:
    type: integer
    sequence:
      name: b_seq
      size: 10
      value: 100
"#,
        );

        assert_eq!(
            schema.columns["a"].normalize().sequence,
            Some(SequenceSpec::Name("a_seq".to_string()))
        );
        assert_eq!(
            schema.columns["b"].normalize().sequence,
            Some(SequenceSpec::Definition {
                name: "b_seq".to_string(),
                size: Some(10),
                value: Some(100),
            })
        );
    }

    #[test]
    fn test_null_relation_entry_uses_defaults() {
        let schema = class(
            r#"
relations:
  User: ~
  Tags:
    refClass: ArticleTag
    type: many
"#,
        );

        assert_eq!(schema.relations.len(), 2);
        assert!(schema.relations["User"].class.is_none());
        assert_eq!(schema.relations["Tags"].ref_class.as_deref(), Some("ArticleTag"));
        assert_eq!(schema.relations["Tags"].relation_type, Some(Cardinality::Many));
    }

    #[test]
    fn test_index_field_forms() {
        let schema = class(
            r#"
indexes:
  by_title:
    fields: [title, slug]
    type: unique
  by_date:
    fields:
      created_at:
        sorting: DESC
      id: ~
"#,
        );

        assert!(schema.indexes["by_title"].is_unique());
        assert_eq!(
            schema.indexes["by_title"].fields.column_names(),
            vec!["title", "slug"]
        );
        assert!(!schema.indexes["by_date"].is_unique());
        assert_eq!(
            schema.indexes["by_date"].fields.column_names(),
            vec!["created_at", "id"]
        );
    }

    #[test]
    fn test_empty_sections() {
        let schema = class(
            r#"
columns: ~
relations: ~
"#,
        );

        assert!(schema.columns.is_empty());
        assert!(schema.relations.is_empty());
        assert!(schema.indexes.is_empty());
    }

    #[test]
    fn test_merge_reports_replaced_classes() {
        let mut first = SchemaDocument::new();
        first.insert("User", ClassSchema::default());
        first.insert("Article", ClassSchema::default());

        let mut second = SchemaDocument::new();
        second.insert("Article", ClassSchema::default());
        second.insert("Tag", ClassSchema::default());

        let replaced = first.merge(second);
        assert_eq!(replaced, vec!["Article".to_string()]);
        assert_eq!(
            first.class_names().collect::<Vec<_>>(),
            vec!["User", "Article", "Tag"]
        );
    }
}
