//! 매핑 타입 정의와 타입 해석
//!
//! 레거시 타입 토큰을 대상 ORM이 인식하는 논리 타입 이름으로 정규화합니다.
//! 레거시 별칭(`clob`, `timestamp`, `enum`)을 먼저 치환한 뒤 레지스트리에서 찾습니다.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 레거시 타입 -> 현재 타입 기본 별칭
pub const LEGACY_TYPE_ALIASES: &[(&str, &str)] = &[
    ("clob", "text"),
    ("timestamp", "datetime"),
    ("enum", "string"),
];

/// 대상 ORM의 내장 매핑 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingType {
    Array,
    SimpleArray,
    JsonArray,
    Json,
    Object,
    Boolean,
    Integer,
    Smallint,
    Bigint,
    String,
    Text,
    Datetime,
    Datetimetz,
    Date,
    Time,
    Decimal,
    Float,
    Guid,
    Blob,
    Binary,
}

impl MappingType {
    /// 타입 이름에서 파싱
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "array" => Some(MappingType::Array),
            "simple_array" => Some(MappingType::SimpleArray),
            "json_array" => Some(MappingType::JsonArray),
            "json" => Some(MappingType::Json),
            "object" => Some(MappingType::Object),
            "boolean" => Some(MappingType::Boolean),
            "integer" => Some(MappingType::Integer),
            "smallint" => Some(MappingType::Smallint),
            "bigint" => Some(MappingType::Bigint),
            "string" => Some(MappingType::String),
            "text" => Some(MappingType::Text),
            "datetime" => Some(MappingType::Datetime),
            "datetimetz" => Some(MappingType::Datetimetz),
            "date" => Some(MappingType::Date),
            "time" => Some(MappingType::Time),
            "decimal" => Some(MappingType::Decimal),
            "float" => Some(MappingType::Float),
            "guid" => Some(MappingType::Guid),
            "blob" => Some(MappingType::Blob),
            "binary" => Some(MappingType::Binary),
            _ => None,
        }
    }

    /// 타입 이름
    pub fn name(&self) -> &'static str {
        match self {
            MappingType::Array => "array",
            MappingType::SimpleArray => "simple_array",
            MappingType::JsonArray => "json_array",
            MappingType::Json => "json",
            MappingType::Object => "object",
            MappingType::Boolean => "boolean",
            MappingType::Integer => "integer",
            MappingType::Smallint => "smallint",
            MappingType::Bigint => "bigint",
            MappingType::String => "string",
            MappingType::Text => "text",
            MappingType::Datetime => "datetime",
            MappingType::Datetimetz => "datetimetz",
            MappingType::Date => "date",
            MappingType::Time => "time",
            MappingType::Decimal => "decimal",
            MappingType::Float => "float",
            MappingType::Guid => "guid",
            MappingType::Blob => "blob",
            MappingType::Binary => "binary",
        }
    }
}

/// 레지스트리가 돌려주는 타입 핸들
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeHandle {
    Builtin(MappingType),

    /// 설정으로 등록된 사용자 정의 타입
    Custom(String),
}

impl TypeHandle {
    pub fn name(&self) -> &str {
        match self {
            TypeHandle::Builtin(builtin) => builtin.name(),
            TypeHandle::Custom(name) => name,
        }
    }
}

/// 대상 타입 레지스트리
pub trait TypeRegistry: Send + Sync {
    fn get_type(&self, name: &str) -> Option<TypeHandle>;

    fn has_type(&self, name: &str) -> bool {
        self.get_type(name).is_some()
    }
}

/// 내장 타입만 아는 레지스트리
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTypes;

impl TypeRegistry for BuiltinTypes {
    fn get_type(&self, name: &str) -> Option<TypeHandle> {
        MappingType::from_name(name).map(TypeHandle::Builtin)
    }
}

/// 다른 레지스트리 위에 사용자 정의 타입 이름을 얹은 레지스트리
#[derive(Debug, Clone, Default)]
pub struct CustomTypes<R> {
    base: R,
    names: BTreeSet<String>,
}

impl<R: TypeRegistry> CustomTypes<R> {
    pub fn new(base: R) -> Self {
        Self {
            base,
            names: BTreeSet::new(),
        }
    }

    /// 타입 이름 등록 (소문자로 저장)
    pub fn register(&mut self, name: &str) {
        self.names.insert(name.to_lowercase());
    }

    pub fn with_type(mut self, name: &str) -> Self {
        self.register(name);
        self
    }
}

impl<R: TypeRegistry> TypeRegistry for CustomTypes<R> {
    fn get_type(&self, name: &str) -> Option<TypeHandle> {
        self.base.get_type(name).or_else(|| {
            self.names
                .contains(name)
                .then(|| TypeHandle::Custom(name.to_string()))
        })
    }
}

/// 레거시 타입 토큰 해석기
pub struct TypeResolver {
    registry: Box<dyn TypeRegistry>,
    aliases: IndexMap<String, String>,
}

impl TypeResolver {
    /// 기본 레거시 별칭과 함께 생성
    pub fn new(registry: impl TypeRegistry + 'static) -> Self {
        let aliases = LEGACY_TYPE_ALIASES
            .iter()
            .map(|(legacy, current)| (legacy.to_string(), current.to_string()))
            .collect();

        Self {
            registry: Box::new(registry),
            aliases,
        }
    }

    /// 별칭 추가 (같은 레거시 이름이면 대체)
    pub fn with_alias(mut self, legacy: &str, current: &str) -> Self {
        self.aliases
            .insert(legacy.to_lowercase(), current.to_lowercase());
        self
    }

    /// 토큰을 논리 타입으로 해석
    ///
    /// 토큰은 소문자로 정규화한 뒤 별칭 치환, 레지스트리 조회 순으로 처리합니다.
    pub fn resolve(&self, token: &str) -> Result<TypeHandle> {
        let token = token.to_lowercase();
        let name = self
            .aliases
            .get(&token)
            .map(String::as_str)
            .unwrap_or(token.as_str());

        self.registry
            .get_type(name)
            .ok_or_else(|| Error::UnknownType {
                type_name: name.to_string(),
            })
    }

    pub fn has_type(&self, token: &str) -> bool {
        self.resolve(token).is_ok()
    }
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self::new(BuiltinTypes)
    }
}
