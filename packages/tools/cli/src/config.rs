//! CLI 설정

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use shift_core::mapping::{BuiltinTypes, CustomTypes, ExportFormat, TypeResolver};

/// CLI 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftConfig {
    /// 내장 타입 외에 허용할 매핑 타입 이름
    pub custom_types: Vec<String>,

    /// 추가 레거시 타입 별칭 (레거시 이름 -> 현재 이름)
    pub type_aliases: IndexMap<String, String>,

    /// 기본 내보내기 형식
    pub output_format: ExportFormat,

    /// 클래스 변환 실패 시 계속 진행
    pub keep_going: bool,
}

impl ShiftConfig {
    /// 설정 파일 경로 결정 (`--config` > `SHIFT_CONFIG` > `./shift.json` > `~/.shift/config.json`)
    fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = std::env::var("SHIFT_CONFIG") {
            return Some(PathBuf::from(path));
        }

        let local = PathBuf::from("shift.json");
        if local.exists() {
            return Some(local);
        }

        dirs::home_dir()
            .map(|home| home.join(".shift").join("config.json"))
            .filter(|path| path.exists())
    }

    /// 설정 로드
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match Self::config_path(explicit) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read config {}: {}", path.display(), e))?;
        let config: ShiftConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// 설정을 반영한 타입 해석기
    pub fn type_resolver(&self) -> TypeResolver {
        let mut registry = CustomTypes::new(BuiltinTypes);
        for name in &self.custom_types {
            registry.register(name);
        }

        self.type_aliases
            .iter()
            .fold(TypeResolver::new(registry), |resolver, (legacy, current)| {
                resolver.with_alias(legacy, current)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shift.json");
        std::fs::write(
            &path,
            r#"{
                "custom_types": ["point"],
                "type_aliases": { "geometry": "point" },
                "output_format": "json"
            }"#,
        )
        .unwrap();

        let config = ShiftConfig::from_file(&path).unwrap();
        assert_eq!(config.output_format, ExportFormat::Json);
        assert!(!config.keep_going);

        let resolver = config.type_resolver();
        assert_eq!(resolver.resolve("geometry").unwrap().name(), "point");
        assert_eq!(resolver.resolve("clob").unwrap().name(), "text");
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(&path, r#"{ "keep_going": true }"#).unwrap();

        let config = ShiftConfig::load(Some(&path)).unwrap();
        assert!(config.keep_going);
        assert_eq!(config.output_format, ExportFormat::Yaml);
    }
}
