//! 레거시 스키마 로더
//!
//! YAML 문자열이나 파일/디렉토리 경로를 읽어 `SchemaDocument`를 만듭니다.
//! 변환 로직과는 분리된 얇은 I/O 계층입니다.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, warn};

use super::document::{ClassSchema, SchemaDocument};
use crate::error::{Error, Result};

/// 클래스가 아닌 문서 전역 키
const GLOBAL_KEYS: &[&str] = &[
    "options",
    "connection",
    "detect_relations",
    "package",
    "actAs",
    "inheritance",
];

/// 레거시 YAML 파서
pub struct LegacyParser;

impl LegacyParser {
    /// 단일 YAML 문자열 파싱
    pub fn parse_yaml(yaml: &str) -> Result<SchemaDocument> {
        if yaml.trim().is_empty() {
            return Ok(SchemaDocument::new());
        }

        let raw: Option<IndexMap<String, serde_yaml::Value>> = serde_yaml::from_str(yaml)?;
        let mut document = SchemaDocument::new();

        for (name, value) in raw.unwrap_or_default() {
            if GLOBAL_KEYS.contains(&name.as_str()) || !value.is_mapping() {
                debug!(key = %name, "skipping non-class top-level entry");
                continue;
            }

            let class: ClassSchema =
                serde_yaml::from_value(value).map_err(|e| Error::from(e).in_class(&name))?;
            document.insert(name, class);
        }

        Ok(document)
    }
}

/// 파일 시스템에서 스키마 문서를 모으는 로더
pub struct SchemaLoader;

impl SchemaLoader {
    /// 파일 또는 디렉토리 목록에서 로드
    ///
    /// 디렉토리는 바로 아래의 `*.yml`/`*.yaml` 파일만 이름순으로 읽습니다.
    /// 같은 클래스가 다시 정의되면 나중 정의가 이깁니다.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<SchemaDocument> {
        let mut document = SchemaDocument::new();

        for path in paths {
            for file in Self::schema_files(path.as_ref())? {
                let content = fs::read_to_string(&file).map_err(|source| Error::Io {
                    path: file.clone(),
                    source,
                })?;
                let parsed = LegacyParser::parse_yaml(&content)?;
                debug!(file = %file.display(), classes = parsed.len(), "loaded schema file");

                for name in document.merge(parsed) {
                    warn!(class = %name, file = %file.display(), "class redefined, keeping later definition");
                }
            }
        }

        Ok(document)
    }

    fn schema_files(path: &Path) -> Result<Vec<PathBuf>> {
        if !path.is_dir() {
            return Ok(vec![path.to_path_buf()]);
        }

        let entries = fs::read_dir(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let file = entry.path();
            if file.is_file() && is_yaml(&file) {
                files.push(file);
            }
        }

        files.sort();
        Ok(files)
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml" | "yaml")
    )
}
