//! Convert 명령어
//!
//! 레거시 스키마 파일을 읽어 클래스별 매핑 파일을 씁니다.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use shift_core::legacy::SchemaLoader;
use shift_core::mapping::{ClassConverter, ExportFormat, MappingExporter};

use super::report::{self, ClassOutcome};
use crate::config::ShiftConfig;
use crate::OutputFormat;

/// Convert 옵션
pub struct ConvertOptions<'a> {
    pub paths: &'a [PathBuf],
    pub out: &'a Path,
    pub export_format: ExportFormat,
    pub keep_going: bool,
    pub dry_run: bool,
}

pub fn convert(config: &ShiftConfig, opts: ConvertOptions<'_>, format: OutputFormat) -> anyhow::Result<()> {
    let document = SchemaLoader::from_paths(opts.paths)?;
    tracing::info!("Loaded {} classes from {} path(s)", document.len(), opts.paths.len());

    let converter = ClassConverter::new(config.type_resolver());
    let exporter = MappingExporter::new(opts.export_format);

    if !opts.dry_run {
        std::fs::create_dir_all(opts.out)
            .with_context(|| format!("cannot create output directory {}", opts.out.display()))?;
    }

    let mut outcomes = Vec::new();
    for (name, result) in converter.convert_document(&document) {
        let metadata = match result {
            Ok(metadata) => metadata,
            Err(e) if opts.keep_going => {
                tracing::warn!("Skipping class {}: {}", name, e);
                outcomes.push(ClassOutcome::failed(&name, &e));
                continue;
            }
            Err(e) => return Err(e.in_class(&name).into()),
        };

        let file = opts.out.join(exporter.file_name(&metadata));
        if opts.dry_run {
            tracing::info!("[DRY RUN] Would write {}", file.display());
        } else {
            let content = exporter.export(&metadata)?;
            std::fs::write(&file, content)
                .with_context(|| format!("cannot write {}", file.display()))?;
        }

        outcomes.push(ClassOutcome::converted(&metadata, Some(file)));
    }

    report::print(&outcomes, format)?;

    let failed = report::failures(&outcomes);
    if failed > 0 {
        anyhow::bail!("{} of {} classes failed to convert", failed, outcomes.len());
    }
    Ok(())
}
