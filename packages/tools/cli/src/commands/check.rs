//! Check 명령어
//!
//! 파일을 쓰지 않고 변환만 수행해 클래스별 결과를 보여줍니다.

use std::path::PathBuf;

use shift_core::legacy::SchemaLoader;
use shift_core::mapping::ClassConverter;

use super::report::{self, ClassOutcome};
use crate::config::ShiftConfig;
use crate::OutputFormat;

pub fn check(config: &ShiftConfig, paths: &[PathBuf], format: OutputFormat) -> anyhow::Result<()> {
    let document = SchemaLoader::from_paths(paths)?;
    let converter = ClassConverter::new(config.type_resolver());

    let outcomes: Vec<ClassOutcome> = converter
        .convert_document(&document)
        .into_iter()
        .map(|(name, result)| match result {
            Ok(metadata) => ClassOutcome::converted(&metadata, None),
            Err(e) => ClassOutcome::failed(&name, &e),
        })
        .collect();

    report::print(&outcomes, format)?;

    let failed = report::failures(&outcomes);
    if failed > 0 {
        anyhow::bail!("{} of {} classes failed to convert", failed, outcomes.len());
    }
    Ok(())
}
