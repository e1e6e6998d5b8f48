//! shift CLI (`shift`)
//!
//! 레거시 스키마 문서를 ORM 매핑 파일로 옮기는 일회성 마이그레이션 도구입니다.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shift_core::mapping::ExportFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::convert::ConvertOptions;
use config::ShiftConfig;

#[derive(Parser)]
#[command(name = "shift")]
#[command(author, version, about = "shift - Legacy schema to ORM mapping converter", long_about = None)]
struct Cli {
    /// Config file (overrides SHIFT_CONFIG and ./shift.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ExportArg {
    Yaml,
    Json,
}

impl From<ExportArg> for ExportFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Yaml => ExportFormat::Yaml,
            ExportArg::Json => ExportFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert schema files and write one mapping file per class
    Convert {
        /// Schema files or directories (*.yml, *.yaml)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output directory
        #[arg(long)]
        out: PathBuf,

        /// Mapping file format (defaults to config output_format)
        #[arg(long)]
        export_format: Option<ExportArg>,

        /// Continue with remaining classes when a class fails
        #[arg(long)]
        keep_going: bool,

        /// Convert without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Convert schema files and report per-class results without writing
    Check {
        /// Schema files or directories (*.yml, *.yaml)
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // 환경변수 로드
    dotenvy::dotenv().ok();

    // 로깅 초기화
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shift_cli=info,shift_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // 설정 로드
    let config = ShiftConfig::load(cli.config.as_deref())?;

    // 명령 실행
    match cli.command {
        Commands::Convert {
            paths,
            out,
            export_format,
            keep_going,
            dry_run,
        } => commands::convert::convert(
            &config,
            ConvertOptions {
                paths: &paths,
                out: &out,
                export_format: export_format.map(Into::into).unwrap_or(config.output_format),
                keep_going: keep_going || config.keep_going,
                dry_run,
            },
            cli.format,
        ),

        Commands::Check { paths } => commands::check::check(&config, &paths, cli.format),
    }
}
