//! catalogzero CLI
//!
//! サービスカタログのワークブックを、カテゴリごとのサービス定義JSONに変換する。
//!
//! Usage:
//!   catalogzero catalog.xlsx                      # カテゴリごとの集計を表示
//!   catalogzero catalog.xlsx --stdout             # 全カテゴリをJSONで標準出力
//!   catalogzero catalog.xlsx --category cleaning --stdout
//!   catalogzero catalog.xlsx -o output --format simplified

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use catalogzero::{
    render_catalog, render_document, render_summary, BatchWriter, ConverterBuilder,
    DocumentFormat, SheetSelector,
};

/// Service catalog spreadsheet to service-definition JSON converter
#[derive(Parser, Debug)]
#[command(name = "catalogzero", version)]
#[command(about = "Convert a service catalog workbook into per-category service-definition JSON")]
struct Args {
    /// Input workbook (xlsx, xls, xlsb, ods)
    input: PathBuf,

    /// Write <slug>.json per category and index.json into this directory
    #[arg(long, short = 'o')]
    output_dir: Option<PathBuf>,

    /// Document format: inline or simplified
    #[arg(long, default_value = "inline", value_parser = parse_format)]
    format: DocumentFormat,

    /// Sheet name to read
    #[arg(long, conflicts_with = "sheet_index")]
    sheet: Option<String>,

    /// Sheet index to read (0-based, default: first sheet)
    #[arg(long)]
    sheet_index: Option<usize>,

    /// Index of the header row within the sheet's used range
    #[arg(long, default_value_t = 0)]
    header_row: usize,

    /// Only keep this category slug
    #[arg(long)]
    category: Option<String>,

    /// Print JSON to stdout instead of the summary table
    #[arg(long, conflicts_with = "output_dir")]
    stdout: bool,

    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_format(value: &str) -> Result<DocumentFormat, String> {
    DocumentFormat::from_name(value)
        .ok_or_else(|| format!("unknown format '{}' (expected inline or simplified)", value))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let selector = match (args.sheet, args.sheet_index) {
        (Some(name), _) => SheetSelector::Name(name),
        (None, Some(index)) => SheetSelector::Index(index),
        (None, None) => SheetSelector::default(),
    };

    let converter = ConverterBuilder::new()
        .with_sheet_selector(selector)
        .with_document_format(args.format)
        .with_header_row(args.header_row)
        .build()?;

    let mut catalog = converter.convert(File::open(&args.input)?)?;
    info!(
        input = %args.input.display(),
        format = ?converter.document_format(),
        categories = catalog.len(),
        "workbook converted"
    );

    if let Some(slug) = &args.category {
        catalog = catalog.retain_slug(slug);
        if catalog.is_empty() {
            return Err(format!("category '{}' not found", slug).into());
        }
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Some(dir) = &args.output_dir {
        let report = BatchWriter::new(dir).write(&catalog)?;
        render_summary(&catalog.summaries(), &mut out)?;
        writeln!(
            out,
            "\n{} file(s) written to {}",
            report.files.len() + usize::from(report.index.is_some()),
            dir.display()
        )?;
    } else if args.stdout {
        // 単一カテゴリの場合はドキュメントそのものを出力
        match (&args.category, catalog.documents().next()) {
            (Some(_), Some(document)) => render_document(document, &mut out)?,
            _ => render_catalog(&catalog, &mut out)?,
        }
    } else {
        render_summary(&catalog.summaries(), &mut out)?;
    }

    out.flush()?;
    Ok(())
}
