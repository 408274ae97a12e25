use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use log::{error, info};

use bounding_box::analysis::detect;
use bounding_box::core::config::{DEFAULT_BACKGROUND, DEFAULT_MARKER};
use bounding_box::core::Glyphs;
use bounding_box::perception::grid::{load_rows, read_rows, Grid};
use bounding_box::report::Report;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// One `(x1,y1)(x2,y2)` line per box
    #[default]
    Text,
    /// Pretty-printed JSON report with scan statistics
    Json,
}

/// Print the largest minimum bounding boxes of marker groups that overlap
/// no other group's box.
#[derive(Parser, Debug)]
#[command(name = "bounding-box")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Glyph for marker cells
    #[arg(long, default_value_t = DEFAULT_MARKER)]
    marker: char,

    /// Glyph for background cells
    #[arg(long, default_value_t = DEFAULT_BACKGROUND)]
    background: char,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Ok(true) when at least one box was selected.
fn run(args: &Args) -> anyhow::Result<bool> {
    let glyphs = Glyphs::new(args.marker, args.background)?;

    let rows = match &args.input {
        Some(path) => load_rows(path)?,
        None => read_rows(io::stdin().lock())?,
    };
    if rows.is_empty() {
        info!("no input rows");
        return Ok(false);
    }

    let grid = Grid::from_rows(&rows, glyphs)?;
    let detection = detect(&grid)?;
    let report = Report::new(&grid, &detection);
    info!("{}", report.summary());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.format {
        OutputFormat::Text => report.write_text(&mut out)?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }
    out.flush()?;

    Ok(detection.is_success())
}
