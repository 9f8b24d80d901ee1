//! sheetsum CLI - spreadsheet workbook summaries
//!
//! A command-line tool for inspecting the structure of XLSX workbooks:
//! header detection, previews, statistics and totals of numeric columns.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use sheetsum::analysis::{DetectionPolicy, MarkerSet};
use sheetsum::{
    write_summary, JsonFormat, OutputFormat, PreviewStyle, SheetSelection, SummaryOptions,
    Workbook,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default workbook for the monthly cash and bank ledger
const DEFAULT_WORKBOOK: &str = "Resumo de Bancos, Caixa e Clientes.xlsx";

/// Spreadsheet workbook summaries as text or JSON
#[derive(Parser)]
#[command(
    name = "sheetsum",
    author = "iyulab",
    version,
    about = "Summarize the structure of spreadsheet workbooks",
    long_about = "sheetsum - Structural summaries of XLSX workbooks.\n\n\
                  Detects header rows, previews data, describes columns and totals \
                  numeric ledger columns."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the header of a sheet and total its numeric columns
    Analyze {
        /// Input workbook path
        #[arg(default_value = DEFAULT_WORKBOOK)]
        input: PathBuf,

        /// Sheet to analyze
        #[arg(short, long, default_value = "Caixa Outubro", conflicts_with = "all")]
        sheet: String,

        /// Analyze every sheet
        #[arg(long)]
        all: bool,

        /// Numeric column marker preset
        #[arg(long, default_value = "cash")]
        markers: MarkerPreset,

        /// Custom numeric column marker (repeatable, replaces the preset)
        #[arg(long = "numeric-marker", value_name = "MARKER")]
        numeric_markers: Vec<String>,

        /// Custom header marker (repeatable, replaces the defaults)
        #[arg(long = "header-marker", value_name = "MARKER")]
        header_markers: Vec<String>,

        /// Header detection policy
        #[arg(long, default_value = "first-match")]
        policy: Policy,

        /// Use this 1-based row as the header instead of detecting it (blank rows are not counted)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        header_row: Option<u64>,

        /// Number of data rows to preview
        #[arg(long, default_value = "5")]
        preview_rows: usize,

        /// Number of raw rows to show when no header is found (0 = none)
        #[arg(long, default_value = "10")]
        raw_rows: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show shape, columns and first rows of every sheet
    Overview {
        /// Input workbook path
        #[arg(default_value = DEFAULT_WORKBOOK)]
        input: PathBuf,

        /// Print preview rows as compact value lists
        #[arg(long)]
        compact_rows: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Describe every sheet with statistics and missing values
    Inspect {
        /// Input workbook path
        #[arg(default_value = DEFAULT_WORKBOOK)]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the sheet names of a workbook
    Sheets {
        /// Input workbook path
        #[arg(default_value = DEFAULT_WORKBOOK)]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct OutputArgs {
    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "text")]
    format: Format,

    /// Output compact JSON (no indentation)
    #[arg(long)]
    compact: bool,
}

impl OutputArgs {
    fn output_format(&self) -> OutputFormat {
        match self.format {
            Format::Text => OutputFormat::Text,
            Format::Json if self.compact => OutputFormat::Json(JsonFormat::Compact),
            Format::Json => OutputFormat::Json(JsonFormat::Pretty),
        }
    }
}

/// Report format
#[derive(Clone, ValueEnum)]
enum Format {
    /// Plain text
    Text,
    /// JSON section list
    Json,
}

/// Numeric column marker preset
#[derive(Clone, ValueEnum)]
enum MarkerPreset {
    /// entrada, saida, valor
    Cash,
    /// entrada, saida, valor, credito, debito
    Ledger,
}

impl From<MarkerPreset> for MarkerSet {
    fn from(preset: MarkerPreset) -> Self {
        match preset {
            MarkerPreset::Cash => MarkerSet::cash(),
            MarkerPreset::Ledger => MarkerSet::ledger(),
        }
    }
}

/// Header detection policy
#[derive(Clone, ValueEnum)]
enum Policy {
    /// First row containing a marker
    FirstMatch,
    /// Row matching the most markers
    BestScore,
}

impl From<Policy> for DetectionPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::FirstMatch => DetectionPolicy::FirstMatch,
            Policy::BestScore => DetectionPolicy::BestScore,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Analyze {
            input,
            sheet,
            all,
            markers,
            numeric_markers,
            header_markers,
            policy,
            header_row,
            preview_rows,
            raw_rows,
            output,
        } => {
            let numeric_markers = if numeric_markers.is_empty() {
                MarkerSet::from(markers)
            } else {
                MarkerSet::new(numeric_markers)
            };
            let header_markers = if header_markers.is_empty() {
                MarkerSet::header()
            } else {
                MarkerSet::new(header_markers)
            };

            let mut options = SummaryOptions::new()
                .with_header_markers(header_markers)
                .with_numeric_markers(numeric_markers)
                .with_detection(policy.into())
                .with_preview_rows(preview_rows)
                .with_raw_fallback_rows(raw_rows);
            if let Some(row) = header_row {
                options = options.with_header_row((row - 1) as usize);
            }

            let selection = if all {
                SheetSelection::All
            } else {
                SheetSelection::Named(sheet)
            };

            summarize(&input, &selection, &options, &output)?;
        }

        Commands::Overview {
            input,
            compact_rows,
            output,
        } => {
            let style = if compact_rows {
                PreviewStyle::Compact
            } else {
                PreviewStyle::Table
            };
            let options = SummaryOptions::overview().with_preview_style(style);
            summarize(&input, &SheetSelection::All, &options, &output)?;
        }

        Commands::Inspect { input, output } => {
            let options = SummaryOptions::inspect();
            summarize(&input, &SheetSelection::All, &options, &output)?;
        }

        Commands::Sheets { input } => {
            let pb = create_spinner("Opening workbook...");
            let workbook = Workbook::open(&input);
            pb.finish_and_clear();

            let workbook = workbook?;
            println!("{} ({})", input.display().to_string().cyan().bold(), workbook.format());
            for (i, name) in workbook.sheet_names().iter().enumerate() {
                println!("{:>3}. {}", i + 1, name);
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

/// Write a summary report. Analysis failures are written into the report;
/// only a failing sink is an error here.
fn summarize(
    input: &Path,
    selection: &SheetSelection,
    options: &SummaryOptions,
    output: &OutputArgs,
) -> io::Result<()> {
    let format = output.output_format();

    match &output.output {
        Some(path) => {
            let pb = create_spinner("Analyzing workbook...");
            let file = File::create(path);
            let result = file.and_then(|file| {
                let mut writer = BufWriter::new(file);
                write_summary(input, selection, options, format, &mut writer)
            });
            pb.finish_and_clear();
            result?;

            println!(
                "{} Report written to {}",
                "✓".green().bold(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_summary(input, selection, options, format, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "sheetsum".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Structural summaries of spreadsheet workbooks");
    println!();
    println!("Supported formats: XLSX, XLSM");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
