//! File batch commands
//!
//! Reads values from line-delimited or CSV input, runs the batch processor,
//! and writes one result per input value. Failed items become error marker
//! rows in the output rather than stopping the run.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand, ValueEnum};

use crate::batch::{process_batch_with, BatchMode, BatchOutcome};
use crate::cli::value::resolve_password;
use crate::crypto::KdfParams;
use crate::error::{SealboxError, SealboxResult};
use crate::export::{write_csv_columns, write_json, write_lines};
use crate::input::{read_csv_column, read_csv_columns, read_text_lines, ColumnData};

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Same shape as the input: lines for plain runs, CSV for column runs
    Auto,
    /// CSV with one column per processed input column
    Csv,
    /// JSON object mapping column names to result arrays
    Json,
}

/// File batch subcommands
#[derive(Subcommand, Debug)]
pub enum FileCommands {
    /// Seal every value read from a file
    Seal(FileArgs),

    /// Open every sealed value read from a file
    Open(FileArgs),
}

/// Arguments shared by the file subcommands
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Input file (.csv is parsed as CSV, anything else as lines)
    pub input: PathBuf,

    /// Process a named header column; repeat for several columns
    #[arg(short, long)]
    pub column: Vec<String>,

    /// Output file path (default: alongside the input, suffixed per mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "auto")]
    pub format: OutputFormat,
}

/// Handle `sealbox file` commands
pub fn handle_file_command(
    cmd: FileCommands,
    password: Option<String>,
    iterations: u32,
) -> SealboxResult<()> {
    let (mode, args) = match cmd {
        FileCommands::Seal(args) => (BatchMode::Seal, args),
        FileCommands::Open(args) => (BatchMode::Open, args),
    };
    let password = resolve_password(password, mode)?;
    let params = KdfParams::with_iterations(iterations);

    let is_csv = args
        .input
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let columnar = !args.column.is_empty();
    let columns: Vec<ColumnData> = if columnar {
        if !is_csv {
            return Err(SealboxError::Csv(
                "Column selection requires a .csv input file".to_string(),
            ));
        }
        read_csv_columns(&args.input, &args.column)?
    } else if is_csv {
        vec![ColumnData {
            name: "values".to_string(),
            values: read_csv_column(&args.input, 0)?,
        }]
    } else {
        vec![ColumnData {
            name: "values".to_string(),
            values: read_text_lines(&args.input)?,
        }]
    };

    let total: usize = columns.iter().map(|c| c.values.len()).sum();
    println!("Read {} values from {}", total, args.input.display());

    let mut failed = 0usize;
    let mut results: Vec<ColumnData> = Vec::with_capacity(columns.len());
    for column in &columns {
        let outcomes = process_batch_with(
            &column.values,
            password.as_str(),
            mode,
            &params,
            |done, total| {
                if done % 100 == 0 && done < total {
                    println!("  Processed: {}/{}", done, total);
                }
            },
        );

        for outcome in &outcomes {
            if let Err(e) = &outcome.result {
                failed += 1;
                eprintln!(
                    "Warning: item {} in column '{}': {}",
                    outcome.position, column.name, e
                );
            }
        }

        results.push(ColumnData {
            name: column.name.clone(),
            values: outcomes
                .into_iter()
                .map(BatchOutcome::into_output_text)
                .collect(),
        });
    }

    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input, mode));
    write_results(&output, &results, args.format, columnar)?;

    println!("Processed {} values ({} failed)", total, failed);
    println!("Results written to: {}", output.display());
    Ok(())
}

/// Derive the default output path: `data.csv` becomes `data_sealed.csv` or
/// `data_opened.csv` next to the input.
fn default_output_path(input: &Path, mode: BatchMode) -> PathBuf {
    let suffix = match mode {
        BatchMode::Seal => "sealed",
        BatchMode::Open => "opened",
    };
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_{}.{}", stem, suffix, ext),
        None => format!("{}_{}", stem, suffix),
    };
    input.with_file_name(name)
}

fn write_results(
    path: &Path,
    results: &[ColumnData],
    format: OutputFormat,
    columnar: bool,
) -> SealboxResult<()> {
    let file = File::create(path)
        .map_err(|e| SealboxError::Io(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Json => write_json(&mut writer, results),
        OutputFormat::Csv => write_csv_columns(&mut writer, results),
        OutputFormat::Auto => {
            if columnar {
                write_csv_columns(&mut writer, results)
            } else {
                match results.first() {
                    Some(column) => write_lines(&mut writer, &column.values),
                    None => Ok(()),
                }
            }
        }
    }
}
