//! `gridtable` - render CSV input as a bordered terminal table.
//!
//! ```text
//! gridtable data.csv
//! cat data.csv | gridtable --width 60 --config table.yaml
//! ```
//!
//! The first CSV record is the header. Records may have any number of
//! fields; short records get empty cells and long ones are cut to the header.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use gridtable::{terminal, Table, TableConfig};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(name = "gridtable", version, about = "Render CSV as a bordered text table")]
struct Cli {
    /// CSV file to read; stdin when omitted
    file: Option<PathBuf>,

    /// Field delimiter (a single ASCII character)
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Terminal width to fit; 0 renders at natural width
    #[arg(short, long)]
    width: Option<i32>,

    /// YAML file with border and column styles
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", delimiter);
    }
    Ok(delimiter as u8)
}

/// Builds a table from CSV text whose first record is the header.
fn read_table<R: Read>(reader: R, delimiter: u8) -> Result<Table> {
    let mut records = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader)
        .into_records();

    let header = match records.next() {
        Some(record) => record.context("failed to read header record")?,
        None => bail!("input has no header record"),
    };
    let mut table = Table::new(header.iter()).context("invalid header")?;

    let mut count = 0;
    for record in records {
        let record = record.with_context(|| format!("failed to read record {}", count + 2))?;
        table.add_row(record.iter());
        count += 1;
    }
    log::info!("read {} columns and {} rows", table.num_columns(), count);
    Ok(table)
}

fn run(cli: Cli) -> Result<()> {
    let delimiter = delimiter_byte(cli.delimiter)?;
    let mut table = match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_table(file, delimiter)?
        }
        None => read_table(io::stdin().lock(), delimiter)?,
    };

    if let Some(path) = &cli.config {
        let config = TableConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        table.apply_config(&config)?;
    }

    let width = cli.width.unwrap_or_else(terminal::detect_width);
    log::debug!("rendering at width {}", width);
    let mut stdout = io::stdout().lock();
    table.write_to(&mut stdout, width)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    TermLogger::init(
        level_for(cli.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    run(cli)
}
