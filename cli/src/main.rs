mod error_formatter;
mod formatter;

use anyhow::{Context, Result};
use clap::Parser;
use entail::{Engine, ResourceLimits, Statement};
use formatter::{Formatter, OutputFormat};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "entail")]
#[command(about = "Does the statement follow from what we know?")]
#[command(
    long_about = "Entail checks whether a statement follows from a propositional knowledge base.\nThe rules and knowledge files together form the knowledge base, one clause per line.\nThe statement file holds a single clause. The verdict is one of: definitely true,\ndefinitely false, possibly true, possibly false, both true and false."
)]
#[command(version)]
struct Cli {
    /// Rules file, one clause per line
    #[arg(value_name = "RULES")]
    rules: PathBuf,
    /// Additional knowledge file, appended to the rules
    #[arg(value_name = "KNOWLEDGE")]
    knowledge: PathBuf,
    /// Statement file holding exactly one clause
    #[arg(value_name = "STATEMENT")]
    statement: PathBuf,
    /// Write the verdict to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Show the knowledge base, the statement and model counts (-vv for debug logs)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
    /// Refuse to enumerate when more symbols than this are free
    #[arg(long = "max-free-symbols", value_name = "N")]
    max_free_symbols: Option<usize>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        if let Some(logic_err) = e.downcast_ref::<entail::LogicError>() {
            eprintln!("{}", error_formatter::format_error(logic_err));
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "entail=warn",
        1 => "entail=info",
        _ => "entail=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let limits = ResourceLimits {
        max_free_symbols: cli.max_free_symbols,
        ..ResourceLimits::default()
    };
    let mut engine = Engine::with_limits(limits);

    load_source(&mut engine, &cli.rules)?;
    load_source(&mut engine, &cli.knowledge)?;
    let kb = engine.validated()?;
    info!(clauses = kb.len(), seeded = kb.seed().len(), "knowledge base ready");

    let (statement_text, statement_id) = read_source(&cli.statement)?;
    info!(source = %statement_id, "loading statement");
    let statement = Statement::from_source(&statement_text, &statement_id, engine.limits())?;

    let entailment = engine.entail(&kb, &statement)?;

    let formatter = Formatter::new(cli.format, cli.verbose > 0);
    if cli.verbose > 0 && cli.format == OutputFormat::Text {
        eprint!("{}", formatter.format_inputs(&kb, &statement));
        eprint!("{}", formatter.format_counts(&entailment));
    }
    let rendered = formatter.format_entailment(&kb, &statement, &entailment)?;

    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write verdict to {}", path.display()))?,
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Read a source file, returning its text and the id used in diagnostics
fn read_source(path: &Path) -> Result<(String, String)> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok((text, path.to_string_lossy().to_string()))
}

fn load_source(engine: &mut Engine, path: &Path) -> Result<()> {
    let (text, source_id) = read_source(path)?;
    info!(source = %source_id, "loading clauses");
    engine.add_source(&text, &source_id)?;
    Ok(())
}
