use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use dna_translator::cli;
use dna_translator::config::ReportConfig;
use dna_translator::input::{self, strip_fasta_headers};
use dna_translator::report;
use dna_translator::translation::translate;

#[derive(Parser)]
#[command(
    name = "translate_dna",
    about = "Translate a DNA sequence into protein using the standard genetic code"
)]
struct Cli {
    /// Sequence file (.txt, .fasta, .fa, .fna, optionally .gz)
    #[arg(short = 'i', long = "input", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Sequence text given inline; stdin is read when neither this nor --input is set
    #[arg(short = 't', long = "text")]
    text: Option<String>,

    /// Path to the JSON report configuration file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print the translation as JSON instead of the text report
    #[arg(long = "json")]
    json: bool,

    /// Omit the highlighted start/stop codon section
    #[arg(long = "no-highlight")]
    no_highlight: bool,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let cli_args = Cli::parse();

    cli::banner("DNA to Protein");

    // ── Configuration ────────────────────────────────────
    cli::section("Configuration");

    let mut config = match &cli_args.config {
        Some(path) => {
            cli::kv("Config", &path.display().to_string());
            ReportConfig::from_file(path)?
        }
        None => ReportConfig::default(),
    };
    if cli_args.no_highlight {
        config.highlight = false;
    }
    cli::kv("Output", if cli_args.json { "json" } else { "text" });

    eprintln!();

    // ── Input ────────────────────────────────────────────
    cli::section("Input");

    let raw = if let Some(path) = &cli_args.input {
        cli::kv("File", &path.display().to_string());
        let content = input::read_path(path)
            .with_context(|| format!("failed to read sequence file: {}", path.display()))?;
        strip_fasta_headers(&content)
    } else if let Some(text) = &cli_args.text {
        cli::kv("Source", "inline text");
        text.trim().to_string()
    } else {
        cli::kv("Source", "stdin");
        input::read_text(io::stdin().lock()).context("failed to read stdin")?
    };

    let translation = translate(&raw);

    cli::print_input(&raw, &translation);

    eprintln!();

    // ── Translation ──────────────────────────────────────
    cli::section("Translation");
    cli::print_translation(&translation);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli_args.json {
        report::render_json(&translation, &mut out)?;
    } else {
        report::render_text(&translation, &config, &mut out)?;
    }
    out.flush()?;

    cli::print_summary(start);
    Ok(())
}
