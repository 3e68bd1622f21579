//! Rendering of a [`Translation`] as a terminal report or JSON.

use std::io::{self, Write};

use colored::Colorize;

use crate::amino_acid;
use crate::codon::CodonRole;
use crate::config::ReportConfig;
use crate::sequence;
use crate::translation::{Translation, TranslationRecord};

/// Width of one column in the amino acid names section.
const NAME_COLUMN_WIDTH: usize = 24;

/// Codons separated by spaces, with start codons green and stops red.
#[must_use]
pub fn highlight_codons(translation: &Translation) -> String {
    translation
        .records
        .iter()
        .map(|record| {
            let codon = record.codon.as_str();
            match record.role {
                CodonRole::Start => codon.green().to_string(),
                CodonRole::Stop => codon.red().to_string(),
                CodonRole::Normal => codon.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One breakdown line: `ATG → M (Methionine, Start)`, `GCC → A (Alanine)`, `TAA → Stop`.
#[must_use]
pub fn breakdown_line(record: &TranslationRecord) -> String {
    match record.role {
        CodonRole::Stop => format!("{} → {}", record.codon, record.symbol),
        CodonRole::Start => format!(
            "{} → {} ({}, {})",
            record.codon, record.symbol, record.full_name, record.role
        ),
        CodonRole::Normal => format!("{} → {} ({})", record.codon, record.symbol, record.full_name),
    }
}

/// `M → Methionine` lines for each protein letter, laid out in columns.
#[must_use]
pub fn name_grid(protein: &str, columns: usize) -> Vec<String> {
    let cells: Vec<String> = protein
        .chars()
        .map(|aa| {
            let name = amino_acid::full_name(aa).unwrap_or("Unknown");
            format!("{aa} → {name}")
        })
        .collect();

    cells
        .chunks(columns.max(1))
        .map(|row| {
            let line: String = row
                .iter()
                .map(|cell| format!("{cell:<width$}", width = NAME_COLUMN_WIDTH))
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title.bold().blue())
}

/// Writes the human-readable report.
pub fn render_text<W: Write>(
    translation: &Translation,
    config: &ReportConfig,
    out: &mut W,
) -> io::Result<()> {
    if translation.sequence.is_empty() {
        writeln!(
            out,
            "{}",
            "No valid protein sequence generated. Only A, T, G and C are allowed.".yellow()
        )?;
        return Ok(());
    }

    let cleaned = translation.sequence.len();
    let aligned = sequence::codon_aligned_len(cleaned);

    heading(out, "1. DNA Sequence")?;
    if translation.trailing_bases > 0 {
        writeln!(
            out,
            "{}",
            format!(
                "Sequence trimmed from {cleaned} bp to {aligned} bp to make it divisible by 3."
            )
            .yellow()
        )?;
    }
    writeln!(out, "Final sequence length: {aligned} bp")?;
    writeln!(out, "{}", translation.coding_sequence())?;

    if translation.is_empty() {
        writeln!(
            out,
            "{}",
            "No valid protein sequence generated. Please check the DNA sequence.".yellow()
        )?;
        return Ok(());
    }

    heading(out, "2. Translated Protein Sequence")?;
    writeln!(out, "{}", translation.protein)?;

    if config.show_breakdown {
        heading(out, "3. Codon Breakdown")?;
        for record in &translation.records {
            writeln!(out, "{}", breakdown_line(record))?;
        }
    }

    if config.highlight {
        heading(out, "4. Start and Stop Codons")?;
        writeln!(out, "{}", highlight_codons(translation))?;
    }

    heading(out, "5. Amino Acid Full Names")?;
    for line in name_grid(&translation.protein, config.name_columns) {
        writeln!(out, "{line}")?;
    }

    Ok(())
}

/// Writes the translation as pretty-printed JSON.
pub fn render_json<W: Write>(translation: &Translation, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, translation)?;
    writeln!(out)
}
