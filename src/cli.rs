//! Status output on stderr for the translator binary.

use std::time::{Duration, Instant};

use colored::Colorize;

use crate::translation::Translation;

pub fn banner(subtitle: &str) {
    eprintln!();
    eprintln!("{} {}", "DNA Translator".bold().cyan(), subtitle.dimmed());
    eprintln!();
}

pub fn section(title: &str) {
    eprintln!("{} {}", title.bold().blue(), "─".repeat(40).dimmed());
}

pub fn kv(key: &str, value: &str) {
    eprintln!("  {:<16} {}", key.dimmed(), value);
}

pub fn success(msg: &str) {
    eprintln!("  {} {}", "✓".green().bold(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("  {} {}", "⚠".yellow(), msg.yellow());
}

/// Key/value rows describing how much of the input was usable.
#[must_use]
pub fn input_stats(raw: &str, translation: &Translation) -> Vec<(&'static str, String)> {
    let non_ws = raw.chars().filter(|c| !c.is_whitespace()).count();
    vec![
        ("Raw length", format!("{} chars", raw.chars().count())),
        ("Clean length", format!("{} bp", translation.sequence.len())),
        ("Dropped", format!("{} chars", non_ws.saturating_sub(translation.sequence.len()))),
    ]
}

/// Warning for input that leaves nothing, or a partial codon, to translate.
#[must_use]
pub fn input_warning(translation: &Translation) -> Option<String> {
    if translation.sequence.is_empty() {
        Some("no A, T, G or C bases found in input".to_string())
    } else if translation.trailing_bases > 0 {
        Some(format!(
            "{} trailing bases do not form a complete codon",
            translation.trailing_bases
        ))
    } else {
        None
    }
}

/// Key/value rows summarising a translation.
#[must_use]
pub fn translation_stats(translation: &Translation) -> Vec<(&'static str, String)> {
    vec![
        ("Codons", translation.records.len().to_string()),
        ("Protein length", format!("{} aa", translation.protein.len())),
        ("Start codons", translation.start_count().to_string()),
        ("Stop codons", translation.stop_count().to_string()),
    ]
}

pub fn print_input(raw: &str, translation: &Translation) {
    for (key, value) in input_stats(raw, translation) {
        kv(key, &value);
    }
    if let Some(msg) = input_warning(translation) {
        warning(&msg);
    }
}

pub fn print_translation(translation: &Translation) {
    for (key, value) in translation_stats(translation) {
        kv(key, &value);
    }
    if !translation.is_empty() {
        success(&format!(
            "translated {} codons",
            translation.records.len().to_string().bold()
        ));
    }
}

/// Formats a duration as seconds with millisecond precision.
#[must_use]
pub fn format_elapsed(d: Duration) -> String {
    format!("{}.{:03} s", d.as_secs(), d.subsec_millis())
}

pub fn print_summary(start: Instant) {
    eprintln!();
    eprintln!(
        "{}  {}",
        "Time".dimmed(),
        format_elapsed(start.elapsed()).bold()
    );
    eprintln!();
}
