//! Codon-by-codon translation of a cleaned sequence.

use serde::Serialize;

use crate::amino_acid::{self, STOP_NAME};
use crate::codon::{Codon, CodonRole, Residue, STANDARD, is_base};
use crate::error::Error;
use crate::sequence;

/// One translated codon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub codon: Codon,
    pub symbol: Residue,
    pub full_name: &'static str,
    pub role: CodonRole,
}

impl TranslationRecord {
    fn new(codon: Codon) -> Self {
        let symbol = STANDARD.residue(codon);
        let full_name = match symbol {
            Residue::AminoAcid(letter) => amino_acid::full_name(letter).unwrap_or("Unknown"),
            Residue::Stop => STOP_NAME,
        };
        Self {
            codon,
            symbol,
            full_name,
            role: CodonRole::of(codon),
        }
    }
}

/// Result of translating one input.
///
/// Stop codons are annotated in `records` but never truncate translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    /// The cleaned sequence, including any trailing partial codon.
    pub sequence: String,
    pub protein: String,
    /// Bases after the last complete codon (0 to 2), not translated.
    pub trailing_bases: usize,
    pub records: Vec<TranslationRecord>,
}

impl Translation {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The part of the sequence that was translated.
    #[must_use]
    pub fn coding_sequence(&self) -> &str {
        self.sequence.get(..self.records.len() * 3).unwrap_or_default()
    }

    #[must_use]
    pub fn start_count(&self) -> usize {
        self.count_role(CodonRole::Start)
    }

    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.count_role(CodonRole::Stop)
    }

    fn count_role(&self, role: CodonRole) -> usize {
        self.records.iter().filter(|r| r.role == role).count()
    }
}

/// Sanitizes raw text and translates it.
#[must_use]
pub fn translate(raw: &str) -> Translation {
    let cleaned = sequence::sanitize(raw);
    let codons = cleaned
        .as_bytes()
        .chunks_exact(3)
        .map(Codon::from_clean)
        .collect();
    assemble(cleaned, codons)
}

/// Translates an already-cleaned sequence in frame 0.
///
/// Every byte must be one of A, C, G or T, including the trailing partial
/// codon; anything else is reported as [`Error::InvalidCodon`].
pub fn translate_sequence(cleaned: &str) -> Result<Translation, Error> {
    let windows = cleaned.as_bytes().chunks_exact(3);
    let remainder = windows.remainder();
    if !remainder.iter().all(|&b| is_base(b)) {
        return Err(Error::InvalidCodon(
            String::from_utf8_lossy(remainder).into_owned(),
        ));
    }
    let codons = windows.map(Codon::new).collect::<Result<Vec<_>, _>>()?;
    Ok(assemble(cleaned.to_string(), codons))
}

fn assemble(sequence: String, codons: Vec<Codon>) -> Translation {
    let records: Vec<TranslationRecord> =
        codons.into_iter().map(TranslationRecord::new).collect();
    let protein = records.iter().filter_map(|r| r.symbol.letter()).collect();

    Translation {
        trailing_bases: sequence.len() % 3,
        sequence,
        protein,
        records,
    }
}
