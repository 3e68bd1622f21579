//! Cleaning of raw nucleotide text.

/// Strips whitespace, uppercases, and keeps only A, C, G and T.
///
/// Any other character is dropped without error.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| matches!(c, 'A' | 'C' | 'G' | 'T'))
        .collect()
}

/// Largest multiple of 3 not exceeding `len`.
#[must_use]
pub fn codon_aligned_len(len: usize) -> usize {
    len - len % 3
}
