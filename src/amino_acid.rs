//! Full names for single-letter amino acid codes.

/// The 20 standard amino acids, by single-letter code.
static AMINO_ACID_NAMES: [(char, &str); 20] = [
    ('A', "Alanine"),
    ('R', "Arginine"),
    ('N', "Asparagine"),
    ('D', "Aspartic acid"),
    ('C', "Cysteine"),
    ('E', "Glutamic acid"),
    ('Q', "Glutamine"),
    ('G', "Glycine"),
    ('H', "Histidine"),
    ('I', "Isoleucine"),
    ('L', "Leucine"),
    ('K', "Lysine"),
    ('M', "Methionine"),
    ('F', "Phenylalanine"),
    ('P', "Proline"),
    ('S', "Serine"),
    ('T', "Threonine"),
    ('W', "Tryptophan"),
    ('Y', "Tyrosine"),
    ('V', "Valine"),
];

/// Name shown for stop codons.
pub const STOP_NAME: &str = "Stop";

/// Returns the full name for a single-letter code, if it is one of the 20.
#[must_use]
pub fn full_name(letter: char) -> Option<&'static str> {
    AMINO_ACID_NAMES
        .iter()
        .find(|(code, _)| *code == letter)
        .map(|(_, name)| *name)
}
