//! Codons and the standard genetic code.

use std::fmt;

use serde::Serialize;

use crate::error::Error;

/// Three bases over A, C, G and T.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon([u8; 3]);

pub(crate) fn is_base(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T')
}

// Only reachable through `Codon`, whose bases are already validated.
fn base_to_index(b: u8) -> usize {
    match b {
        b'A' => 0,
        b'C' => 1,
        b'G' => 2,
        _ => 3,
    }
}

impl Codon {
    pub const START: Self = Self(*b"ATG");
    pub const STOPS: [Self; 3] = [Self(*b"TAA"), Self(*b"TAG"), Self(*b"TGA")];

    /// Builds a codon from exactly three uppercase bases.
    pub fn new(bases: &[u8]) -> Result<Self, Error> {
        match bases {
            &[a, b, c] if is_base(a) && is_base(b) && is_base(c) => Ok(Self([a, b, c])),
            _ => Err(Error::InvalidCodon(
                String::from_utf8_lossy(bases).into_owned(),
            )),
        }
    }

    /// Builds a codon from a 3-byte window of sanitized sequence.
    pub(crate) fn from_clean(window: &[u8]) -> Self {
        debug_assert!(window.len() == 3 && window.iter().all(|&b| is_base(b)));
        Self([window[0], window[1], window[2]])
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        // Bases are ASCII by construction.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// 6-bit encoding: first*16 + second*4 + third, with A=0, C=1, G=2, T=3.
    #[must_use]
    pub fn index(&self) -> usize {
        let [a, b, c] = self.0;
        base_to_index(a) * 16 + base_to_index(b) * 4 + base_to_index(c)
    }

    /// Every codon in table order (AAA, AAC, ..., TTT).
    pub fn all() -> impl Iterator<Item = Self> {
        const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];
        (0..64).map(|i| Self([BASES[i / 16], BASES[(i / 4) % 4], BASES[i % 4]]))
    }
}

impl TryFrom<&str> for Codon {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.as_bytes())
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Codon {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// How a codon is highlighted in the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodonRole {
    Start,
    Stop,
    Normal,
}

impl CodonRole {
    #[must_use]
    pub fn of(codon: Codon) -> Self {
        if codon == Codon::START {
            Self::Start
        } else if Codon::STOPS.contains(&codon) {
            Self::Stop
        } else {
            Self::Normal
        }
    }
}

impl fmt::Display for CodonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::Stop => write!(f, "Stop"),
            Self::Normal => write!(f, "Normal"),
        }
    }
}

/// The translated symbol of one codon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Residue {
    AminoAcid(char),
    Stop,
}

impl Residue {
    /// Single-letter code, or `None` for a stop.
    #[must_use]
    pub fn letter(self) -> Option<char> {
        match self {
            Self::AminoAcid(c) => Some(c),
            Self::Stop => None,
        }
    }

    #[must_use]
    pub fn is_stop(self) -> bool {
        self == Self::Stop
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AminoAcid(c) => write!(f, "{c}"),
            Self::Stop => write!(f, "Stop"),
        }
    }
}

impl Serialize for Residue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Lookup table for translating codons to amino acids.
///
/// Indexed by [`Codon::index`]. Stops are stored as `*`.
pub struct GeneticCode {
    table: [u8; 64],
}

/// Standard genetic code (NCBI translation table 1).
#[rustfmt::skip]
pub static STANDARD: GeneticCode = GeneticCode {
    table: [
        b'K', b'N', b'K', b'N',  // AA*: AAA=K, AAC=N, AAG=K, AAT=N
        b'T', b'T', b'T', b'T',  // AC*
        b'R', b'S', b'R', b'S',  // AG*: AGA=R, AGC=S, AGG=R, AGT=S
        b'I', b'I', b'M', b'I',  // AT*: ATG=M
        b'Q', b'H', b'Q', b'H',  // CA*
        b'P', b'P', b'P', b'P',  // CC*
        b'R', b'R', b'R', b'R',  // CG*
        b'L', b'L', b'L', b'L',  // CT*
        b'E', b'D', b'E', b'D',  // GA*
        b'A', b'A', b'A', b'A',  // GC*
        b'G', b'G', b'G', b'G',  // GG*
        b'V', b'V', b'V', b'V',  // GT*
        b'*', b'Y', b'*', b'Y',  // TA*: TAA=*, TAC=Y, TAG=*, TAT=Y
        b'S', b'S', b'S', b'S',  // TC*
        b'*', b'C', b'W', b'C',  // TG*: TGA=*, TGC=C, TGG=W, TGT=C
        b'L', b'F', b'L', b'F',  // TT*
    ],
};

impl GeneticCode {
    /// Translate a single codon.
    #[must_use]
    pub fn residue(&self, codon: Codon) -> Residue {
        match self.table[codon.index()] {
            b'*' => Residue::Stop,
            aa => Residue::AminoAcid(char::from(aa)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codon(s: &str) -> Codon {
        Codon::try_from(s).unwrap()
    }

    #[test]
    fn start_codon() {
        assert_eq!(STANDARD.residue(Codon::START), Residue::AminoAcid('M'));
        assert_eq!(CodonRole::of(Codon::START), CodonRole::Start);
    }

    #[test]
    fn stop_codons() {
        for s in ["TAA", "TAG", "TGA"] {
            assert_eq!(STANDARD.residue(codon(s)), Residue::Stop);
            assert_eq!(CodonRole::of(codon(s)), CodonRole::Stop);
        }
    }

    #[test]
    fn normal_codons() {
        assert_eq!(STANDARD.residue(codon("GCC")), Residue::AminoAcid('A'));
        assert_eq!(STANDARD.residue(codon("TGG")), Residue::AminoAcid('W'));
        assert_eq!(STANDARD.residue(codon("TTT")), Residue::AminoAcid('F'));
        assert_eq!(CodonRole::of(codon("GCC")), CodonRole::Normal);
        // Alternative start codons are not treated as starts.
        assert_eq!(CodonRole::of(codon("GTG")), CodonRole::Normal);
    }

    #[test]
    fn table_is_total() {
        let residues: Vec<Residue> = Codon::all().map(|c| STANDARD.residue(c)).collect();
        assert_eq!(residues.len(), 64);
        assert_eq!(residues.iter().filter(|r| r.is_stop()).count(), 3);

        let mut letters: Vec<char> = residues.iter().filter_map(|r| r.letter()).collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 20);
    }

    #[test]
    fn index_matches_table_order() {
        for (i, c) in Codon::all().enumerate() {
            assert_eq!(c.index(), i);
        }
        assert_eq!(codon("TGA").index(), 56);
    }

    #[test]
    fn invalid_codons_rejected() {
        assert!(Codon::try_from("AT").is_err());
        assert!(Codon::try_from("ATGC").is_err());
        assert!(Codon::try_from("NNN").is_err());
        assert!(Codon::try_from("atg").is_err());
    }

    #[test]
    fn residue_display() {
        assert_eq!(Residue::AminoAcid('M').to_string(), "M");
        assert_eq!(Residue::Stop.to_string(), "Stop");
    }
}
