//! DNA to protein translation with a codon-by-codon breakdown.

pub mod error;

pub mod amino_acid;
pub mod cli;
pub mod codon;
pub mod config;
pub mod input;
pub mod report;
pub mod sequence;
pub mod translation;
