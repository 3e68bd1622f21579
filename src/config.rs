use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

const MAX_NAME_COLUMNS: usize = 6;

/// Display options for the text report. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Print the highlighted start/stop codon section.
    pub highlight: bool,
    /// Columns used for the amino acid full names section.
    pub name_columns: usize,
    /// Print the per-codon breakdown section.
    pub show_breakdown: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            highlight: true,
            name_columns: 2,
            show_breakdown: true,
        }
    }
}

impl ReportConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("failed to load config file: {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.name_columns == 0 || self.name_columns > MAX_NAME_COLUMNS {
            bail!(
                "invalid nameColumns: expected 1 to {MAX_NAME_COLUMNS}, got {}",
                self.name_columns
            );
        }
        Ok(())
    }
}
