use crate::domain::model::LotteryResult;
use crate::utils::error::{LotteryError, Result};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const REPORT_BASENAME: &str = "lottery-results";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Csv,
    Json,
}

impl ExportFormat {
    pub const NAMES: [&'static str; 3] = ["txt", "csv", "json"];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn render(&self, result: &LotteryResult) -> Result<String> {
        match self {
            ExportFormat::Text => Ok(render_text(result)),
            ExportFormat::Csv => render_csv(result),
            ExportFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = LotteryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(ExportFormat::Text),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(LotteryError::InvalidConfigValueError {
                field: "output.formats".to_string(),
                value: other.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    Self::NAMES.join(", ")
                ),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Human-readable report listing every step needed to verify the draw by hand.
pub fn render_text(result: &LotteryResult) -> String {
    let mut lines = vec![
        "Lottery Results".to_string(),
        "=".repeat(30),
        format!(
            "Winner: {} (position #{})",
            result.winner(),
            result.winning_position()
        ),
        String::new(),
        "Calculation:".to_string(),
        format!("1. Shuffled {} names", result.total_entrants()),
        format!(
            "2. Hex seed {} converted to decimal: {}",
            result.seed(),
            result.decimal_value()
        ),
        format!(
            "3. Winning position: ({} % {}) + 1 = {}",
            result.decimal_value(),
            result.total_entrants(),
            result.winning_position()
        ),
        format!(
            "4. Name at position {}: {}",
            result.winning_position(),
            result.winner()
        ),
        String::new(),
        "Shuffled names:".to_string(),
    ];

    for entrant in result.shuffled_entrants() {
        let marker = if entrant.position == result.winning_position() {
            " (winner)"
        } else {
            ""
        };
        lines.push(format!("{}. {}{}", entrant.position, entrant.name, marker));
    }

    lines.join("\n")
}

#[derive(Serialize)]
struct CsvRow<'a> {
    position: usize,
    name: &'a str,
    winner: bool,
}

pub fn render_csv(result: &LotteryResult) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for entrant in result.shuffled_entrants() {
        writer.serialize(CsvRow {
            position: entrant.position,
            name: &entrant.name,
            winner: entrant.position == result.winning_position(),
        })?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| LotteryError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes `lottery-results.<ext>` for each format into `dir`, returning the paths written.
pub fn write_exports(
    dir: impl AsRef<Path>,
    result: &LotteryResult,
    formats: &[ExportFormat],
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(formats.len());
    for format in formats {
        let path = dir.join(format!("{}.{}", REPORT_BASENAME, format.extension()));
        fs::write(&path, format.render(result)?)?;
        tracing::info!("📁 Exported {} report to {}", format, path.display());
        written.push(path);
    }
    Ok(written)
}
