// ============================================================
// DIFF TYPES
// ============================================================

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::AppError;

/// Unit granularity a diff is computed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// Pick a granularity from text size heuristics
    Auto,
    Character,
    Word,
    Line,
    Sentence,
}

impl Default for DiffMode {
    fn default() -> Self {
        DiffMode::Auto
    }
}

impl DiffMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffMode::Auto => "auto",
            DiffMode::Character => "character",
            DiffMode::Word => "word",
            DiffMode::Line => "line",
            DiffMode::Sentence => "sentence",
        }
    }
}

impl std::fmt::Display for DiffMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiffMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(DiffMode::Auto),
            "character" | "char" | "chars" => Ok(DiffMode::Character),
            "word" | "words" => Ok(DiffMode::Word),
            "line" | "lines" => Ok(DiffMode::Line),
            "sentence" | "sentences" => Ok(DiffMode::Sentence),
            other => Err(AppError::ValidationError(format!(
                "Unknown diff mode '{}'. Expected one of: auto, character, word, line, sentence",
                other
            ))),
        }
    }
}

/// One run of the diff output. Unchanged parts have both flags false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffPart {
    pub value: String,
    pub added: bool,
    pub removed: bool,
}

impl DiffPart {
    pub fn unchanged(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            added: false,
            removed: false,
        }
    }

    pub fn added(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            added: true,
            removed: false,
        }
    }

    pub fn removed(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            added: false,
            removed: true,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        !self.added && !self.removed
    }
}

/// Lengths (UTF-16 code units) of added, removed and unchanged content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl DiffStats {
    pub fn from_parts(parts: &[DiffPart]) -> Self {
        parts.iter().fold(Self::default(), |mut stats, part| {
            let len = part.value.encode_utf16().count();
            if part.is_unchanged() {
                stats.unchanged += len;
            } else if part.added {
                stats.added += len;
            } else {
                stats.removed += len;
            }
            stats
        })
    }

    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.removed > 0
    }
}

/// Full diff outcome handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffOutcome {
    /// Mode that was asked for
    pub requested_mode: DiffMode,
    /// Granularity actually used (never `Auto`)
    pub mode: DiffMode,
    pub parts: Vec<DiffPart>,
    pub stats: DiffStats,
}
