// ============================================================
// Layer 3 - Corpus Language
// ============================================================
// The language tag handed to the segmenter. Parsing an unknown
// tag is the "unsupported tokenizer" failure.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::domain::error::PipelineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Tamil,
    English,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Language::Tamil   => "ta",
            Language::English => "en",
        }
    }
}

impl FromStr for Language {
    type Err = PipelineError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_lowercase().as_str() {
            "ta" | "tam" | "tamil"   => Ok(Language::Tamil),
            "en" | "eng" | "english" => Ok(Language::English),
            _ => Err(PipelineError::UnsupportedLanguage(tag.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
