use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub text: String,
}

impl ExtractionResult {
    /// Returns `None` when nothing but whitespace was recognized.
    pub fn from_text(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            text: trimmed.to_string(),
        })
    }
}

/// Stable failure codes surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FailureReason {
    NoFileUploaded,
    UnsupportedFormat,
    EngineUnavailable,
    EngineFailed,
    EmptyOutput,
    StoreFailure,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoFileUploaded => "NoFileUploaded",
            Self::UnsupportedFormat => "UnsupportedFormat",
            Self::EngineUnavailable => "EngineUnavailable",
            Self::EngineFailed => "EngineFailed",
            Self::EmptyOutput => "EmptyOutput",
            Self::StoreFailure => "StoreFailure",
        }
    }

    /// Engine problems are configuration issues; the rest describe the input.
    pub fn is_configuration_problem(&self) -> bool {
        matches!(self, Self::EngineUnavailable | Self::StoreFailure)
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFailure {
    pub reason: FailureReason,
    pub detail: String,
}

impl ExtractionFailure {
    pub fn new(reason: FailureReason, detail: impl Into<String>) -> Self {
        Self {
            reason,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ExtractionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.reason, self.detail)
    }
}

impl std::error::Error for ExtractionFailure {}
