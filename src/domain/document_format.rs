use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Png,
    Jpeg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionStrategy {
    Pdf,
    Ocr,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported file format: {0}")]
pub struct UnsupportedFormat(pub String);

impl DocumentFormat {
    /// Classifies a document by the lowercased extension of its original filename.
    pub fn from_filename(filename: &str) -> Result<Self, UnsupportedFormat> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| UnsupportedFormat(format!("'{}' has no extension", filename)))?;

        match extension.as_str() {
            "pdf" => Ok(Self::Pdf),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            other => Err(UnsupportedFormat(format!(".{}", other))),
        }
    }

    pub fn strategy(&self) -> ExtractionStrategy {
        match self {
            Self::Pdf => ExtractionStrategy::Pdf,
            Self::Png | Self::Jpeg => ExtractionStrategy::Ocr,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

impl ExtractionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Ocr => "ocr",
        }
    }
}
