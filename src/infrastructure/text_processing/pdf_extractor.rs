use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;
use tokio::io::AsyncReadExt;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::UploadedDocument;

use super::text_sanitizer::join_pages;

const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);
const PDF_MAGIC: &[u8] = b"%PDF-";
const HEADER_WINDOW: usize = 1024;

pub struct PdfExtractor {
    timeout: Duration,
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_EXTRACTION_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Real PDFs may carry junk before the header, so look at the first KiB.
    async fn check_header(path: &Path) -> Result<(), ExtractionError> {
        let file = tokio::fs::File::open(path).await.map_err(|e| {
            ExtractionError::EngineFailed(format!("failed to open uploaded PDF: {e}"))
        })?;

        let mut header = Vec::with_capacity(HEADER_WINDOW);
        file.take(HEADER_WINDOW as u64)
            .read_to_end(&mut header)
            .await
            .map_err(|e| ExtractionError::EngineFailed(format!("failed to read uploaded PDF: {e}")))?;

        if header.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC) {
            Ok(())
        } else {
            Err(ExtractionError::EngineFailed(
                "failed to parse PDF: missing %PDF header".to_string(),
            ))
        }
    }

    fn extract_pages(path: &Path) -> Result<Vec<String>, ExtractionError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| ExtractionError::EngineFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            ExtractionError::EngineFailed(format!("failed to read page count: {e}"))
        })?;

        collect_page_texts(page_count, |page_index| doc.extract_text(page_index))
    }
}

/// Extracts every page in order. The first unreadable page fails the whole document.
pub fn collect_page_texts<E: std::fmt::Display>(
    page_count: usize,
    mut extract_page: impl FnMut(usize) -> Result<String, E>,
) -> Result<Vec<String>, ExtractionError> {
    (0..page_count)
        .map(|page_index| {
            extract_page(page_index).map_err(|e| {
                ExtractionError::EngineFailed(format!(
                    "failed to extract page {}: {e}",
                    page_index + 1
                ))
            })
        })
        .collect()
}

#[async_trait]
impl TextExtractor for PdfExtractor {
    #[tracing::instrument(
        skip(self, document),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.original_filename,
        )
    )]
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, ExtractionError> {
        Self::check_header(&document.temporary_path).await?;

        let path = document.temporary_path.clone();
        let pages = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || Self::extract_pages(&path)),
        )
        .await
        .map_err(|_| {
            ExtractionError::EngineFailed(format!(
                "PDF extraction timed out after {}s",
                self.timeout.as_secs()
            ))
        })?
        .map_err(|e| ExtractionError::EngineFailed(format!("task join error: {e}")))??;

        let page_count = pages.len();
        let text = join_pages(pages);
        tracing::info!(page_count, chars = text.len(), "PDF text extraction complete");

        Ok(text)
    }
}
