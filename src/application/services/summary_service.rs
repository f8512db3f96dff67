use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde_json::Value;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{Summary, SummaryLength};

const MIN_TEXT_CHARS: usize = 10;
const FALLBACK_SUMMARY: &str = "Summary could not be generated.";
const FALLBACK_KEY_POINT: &str = "Key points could not be generated.";
const UNPARSEABLE_SUMMARY: &str = "An error occurred while formatting the summary.";
const RETRY_HINT: &str = "Please try again with a different document or length setting.";

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?[ \t]*\r?\n?|\r?\n?```").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub struct SummaryService {
    llm_client: Arc<dyn LlmClient>,
}

impl SummaryService {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    pub async fn summarize(
        &self,
        text: Option<&str>,
        length: SummaryLength,
    ) -> Result<Summary, SummaryError> {
        let text = text.filter(|t| !t.is_empty()).ok_or(SummaryError::NoText)?;
        if text.chars().count() < MIN_TEXT_CHARS {
            return Err(SummaryError::TooShort);
        }

        let clean_text = WHITESPACE_RUN.replace_all(text, " ");
        let prompt = build_prompt(clean_text.trim(), length);

        tracing::debug!(
            chars = clean_text.len(),
            length = length.sentence_range(),
            "Requesting summary"
        );

        let raw = self
            .llm_client
            .complete(&prompt)
            .await
            .map_err(SummaryError::Completion)?;

        Ok(parse_summary_response(&raw))
    }

    /// Body returned alongside a failed summary request.
    pub fn unavailable() -> Summary {
        Summary {
            summary: "An error occurred while generating the summary.".to_string(),
            key_points: vec![RETRY_HINT.to_string()],
        }
    }
}

fn build_prompt(text: &str, length: SummaryLength) -> String {
    format!(
        r#"Analyze the following text and respond ONLY with a JSON object in this exact format:
{{
  "summary": "your summary here in {}",
  "keyPoints": ["point 1", "point 2", "point 3"]
}}

Text to analyze:
{}"#,
        length.sentence_range(),
        text
    )
}

/// Turns model output into a [`Summary`], tolerating code fences and partial objects.
pub fn parse_summary_response(raw: &str) -> Summary {
    let unfenced = CODE_FENCE.replace_all(raw.trim(), "");
    let candidate = strip_wrapping_quote(unfenced.trim());

    let value: Value = match serde_json::from_str(candidate) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "Model response is not valid JSON");
            return Summary {
                summary: UNPARSEABLE_SUMMARY.to_string(),
                key_points: vec![RETRY_HINT.to_string()],
            };
        }
    };

    let summary = value
        .get("summary")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string);

    let key_points = value.get("keyPoints").and_then(Value::as_array).map(|points| {
        points
            .iter()
            .map(|p| p.as_str().map(str::to_string).unwrap_or_else(|| p.to_string()))
            .collect::<Vec<_>>()
    });

    if summary.is_none() || key_points.is_none() {
        tracing::warn!("Model response is missing summary fields");
    }

    Summary {
        summary: summary.unwrap_or_else(|| FALLBACK_SUMMARY.to_string()),
        key_points: key_points.unwrap_or_else(|| {
            vec![
                value
                    .get("text")
                    .and_then(Value::as_str)
                    .unwrap_or(FALLBACK_KEY_POINT)
                    .to_string(),
            ]
        }),
    }
}

fn strip_wrapping_quote(s: &str) -> &str {
    const QUOTES: &[char] = &['\'', '"', '`'];
    let s = s.strip_prefix(QUOTES).unwrap_or(s);
    s.strip_suffix(QUOTES).unwrap_or(s)
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("No text provided")]
    NoText,
    #[error("Text is too short for summarization")]
    TooShort,
    #[error("Failed to generate summary: {0}")]
    Completion(#[from] LlmClientError),
}
