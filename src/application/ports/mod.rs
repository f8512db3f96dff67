mod llm_client;
mod staging_store;
mod text_extractor;
mod text_recognizer;

pub use llm_client::{LlmClient, LlmClientError};
pub use staging_store::{StagingStore, StagingStoreError};
pub use text_extractor::{ExtractionError, TextExtractor};
pub use text_recognizer::{EngineProbe, RecognitionError, RecognitionProfile, TextRecognizer};
