pub mod llm;
pub mod observability;
pub mod ocr;
pub mod storage;
pub mod text_processing;
