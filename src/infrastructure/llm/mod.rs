mod gemini_client;

pub use gemini_client::{
    Candidate, CandidateContent, CandidatePart, GeminiClient, GenerateContentResponse,
};
