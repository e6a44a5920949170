pub mod error;
pub mod io;
pub mod llm;
pub mod mention;
pub mod models;
pub mod orchestrator;
pub mod summarizer;

pub use error::{ApiError, ResponderError, SummarizerError};
pub use io::{load_catalog_file, write_transcript_json, MinutesDocument};
pub use llm::{GeminiClient, GeminiConfig};
pub use mention::resolve_mention;
pub use models::{
    ActiveSet, MeetingSummary, Persona, PersonaCatalog, PersonaId, Speaker, Transcript,
    TranscriptEntry,
};
pub use orchestrator::{compute_order, run_turn, Responder, TurnResult, FALLBACK_REPLY};
pub use summarizer::{request_summary, Summarizer};
