pub mod client;
pub mod prompts;
pub mod validation;

pub use client::{GeminiClient, GeminiConfig};
pub use prompts::{
    build_reply_prompt, build_summary_prompt, flatten_entries, summary_response_schema,
    SUMMARY_INSTRUCTION,
};
pub use validation::parse_summary_payload;
