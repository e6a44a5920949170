use crate::models::{Transcript, TranscriptEntry};

/// Fixed instruction for structured minutes generation
pub const SUMMARY_INSTRUCTION: &str = "You are a professional meeting secretary. \
Analyze the following meeting transcript and generate a structured set of Meeting Minutes \
and a Thought Process Organization.

1. Extract the main topic.
2. List key points as formal meeting minutes.
3. Extract action items with owners.
4. Create a \"Communication Thought Process\" visualization (mapped to 'decisionTree') that \
shows the logical flow of the discussion, from the initial problem to the final solution, \
highlighting how different perspectives contributed.";

/// Flatten entries into "Name: text" lines, in conversation order
pub fn flatten_entries(entries: &[TranscriptEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}: {}", e.speaker_name, e.content))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Build the prompt for one persona's reply
pub fn build_reply_prompt(transcript: &Transcript, utterance: &str) -> String {
    let context = flatten_entries(transcript.entries());

    format!(
        "Context of the meeting so far:\n{}\n\n\
         User's new input: {}\n\n\
         Please respond to the User's input while considering the meeting context.\n\
         Keep your response concise (under 200 words) unless detailed technical advice is needed.",
        context, utterance
    )
}

/// Build the prompt for minutes generation
pub fn build_summary_prompt(entries: &[TranscriptEntry]) -> String {
    format!(
        "{}\n\nTranscript:\n{}",
        SUMMARY_INSTRUCTION,
        flatten_entries(entries)
    )
}

/// Response schema constraining the summarizer's JSON output
///
/// Mirrors [`crate::models::MeetingSummary`]; `actionItems` is optional, the
/// rest is required.
pub fn summary_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "topic": {
                "type": "STRING",
                "description": "Main topic of discussion"
            },
            "keyPoints": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "List of key arguments or points made (Meeting Minutes style)"
            },
            "actionItems": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "task": {"type": "STRING"},
                        "owner": {"type": "STRING"},
                        "status": {"type": "STRING", "enum": ["Pending", "InProgress", "Done"]}
                    },
                    "required": ["task", "owner", "status"]
                }
            },
            "conclusion": {
                "type": "STRING",
                "description": "Final consensus or summary"
            },
            "decisionTree": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "step": {
                            "type": "STRING",
                            "description": "Phase or key question in the thought process"
                        },
                        "options": {
                            "type": "ARRAY",
                            "items": {"type": "STRING"},
                            "description": "Key considerations, arguments, or options discussed at this phase"
                        }
                    },
                    "required": ["step", "options"]
                },
                "description": "A chronological organization of the communication thought process and decision logic."
            }
        },
        "required": ["topic", "keyPoints", "conclusion", "decisionTree"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Speaker, TranscriptEntry};

    #[test]
    fn test_flatten_uses_display_names() {
        let entries = vec![
            TranscriptEntry::user("hello"),
            TranscriptEntry::new(Speaker::Persona("tom".to_string()), "Tom", "hi there"),
        ];
        assert_eq!(flatten_entries(&entries), "You: hello\nTom: hi there");
    }

    #[test]
    fn test_reply_prompt_contains_context_and_input() {
        let mut transcript = Transcript::new();
        transcript.append(TranscriptEntry::user("we need a plan"));

        let prompt = build_reply_prompt(&transcript, "any ideas?");
        assert!(prompt.contains("You: we need a plan"));
        assert!(prompt.contains("User's new input: any ideas?"));
    }

    #[test]
    fn test_schema_requires_core_fields() {
        let schema = summary_response_schema();
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "topic"));
        assert!(required.iter().any(|v| v == "conclusion"));
    }
}
