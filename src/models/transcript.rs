use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PersonaId;

/// Who produced a transcript entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    System,
    Persona(PersonaId),
}

impl Speaker {
    pub fn is_system(&self) -> bool {
        matches!(self, Speaker::System)
    }

    /// The persona id, if this entry was spoken by a persona
    pub fn persona_id(&self) -> Option<&str> {
        match self {
            Speaker::Persona(id) => Some(id),
            _ => None,
        }
    }
}

/// One utterance in the meeting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Unique identifier (UUID)
    pub entry_id: String,
    /// Who spoke
    pub speaker: Speaker,
    /// Display name snapshot at the time of speaking
    pub speaker_name: String,
    /// The utterance text - immutable once appended
    pub content: String,
    /// Creation timestamp
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn new(speaker: Speaker, speaker_name: &str, content: &str) -> Self {
        Self {
            entry_id: uuid::Uuid::new_v4().to_string(),
            speaker,
            speaker_name: speaker_name.to_string(),
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self::new(Speaker::User, "You", content)
    }

    pub fn system(content: &str) -> Self {
        Self::new(Speaker::System, "System", content)
    }
}

/// Append-only conversation history for one meeting
///
/// Entry order is the conversation order shown to the user and fed back to
/// the model as context. Entries are only ever appended, never edited,
/// removed, or reordered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return a reference to it
    pub fn append(&mut self, entry: TranscriptEntry) -> &TranscriptEntry {
        self.entries.push(entry);
        self.entries.last().expect("entry just pushed")
    }

    /// All entries in conversation order
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Entries excluding system notices, in conversation order
    pub fn spoken_entries(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter().filter(|e| !e.speaker.is_system())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.append(TranscriptEntry::user("first"));
        transcript.append(TranscriptEntry::new(
            Speaker::Persona("tom".to_string()),
            "Tom",
            "second",
        ));
        transcript.append(TranscriptEntry::user("third"));

        let contents: Vec<&str> = transcript.entries().iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_spoken_entries_excludes_system() {
        let mut transcript = Transcript::new();
        transcript.append(TranscriptEntry::system("Meeting started."));
        transcript.append(TranscriptEntry::user("hello"));

        let spoken: Vec<&TranscriptEntry> = transcript.spoken_entries().collect();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].content, "hello");
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let a = TranscriptEntry::user("a");
        let b = TranscriptEntry::user("b");
        assert_ne!(a.entry_id, b.entry_id);
    }
}
