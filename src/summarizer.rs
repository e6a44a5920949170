use tracing::{info, warn};

use crate::error::SummarizerError;
use crate::models::{MeetingSummary, Transcript, TranscriptEntry};

/// External structured-generation collaborator for meeting minutes
#[allow(async_fn_in_trait)]
pub trait Summarizer {
    /// Produce structured minutes from the given entries, in order
    async fn summarize(
        &self,
        entries: &[TranscriptEntry],
    ) -> Result<MeetingSummary, SummarizerError>;
}

/// Request a summary of the meeting so far
///
/// System notices are excluded before delegating. Any failure (network,
/// malformed payload) yields [`MeetingSummary::fallback`]; this never
/// returns an error.
pub async fn request_summary<S: Summarizer>(
    summarizer: &S,
    transcript: &Transcript,
) -> MeetingSummary {
    let entries: Vec<TranscriptEntry> = transcript.spoken_entries().cloned().collect();
    info!("Requesting summary of {} entries", entries.len());

    match summarizer.summarize(&entries).await {
        Ok(summary) => summary,
        Err(e) => {
            warn!("Summary generation failed: {}", e);
            MeetingSummary::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::ApiError;
    use crate::models::TranscriptEntry;

    struct FailingSummarizer;

    impl Summarizer for FailingSummarizer {
        async fn summarize(
            &self,
            _entries: &[TranscriptEntry],
        ) -> Result<MeetingSummary, SummarizerError> {
            Err(SummarizerError::Api(ApiError::EmptyResponse))
        }
    }

    struct RecordingSummarizer {
        seen: Mutex<Vec<String>>,
    }

    impl Summarizer for RecordingSummarizer {
        async fn summarize(
            &self,
            entries: &[TranscriptEntry],
        ) -> Result<MeetingSummary, SummarizerError> {
            let mut seen = self.seen.lock().unwrap();
            *seen = entries.iter().map(|e| e.content.clone()).collect();
            Ok(MeetingSummary {
                topic: "Test".to_string(),
                key_points: vec!["point".to_string()],
                action_items: Vec::new(),
                conclusion: "Done".to_string(),
                decision_tree: None,
            })
        }
    }

    #[tokio::test]
    async fn test_failure_yields_fallback_without_raising() {
        let transcript = Transcript::new();
        let summary = request_summary(&FailingSummarizer, &transcript).await;
        assert!(summary.is_fallback());
        assert!(summary.key_points.is_empty());
        assert!(summary.action_items.is_empty());
    }

    #[tokio::test]
    async fn test_system_entries_are_excluded() {
        let mut transcript = Transcript::new();
        transcript.append(TranscriptEntry::system("Meeting started."));
        transcript.append(TranscriptEntry::user("let's talk pricing"));

        let summarizer = RecordingSummarizer {
            seen: Mutex::new(Vec::new()),
        };
        let summary = request_summary(&summarizer, &transcript).await;

        assert_eq!(summary.topic, "Test");
        assert_eq!(
            *summarizer.seen.lock().unwrap(),
            vec!["let's talk pricing".to_string()]
        );
    }
}
