use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{ActionStatus, MeetingSummary, Transcript};

/// Write the full transcript to a JSON file
pub fn write_transcript_json(transcript: &Transcript, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, transcript).context("Failed to write JSON")?;
    Ok(())
}

/// Human-readable meeting minutes
pub struct MinutesDocument<'a> {
    summary: &'a MeetingSummary,
}

impl<'a> MinutesDocument<'a> {
    pub fn new(summary: &'a MeetingSummary) -> Self {
        Self { summary }
    }

    /// Format the minutes as markdown
    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Meeting Minutes: {}\n\n", self.summary.topic));

        if !self.summary.key_points.is_empty() {
            output.push_str("## Key Points\n\n");
            for point in &self.summary.key_points {
                output.push_str(&format!("- {}\n", point));
            }
            output.push('\n');
        }

        if !self.summary.action_items.is_empty() {
            output.push_str("## Action Items\n\n");
            for item in &self.summary.action_items {
                output.push_str(&format!(
                    "- [{}] {} (owner: {})\n",
                    status_marker(item.status),
                    item.task,
                    item.owner
                ));
            }
            output.push('\n');
        }

        if let Some(steps) = &self.summary.decision_tree {
            output.push_str("## Decision Flow\n\n");
            for (i, step) in steps.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, step.step));
                for option in &step.options {
                    output.push_str(&format!("   - {}\n", option));
                }
            }
            output.push('\n');
        }

        output.push_str("## Conclusion\n\n");
        output.push_str(&self.summary.conclusion);
        output.push('\n');

        output
    }

    /// Write the minutes to a file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

fn status_marker(status: ActionStatus) -> &'static str {
    match status {
        ActionStatus::Pending => " ",
        ActionStatus::InProgress => "~",
        ActionStatus::Done => "x",
    }
}
