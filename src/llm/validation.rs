use crate::models::MeetingSummary;

/// Parse and validate the summarizer's payload at the boundary
///
/// The payload is untrusted: it may be wrapped in a markdown code fence, and
/// its shape may drift from the declared schema. Anything that does not
/// deserialize into [`MeetingSummary`] is rejected; the caller substitutes
/// the fallback record. A missing `decisionTree` is absent, not an error.
pub fn parse_summary_payload(raw: &str) -> Result<MeetingSummary, serde_json::Error> {
    serde_json::from_str(strip_code_fence(raw))
}

/// Strip a surrounding markdown code fence, if present
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence line
    match inner.split_once('\n') {
        Some((first_line, body)) if !first_line.contains('{') => body.trim(),
        _ => inner.trim(),
    }
}
