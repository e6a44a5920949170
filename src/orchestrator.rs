use tracing::{debug, info, warn};

use crate::error::ResponderError;
use crate::mention::resolve_mention;
use crate::models::{
    ActiveSet, Persona, PersonaCatalog, PersonaId, Speaker, Transcript, TranscriptEntry,
};

/// Reply substituted when a persona's responder call fails
pub const FALLBACK_REPLY: &str = "I apologize, I'm having trouble connecting right now.";

/// External text-generation collaborator invoked once per speaker per turn
#[allow(async_fn_in_trait)]
pub trait Responder {
    /// Generate one persona's reply given the transcript so far
    async fn respond(
        &self,
        persona: &Persona,
        transcript: &Transcript,
        utterance: &str,
    ) -> Result<String, ResponderError>;
}

/// Result of running one turn
#[derive(Debug)]
pub struct TurnResult {
    /// Newly appended entries: the user entry followed by one per speaker
    pub entries: Vec<TranscriptEntry>,
    /// The speaking order used for this turn
    pub order: Vec<PersonaId>,
    /// Number of speakers whose responder call failed
    pub failures: usize,
}

/// Compute the speaking order for one turn
///
/// A resolved mention promotes that persona to the front; everyone else
/// keeps their mutual relative order (stable partition). With no mention the
/// active set's current order stands. The result is always a permutation of
/// the active set.
pub fn compute_order(
    utterance: &str,
    catalog: &PersonaCatalog,
    active: &ActiveSet,
) -> Vec<PersonaId> {
    if let Some(mentioned) = resolve_mention(utterance, catalog, active) {
        debug!("Mention resolved to {}", mentioned);
        let mut order = vec![mentioned.clone()];
        order.extend(active.order().iter().filter(|id| **id != mentioned).cloned());
        order
    } else {
        active.order().to_vec()
    }
}

/// Run one turn: append the user utterance, then collect each active
/// persona's reply in the computed order
///
/// Replies are gathered strictly sequentially. Each reply is appended to the
/// working transcript before the next responder call is issued, so later
/// speakers see earlier same-turn replies as context. A failed call
/// substitutes [`FALLBACK_REPLY`] for that persona and the loop continues.
///
/// The computed order is written back into the active set, so a mention's
/// promotion carries over to later turns. `on_entry` fires for each entry as
/// it is appended, for incremental rendering.
pub async fn run_turn<R: Responder>(
    responder: &R,
    catalog: &PersonaCatalog,
    active: &mut ActiveSet,
    transcript: &mut Transcript,
    utterance: &str,
    mut on_entry: impl FnMut(&TranscriptEntry),
) -> TurnResult {
    let mut entries = Vec::with_capacity(active.len() + 1);

    let user_entry = transcript.append(TranscriptEntry::user(utterance));
    on_entry(user_entry);
    entries.push(user_entry.clone());

    let order = compute_order(utterance, catalog, active);
    active.set_order(order.clone());
    info!("Turn order: {:?}", order);

    let mut failures = 0;
    for id in &order {
        let Some(persona) = catalog.get(id) else {
            // Membership is validated at selection time; an unknown id here
            // would mean the catalog changed mid-meeting.
            warn!("Persona {} missing from catalog, skipping", id);
            continue;
        };

        let content = match responder.respond(persona, transcript, utterance).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Responder failed for {}: {}", persona.id, e);
                failures += 1;
                FALLBACK_REPLY.to_string()
            }
        };

        let entry = transcript.append(TranscriptEntry::new(
            Speaker::Persona(persona.id.clone()),
            &persona.name,
            &content,
        ));
        on_entry(entry);
        entries.push(entry.clone());
    }

    TurnResult {
        entries,
        order,
        failures,
    }
}
