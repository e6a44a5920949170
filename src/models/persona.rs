use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Stable identifier for a persona (e.g. "tom", "steve")
pub type PersonaId = String;

/// A simulated meeting attendee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// Unique, stable identifier
    pub id: PersonaId,
    /// Display name shown in the transcript
    pub name: String,
    /// Job title
    pub title: String,
    /// Avatar text (initials)
    #[serde(default)]
    pub avatar: String,
    /// Tone/system-instruction text passed verbatim to the responder
    pub instructions: String,
    /// Whether this attendee is a domain expert
    #[serde(default)]
    pub expert: bool,
}

/// Ordered catalog of all available personas
///
/// Loaded once (built-in roster or a JSON file) and never mutated. Catalog
/// order is the tie-break order for mention matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaCatalog {
    personas: Vec<Persona>,
}

impl PersonaCatalog {
    pub fn new(personas: Vec<Persona>) -> Self {
        Self { personas }
    }

    /// The built-in roster of attendees
    pub fn builtin() -> Self {
        let personas = vec![
            Persona {
                id: "tom".to_string(),
                name: "Tom".to_string(),
                title: "Chief Strategy Officer".to_string(),
                avatar: "T".to_string(),
                instructions: "You are Tom, a pragmatic Chief Strategy Officer. \
                    You weigh market positioning and long-term trade-offs, push back \
                    on ideas without a clear path to value, and always end with a \
                    concrete recommendation."
                    .to_string(),
                expert: false,
            },
            Persona {
                id: "steve".to_string(),
                name: "Steve".to_string(),
                title: "Visionary Founder".to_string(),
                avatar: "S".to_string(),
                instructions: "You are Steve, a visionary founder obsessed with \
                    simplicity and user experience. You challenge incremental thinking, \
                    cut scope aggressively, and argue from first principles about what \
                    the user actually feels."
                    .to_string(),
                expert: false,
            },
            Persona {
                id: "elena".to_string(),
                name: "Elena".to_string(),
                title: "Head of Engineering".to_string(),
                avatar: "E".to_string(),
                instructions: "You are Elena, Head of Engineering. You ground the \
                    discussion in technical feasibility, estimate effort and risk \
                    honestly, and flag hidden operational costs early."
                    .to_string(),
                expert: true,
            },
            Persona {
                id: "maya".to_string(),
                name: "Maya".to_string(),
                title: "Chief Financial Officer".to_string(),
                avatar: "M".to_string(),
                instructions: "You are Maya, the CFO. You translate every proposal \
                    into cost, revenue impact, and runway, and you are skeptical of \
                    plans without numbers."
                    .to_string(),
                expert: true,
            },
            Persona {
                id: "raj".to_string(),
                name: "Raj".to_string(),
                title: "Marketing Director".to_string(),
                avatar: "R".to_string(),
                instructions: "You are Raj, Marketing Director. You think in terms of \
                    audience, narrative, and channels, and you reframe features as \
                    stories customers would repeat."
                    .to_string(),
                expert: false,
            },
            Persona {
                id: "wei".to_string(),
                name: "Wei".to_string(),
                title: "Operations Lead".to_string(),
                avatar: "W".to_string(),
                instructions: "You are Wei, Operations Lead. You focus on execution: \
                    who does what by when, process bottlenecks, and what breaks at \
                    scale."
                    .to_string(),
                expert: true,
            },
        ];
        Self { personas }
    }

    /// Get a persona by id
    pub fn get(&self, id: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.id == id)
    }

    /// Iterate personas in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.personas.iter()
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    /// Build the active set for a meeting from a list of persona ids
    ///
    /// Fails on ids not present in the catalog. Duplicates collapse to their
    /// first occurrence; the given order becomes the initial speaking order.
    pub fn select(&self, ids: &[String]) -> Result<ActiveSet> {
        let mut order: Vec<PersonaId> = Vec::new();
        for id in ids {
            if self.get(id).is_none() {
                bail!("Unknown persona id: {}", id);
            }
            if !order.iter().any(|o| o == id) {
                order.push(id.clone());
            }
        }
        if order.is_empty() {
            bail!("At least one attendee must be selected");
        }
        Ok(ActiveSet { order })
    }
}

/// The ordered subset of personas attending the current meeting
///
/// The order doubles as the speaking order: a mention promotes a persona to
/// the front and the new order persists for subsequent turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSet {
    order: Vec<PersonaId>,
}

impl ActiveSet {
    /// Current speaking order
    pub fn order(&self) -> &[PersonaId] {
        &self.order
    }

    pub fn contains(&self, id: &str) -> bool {
        self.order.iter().any(|o| o == id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Replace the speaking order with a permutation of the current members
    ///
    /// Orders that add or drop members are rejected; the set membership is
    /// fixed for the duration of a meeting.
    pub fn set_order(&mut self, order: Vec<PersonaId>) {
        if order.len() == self.order.len() && order.iter().all(|id| self.contains(id)) {
            self.order = order;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_tom_and_steve() {
        let catalog = PersonaCatalog::builtin();
        assert!(catalog.get("tom").is_some());
        assert!(catalog.get("steve").is_some());
        assert!(catalog.get("tom").unwrap().name.to_lowercase().contains("tom"));
    }

    #[test]
    fn test_select_preserves_order_and_dedups() {
        let catalog = PersonaCatalog::builtin();
        let active = catalog
            .select(&["steve".to_string(), "tom".to_string(), "steve".to_string()])
            .unwrap();
        assert_eq!(active.order(), &["steve".to_string(), "tom".to_string()]);
    }

    #[test]
    fn test_select_unknown_id_fails() {
        let catalog = PersonaCatalog::builtin();
        assert!(catalog.select(&["nobody".to_string()]).is_err());
    }

    #[test]
    fn test_select_empty_fails() {
        let catalog = PersonaCatalog::builtin();
        assert!(catalog.select(&[]).is_err());
    }

    #[test]
    fn test_set_order_rejects_non_permutation() {
        let catalog = PersonaCatalog::builtin();
        let mut active = catalog
            .select(&["steve".to_string(), "tom".to_string()])
            .unwrap();
        let before = active.order().to_vec();
        active.set_order(vec!["steve".to_string(), "elena".to_string()]);
        assert_eq!(active.order(), &before[..]);
    }
}
