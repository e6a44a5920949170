use crate::models::{ActiveSet, PersonaCatalog, PersonaId};

/// Resolve an "@name" mention in a user utterance to an active persona
///
/// The first "@" followed by at least one word character yields the token.
/// The token is matched against the full catalog in catalog order, by
/// case-insensitive substring containment in the display name or exact
/// case-insensitive equality with the id. A match counts only if that
/// persona is in the active set; mentioning an absent persona has no effect.
pub fn resolve_mention(
    utterance: &str,
    catalog: &PersonaCatalog,
    active: &ActiveSet,
) -> Option<PersonaId> {
    let token = extract_mention_token(utterance)?;

    let matched = catalog.iter().find(|p| {
        p.name.to_lowercase().contains(&token) || p.id.to_lowercase() == token
    })?;

    if active.contains(&matched.id) {
        Some(matched.id.clone())
    } else {
        None
    }
}

/// Extract the first "@token" from the utterance, lowercased
///
/// Word characters are unicode letters, digits, and underscore. An "@" not
/// followed by a word character does not count; the scan continues.
fn extract_mention_token(utterance: &str) -> Option<String> {
    let mut chars = utterance.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '@' {
            continue;
        }
        let mut token = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_alphanumeric() || next == '_' {
                token.push(next);
                chars.next();
            } else {
                break;
            }
        }
        if !token.is_empty() {
            return Some(token.to_lowercase());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonaCatalog;

    fn active(catalog: &PersonaCatalog, ids: &[&str]) -> ActiveSet {
        let ids: Vec<String> = ids.iter().map(|s| s.to_string()).collect();
        catalog.select(&ids).unwrap()
    }

    #[test]
    fn test_no_mention_returns_none() {
        let catalog = PersonaCatalog::builtin();
        let set = active(&catalog, &["steve", "tom"]);
        assert_eq!(resolve_mention("what should we build?", &catalog, &set), None);
    }

    #[test]
    fn test_mention_by_name() {
        let catalog = PersonaCatalog::builtin();
        let set = active(&catalog, &["steve", "tom"]);
        assert_eq!(
            resolve_mention("@Tom what do you think?", &catalog, &set),
            Some("tom".to_string())
        );
    }

    #[test]
    fn test_mention_is_case_insensitive() {
        let catalog = PersonaCatalog::builtin();
        let set = active(&catalog, &["steve", "tom"]);
        assert_eq!(
            resolve_mention("@STEVE your take?", &catalog, &set),
            Some("steve".to_string())
        );
    }

    #[test]
    fn test_mention_of_inactive_persona_is_ignored() {
        let catalog = PersonaCatalog::builtin();
        let set = active(&catalog, &["steve"]);
        assert_eq!(resolve_mention("@Tom are you there?", &catalog, &set), None);
    }

    #[test]
    fn test_first_mention_wins() {
        let catalog = PersonaCatalog::builtin();
        let set = active(&catalog, &["steve", "tom"]);
        assert_eq!(
            resolve_mention("@steve then @tom please", &catalog, &set),
            Some("steve".to_string())
        );
    }

    #[test]
    fn test_bare_at_sign_is_skipped() {
        let catalog = PersonaCatalog::builtin();
        let set = active(&catalog, &["steve", "tom"]);
        // "@ " carries no token; the later "@tom" is the first real mention
        assert_eq!(
            resolve_mention("ping @ and then @tom", &catalog, &set),
            Some("tom".to_string())
        );
    }

    #[test]
    fn test_token_stops_at_punctuation() {
        assert_eq!(extract_mention_token("@Tom, hello"), Some("tom".to_string()));
        assert_eq!(extract_mention_token("mail me at a@b.com"), Some("b".to_string()));
        assert_eq!(extract_mention_token("no mentions here"), None);
    }

    #[test]
    fn test_unicode_token() {
        assert_eq!(extract_mention_token("@李雷 你好"), Some("李雷".to_string()));
    }
}
