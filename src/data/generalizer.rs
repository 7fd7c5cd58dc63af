// ============================================================
// Layer 4 — Slot Question Generalizer
// ============================================================
// Turns a QA-SRL question in slot encoding into a template that
// only keeps the features that say something about argument
// order.
//
// Slot encoding (produced by the loader):
//   wh aux subj verb obj prep obj2 ?
//   e.g. "who _ _ pastParticiple something to someone ?"
//
// Empty slots are "_"; multi-word slot values are joined with
// "-" so every slot is exactly one whitespace token.
//
// Template rules:
//   1. wh-word, lowercased ("how-much" → "how much")
//   2. subject, if filled
//   3. predicate placeholder: "be V-ed" for passive verbs,
//      "V" otherwise; tense and auxiliaries are dropped
//   4. object, preposition, second object, if filled
//
//   "who _ _ pastParticiple something to someone ?" → "who V something to someone"
//   "what was _ pastParticiple _ _ _ ?"             → "what be V-ed"
//
// Reference: He et al. (2015) QA-SRL
//            Rust Book §8 (Strings in Rust)

use crate::domain::question::{GeneralizeError, GeneralizedQuestion};
use crate::domain::traits::QuestionGeneralizer;

/// Number of slots before the trailing "?"
const SLOT_COUNT: usize = 7;

const EMPTY_SLOT: &str = "_";

const WH_WORDS: &[&str] = &[
    "who", "what", "when", "where", "why", "how", "which", "whose",
];

const BE_FORMS: &[&str] = &[
    "be", "been", "being", "is", "are", "was", "were", "am",
    "isn't", "aren't", "wasn't", "weren't",
];

pub struct SlotGeneralizer;

impl SlotGeneralizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SlotGeneralizer {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionGeneralizer for SlotGeneralizer {
    fn generalize(&self, question: &str) -> Result<GeneralizedQuestion, GeneralizeError> {
        let tokens: Vec<&str> = question.split_whitespace().collect();
        if tokens.len() != SLOT_COUNT + 1 || tokens[SLOT_COUNT] != "?" {
            return Err(GeneralizeError::MalformedQuestion(question.to_string()));
        }

        let [wh, aux, subj, verb, obj, prep, obj2] = [
            tokens[0], tokens[1], tokens[2], tokens[3], tokens[4], tokens[5], tokens[6],
        ];

        let wh = wh.to_lowercase();
        let wh_head = wh.split('-').next().unwrap_or_default();
        if !WH_WORDS.contains(&wh_head) {
            return Err(GeneralizeError::UnknownWh {
                wh,
                question: question.to_string(),
            });
        }

        let mut parts: Vec<String> = vec![unjoin(&wh)];

        if subj != EMPTY_SLOT {
            parts.push(unjoin(subj));
        }

        let predicate = if is_passive(aux, verb) { "be V-ed" } else { "V" };
        parts.push(predicate.to_string());

        parts.extend(
            [obj, prep, obj2]
                .into_iter()
                .filter(|slot| *slot != EMPTY_SLOT)
                .map(unjoin),
        );

        Ok(GeneralizedQuestion::new(parts.join(" ")))
    }
}

/// A verb slot is passive when it is a past participle governed
/// by a form of "be", either in the aux slot or inside the verb slot
/// itself ("be-pastParticiple", "been-pastParticiple").
fn is_passive(aux: &str, verb: &str) -> bool {
    let verb_words: Vec<&str> = verb.split('-').collect();
    if !verb_words.contains(&"pastParticiple") {
        return false;
    }
    let aux = aux.to_lowercase();
    BE_FORMS.contains(&aux.as_str()) || verb_words.iter().any(|w| BE_FORMS.contains(w))
}

/// Restore the spaces the slot encoding replaced with "-".
fn unjoin(slot: &str) -> String {
    slot.replace('-', " ")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn template(q: &str) -> Result<GeneralizedQuestion, GeneralizeError> {
        SlotGeneralizer::new().generalize(q)
    }

    #[test]
    fn test_active_with_object() {
        let g = template("who _ _ pastParticiple something to someone ?").unwrap();
        assert_eq!(g.as_str(), "who V something to someone");
    }

    #[test]
    fn test_passive_via_aux() {
        let g = template("what was _ pastParticiple _ _ _ ?").unwrap();
        assert_eq!(g.as_str(), "what be V-ed");
    }

    #[test]
    fn test_passive_via_verb_slot() {
        let g = template("what might _ be-pastParticiple _ _ _ ?").unwrap();
        assert_eq!(g.as_str(), "what be V-ed");
    }

    #[test]
    fn test_perfect_tense_is_not_passive() {
        let g = template("what has someone pastParticiple _ _ _ ?").unwrap();
        assert_eq!(g.as_str(), "what someone V");
    }

    #[test]
    fn test_tense_is_abstracted_away() {
        let past    = template("who _ _ pastTense something _ _ ?").unwrap();
        let present = template("who _ _ presentSingular3rd something _ _ ?").unwrap();
        assert_eq!(past, present);
    }

    #[test]
    fn test_compound_wh() {
        let g = template("how-much _ _ stem _ _ _ ?").unwrap();
        assert_eq!(g.as_str(), "how much V");
    }

    #[test]
    fn test_wh_is_lowercased() {
        let g = template("Where did someone stem _ _ _ ?").unwrap();
        assert_eq!(g.as_str(), "where someone V");
    }

    #[test]
    fn test_wrong_slot_count_fails() {
        let err = template("who V ?").unwrap_err();
        assert!(matches!(err, GeneralizeError::MalformedQuestion(_)));
    }

    #[test]
    fn test_missing_question_mark_fails() {
        let err = template("who _ _ stem _ _ _ .").unwrap_err();
        assert!(matches!(err, GeneralizeError::MalformedQuestion(_)));
    }

    #[test]
    fn test_unknown_wh_fails() {
        let err = template("whom _ _ stem _ _ _ ?").unwrap_err();
        assert!(matches!(err, GeneralizeError::UnknownWh { .. }));
    }

    #[test]
    fn test_empty_question_fails() {
        assert!(template("").is_err());
    }
}
