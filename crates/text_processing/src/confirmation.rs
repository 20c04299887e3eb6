//! Confirmation reply classification
//!
//! One spoken reply in, one [`ConfirmationOutcome`] out. Matching is
//! case-insensitive substring containment. Affirmative keywords take
//! precedence; negative keywords are checked only when no affirmative
//! keyword matched.

use aurora_ivr_core::ConfirmationOutcome;

pub use aurora_ivr_config::ReplyKeywords;

#[derive(Debug, Clone)]
pub struct ReplyClassifier {
    keywords: ReplyKeywords,
}

impl ReplyClassifier {
    pub fn new(keywords: &ReplyKeywords) -> Self {
        Self {
            keywords: keywords.normalized(),
        }
    }

    pub fn classify(&self, reply: &str) -> ConfirmationOutcome {
        let masked = self.mask_hedges(&reply.to_lowercase());

        let contains_any = |words: &[String]| words.iter().any(|w| masked.contains(w.as_str()));

        let outcome = if contains_any(&self.keywords.affirmative) {
            ConfirmationOutcome::Affirmative
        } else if contains_any(&self.keywords.negative) {
            ConfirmationOutcome::Negative
        } else {
            ConfirmationOutcome::Ambiguous
        };

        tracing::debug!(reply, outcome = %outcome, "Classified confirmation reply");
        outcome
    }

    fn mask_hedges(&self, text: &str) -> String {
        self.keywords
            .hedges
            .iter()
            .fold(text.to_string(), |acc, hedge| acc.replace(hedge.as_str(), " "))
    }
}

impl Default for ReplyClassifier {
    fn default() -> Self {
        Self::new(&ReplyKeywords::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative() {
        let classifier = ReplyClassifier::default();
        for reply in ["yes", "Yeah, that's it", "SURE", "that is correct", "ok"] {
            assert_eq!(
                classifier.classify(reply),
                ConfirmationOutcome::Affirmative,
                "{reply}"
            );
        }
    }

    #[test]
    fn test_negative() {
        let classifier = ReplyClassifier::default();
        for reply in ["no", "Nope", "that's wrong", "nah"] {
            assert_eq!(
                classifier.classify(reply),
                ConfirmationOutcome::Negative,
                "{reply}"
            );
        }
    }

    #[test]
    fn test_affirmative_takes_precedence() {
        let classifier = ReplyClassifier::default();
        assert_eq!(
            classifier.classify("no, wait, yes"),
            ConfirmationOutcome::Affirmative
        );
    }

    #[test]
    fn test_neither_is_ambiguous() {
        let classifier = ReplyClassifier::default();
        assert_eq!(classifier.classify("hmm"), ConfirmationOutcome::Ambiguous);
        assert_eq!(classifier.classify(""), ConfirmationOutcome::Ambiguous);
    }

    #[test]
    fn test_hedged_reply_is_ambiguous() {
        let classifier = ReplyClassifier::default();
        assert_eq!(
            classifier.classify("maybe, not sure"),
            ConfirmationOutcome::Ambiguous
        );
        assert_eq!(
            classifier.classify("I don't know"),
            ConfirmationOutcome::Ambiguous
        );
        // a hedge next to a real answer still counts
        assert_eq!(
            classifier.classify("not sure... actually yes"),
            ConfirmationOutcome::Affirmative
        );
    }

    #[test]
    fn test_custom_vocabulary() {
        let keywords: ReplyKeywords =
            serde_yaml::from_str("affirmative: [aye]\nnegative: [nay]\n").unwrap();
        let classifier = ReplyClassifier::new(&keywords);
        assert_eq!(classifier.classify("Aye"), ConfirmationOutcome::Affirmative);
        assert_eq!(classifier.classify("nay"), ConfirmationOutcome::Negative);
    }
}
