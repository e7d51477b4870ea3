//! Sentiment classification seam
//!
//! The collector treats the classifier as an opaque text -> label function
//! behind the `SentimentModel` trait. The default `LexiconModel` scores
//! against small embedded word lists and always produces one of the two
//! labels; a hosted model can be swapped in at the same seam.

use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;

/// Coarse sentiment label, matching the two-class output of the
/// upstream model the pipeline was built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    /// The full label set, in a fixed order.
    pub const ALL: [SentimentLabel; 2] = [SentimentLabel::Positive, SentimentLabel::Negative];

    /// Lowercase string form, as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque text -> label classifier.
pub trait SentimentModel {
    fn classify(&self, text: &str) -> SentimentLabel;
}

static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "amazing", "awesome", "beautiful", "best", "better", "brilliant", "celebrate",
        "delight", "enjoy", "excellent", "excited", "exciting", "fantastic", "favorite",
        "fun", "glad", "good", "grateful", "great", "happy", "hope", "impressive",
        "incredible", "inspiring", "joy", "love", "loved", "lovely", "nice", "perfect",
        "pleased", "proud", "succeed", "success", "successful", "thanks", "thrilled",
        "win", "winner", "wonderful",
    ]
    .into_iter()
    .collect()
});

static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "angry", "awful", "bad", "broke", "broken", "crash", "cry", "danger",
        "dangerous", "dead", "death", "disaster", "disappointed", "disappointing",
        "fail", "failed", "failure", "fear", "fraud", "hate", "horrible", "hurt",
        "kill", "lose", "loss", "lost", "mad", "miserable", "pain", "poor", "sad",
        "scam", "scared", "sick", "terrible", "ugly", "unfair", "upset", "worse",
        "worst", "wrong",
    ]
    .into_iter()
    .collect()
});

/// Default lexicon-backed classifier.
///
/// Tokenizes case-insensitively on non-alphanumeric boundaries and counts
/// hits against the positive and negative lexicons. Negative wins only on
/// a strict majority of negative hits, so neutral and unknown text lands
/// on the positive side of the two-class split.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconModel;

impl SentimentModel for LexiconModel {
    fn classify(&self, text: &str) -> SentimentLabel {
        let mut positive = 0usize;
        let mut negative = 0usize;

        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let token = token.to_lowercase();
            if POSITIVE_WORDS.contains(token.as_str()) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(token.as_str()) {
                negative += 1;
            }
        }

        if negative > positive {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Positive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_nonempty_and_fixed() {
        for label in SentimentLabel::ALL {
            assert!(!label.as_str().is_empty());
        }
        assert_eq!(SentimentLabel::Positive.to_string(), "positive");
        assert_eq!(SentimentLabel::Negative.to_string(), "negative");
    }

    #[test]
    fn classifies_positive_title() {
        let model = LexiconModel;
        assert_eq!(
            model.classify("This is the best day ever, I love it"),
            SentimentLabel::Positive
        );
    }

    #[test]
    fn classifies_negative_title() {
        let model = LexiconModel;
        assert_eq!(
            model.classify("Terrible news: markets crash, everything is broken"),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn is_case_insensitive() {
        let model = LexiconModel;
        assert_eq!(
            model.classify("AWFUL. Just AWFUL."),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn neutral_text_gets_a_label() {
        let model = LexiconModel;
        let label = model.classify("Quarterly subreddit census thread");
        assert!(SentimentLabel::ALL.contains(&label));
    }

    #[test]
    fn empty_text_gets_a_label() {
        let model = LexiconModel;
        assert_eq!(model.classify(""), SentimentLabel::Positive);
    }

    #[test]
    fn tie_goes_positive() {
        let model = LexiconModel;
        assert_eq!(
            model.classify("good news and bad news"),
            SentimentLabel::Positive
        );
    }
}
