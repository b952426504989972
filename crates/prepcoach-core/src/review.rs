//! Heuristic review of free-text interview answers.
//!
//! Counts words and sentences and looks for keywords hinting at each part of
//! the STAR framework. It does not judge whether the answer is any good.

use once_cell::sync::Lazy;
use prepcoach_types::{AnswerReview, LengthAssessment, StarChecklist, StarVerdict};
use regex::Regex;

const MIN_WORDS: usize = 50;
const MAX_WORDS: usize = 250;

static SITUATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)situation|context|when|where").expect("Invalid situation regex")
});

static TASK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)my responsibility|needed to|I had to").expect("Invalid task regex")
});

// Trailing space matters: "I " as a word, not a prefix
static ACTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)I |my action|what I did").expect("Invalid action regex")
});

static RESULT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)result|outcome|so we|because").expect("Invalid result regex")
});

/// Review an answer's length and STAR coverage.
pub fn review_answer(answer: &str) -> AnswerReview {
    let word_count = answer.split_whitespace().count();
    let sentence_count = answer
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();

    let length = if word_count < MIN_WORDS {
        LengthAssessment::TooShort
    } else if word_count > MAX_WORDS {
        LengthAssessment::TooLong
    } else {
        LengthAssessment::Good
    };

    let star = StarChecklist {
        situation: SITUATION_RE.is_match(answer),
        task: TASK_RE.is_match(answer),
        action: ACTION_RE.is_match(answer),
        result: RESULT_RE.is_match(answer),
    };

    let verdict = if star.is_complete() {
        StarVerdict::Complete
    } else {
        StarVerdict::Incomplete
    };

    AnswerReview {
        word_count,
        sentence_count,
        length,
        star,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded_to(base: &str, words: usize) -> String {
        let base_words = base.split_whitespace().count();
        let filler = vec!["detail"; words - base_words].join(" ");
        format!("{} {}", base, filler)
    }

    #[test]
    fn test_single_word_is_too_short() {
        let review = review_answer("short");
        assert_eq!(review.word_count, 1);
        assert_eq!(review.sentence_count, 1);
        assert_eq!(review.length, LengthAssessment::TooShort);
        assert_eq!(review.verdict, StarVerdict::Incomplete);
    }

    #[test]
    fn test_three_hundred_words_is_too_long() {
        let answer = vec!["filler"; 300].join(" ");
        let review = review_answer(&answer);
        assert_eq!(review.word_count, 300);
        assert_eq!(review.length, LengthAssessment::TooLong);
    }

    #[test]
    fn test_boundaries_are_good_length() {
        let fifty = vec!["word"; 50].join(" ");
        assert_eq!(review_answer(&fifty).length, LengthAssessment::Good);

        let two_fifty = vec!["word"; 250].join(" ");
        assert_eq!(review_answer(&two_fifty).length, LengthAssessment::Good);

        let forty_nine = vec!["word"; 49].join(" ");
        assert_eq!(review_answer(&forty_nine).length, LengthAssessment::TooShort);
    }

    #[test]
    fn test_complete_star_answer() {
        let base = "The situation was a failing release. I had to coordinate the fix. \
                    I rewrote the deploy script. The result was a clean launch because we tested early.";
        let answer = padded_to(base, 120);

        let review = review_answer(&answer);

        assert_eq!(review.word_count, 120);
        assert_eq!(review.length, LengthAssessment::Good);
        assert!(review.star.situation);
        assert!(review.star.task);
        assert!(review.star.action);
        assert!(review.star.result);
        assert_eq!(review.verdict, StarVerdict::Complete);
    }

    #[test]
    fn test_star_matching_is_case_insensitive() {
        let review = review_answer("CONTEXT first. NEEDED TO ship. MY ACTION was clear. OUTCOME good.");
        assert!(review.star.is_complete());
    }

    #[test]
    fn test_missing_result_is_incomplete() {
        let review = review_answer("In that situation I had to act, so I stepped in.");
        assert!(review.star.situation);
        assert!(review.star.task);
        assert!(review.star.action);
        assert!(!review.star.result);
        assert_eq!(review.verdict, StarVerdict::Incomplete);
    }

    #[test]
    fn test_sentence_count_ignores_empty_segments() {
        let review = review_answer("First one... Second one?! Third");
        assert_eq!(review.sentence_count, 3);
    }
}
