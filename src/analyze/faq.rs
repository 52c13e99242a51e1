//! FAQ pair extraction
//!
//! Two passes: explicit `Q:`/`A:` paired blocks first, then a heuristic for
//! prose FAQs (a line ending in a question mark followed by a block of
//! answer text). The heuristic discards answers too short to be real.

use crate::extract::normalize_text;
use serde::Serialize;

/// Minimum trimmed answer length for a heuristic match to count
const MIN_ANSWER_LEN: usize = 10;

/// One question/answer pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqPair {
    pub question: String,
    pub answer: String,
}

/// Extracts FAQ-like question/answer pairs from text.
pub fn extract_faq(text: &str) -> Vec<FaqPair> {
    let explicit = explicit_pairs(text);
    if !explicit.is_empty() {
        return explicit;
    }
    heuristic_pairs(text)
}

/// `Q: ... A: ...` blocks; each `Q:` opens a pair and the answer runs until
/// the next `Q:` or the end of the text.
fn explicit_pairs(text: &str) -> Vec<FaqPair> {
    let mut pairs = Vec::new();

    for chunk in text.split("Q:").skip(1) {
        if let Some((question, answer)) = chunk.split_once("A:") {
            let question = normalize_text(question);
            let answer = normalize_text(answer);
            if !question.is_empty() && !answer.is_empty() {
                pairs.push(FaqPair { question, answer });
            }
        }
    }

    pairs
}

/// Heuristic pass: a line ending in `?` is a question; the following
/// non-question lines up to the next question form its answer.
fn heuristic_pairs(text: &str) -> Vec<FaqPair> {
    let lines: Vec<&str> = text.lines().collect();
    let mut pairs = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();
        if line.is_empty() || !line.ends_with('?') {
            i += 1;
            continue;
        }

        let mut answer = String::new();
        let mut j = i + 1;
        while j < lines.len() && !lines[j].trim().ends_with('?') {
            let next = lines[j].trim();
            if !next.is_empty() {
                if !answer.is_empty() {
                    answer.push(' ');
                }
                answer.push_str(next);
            }
            j += 1;
        }

        if answer.trim().len() > MIN_ANSWER_LEN {
            pairs.push(FaqPair {
                question: normalize_text(line),
                answer: normalize_text(&answer),
            });
        }
        i = j;
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_pairs() {
        let text = "Q: What is petrel? A: A polite web content harvester. Q: Is it fast? A: Fast enough.";
        let pairs = extract_faq(text);

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].question, "What is petrel?");
        assert_eq!(pairs[0].answer, "A polite web content harvester.");
        assert_eq!(pairs[1].question, "Is it fast?");
        assert_eq!(pairs[1].answer, "Fast enough.");
    }

    #[test]
    fn test_heuristic_pairs() {
        let text = "How do I reset my password?\nUse the reset link on the login page.\nIt arrives by email.\nWhere is my data stored?\nIn the region you picked at signup.";
        let pairs = extract_faq(text);

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].question, "How do I reset my password?");
        assert_eq!(
            pairs[0].answer,
            "Use the reset link on the login page. It arrives by email."
        );
    }

    #[test]
    fn test_heuristic_discards_short_answers() {
        let text = "Is this on?\nYes.\n";
        assert!(extract_faq(text).is_empty());
    }

    #[test]
    fn test_explicit_takes_priority() {
        // Contains both shapes; only the explicit pairs are returned
        let text = "Q: First? A: Explicit answer wins here.\nStray question?\nA heuristic answer that is long enough.";
        let pairs = extract_faq(text);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].question, "First?");
    }

    #[test]
    fn test_no_pairs() {
        assert!(extract_faq("Plain prose with no questions at all.").is_empty());
    }
}
