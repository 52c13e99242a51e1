//! Text normalization
//!
//! Cleans the winning extraction strategy's output. The function is
//! idempotent: applying it to its own output changes nothing, so callers
//! may normalize defensively without compounding edits.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static ENTITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&[a-zA-Z]+;").unwrap());
static JOINED_SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.([A-Z])").unwrap());

/// Normalizes extracted text: collapses whitespace runs to single spaces,
/// drops stray HTML character references, repairs sentences that tag
/// stripping concatenated (a period directly followed by a capital letter),
/// and trims the ends.
pub fn normalize_text(text: &str) -> String {
    let text = WHITESPACE_RE.replace_all(text, " ");
    let text = ENTITY_RE.replace_all(&text, " ");
    // entity removal leaves double spaces behind; collapse again so one
    // application is already a fixed point
    let text = WHITESPACE_RE.replace_all(&text, " ");
    let text = JOINED_SENTENCE_RE.replace_all(&text, ". ${1}");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(normalize_text("a\n\t  b   c"), "a b c");
    }

    #[test]
    fn test_entities_removed() {
        assert_eq!(normalize_text("fish &amp; chips"), "fish chips");
        assert_eq!(normalize_text("a&nbsp;b"), "a b");
    }

    #[test]
    fn test_concatenated_sentences_repaired() {
        assert_eq!(
            normalize_text("First sentence.Second sentence."),
            "First sentence. Second sentence."
        );
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(normalize_text("  padded  "), "padded");
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "",
            "already clean",
            "  messy\n\ninput with &amp; entities.And joins  ",
            "U.S.A abbreviations get split.Like this",
            "tabs\tand\nnewlines &lt;tag&gt; leftovers",
        ];

        for sample in samples {
            let once = normalize_text(sample);
            let twice = normalize_text(&once);
            assert_eq!(once, twice, "normalize_text not idempotent for {:?}", sample);
        }
    }
}
