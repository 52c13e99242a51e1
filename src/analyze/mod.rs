//! Content analysis
//!
//! Post-extraction structured mining over a page's clean text: word and
//! sentence metrics, a coarse quality band, reading time, regex-mined
//! entities, frequency-ranked keywords, FAQ pairs, and contact info. All of
//! it is derived fresh per call and consumed by downstream synthesis, not by
//! the crawl itself.

mod entities;
mod faq;

pub use entities::{extract_contact_info, extract_entities, ContactInfo, Entity, EntityKind};
pub use faq::{extract_faq, FaqPair};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Number of keywords returned by default
const TOP_KEYWORDS: usize = 10;

/// Words too common to rank as keywords
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "be", "been", "being", "to",
    "of", "for", "in", "on", "at", "by", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "from", "up", "down", "that", "this", "these",
    "those", "it", "they", "we", "you", "he", "she", "i",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());
static PUNCTUATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Coarse content quality band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Insufficient,
    Low,
    Medium,
    High,
}

/// Derived, read-only summary of one page's text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub reading_time_minutes: f64,
    pub entities: Vec<Entity>,
    pub keywords: Vec<String>,
    pub quality: Quality,
}

impl AnalysisReport {
    fn insufficient() -> Self {
        Self {
            word_count: 0,
            sentence_count: 0,
            avg_sentence_length: 0.0,
            reading_time_minutes: 0.0,
            entities: Vec::new(),
            keywords: Vec::new(),
            quality: Quality::Insufficient,
        }
    }
}

/// Analyzes extracted text.
///
/// Text shorter than 100 characters gets an all-zero `Insufficient` report.
/// Otherwise: `High` quality needs more than 300 words with an average
/// sentence longer than ten words, `Medium` needs more than 100 words, and
/// everything else is `Low`.
pub fn analyze(text: &str) -> AnalysisReport {
    if text.len() < 100 {
        return AnalysisReport::insufficient();
    }

    let word_count = text.split_whitespace().count();
    let sentence_count = SENTENCE_SPLIT_RE.split(text).count();
    let avg_sentence_length = word_count as f64 / sentence_count.max(1) as f64;

    let quality = if word_count > 300 && avg_sentence_length > 10.0 {
        Quality::High
    } else if word_count > 100 {
        Quality::Medium
    } else {
        Quality::Low
    };

    AnalysisReport {
        word_count,
        sentence_count,
        avg_sentence_length: (avg_sentence_length * 10.0).round() / 10.0,
        reading_time_minutes: reading_time_minutes(text),
        entities: extract_entities(text),
        keywords: extract_keywords(text, TOP_KEYWORDS),
        quality,
    }
}

/// Estimated reading time in minutes at 200 words per minute, rounded to
/// one decimal, never below half a minute.
pub fn reading_time_minutes(text: &str) -> f64 {
    let words = text.split_whitespace().count();
    let minutes = (words as f64 / 200.0 * 10.0).round() / 10.0;
    minutes.max(0.5)
}

/// Extracts the `top_n` most frequent keywords.
///
/// Punctuation is stripped, the text lowercased and split; stop words and
/// tokens of two characters or fewer are dropped. Ranking is by descending
/// frequency with a stable sort, so ties keep first-occurrence order.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let cleaned = PUNCTUATION_RE.replace_all(&lowered, "");

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in cleaned.split_whitespace() {
        if word.len() <= 2 || STOP_WORD_SET.contains(word) {
            continue;
        }
        if let Some(count) = counts.get_mut(word) {
            *count += 1;
        } else {
            counts.insert(word.to_string(), 1);
            order.push(word.to_string());
        }
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|word| {
            let count = counts.get(&word).copied().unwrap_or(0);
            (word, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked.into_iter().take(top_n).map(|(word, _)| word).collect()
}
