//! Regex-based entity mining
//!
//! Lightweight pattern matching over extracted text. These are deliberately
//! simple regexes, not a statistical NLP pass; they catch the contact-style
//! facts downstream synthesis cares about.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

/// Entity categories the miner recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Email,
    Phone,
    Url,
    Date,
    Time,
    Money,
    Percentage,
    Address,
}

/// One matched entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
}

/// Contact information pulled from a page's text
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactInfo {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub addresses: Vec<String>,
}

/// Patterns in evaluation order. On duplicate matched text the first kind
/// wins, so the order here is a priority order.
static ENTITY_PATTERNS: Lazy<Vec<(EntityKind, Regex)>> = Lazy::new(|| {
    vec![
        (
            EntityKind::Email,
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap(),
        ),
        (
            EntityKind::Phone,
            Regex::new(r"\b(\+\d{1,2}\s)?\(?\d{3}\)?[\s.-]\d{3}[\s.-]\d{4}\b").unwrap(),
        ),
        (EntityKind::Url, Regex::new(r"https?://[^\s]+").unwrap()),
        (
            EntityKind::Date,
            Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").unwrap(),
        ),
        (
            EntityKind::Time,
            Regex::new(r"\b\d{1,2}:\d{2}(:\d{2})?\s*([aApP][mM])?\b").unwrap(),
        ),
        (EntityKind::Money, Regex::new(r"\$\d+(\.\d{2})?").unwrap()),
        (
            EntityKind::Percentage,
            Regex::new(r"\d+(\.\d+)?\s*%").unwrap(),
        ),
        (
            EntityKind::Address,
            Regex::new(r"\d+\s+[A-Za-z0-9\s,]+(Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr|Lane|Ln|Court|Ct|Way|Place|Pl|Square|Sq)\b").unwrap(),
        ),
    ]
});

/// Extracts entities from text, de-duplicated by exact matched text with
/// the first kind winning.
pub fn extract_entities(text: &str) -> Vec<Entity> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut entities: Vec<Entity> = Vec::new();

    for (kind, pattern) in ENTITY_PATTERNS.iter() {
        for found in pattern.find_iter(text) {
            let matched = found.as_str().to_string();
            if seen.insert(matched.clone()) {
                entities.push(Entity {
                    text: matched,
                    kind: *kind,
                });
            }
        }
    }

    entities
}

/// Extracts contact information (emails, phone numbers, street addresses)
/// from text.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    let mut info = ContactInfo::default();

    for (kind, pattern) in ENTITY_PATTERNS.iter() {
        let bucket = match kind {
            EntityKind::Email => &mut info.emails,
            EntityKind::Phone => &mut info.phones,
            EntityKind::Address => &mut info.addresses,
            _ => continue,
        };
        for found in pattern.find_iter(text) {
            bucket.push(found.as_str().to_string());
        }
    }

    info
}
