//! Extraction strategies
//!
//! Each strategy is a pure function `(html) -> Option<String>` that either
//! produces candidate text or reports nothing usable. The pipeline in the
//! parent module runs them in a fixed priority order with a per-strategy
//! quality gate; strategies never panic and never touch the network.

use ego_tree::NodeRef;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose subtrees never carry main content
const BOILERPLATE_TAGS: &[&str] = &["script", "style", "nav", "footer", "header", "aside"];

/// Containers commonly used to wrap a page's main content, checked by the
/// structural fallback in this order of discovery (largest text wins)
const CONTENT_SELECTORS: &str = "article, main, #content, .content, #main, .main, .post, .article, .page-content, .entry-content, .post-content";

/// Minimum length for a block of text to count as prose in the
/// precision-oriented strategies
const MIN_BLOCK_LEN: usize = 25;

static SCRIPT_STYLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(script|style)[^>]*>.*?</(script|style)>").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Precision-oriented extraction tuned for article-like pages.
///
/// Collects text-bearing block elements, keeping only blocks long enough to
/// be prose and not dominated by link text (navigation lists and footers are
/// mostly links).
pub fn dense_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let block_sel = Selector::parse("p, blockquote, pre, td").ok()?;
    let anchor_sel = Selector::parse("a").ok()?;

    let mut parts: Vec<String> = Vec::new();
    for block in document.select(&block_sel) {
        let text = squashed_text(block);
        if text.len() < MIN_BLOCK_LEN {
            continue;
        }

        let link_len: usize = block
            .select(&anchor_sel)
            .map(|a| a.text().map(str::len).sum::<usize>())
            .sum();
        if link_len * 2 > text.len() {
            continue;
        }

        parts.push(text);
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Readability-style main-content extraction.
///
/// Scores candidate containers by the prose paragraphs they hold (length and
/// comma count, the classic readability signals), penalizes link-heavy
/// containers, and renders the best-scoring subtree to plain text with
/// boilerplate subtrees skipped. Ties go to the tighter container.
pub fn readability(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let container_sel = Selector::parse("article, main, section, div, body").ok()?;
    let p_sel = Selector::parse("p").ok()?;
    let anchor_sel = Selector::parse("a").ok()?;

    let mut best: Option<(f64, String)> = None;
    for container in document.select(&container_sel) {
        let mut score = 0.0;
        for p in container.select(&p_sel) {
            let text = squashed_text(p);
            if text.len() < MIN_BLOCK_LEN {
                continue;
            }
            score += 1.0 + (text.len().min(300) as f64) / 100.0 + text.matches(',').count() as f64;
        }
        if score <= 0.0 {
            continue;
        }

        let link_len: usize = container
            .select(&anchor_sel)
            .map(|a| a.text().map(str::len).sum::<usize>())
            .sum();
        score -= link_len as f64 / 100.0;
        if score <= 0.0 {
            continue;
        }

        let text = clean_element_text(container);
        let replace = match &best {
            None => true,
            Some((best_score, best_text)) => {
                score > *best_score || (score == *best_score && text.len() < best_text.len())
            }
        };
        if replace {
            best = Some((score, text));
        }
    }

    best.map(|(_, text)| text)
}

/// Article-metadata-based extraction: `<article>` bodies plus description
/// metadata from the document head.
pub fn article_metadata(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let mut parts: Vec<String> = Vec::new();

    if let Ok(sel) = Selector::parse("article") {
        for article in document.select(&sel) {
            let text = clean_element_text(article);
            if !text.is_empty() {
                parts.push(text);
            }
        }
    }

    for meta in ["meta[name='description']", "meta[property='og:description']"] {
        if let Ok(sel) = Selector::parse(meta) {
            for element in document.select(&sel) {
                if let Some(content) = element.value().attr("content") {
                    let content = content.trim();
                    if !content.is_empty() {
                        parts.push(content.to_string());
                    }
                }
            }
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Structural fallback: with boilerplate subtrees removed, take the largest
/// known content container by text length; failing that, join every
/// paragraph; failing that, the body's full text.
pub fn structural(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let content_sel = Selector::parse(CONTENT_SELECTORS).ok()?;
    let mut largest: Option<String> = None;
    for container in document.select(&content_sel) {
        let text = clean_element_text(container);
        if largest.as_ref().map_or(true, |best| text.len() > best.len()) {
            largest = Some(text);
        }
    }
    if let Some(text) = largest {
        if !text.is_empty() {
            return Some(text);
        }
    }

    let p_sel = Selector::parse("p").ok()?;
    let paragraphs: Vec<String> = document
        .select(&p_sel)
        .map(squashed_text)
        .filter(|text| !text.is_empty())
        .collect();
    if !paragraphs.is_empty() {
        return Some(paragraphs.join(" "));
    }

    let body_sel = Selector::parse("body").ok()?;
    document
        .select(&body_sel)
        .next()
        .map(clean_element_text)
        .filter(|text| !text.is_empty())
}

/// Markup-stripping fallback: delete script/style blocks, then every tag,
/// then collapse whitespace. Works even on markup too broken for the DOM
/// strategies.
pub fn strip_tags(html: &str) -> Option<String> {
    let without_scripts = SCRIPT_STYLE_RE.replace_all(html, " ");
    let without_tags = TAG_RE.replace_all(&without_scripts, " ");
    let text: String = without_tags.split_whitespace().collect::<Vec<_>>().join(" ");

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Last resort: the page title and every h1, concatenated.
pub fn title_and_headings(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let title = Selector::parse("title")
        .ok()
        .and_then(|sel| document.select(&sel).next().map(squashed_text))
        .unwrap_or_default();

    let h1 = Selector::parse("h1")
        .ok()
        .map(|sel| {
            document
                .select(&sel)
                .map(squashed_text)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();

    if title.is_empty() && h1.is_empty() {
        return None;
    }
    Some(format!("Title: {} {}", title, h1))
}

/// An element's text with whitespace squashed to single spaces.
fn squashed_text(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// An element's text with boilerplate subtrees (script, style, nav, footer,
/// header, aside) skipped entirely.
fn clean_element_text(element: ElementRef) -> String {
    let mut buffer = String::new();
    collect_text(*element, &mut buffer);
    buffer.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(node: NodeRef<Node>, buffer: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => {
                buffer.push_str(&text.text);
                buffer.push(' ');
            }
            Node::Element(element) => {
                if !BOILERPLATE_TAGS.contains(&element.name()) {
                    collect_text(child, buffer);
                }
            }
            _ => {}
        }
    }
}
