//! URL handling module
//!
//! This module canonicalizes links discovered during a crawl and provides
//! domain helpers used for same-domain scoping and per-domain politeness
//! bookkeeping.

mod domain;
mod normalize;

pub use domain::{extract_domain, is_same_domain};
pub use normalize::normalize_link;
