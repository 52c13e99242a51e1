//! Robots.txt compliance
//!
//! Best-effort robots.txt handling: a line-scanning rules parser and a
//! per-domain fetch-once decision cache that fails open on any error.

mod cache;
mod parser;

pub use cache::RobotsCache;
pub use parser::RobotsRules;
