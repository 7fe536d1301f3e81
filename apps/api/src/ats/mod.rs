// Resume ATS analysis.
// Implements: section extraction, keyword matching, category sub-scorers, aggregation.
// The analyzer itself is pure and synchronous; handlers run it via spawn_blocking.

pub mod analyzer;
pub mod catalog;
pub mod handlers;
pub mod keywords;
pub mod patterns;
pub mod prompts;
pub mod recommendations;
pub mod sanitize;
pub mod scorer;
pub mod scorers;
pub mod sections;
