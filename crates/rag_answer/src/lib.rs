//! Citation-aware rendering of assistant answers.
//!
//! `parse_answer` turns raw answer text plus the retrieval data points into
//! markup where every recognised `[source.ext]` reference becomes a numbered
//! link, and returns the cited sources in first-seen order. The pipeline is
//! truncate (streaming only), tokenize, validate, register, emit.

pub mod markup;
pub mod parser;
pub mod registry;
pub mod router;
pub mod stream;
pub mod supporting;
pub mod tokenize;
pub mod validate;

pub use markup::plain_text;
pub use parser::{parse_answer, AnswerParser, ParsedAnswer};
pub use router::{CitationRouter, ClickOutcome, ClickTarget, ElementInfo, RouterGuard};
pub use supporting::{resolve_citation, SupportingContent};
pub use validate::is_valid_citation;
