use rag_core::config::ParserConfig;
use rag_core::model::Answer;
use serde::{Deserialize, Serialize};

use crate::markup::{push_citation_link, push_literal_candidate};
use crate::registry::CitationRegistry;
use crate::stream::truncate_streaming;
use crate::tokenize::{tokenize, Segment};
use crate::validate::check_citation;

/// Renderable answer plus the citations it references, in first-seen order.
///
/// `citations[i]` is rendered with visible index `i + 1`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedAnswer {
    pub markup: String,
    pub citations: Vec<String>,
}

impl ParsedAnswer {
    /// `"1. a.pdf"` style labels for a citation list.
    pub fn citation_labels(&self) -> Vec<String> {
        self.citations
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}. {}", i + 1, c))
            .collect()
    }
}

/// Stateless answer parser. Every call rebuilds the citation registry from the
/// full text, so during streaming pass the whole accumulated answer each time.
#[derive(Debug, Clone, Default)]
pub struct AnswerParser {
    config: ParserConfig,
}

impl AnswerParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn parse(&self, answer: &Answer<'_>) -> ParsedAnswer {
        let content = if self.config.trim_content {
            answer.content.trim()
        } else {
            answer.content
        };
        let visible = truncate_streaming(content, answer.streaming);
        let data_points = answer.data_points();

        let mut registry = CitationRegistry::new();
        let mut markup = String::with_capacity(visible.len());

        for segment in tokenize(visible) {
            match segment {
                Segment::Literal(text) => markup.push_str(text),
                Segment::Candidate(candidate) => match check_citation(candidate, data_points) {
                    Ok(()) => {
                        let index = registry.index_of_or_insert(candidate);
                        push_citation_link(&mut markup, &self.config.link_class, candidate, index);
                    }
                    Err(reason) => {
                        tracing::trace!(candidate, ?reason, "citation candidate left as text");
                        push_literal_candidate(&mut markup, candidate);
                    }
                },
            }
        }

        let citations = registry.into_citations();
        tracing::debug!(
            content_bytes = content.len(),
            hidden_bytes = content.len() - visible.len(),
            streaming = answer.streaming,
            citations = citations.len(),
            "parsed answer"
        );

        ParsedAnswer { markup, citations }
    }
}

/// Parse with the default configuration.
pub fn parse_answer(content: &str, data_points: Option<&[String]>, streaming: bool) -> ParsedAnswer {
    AnswerParser::default().parse(&Answer::new(content, data_points, streaming))
}
