use serde::{Deserialize, Serialize};

use crate::error::{codes, AppError};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub content: String,
}

/// Retrieval context returned next to an assistant message.
///
/// Every list is optional on the wire. An absent `data_points` behaves exactly
/// like an empty one when citations are validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_points: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoughts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followup_questions: Option<Vec<String>>,
}

/// Backend chat response as delivered by the query service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub message: ChatMessage,
    #[serde(default)]
    pub context: ChatContext,
}

impl ChatResponse {
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str(raw).map_err(|e| {
            AppError::new(codes::ANSWER_DECODE_FAILED, "Failed to decode chat response")
                .with_details(e.to_string())
        })
    }

    /// Borrowed view used by the parser. `streaming` is true while tokens are still arriving.
    pub fn answer(&self, streaming: bool) -> Answer<'_> {
        Answer {
            content: &self.message.content,
            data_points: self.context.data_points.as_deref(),
            streaming,
        }
    }

    pub fn thoughts(&self) -> &[String] {
        self.context.thoughts.as_deref().unwrap_or_default()
    }

    pub fn followup_questions(&self) -> &[String] {
        self.context.followup_questions.as_deref().unwrap_or_default()
    }

    pub fn has_supporting_content(&self) -> bool {
        self.context
            .data_points
            .as_ref()
            .is_some_and(|dp| !dp.is_empty())
    }
}

/// Input to one parse: the full answer text so far, the known sources, and the
/// streaming flag. Never mutated by parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer<'a> {
    pub content: &'a str,
    pub data_points: Option<&'a [String]>,
    pub streaming: bool,
}

impl<'a> Answer<'a> {
    pub fn new(content: &'a str, data_points: Option<&'a [String]>, streaming: bool) -> Self {
        Self {
            content,
            data_points,
            streaming,
        }
    }

    /// Data points with "absent" folded into "empty".
    pub fn data_points(&self) -> &'a [String] {
        self.data_points.unwrap_or_default()
    }
}
