use serde::{Deserialize, Serialize};

use crate::validate::match_data_point;

/// A data point split for display as `title` over `content`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupportingContent {
    pub title: String,
    pub content: String,
}

impl SupportingContent {
    /// Split `"title: body"` at the first `": "`. Later separators stay in the body.
    pub fn parse(item: &str) -> Self {
        match item.split_once(": ") {
            Some((title, content)) => Self {
                title: title.to_string(),
                content: content.to_string(),
            },
            None => Self {
                title: item.to_string(),
                content: String::new(),
            },
        }
    }
}

pub fn parse_supporting_contents(data_points: &[String]) -> Vec<SupportingContent> {
    data_points.iter().map(|dp| SupportingContent::parse(dp)).collect()
}

/// Map a clicked citation back to the data point it was validated against.
pub fn resolve_citation<'d>(citation: &str, data_points: &'d [String]) -> Option<&'d str> {
    match_data_point(citation, data_points)
}
