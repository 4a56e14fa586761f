use std::collections::HashMap;

/// Per-parse registry of valid citations in first-seen order.
///
/// Indices are 1-based and stable for the lifetime of the registry: a
/// citation seen again gets the index it was first given.
#[derive(Debug, Default, Clone)]
pub struct CitationRegistry {
    ordered: Vec<String>,
    index: HashMap<String, usize>,
}

impl CitationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index_of_or_insert(&mut self, citation: &str) -> usize {
        if let Some(&idx) = self.index.get(citation) {
            return idx;
        }
        self.ordered.push(citation.to_string());
        let idx = self.ordered.len();
        self.index.insert(citation.to_string(), idx);
        idx
    }

    pub fn into_citations(self) -> Vec<String> {
        self.ordered
    }
}
