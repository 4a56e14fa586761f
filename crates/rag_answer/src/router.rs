//! Container-scoped routing of clicks on rendered citation links.
//!
//! A `CitationRouter` belongs to one rendered answer. Handlers are attached
//! for as long as the returned `RouterGuard` lives; dropping the guard (on
//! unmount, early return or unwind) detaches the handler. Nothing here is
//! process-global.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use rag_core::config::DEFAULT_LINK_CLASS;

type Handler = Arc<dyn Fn(&str) + Send + Sync>;

/// Attributes of one element on a click path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementInfo {
    pub classes: Vec<String>,
    /// `data-citation` as the DOM reports it, i.e. entity-decoded.
    pub data_citation: Option<String>,
}

impl ElementInfo {
    pub fn new(class_attr: &str) -> Self {
        Self {
            classes: class_attr.split_whitespace().map(str::to_string).collect(),
            data_citation: None,
        }
    }

    pub fn with_data_citation(mut self, citation: impl Into<String>) -> Self {
        self.data_citation = Some(citation.into());
        self
    }

    /// Build from attribute values lifted straight out of markup, decoding entities.
    pub fn from_raw_attributes(class_attr: &str, data_citation: Option<&str>) -> Self {
        Self {
            data_citation: data_citation.map(|raw| html_escape::decode_html_entities(raw).into_owned()),
            ..Self::new(class_attr)
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Clicked element first, then its ancestors up to the container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub path: Vec<ElementInfo>,
}

impl ClickTarget {
    pub fn new(path: Vec<ElementInfo>) -> Self {
        Self { path }
    }

    fn closest(&self, class: &str) -> Option<&ElementInfo> {
        self.path.iter().find(|el| el.has_class(class))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Handlers were called with `citation`.
    Routed { citation: String },
    /// A citation link without a usable `data-citation`.
    EmptyLink,
    /// Not a citation link; let the click through.
    Passthrough,
}

impl ClickOutcome {
    /// Whether the UI should suppress the default link action.
    pub fn prevent_default(&self) -> bool {
        !matches!(self, ClickOutcome::Passthrough)
    }
}

#[derive(Default)]
struct RouterState {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

fn lock(state: &Mutex<RouterState>) -> MutexGuard<'_, RouterState> {
    // Handlers run outside the lock, so a poisoned state is still consistent.
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct CitationRouter {
    link_class: String,
    state: Arc<Mutex<RouterState>>,
}

impl Default for CitationRouter {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_CLASS)
    }
}

impl CitationRouter {
    pub fn new(link_class: impl Into<String>) -> Self {
        Self {
            link_class: link_class.into(),
            state: Arc::new(Mutex::new(RouterState::default())),
        }
    }

    pub fn link_class(&self) -> &str {
        &self.link_class
    }

    #[must_use = "the handler is detached as soon as the guard is dropped"]
    pub fn attach<F>(&self, handler: F) -> RouterGuard
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let mut state = lock(&self.state);
        state.next_id += 1;
        let id = state.next_id;
        state.handlers.push((id, Arc::new(handler)));
        tracing::debug!(id, handlers = state.handlers.len(), "citation handler attached");
        RouterGuard {
            id,
            state: Arc::downgrade(&self.state),
        }
    }

    pub fn handler_count(&self) -> usize {
        lock(&self.state).handlers.len()
    }

    pub fn is_attached(&self) -> bool {
        self.handler_count() > 0
    }

    pub fn dispatch(&self, target: &ClickTarget) -> ClickOutcome {
        let Some(link) = target.closest(&self.link_class) else {
            return ClickOutcome::Passthrough;
        };
        let citation = match link.data_citation.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => return ClickOutcome::EmptyLink,
        };

        // Snapshot so handlers may attach or detach while being called.
        let handlers: Vec<Handler> = lock(&self.state)
            .handlers
            .iter()
            .map(|(_, h)| Arc::clone(h))
            .collect();
        tracing::trace!(citation, handlers = handlers.len(), "routing citation click");
        for handler in handlers {
            handler(citation);
        }

        ClickOutcome::Routed {
            citation: citation.to_string(),
        }
    }
}

/// Keeps one handler attached. Dropping it detaches the handler.
pub struct RouterGuard {
    id: u64,
    state: Weak<Mutex<RouterState>>,
}

impl RouterGuard {
    /// Explicit unmount; same as dropping.
    pub fn detach(self) {}
}

impl Drop for RouterGuard {
    fn drop(&mut self) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let mut state = lock(&state);
        state.handlers.retain(|(id, _)| *id != self.id);
        tracing::debug!(id = self.id, handlers = state.handlers.len(), "citation handler detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(citation: &str) -> ElementInfo {
        ElementInfo::new("citation-link").with_data_citation(citation)
    }

    #[test]
    fn routes_closest_link_from_inner_superscript() {
        let router = CitationRouter::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _guard = router.attach(move |c| sink.lock().expect("lock").push(c.to_string()));

        let target = ClickTarget::new(vec![ElementInfo::new(""), link("a.pdf"), ElementInfo::new("answer")]);
        let outcome = router.dispatch(&target);

        assert_eq!(outcome, ClickOutcome::Routed { citation: "a.pdf".to_string() });
        assert!(outcome.prevent_default());
        assert_eq!(*seen.lock().expect("lock"), vec!["a.pdf".to_string()]);
    }

    #[test]
    fn non_citation_clicks_pass_through() {
        let router = CitationRouter::default();
        let outcome = router.dispatch(&ClickTarget::new(vec![ElementInfo::new("btn primary")]));
        assert_eq!(outcome, ClickOutcome::Passthrough);
        assert!(!outcome.prevent_default());
    }

    #[test]
    fn link_without_citation_is_swallowed() {
        let router = CitationRouter::default();
        let outcome = router.dispatch(&ClickTarget::new(vec![ElementInfo::new("citation-link")]));
        assert_eq!(outcome, ClickOutcome::EmptyLink);
        assert!(outcome.prevent_default());
    }

    #[test]
    fn raw_attributes_are_decoded() {
        let el = ElementInfo::from_raw_attributes("citation-link", Some("x&quot;.pdf"));
        assert_eq!(el.data_citation.as_deref(), Some("x\".pdf"));
    }
}
