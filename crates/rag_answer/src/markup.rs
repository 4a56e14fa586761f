//! Citation link markup and its inverse for clipboard text.

use std::sync::OnceLock;

use regex::Regex;

/// Append the inline reference for `citation` at `index`:
///
/// `<a class="{link_class}" title="{citation}" data-citation="{citation}"><sup>{index}</sup></a>`
///
/// The citation is attribute-escaped; `link_class` is expected to be a plain
/// class token (see `ParserConfig::validate`).
pub fn push_citation_link(out: &mut String, link_class: &str, citation: &str, index: usize) {
    let attr = html_escape::encode_double_quoted_attribute(citation);
    out.push_str(&format!(
        r#"<a class="{link_class}" title="{attr}" data-citation="{attr}"><sup>{index}</sup></a>"#
    ));
}

pub fn citation_link(link_class: &str, citation: &str, index: usize) -> String {
    let mut out = String::new();
    push_citation_link(&mut out, link_class, citation, index);
    out
}

/// Re-wrap a rejected candidate exactly as it was typed.
pub fn push_literal_candidate(out: &mut String, candidate: &str) {
    out.push('[');
    out.push_str(candidate);
    out.push(']');
}

fn strip_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"<a [^>]*><sup>\d+</sup></a>|<[^>]+>").expect("markup strip regex must compile")
    })
}

/// Text for "copy response": citation links vanish entirely (their index
/// numbers included) and every other tag is dropped.
pub fn plain_text(markup: &str) -> String {
    strip_re().replace_all(markup, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn emits_marker_title_data_and_superscript() {
        assert_eq!(
            citation_link("citation-link", "a.pdf#p1", 3),
            r#"<a class="citation-link" title="a.pdf#p1" data-citation="a.pdf#p1"><sup>3</sup></a>"#
        );
    }

    #[test]
    fn citation_cannot_break_out_of_attribute() {
        let link = citation_link("citation-link", r#"x".pdf"#, 1);
        assert!(link.contains(r#"title="x&quot;.pdf""#), "{link}");
        assert!(!link.contains(r#"x".pdf"#));
    }

    #[test]
    fn literal_candidate_round_trips() {
        let mut out = String::from("a ");
        push_literal_candidate(&mut out, "not-a-citation");
        assert_eq!(out, "a [not-a-citation]");
    }

    #[test]
    fn plain_text_drops_links_and_tags() {
        let markup = format!(
            "<p>See {} and [draft]</p>",
            citation_link("citation-link", "a.pdf", 1)
        );
        assert_eq!(plain_text(&markup), "See  and [draft]");
    }

    #[test]
    fn plain_text_keeps_text_without_tags() {
        assert_eq!(plain_text("1 < 2 and [x]"), "1 < 2 and [x]");
    }
}
