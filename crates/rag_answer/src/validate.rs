//! Citation validation: does a bracket candidate name a known source?

use std::sync::OnceLock;

use regex::Regex;

/// `name.ext` or `name.ext#fragment`, anchored at the end only.
fn citation_shape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r".+\.[A-Za-z0-9_]+(?:#\S*)?$").expect("citation shape regex must compile")
    })
}

/// `name.ext` followed by a trailing `#fragment`; group 1 is the `name.ext` base.
fn fragment_base_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)^(.+\.[A-Za-z0-9_]+)#\S*$").expect("fragment base regex must compile")
    })
}

/// Structural check only; no data points consulted.
pub fn looks_like_citation(candidate: &str) -> bool {
    citation_shape_re().is_match(candidate)
}

/// Why a candidate was left as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NoDataPoints,
    Malformed,
    UnknownSource,
}

/// `Ok(())` when `candidate` is a citation of one of `data_points`.
pub fn check_citation(candidate: &str, data_points: &[String]) -> Result<(), Rejection> {
    if data_points.is_empty() {
        return Err(Rejection::NoDataPoints);
    }
    if !looks_like_citation(candidate) {
        return Err(Rejection::Malformed);
    }
    match_data_point(candidate, data_points)
        .map(|_| ())
        .ok_or(Rejection::UnknownSource)
}

pub fn is_valid_citation(candidate: &str, data_points: &[String]) -> bool {
    check_citation(candidate, data_points).is_ok()
}

/// First data point the citation refers to.
///
/// A data point matches when it starts with the whole citation. Failing that, a
/// citation of the form `name.ext#fragment` matches a data point that starts
/// with `name.ext`. A `#` that is not preceded by `name.ext` is part of the name.
pub(crate) fn match_data_point<'d>(citation: &str, data_points: &'d [String]) -> Option<&'d str> {
    if citation.is_empty() {
        return None;
    }
    if let Some(dp) = data_points.iter().find(|dp| dp.starts_with(citation)) {
        return Some(dp.as_str());
    }
    let base = fragment_base_re().captures(citation)?.get(1)?.as_str();
    data_points
        .iter()
        .find(|dp| dp.starts_with(base))
        .map(String::as_str)
}
