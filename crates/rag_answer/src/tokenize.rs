//! Bracket tokenizer.
//!
//! Splits answer text into literal runs and bracket interiors ("candidates").
//! Groups are single-level: a candidate runs from a `[` to the next `]`, may
//! contain `[`, never contains `]`, and is never empty (`[]` stays literal).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    /// Interior of a bracket pair, brackets excluded.
    Candidate(&'a str),
}

/// Tokenize `text` into `Literal (Candidate Literal)*`.
///
/// Literal segments may be empty so that the alternation always holds; the
/// result therefore always has an odd length.
pub fn tokenize(text: &str) -> Vec<Segment<'_>> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut literal_start = 0usize;
    let mut i = 0usize;

    while let Some(open_off) = bytes[i..].iter().position(|&b| b == b'[') {
        let open = i + open_off;
        let Some(close_off) = bytes[open + 1..].iter().position(|&b| b == b']') else {
            // No `]` anywhere after this point, so no later `[` can close either.
            break;
        };
        let close = open + 1 + close_off;
        if close == open + 1 {
            // `[]`: not a candidate; resume scanning at the `]`.
            i = close;
            continue;
        }
        out.push(Segment::Literal(&text[literal_start..open]));
        out.push(Segment::Candidate(&text[open + 1..close]));
        literal_start = close + 1;
        i = literal_start;
    }

    out.push(Segment::Literal(&text[literal_start..]));
    out
}
