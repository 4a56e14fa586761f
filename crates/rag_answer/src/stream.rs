//! Hides a citation that is still being typed while an answer streams in.

/// Returns the renderable prefix of `text`.
///
/// When `streaming` is set and the last bracket character in `text` is an
/// opening `[`, everything from that `[` onward is cut. A trailing `]`, no
/// bracket at all, or `streaming == false` leaves `text` untouched. Only the
/// last bracket character is consulted; depth is not tracked.
pub fn truncate_streaming(text: &str, streaming: bool) -> &str {
    if !streaming {
        return text;
    }
    match text.rfind(['[', ']']) {
        // `[` is one byte, so `idx` is a char boundary.
        Some(idx) if text.as_bytes()[idx] == b'[' => &text[..idx],
        _ => text,
    }
}
