//! Speech body truncation.
//!
//! Lengths are counted in UTF-16 code units so that cut points match the
//! JavaScript-based hosts this output is compared against. A surrogate pair
//! that would straddle the limit is dropped whole.

/// Maximum body length shown, in UTF-16 code units.
pub const BODY_LIMIT: usize = 500;

/// Appended to a body that was cut.
pub const TRUNCATION_MARKER: &str = "...[省略]";

/// Returns `body` unchanged when it fits in `limit` UTF-16 units, otherwise
/// the longest prefix that fits followed by [`TRUNCATION_MARKER`].
#[must_use]
pub fn truncate_body(body: &str, limit: usize) -> String {
    let mut units = 0;
    let mut cut = None;
    for (idx, ch) in body.char_indices() {
        let next = units + ch.len_utf16();
        if next > limit {
            cut = Some(idx);
            break;
        }
        units = next;
    }

    match cut {
        Some(idx) => format!("{}{TRUNCATION_MARKER}", &body[..idx]),
        None => body.to_string(),
    }
}
