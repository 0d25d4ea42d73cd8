//! Fallback splitter for oversized atomic text.
//!
//! Used only when a childless node's text already exceeds the fragment
//! limit and there is no structure left to guide the cut. The split aims
//! for a whitespace boundary near the midpoint; the ±[`MARGIN`] window
//! tolerates boundary scarcity around the middle of dense text.

/// Search window, in characters, around the textual midpoint.
pub const MARGIN: usize = 200;

/// Split `text` into two halves at whitespace boundaries near the midpoint.
///
/// The left half ends at the last whitespace at or before `mid + MARGIN`;
/// the right half starts just after the first whitespace at or after
/// `mid - MARGIN`. If either boundary is missing, or a boundary cut would
/// not shrink the input (so recursive reapplication could loop), the text
/// is split hard at the midpoint with no regard to word boundaries.
///
/// Callers re-apply this recursively while a half still exceeds the limit.
pub fn split_in_half(text: &str) -> (String, String) {
    let mid = text.len() / 2;

    let left_window_end = floor_char_boundary(text, (mid + MARGIN).min(text.len()));
    let right_window_start = floor_char_boundary(text, mid.saturating_sub(MARGIN));

    let left_cut = text[..left_window_end].rfind(char::is_whitespace);
    let right_ws = text[right_window_start..]
        .find(char::is_whitespace)
        .map(|i| right_window_start + i);

    match (left_cut, right_ws) {
        (Some(a), Some(b)) => {
            // Step over the boundary character itself; whitespace is not
            // always one byte.
            let after = b + text[b..].chars().next().map_or(1, char::len_utf8);
            if a > 0 && after < text.len() {
                (text[..a].to_string(), text[after..].to_string())
            } else {
                hard_split(text, mid)
            }
        }
        _ => hard_split(text, mid),
    }
}

fn hard_split(text: &str, mid: usize) -> (String, String) {
    let mut cut = floor_char_boundary(text, mid);
    // Flooring into the first character would leave the left half empty
    // and the right half unchanged; step over that character instead.
    if cut == 0 {
        cut = text.chars().next().map_or(0, char::len_utf8);
    }
    (text[..cut].to_string(), text[cut..].to_string())
}

// str::floor_char_boundary is unstable; this is the stable equivalent.
fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_whitespace_near_midpoint() {
        let words = vec!["word"; 200].join(" ");
        let (left, right) = split_in_half(&words);

        assert!(!left.is_empty() && !right.is_empty());
        assert!(!left.ends_with(char::is_whitespace));
        // Both halves land in the midpoint window.
        let mid = words.len() / 2;
        assert!(left.len() <= mid + MARGIN);
        assert!(words.len() - right.len() >= mid - MARGIN);
    }

    #[test]
    fn hard_split_without_any_whitespace() {
        let text = "x".repeat(1001);
        let (left, right) = split_in_half(&text);

        assert_eq!(left.len(), 500);
        assert_eq!(right.len(), 501);
        assert_eq!(format!("{left}{right}"), text);
    }

    #[test]
    fn midpoint_inside_a_wide_char_still_cuts() {
        // A single multibyte char: the midpoint floors to 0, so the cut
        // must step over the char instead of returning the input intact.
        let (left, right) = split_in_half("\u{1F642}");
        assert_eq!(left, "\u{1F642}");
        assert!(right.is_empty());

        let (left, right) = split_in_half("\u{1F642}\u{1F642}");
        assert_eq!(left, "\u{1F642}");
        assert_eq!(right, "\u{1F642}");
    }

    #[test]
    fn halves_always_shrink() {
        // Degenerate inputs must still make progress so the slicer's
        // recursive reapplication terminates.
        for text in [" ".repeat(600), format!("a{}", " ".repeat(600))] {
            let (left, right) = split_in_half(&text);
            assert!(left.len() < text.len());
            assert!(right.len() < text.len());
        }
    }
}
