//! Line-terminator counting.
//!
//! Line breaks follow the generic `\R` rule: CRLF is one terminator, and a
//! lone CR, LF, VT, FF, NEL (U+0085), LS (U+2028) or PS (U+2029) is one
//! terminator each. Counting runs over raw bytes so it can be applied to
//! spans that were cut at an arbitrary byte offset.

use memchr::memchr3_iter;

/// Count line terminators in `bytes`.
///
/// A CR at the very end of `bytes` counts as a terminator on its own, even
/// if the byte after the slice is an LF.
pub fn count_line_breaks(bytes: &[u8]) -> usize {
    if bytes.is_ascii() {
        return count_ascii(bytes);
    }

    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                count += 1;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            b'\n' | 0x0B | 0x0C => count += 1,
            // NEL
            0xC2 if bytes.get(i + 1) == Some(&0x85) => {
                count += 1;
                i += 1;
            }
            // LS, PS
            0xE2 if bytes.get(i + 1) == Some(&0x80)
                && matches!(bytes.get(i + 2), Some(&0xA8) | Some(&0xA9)) =>
            {
                count += 1;
                i += 2;
            }
            _ => {}
        }
        i += 1;
    }
    count
}

/// Fast path for pure-ASCII spans, which is nearly every ADI document.
fn count_ascii(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut prev_cr = None;
    for pos in memchr3_iter(b'\r', b'\n', 0x0B, bytes) {
        // LF directly after a CR belongs to that CR
        if bytes[pos] == b'\n' && prev_cr == Some(pos.wrapping_sub(1)) {
            continue;
        }
        if bytes[pos] == b'\r' {
            prev_cr = Some(pos);
        }
        count += 1;
    }
    count + memchr::memchr_iter(0x0C, bytes).count()
}
