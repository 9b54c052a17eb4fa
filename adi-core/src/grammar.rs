//! Tag grammar for ADI data-specifiers.
//!
//! A tag has the shape `<field-name[:length[:type]]>`:
//!
//! ```text
//! tag         = "<" field-name [ ":" length [ ":" type ] ] ">"
//! field-name  = edge-char [ *name-char edge-char ]
//! name-char   = %x20-7E except "," ":" "<" ">" "{" "}"
//! edge-char   = name-char except " "
//! length      = 1*DIGIT
//! type        = ALPHA
//! ```
//!
//! Everything here is a pure function of the input slice. The grammar only
//! ever looks at ASCII bytes, so every span it reports starts and ends on a
//! UTF-8 character boundary of the input.

use memchr::memchr_iter;
use std::ops::Range;

/// A single matched tag, without any surrounding text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Field name between `<` and the first `:` or `>`.
    pub field_name: &'a str,
    /// Declared payload length in bytes, if the tag has a `:length` suffix.
    pub length: Option<usize>,
    /// Data type indicator, if the tag has a `:length:type` suffix.
    pub data_type: Option<char>,
}

/// The earliest tag in a buffer together with the text that precedes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch<'a> {
    /// Bytes before the `<`. May be empty and may contain anything,
    /// including `<` characters that did not start a valid tag.
    pub comment: &'a [u8],
    pub tag: Tag<'a>,
    /// Byte range of the tag itself, from `<` through `>`.
    pub tag_span: Range<usize>,
}

impl<'a> TagMatch<'a> {
    /// Number of bytes consumed by this match: comment plus tag.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.tag_span.end
    }
}

/// Any character allowed inside a field name.
#[inline]
pub fn is_field_name_char(b: u8) -> bool {
    matches!(b, 0x20..=0x7E) && !matches!(b, b',' | b':' | b'<' | b'>' | b'{' | b'}')
}

/// Characters allowed as the first and last character of a field name.
#[inline]
pub fn is_field_name_edge_char(b: u8) -> bool {
    b != b' ' && is_field_name_char(b)
}

/// Find the earliest tag anywhere in `input`.
///
/// Candidate positions are the `<` bytes, tried left to right; the first
/// one that begins a well-formed tag wins. Returns `None` if no position
/// does.
pub fn find_tag(input: &[u8]) -> Option<TagMatch<'_>> {
    memchr_iter(b'<', input).find_map(|start| {
        match_tag_at(input, start).map(|(tag, end)| TagMatch {
            comment: &input[..start],
            tag,
            tag_span: start..end,
        })
    })
}

/// Match a tag anchored at `start`, which must index a `<`.
///
/// Returns the tag and the byte offset just past its closing `>`.
pub fn match_tag_at(input: &[u8], start: usize) -> Option<(Tag<'_>, usize)> {
    if input.get(start) != Some(&b'<') {
        return None;
    }

    // Field name: the longest run of name characters. Name characters
    // exclude ':' and '>', so a shorter name could never be followed by
    // either and the run is the only candidate.
    let name_start = start + 1;
    let name_end = name_start
        + input[name_start..]
            .iter()
            .take_while(|&&b| is_field_name_char(b))
            .count();
    if name_end == name_start
        || !is_field_name_edge_char(input[name_start])
        || !is_field_name_edge_char(input[name_end - 1])
    {
        return None;
    }

    let mut pos = name_end;
    let mut length = None;
    let mut data_type = None;

    if input.get(pos) == Some(&b':') {
        pos += 1;
        let digits_end = pos + input[pos..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits_end == pos {
            return None;
        }
        length = Some(parse_length(&input[pos..digits_end])?);
        pos = digits_end;

        if input.get(pos) == Some(&b':') {
            match input.get(pos + 1) {
                Some(&b) if b.is_ascii_alphabetic() => {
                    data_type = Some(b as char);
                    pos += 2;
                }
                _ => return None,
            }
        }
    }

    if input.get(pos) != Some(&b'>') {
        return None;
    }

    // Name bytes are all printable ASCII.
    let field_name = std::str::from_utf8(&input[name_start..name_end]).ok()?;
    Some((
        Tag {
            field_name,
            length,
            data_type,
        },
        pos + 1,
    ))
}

/// Largest declared length a tag may carry. Lengths are signed 64-bit
/// values in ADIF tooling, so anything above `i64::MAX` is not a tag.
pub const MAX_LENGTH: u64 = i64::MAX as u64;

/// Decimal digits to a length; `None` above [`MAX_LENGTH`].
fn parse_length(digits: &[u8]) -> Option<usize> {
    let value = digits.iter().try_fold(0u64, |acc, &d| {
        acc.checked_mul(10)?.checked_add(u64::from(d - b'0'))
    })?;
    if value > MAX_LENGTH {
        return None;
    }
    usize::try_from(value).ok()
}
