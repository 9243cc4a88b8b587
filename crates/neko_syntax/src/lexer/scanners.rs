//! Character-class scanners, one per token shape.
//!
//! Every scanner takes the source bytes and a start offset and returns the exclusive end of the longest match
//! (or `None` when the shape does not start there). Scanners never allocate and never look behind `pos`.
//! All token shapes are ASCII-only, so scanning bytes is exact: a non-ASCII byte simply matches nothing.

/// `[a-zA-Z_]`: first character of a variable name.
pub(crate) fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// `[a-zA-Z0-9_]`: rest of a variable name.
pub(crate) fn is_name_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// `[a-zA-Z]`: first character of an identifier or keyword.
pub(crate) fn is_word_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// `[a-zA-Z0-9_-]`: rest of an identifier or keyword.
pub(crate) fn is_word_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

fn scan_while(bytes: &[u8], mut pos: usize, pred: impl Fn(u8) -> bool) -> usize {
    while pos < bytes.len() && pred(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// `\s` in the ASCII range: space, `\t`, `\n`, vertical tab, form feed and `\r`.
pub(crate) fn is_whitespace(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

/// Skip a run of whitespace (including newlines).
pub(crate) fn skip_whitespace(bytes: &[u8], pos: usize) -> usize {
    scan_while(bytes, pos, is_whitespace)
}

/// `[a-zA-Z_][a-zA-Z0-9_]*`
pub(crate) fn scan_name(bytes: &[u8], pos: usize) -> Option<usize> {
    match bytes.get(pos) {
        Some(&b) if is_name_start(b) => Some(scan_while(bytes, pos + 1, is_name_continue)),
        _ => None,
    }
}

/// `[a-zA-Z][a-zA-Z0-9_-]*`
pub(crate) fn scan_word(bytes: &[u8], pos: usize) -> Option<usize> {
    match bytes.get(pos) {
        Some(&b) if is_word_start(b) => Some(scan_while(bytes, pos + 1, is_word_continue)),
        _ => None,
    }
}

/// `\d+(\.\d+)?`; the `.` is only taken when a digit follows it.
pub(crate) fn scan_number(bytes: &[u8], pos: usize) -> Option<usize> {
    if !bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        return None;
    }
    let end = scan_while(bytes, pos, |b| b.is_ascii_digit());
    if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
        return Some(scan_while(bytes, end + 1, |b| b.is_ascii_digit()));
    }
    Some(end)
}

/// `'[^']*'`; may span lines.
pub(crate) fn scan_string(bytes: &[u8], pos: usize) -> Option<usize> {
    if bytes.get(pos) != Some(&b'\'') {
        return None;
    }
    let close = bytes[pos + 1..].iter().position(|&b| b == b'\'')?;
    Some(pos + 1 + close + 1)
}

/// `~` up to (not including) the newline. Trailing `\r`s are left out.
pub(crate) fn scan_comment(bytes: &[u8], pos: usize) -> Option<usize> {
    if bytes.get(pos) != Some(&b'~') {
        return None;
    }
    let mut end = scan_while(bytes, pos + 1, |b| b != b'\n');
    while end > pos + 1 && bytes[end - 1] == b'\r' {
        end -= 1;
    }
    Some(end)
}

/// Exact literal match.
pub(crate) fn scan_literal(bytes: &[u8], pos: usize, literal: &str) -> Option<usize> {
    bytes
        .get(pos..)
        .filter(|rest| rest.starts_with(literal.as_bytes()))
        .map(|_| pos + literal.len())
}

/// Offset of the next `\n` at or after `pos`, or the end of input.
pub(crate) fn line_end(bytes: &[u8], pos: usize) -> usize {
    scan_while(bytes, pos, |b| b != b'\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_takes_fraction_only_with_digits() {
        assert_eq!(scan_number(b"3.14 x", 0), Some(4));
        assert_eq!(scan_number(b"5.", 0), Some(1));
        assert_eq!(scan_number(b"5.x", 0), Some(1));
        assert_eq!(scan_number(b"1.2.3", 0), Some(3));
        assert_eq!(scan_number(b".5", 0), None);
    }

    #[test]
    fn names_and_words_differ_on_underscore_and_hyphen() {
        assert_eq!(scan_name(b"_a-b", 0), Some(2));
        assert_eq!(scan_word(b"_a-b", 0), None);
        assert_eq!(scan_word(b"a-b_c d", 0), Some(5));
    }

    #[test]
    fn string_requires_closing_quote() {
        assert_eq!(scan_string(b"'hi' x", 0), Some(4));
        assert_eq!(scan_string(b"''", 0), Some(2));
        assert_eq!(scan_string(b"'a\nb'", 0), Some(5));
        assert_eq!(scan_string(b"'open", 0), None);
    }

    #[test]
    fn comment_stops_before_newline_and_carriage_return() {
        assert_eq!(scan_comment(b"~ hi\nnext", 0), Some(4));
        assert_eq!(scan_comment(b"~ hi\r\nnext", 0), Some(4));
        assert_eq!(scan_comment(b"~", 0), Some(1));
        assert_eq!(scan_comment(b"~\r\n", 0), Some(1));
        assert_eq!(scan_comment(b"~a\r\r\nnext", 0), Some(2));
        assert_eq!(scan_comment(b"~a\rb\r", 0), Some(4));
    }

    #[test]
    fn whitespace_includes_vertical_tab_and_form_feed() {
        assert_eq!(skip_whitespace(b" \t\x0b\x0c\r\nx", 0), 6);
        assert_eq!(skip_whitespace(b"x", 0), 0);
    }

    #[test]
    fn literal_match_is_exact() {
        assert_eq!(scan_literal(b"(!)sensitive.", 0, "(!)sensitive"), Some(12));
        assert_eq!(scan_literal(b"(!)sens", 0, "(!)sensitive"), None);
    }
}
