//! Content line lexer for iCalendar (RFC 5545 §3.1).

/// Unfolds content lines by removing CRLF sequences followed by whitespace.
///
/// Per RFC 5545 §3.1:
/// - Lines are folded by inserting CRLF followed by whitespace (SPACE or HTAB)
/// - Unfolding removes the CRLF and the single whitespace character
///
/// Works on bytes and only ever removes ASCII, so multi-byte characters pass
/// through intact. Bare LF is normalized to CRLF for lenient parsing.
#[must_use]
pub fn unfold(input: &str) -> String {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut result: Vec<u8> = Vec::with_capacity(len);
    let mut i = 0;

    while i < len {
        if bytes[i] == b'\r' && i + 1 < len && bytes[i + 1] == b'\n' {
            if i + 2 < len && (bytes[i + 2] == b' ' || bytes[i + 2] == b'\t') {
                // Fold: skip CRLF and the whitespace
                i += 3;
            } else {
                result.extend_from_slice(b"\r\n");
                i += 2;
            }
        } else if bytes[i] == b'\n' {
            // Bare LF (lenient)
            if i + 1 < len && (bytes[i + 1] == b' ' || bytes[i + 1] == b'\t') {
                i += 2;
            } else {
                result.extend_from_slice(b"\r\n");
                i += 1;
            }
        } else {
            result.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8_lossy(&result).into_owned()
}

/// Splits a document into unfolded logical lines, dropping empty ones.
#[must_use]
pub fn split_lines(input: &str) -> Vec<String> {
    unfold(input)
        .split("\r\n")
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a logical line into its name-and-parameters part and its value.
///
/// The separator is the first colon outside a quoted parameter value.
/// Returns `None` if the line has no such colon.
#[must_use]
pub fn split_content_line(line: &str) -> Option<(&str, &str)> {
    let mut in_quotes = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some((&line[..i], &line[i + 1..])),
            _ => {}
        }
    }
    None
}
