//! Content line folding for iCalendar (RFC 5545 §3.1).

/// Maximum physical line length in octets, counting the CRLF terminator.
pub const MAX_LINE_OCTETS: usize = 75;

/// Terminator written after every physical line.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Leading whitespace marking a continuation line.
const FOLD_INDICATOR: char = ' ';

/// Content octets available on a physical line once the terminator is accounted for.
const CONTENT_OCTETS: usize = MAX_LINE_OCTETS - LINE_TERMINATOR.len();

/// Folds a content line to comply with the 75-octet limit.
///
/// Fragments are joined by CRLF followed by a single space; the caller writes
/// the final terminator. Split points never fall inside a UTF-8 sequence.
#[must_use]
pub fn fold_line(line: &str) -> String {
    let bytes = line.as_bytes();

    if bytes.len() <= CONTENT_OCTETS {
        return line.to_string();
    }

    let mut result =
        String::with_capacity(bytes.len() + (bytes.len() / (CONTENT_OCTETS - 1) + 1) * 3);
    let mut pos = 0;

    while pos < bytes.len() {
        // Continuation lines lose one octet to the fold indicator
        let max_len = if pos == 0 {
            CONTENT_OCTETS
        } else {
            CONTENT_OCTETS - FOLD_INDICATOR.len_utf8()
        };

        let mut end = (pos + max_len).min(bytes.len());

        // Back up if we're in the middle of a UTF-8 character
        while end > pos && !is_char_boundary(bytes, end) {
            end -= 1;
        }

        if end == pos {
            // Unreachable for UTF-8 (4 octets max) but keeps the loop total
            end = pos + 1;
            while end < bytes.len() && !is_char_boundary(bytes, end) {
                end += 1;
            }
        }

        if pos > 0 {
            result.push_str(LINE_TERMINATOR);
            result.push(FOLD_INDICATOR);
        }
        result.push_str(&line[pos..end]);

        pos = end;
    }

    result
}

/// Checks if the given position is a valid UTF-8 character boundary.
fn is_char_boundary(bytes: &[u8], pos: usize) -> bool {
    if pos >= bytes.len() {
        return true;
    }
    // UTF-8 continuation bytes start with 10xxxxxx
    (bytes[pos] & 0b1100_0000) != 0b1000_0000
}
