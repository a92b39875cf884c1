//! Brace balancing for the `balanced` boundary strategy.
//!
//! String literals (`'`, `"`, and backtick templates) and comments are
//! skipped. Template substitutions (`${...}`) are treated as part of the
//! literal, and regex literals are not recognized.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    Literal(u8),
    LineComment,
    BlockComment,
}

/// Byte offset of the `}` matching the `{` at `open`, if any.
///
/// All delimiters are ASCII, so scanning bytes never lands inside a multi-byte
/// character.
pub(crate) fn matching_brace(source: &str, open: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    let mut state = State::Code;
    let mut i = open;
    while i < bytes.len() {
        let b = bytes[i];
        match state {
            State::Code => match b {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                b'\'' | b'"' | b'`' => state = State::Literal(b),
                b'/' if bytes.get(i + 1) == Some(&b'/') => {
                    state = State::LineComment;
                    i += 1;
                }
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    state = State::BlockComment;
                    i += 1;
                }
                _ => {}
            },
            State::Literal(quote) => {
                if b == b'\\' {
                    i += 1;
                } else if b == quote {
                    state = State::Code;
                }
            }
            State::LineComment => {
                if b == b'\n' {
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if b == b'*' && bytes.get(i + 1) == Some(&b'/') {
                    state = State::Code;
                    i += 1;
                }
            }
        }
        i += 1;
    }
    None
}
