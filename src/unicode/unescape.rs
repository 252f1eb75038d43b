use crate::offset::Adjustment;
use crate::types::UnescapeRule;

/// Codepoints never unescaped for display: zero-width and BiDi-control
/// characters can visually reorder or hide parts of a URL.
fn is_display_banned(c: char) -> bool {
    matches!(
        c,
        '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'
            | '\u{2066}'..='\u{2069}'
            | '\u{FEFF}'
            | '\u{FFFD}'
    )
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decode the "%XX" escape starting at `i`, if there is one.
fn decode_escape(bytes: &[u8], i: usize) -> Option<u8> {
    if bytes.get(i) != Some(&b'%') {
        return None;
    }
    let high = hex_value(*bytes.get(i + 1)?)?;
    let low = hex_value(*bytes.get(i + 2)?)?;
    Some(high << 4 | low)
}

/// Expected length of a UTF-8 sequence from its lead byte.
fn utf8_sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Decide whether an escaped ASCII byte may be shown decoded under `rules`.
fn should_unescape_ascii(byte: u8, rules: UnescapeRule) -> bool {
    match byte {
        // Unescaping '%' would change how the string re-parses.
        b'%' => false,
        b' ' => rules.contains(UnescapeRule::SPACES),
        b'/' | b'\\' => rules.contains(UnescapeRule::PATH_SEPARATORS),
        b';' | b'?' | b':' | b'@' | b'&' | b'=' | b'+' | b'$' | b',' | b'#' => {
            rules.contains(UnescapeRule::URL_SPECIAL_CHARS_EXCEPT_PATH_SEPARATORS)
        }
        0x21..=0x7E => rules.contains(UnescapeRule::NORMAL),
        // Control bytes stay escaped no matter what.
        _ => false,
    }
}

/// Percent-unescape `text` for display, appending an [`Adjustment`] (relative
/// to `text`'s start) for every escape sequence that was decoded.
///
/// Escapes that the rules exclude, that decode to control or
/// direction-altering characters, or that are not valid UTF-8 are copied
/// through verbatim.
pub(crate) fn unescape_component(
    text: &str,
    rules: UnescapeRule,
    adjustments: &mut Vec<Adjustment>,
) -> String {
    if rules == UnescapeRule::NONE {
        return text.to_string();
    }

    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'+' && rules.contains(UnescapeRule::REPLACE_PLUS_WITH_SPACE) {
            out.push_str(&text[copied..i]);
            out.push(' ');
            i += 1;
            copied = i;
            continue;
        }
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        let Some(first) = decode_escape(bytes, i) else {
            i += 1;
            continue;
        };

        if first < 0x80 {
            if should_unescape_ascii(first, rules) {
                out.push_str(&text[copied..i]);
                out.push(first as char);
                adjustments.push(Adjustment::new(i, 3, 1));
                i += 3;
                copied = i;
            } else {
                i += 3;
            }
            continue;
        }

        // Multi-byte UTF-8: the whole sequence must arrive escaped and
        // decode to a single valid character.
        if !rules.contains(UnescapeRule::NORMAL) {
            i += 3;
            continue;
        }
        let Some(expected) = utf8_sequence_len(first) else {
            i += 3;
            continue;
        };
        let mut buf = [0u8; 4];
        buf[0] = first;
        let mut complete = true;
        for k in 1..expected {
            match decode_escape(bytes, i + 3 * k) {
                Some(b) if b & 0xC0 == 0x80 => buf[k] = b,
                _ => {
                    complete = false;
                    break;
                }
            }
        }
        let decoded = if complete {
            core::str::from_utf8(&buf[..expected])
                .ok()
                .and_then(|s| s.chars().next())
        } else {
            None
        };
        match decoded {
            Some(c) if !is_display_banned(c) => {
                out.push_str(&text[copied..i]);
                out.push(c);
                adjustments.push(Adjustment::new(i, 3 * expected, c.len_utf8()));
                i += 3 * expected;
                copied = i;
            }
            Some(_) => {
                // Banned character: keep the entire sequence escaped.
                i += 3 * expected;
            }
            None => {
                i += 3;
            }
        }
    }
    out.push_str(&text[copied..]);
    out
}
