//! Form body parsing module
//!
//! Minimal `application/x-www-form-urlencoded` decoding for creation
//! requests: percent escapes, `+` as space, first-occurrence-wins lookup.
//! Malformed pairs are skipped rather than failing the whole body.

/// Extract the first value for `key` from a form-encoded body.
pub fn form_value(body: &[u8], key: &str) -> Option<String> {
    body.split(|&b| b == b'&').find_map(|pair| {
        let (raw_key, raw_value) = match pair.iter().position(|&b| b == b'=') {
            Some(idx) => (&pair[..idx], &pair[idx + 1..]),
            None => (pair, &pair[..0]),
        };
        match decode(raw_key) {
            Some(k) if k == key => decode(raw_value),
            _ => None,
        }
    })
}

/// Percent-decode one form token.
///
/// Returns `None` on a truncated or non-hex escape, or when the decoded
/// bytes are not UTF-8.
fn decode(raw: &[u8]) -> Option<String> {
    let mut out = Vec::with_capacity(raw.len());
    let mut bytes = raw.iter();
    while let Some(&b) = bytes.next() {
        match b {
            b'+' => out.push(b' '),
            b'%' => {
                let hi = hex_digit(*bytes.next()?)?;
                let lo = hex_digit(*bytes.next()?)?;
                out.push((hi << 4) | lo);
            }
            _ => out.push(b),
        }
    }
    String::from_utf8(out).ok()
}

const fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_pair() {
        assert_eq!(form_value(b"type=file", "type"), Some("file".to_string()));
    }

    #[test]
    fn test_multiple_pairs() {
        assert_eq!(
            form_value(b"name=new.txt&type=dir", "type"),
            Some("dir".to_string())
        );
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(form_value(b"name=new.txt", "type"), None);
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(form_value(b"type=", "type"), Some(String::new()));
        assert_eq!(form_value(b"type", "type"), Some(String::new()));
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(
            form_value(b"type=file&type=dir", "type"),
            Some("file".to_string())
        );
    }

    #[test]
    fn test_percent_and_plus_decoding() {
        assert_eq!(
            form_value(b"type=a%20b+c", "type"),
            Some("a b c".to_string())
        );
        assert_eq!(
            form_value(b"a%3Db=x", "a=b"),
            Some("x".to_string())
        );
    }

    #[test]
    fn test_malformed_escape_is_skipped() {
        assert_eq!(form_value(b"type=%zz", "type"), None);
        assert_eq!(form_value(b"type=%2", "type"), None);
        // a later well-formed pair still parses
        assert_eq!(
            form_value(b"junk=%zz&type=file", "type"),
            Some("file".to_string())
        );
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(form_value(b"", "type"), None);
    }
}
