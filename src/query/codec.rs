use std::collections::BTreeMap;

/// Canonical view state: filter/search/sort keys mapped to scalar values.
/// Multi-value filters are stored joined by [`VALUE_DELIMITER`].
pub type QueryState = BTreeMap<String, String>;

pub const VALUE_DELIMITER: char = ',';

/// Parses a query string into a `QueryState`.
///
/// Tolerant by contract: empty keys and empty values are skipped, the last
/// occurrence of a duplicated key wins, and malformed percent escapes pass
/// through as literal text. Never fails.
pub fn decode(query: &str) -> QueryState {
    let mut state = QueryState::new();
    for pair in query.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (raw_key, raw_value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        };
        let key = percent_decode(raw_key);
        let value = percent_decode(raw_value);
        if key.is_empty() || value.is_empty() {
            continue;
        }
        state.insert(key, value);
    }
    state
}

/// Serializes a `QueryState` into its canonical query string.
///
/// Keys come out in sorted order so the same state always produces the same
/// address. Empty keys and values are dropped rather than serialized.
pub fn encode(state: &QueryState) -> String {
    let mut out = String::new();
    for (key, value) in state {
        if key.is_empty() || value.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(&percent_encode(key));
        out.push('=');
        out.push_str(&percent_encode(value));
    }
    out
}

/// Splits a stored scalar into its multi-value list, dropping empty segments.
pub fn split_values(raw: &str) -> Vec<String> {
    raw.split(VALUE_DELIMITER)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins a multi-value list into the stored scalar form.
pub fn join_values(values: &[String]) -> String {
    values
        .iter()
        .filter(|value| !value.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(",")
}

// Encodes bytes outside the unreserved set, keeping the multi-value
// delimiter literal so lists stay readable in the address.
fn percent_encode(text: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(text.len());
    for &byte in text.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b',' => {
                out.push(char::from(byte));
            }
            _ => {
                out.push('%');
                out.push(char::from(HEX[(byte >> 4) as usize]));
                out.push(char::from(HEX[(byte & 0x0F) as usize]));
            }
        }
    }
    out
}

fn percent_decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'%' {
            let hex = bytes.get(idx + 1..idx + 3).and_then(|pair| {
                let high = (pair[0] as char).to_digit(16)?;
                let low = (pair[1] as char).to_digit(16)?;
                Some((high * 16 + low) as u8)
            });
            if let Some(byte) = hex {
                out.push(byte);
                idx += 3;
                continue;
            }
        }
        out.push(bytes[idx]);
        idx += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
