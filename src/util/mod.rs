use std::sync::atomic::{AtomicUsize, Ordering};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub mod assets;
pub mod browser;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

/// Everything except unreserved characters and `/` is percent-encoded,
/// spaces included.
const QUERY_QUOTE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Percent-encode a value for use inside a hand-built query string.
pub fn quote(value: &str) -> String {
    utf8_percent_encode(value, QUERY_QUOTE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_per_prefix() {
        let first = generate_id("item");
        let second = generate_id("item");
        assert_ne!(first, second);
        assert!(first.starts_with("item-"));
    }

    #[test]
    fn quote_encodes_spaces_and_punctuation() {
        assert_eq!(quote("food bank"), "food%20bank");
        assert_eq!(quote("12 Main St, #4"), "12%20Main%20St%2C%20%234");
    }

    #[test]
    fn quote_leaves_unreserved_characters_and_slashes_alone() {
        assert_eq!(quote("a-b_c.d~e/f"), "a-b_c.d~e/f");
    }
}
