//! The character-to-word table and its expansion.

/// The word for one character of a canonical decimal rendering, or `None` for a
/// character outside the table.
const fn word_for(byte: u8) -> Option<&'static str> {
    match byte {
        b'-' => Some("minus"),
        b'+' => Some("plus"),
        b'.' => Some("point"),
        b'E' => Some("E"),
        b'0' => Some("zero"),
        b'1' => Some("one"),
        b'2' => Some("two"),
        b'3' => Some("three"),
        b'4' => Some("four"),
        b'5' => Some("five"),
        b'6' => Some("six"),
        b'7' => Some("seven"),
        b'8' => Some("eight"),
        b'9' => Some("nine"),
        _ => None,
    }
}

/// Expands each mapped character of `canonical` to its word, space-separated, with the
/// first character upper-cased. Unmapped characters are skipped, not errors.
pub(crate) fn expand(canonical: &str) -> String {
    // Longest word plus its separator is 6 bytes ("point ").
    let mut words = String::with_capacity(canonical.len() * 6);
    for byte in canonical.bytes() {
        if let Some(word) = word_for(byte) {
            words.push_str(word);
            words.push(' ');
        }
    }
    words.pop();
    if let Some(first) = words.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table() {
        assert_eq!(word_for(b'0'), Some("zero"));
        assert_eq!(word_for(b'9'), Some("nine"));
        assert_eq!(word_for(b'-'), Some("minus"));
        assert_eq!(word_for(b'+'), Some("plus"));
        assert_eq!(word_for(b'.'), Some("point"));
        assert_eq!(word_for(b'E'), Some("E"));
        assert_eq!(word_for(b'e'), None);
        assert_eq!(word_for(b' '), None);
        assert_eq!(word_for(b','), None);
    }

    #[test]
    fn expansion() {
        assert_eq!(expand("2.345"), "Two point three four five");
        assert_eq!(expand("-0"), "Minus zero");
        assert_eq!(expand("0.1"), "Zero point one");
        assert_eq!(expand("1E+30"), "One E plus three zero");
        assert_eq!(expand("5E-324"), "Five E minus three two four");
    }

    #[test]
    fn unmapped_characters_are_skipped() {
        assert_eq!(expand("1_2"), "One two");
        assert_eq!(expand("x"), "");
        assert_eq!(expand(""), "");
    }
}
