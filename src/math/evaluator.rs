//! Answer field and numeric matching.

/// Parse a signed integer literal (`[+-]?[0-9]+` after trimming).
/// Anything else, including partial input like `-`, is not an answer yet.
pub fn parse_answer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Does the typed text match `answer` exactly?
pub fn matches_answer(raw: &str, answer: i32) -> bool {
    parse_answer(raw) == Some(i64::from(answer))
}

/// Text buffer behind the answer input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerField {
    text: String,
}

/// Longest accepted entry; longer input can never match a generated answer.
const MAX_FIELD_LEN: usize = 8;

impl AnswerField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append a character. Only digits and signs are accepted; returns
    /// whether the text changed.
    pub fn push(&mut self, c: char) -> bool {
        let accepted = c.is_ascii_digit() || c == '-' || c == '+';
        if !accepted || self.text.chars().count() >= MAX_FIELD_LEN {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Remove the last character; returns whether the text changed.
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_signed_integers() {
        assert_eq!(parse_answer("42"), Some(42));
        assert_eq!(parse_answer("-7"), Some(-7));
        assert_eq!(parse_answer("+7"), Some(7));
        assert_eq!(parse_answer(" 12 "), Some(12));
        assert_eq!(parse_answer("007"), Some(7));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in ["", "-", "+", "1.5", "1e3", "--3", "3-", "abc", "+-1", " "] {
            assert_eq!(parse_answer(raw), None, "{:?}", raw);
        }
    }

    #[test]
    fn test_matches_answer() {
        assert!(matches_answer("-12", -12));
        assert!(!matches_answer("12", -12));
        assert!(!matches_answer("-", 0));
        assert!(matches_answer("0", 0));
        assert!(matches_answer("-0", 0));
    }

    #[test]
    fn test_field_filters_characters() {
        let mut field = AnswerField::new();
        assert!(field.push('-'));
        assert!(field.push('4'));
        assert!(!field.push('x'));
        assert!(!field.push(' '));
        assert_eq!(field.text(), "-4");
        assert!(field.backspace());
        assert_eq!(field.text(), "-");
        field.clear();
        assert!(field.is_empty());
        assert!(!field.backspace());
    }

    #[test]
    fn test_field_length_cap() {
        let mut field = AnswerField::new();
        for _ in 0..MAX_FIELD_LEN {
            assert!(field.push('9'));
        }
        assert!(!field.push('9'));
    }
}
