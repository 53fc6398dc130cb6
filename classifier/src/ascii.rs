use crate::TextClassifier;
use crate::blank_line;

/// Classifier for byte-oriented text where only ASCII carries structure.
///
/// Letters and digits are `[0-9A-Za-z]`; whitespace is space, `\t`, `\n`,
/// `\x0B`, `\x0C` and `\r`. Every non-ASCII char is opaque: neither word
/// material nor filler, so diff cleanup treats it like punctuation.
/// Blank-line detection is the same as [`StandardTextClassifier`].
///
/// [`StandardTextClassifier`]: crate::StandardTextClassifier
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AsciiTextClassifier;

impl AsciiTextClassifier {
    pub const fn new() -> Self {
        Self
    }
}

impl TextClassifier for AsciiTextClassifier {
    fn is_alphanumeric(&self, c: char) -> bool {
        c.is_ascii_alphanumeric()
    }

    fn is_whitespace(&self, c: char) -> bool {
        // `char::is_ascii_whitespace` leaves out vertical tab.
        c.is_ascii_whitespace() || c == '\u{000B}'
    }

    fn is_linebreak(&self, c: char) -> bool {
        matches!(c, '\r' | '\n')
    }

    fn begins_with_blank_line(&self, s: &str) -> bool {
        blank_line::begins_with_blank_line(s)
    }

    fn ends_with_blank_line(&self, s: &str) -> bool {
        blank_line::ends_with_blank_line(s)
    }
}
