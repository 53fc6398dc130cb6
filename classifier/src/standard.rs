use unicode_general_category::GeneralCategory;
use unicode_general_category::get_general_category;

use crate::TextClassifier;
use crate::blank_line;

/// Default classifier for ordinary Unicode text.
///
/// - Alphanumeric: general category Letter (`L*`) or Number (`N*`). Marks and
///   symbols that Unicode calls `Alphabetic` (vowel signs, circled letters)
///   are not word material here.
/// - Whitespace: Unicode `White_Space` ([`char::is_whitespace`]), which also
///   covers `\r`, `\n`, tabs, NBSP and the other space separators.
/// - Linebreak: exactly `\r` and `\n`.
///
/// The two categories overlap only on `\r` and `\n`, which are both
/// whitespace and linebreaks. Nothing is both alphanumeric and whitespace.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StandardTextClassifier;

impl StandardTextClassifier {
    pub const fn new() -> Self {
        Self
    }
}

impl TextClassifier for StandardTextClassifier {
    fn is_alphanumeric(&self, c: char) -> bool {
        is_letter_or_number(c)
    }

    fn is_whitespace(&self, c: char) -> bool {
        c.is_whitespace()
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

fn is_letter_or_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}
