//! Text classification for boundary-aware diff cleanup.
//!
//! A diff engine that wants its edit boundaries to land between words, at
//! line ends, or on paragraph breaks needs to know what "word material",
//! "whitespace" and "blank line" mean for the text it is diffing. The
//! [`TextClassifier`] trait answers exactly those five questions, and the
//! engine depends on nothing else. Swapping the classifier lets the same
//! cleanup logic run over byte-oriented protocols or custom alphabets.
//!
//! Two classifiers are bundled:
//!
//! - [`StandardTextClassifier`] for ordinary Unicode text (the default).
//! - [`AsciiTextClassifier`] for byte-oriented input where only ASCII
//!   letters, digits and blanks carry meaning.
//!
//! # Examples
//!
//! ```
//! use diffmatch_classifier::StandardTextClassifier;
//! use diffmatch_classifier::TextClassifier;
//!
//! let classifier = StandardTextClassifier::new();
//! assert!(classifier.is_alphanumeric('é'));
//! assert!(classifier.is_whitespace('\u{00A0}'));
//! assert!(classifier.is_linebreak('\r'));
//! assert!(classifier.begins_with_blank_line("\r\n\r\nnext paragraph"));
//! assert!(classifier.ends_with_blank_line("end of paragraph\n\n"));
//! ```

use std::sync::Arc;

mod ascii;
mod blank_line;
mod kind;
mod standard;

pub use ascii::AsciiTextClassifier;
pub use blank_line::begins_with_blank_line;
pub use blank_line::ends_with_blank_line;
pub use kind::ClassifierKind;
pub use kind::ParseClassifierKindError;
pub use standard::StandardTextClassifier;

/// Classifies characters and string boundaries for diff cleanup heuristics.
///
/// Every method is a pure, total query: it must return for any input,
/// including the empty string, and must not depend on earlier calls.
/// Implementations are shared across threads, hence `Send + Sync`.
///
/// The three character categories need not be disjoint, but a character
/// should not be both alphanumeric and whitespace unless the implementation
/// documents the exception.
pub trait TextClassifier: Send + Sync {
    /// Whether `c` is word material (letters and digits in the default policy).
    fn is_alphanumeric(&self, c: char) -> bool;

    /// Whether `c` is inter-word filler such as a space or tab.
    fn is_whitespace(&self, c: char) -> bool;

    /// Whether `c` alone ends a line. Must hold for `\r` and `\n`.
    fn is_linebreak(&self, c: char) -> bool;

    /// Whether `s` starts with an empty line before any content.
    fn begins_with_blank_line(&self, s: &str) -> bool;

    /// Whether `s` ends with a line terminator followed by an empty line.
    fn ends_with_blank_line(&self, s: &str) -> bool;
}

impl<T: TextClassifier + ?Sized> TextClassifier for &T {
    fn is_alphanumeric(&self, c: char) -> bool {
        (**self).is_alphanumeric(c)
    }

    fn is_whitespace(&self, c: char) -> bool {
        (**self).is_whitespace(c)
    }

    fn is_linebreak(&self, c: char) -> bool {
        (**self).is_linebreak(c)
    }

    fn begins_with_blank_line(&self, s: &str) -> bool {
        (**self).begins_with_blank_line(s)
    }

    fn ends_with_blank_line(&self, s: &str) -> bool {
        (**self).ends_with_blank_line(s)
    }
}

impl<T: TextClassifier + ?Sized> TextClassifier for Box<T> {
    fn is_alphanumeric(&self, c: char) -> bool {
        (**self).is_alphanumeric(c)
    }

    fn is_whitespace(&self, c: char) -> bool {
        (**self).is_whitespace(c)
    }

    fn is_linebreak(&self, c: char) -> bool {
        (**self).is_linebreak(c)
    }

    fn begins_with_blank_line(&self, s: &str) -> bool {
        (**self).begins_with_blank_line(s)
    }

    fn ends_with_blank_line(&self, s: &str) -> bool {
        (**self).ends_with_blank_line(s)
    }
}

impl<T: TextClassifier + ?Sized> TextClassifier for Arc<T> {
    fn is_alphanumeric(&self, c: char) -> bool {
        (**self).is_alphanumeric(c)
    }

    fn is_whitespace(&self, c: char) -> bool {
        (**self).is_whitespace(c)
    }

    fn is_linebreak(&self, c: char) -> bool {
        (**self).is_linebreak(c)
    }

    fn begins_with_blank_line(&self, s: &str) -> bool {
        (**self).begins_with_blank_line(s)
    }

    fn ends_with_blank_line(&self, s: &str) -> bool {
        (**self).ends_with_blank_line(s)
    }
}
