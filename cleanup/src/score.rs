use diffmatch_classifier::TextClassifier;

/// How natural a cut between two pieces of text is, weakest first.
///
/// The discriminant is the score used to rank candidate positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Boundary {
    /// Mid-word.
    None = 0,
    /// Next to punctuation or a symbol.
    NonAlphanumeric = 1,
    /// Next to whitespace.
    Whitespace = 2,
    /// Punctuation followed by whitespace.
    SentenceEnd = 3,
    /// Next to a line break.
    LineBreak = 4,
    /// Next to an empty line.
    BlankLine = 5,
    /// At the start or end of the text.
    Edge = 6,
}

impl Boundary {
    /// Classify the cut between the last char of `one` and the first of `two`.
    pub fn between<C>(classifier: &C, one: &str, two: &str) -> Self
    where
        C: TextClassifier + ?Sized,
    {
        let (Some(char1), Some(char2)) = (one.chars().next_back(), two.chars().next()) else {
            return Self::Edge;
        };

        // Each property only counts when the weaker one before it holds, so a
        // classifier that calls a letter whitespace still scores it as a letter.
        let non_alphanumeric1 = !classifier.is_alphanumeric(char1);
        let non_alphanumeric2 = !classifier.is_alphanumeric(char2);
        let whitespace1 = non_alphanumeric1 && classifier.is_whitespace(char1);
        let whitespace2 = non_alphanumeric2 && classifier.is_whitespace(char2);
        let line_break1 = whitespace1 && classifier.is_linebreak(char1);
        let line_break2 = whitespace2 && classifier.is_linebreak(char2);
        let blank_line1 = line_break1 && classifier.ends_with_blank_line(one);
        let blank_line2 = line_break2 && classifier.begins_with_blank_line(two);

        if blank_line1 || blank_line2 {
            Self::BlankLine
        } else if line_break1 || line_break2 {
            Self::LineBreak
        } else if non_alphanumeric1 && !whitespace1 && whitespace2 {
            Self::SentenceEnd
        } else if whitespace1 || whitespace2 {
            Self::Whitespace
        } else if non_alphanumeric1 || non_alphanumeric2 {
            Self::NonAlphanumeric
        } else {
            Self::None
        }
    }

    pub fn score(self) -> u8 {
        self as u8
    }
}

/// Score the cut between `one` and `two`: 6 at an edge down to 0 mid-word.
pub fn semantic_score<C>(classifier: &C, one: &str, two: &str) -> u8
where
    C: TextClassifier + ?Sized,
{
    Boundary::between(classifier, one, two).score()
}
