//! Line classification: raw transcript text to candidate message lines.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`. Every physical line is trimmed and tried against the grammars in
//! priority order. Lines that fit none of them (system notices, wrapped
//! continuation text) are dropped and only counted.

use tracing::debug;

use super::grammar::{Grammar, GrammarMatcher};
use crate::error::ChatlensError;

/// A line that matched one of the grammars, borrowed from the decoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub sender: &'a str,
    pub message: &'a str,
    /// The grammar that claimed this line.
    pub grammar: Grammar,
}

/// Result of classifying a whole transcript.
#[derive(Debug, Clone, Default)]
pub struct Classification<'a> {
    /// Matched lines in transcript order.
    pub lines: Vec<ClassifiedLine<'a>>,
    /// Number of physical lines in the transcript, including blank ones.
    pub total_lines: usize,
}

impl Classification<'_> {
    /// Number of lines that matched a grammar.
    pub fn matched_lines(&self) -> usize {
        self.lines.len()
    }
}

/// Tries each grammar in order against single lines.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::{Grammar, LineClassifier};
///
/// let classifier = LineClassifier::new();
/// let line = classifier.classify_line("1/2/23, 9:00 - Ana: hi").unwrap();
/// assert_eq!(line.sender, "Ana");
/// assert_eq!(line.grammar, Grammar::CommaDash);
///
/// assert!(classifier.classify_line("Messages are end-to-end encrypted").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct LineClassifier {
    matchers: Vec<GrammarMatcher>,
}

impl LineClassifier {
    /// Creates a classifier with every known grammar in priority order.
    pub fn new() -> Self {
        Self::with_grammars(Grammar::all())
    }

    /// Creates a classifier trying only `grammars`, in the given order.
    pub fn with_grammars(grammars: &[Grammar]) -> Self {
        Self {
            matchers: grammars.iter().map(|&g| GrammarMatcher::new(g)).collect(),
        }
    }

    /// Classifies one line. Surrounding whitespace is ignored; blank lines
    /// never match.
    pub fn classify_line<'a>(&self, line: &'a str) -> Option<ClassifiedLine<'a>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        self.matchers.iter().find_map(|matcher| {
            matcher
                .split(line)
                .map(|(date, time, sender, message)| ClassifiedLine {
                    date,
                    time,
                    sender,
                    message,
                    grammar: matcher.grammar(),
                })
        })
    }

    /// Classifies every line of `text`.
    ///
    /// Fails with [`ChatlensError::NoMessagesFound`] if no line matched.
    pub fn classify<'a>(&self, text: &'a str) -> Result<Classification<'a>, ChatlensError> {
        let mut classification = Classification::default();

        for line in physical_lines(text) {
            classification.total_lines += 1;
            if let Some(classified) = self.classify_line(line) {
                classification.lines.push(classified);
            }
        }

        debug!(
            total_lines = classification.total_lines,
            matched_lines = classification.matched_lines(),
            "classified transcript lines"
        );

        if classification.lines.is_empty() {
            return Err(ChatlensError::NoMessagesFound {
                total_lines: classification.total_lines,
            });
        }

        Ok(classification)
    }
}

/// Splits `text` at `\n`, `\r\n` and lone `\r`. A final terminator does
/// not start an extra empty line.
fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &rest[..end];
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_grammar_wins() {
        let classifier = LineClassifier::new();
        // Fits both the 2-4 digit and the strict 4-digit comma grammar
        let line = classifier.classify_line("1/2/2023, 9:00 - Ana: hi").unwrap();
        assert_eq!(line.grammar, Grammar::CommaDash);
    }

    #[test]
    fn test_each_grammar_reachable() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify_line("[1/2/23, 9:00:01] Ana: hi").unwrap().grammar,
            Grammar::Bracketed
        );
        assert_eq!(
            classifier.classify_line("1/2/23 9:00 - Ana: hi").unwrap().grammar,
            Grammar::SpaceDash
        );
    }

    #[test]
    fn test_priority_is_configurable() {
        let classifier = LineClassifier::with_grammars(&[Grammar::CommaDashFullYear, Grammar::CommaDash]);
        let line = classifier.classify_line("1/2/2023, 9:00 - Ana: hi").unwrap();
        assert_eq!(line.grammar, Grammar::CommaDashFullYear);
    }

    #[test]
    fn test_line_is_trimmed() {
        let classifier = LineClassifier::new();
        let line = classifier.classify_line("  1/2/23, 9:00 - Ana: hi there \r").unwrap();
        assert_eq!(line.message, "hi there");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let classifier = LineClassifier::new();
        assert!(classifier.classify_line("").is_none());
        assert!(classifier.classify_line("   \t").is_none());
    }

    #[test]
    fn test_classify_counts_lines() {
        let classifier = LineClassifier::new();
        let text = "1/2/23, 9:00 - Ana: hi\n\ncontinued text\n1/2/23, 9:05 - Bob: yo";
        let result = classifier.classify(text).unwrap();
        assert_eq!(result.total_lines, 4);
        assert_eq!(result.matched_lines(), 2);
        assert_eq!(result.lines[1].sender, "Bob");
    }

    #[test]
    fn test_carriage_return_ends_line() {
        let classifier = LineClassifier::new();
        let result = classifier.classify("1/2/23, 9:00 - Ana: hi\r1/2/23, 9:01 - Bob: yo").unwrap();
        assert_eq!(result.total_lines, 2);
        assert_eq!(result.lines[0].message, "hi");
        assert_eq!(result.lines[1].sender, "Bob");
    }

    #[test]
    fn test_mixed_line_endings() {
        let lines: Vec<&str> = physical_lines("a\r\nb\rc\n\r\nd\r").collect();
        assert_eq!(lines, vec!["a", "b", "c", "", "d"]);
        assert_eq!(physical_lines("\n\n   \n").count(), 3);
        assert_eq!(physical_lines("").count(), 0);
    }

    #[test]
    fn test_no_matches_is_error() {
        let classifier = LineClassifier::new();
        let err = classifier.classify("hello\nworld").unwrap_err();
        assert!(matches!(err, ChatlensError::NoMessagesFound { total_lines: 2 }));
    }

    #[test]
    fn test_empty_text_is_no_messages() {
        let err = LineClassifier::new().classify("").unwrap_err();
        assert!(err.is_no_messages());
    }
}
