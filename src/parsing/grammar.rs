//! Line grammars for exported chat transcripts.
//!
//! Each grammar is a self-contained pattern with four capture groups:
//! date, time, sender and message text. They are tried in the order of
//! [`Grammar::all`] and the first structural match wins.

use regex::Regex;

/// Known line shapes, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// `D/M/YY, H:MM - Sender: Message` (2- or 4-digit year)
    CommaDash,
    /// `D/M/YYYY, H:MM - Sender: Message` (4-digit year only)
    CommaDashFullYear,
    /// `[D/M/YY, H:MM:SS] Sender: Message`
    Bracketed,
    /// `D/M/YY H:MM - Sender: Message` (no comma)
    SpaceDash,
}

impl Grammar {
    /// Returns the regex pattern for this grammar.
    pub fn pattern(self) -> &'static str {
        match self {
            // 1/2/23, 9:00 - Ana: hi
            Grammar::CommaDash => r"^(\d{1,2}/\d{1,2}/\d{2,4}), (\d{1,2}:\d{2}) - (.+?): (.*)",
            // 1/2/2023, 9:00 - Ana: hi
            Grammar::CommaDashFullYear => r"^(\d{1,2}/\d{1,2}/\d{4}), (\d{1,2}:\d{2}) - (.+?): (.*)",
            // [1/2/23, 9:00:15] Ana: hi
            Grammar::Bracketed => {
                r"^\[(\d{1,2}/\d{1,2}/\d{2,4}), (\d{1,2}:\d{2}:\d{2})\] (.+?): (.*)"
            }
            // 1/2/23 9:00 - Ana: hi
            Grammar::SpaceDash => r"^(\d{1,2}/\d{1,2}/\d{2,4}) (\d{1,2}:\d{2}) - (.+?): (.*)",
        }
    }

    /// Returns all grammars in priority order.
    pub fn all() -> &'static [Grammar] {
        &[
            Grammar::CommaDash,
            Grammar::CommaDashFullYear,
            Grammar::Bracketed,
            Grammar::SpaceDash,
        ]
    }

    /// Short identifier, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Grammar::CommaDash => "comma-dash",
            Grammar::CommaDashFullYear => "comma-dash-yyyy",
            Grammar::Bracketed => "bracketed",
            Grammar::SpaceDash => "space-dash",
        }
    }
}

/// A grammar paired with its compiled pattern.
#[derive(Debug, Clone)]
pub struct GrammarMatcher {
    grammar: Grammar,
    regex: Regex,
}

impl GrammarMatcher {
    pub fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            regex: Regex::new(grammar.pattern()).expect("grammar patterns are valid regexes"),
        }
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Splits `line` into `(date, time, sender, message)` if it has this shape.
    pub fn split<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str, &'a str, &'a str)> {
        let caps = self.regex.captures(line)?;
        Some((
            caps.get(1)?.as_str(),
            caps.get(2)?.as_str(),
            caps.get(3)?.as_str(),
            caps.get(4).map_or("", |m| m.as_str()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_dash() {
        let m = GrammarMatcher::new(Grammar::CommaDash);
        assert_eq!(
            m.split("1/2/23, 9:00 - Ana: hi"),
            Some(("1/2/23", "9:00", "Ana", "hi"))
        );
        assert_eq!(
            m.split("15/01/2024, 10:30 - Bob: a: b"),
            Some(("15/01/2024", "10:30", "Bob", "a: b"))
        );
    }

    #[test]
    fn test_full_year_rejects_short_year() {
        let m = GrammarMatcher::new(Grammar::CommaDashFullYear);
        assert!(m.split("1/2/23, 9:00 - Ana: hi").is_none());
        assert!(m.split("1/2/2023, 9:00 - Ana: hi").is_some());
    }

    #[test]
    fn test_bracketed_requires_seconds() {
        let m = GrammarMatcher::new(Grammar::Bracketed);
        assert_eq!(
            m.split("[1/2/23, 9:00:15] Ana: hi"),
            Some(("1/2/23", "9:00:15", "Ana", "hi"))
        );
        assert!(m.split("[1/2/23, 9:00] Ana: hi").is_none());
    }

    #[test]
    fn test_space_dash() {
        let m = GrammarMatcher::new(Grammar::SpaceDash);
        assert_eq!(
            m.split("1/2/23 9:00 - Ana: hi"),
            Some(("1/2/23", "9:00", "Ana", "hi"))
        );
        assert!(m.split("1/2/23, 9:00 - Ana: hi").is_none());
    }

    #[test]
    fn test_sender_must_not_be_empty() {
        let m = GrammarMatcher::new(Grammar::CommaDash);
        assert!(m.split("1/2/23, 9:00 - : hi").is_none());
    }

    #[test]
    fn test_empty_message_body() {
        let m = GrammarMatcher::new(Grammar::CommaDash);
        assert_eq!(
            m.split("1/2/23, 9:00 - Ana: "),
            Some(("1/2/23", "9:00", "Ana", ""))
        );
    }

    #[test]
    fn test_system_line_has_no_sender_separator() {
        let m = GrammarMatcher::new(Grammar::CommaDash);
        assert!(m.split("1/2/23, 9:00 - Ana created group").is_none());
    }
}
