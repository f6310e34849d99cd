//! The catalogue of demonstration topics.
//!
//! [`Topic::ALL`] is also the order the driver runs them in.

use std::fmt;
use std::str::FromStr;

use crate::TourError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Topic {
    Variables,
    Constants,
    Types,
    ArraysAndSlices,
    Maps,
    IfElse,
    Loops,
    Match,
    Functions,
    Structs,
    Traits,
    References,
    Defer,
}

impl Topic {
    /// Every topic, in run order.
    pub const ALL: [Topic; 13] = [
        Topic::Variables,
        Topic::Constants,
        Topic::Types,
        Topic::ArraysAndSlices,
        Topic::Maps,
        Topic::IfElse,
        Topic::Loops,
        Topic::Match,
        Topic::Functions,
        Topic::Structs,
        Topic::Traits,
        Topic::References,
        Topic::Defer,
    ];

    /// Stable key used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Topic::Variables => "variables",
            Topic::Constants => "constants",
            Topic::Types => "types",
            Topic::ArraysAndSlices => "arrays",
            Topic::Maps => "maps",
            Topic::IfElse => "if-else",
            Topic::Loops => "loops",
            Topic::Match => "match",
            Topic::Functions => "functions",
            Topic::Structs => "structs",
            Topic::Traits => "traits",
            Topic::References => "references",
            Topic::Defer => "defer",
        }
    }

    /// Heading printed above the topic's output.
    pub fn title(self) -> &'static str {
        match self {
            Topic::Variables => "Variables",
            Topic::Constants => "Constants",
            Topic::Types => "Primitive Types",
            Topic::ArraysAndSlices => "Arrays and Slices",
            Topic::Maps => "Maps",
            Topic::IfElse => "if/else",
            Topic::Loops => "Loops",
            Topic::Match => "match",
            Topic::Functions => "Functions",
            Topic::Structs => "Structs",
            Topic::Traits => "Traits",
            Topic::References => "References",
            Topic::Defer => "Deferred Cleanup",
        }
    }

    /// Alternative names accepted on the command line.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Topic::Variables => &["vars", "let", "bindings"],
            Topic::Constants => &["const", "consts"],
            Topic::Types => &["primitives", "data-types"],
            Topic::ArraysAndSlices => &["slices", "vectors", "vec"],
            Topic::Maps => &["map", "hashmap", "dict"],
            Topic::IfElse => &["if", "conditionals"],
            Topic::Loops => &["for", "while", "loop"],
            Topic::Match => &["switch"],
            Topic::Functions => &["fn", "closures"],
            Topic::Structs => &["struct", "methods"],
            Topic::Traits => &["interfaces", "shapes"],
            Topic::References => &["pointers", "borrowing"],
            Topic::Defer => &["cleanup", "scope"],
        }
    }

    /// The key followed by every alias, i.e. every name `FromStr` accepts.
    pub fn all_keys(self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.key()).chain(self.aliases().iter().copied())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Topic {
    type Err = TourError;

    /// Case-insensitive lookup by key or alias; `_` and `-` are interchangeable.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
        Topic::ALL
            .into_iter()
            .find(|topic| topic.all_keys().any(|key| key == wanted))
            .ok_or_else(|| TourError::UnknownTopic(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    #[test_case("variables", Topic::Variables; "key")]
    #[test_case("switch", Topic::Match; "switch alias")]
    #[test_case("interfaces", Topic::Traits; "interfaces alias")]
    #[test_case("pointers", Topic::References; "pointers alias")]
    #[test_case("IF_ELSE", Topic::IfElse; "case and separator insensitive")]
    #[test_case("  defer ", Topic::Defer; "surrounding whitespace")]
    fn parses_names(name: &str, expected: Topic) {
        assert_eq!(name.parse::<Topic>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_topic() {
        let err = "goroutines".parse::<Topic>().unwrap_err();
        assert!(matches!(err, TourError::UnknownTopic(ref name) if name == "goroutines"));
    }

    #[test]
    fn test_keys_and_aliases_are_unique() {
        let mut seen = HashSet::new();
        for topic in Topic::ALL {
            for key in topic.all_keys() {
                assert!(seen.insert(key), "duplicate topic name: {key}");
            }
        }
    }

    #[test]
    fn test_all_is_sorted_and_round_trips() {
        let mut sorted = Topic::ALL;
        sorted.sort();
        assert_eq!(sorted, Topic::ALL);

        for topic in Topic::ALL {
            assert_eq!(topic.to_string().parse::<Topic>().unwrap(), topic);
        }
    }
}
