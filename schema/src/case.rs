use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a member name is turned into its display string when the manifest
/// does not spell one out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    #[default]
    Noop,
    Snake,
    SnakeUpper,
    Kebab,
    KebabUpper,
    Camel,
    Pascal,
    Lower,
    Upper,
    Title,
    First,
    FirstUpper,
    FirstLower,
    Whitespace,
}

const TRANSFORM_NAMES: [(&str, Transform); 14] = [
    ("noop",        Transform::Noop),
    ("snake",       Transform::Snake),
    ("snake-upper", Transform::SnakeUpper),
    ("kebab",       Transform::Kebab),
    ("kebab-upper", Transform::KebabUpper),
    ("camel",       Transform::Camel),
    ("pascal",      Transform::Pascal),
    ("lower",       Transform::Lower),
    ("upper",       Transform::Upper),
    ("title",       Transform::Title),
    ("first",       Transform::First),
    ("first-upper", Transform::FirstUpper),
    ("first-lower", Transform::FirstLower),
    ("whitespace",  Transform::Whitespace),
];

impl Transform {
    pub fn apply(self, name: &str) -> String {
        match self {
            Transform::Noop       => name.to_string(),
            Transform::Snake      => join_words(name, "_", str::to_lowercase),
            Transform::SnakeUpper => join_words(name, "_", str::to_uppercase),
            Transform::Kebab      => join_words(name, "-", str::to_lowercase),
            Transform::KebabUpper => join_words(name, "-", str::to_uppercase),
            Transform::Camel      => {
                let words = split_words(name);
                let mut out = String::new();
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        out.push_str(&word.to_lowercase());
                    } else {
                        out.push_str(&capitalize(word));
                    }
                }
                out
            }
            Transform::Pascal     => join_words(name, "", capitalize),
            Transform::Lower      => name.to_lowercase(),
            Transform::Upper      => name.to_uppercase(),
            Transform::Title      => join_words(name, " ", capitalize),
            Transform::First      => name.chars().take(1).collect(),
            Transform::FirstUpper => name.chars().take(1).flat_map(char::to_uppercase).collect(),
            Transform::FirstLower => name.chars().take(1).flat_map(char::to_lowercase).collect(),
            Transform::Whitespace => join_words(name, " ", str::to_string),
        }
    }

    pub fn as_str(self) -> &'static str {
        TRANSFORM_NAMES
            .iter()
            .find(|(_, t)| *t == self)
            .map(|(name, _)| *name)
            .unwrap_or("noop")
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TRANSFORM_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, t)| *t)
            .ok_or_else(|| {
                let known: Vec<&str> = TRANSFORM_NAMES.iter().map(|(name, _)| *name).collect();
                format!("unknown transform \"{}\", expected one of: {}", s, known.join(", "))
            })
    }
}

/// Converts a string to snake_case.
/// This implementation avoids inserting underscores between consecutive uppercase letters,
/// so that acronyms remain intact (e.g. "sessionID" becomes "session_id").
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut snake = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                // Insert an underscore if the previous character is not uppercase,
                // or if the next character exists and is lowercase.
                if (!prev.is_uppercase() && prev != '_')
                    || (prev.is_uppercase() && i + 1 < chars.len() && chars[i + 1].is_lowercase())
                {
                    snake.push('_');
                }
            }
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}

/// Splits an identifier into its words, on underscores, dashes, spaces and case changes.
pub fn split_words(s: &str) -> Vec<String> {
    to_snake_case(s)
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_string())
        .collect()
}

/// Uppercases the first letter of a word and lowercases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None        => String::new(),
        Some(first) => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
    }
}

fn join_words(name: &str, sep: &str, f: impl Fn(&str) -> String) -> String {
    // `split_words` lowercases through `to_snake_case`, so recover the original
    // casing for transforms that keep it.
    let words = split_words(name);
    if words.is_empty() {
        return String::new();
    }
    let originals = original_words(name, &words);
    originals.iter().map(|w| f(w.as_str())).collect::<Vec<_>>().join(sep)
}

/// Maps lowercased words back onto their original spelling in `name`.
fn original_words(name: &str, words: &[String]) -> Vec<String> {
    let letters: Vec<char> = name
        .chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .collect();
    let mut out = Vec::with_capacity(words.len());
    let mut pos = 0;
    for word in words {
        let len = word.chars().count();
        let end = (pos + len).min(letters.len());
        out.push(letters[pos..end].iter().collect());
        pos = end;
    }
    out
}
