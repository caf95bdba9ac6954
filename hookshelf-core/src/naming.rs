//! Identifier case conversion between camelCase and kebab-case.
//!
//! Registry sources are stored under camelCase names (`useToggle`); projects
//! that prefer kebab-case file names get `use-toggle` instead. Input outside
//! `[A-Za-z0-9_-]` is returned unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// File naming convention
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    #[default]
    Camel,
    Kebab,
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Camel => write!(f, "camel"),
            Case::Kebab => write!(f, "kebab"),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Convert an identifier to the given case
pub fn to_case(s: &str, case: Case) -> String {
    match case {
        Case::Camel => to_camel_case(s),
        Case::Kebab => to_kebab_case(s),
    }
}

/// `useLocalStorage` -> `use-local-storage`, `HTMLElement` -> `html-element`
pub fn to_kebab_case(s: &str) -> String {
    if !is_identifier(s) {
        return s.to_string();
    }

    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '_' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            continue;
        }

        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if boundary && !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        }

        out.push(c.to_ascii_lowercase());
    }

    // Trailing separators carry no meaning
    while out.ends_with('-') {
        out.pop();
    }

    if out.is_empty() { s.to_string() } else { out }
}

/// `use-local-storage` -> `useLocalStorage`
///
/// Identifiers without separators are already camelCase and pass through.
pub fn to_camel_case(s: &str) -> String {
    if !is_identifier(s) {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    for segment in s.split(['-', '_']).filter(|seg| !seg.is_empty()) {
        if out.is_empty() {
            out.push_str(segment);
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }

    if out.is_empty() { s.to_string() } else { out }
}

/// Apply a case to every segment of a `/`-separated relative path.
///
/// Only the stem of the file name is converted; everything from its first
/// `.` onward (`.ts`, `.test.ts`) is kept as-is.
pub fn convert_path(path: &str, case: Case) -> String {
    let segments: Vec<&str> = path.split('/').collect();
    let last = segments.len().saturating_sub(1);

    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            if i == last {
                match segment.split_once('.') {
                    Some((stem, ext)) if !stem.is_empty() => {
                        format!("{}.{}", to_case(stem, case), ext)
                    }
                    _ => to_case(segment, case),
                }
            } else {
                to_case(segment, case)
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
