// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Detection of format placeholders which must survive munging.
//!
//! Two placeholder styles are recognized:
//!
//! * printf-style: `%s`, `%5.2f`, `%(name)d`, `%-3s`, ...
//! * brace-style: `{name}`, `{count:d}`, `{total:.2f}`, ...
//!
//! The detection is deliberately greedy: anything shaped like a
//! placeholder is protected, even when it is a literal `%d` in prose.

use regex::Regex;
use std::sync::OnceLock;

/// A piece of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Human readable text, subject to rewriting.
    Free(&'a str),
    /// A format placeholder, copied verbatim.
    Protected(&'a str),
}

impl<'a> Segment<'a> {
    /// The underlying text of the segment.
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Free(text) | Segment::Protected(text) => text,
        }
    }
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = r"(?x)
              %(?:\(\w+\))?[-+]?[\d.]*[sfd]    # printf-style, optionally named
            | \{\w+:?[\d.]*[sfd]?\}            # brace-style with optional format spec
        ";
        Regex::new(pattern).expect("well-formed regex")
    })
}

/// Split `text` into free and protected segments.
///
/// Concatenating the segments gives back `text`. Empty free segments
/// are not emitted.
///
/// # Examples
///
/// ```
/// use poxx::placeholder::{split_placeholders, Segment};
///
/// assert_eq!(
///     split_placeholders("Hello %(name)s!"),
///     vec![
///         Segment::Free("Hello "),
///         Segment::Protected("%(name)s"),
///         Segment::Free("!"),
///     ]
/// );
/// ```
pub fn split_placeholders(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for placeholder in placeholder_regex().find_iter(text) {
        if placeholder.start() > last {
            segments.push(Segment::Free(&text[last..placeholder.start()]));
        }
        segments.push(Segment::Protected(placeholder.as_str()));
        last = placeholder.end();
    }
    if last < text.len() {
        segments.push(Segment::Free(&text[last..]));
    }
    segments
}

/// Return the placeholders found in `text`, in order.
pub fn placeholders(text: &str) -> Vec<&str> {
    placeholder_regex()
        .find_iter(text)
        .map(|placeholder| placeholder.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::Segment::{Free, Protected};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_placeholders() {
        assert_eq!(split_placeholders("Hello world"), vec![Free("Hello world")]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(split_placeholders(""), vec![]);
    }

    #[test]
    fn test_printf_simple() {
        assert_eq!(
            split_placeholders("Hello %s"),
            vec![Free("Hello "), Protected("%s")]
        );
    }

    #[test]
    fn test_printf_named() {
        assert_eq!(
            split_placeholders("%(name)s has %d items"),
            vec![
                Protected("%(name)s"),
                Free(" has "),
                Protected("%d"),
                Free(" items")
            ]
        );
    }

    #[test]
    fn test_printf_flags_and_width() {
        assert_eq!(placeholders("%-5s|%+d|%5.2f|%.3f"), vec!["%-5s", "%+d", "%5.2f", "%.3f"]);
    }

    #[test]
    fn test_printf_unknown_conversion() {
        // Only s, f and d are conversions we know about.
        assert_eq!(split_placeholders("%x and %i"), vec![Free("%x and %i")]);
    }

    #[test]
    fn test_percent_sign_in_prose() {
        assert_eq!(split_placeholders("100% sure"), vec![Free("100% sure")]);
    }

    #[test]
    fn test_literal_percent_d_is_protected() {
        assert_eq!(
            split_placeholders("use %d for numbers"),
            vec![Free("use "), Protected("%d"), Free(" for numbers")]
        );
    }

    #[test]
    fn test_brace_style() {
        assert_eq!(
            split_placeholders("{count} of {total:.2f}"),
            vec![Protected("{count}"), Free(" of "), Protected("{total:.2f}")]
        );
    }

    #[test]
    fn test_brace_style_with_type() {
        assert_eq!(placeholders("{n:d} {width:10s} {x:}"), vec!["{n:d}", "{width:10s}", "{x:}"]);
    }

    #[test]
    fn test_malformed_brace_is_free_text() {
        assert_eq!(
            split_placeholders("{} {not closed {a b}"),
            vec![Free("{} {not closed {a b}")]
        );
    }

    #[test]
    fn test_adjacent_placeholders() {
        assert_eq!(
            split_placeholders("%s%d{x}"),
            vec![Protected("%s"), Protected("%d"), Protected("{x}")]
        );
    }

    #[test]
    fn test_segments_reconstruct_text() {
        let text = "Dear %(name)s, you have {count} new %s (%.1f%%)";
        let joined = split_placeholders(text)
            .iter()
            .map(Segment::as_str)
            .collect::<String>();
        assert_eq!(joined, text);
    }
}
