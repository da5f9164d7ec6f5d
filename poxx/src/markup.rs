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


//! Markup events for HTML fragments.
//!
//! Messages in a catalog often contain inline HTML such as `<b>`,
//! `<a href="...">` or `&nbsp;`. The fragment is streamed through
//! `lol_html`, which hands every start tag and every run of text to a
//! [`MarkupSink`]. Text is further split at character and entity
//! references. Everything the sink does not change, including end
//! tags and comments, is copied to the output byte for byte.

use lol_html::errors::{AttributeNameError, RewritingError};
use lol_html::html_content::{ContentType, Element};
use lol_html::{doc_text, element, RewriteStrSettings};
use regex::Regex;
use std::cell::RefCell;
use std::sync::OnceLock;

/// Consumer of markup events.
///
/// Events are delivered in document order. The text methods return
/// the replacement for the text they are given.
pub trait MarkupSink {
    /// A start tag. Attributes changed here are written back.
    fn start_tag(&mut self, element: &mut Element) -> Result<(), AttributeNameError>;

    /// A run of character data without references.
    fn text(&mut self, text: &str) -> String;

    /// A numeric character reference. For `&#169;` the code is `169`,
    /// for `&#xA9;` it is `xA9`.
    fn char_ref(&mut self, code: &str) -> String {
        format!("&#{code};")
    }

    /// A named entity reference such as `&amp;`.
    fn entity_ref(&mut self, name: &str) -> String {
        format!("&{name};")
    }
}

/// A piece of character data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Text(&'a str),
    CharRef(&'a str),
    EntityRef(&'a str),
}

fn reference_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = r"(?x)
            &(?:
                \#(?<code>[xX][0-9a-fA-F]+|[0-9]+)   # numeric character reference
              | (?<name>[a-zA-Z][a-zA-Z0-9]*)        # named entity reference
            );
        ";
        Regex::new(pattern).expect("well-formed regex")
    })
}

/// Split character data at references. A `&` which does not start a
/// complete reference is text.
///
/// # Examples
///
/// ```
/// use poxx::markup::{split_references, Piece};
///
/// assert_eq!(
///     split_references("Fish &amp; chips &#169;"),
///     vec![
///         Piece::Text("Fish "),
///         Piece::EntityRef("amp"),
///         Piece::Text(" chips "),
///         Piece::CharRef("169"),
///     ]
/// );
/// ```
pub fn split_references(text: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for captures in reference_regex().captures_iter(text) {
        let Some(reference) = captures.get(0) else {
            continue;
        };
        if reference.start() > last {
            pieces.push(Piece::Text(&text[last..reference.start()]));
        }
        match (captures.name("code"), captures.name("name")) {
            (Some(code), _) => pieces.push(Piece::CharRef(code.as_str())),
            (None, Some(name)) => pieces.push(Piece::EntityRef(name.as_str())),
            (None, None) => pieces.push(Piece::Text(reference.as_str())),
        }
        last = reference.end();
    }
    if last < text.len() {
        pieces.push(Piece::Text(&text[last..]));
    }
    pieces
}

/// Feed the character data `text` to `sink` and collect the
/// replacements. This is how text nodes and attribute values are
/// handled.
pub fn rewrite_text<S: MarkupSink + ?Sized>(text: &str, sink: &mut S) -> String {
    let mut output = String::with_capacity(text.len());
    for piece in split_references(text) {
        let replacement = match piece {
            Piece::Text(text) => sink.text(text),
            Piece::CharRef(code) => sink.char_ref(code),
            Piece::EntityRef(name) => sink.entity_ref(name),
        };
        output.push_str(&replacement);
    }
    output
}

/// Stream `input` through `sink` and return the rewritten fragment.
pub fn rewrite<S: MarkupSink + ?Sized>(
    input: &str,
    sink: &mut S,
) -> Result<String, RewritingError> {
    let sink = RefCell::new(sink);
    // A text node can arrive in several chunks.
    let mut pending = String::new();
    lol_html::rewrite_str(
        input,
        RewriteStrSettings {
            element_content_handlers: vec![element!("*", |el| {
                sink.borrow_mut().start_tag(el)?;
                Ok(())
            })],
            document_content_handlers: vec![doc_text!(|chunk| {
                pending.push_str(chunk.as_str());
                if chunk.last_in_text_node() {
                    let mut sink = sink.borrow_mut();
                    let text = rewrite_text(&pending, &mut **sink);
                    chunk.replace(&text, ContentType::Html);
                    pending.clear();
                } else {
                    chunk.remove();
                }
                Ok(())
            })],
            strict: false,
            ..RewriteStrSettings::default()
        },
    )
}

/// A start tag as seen by a [`MarkupSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    pub name: String,
    /// Attribute names and raw values, in source order.
    pub attributes: Vec<(String, String)>,
    pub self_closing: bool,
}

/// Records the start tags and leaves the markup unchanged.
impl MarkupSink for Vec<StartTag> {
    fn start_tag(&mut self, element: &mut Element) -> Result<(), AttributeNameError> {
        self.push(StartTag {
            name: element.tag_name(),
            attributes: element
                .attributes()
                .iter()
                .map(|attribute| (attribute.name(), attribute.value()))
                .collect(),
            self_closing: element.is_self_closing(),
        });
        Ok(())
    }

    fn text(&mut self, text: &str) -> String {
        String::from(text)
    }
}

/// The start tags of `input`, in document order.
pub fn start_tags(input: &str) -> Result<Vec<StartTag>, RewritingError> {
    let mut tags = Vec::new();
    rewrite(input, &mut tags)?;
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tag(name: &str, attributes: &[(&str, &str)], self_closing: bool) -> StartTag {
        StartTag {
            name: String::from(name),
            attributes: attributes
                .iter()
                .map(|&(name, value)| (String::from(name), String::from(value)))
                .collect(),
            self_closing,
        }
    }

    /// Uppercases text and spells out references.
    struct Shout;

    impl MarkupSink for Shout {
        fn start_tag(&mut self, _element: &mut Element) -> Result<(), AttributeNameError> {
            Ok(())
        }

        fn text(&mut self, text: &str) -> String {
            text.to_uppercase()
        }

        fn entity_ref(&mut self, name: &str) -> String {
            format!("[{name}]")
        }
    }

    #[test]
    fn test_split_references_plain_text() {
        assert_eq!(split_references("Hello"), vec![Piece::Text("Hello")]);
        assert_eq!(split_references(""), vec![]);
    }

    #[test]
    fn test_split_references() {
        assert_eq!(
            split_references("&lt;b&gt;&#xA9;&#169;"),
            vec![
                Piece::EntityRef("lt"),
                Piece::Text("b"),
                Piece::EntityRef("gt"),
                Piece::CharRef("xA9"),
                Piece::CharRef("169"),
            ]
        );
    }

    #[test]
    fn test_split_references_incomplete() {
        assert_eq!(
            split_references("Tom & Jerry &amp &#; &#xZ; &1;"),
            vec![Piece::Text("Tom & Jerry &amp &#; &#xZ; &1;")]
        );
    }

    #[test]
    fn test_rewrite_text() {
        assert_eq!(rewrite_text("a&amp;b&#65;", &mut Shout), "A[amp]B&#65;");
    }

    #[test]
    fn test_rewrite_keeps_unchanged_markup() -> anyhow::Result<()> {
        let input = "<p class='x' hidden>Fish &amp; chips<br/></p><!-- note --></b>";
        assert_eq!(rewrite(input, &mut Vec::<StartTag>::new())?, input);
        Ok(())
    }

    #[test]
    fn test_rewrite_text_nodes() -> anyhow::Result<()> {
        assert_eq!(
            rewrite("<b title=\"x\">bold</b> &amp; <i>it</i>", &mut Shout)?,
            "<b title=\"x\">BOLD</b> [amp] <i>IT</i>"
        );
        Ok(())
    }

    #[test]
    fn test_rewrite_text_without_markup() -> anyhow::Result<()> {
        assert_eq!(rewrite("a < b", &mut Shout)?, "A < B");
        Ok(())
    }

    #[test]
    fn test_start_tags() -> anyhow::Result<()> {
        assert_eq!(
            start_tags(r#"<a href="/home" class='nav' data-x=1 hidden>Home</a><br/>"#)?,
            vec![
                tag(
                    "a",
                    &[("href", "/home"), ("class", "nav"), ("data-x", "1"), ("hidden", "")],
                    false
                ),
                tag("br", &[], true),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_start_tags_keep_raw_values() -> anyhow::Result<()> {
        assert_eq!(
            start_tags(r#"<img alt="Fish &amp; chips">"#)?,
            vec![tag("img", &[("alt", "Fish &amp; chips")], false)]
        );
        Ok(())
    }

    #[test]
    fn test_start_tags_unquoted_slash() -> anyhow::Result<()> {
        // The slash belongs to an unquoted value.
        assert_eq!(
            start_tags("<a href=x/>")?,
            vec![tag("a", &[("href", "x/")], false)]
        );
        assert_eq!(
            start_tags("<a href=\"x\"/>")?,
            vec![tag("a", &[("href", "x")], true)]
        );
        Ok(())
    }
}
