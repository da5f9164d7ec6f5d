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

//! Rewrite the visible text of a message with lookalike glyphs.
//!
//! A munged message reads like the source text but uses accented
//! letters throughout, so it is obvious at a glance which strings in a
//! running application come from the catalog. Markup and format
//! placeholders are left alone so the message still renders and
//! interpolates correctly.

use crate::markup::{self, MarkupSink};
use crate::placeholder::{split_placeholders, Segment};
use lol_html::errors::{AttributeNameError, RewritingError};
use lol_html::html_content::Element;

const UPPERCASE: [char; 26] = [
    'Ȧ', 'Ɓ', 'Ƈ', 'Ḓ', 'Ḗ', 'Ƒ', 'Ɠ', 'Ħ', 'Ī', 'Ĵ', 'Ķ', 'Ŀ', 'Ḿ', 'Ƞ', 'Ǿ', 'Ƥ', 'Ɋ', 'Ř', 'Ş', 'Ŧ',
    'Ŭ', 'Ṽ', 'Ẇ', 'Ẋ', 'Ẏ', 'Ẑ',
];

const LOWERCASE: [char; 26] = [
    'ȧ', 'ƀ', 'ƈ', 'ḓ', 'ḗ', 'ƒ', 'ɠ', 'ħ', 'ī', 'ĵ', 'ķ', 'ŀ', 'ḿ', 'ƞ', 'ǿ', 'ƥ', 'ɋ', 'ř', 'ş', 'ŧ',
    'ŭ', 'ṽ', 'ẇ', 'ẋ', 'ẏ', 'ẑ',
];

/// Attributes whose values are shown to the user.
const TEXT_ATTRIBUTES: [&str; 2] = ["alt", "title"];

/// Map an ASCII letter to its lookalike. Other characters are
/// returned unchanged.
pub fn substitute(c: char) -> char {
    match c {
        'A'..='Z' => UPPERCASE[usize::from(c as u8 - b'A')],
        'a'..='z' => LOWERCASE[usize::from(c as u8 - b'a')],
        _ => c,
    }
}

/// Munge `text` while keeping its placeholders intact.
fn munge_text(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for segment in split_placeholders(text) {
        match segment {
            Segment::Free(free) => output.extend(free.chars().map(substitute)),
            Segment::Protected(placeholder) => output.push_str(placeholder),
        }
    }
    output
}

/// A [`MarkupSink`] which rewrites the visible text of the markup it
/// is fed: text nodes and the values of `alt` and `title`.
#[derive(Debug, Default)]
pub struct HtmlAwareMunger;

impl HtmlAwareMunger {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupSink for HtmlAwareMunger {
    fn start_tag(&mut self, element: &mut Element) -> Result<(), AttributeNameError> {
        let visible = element
            .attributes()
            .iter()
            .map(|attribute| (attribute.name(), attribute.value()))
            .filter(|(name, _)| {
                TEXT_ATTRIBUTES
                    .iter()
                    .any(|text_attribute| name.eq_ignore_ascii_case(text_attribute))
            })
            .collect::<Vec<_>>();
        for (name, value) in visible {
            // References inside the value must survive as well.
            let munged = markup::rewrite_text(&value, self);
            element.set_attribute(&name, &munged.replace('"', "&quot;"))?;
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> String {
        munge_text(text)
    }
}

/// Munge the visible text of `input`, an HTML fragment.
///
/// Tags, references and format placeholders are kept. Only text nodes
/// and the values of `alt` and `title` attributes are rewritten.
pub fn munge(input: &str) -> Result<String, RewritingError> {
    markup::rewrite(input, &mut HtmlAwareMunger::new())
}
