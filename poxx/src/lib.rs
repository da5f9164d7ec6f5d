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

//! Fake translations for Gettext PO files.
//!
//! `poxx` fills the `msgstr` of every message with its `msgid`,
//! rewritten using lookalike accented letters:
//!
//! ```text
//! msgid "Hello %(name)s, see <a title=\"Help\">help</a>"
//! msgstr "Ħḗŀŀǿ %(name)s, şḗḗ <a title=\"Ħḗŀƥ\">ħḗŀƥ</a>"
//! ```
//!
//! Run an application with such a catalog, and every string which
//! went through Gettext is easy to spot, while strings which are not
//! marked for translation yet show up in plain English. Markup and
//! format placeholders are kept as they are, so the application still
//! works.
//!
//! Real translations can be taken from a canonical catalog, and a
//! diff mode extracts the messages which still need a translation.

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

pub mod catalog;
pub mod config;
pub mod diff;
pub mod markup;
pub mod merge;
pub mod munge;
pub mod placeholder;
pub mod process;

/// Summary of the work done on a single catalog.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Report {
    /// The catalog at `path` was rewritten with `count` messages.
    Munged { path: PathBuf, count: usize },
    /// A diff catalog was written to `path` with `count` messages.
    Diffed { path: PathBuf, count: usize },
}

impl Report {
    /// The number of messages written.
    pub fn count(&self) -> usize {
        match self {
            Report::Munged { count, .. } | Report::Diffed { count, .. } => *count,
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Report::Munged { path, count } => {
                write!(f, "Munged {count} messages in {}", path.display())
            }
            Report::Diffed { path, count } => {
                write!(f, "Created {} with {count} translations", path.display())
            }
        }
    }
}
