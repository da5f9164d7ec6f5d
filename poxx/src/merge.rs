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

//! Merge a reference catalog into a working catalog, the way `msgmerge`
//! does.

use crate::catalog::{copy_message, index_by_msgid};
use polib::catalog::Catalog;
use polib::message::Message;

/// The outcome of [`merge`].
pub struct Merged {
    /// The messages of the reference catalog, in reference order, with
    /// the metadata of the working catalog. Translations are taken
    /// from the working catalog where possible. [`crate::diff`] only
    /// keeps the metadata.
    pub catalog: Catalog,
    /// Messages of the working catalog which have no counterpart in
    /// the reference catalog, in working order. They keep their
    /// translations.
    pub obsolete: Vec<Message>,
}

/// Merge `reference` into `catalog`.
///
/// Messages are matched by `msgid`. For a message found in both
/// catalogs, the translation, flags and comments come from `catalog`
/// while the source references come from `reference`. Messages only
/// found in `reference` are added untranslated. Messages only found in
/// `catalog` become obsolete.
pub fn merge(catalog: Catalog, reference: &Catalog) -> anyhow::Result<Merged> {
    let working = index_by_msgid(&catalog);
    let reference_index = index_by_msgid(reference);

    // Collect the messages first: the metadata is moved out of
    // `catalog` below.
    let mut messages = Vec::new();
    for reference_message in reference.messages() {
        let message = match working.get(reference_message.msgid()) {
            Some(existing) if existing.is_plural() == reference_message.is_plural() => {
                copy_message(*existing, reference_message.source(), true)?
            }
            _ => copy_message(reference_message, reference_message.source(), false)?,
        };
        messages.push(message);
    }

    let mut obsolete = Vec::new();
    for message in catalog.messages() {
        if !reference_index.contains_key(message.msgid()) {
            obsolete.push(copy_message(message, message.source(), true)?);
        }
    }

    let mut merged = Catalog::new(catalog.metadata);
    for message in messages {
        merged.append_or_update(message);
    }

    Ok(Merged {
        catalog: merged,
        obsolete,
    })
}
