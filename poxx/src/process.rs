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

//! Fill in the translations of a catalog.
//!
//! This file contains the main logic used by `poxx` when it is not
//! run with `--diff`.

use crate::catalog::{index_by_msgid, load_catalog, write_catalog};
use crate::munge::munge;
use crate::Report;
use anyhow::Context;
use log::{debug, info};
use polib::catalog::Catalog;
use polib::message::{MessageMutView, MessageView};
use std::path::Path;

/// Fill in every message of `catalog`.
///
/// A message whose `msgid` has a translation in `canonical` gets that
/// translation. Otherwise the message is left untranslated if `blank`
/// is set, or it gets the munged `msgid` and loses its fuzzy flag.
///
/// Messages are never added, removed or reordered, and the `msgid` is
/// never changed. Returns the number of messages processed.
pub fn process_catalog(
    catalog: &mut Catalog,
    blank: bool,
    canonical: Option<&Catalog>,
) -> anyhow::Result<usize> {
    let canonical = canonical.map(index_by_msgid).unwrap_or_default();

    let mut count = 0;
    for mut message in catalog.messages_mut() {
        let known = canonical
            .get(message.msgid())
            .filter(|known| known.is_translated() && known.is_plural() == message.is_plural());
        match known {
            Some(known) => {
                debug!("Using canonical translation for {:?}", message.msgid());
                copy_translation(&mut message, *known)?;
            }
            None if blank => clear_translation(&mut message)?,
            None => {
                munge_translation(&mut message)?;
                message.flags_mut().remove_flag("fuzzy");
            }
        }
        count += 1;
    }

    Ok(count)
}

fn copy_translation<M>(message: &mut M, known: &dyn MessageView) -> anyhow::Result<()>
where
    M: MessageView + MessageMutView + ?Sized,
{
    if known.is_plural() {
        *message.msgstr_plural_mut()? = known.msgstr_plural()?.to_vec();
    } else {
        message.set_msgstr(String::from(known.msgstr()?))?;
    }
    Ok(())
}

fn clear_translation<M>(message: &mut M) -> anyhow::Result<()>
where
    M: MessageView + MessageMutView + ?Sized,
{
    if message.is_plural() {
        for form in message.msgstr_plural_mut()? {
            form.clear();
        }
    } else {
        message.set_msgstr(String::new())?;
    }
    Ok(())
}

/// Munge the `msgid` into the `msgstr`. For plural messages the first
/// form gets the munged `msgid` and the remaining forms the munged
/// `msgid_plural`.
fn munge_translation<M>(message: &mut M) -> anyhow::Result<()>
where
    M: MessageView + MessageMutView + ?Sized,
{
    let singular = munge_msgid(message.msgid())?;
    if message.is_plural() {
        let plural = munge_msgid(message.msgid_plural()?)?;
        let forms = message.msgstr_plural()?.len().max(2);
        let mut msgstr_plural = vec![plural; forms];
        msgstr_plural[0] = singular;
        *message.msgstr_plural_mut()? = msgstr_plural;
    } else {
        message.set_msgstr(singular)?;
    }
    Ok(())
}

fn munge_msgid(msgid: &str) -> anyhow::Result<String> {
    munge(msgid).with_context(|| format!("Could not munge {msgid:?}"))
}

/// Fill in the translations of the catalog at `path` and write it
/// back in place.
pub fn munge_file(path: &Path, blank: bool, canonical: Option<&Catalog>) -> anyhow::Result<Report> {
    let mut catalog = load_catalog(path)?;
    info!("Processing {} messages in {}", catalog.count(), path.display());
    let count = process_catalog(&mut catalog, blank, canonical)?;
    write_catalog(&catalog, path)?;
    Ok(Report::Munged {
        path: path.to_path_buf(),
        count,
    })
}
