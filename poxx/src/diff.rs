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

//! Extract the messages which still need a translation.
//!
//! This file contains the main logic used by `poxx --diff`.

use crate::catalog::{copy_message, load_catalog, write_catalog};
use crate::merge::{merge, Merged};
use crate::Report;
use log::info;
use polib::catalog::Catalog;
use polib::message::MessageView;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Collect the messages of `catalog` which need attention with
/// respect to `canonical`.
///
/// These are the messages of `catalog` which are unknown to
/// `canonical`, followed by the messages which are untranslated in
/// `canonical`. Every message in the result is untranslated. The
/// result keeps the metadata of `catalog`.
pub fn diff_catalog(catalog: Catalog, canonical: &Catalog) -> anyhow::Result<Catalog> {
    let Merged {
        catalog: merged,
        obsolete,
    } = merge(catalog, canonical)?;

    // The merged messages are what `catalog` would become after an
    // update. Only their header carries over into the diff.
    let mut diff = Catalog::new(merged.metadata);
    for message in &obsolete {
        diff.append_or_update(copy_message(message, message.source(), false)?);
    }
    for message in canonical.messages().filter(|msg| !msg.is_translated()) {
        diff.append_or_update(copy_message(message, message.source(), false)?);
    }

    Ok(diff)
}

/// The path of the diff catalog for `path`: `sample.po` becomes
/// `sample_diff.po` in the same directory.
pub fn diff_path(path: &Path) -> PathBuf {
    let base = match path.extension() {
        Some(extension) if extension == "po" => path.file_stem(),
        _ => path.file_name(),
    };
    let mut file_name = base.map(OsString::from).unwrap_or_default();
    file_name.push("_diff.po");
    path.with_file_name(file_name)
}

/// Write the diff of the catalog at `path` against `canonical` next to
/// `path`. The catalog at `path` is not modified.
pub fn diff_file(path: &Path, canonical: &Catalog) -> anyhow::Result<Report> {
    let catalog = load_catalog(path)?;
    let diff = diff_catalog(catalog, canonical)?;
    let diff_path = diff_path(path);
    info!(
        "Writing {} messages from {} to {}",
        diff.count(),
        path.display(),
        diff_path.display()
    );
    write_catalog(&diff, &diff_path)?;
    Ok(Report::Diffed {
        path: diff_path,
        count: diff.count(),
    })
}
