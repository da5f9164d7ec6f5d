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

//! Reading, writing and copying catalog messages.

use anyhow::Context;
use polib::catalog::Catalog;
use polib::message::{Message, MessageView};
use polib::po_file;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Load the catalog at `path`.
pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    po_file::parse(path).with_context(|| format!("Could not parse {} as PO file", path.display()))
}

/// Write `catalog` to `path`.
///
/// The catalog is first written to a temporary file next to `path`,
/// which then replaces `path`. A failed write leaves the old file in
/// place.
pub fn write_catalog(catalog: &Catalog, path: &Path) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file = tempfile::Builder::new()
        .prefix(".poxx-")
        .suffix(".po")
        .tempfile_in(dir)
        .with_context(|| format!("Could not create temporary file in {}", dir.display()))?;

    po_file::write(catalog, file.path())
        .with_context(|| format!("Could not write catalog to {}", path.display()))?;
    // Keep the mode of the file we replace.
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(file.path(), metadata.permissions())
            .with_context(|| format!("Could not copy permissions of {}", path.display()))?;
    }
    file.persist(path)
        .with_context(|| format!("Could not replace {}", path.display()))?;

    Ok(())
}

/// Index the messages of `catalog` by `msgid`.
///
/// The message context is ignored. If several messages share a
/// `msgid`, the first one wins.
pub fn index_by_msgid(catalog: &Catalog) -> HashMap<&str, &dyn MessageView> {
    let mut index = HashMap::new();
    for message in catalog.messages() {
        index.entry(message.msgid()).or_insert(message);
    }
    index
}

/// Copy `message`, replacing its source references with `source`.
///
/// If `keep_translation` is false, the copy is untranslated: `msgstr`
/// is empty, and so is every plural form.
pub fn copy_message(
    message: &dyn MessageView,
    source: &str,
    keep_translation: bool,
) -> anyhow::Result<Message> {
    let copy = if message.is_plural() {
        let forms = message.msgstr_plural()?;
        let msgstr_plural = if keep_translation {
            forms.to_vec()
        } else {
            vec![String::new(); forms.len().max(2)]
        };
        Message::build_plural()
            .with_comments(String::from(message.comments()))
            .with_source(String::from(source))
            .with_flags(message.flags().clone())
            .with_msgctxt(String::from(message.msgctxt()))
            .with_msgid(String::from(message.msgid()))
            .with_msgid_plural(String::from(message.msgid_plural()?))
            .with_msgstr_plural(msgstr_plural)
            .done()
    } else {
        let msgstr = if keep_translation {
            String::from(message.msgstr()?)
        } else {
            String::new()
        };
        Message::build_singular()
            .with_comments(String::from(message.comments()))
            .with_source(String::from(source))
            .with_flags(message.flags().clone())
            .with_msgctxt(String::from(message.msgctxt()))
            .with_msgid(String::from(message.msgid()))
            .with_msgstr(msgstr)
            .done()
    };
    Ok(copy)
}

// Create a catalog from the translation pairs given.
#[cfg(test)]
pub(crate) fn create_catalog(translations: &[(&str, &str)]) -> Catalog {
    use polib::metadata::CatalogMetadata;

    let mut catalog = Catalog::new(CatalogMetadata::new());
    for (idx, (msgid, msgstr)) in translations.iter().enumerate() {
        let message = Message::build_singular()
            .with_source(format!("templates/page.html:{}", idx + 1))
            .with_msgid(String::from(*msgid))
            .with_msgstr(String::from(*msgstr))
            .done();
        catalog.append_or_update(message);
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use polib::message::MessageFlags;
    use polib::metadata::CatalogMetadata;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_index_by_msgid() {
        let catalog = create_catalog(&[("One", "Uno"), ("Two", "")]);
        let index = index_by_msgid(&catalog);
        assert_eq!(index.len(), 2);
        assert_eq!(index["One"].msgstr().unwrap(), "Uno");
        assert!(!index["Two"].is_translated());
        assert!(!index.contains_key("Three"));
    }

    #[test]
    fn test_copy_message_keeps_translation() -> anyhow::Result<()> {
        let mut flags = MessageFlags::new();
        flags.add_flag("fuzzy");
        let message = Message::build_singular()
            .with_source(String::from("a.html:1"))
            .with_flags(flags)
            .with_msgid(String::from("One"))
            .with_msgstr(String::from("Uno"))
            .done();

        let copy = copy_message(&message, "b.html:2", true)?;
        assert_eq!(copy.msgid(), "One");
        assert_eq!(copy.msgstr()?, "Uno");
        assert_eq!(copy.source(), "b.html:2");
        assert!(copy.is_fuzzy());
        Ok(())
    }

    #[test]
    fn test_copy_message_untranslated() -> anyhow::Result<()> {
        let message = Message::build_singular()
            .with_msgid(String::from("One"))
            .with_msgstr(String::from("Uno"))
            .done();

        let copy = copy_message(&message, "", false)?;
        assert_eq!(copy.msgid(), "One");
        assert_eq!(copy.msgstr()?, "");
        assert!(!copy.is_translated());
        Ok(())
    }

    #[test]
    fn test_copy_plural_message_untranslated() -> anyhow::Result<()> {
        let message = Message::build_plural()
            .with_msgid(String::from("%d file"))
            .with_msgid_plural(String::from("%d files"))
            .with_msgstr_plural(vec![String::from("%d Datei"), String::from("%d Dateien")])
            .done();

        let copy = copy_message(&message, "", false)?;
        assert!(copy.is_plural());
        assert_eq!(copy.msgid_plural()?, "%d files");
        assert_eq!(copy.msgstr_plural()?, &vec![String::new(), String::new()]);
        Ok(())
    }

    #[test]
    fn test_write_and_load_catalog() -> anyhow::Result<()> {
        let tmpdir = tempfile::tempdir().context("Could not create temporary directory")?;
        let path = tmpdir.path().join("xx.po");
        let catalog = create_catalog(&[("Zero", ""), ("One", "Uno")]);

        write_catalog(&catalog, &path)?;
        let loaded = load_catalog(&path)?;
        let messages = loaded
            .messages()
            .map(|msg| (msg.msgid(), msg.msgstr().unwrap()))
            .collect::<Vec<_>>();
        assert_eq!(messages, vec![("Zero", ""), ("One", "Uno")]);

        // Only the catalog itself is left behind.
        assert_eq!(fs::read_dir(tmpdir.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_write_catalog_replaces_file() -> anyhow::Result<()> {
        let tmpdir = tempfile::tempdir().context("Could not create temporary directory")?;
        let path = tmpdir.path().join("xx.po");
        fs::write(&path, "not a catalog")?;

        write_catalog(&Catalog::new(CatalogMetadata::new()), &path)?;
        assert_ne!(fs::read_to_string(&path)?, "not a catalog");
        Ok(())
    }

    #[test]
    fn test_load_missing_catalog() {
        let Err(err) = load_catalog(Path::new("does/not/exist.po")) else {
            panic!("Loading a missing catalog should fail");
        };
        assert!(err.to_string().contains("does/not/exist.po"));
    }
}
