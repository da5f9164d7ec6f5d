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

//! Munge PO files so that strings not yet marked for translation stand
//! out.
//!
//! Run this with one or more PO files:
//!
//! ```text
//! poxx locale/xx/LC_MESSAGES/django.po
//! ```
//!
//! Every `msgstr` is set to its `msgid`, spelled with lookalike
//! accented letters. Select the `xx` language in your application and
//! every translated string looks odd, while strings which still need
//! to be marked for translation look normal.

use anyhow::bail;
use clap::Parser;
use poxx::config::{Job, Mode};
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The PO files to process.
    #[arg(value_name = "PO_FILE", required = true)]
    po_files: Vec<PathBuf>,
    /// Take translations from this canonical PO file where it has them.
    #[arg(short, long, value_name = "CANONICAL_PO")]
    canonical: Option<PathBuf>,
    /// Create a PO file with the messages not translated in the
    /// canonical PO file, instead of munging. Requires --canonical.
    #[arg(short, long)]
    diff: bool,
    /// Mark messages as untranslated instead of munging them.
    #[arg(short, long)]
    blank: bool,
}

#[allow(clippy::print_stdout)]
fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or("RUST_LOG", "warn"));
    let args = Args::parse();

    // Nothing is touched unless the configuration is valid and the
    // canonical catalog can be read.
    let mode = Mode::new(args.diff, args.blank, args.canonical)?;
    let job = Job::load(&mode)?;

    let (reports, failures) = job.run_all(&args.po_files);
    for report in &reports {
        println!("{report}");
    }

    if !failures.is_empty() {
        bail!(
            "{} of {} PO files could not be processed",
            failures.len(),
            args.po_files.len()
        );
    }

    Ok(())
}
