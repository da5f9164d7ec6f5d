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

//! Validated run configuration.

use crate::catalog::load_catalog;
use crate::diff::diff_file;
use crate::process::munge_file;
use crate::Report;
use anyhow::Context;
use log::{error, info};
use polib::catalog::Catalog;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--canonical is required when creating a diff")]
    DiffWithoutCanonical,
}

/// What to do with each catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Fill in translations in place.
    Munge {
        blank: bool,
        canonical: Option<PathBuf>,
    },
    /// Write the messages needing a translation to a new catalog.
    Diff { canonical: PathBuf },
}

impl Mode {
    /// Combine the command line switches into a mode.
    ///
    /// `blank` has no effect in diff mode: the diff is always
    /// untranslated.
    pub fn new(diff: bool, blank: bool, canonical: Option<PathBuf>) -> Result<Mode, ConfigError> {
        match (diff, canonical) {
            (true, Some(canonical)) => Ok(Mode::Diff { canonical }),
            (true, None) => Err(ConfigError::DiffWithoutCanonical),
            (false, canonical) => Ok(Mode::Munge { blank, canonical }),
        }
    }
}

/// A [`Mode`] with its canonical catalog loaded, ready to be applied
/// to catalogs.
pub enum Job {
    Munge {
        blank: bool,
        canonical: Option<Catalog>,
    },
    Diff {
        canonical: Catalog,
    },
}

impl Job {
    /// Load the canonical catalog of `mode`, if any.
    pub fn load(mode: &Mode) -> anyhow::Result<Job> {
        let load = |path: &Path| {
            load_catalog(path)
                .with_context(|| format!("Could not load canonical catalog {}", path.display()))
        };
        let job = match mode {
            Mode::Munge { blank, canonical } => Job::Munge {
                blank: *blank,
                canonical: canonical.as_deref().map(load).transpose()?,
            },
            Mode::Diff { canonical } => Job::Diff {
                canonical: load(canonical)?,
            },
        };
        Ok(job)
    }

    /// Apply the job to the catalog at `path`.
    pub fn run(&self, path: &Path) -> anyhow::Result<Report> {
        match self {
            Job::Munge { blank, canonical } => munge_file(path, *blank, canonical.as_ref()),
            Job::Diff { canonical } => diff_file(path, canonical),
        }
    }

    /// Apply the job to every catalog in `paths`.
    ///
    /// A catalog which cannot be processed does not stop the others.
    /// Returns the reports of the catalogs processed and the errors of
    /// the others, both in the order of `paths`.
    pub fn run_all(&self, paths: &[PathBuf]) -> (Vec<Report>, Vec<anyhow::Error>) {
        let mut reports = Vec::new();
        let mut failures = Vec::new();
        for path in paths {
            info!("Processing {}", path.display());
            match self.run(path) {
                Ok(report) => reports.push(report),
                Err(err) => {
                    error!("{err:#}");
                    failures.push(err);
                }
            }
        }
        (reports, failures)
    }
}
