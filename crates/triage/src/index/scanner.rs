use crate::error::{Result, TriageError};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file awaiting a sort decision, named relative to the working directory.
///
/// The name is kept as the OS gave it, so files whose names are not valid
/// UTF-8 are still sortable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkItem {
    name: OsString,
}

impl WorkItem {
    pub fn new(name: impl Into<OsString>) -> Self {
        Self { name: name.into() }
    }

    /// Display form of the name.
    pub fn name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    pub fn file_name(&self) -> &OsStr {
        &self.name
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.name)
    }
}

impl fmt::Display for WorkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Options for directory enumeration
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub include_hidden: bool,
    pub ignore: Vec<String>,
    /// Files never offered, such as the run's own action log.
    pub exclude: Vec<PathBuf>,
}

impl ScanOptions {
    fn ignore_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.ignore {
            builder.add(Glob::new(pattern)?);
        }
        Ok(builder.build()?)
    }
}

/// Lists the regular files directly inside `dir`, sorted by name.
///
/// Subdirectories and symlinks are never returned. The result is taken once
/// at startup; files appearing later are not picked up.
pub fn list_work_items<P: AsRef<Path>>(dir: P, options: &ScanOptions) -> Result<Vec<WorkItem>> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        return Err(TriageError::FileNotFound(dir.to_path_buf()));
    }

    let ignore = options.ignore_set()?;
    let excluded: Vec<PathBuf> = options
        .exclude
        .iter()
        .filter_map(|p| p.canonicalize().ok())
        .collect();
    let mut items = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name();

        if !options.include_hidden && name.to_string_lossy().starts_with('.') {
            continue;
        }

        if ignore.is_match(name) {
            log::debug!("Ignoring {}", entry.path().display());
            continue;
        }

        if !excluded.is_empty() {
            let canonical = entry.path().canonicalize()?;
            if excluded.contains(&canonical) {
                log::debug!("Excluding {}", entry.path().display());
                continue;
            }
        }

        items.push(WorkItem::new(name));
    }

    log::info!("Found {} files in {}", items.len(), dir.display());

    Ok(items)
}
