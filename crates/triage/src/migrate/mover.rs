use crate::error::{Result, TriageError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Filesystem operations the mover depends on.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling link still counts as occupied
        fs::symlink_metadata(path).is_ok()
    }

    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}

/// One completed relocation. Both paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl MoveRecord {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// The relocation that puts the file back where it came from.
    pub fn inverse(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
        }
    }

    /// Shell form of the relocation, as written to the action log.
    pub fn command_text(&self) -> String {
        format!(
            "mv {} {}",
            shell_quote(&self.source),
            shell_quote(&self.destination)
        )
    }
}

fn shell_quote(path: &Path) -> String {
    let raw = path.to_string_lossy();
    format!("'{}'", raw.replace('\'', r"'\''"))
}

pub struct Mover<F: FileSystem> {
    fs: F,
    dry_run: bool,
}

impl<F: FileSystem> Mover<F> {
    pub fn new(fs: F, dry_run: bool) -> Self {
        Self { fs, dry_run }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Renames `source` to `destination`.
    ///
    /// An existing destination is refused rather than overwritten. In dry-run
    /// mode the filesystem is not touched at all and the record is returned as
    /// if the rename had succeeded.
    pub fn relocate(&mut self, source: &Path, destination: &Path) -> Result<MoveRecord> {
        let record = MoveRecord::new(source, destination);

        if self.dry_run {
            log::info!("DRY RUN: Would execute {}", record.command_text());
            return Ok(record);
        }

        if !self.fs.exists(source) {
            return Err(TriageError::FileNotFound(source.to_path_buf()));
        }

        if self.fs.exists(destination) {
            return Err(TriageError::DestinationExists(destination.to_path_buf()));
        }

        self.fs
            .rename(source, destination)
            .map_err(|source_err| TriageError::Move {
                from: source.to_path_buf(),
                to: destination.to_path_buf(),
                source: source_err,
            })?;

        log::info!("Moved {} -> {}", source.display(), destination.display());

        Ok(record)
    }

    /// Undoes `record`, returning the reversing relocation.
    pub fn reverse(&mut self, record: &MoveRecord) -> Result<MoveRecord> {
        let inverse = record.inverse();
        self.relocate(&inverse.source, &inverse.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relocate_and_reverse() {
        let temp_dir = tempfile::tempdir().unwrap();
        let inbox = temp_dir.path().join("inbox");
        let private = temp_dir.path().join("private");
        fs::create_dir(&inbox).unwrap();
        fs::create_dir(&private).unwrap();
        fs::write(inbox.join("a.txt"), b"hello").unwrap();

        let mut mover = Mover::new(LocalFs, false);
        let record = mover
            .relocate(&inbox.join("a.txt"), &private.join("a.txt"))
            .unwrap();

        assert_eq!(record.source, inbox.join("a.txt"));
        assert_eq!(record.destination, private.join("a.txt"));
        assert!(!inbox.join("a.txt").exists());
        assert_eq!(fs::read(private.join("a.txt")).unwrap(), b"hello");

        let undo = mover.reverse(&record).unwrap();
        assert_eq!(undo, record.inverse());
        assert!(inbox.join("a.txt").exists());
        assert!(!private.join("a.txt").exists());
    }

    #[test]
    fn test_missing_source_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut mover = Mover::new(LocalFs, false);
        let result = mover.relocate(
            &temp_dir.path().join("ghost.txt"),
            &temp_dir.path().join("elsewhere.txt"),
        );
        assert!(matches!(result, Err(TriageError::FileNotFound(_))));
    }

    #[test]
    fn test_existing_destination_is_not_overwritten() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = temp_dir.path().join("new.txt");
        let dest = temp_dir.path().join("old.txt");
        fs::write(&source, b"new").unwrap();
        fs::write(&dest, b"old").unwrap();

        let mut mover = Mover::new(LocalFs, false);
        let result = mover.relocate(&source, &dest);

        assert!(matches!(result, Err(TriageError::DestinationExists(_))));
        assert_eq!(fs::read(&dest).unwrap(), b"old");
        assert!(source.exists());
    }

    #[test]
    fn test_missing_destination_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = temp_dir.path().join("a.txt");
        fs::write(&source, b"a").unwrap();

        let mut mover = Mover::new(LocalFs, false);
        let result = mover.relocate(&source, &temp_dir.path().join("no/such/dir/a.txt"));

        assert!(matches!(result, Err(TriageError::Move { .. })));
        assert!(source.exists());
    }

    #[test]
    fn test_dry_run_leaves_files_alone() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = temp_dir.path().join("a.txt");
        let dest = temp_dir.path().join("b.txt");
        fs::write(&source, b"a").unwrap();

        let mut mover = Mover::new(LocalFs, true);
        let record = mover.relocate(&source, &dest).unwrap();

        assert_eq!(record, MoveRecord::new(&source, &dest));
        assert!(source.exists());
        assert!(!dest.exists());
        assert!(mover.is_dry_run());
    }

    #[test]
    fn test_inverse_round_trip() {
        let record = MoveRecord::new("/in/a.txt", "/private/a.txt");
        assert_eq!(record.inverse().source, PathBuf::from("/private/a.txt"));
        assert_eq!(record.inverse().destination, PathBuf::from("/in/a.txt"));
        assert_eq!(record.inverse().inverse(), record);
    }

    #[test]
    fn test_command_text() {
        let record = MoveRecord::new("/home/me/inbox/it's here.txt", "/home/me/private/it's here.txt");
        insta::assert_snapshot!(
            record.command_text(),
            @r"mv '/home/me/inbox/it'\''s here.txt' '/home/me/private/it'\''s here.txt'"
        );
    }
}
