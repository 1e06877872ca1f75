//! # Directory Clearing
//!
//! The main entry point is [`clear_dir`], which deletes every regular file
//! in a directory tree through a caller-supplied [`Deleter`] while leaving
//! every directory in place.

use std::path::Path;

use walkdir::WalkDir;

use crate::sweep::{deleter::Deleter, errors::ClearError};

/// Recursively deletes all files in a directory, preserving its
/// subdirectory structure.
///
/// Every entry classified as a regular file by the directory walk is passed
/// to `deleter` exactly once, with its full path. Symbolic links are not
/// followed, so a symlink entry is not classified as a regular file and is
/// left untouched. Directories are never deleted or renamed. Traversal
/// order is unspecified.
///
/// The first error raised by the walk or by the deletion backend aborts the
/// remainder of the traversal; files processed before the error stay
/// deleted.
///
/// # Arguments
///
/// - `path` - The directory to clear.
/// - `deleter` - The deletion backend invoked once per file.
///
/// # Returns
///
/// Returns `Ok(())` on success. Fails with [`ClearError::NotFound`] if
/// `path` does not exist, [`ClearError::NotADirectory`] if it exists but is
/// not a directory, and the propagated walk or backend error otherwise.
pub fn clear_dir<D: Deleter>(path: &Path, deleter: &D) -> Result<(), ClearError> {
    if !path.exists() {
        return Err(ClearError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(ClearError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    for entry in WalkDir::new(path) {
        let entry = entry.map_err(|error| ClearError::Walk {
            path: path.to_path_buf(),
            error,
        })?;

        if entry.file_type().is_file() {
            deleter
                .delete(entry.path())
                .map_err(|error| ClearError::Delete {
                    path: entry.path().to_path_buf(),
                    error,
                })?;
        }
    }

    Ok(())
}

/// Counts the regular files in a directory tree.
///
/// Applies the same input validation as [`clear_dir`]; used to size the
/// progress bar before a clear operation starts.
pub fn count_files(path: &Path) -> Result<u64, ClearError> {
    if !path.exists() {
        return Err(ClearError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(ClearError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let mut total = 0;
    for entry in WalkDir::new(path) {
        let entry = entry.map_err(|error| ClearError::Walk {
            path: path.to_path_buf(),
            error,
        })?;
        if entry.file_type().is_file() {
            total += 1;
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::TempFixture;
    use crate::sweep::deleter::OsDeleter;

    use std::{fs, io, path::PathBuf};

    /// Tests that clearing a nonexistent path fails with `NotFound`.
    #[test]
    fn test_nonexistent_input() {
        let result = clear_dir(Path::new("nonexistent_path"), &OsDeleter);
        assert!(matches!(result, Err(ClearError::NotFound { .. })));
    }

    /// Tests that clearing a path that refers to a file fails with
    /// `NotADirectory` and performs no deletion.
    #[test]
    fn test_file_input() {
        let fixture = TempFixture::setup("dirsweep_clear_file_input").unwrap();
        let test_file = fixture.path().join("testfile.txt");
        fs::write(&test_file, "contents").unwrap();

        let result = clear_dir(&test_file, &OsDeleter);
        assert!(matches!(result, Err(ClearError::NotADirectory { .. })));
        assert!(test_file.exists(), "Input file must not be deleted");
    }

    /// Tests that clearing an empty directory succeeds and leaves the
    /// directory in place.
    #[test]
    fn test_empty_directory() {
        let fixture = TempFixture::setup("dirsweep_clear_empty").unwrap();

        clear_dir(fixture.path(), &OsDeleter).unwrap();
        assert!(fixture.path().is_dir());
        assert_eq!(fs::read_dir(fixture.path()).unwrap().count(), 0);
    }

    /// Tests that clearing an already-cleared directory is a no-op.
    #[test]
    fn test_idempotence() {
        let fixture = TempFixture::setup_with("dirsweep_clear_idempotent", |root| {
            fs::write(root.join("A.txt"), "")
        })
        .unwrap();

        clear_dir(fixture.path(), &OsDeleter).unwrap();
        clear_dir(fixture.path(), &OsDeleter).unwrap();
        assert!(fixture.path().is_dir());
    }

    /// A backend that always fails, used to test error propagation.
    struct FailingDeleter;

    impl Deleter for FailingDeleter {
        fn delete(&self, _path: &Path) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    /// Tests that a backend failure aborts the traversal and surfaces as
    /// a `Delete` error.
    #[test]
    fn test_backend_failure_propagates() {
        let fixture = TempFixture::setup_with("dirsweep_clear_backend_failure", |root| {
            fs::write(root.join("A.txt"), "")
        })
        .unwrap();

        let result = clear_dir(fixture.path(), &FailingDeleter);
        assert!(matches!(result, Err(ClearError::Delete { .. })));
        assert!(
            fixture.path().join("A.txt").exists(),
            "Failing backend must leave the file behind"
        );
    }

    /// Tests that `count_files` reports the number of files at any depth.
    #[test]
    fn test_count_files() {
        let fixture = TempFixture::setup_with("dirsweep_count_files", |root| {
            fs::create_dir_all(root.join("sub").join("sub"))?;
            for relative in [
                PathBuf::from("A.txt"),
                PathBuf::from("sub").join("B.txt"),
                PathBuf::from("sub").join("sub").join("C.txt"),
            ] {
                fs::write(root.join(relative), "")?;
            }
            Ok(())
        })
        .unwrap();

        assert_eq!(count_files(fixture.path()).unwrap(), 3);
    }
}
