//! # Temporary Directory Fixtures
//!
//! This module provides [`TempFixture`], a disposable test-scoped directory
//! with guaranteed setup and teardown. Each fixture owns exactly one fresh
//! directory for the lifetime of one test case; the directory is removed
//! when the fixture is torn down or dropped, even if the test body panicked.
//!
//! Scenarios that need a populated directory use [`TempFixture::setup_with`]
//! and lay out the tree in a closure, rather than specializing a fixture
//! type per scenario.

use std::{
    fs, io,
    path::{Path, PathBuf},
    thread,
};

/// The base location fixtures are created under.
///
/// Prefers the shared temporary-storage root when the host has one, and
/// otherwise falls back to a directory relative to the current working
/// directory.
fn base_dir() -> PathBuf {
    let shared = PathBuf::from("/tmp");
    if shared.is_dir() {
        shared
    } else {
        PathBuf::from("dirsweep_fixtures")
    }
}

/// A temporary directory owned by a single test case.
///
/// Created by [`TempFixture::setup`], destroyed by [`TempFixture::teardown`]
/// or on drop. Fixtures must not be reused across tests; each test should
/// pass its own `name` so a leftover directory from a failed teardown is
/// detected rather than silently reused.
pub struct TempFixture {
    path: PathBuf,
}

impl TempFixture {
    /// Creates one fresh fixture directory named `name` under the base
    /// location.
    ///
    /// # Returns
    ///
    /// Fails if a directory already exists at that location; a stale
    /// fixture indicates a prior teardown failure and must not be reused.
    pub fn setup(name: &str) -> io::Result<Self> {
        let base = base_dir();
        if base != Path::new("/tmp") {
            fs::create_dir_all(&base)?;
        }

        let path = base.join(name);
        fs::create_dir(&path)?;
        Ok(Self { path })
    }

    /// Creates a fixture and populates it with a scenario-specific layout.
    ///
    /// # Arguments
    ///
    /// - `name` - The fixture directory name under the base location.
    /// - `populate` - Called once with the fresh directory's path to create
    ///   whatever files and subdirectories the scenario requires.
    ///
    /// # Returns
    ///
    /// The populated fixture. If `populate` fails, the directory is removed
    /// before the error is returned.
    pub fn setup_with(
        name: &str,
        populate: impl FnOnce(&Path) -> io::Result<()>,
    ) -> io::Result<Self> {
        let fixture = Self::setup(name)?;
        populate(&fixture.path)?;
        Ok(fixture)
    }

    /// The path of the fixture directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Recursively removes the fixture directory and everything in it.
    ///
    /// Asserts afterward that the location no longer exists. Dropping the
    /// fixture performs the same removal, so calling this explicitly is
    /// only needed to observe a removal failure.
    pub fn teardown(self) -> io::Result<()> {
        fs::remove_dir_all(&self.path)?;
        assert!(
            !self.path.exists(),
            "Fixture directory '{}' still exists after teardown",
            self.path.display()
        );
        std::mem::forget(self);
        Ok(())
    }
}

impl Drop for TempFixture {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
        // Asserting during an unwind would abort the process.
        if !thread::panicking() {
            assert!(
                !self.path.exists(),
                "Fixture directory '{}' still exists after teardown",
                self.path.display()
            );
        }
    }
}
