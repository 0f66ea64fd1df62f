//! [`TestRepo`] sandbox for configuration resolution scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use gitcfg_fs::{MapEnv, vars};
use tempfile::TempDir;

use crate::git;

/// A temporary directory laid out as a small machine:
///
/// ```text
/// <root>/
///   etc/gitconfig      system config (via GIT_CONFIG_SYSTEM)
///   home/              HOME
///   home/.gitconfig    global config
///   work/              working copy, also the working directory
/// ```
///
/// # Example
///
/// ```rust,no_run
/// use gitcfg_test_utils::repo::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.init_git();
/// repo.write_local_config("[core]\n\teditor = vim\n");
/// let env = repo.env();
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create the sandbox with empty `home/`, `etc/` and `work/` directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        for dir in ["home", "etc", "work"] {
            fs::create_dir_all(temp_dir.path().join(dir)).unwrap();
        }
        Self { temp_dir }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn home(&self) -> PathBuf {
        self.root().join("home")
    }

    pub fn work(&self) -> PathBuf {
        self.root().join("work")
    }

    pub fn system_config(&self) -> PathBuf {
        self.root().join("etc/gitconfig")
    }

    pub fn global_config(&self) -> PathBuf {
        self.home().join(".gitconfig")
    }

    pub fn xdg_config(&self) -> PathBuf {
        self.home().join(".config/git/config")
    }

    pub fn local_config(&self) -> PathBuf {
        self.work().join(".git/config")
    }

    /// An environment pointing HOME, the system config and the working
    /// directory into the sandbox. Nothing else is set.
    pub fn env(&self) -> MapEnv {
        MapEnv::new()
            .with_windows(false)
            .with_home(self.home().to_string_lossy())
            .with_var(
                vars::GIT_CONFIG_SYSTEM,
                self.system_config().to_string_lossy(),
            )
            .with_current_dir(self.work())
    }

    /// Turn `work/` into a working copy with a fake `.git` control directory.
    pub fn init_git(&self) {
        git::fake_git_dir(&self.work());
    }

    /// Turn `work/` into a real repository using `git2`.
    pub fn init_real_git(&self) -> git2::Repository {
        git::real_git_repo(&self.work())
    }

    pub fn write_system_config(&self, content: &str) {
        write(&self.system_config(), content);
    }

    pub fn write_global_config(&self, content: &str) {
        write(&self.global_config(), content);
    }

    pub fn write_xdg_config(&self, content: &str) {
        write(&self.xdg_config(), content);
    }

    pub fn write_local_config(&self, content: &str) {
        write(&self.local_config(), content);
    }

    /// Write `content` to `path` relative to the sandbox root, creating
    /// parent directories.
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root().join(path);
        write(&full_path, content);
        full_path
    }

    /// Create a directory relative to the sandbox root.
    pub fn mkdir(&self, path: &str) -> PathBuf {
        let full_path = self.root().join(path);
        fs::create_dir_all(&full_path).unwrap();
        full_path
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content)
        .unwrap_or_else(|e| panic!("Could not write {}: {e}", path.display()));
}
