//! Control directory fixtures at two realism levels.
//!
//! Choose the lowest-realism fixture that satisfies your test's needs:
//! fakes are faster and have no dependency on libgit2 behaviour.

use std::fs;
use std::path::Path;

/// Creates the minimal layout that qualifies `path` itself as a control
/// directory: `objects/pack/`, `refs/heads/`, `HEAD` and `config`.
///
/// Realism level: **FAKE**, directory structure only, no object store.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_control_dir(path: &Path, config: &str) {
    fs::create_dir_all(path.join("objects/pack"))
        .unwrap_or_else(|e| panic!("fake_control_dir: failed to create objects/pack: {e}"));
    fs::create_dir_all(path.join("refs/heads"))
        .unwrap_or_else(|e| panic!("fake_control_dir: failed to create refs/heads: {e}"));
    fs::write(path.join("HEAD"), "ref: refs/heads/main\n")
        .unwrap_or_else(|e| panic!("fake_control_dir: failed to write HEAD: {e}"));
    fs::write(path.join("config"), config)
        .unwrap_or_else(|e| panic!("fake_control_dir: failed to write config: {e}"));
}

/// Creates a fake `.git` control directory inside the working copy `path`.
///
/// Realism level: **FAKE**, see [`fake_control_dir`].
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_git_dir(path: &Path) {
    fake_control_dir(&path.join(".git"), "[core]\n\tbare = false\n");
}

/// Writes a `.git` redirect file into `worktree` with the given target line.
///
/// The content is written verbatim after the `gitdir: ` prefix, so relative
/// targets stay relative.
///
/// # Panics
/// Panics if the directory cannot be created or the file cannot be written.
pub fn gitdir_file(worktree: &Path, target: &str) {
    fs::create_dir_all(worktree)
        .unwrap_or_else(|e| panic!("gitdir_file: failed to create {}: {e}", worktree.display()));
    fs::write(worktree.join(".git"), format!("gitdir: {target}\n"))
        .unwrap_or_else(|e| panic!("gitdir_file: failed to write .git: {e}"));
}

/// Initialises a real git repository using `git2` (no initial commit).
///
/// Realism level: **REAL**, valid git object store, empty history.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// Initialises a real bare git repository using `git2`.
///
/// Realism level: **REAL**, valid git object store, empty history.
///
/// # Panics
/// Panics if `git2::Repository::init_bare` fails.
pub fn real_bare_repo(path: &Path) -> git2::Repository {
    git2::Repository::init_bare(path).unwrap_or_else(|e| {
        panic!(
            "real_bare_repo: failed to init bare repository at {}: {e}",
            path.display()
        )
    })
}
