//! Control directory qualification and the repository discovery walk

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use gitcfg_fs::{Environment, absolute, absolute_join, clean};

use crate::constants::{GITDIR_PREFIX, GitPath};
use crate::{Error, Result};

/// Test whether `dir` looks like a git control directory.
///
/// Requires an `objects/pack` directory, a `refs` directory and a `config`
/// entry that is not a directory. Any missing or mistyped entry disqualifies
/// it.
pub fn is_git_dir(dir: impl AsRef<Path>) -> bool {
    let dir = dir.as_ref();

    let is_dir = |path: PathBuf| fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false);

    if !is_dir(dir.join(GitPath::ObjectsPack)) {
        return false;
    }
    if !is_dir(dir.join(GitPath::Refs)) {
        return false;
    }

    fs::metadata(dir.join(GitPath::Config))
        .map(|m| !m.is_dir())
        .unwrap_or(false)
}

/// Find the control directory of the repository containing `start`.
///
/// Walks from `start` towards the filesystem root. At each directory:
///
/// 1. A directory that is itself a control directory (bare repository) is
///    returned.
/// 2. A `.git` directory is returned if it qualifies, otherwise the walk
///    fails with [`Error::CorruptGitDir`].
/// 3. A `.git` file must start with `gitdir:` and name a qualifying
///    control directory, resolved relative to the directory holding the
///    file.
/// 4. Without a `.git` entry the walk moves to the parent directory.
///
/// Reaching the root yields [`Error::NotInGitDir`].
pub fn find_git_dir<E: Environment + ?Sized>(env: &E, start: impl AsRef<Path>) -> Result<PathBuf> {
    let start = clean(&absolute(env, start)?);
    let mut dir = start.clone();

    loop {
        tracing::trace!(dir = %dir.display(), "Checking for git dir");

        if is_git_dir(&dir) {
            tracing::debug!(git_dir = %dir.display(), "Found bare git dir");
            return Ok(dir);
        }

        let dot_git = dir.join(GitPath::DotGit);
        match fs::metadata(&dot_git) {
            Err(_) => match dir.parent() {
                Some(parent) => dir = parent.to_path_buf(),
                None => break,
            },
            Ok(meta) if meta.is_dir() => {
                if is_git_dir(&dot_git) {
                    tracing::debug!(git_dir = %dot_git.display(), "Found git dir");
                    return Ok(dot_git);
                }
                return Err(Error::CorruptGitDir { path: dot_git });
            }
            Ok(_) => return follow_gitdir_file(env, &dir, &dot_git),
        }
    }

    Err(Error::NotInGitDir { start })
}

/// Find the repository-local config file for the repository containing `start`.
pub fn find_git_config<E: Environment + ?Sized>(
    env: &E,
    start: impl AsRef<Path>,
) -> Result<PathBuf> {
    find_git_dir(env, start).map(|dir| dir.join(GitPath::Config))
}

/// Resolve a `.git` redirect file found in `dir`.
fn follow_gitdir_file<E: Environment + ?Sized>(env: &E, dir: &Path, file: &Path) -> Result<PathBuf> {
    let handle = File::open(file).map_err(|e| Error::io(file, e))?;

    let mut line = String::new();
    BufReader::new(handle)
        .read_line(&mut line)
        .map_err(|e| Error::io(file, e))?;

    let Some(target) = line.strip_prefix(GITDIR_PREFIX) else {
        return Err(Error::BadGitDirFile {
            path: file.to_path_buf(),
        });
    };

    let target = absolute_join(env, dir, target.trim())?;
    if is_git_dir(&target) {
        tracing::debug!(
            file = %file.display(),
            git_dir = %target.display(),
            "Followed gitdir redirect"
        );
        return Ok(target);
    }

    Err(Error::CorruptGitDirTarget {
        file: file.to_path_buf(),
        target,
    })
}
