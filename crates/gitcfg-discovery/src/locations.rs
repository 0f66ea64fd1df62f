//! Locations of the system, global and repository-local config files

use std::fs;
use std::path::{Path, PathBuf};

use gitcfg_fs::{Environment, expand_home, resolve_xdg_config_home, vars};
use serde::Serialize;

use crate::constants::{GitPath, SYSTEM_CONFIG};
use crate::{Error, Result, find_git_dir};

/// The system-wide config file: `$GIT_CONFIG_SYSTEM` or `/etc/gitconfig`.
pub fn system_config_file<E: Environment + ?Sized>(env: &E) -> PathBuf {
    env.non_empty_var(vars::GIT_CONFIG_SYSTEM)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SYSTEM_CONFIG))
}

/// The per-user config file.
///
/// `$GIT_CONFIG_GLOBAL` wins when set. Otherwise the XDG location
/// (`$XDG_CONFIG_HOME/git/config` or `~/.config/git/config`) is used if that
/// file exists, and `~/.gitconfig` is returned as the fallback whether it
/// exists or not.
pub fn global_config_file<E: Environment + ?Sized>(env: &E) -> Result<PathBuf> {
    if let Some(file) = env.non_empty_var(vars::GIT_CONFIG_GLOBAL) {
        return Ok(PathBuf::from(file));
    }

    let xdg = resolve_xdg_config_home(env, GitPath::Config.as_str())?;
    if fs::metadata(&xdg).is_ok() {
        return Ok(xdg);
    }

    Ok(expand_home(env, GitPath::UserConfig)?)
}

/// Every configuration file that contributes to a repository's effective
/// configuration, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigLocations {
    /// Control directory of the enclosing repository, if any
    pub git_dir: Option<PathBuf>,
    /// System-wide config file
    pub system: PathBuf,
    /// Per-user config file; `None` when no home directory is known
    pub global: Option<PathBuf>,
    /// Repository-local config file; `None` outside a repository
    pub local: Option<PathBuf>,
}

impl ConfigLocations {
    /// Discover config file locations for a repository containing `start`.
    ///
    /// Being outside a repository and lacking a home directory are both
    /// normal and leave the corresponding location empty. A corrupt control
    /// directory or redirect file is an error.
    pub fn discover<E: Environment + ?Sized>(env: &E, start: impl AsRef<Path>) -> Result<Self> {
        let system = system_config_file(env);

        let global = match global_config_file(env) {
            Ok(path) => Some(path),
            Err(Error::Fs(gitcfg_fs::Error::HomeNotFound)) => {
                tracing::debug!("No home directory, skipping global config");
                None
            }
            Err(e) => return Err(e),
        };

        let git_dir = match find_git_dir(env, start) {
            Ok(dir) => Some(dir),
            Err(Error::NotInGitDir { start }) => {
                tracing::debug!(start = %start.display(), "Not inside a repository");
                None
            }
            Err(e) => return Err(e),
        };
        let local = git_dir.as_ref().map(|dir| dir.join(GitPath::Config));

        Ok(Self {
            git_dir,
            system,
            global,
            local,
        })
    }
}
