//! Well-known names inside and around a git control directory.

use std::path::Path;

/// Prefix of the first line of a `.git` redirect file.
pub const GITDIR_PREFIX: &str = "gitdir:";

/// System-wide configuration file used when no override is set.
pub const SYSTEM_CONFIG: &str = "/etc/gitconfig";

/// Standard git filesystem markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitPath {
    /// The `.git` entry of a working copy (directory or redirect file)
    DotGit,
    /// The `objects/pack` directory of a control directory
    ObjectsPack,
    /// The `refs` directory of a control directory
    Refs,
    /// The `config` file of a control directory
    Config,
    /// The per-user `.gitconfig` file under the home directory
    UserConfig,
}

impl GitPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DotGit => ".git",
            Self::ObjectsPack => "objects/pack",
            Self::Refs => "refs",
            Self::Config => "config",
            Self::UserConfig => ".gitconfig",
        }
    }
}

impl AsRef<Path> for GitPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for GitPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for GitPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
