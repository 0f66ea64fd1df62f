//! Injected access to environment variables and the working directory
//!
//! Discovery reads `HOME`, `XDG_CONFIG_HOME` and friends through the
//! [`Environment`] trait instead of touching the process directly, so tests
//! can describe a home directory without mutating process-wide state.

use std::collections::HashMap;
use std::path::PathBuf;

/// Names of the environment variables consulted during resolution.
pub mod vars {
    pub const HOME: &str = "HOME";
    pub const USERPROFILE: &str = "USERPROFILE";
    pub const HOMEDRIVE: &str = "HOMEDRIVE";
    pub const HOMEPATH: &str = "HOMEPATH";
    pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
    pub const GIT_CONFIG_SYSTEM: &str = "GIT_CONFIG_SYSTEM";
    pub const GIT_CONFIG_GLOBAL: &str = "GIT_CONFIG_GLOBAL";
    pub const GIT_CONFIG_NOSYSTEM: &str = "GIT_CONFIG_NOSYSTEM";
}

/// Read-only view of the process environment.
pub trait Environment {
    /// Look up a variable. Implementations return `None` for unset variables;
    /// callers treat an empty value the same as unset.
    fn var(&self, name: &str) -> Option<String>;

    /// The directory relative paths are resolved against.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Whether home resolution follows the Windows variable precedence.
    fn is_windows(&self) -> bool {
        cfg!(windows)
    }

    /// Look up a variable, treating an empty value as unset.
    fn non_empty_var(&self, name: &str) -> Option<String> {
        self.var(name).filter(|v| !v.is_empty())
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        (**self).current_dir()
    }

    fn is_windows(&self) -> bool {
        (**self).is_windows()
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// An in-memory environment.
///
/// Starts empty: no variables, no working directory, and the host's
/// platform flavour. Useful for deterministic discovery in tests and for
/// embedding callers that resolve configuration on behalf of another user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
    current_dir: Option<PathBuf>,
    windows: bool,
}

impl Default for MapEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl MapEnv {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
            current_dir: None,
            windows: cfg!(windows),
        }
    }

    /// Builder form of [`MapEnv::set_var`].
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_var(name, value);
        self
    }

    /// Builder form of [`MapEnv::set_home`].
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.set_home(home);
        self
    }

    /// Set the directory relative paths resolve against.
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Override the platform flavour used for home resolution.
    pub fn with_windows(mut self, windows: bool) -> Self {
        self.windows = windows;
        self
    }

    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn remove_var(&mut self, name: &str) {
        self.vars.remove(name);
    }

    /// Point every home-related variable at `home`.
    ///
    /// On the Windows flavour `USERPROFILE` is set, and a drive-qualified
    /// path such as `C:\Users\me` is also split into `HOMEDRIVE`/`HOMEPATH`.
    /// Elsewhere only `HOME` is set.
    pub fn set_home(&mut self, home: impl Into<String>) {
        let home = home.into();
        if self.windows {
            if let Some((drive, rest)) = home.split_once(":\\") {
                self.set_var(vars::HOMEDRIVE, format!("{drive}:"));
                self.set_var(vars::HOMEPATH, format!("\\{rest}"));
            }
            self.set_var(vars::USERPROFILE, home);
        } else {
            self.set_var(vars::HOME, home);
        }
    }

    /// Remove every home-related variable.
    pub fn unset_home(&mut self) {
        if self.windows {
            self.remove_var(vars::USERPROFILE);
            self.remove_var(vars::HOMEDRIVE);
            self.remove_var(vars::HOMEPATH);
        }
        self.remove_var(vars::HOME);
    }
}

impl Environment for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        self.current_dir.clone().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no current directory configured",
            )
        })
    }

    fn is_windows(&self) -> bool {
        self.windows
    }
}
