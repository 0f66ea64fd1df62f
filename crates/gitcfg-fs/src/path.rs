//! Home-directory, tilde and absolute path resolution
//!
//! These are the building blocks the discovery walk uses to turn user
//! supplied names (`~/.gitconfig`, `../other/.git`, `""`) into absolute
//! paths. Every function resolves against an injected [`Environment`].

use std::path::{Component, Path, PathBuf};

use crate::env::{Environment, vars};
use crate::{Error, Result};

/// Resolve the user's home directory.
///
/// On the Windows flavour `USERPROFILE` wins, then the concatenation of
/// `HOMEDRIVE` and `HOMEPATH`. `HOME` is the fallback on every platform.
pub fn resolve_home<E: Environment + ?Sized>(env: &E) -> Result<PathBuf> {
    let mut home = None;

    if env.is_windows() {
        home = env.non_empty_var(vars::USERPROFILE).or_else(|| {
            let drive = env.var(vars::HOMEDRIVE).unwrap_or_default();
            let path = env.var(vars::HOMEPATH).unwrap_or_default();
            Some(drive + &path).filter(|joined| !joined.is_empty())
        });
    }

    let home = home
        .or_else(|| env.non_empty_var(vars::HOME))
        .map(PathBuf::from)
        .ok_or(Error::HomeNotFound)?;
    tracing::trace!(home = %home.display(), windows = env.is_windows(), "Resolved home directory");
    Ok(home)
}

/// Location of `file` under the XDG git configuration directory.
///
/// `$XDG_CONFIG_HOME/git/<file>` when the variable is set, otherwise
/// `<home>/.config/git/<file>`.
pub fn resolve_xdg_config_home<E: Environment + ?Sized>(env: &E, file: &str) -> Result<PathBuf> {
    if let Some(xdg) = env.non_empty_var(vars::XDG_CONFIG_HOME) {
        tracing::trace!(%xdg, file, "Using XDG_CONFIG_HOME");
        return Ok(Path::new(&xdg).join("git").join(file));
    }

    let home = resolve_home(env)?;
    Ok(home.join(".config").join("git").join(file))
}

/// Expand `name` relative to the home directory.
///
/// Absolute paths pass through untouched. `""` and `~` are the home
/// directory itself, `~/rest` (or `~\rest`) is `rest` under home, and any
/// other relative name is joined onto home as-is.
pub fn expand_home<E: Environment + ?Sized>(env: &E, name: impl AsRef<Path>) -> Result<PathBuf> {
    let name = name.as_ref();
    if name.is_absolute() {
        return Ok(name.to_path_buf());
    }

    let home = resolve_home(env)?;
    if name.as_os_str().is_empty() {
        return Ok(home);
    }

    match tilde_rest(name) {
        Some(rest) => Ok(clean(&home.join(rest))),
        None => Ok(clean(&home.join(name))),
    }
}

/// Make `name` absolute against the working directory.
///
/// An empty name is the working directory. Tilde-prefixed names go through
/// [`expand_home`].
pub fn absolute<E: Environment + ?Sized>(env: &E, name: impl AsRef<Path>) -> Result<PathBuf> {
    let name = name.as_ref();
    if name.as_os_str().is_empty() {
        return env.current_dir().map_err(Error::CurrentDir);
    }

    if name.is_absolute() {
        return Ok(name.to_path_buf());
    }

    if tilde_rest(name).is_some() {
        return expand_home(env, name);
    }

    let cwd = env.current_dir().map_err(Error::CurrentDir)?;
    tracing::trace!(name = %name.display(), cwd = %cwd.display(), "Resolving against working directory");
    Ok(clean(&cwd.join(name)))
}

/// Make `name` absolute, resolving relative names against `base` instead of
/// the working directory.
///
/// An empty name yields `base` itself (made absolute).
pub fn absolute_join<E: Environment + ?Sized>(
    env: &E,
    base: impl AsRef<Path>,
    name: impl AsRef<Path>,
) -> Result<PathBuf> {
    let base = base.as_ref();
    let name = name.as_ref();

    if name.as_os_str().is_empty() {
        return make_absolute(env, base);
    }

    if name.is_absolute() {
        return Ok(name.to_path_buf());
    }

    if tilde_rest(name).is_some() {
        return expand_home(env, name);
    }

    make_absolute(env, &base.join(name))
}

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component. Leading `..` of a relative path are kept, `..` at
/// the root stays at the root. The filesystem is never consulted.
pub fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

fn make_absolute<E: Environment + ?Sized>(env: &E, path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(clean(path));
    }
    let cwd = env.current_dir().map_err(Error::CurrentDir)?;
    Ok(clean(&cwd.join(path)))
}

/// The part after `~`, `~/` or `~\`, if `name` has such a prefix.
fn tilde_rest(name: &Path) -> Option<&str> {
    let s = name.to_str()?;
    if s == "~" {
        return Some("");
    }
    s.strip_prefix("~/").or_else(|| s.strip_prefix("~\\"))
}
